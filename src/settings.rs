//! Player preferences
//!
//! Read from LocalStorage on the web; native builds use defaults.

use serde::{Deserialize, Serialize};

/// Front-end preferences (the simulation never reads these)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `KeyboardEvent.code` values that trigger a jump
    pub jump_keys: Vec<String>,
    /// Draw score and level text over the scene
    pub show_hud: bool,
    /// Let the autopilot play (demo/idle mode)
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jump_keys: vec!["Space".to_string(), "ArrowUp".to_string()],
            show_hud: true,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Whether a key code is bound to jump
    pub fn is_jump_key(&self, code: &str) -> bool {
        self.jump_keys.iter().any(|k| k == code)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "hydration_runner_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
