//! Axis-aligned rectangle geometry
//!
//! Scene space has its origin at the top-left corner with y growing
//! downward, so "up" is negative y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in scene units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Same rectangle with its top edge moved to `y`
    #[inline]
    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Same rectangle translated horizontally by `dx`
    #[inline]
    pub fn shifted_x(self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            ..self
        }
    }
}
