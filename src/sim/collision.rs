//! Collision detection between the player and obstacles
//!
//! Overlap is tested on open intervals: two rectangles that only share an
//! edge or a corner do not collide.

use glam::BVec2;

use super::geom::Rect;
use super::state::Obstacle;

/// Check whether two rectangles strictly overlap on both axes
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let separated_low: BVec2 = a.max().cmple(b.min());
    let separated_high: BVec2 = b.max().cmple(a.min());
    !(separated_low.any() || separated_high.any())
}

/// Index of the first obstacle (oldest first) overlapping `player`
pub fn first_collision(player: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| rects_overlap(player, &obstacle.rect))
}
