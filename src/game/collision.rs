//! Axis-separated wall collision
//!
//! Movement resolves one axis at a time so that a diagonal push against a
//! corner slides along the free axis instead of stopping dead. Positions
//! are clamped into the screen after both axes resolve.

use macroquad::math::Vec2;

use super::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geom::Rect;

/// Move a square entity by (dx, dy) against a wall set.
///
/// Each axis applies only if the stepped rect overlaps no wall; the y step
/// is tested against the possibly-updated x position. If both axes are
/// blocked the position is unchanged.
pub fn move_axis_separated(pos: &mut Vec2, size: f32, dx: f32, dy: f32, walls: &[Rect]) {
    let stepped_x = Rect::new(pos.x + dx, pos.y, size, size);
    if !walls.iter().any(|w| stepped_x.overlaps(w)) {
        pos.x += dx;
    }

    let stepped_y = Rect::new(pos.x, pos.y + dy, size, size);
    if !walls.iter().any(|w| stepped_y.overlaps(w)) {
        pos.y += dy;
    }

    pos.x = pos.x.clamp(0.0, SCREEN_WIDTH - size);
    pos.y = pos.y.clamp(0.0, SCREEN_HEIGHT - size);
}
