//! Immediate-mode UI helpers
//!
//! Small fixed-layout UI: menu buttons and the in-game HUD bar.
//! Rebuilt every frame, rectangle-based, macroquad for rendering.

mod hud;
mod input;
mod widgets;

pub use hud::*;
pub use input::*;
pub use widgets::*;
