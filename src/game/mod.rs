//! Game logic
//!
//! Everything that runs inside the fixed 30 Hz tick: level data, entities,
//! wall collision, and the per-tick session update. No drawing or audio
//! happens here; the session reports what happened through events and the
//! frame loop reacts.

pub mod collision;
pub mod entity;
pub mod level;
pub mod session;

pub use entity::{Behavior, Enemy, Facing, Player};
pub use level::{Difficulty, LevelDef, LevelError, Question};
pub use session::{GameSession, SessionEvent};

/// Playfield width in pixels
pub const SCREEN_WIDTH: f32 = 900.0;

/// Playfield height in pixels
pub const SCREEN_HEIGHT: f32 = 650.0;

/// Simulation ticks per second
pub const TICK_RATE: u32 = 30;

/// Seconds per simulation tick
pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
