//! Player and enemy entities
//!
//! Plain data structs plus their per-tick movement. Enemy pursuit is
//! enum-dispatched over three behaviors; enemies apply raw displacement
//! with no wall test (they phase through walls, as the game intends).

use macroquad::math::Vec2;

use super::collision::move_axis_separated;
use crate::geom::Rect;

/// Player sprite size in pixels
pub const PLAYER_SIZE: f32 = 45.0;

/// Enemy sprite size in pixels
pub const ENEMY_SIZE: f32 = 40.0;

/// Speed multiplier for the fast-chase variant
const FAST_FACTOR: f32 = 1.2;

/// Lateral sway strength for the zigzag variant
const ZIGZAG_SWAY: f32 = 0.3;

/// Updates between lateral direction flips for the zigzag variant
const ZIGZAG_PERIOD: u32 = 30;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// The player-controlled mouse
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
    pub facing: Facing,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            facing: Facing::Down,
        }
    }

    /// Bounding square at the current position
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Move by (dx, dy) respecting walls and screen bounds
    pub fn step(&mut self, dx: f32, dy: f32, walls: &[Rect]) {
        move_axis_separated(&mut self.pos, PLAYER_SIZE, dx, dy, walls);
    }
}

/// Enemy pursuit behavior
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    /// Straight pursuit at base speed
    Chase,
    /// Straight pursuit at 1.2x base speed
    FastChase,
    /// Pursuit with lateral sway that flips side every 30 updates
    Zigzag { dir: f32, counter: u32 },
}

impl Behavior {
    /// Fresh zigzag state (sway starts to one side)
    pub fn zigzag() -> Self {
        Behavior::Zigzag {
            dir: 1.0,
            counter: 0,
        }
    }
}

/// A pursuing slime
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub speed: f32,
    pub behavior: Behavior,
}

impl Enemy {
    /// Build an enemy; the fast variant bakes its speed factor in here
    pub fn new(pos: Vec2, base_speed: f32, behavior: Behavior) -> Self {
        let speed = match behavior {
            Behavior::FastChase => base_speed * FAST_FACTOR,
            _ => base_speed,
        };
        Self {
            pos,
            speed,
            behavior,
        }
    }

    /// Bounding square at the current position
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    /// Advance one tick toward the target position.
    ///
    /// The pursuit vector runs from the enemy's rect center to the target;
    /// each axis of the scaled step is truncated toward zero so sub-pixel
    /// components drop out. A target at distance zero leaves the position
    /// unchanged.
    pub fn update(&mut self, target: Vec2) {
        let r = self.rect();
        let delta = target - Vec2::new(r.center_x(), r.center_y());
        let dist = delta.length();
        if dist == 0.0 {
            return;
        }
        let heading = delta / dist;

        let step = match &mut self.behavior {
            Behavior::Chase | Behavior::FastChase => heading,
            Behavior::Zigzag { dir, counter } => {
                if *counter >= ZIGZAG_PERIOD {
                    *dir = -*dir;
                    *counter = 0;
                }
                *counter += 1;
                let perpendicular = Vec2::new(-heading.y, heading.x);
                heading + perpendicular * ZIGZAG_SWAY * *dir
            }
        };

        self.pos.x += (step.x * self.speed).trunc();
        self.pos.y += (step.y * self.speed).trunc();
    }
}
