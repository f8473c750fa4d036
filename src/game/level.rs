//! Level loading and validation
//!
//! Each difficulty tier is a RON file under `assets/levels/` fixing the
//! wall layout, the player/enemy speeds, the enemy count, the background
//! image, and the arithmetic question that opens the exit door. Settings
//! are immutable for the duration of a level attempt.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geom::Rect;

/// The exit door zone, shared by all tiers
pub const EXIT_ZONE: Rect = Rect::new(350.0, 0.0, 200.0, 20.0);

/// Standing here with the door closed brings up the question prompt
pub const QUESTION_ZONE: Rect = Rect::new(400.0, 50.0, 100.0, 50.0);

/// Validation limits for level files
pub mod limits {
    /// Maximum number of walls in a level
    pub const MAX_WALLS: usize = 64;
    /// Maximum number of enemies in a level
    pub const MAX_ENEMIES: usize = 16;
    /// Maximum prompt/answer string length
    pub const MAX_STRING_LEN: usize = 128;
}

/// The three difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy = 0,
    Middle = 1,
    Hard = 2,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Middle, Difficulty::Hard];

    /// Display label for the menu button
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Middle => "Middle",
            Difficulty::Hard => "Difficult",
        }
    }

    /// Level file path for this tier
    pub fn level_path(&self) -> &'static str {
        match self {
            Difficulty::Easy => "assets/levels/easy.ron",
            Difficulty::Middle => "assets/levels/middle.ron",
            Difficulty::Hard => "assets/levels/hard.ron",
        }
    }

    /// Index into per-tier arrays
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The arithmetic question gating the exit door
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Expected answer, compared as a digit string
    pub answer: String,
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Validation(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::Parse(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {}", e),
            LevelError::Parse(e) => write!(f, "Parse error: {}", e),
            LevelError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// A loaded difficulty tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    /// Tier name, for logging
    pub name: String,
    /// Background image path
    pub background: String,
    /// Player movement speed, pixels per tick
    pub player_speed: f32,
    /// Enemy base speed, pixels per tick
    pub enemy_speed: f32,
    /// How many enemies to spawn
    pub enemy_count: usize,
    pub question: Question,
    /// Static wall rectangles
    pub walls: Vec<Rect>,
}

impl LevelDef {
    /// Parse and validate a level from RON text
    pub fn from_ron_str(text: &str) -> Result<Self, LevelError> {
        let def: LevelDef = ron::from_str(text)?;
        def.validate()?;
        Ok(def)
    }

    /// Load a level file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    fn validate(&self) -> Result<(), LevelError> {
        let fail = |msg: String| Err(LevelError::Validation(msg));

        if self.name.is_empty() {
            return fail("level name is empty".into());
        }
        if self.background.is_empty() {
            return fail(format!("{}: background path is empty", self.name));
        }
        if !(self.player_speed.is_finite() && self.player_speed > 0.0) {
            return fail(format!("{}: invalid player_speed {}", self.name, self.player_speed));
        }
        if !(self.enemy_speed.is_finite() && self.enemy_speed > 0.0) {
            return fail(format!("{}: invalid enemy_speed {}", self.name, self.enemy_speed));
        }
        if self.enemy_count == 0 || self.enemy_count > limits::MAX_ENEMIES {
            return fail(format!("{}: enemy_count {} out of range", self.name, self.enemy_count));
        }

        if self.question.prompt.is_empty() || self.question.prompt.len() > limits::MAX_STRING_LEN {
            return fail(format!("{}: bad question prompt", self.name));
        }
        if self.question.answer.is_empty()
            || !self.question.answer.chars().all(|c| c.is_ascii_digit())
        {
            return fail(format!(
                "{}: question answer must be a digit string, got {:?}",
                self.name, self.question.answer
            ));
        }

        if self.walls.len() > limits::MAX_WALLS {
            return fail(format!("{}: too many walls ({})", self.name, self.walls.len()));
        }
        for (i, w) in self.walls.iter().enumerate() {
            let finite = w.x.is_finite() && w.y.is_finite() && w.w.is_finite() && w.h.is_finite();
            if !finite || w.w <= 0.0 || w.h <= 0.0 {
                return fail(format!("{}: wall[{}] has invalid extent {:?}", self.name, i, w));
            }
            if w.x < 0.0 || w.y < 0.0 || w.right() > SCREEN_WIDTH || w.bottom() > SCREEN_HEIGHT {
                return fail(format!("{}: wall[{}] out of screen bounds {:?}", self.name, i, w));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped(tier: Difficulty) -> LevelDef {
        LevelDef::load(tier.level_path())
            .unwrap_or_else(|e| panic!("failed to load {}: {}", tier.level_path(), e))
    }

    #[test]
    fn test_easy_tier() {
        let def = shipped(Difficulty::Easy);
        assert_eq!(def.walls.len(), 8);
        assert_eq!(def.question.prompt, "5 + 3 = ?");
        assert_eq!(def.question.answer, "8");
        assert_eq!(def.player_speed, 5.0);
        assert_eq!(def.enemy_speed, 2.0);
        assert_eq!(def.enemy_count, 2);
    }

    #[test]
    fn test_middle_tier() {
        let def = shipped(Difficulty::Middle);
        assert_eq!(def.walls.len(), 11);
        assert_eq!(def.question.answer, "36");
        assert_eq!(def.enemy_count, 3);
    }

    #[test]
    fn test_hard_tier() {
        let def = shipped(Difficulty::Hard);
        assert_eq!(def.walls.len(), 20);
        assert_eq!(def.question.answer, "60");
        assert_eq!(def.enemy_count, 4);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let def = shipped(Difficulty::Easy);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.ron");
        let text = ron::ser::to_string_pretty(&def, Default::default()).unwrap();
        std::fs::write(&path, text).unwrap();

        let loaded = LevelDef::load(&path).unwrap();
        assert_eq!(loaded.name, def.name);
        assert_eq!(loaded.walls.len(), def.walls.len());
        assert_eq!(loaded.question.answer, def.question.answer);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            LevelDef::load("assets/levels/does-not-exist.ron"),
            Err(LevelError::Io(_))
        ));
    }

    fn base_level() -> LevelDef {
        LevelDef {
            name: "test".into(),
            background: "assets/backgrounds/easy.png".into(),
            player_speed: 5.0,
            enemy_speed: 2.0,
            enemy_count: 2,
            question: Question {
                prompt: "1 + 1 = ?".into(),
                answer: "2".into(),
            },
            walls: vec![Rect::new(100.0, 150.0, 300.0, 20.0)],
        }
    }

    #[test]
    fn test_validation_accepts_base() {
        assert!(base_level().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_digit_answer() {
        let mut def = base_level();
        def.question.answer = "eight".into();
        assert!(matches!(def.validate(), Err(LevelError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_zero_enemies() {
        let mut def = base_level();
        def.enemy_count = 0;
        assert!(matches!(def.validate(), Err(LevelError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_offscreen_wall() {
        let mut def = base_level();
        def.walls.push(Rect::new(800.0, 600.0, 200.0, 20.0));
        assert!(matches!(def.validate(), Err(LevelError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_negative_speed() {
        let mut def = base_level();
        def.player_speed = -1.0;
        assert!(matches!(def.validate(), Err(LevelError::Validation(_))));
    }

    #[test]
    fn test_parse_error_reported() {
        assert!(matches!(
            LevelDef::from_ron_str("(name: \"broken\""),
            Err(LevelError::Parse(_))
        ));
    }
}
