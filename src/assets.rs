//! Startup asset loading
//!
//! Every texture and sound the game needs is loaded up front. Any failure
//! is fatal: the error names the offending file and `main` exits. There is
//! no retry or partial-degradation path.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use crate::game::{Difficulty, Facing, LevelDef};

/// Error type for startup asset loading
#[derive(Debug)]
pub enum AssetError {
    /// A texture file failed to load
    Texture { path: String, message: String },
    /// A sound file failed to load
    Sound { path: String, message: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { path, message } => {
                write!(f, "failed to load texture {}: {}", path, message)
            }
            AssetError::Sound { path, message } => {
                write!(f, "failed to load sound {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for AssetError {}

async fn texture(path: &str) -> Result<Texture2D, AssetError> {
    let tex = load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    tex.set_filter(FilterMode::Nearest);
    Ok(tex)
}

async fn sound(path: &str) -> Result<Sound, AssetError> {
    load_sound(path).await.map_err(|e| AssetError::Sound {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// All textures and sounds, loaded once at startup
pub struct GameAssets {
    pub bg_loading: Texture2D,
    pub bg_menu: Texture2D,
    /// Playfield background per difficulty tier, indexed by `Difficulty::index`
    pub tier_backgrounds: [Texture2D; 3],

    pub mouse_up: Texture2D,
    pub mouse_down: Texture2D,
    pub mouse_left: Texture2D,
    pub mouse_right: Texture2D,
    pub slime: Texture2D,

    pub icon_pause: Texture2D,
    pub icon_resume: Texture2D,
    pub icon_mute: Texture2D,
    pub icon_home: Texture2D,
    pub icon_exit: Texture2D,

    pub snd_start: Sound,
    pub snd_hit: Sound,
    pub snd_win: Sound,
    pub snd_lose: Sound,
}

impl GameAssets {
    /// Load everything; tier backgrounds come from the level definitions
    pub async fn load(levels: &[LevelDef; 3]) -> Result<Self, AssetError> {
        let tier_backgrounds = [
            texture(&levels[Difficulty::Easy.index()].background).await?,
            texture(&levels[Difficulty::Middle.index()].background).await?,
            texture(&levels[Difficulty::Hard.index()].background).await?,
        ];

        Ok(Self {
            bg_loading: texture("assets/backgrounds/loading.png").await?,
            bg_menu: texture("assets/backgrounds/menu.png").await?,
            tier_backgrounds,

            mouse_up: texture("assets/sprites/mouse_up.png").await?,
            mouse_down: texture("assets/sprites/mouse_down.png").await?,
            mouse_left: texture("assets/sprites/mouse_left.png").await?,
            mouse_right: texture("assets/sprites/mouse_right.png").await?,
            slime: texture("assets/sprites/slime.png").await?,

            icon_pause: texture("assets/icons/pause.png").await?,
            icon_resume: texture("assets/icons/resume.png").await?,
            icon_mute: texture("assets/icons/mute.png").await?,
            icon_home: texture("assets/icons/home.png").await?,
            icon_exit: texture("assets/icons/exit.png").await?,

            snd_start: sound("assets/sounds/start.wav").await?,
            snd_hit: sound("assets/sounds/hit.wav").await?,
            snd_win: sound("assets/sounds/win.wav").await?,
            snd_lose: sound("assets/sounds/lose.wav").await?,
        })
    }

    /// Player sprite for the current facing
    pub fn player_texture(&self, facing: Facing) -> &Texture2D {
        match facing {
            Facing::Up => &self.mouse_up,
            Facing::Down => &self.mouse_down,
            Facing::Left => &self.mouse_left,
            Facing::Right => &self.mouse_right,
        }
    }
}
