//! Application state machine
//!
//! The arcade flow (loading splash, level select, play, end screen)
//! expressed as explicit states driven by the frame loop instead of
//! blocking waits. All screens share one context struct.

use crate::assets::GameAssets;
use crate::audio::SoundBank;
use crate::game::{Difficulty, GameSession, LevelDef};
use crate::input::InputFrame;
use crate::ui::Hud;

/// Seconds the loading splash stays up
pub const LOADING_SECONDS: f32 = 3.0;

/// Seconds the end screen stays up before returning to the splash
pub const END_SCREEN_SECONDS: f32 = 3.7;

/// Which screen the app is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Menu,
    Playing,
    End,
}

/// Everything the frame loop needs: current screen, loaded content, and
/// the session for the level being played
pub struct AppState {
    pub screen: Screen,
    pub assets: GameAssets,
    pub sounds: SoundBank,
    /// The three difficulty tiers, loaded at startup
    pub levels: [LevelDef; 3],
    pub session: Option<GameSession>,
    /// Tier being played, used to pick the playfield background
    pub current_tier: Option<Difficulty>,
    pub hud: Hud,
    /// Countdown timer for the Loading and End screens
    pub screen_timer: f32,
    /// Input gathered since the last simulation tick
    pub pending_input: InputFrame,
    /// Unspent frame time for the fixed-tick simulation
    pub tick_accumulator: f32,
    /// Set by the HUD exit button; the frame loop breaks on it
    pub quit: bool,
}

impl AppState {
    pub fn new(assets: GameAssets, sounds: SoundBank, levels: [LevelDef; 3]) -> Self {
        Self {
            screen: Screen::Loading,
            assets,
            sounds,
            levels,
            session: None,
            current_tier: None,
            hud: Hud::new(),
            screen_timer: 0.0,
            pending_input: InputFrame::default(),
            tick_accumulator: 0.0,
            quit: false,
        }
    }

    /// Switch screens and reset the shared timer
    pub fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        self.screen_timer = 0.0;
        self.pending_input = InputFrame::default();
        self.tick_accumulator = 0.0;
    }
}
