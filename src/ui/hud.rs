//! In-game HUD bar
//!
//! Five fixed-position icon buttons along the top-left edge. The HUD stays
//! live while the game is paused so the player can always resume, mute,
//! return home, or quit.

use super::{icon_button, MouseState};
use crate::assets::GameAssets;
use crate::geom::Rect;

/// Action triggered by a HUD button click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAction {
    Pause,
    Resume,
    ToggleMute,
    Home,
    Exit,
}

const BUTTON_SIZE: f32 = 40.0;
const BUTTON_Y: f32 = 10.0;
const BUTTON_SPACING: f32 = 50.0;

/// Fixed layout for the HUD buttons
pub struct Hud {
    pause: Rect,
    resume: Rect,
    mute: Rect,
    home: Rect,
    exit: Rect,
}

impl Hud {
    pub fn new() -> Self {
        let slot = |i: usize| {
            Rect::new(
                10.0 + BUTTON_SPACING * i as f32,
                BUTTON_Y,
                BUTTON_SIZE,
                BUTTON_SIZE,
            )
        };
        Self {
            pause: slot(0),
            resume: slot(1),
            mute: slot(2),
            home: slot(3),
            exit: slot(4),
        }
    }

    /// Draw the bar and report the clicked button, if any
    pub fn draw(&self, mouse: &MouseState, assets: &GameAssets) -> Option<HudAction> {
        let mut action = None;
        if icon_button(mouse, self.pause, &assets.icon_pause) {
            action = Some(HudAction::Pause);
        }
        if icon_button(mouse, self.resume, &assets.icon_resume) {
            action = Some(HudAction::Resume);
        }
        if icon_button(mouse, self.mute, &assets.icon_mute) {
            action = Some(HudAction::ToggleMute);
        }
        if icon_button(mouse, self.home, &assets.icon_home) {
            action = Some(HudAction::Home);
        }
        if icon_button(mouse, self.exit, &assets.icon_exit) {
            action = Some(HudAction::Exit);
        }
        action
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
