//! Sound cues with a global mute gate

use macroquad::audio::{play_sound_once, stop_sound, Sound};

/// One-shot sound cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Played when the loading splash gives way to the menu
    Start,
    /// Enemy caught the player
    Hit,
    /// Player escaped
    Win,
    /// End-of-run jingle after a loss
    Lose,
}

/// The four game cues plus the mute flag.
///
/// Muting stops anything currently playing and swallows later `play`
/// calls until unmuted.
pub struct SoundBank {
    start: Sound,
    hit: Sound,
    win: Sound,
    lose: Sound,
    muted: bool,
}

impl SoundBank {
    pub fn new(start: Sound, hit: Sound, win: Sound, lose: Sound) -> Self {
        Self {
            start,
            hit,
            win,
            lose,
            muted: false,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if self.muted {
            self.stop_all();
        }
    }

    fn cue_sound(&self, cue: Cue) -> &Sound {
        match cue {
            Cue::Start => &self.start,
            Cue::Hit => &self.hit,
            Cue::Win => &self.win,
            Cue::Lose => &self.lose,
        }
    }

    /// Play a cue once; no-op while muted
    pub fn play(&self, cue: Cue) {
        if self.muted {
            return;
        }
        play_sound_once(self.cue_sound(cue));
    }

    /// Stop every cue that might be playing
    pub fn stop_all(&self) {
        stop_sound(&self.start);
        stop_sound(&self.hit);
        stop_sound(&self.win);
        stop_sound(&self.lose);
    }
}
