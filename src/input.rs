//! Per-tick input snapshot
//!
//! The frame loop polls macroquad input every render frame and merges it
//! into a pending `InputFrame`; the simulation consumes one frame per
//! 30 Hz tick. Merging keeps key-press edges that would otherwise fall
//! between ticks when rendering runs faster than the simulation.

use macroquad::prelude::*;

/// A single movement direction for the current tick.
///
/// Movement is mutually exclusive: when several arrow keys are held the
/// first match in left, right, up, down order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Left,
    Right,
    Up,
    Down,
}

/// Everything the simulation wants to know about input for one tick
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Held movement direction, if any
    pub direction: Option<MoveDir>,
    /// Characters typed this tick (filtered to digits by the session)
    pub typed: Vec<char>,
    /// Backspace pressed this tick
    pub backspace: bool,
    /// Enter pressed this tick
    pub confirm: bool,
}

impl InputFrame {
    /// Poll macroquad for the current frame's input
    pub fn poll() -> Self {
        let direction = if is_key_down(KeyCode::Left) {
            Some(MoveDir::Left)
        } else if is_key_down(KeyCode::Right) {
            Some(MoveDir::Right)
        } else if is_key_down(KeyCode::Up) {
            Some(MoveDir::Up)
        } else if is_key_down(KeyCode::Down) {
            Some(MoveDir::Down)
        } else {
            None
        };

        let mut typed = Vec::new();
        while let Some(ch) = get_char_pressed() {
            // Filter control characters; the session narrows to digits
            if ch >= ' ' && ch != '\u{7f}' {
                typed.push(ch);
            }
        }

        Self {
            direction,
            typed,
            backspace: is_key_pressed(KeyCode::Backspace),
            confirm: is_key_pressed(KeyCode::Enter),
        }
    }

    /// Fold another frame's input into this one.
    ///
    /// Edges (typed chars, backspace, enter) accumulate; the held
    /// direction is replaced by the most recent observation.
    pub fn merge(&mut self, other: InputFrame) {
        self.direction = other.direction;
        self.typed.extend(other.typed);
        self.backspace |= other.backspace;
        self.confirm |= other.confirm;
    }

    /// Drain the buffered input for one simulation tick.
    ///
    /// Edges leave the buffer with the returned frame; the held direction
    /// stays behind so later ticks in the same frame keep moving. Call
    /// this only when a tick actually runs, otherwise edges buffered on a
    /// render frame without a tick would be lost.
    pub fn take_tick(&mut self) -> InputFrame {
        let frame = std::mem::take(self);
        self.direction = frame.direction;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_accumulates_edges() {
        let mut pending = InputFrame {
            direction: Some(MoveDir::Left),
            typed: vec!['1'],
            backspace: false,
            confirm: false,
        };
        pending.merge(InputFrame {
            direction: None,
            typed: vec!['2'],
            backspace: true,
            confirm: false,
        });
        assert_eq!(pending.direction, None);
        assert_eq!(pending.typed, vec!['1', '2']);
        assert!(pending.backspace);
        assert!(!pending.confirm);
    }

    #[test]
    fn test_take_tick_drains_edges_keeps_direction() {
        let mut pending = InputFrame {
            direction: Some(MoveDir::Up),
            typed: vec!['8'],
            backspace: true,
            confirm: true,
        };
        let tick = pending.take_tick();
        assert_eq!(tick.typed, vec!['8']);
        assert!(tick.backspace);
        assert!(tick.confirm);
        // Held direction survives for further ticks in the same frame
        assert_eq!(pending.direction, Some(MoveDir::Up));
        assert!(pending.typed.is_empty());
        assert!(!pending.backspace);
        assert!(!pending.confirm);
    }

    #[test]
    fn test_edges_survive_render_frames_without_ticks() {
        // 60 fps rendering against the 30 Hz tick: every other frame runs
        // zero ticks. Edges typed on such a frame must still reach the
        // next tick instead of being drained and discarded.
        const TICK_DT: f32 = 1.0 / 30.0;
        const FRAME_DT: f32 = 1.0 / 60.0;

        let mut pending = InputFrame::default();
        let mut accumulator = 0.0_f32;
        let mut consumed = InputFrame::default();

        // Frame 1: the player types '8' and hits enter; no tick fires
        pending.merge(InputFrame {
            typed: vec!['8'],
            confirm: true,
            ..Default::default()
        });
        accumulator += FRAME_DT;
        while accumulator >= TICK_DT {
            accumulator -= TICK_DT;
            consumed.merge(pending.take_tick());
        }
        assert!(consumed.typed.is_empty(), "no tick ran yet");

        // Frame 2: a tick fires and must see the buffered edges
        pending.merge(InputFrame::default());
        accumulator += FRAME_DT;
        while accumulator >= TICK_DT {
            accumulator -= TICK_DT;
            consumed.merge(pending.take_tick());
        }
        assert_eq!(consumed.typed, vec!['8']);
        assert!(consumed.confirm);
    }
}
