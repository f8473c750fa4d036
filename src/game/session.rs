//! Per-level game session
//!
//! Owns the entities and flags for one level attempt and advances them one
//! 30 Hz tick at a time. The session never draws or plays audio; it pushes
//! [`SessionEvent`]s that the frame loop drains and reacts to.

use macroquad::math::Vec2;
use macroquad::rand::gen_range;

use super::entity::{Behavior, Enemy, Player, PLAYER_SIZE};
use super::level::{LevelDef, EXIT_ZONE, QUESTION_ZONE};
use super::{Facing, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};
use crate::input::{InputFrame, MoveDir};

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Player entered the question zone with the door closed
    QuestionShown,
    /// Correct answer submitted
    DoorOpened,
    /// An enemy caught the player (terminal)
    PlayerHit,
    /// Player reached the open exit (terminal)
    Escaped,
}

/// One level attempt
pub struct GameSession {
    pub level: LevelDef,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Ticks survived; divide by the tick rate for the displayed score
    pub score: u32,
    pub door_open: bool,
    /// The question prompt is on screen awaiting an answer
    pub show_question: bool,
    /// Digits typed so far
    pub answer_input: String,
    /// Gates `update`; rendering and HUD input continue while paused
    pub paused: bool,
    pub game_over: bool,
    pub game_won: bool,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Start a session with randomized enemy spawns
    pub fn new(level: LevelDef) -> Self {
        let spawns = random_spawns(level.enemy_count);
        Self::with_spawns(level, spawns)
    }

    /// Start a session with explicit spawns (randomization injected by `new`)
    pub fn with_spawns(level: LevelDef, spawns: Vec<(Vec2, Behavior)>) -> Self {
        let start = Vec2::new(
            (SCREEN_WIDTH - PLAYER_SIZE) * 0.5,
            (SCREEN_HEIGHT - PLAYER_SIZE) * 0.5,
        );
        let player = Player::new(start, level.player_speed);
        let enemies = spawns
            .into_iter()
            .map(|(pos, behavior)| Enemy::new(pos, level.enemy_speed, behavior))
            .collect();
        Self {
            level,
            player,
            enemies,
            score: 0,
            door_open: false,
            show_question: false,
            answer_input: String::new(),
            paused: false,
            game_over: false,
            game_won: false,
            events: Vec::new(),
        }
    }

    /// Has the session reached a terminal state?
    pub fn finished(&self) -> bool {
        self.game_over || self.game_won
    }

    /// Displayed score: whole seconds survived
    pub fn final_score(&self) -> u32 {
        self.score / TICK_RATE
    }

    /// Take the events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one tick. No-op while paused or after a terminal state.
    pub fn update(&mut self, input: &InputFrame) {
        if self.paused || self.finished() {
            return;
        }

        if self.show_question {
            self.handle_answer_input(input);
        }

        let speed = self.player.speed;
        let (dx, dy) = match input.direction {
            Some(MoveDir::Left) => {
                self.player.facing = Facing::Left;
                (-speed, 0.0)
            }
            Some(MoveDir::Right) => {
                self.player.facing = Facing::Right;
                (speed, 0.0)
            }
            Some(MoveDir::Up) => {
                self.player.facing = Facing::Up;
                (0.0, -speed)
            }
            Some(MoveDir::Down) => {
                self.player.facing = Facing::Down;
                (0.0, speed)
            }
            None => (0.0, 0.0),
        };
        self.player.step(dx, dy, &self.level.walls);

        let player_rect = self.player.rect();

        if !self.door_open && !self.show_question && player_rect.overlaps(&QUESTION_ZONE) {
            self.show_question = true;
            self.events.push(SessionEvent::QuestionShown);
        }

        for enemy in &mut self.enemies {
            enemy.update(self.player.pos);
            if enemy.rect().overlaps(&player_rect) {
                self.game_over = true;
                self.events.push(SessionEvent::PlayerHit);
            }
        }

        if self.door_open && player_rect.overlaps(&EXIT_ZONE) {
            self.game_won = true;
            self.events.push(SessionEvent::Escaped);
        }

        self.score += 1;
    }

    fn handle_answer_input(&mut self, input: &InputFrame) {
        for ch in &input.typed {
            if ch.is_ascii_digit() {
                self.answer_input.push(*ch);
            }
        }
        if input.backspace {
            self.answer_input.pop();
        }
        if input.confirm {
            self.submit_answer();
        }
    }

    /// Compare the typed digits against the expected answer.
    ///
    /// A correct answer opens the door and dismisses the prompt; a wrong
    /// answer just clears the input, with no lockout or penalty.
    fn submit_answer(&mut self) {
        if self.answer_input == self.level.question.answer {
            self.door_open = true;
            self.show_question = false;
            self.events.push(SessionEvent::DoorOpened);
        }
        self.answer_input.clear();
    }
}

/// Pick `count` spawn points on random screen edges with random behaviors
fn random_spawns(count: usize) -> Vec<(Vec2, Behavior)> {
    (0..count)
        .map(|_| {
            let pos = match gen_range(0, 4) {
                0 => Vec2::new(gen_range(50.0, SCREEN_WIDTH - 50.0), 50.0),
                1 => Vec2::new(gen_range(50.0, SCREEN_WIDTH - 50.0), SCREEN_HEIGHT - 60.0),
                2 => Vec2::new(50.0, gen_range(50.0, SCREEN_HEIGHT - 50.0)),
                _ => Vec2::new(SCREEN_WIDTH - 60.0, gen_range(50.0, SCREEN_HEIGHT - 50.0)),
            };
            let behavior = match gen_range(0, 3) {
                0 => Behavior::Chase,
                1 => Behavior::FastChase,
                _ => Behavior::zigzag(),
            };
            (pos, behavior)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::level::Question;

    fn test_level() -> LevelDef {
        LevelDef {
            name: "test".into(),
            background: "assets/backgrounds/easy.png".into(),
            player_speed: 5.0,
            enemy_speed: 2.0,
            enemy_count: 1,
            question: Question {
                prompt: "5 + 3 = ?".into(),
                answer: "8".into(),
            },
            walls: Vec::new(),
        }
    }

    /// Session with one enemy parked far away in a corner
    fn quiet_session() -> GameSession {
        GameSession::with_spawns(
            test_level(),
            vec![(Vec2::new(850.0, 600.0), Behavior::Chase)],
        )
    }

    fn idle() -> InputFrame {
        InputFrame::default()
    }

    fn typed(chars: &str, confirm: bool) -> InputFrame {
        InputFrame {
            typed: chars.chars().collect(),
            confirm,
            ..Default::default()
        }
    }

    #[test]
    fn test_score_counts_ticks() {
        let mut s = quiet_session();
        for _ in 0..60 {
            s.update(&idle());
        }
        assert_eq!(s.score, 60);
        assert_eq!(s.final_score(), 2);
    }

    #[test]
    fn test_pause_gates_updates() {
        let mut s = quiet_session();
        s.paused = true;
        let before = s.player.pos;
        s.update(&InputFrame {
            direction: Some(MoveDir::Left),
            ..Default::default()
        });
        assert_eq!(s.score, 0);
        assert_eq!(s.player.pos, before);
    }

    #[test]
    fn test_question_zone_shows_prompt_once() {
        let mut s = quiet_session();
        // Teleport next to the question zone and walk in
        s.player.pos = Vec2::new(QUESTION_ZONE.x, QUESTION_ZONE.bottom() + 1.0);
        while !s.show_question {
            s.update(&InputFrame {
                direction: Some(MoveDir::Up),
                ..Default::default()
            });
        }
        let events = s.drain_events();
        assert!(events.contains(&SessionEvent::QuestionShown));

        // Staying in the zone does not re-emit
        s.update(&idle());
        assert!(!s.drain_events().contains(&SessionEvent::QuestionShown));
    }

    #[test]
    fn test_correct_answer_opens_door() {
        let mut s = quiet_session();
        s.show_question = true;
        s.update(&typed("8", false));
        assert_eq!(s.answer_input, "8");
        s.update(&typed("", true));
        assert!(s.door_open);
        assert!(!s.show_question);
        assert!(s.answer_input.is_empty());
        assert!(s.drain_events().contains(&SessionEvent::DoorOpened));
    }

    #[test]
    fn test_wrong_answer_clears_input_keeps_door_shut() {
        let mut s = quiet_session();
        s.show_question = true;
        s.update(&typed("7", true));
        assert!(!s.door_open);
        assert!(s.show_question);
        assert!(s.answer_input.is_empty());
        assert!(!s.drain_events().contains(&SessionEvent::DoorOpened));
    }

    #[test]
    fn test_non_digit_input_ignored() {
        let mut s = quiet_session();
        s.show_question = true;
        s.update(&typed("a8b!", false));
        assert_eq!(s.answer_input, "8");
    }

    #[test]
    fn test_backspace_pops_digit() {
        let mut s = quiet_session();
        s.show_question = true;
        s.update(&typed("36", false));
        s.update(&InputFrame {
            backspace: true,
            ..Default::default()
        });
        assert_eq!(s.answer_input, "3");
    }

    #[test]
    fn test_enemy_contact_is_terminal() {
        let mut s = GameSession::with_spawns(
            test_level(),
            // Spawn right on top of the player start
            vec![(
                Vec2::new((SCREEN_WIDTH - PLAYER_SIZE) * 0.5, (SCREEN_HEIGHT - PLAYER_SIZE) * 0.5),
                Behavior::Chase,
            )],
        );
        s.update(&idle());
        assert!(s.game_over);
        assert!(s.drain_events().contains(&SessionEvent::PlayerHit));

        // Further updates are frozen
        let score = s.score;
        let pos = s.player.pos;
        s.update(&InputFrame {
            direction: Some(MoveDir::Right),
            ..Default::default()
        });
        assert_eq!(s.score, score);
        assert_eq!(s.player.pos, pos);
    }

    #[test]
    fn test_exit_requires_open_door() {
        let mut s = quiet_session();
        s.player.pos = Vec2::new(EXIT_ZONE.x + 10.0, 0.0);
        s.update(&idle());
        assert!(!s.game_won, "closed door must not end the game");

        s.door_open = true;
        s.update(&idle());
        assert!(s.game_won);
        assert!(s.drain_events().contains(&SessionEvent::Escaped));
    }

    #[test]
    fn test_facing_follows_direction() {
        let mut s = quiet_session();
        s.update(&InputFrame {
            direction: Some(MoveDir::Left),
            ..Default::default()
        });
        assert_eq!(s.player.facing, Facing::Left);
    }

    #[test]
    fn test_random_spawns_shape() {
        let spawns = random_spawns(4);
        assert_eq!(spawns.len(), 4);
        for (pos, _) in spawns {
            assert!(pos.x >= 0.0 && pos.x <= SCREEN_WIDTH);
            assert!(pos.y >= 0.0 && pos.y <= SCREEN_HEIGHT);
        }
    }
}
