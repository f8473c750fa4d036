//! Escape from the Lab
//!
//! A top-down maze-chase arcade game: steer the lab mouse through the
//! maze, keep away from the slimes, answer the arithmetic question to
//! open the exit door, and escape. The simulation runs at a fixed 30 Hz
//! tick; rendering runs at the display rate.

mod app;
mod assets;
mod audio;
mod game;
mod geom;
mod input;
mod ui;

use macroquad::prelude::*;

use app::{AppState, Screen, END_SCREEN_SECONDS, LOADING_SECONDS};
use assets::GameAssets;
use audio::{Cue, SoundBank};
use game::level::{EXIT_ZONE, QUESTION_ZONE};
use game::{
    Difficulty, GameSession, LevelDef, LevelError, SessionEvent, SCREEN_HEIGHT, SCREEN_WIDTH,
    TICK_DT,
};
use input::InputFrame;
use ui::{draw_text_centered, text_button, Hud, HudAction, MouseState};

fn window_conf() -> Conf {
    Conf {
        window_title: "Escape from the Lab".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Load the three difficulty tiers from disk
fn load_levels() -> Result<[LevelDef; 3], LevelError> {
    Ok([
        LevelDef::load(Difficulty::Easy.level_path())?,
        LevelDef::load(Difficulty::Middle.level_path())?,
        LevelDef::load(Difficulty::Hard.level_path())?,
    ])
}

#[macroquad::main(window_conf)]
async fn main() {
    // Startup failures are fatal: report the file and bail out
    let levels = match load_levels() {
        Ok(levels) => levels,
        Err(e) => {
            eprintln!("fatal: {}", e);
            return;
        }
    };
    let assets = match GameAssets::load(&levels).await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("fatal: {}", e);
            return;
        }
    };
    let sounds = SoundBank::new(
        assets.snd_start.clone(),
        assets.snd_hit.clone(),
        assets.snd_win.clone(),
        assets.snd_lose.clone(),
    );

    let mut state = AppState::new(assets, sounds, levels);

    while !state.quit {
        clear_background(BLACK);
        let mouse = MouseState::poll();

        match state.screen {
            Screen::Loading => {
                draw_loading(&state.assets);
                state.screen_timer += get_frame_time();
                if state.screen_timer >= LOADING_SECONDS {
                    // The start cue plays as the splash gives way to the menu
                    state.sounds.play(Cue::Start);
                    state.enter(Screen::Menu);
                }
            }
            Screen::Menu => {
                if let Some(tier) = draw_menu(&state.assets, &mouse) {
                    let level = state.levels[tier.index()].clone();
                    state.session = Some(GameSession::new(level));
                    state.current_tier = Some(tier);
                    state.enter(Screen::Playing);
                }
            }
            Screen::Playing => update_and_draw_playing(&mut state, &mouse),
            Screen::End => {
                if let Some(session) = state.session.as_ref() {
                    draw_end(session);
                }
                state.screen_timer += get_frame_time();
                if state.screen_timer >= END_SCREEN_SECONDS {
                    state.session = None;
                    state.current_tier = None;
                    state.enter(Screen::Loading);
                }
            }
        }

        next_frame().await;
    }
}

/// Step the simulation at 30 Hz, react to events, draw the playfield and
/// HUD, and apply any HUD action
fn update_and_draw_playing(state: &mut AppState, mouse: &MouseState) {
    let Some(tier) = state.current_tier else {
        state.enter(Screen::Menu);
        return;
    };

    state.pending_input.merge(InputFrame::poll());

    // Cap the accumulator so a long hitch doesn't burst dozens of ticks
    state.tick_accumulator = (state.tick_accumulator + get_frame_time()).min(0.25);

    let mut events = Vec::new();
    if let Some(session) = state.session.as_mut() {
        // Buffered edges drain only when a tick runs; on render frames
        // with no tick they stay queued for the next one
        while state.tick_accumulator >= TICK_DT {
            state.tick_accumulator -= TICK_DT;
            session.update(&state.pending_input.take_tick());
        }
        events = session.drain_events();
    }

    for event in events {
        match event {
            SessionEvent::PlayerHit => state.sounds.play(Cue::Hit),
            SessionEvent::Escaped => state.sounds.play(Cue::Win),
            SessionEvent::QuestionShown | SessionEvent::DoorOpened => {}
        }
    }

    let action = match state.session.as_ref() {
        Some(session) => draw_playing(session, &state.assets, tier, &state.hud, mouse),
        None => None,
    };

    if state.sounds.muted() {
        draw_text("MUTED", 262.0, 38.0, 20.0, RED);
    }

    match action {
        Some(HudAction::Pause) => {
            if let Some(session) = state.session.as_mut() {
                session.paused = true;
            }
        }
        Some(HudAction::Resume) => {
            if let Some(session) = state.session.as_mut() {
                session.paused = false;
            }
        }
        Some(HudAction::ToggleMute) => state.sounds.toggle_mute(),
        Some(HudAction::Home) => {
            state.session = None;
            state.current_tier = None;
            state.enter(Screen::Menu);
            return;
        }
        Some(HudAction::Exit) => {
            state.quit = true;
            return;
        }
        None => {}
    }

    let outcome = state.session.as_ref().map(|s| (s.finished(), s.game_won));
    if let Some((true, won)) = outcome {
        state.sounds.stop_all();
        state.sounds.play(if won { Cue::Win } else { Cue::Lose });
        state.enter(Screen::End);
    }
}

fn draw_background(texture: &Texture2D) {
    draw_texture_ex(
        texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(SCREEN_WIDTH, SCREEN_HEIGHT)),
            ..Default::default()
        },
    );
}

fn draw_loading(assets: &GameAssets) {
    draw_background(&assets.bg_loading);
    draw_text_centered(
        "Escape from the Lab",
        SCREEN_WIDTH * 0.5,
        SCREEN_HEIGHT / 3.0,
        64.0,
        WHITE,
    );
    draw_text_centered(
        "Loading...",
        SCREEN_WIDTH * 0.5,
        SCREEN_HEIGHT - 80.0,
        36.0,
        SKYBLUE,
    );
}

/// Difficulty select; returns the clicked tier
fn draw_menu(assets: &GameAssets, mouse: &MouseState) -> Option<Difficulty> {
    draw_background(&assets.bg_menu);

    let colors = [GREEN, YELLOW, RED];
    let mut picked = None;
    for (i, tier) in Difficulty::ALL.iter().enumerate() {
        let rect = geom::Rect::new(
            SCREEN_WIDTH * 0.5 - 100.0,
            200.0 + 100.0 * i as f32,
            200.0,
            50.0,
        );
        if text_button(mouse, rect, tier.label(), colors[i]) {
            picked = Some(*tier);
        }
    }
    picked
}

fn draw_playing(
    session: &GameSession,
    assets: &GameAssets,
    tier: Difficulty,
    hud: &Hud,
    mouse: &MouseState,
) -> Option<HudAction> {
    draw_background(&assets.tier_backgrounds[tier.index()]);

    for wall in &session.level.walls {
        draw_rectangle(wall.x, wall.y, wall.w, wall.h, WHITE);
    }

    // Exit door: green when open, red with the yellow question trigger
    // while still locked
    if session.door_open {
        draw_rectangle(EXIT_ZONE.x, EXIT_ZONE.y, EXIT_ZONE.w, EXIT_ZONE.h, GREEN);
    } else {
        draw_rectangle(EXIT_ZONE.x, EXIT_ZONE.y, EXIT_ZONE.w, EXIT_ZONE.h, RED);
        draw_rectangle(
            QUESTION_ZONE.x,
            QUESTION_ZONE.y,
            QUESTION_ZONE.w,
            QUESTION_ZONE.h,
            YELLOW,
        );
    }

    let player = &session.player;
    draw_texture_ex(
        assets.player_texture(player.facing),
        player.pos.x,
        player.pos.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(game::entity::PLAYER_SIZE, game::entity::PLAYER_SIZE)),
            ..Default::default()
        },
    );

    for enemy in &session.enemies {
        draw_texture_ex(
            &assets.slime,
            enemy.pos.x,
            enemy.pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(game::entity::ENEMY_SIZE, game::entity::ENEMY_SIZE)),
                ..Default::default()
            },
        );
    }

    if session.show_question {
        draw_text_centered(
            &session.level.question.prompt,
            SCREEN_WIDTH * 0.5,
            SCREEN_HEIGHT * 0.5 - 60.0,
            28.0,
            BLACK,
        );
        draw_text_centered(
            &session.answer_input,
            SCREEN_WIDTH * 0.5,
            SCREEN_HEIGHT * 0.5,
            28.0,
            BLUE,
        );
    }

    draw_text(
        &format!("Score: {}", session.final_score()),
        10.0,
        SCREEN_HEIGHT - 40.0,
        28.0,
        BLACK,
    );

    hud.draw(mouse, assets)
}

fn draw_end(session: &GameSession) {
    let (message, color) = if session.game_won {
        ("I managed to escape", GREEN)
    } else {
        ("Game Over", RED)
    };
    draw_text_centered(message, SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5 - 50.0, 60.0, color);
    draw_text_centered(
        &format!("Final Score: {}", session.final_score()),
        SCREEN_WIDTH * 0.5,
        SCREEN_HEIGHT * 0.5 + 80.0,
        40.0,
        WHITE,
    );
}
