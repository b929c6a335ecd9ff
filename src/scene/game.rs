//! Game scene: owns one simulation run and the HUD around it
//!
//! The scene translates key states into `TickInput`, steps the simulation
//! at a fixed rate through an accumulator, and draws the result. All
//! gameplay rules live in `sim`; nothing here touches an entity directly.

use macroquad::audio::play_sound_once;
use macroquad::prelude::*;

use crate::app::{App, Scene, SceneRequest};
use crate::assets::{Assets, draw_sprite};
use crate::consts::{MAX_SUBSTEPS, TICK_DT};
use crate::sim::{GameState, TickEvent, TickInput, tick};
use crate::tuning::Tuning;

pub struct GameScene {
    seed: u64,
    tuning: Tuning,
    state: GameState,
    input: TickInput,
    accumulator: f32,
}

impl GameScene {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            state: GameState::new(seed, tuning.clone()),
            tuning,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }
}

impl Scene for GameScene {
    fn initialize(&mut self) {
        log::info!("initializing the game scene (seed {})", self.seed);
        self.state = GameState::new(self.seed, self.tuning.clone());
        self.input = TickInput::default();
        self.accumulator = 0.0;
    }

    fn handle_input(&mut self, _app: &mut App) {
        let right = is_key_down(KeyCode::Right) as i32;
        let left = is_key_down(KeyCode::Left) as i32;
        self.input.dir = (right - left) as f32;
        self.input.fire = is_key_down(KeyCode::Space);
    }

    fn update(&mut self, app: &mut App, assets: &Assets) {
        // Fixed-step: gameplay is tick-exact whatever the display rate.
        self.accumulator += get_frame_time().min(0.1);
        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= TICK_DT;
            substeps += 1;
        }

        for event in self.state.drain_events() {
            if event == TickEvent::ShotFired {
                // Guarded no-op when the sound failed to load
                if let Some(sound) = &assets.shoot {
                    play_sound_once(sound);
                }
            }
        }

        // Lives exhausted: hand the final score to the game-over scene.
        // The swap itself happens at the top of the next frame.
        if self.state.game_over() {
            app.request_scene(SceneRequest::GameOver {
                score: self.state.score,
            });
        }
    }

    fn render(&self, assets: &Assets) {
        clear_background(Color::new(0.02, 0.02, 0.08, 1.0));

        for enemy in &self.state.enemies {
            draw_sprite(&assets.alien, &enemy.rect);
        }
        for laser in &self.state.lasers {
            draw_sprite(&assets.laser, &laser.rect);
        }
        if let Some(player) = &self.state.player {
            draw_sprite(&assets.player, &player.rect);
        }

        draw_text(&format!("Score: {}", self.state.score), 10.0, 24.0, 20.0, WHITE);
        draw_text(&format!("Lives: {}", self.state.lives()), 10.0, 44.0, 20.0, WHITE);
    }
}
