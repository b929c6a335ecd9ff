//! Game-over scene: final score, play again, quit

use macroquad::prelude::*;

use crate::app::{App, Scene, SceneRequest};
use crate::assets::Assets;
use crate::consts::WIDTH;
use crate::ui::{Button, draw_text_centered};

pub struct GameOverScene {
    score: u32,
    again_btn: Button,
    quit_btn: Button,
}

impl GameOverScene {
    pub fn new(score: u32) -> Self {
        Self {
            score,
            again_btn: Button::new(275.0, 370.0, 250.0, 50.0, "PLAY AGAIN?"),
            quit_btn: Button::new(330.0, 450.0, 140.0, 50.0, "QUIT"),
        }
    }
}

impl Scene for GameOverScene {
    fn initialize(&mut self) {
        log::info!("initializing the game-over scene (score {})", self.score);
    }

    fn handle_input(&mut self, app: &mut App) {
        let mouse = mouse_position();
        let clicked = is_mouse_button_pressed(MouseButton::Left);

        if self.again_btn.clicked(mouse, clicked) {
            app.request_scene(SceneRequest::Game);
        }
        if self.quit_btn.clicked(mouse, clicked) {
            app.running = false;
        }
    }

    fn update(&mut self, _app: &mut App, _assets: &Assets) {}

    fn render(&self, _assets: &Assets) {
        clear_background(Color::new(0.02, 0.02, 0.08, 1.0));
        draw_text_centered("GAME OVER!", WIDTH / 2.0, 140.0, 84.0, ORANGE);
        draw_text_centered(&format!("SCORE: {}", self.score), WIDTH / 2.0, 230.0, 48.0, RED);
        self.again_btn.draw();
        self.quit_btn.draw();
    }
}
