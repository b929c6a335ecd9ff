//! Title scene: start, instructions, quit

use macroquad::prelude::*;

use crate::app::{App, Scene, SceneRequest};
use crate::assets::Assets;
use crate::consts::WIDTH;
use crate::ui::{Button, draw_text_centered};

/// Which page of the title screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleView {
    Main,
    Instructions,
}

pub struct TitleScene {
    view: TitleView,
    start_btn: Button,
    info_btn: Button,
    quit_btn: Button,
    back_btn: Button,
}

impl TitleScene {
    pub fn new() -> Self {
        Self {
            view: TitleView::Main,
            start_btn: Button::new(310.0, 250.0, 180.0, 50.0, "START"),
            info_btn: Button::new(270.0, 330.0, 260.0, 50.0, "INSTRUCTIONS"),
            quit_btn: Button::new(330.0, 410.0, 140.0, 50.0, "QUIT"),
            back_btn: Button::new(20.0, 530.0, 130.0, 50.0, "BACK"),
        }
    }
}

impl Default for TitleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for TitleScene {
    fn initialize(&mut self) {
        log::info!("initializing the title scene");
        self.view = TitleView::Main;
    }

    fn handle_input(&mut self, app: &mut App) {
        let mouse = mouse_position();
        let clicked = is_mouse_button_pressed(MouseButton::Left);

        match self.view {
            TitleView::Main => {
                if self.start_btn.clicked(mouse, clicked) {
                    app.request_scene(SceneRequest::Game);
                }
                if self.info_btn.clicked(mouse, clicked) {
                    self.view = TitleView::Instructions;
                }
                if self.quit_btn.clicked(mouse, clicked) {
                    app.running = false;
                }
            }
            TitleView::Instructions => {
                if self.back_btn.clicked(mouse, clicked) {
                    self.view = TitleView::Main;
                }
            }
        }
    }

    fn update(&mut self, _app: &mut App, _assets: &Assets) {}

    fn render(&self, _assets: &Assets) {
        clear_background(Color::new(0.02, 0.02, 0.08, 1.0));

        match self.view {
            TitleView::Main => {
                draw_text_centered("ALIEN TIDE", WIDTH / 2.0, 160.0, 84.0, SKYBLUE);
                self.start_btn.draw();
                self.info_btn.draw();
                self.quit_btn.draw();
            }
            TitleView::Instructions => {
                draw_text_centered("HOW TO PLAY", WIDTH / 2.0, 120.0, 48.0, SKYBLUE);
                let lines = [
                    "Left / Right arrows steer the jet.",
                    "Space fires a laser; one shot at a time,",
                    "so make it count.",
                    "Clear a wave and a faster one takes its place.",
                    "Touch an alien and the wave retreats - but",
                    "you lose a life. Three lives per run.",
                    "P pauses. Escape quits.",
                ];
                for (i, line) in lines.iter().enumerate() {
                    draw_text_centered(line, WIDTH / 2.0, 200.0 + i as f32 * 36.0, 26.0, WHITE);
                }
                self.back_btn.draw();
            }
        }
    }
}
