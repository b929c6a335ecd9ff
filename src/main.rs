//! Alien Tide entry point
//!
//! Boots logging, loads assets, and drives the scene loop. Each frame runs
//! the same ordered phases: perform a parked scene swap, poll input, then
//! (unless paused) render and update the active scene.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use alien_tide::app::{App, Scene, SceneRequest};
use alien_tide::assets::Assets;
use alien_tide::consts::{HEIGHT, WIDTH};
use alien_tide::scene;
use alien_tide::tuning::Tuning;
use alien_tide::ui::draw_text_centered;

fn window_conf() -> Conf {
    Conf {
        window_title: "Alien Tide".to_owned(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed for a fresh game run; the wall clock keeps runs distinct
fn run_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let assets = Assets::load().await;
    let mut app = App::new(Tuning::load("tuning.json"));

    // Window-close requests flow through the running flag like any other
    // quit action, so a frame always runs to completion.
    prevent_quit();

    let mut current: Box<dyn Scene> = scene::build(SceneRequest::Title, &app, run_seed());
    current.initialize();

    while app.running {
        // Perform a parked scene swap before anything else this frame.
        if let Some(request) = app.take_pending() {
            current = scene::build(request, &app, run_seed());
            current.initialize();
        }

        // Global input: quit and pause work in every scene.
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            app.running = false;
        }
        if is_key_pressed(KeyCode::P) {
            app.paused = !app.paused;
        }
        current.handle_input(&mut app);

        if app.paused {
            // Scene render/update are suspended; keep the backbuffer defined.
            clear_background(BLACK);
            draw_text_centered("PAUSED", WIDTH / 2.0, HEIGHT / 2.0, 48.0, WHITE);
        } else {
            current.render(&assets);
            current.update(&mut app, &assets);
        }

        next_frame().await;
    }

    log::info!("ending the program");
}
