//! Shared immutable resource handles
//!
//! Everything is loaded once at startup and passed by reference into scene
//! `render`; entities never hold handles. Textures are required and fail
//! fatally. The shot sound is optional: a failed load downgrades to a
//! warning, the handle stays `None`, and playing it is a guarded no-op.

use macroquad::audio::{Sound, load_sound};
use macroquad::prelude::*;

use crate::sim::Rect;

pub struct Assets {
    pub player: Texture2D,
    pub alien: Texture2D,
    pub laser: Texture2D,
    pub shoot: Option<Sound>,
}

impl Assets {
    pub async fn load() -> Assets {
        let player = load_texture_or_die("assets/player.png").await;
        let alien = load_texture_or_die("assets/alien.png").await;
        let laser = load_texture_or_die("assets/laser.png").await;

        let shoot = match load_sound("assets/shoot.wav").await {
            Ok(sound) => Some(sound),
            Err(err) => {
                log::warn!("unable to load assets/shoot.wav: {err:?}");
                None
            }
        };

        Assets {
            player,
            alien,
            laser,
            shoot,
        }
    }
}

async fn load_texture_or_die(path: &str) -> Texture2D {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            texture
        }
        Err(err) => {
            log::error!("could not load required asset {path}: {err:?}");
            std::process::exit(1);
        }
    }
}

/// Draw a texture stretched over an entity rect
pub fn draw_sprite(texture: &Texture2D, rect: &Rect) {
    draw_texture_ex(
        texture,
        rect.x,
        rect.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(rect.w, rect.h)),
            ..Default::default()
        },
    );
}
