//! Alien Tide - a fixed-tick grid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, waves)
//! - `scene`: Title / Game / GameOver scenes
//! - `app`: Application state and the scene state machine
//! - `assets`: Texture and sound loading
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod assets;
pub mod scene;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::{App, Scene, SceneRequest};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum simulation substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Player sprite size
    pub const PLAYER_W: f32 = 48.0;
    pub const PLAYER_H: f32 = 32.0;
    /// Gap between the player's spawn anchor and the bottom border
    pub const PLAYER_RAISE: f32 = 10.0;
    /// Divisor for the vertical bobbing offset
    pub const PLAYER_BOUNCE: f32 = 24.0;

    /// Enemy sprite size and the gap between grid cells
    pub const ENEMY_SIZE: f32 = 32.0;
    pub const ENEMY_GAP: f32 = 16.0;
    /// Hard ceiling on enemy speed after respawn increments
    pub const ENEMY_SPEED_CAP: f32 = 12.0;

    /// Laser sprite size
    pub const LASER_W: f32 = 6.0;
    pub const LASER_H: f32 = 18.0;
}

use sim::Rect;

/// The playfield rectangle in screen coordinates (y-down, origin top-left)
#[inline]
pub fn screen_rect() -> Rect {
    Rect::new(0.0, 0.0, consts::WIDTH, consts::HEIGHT)
}
