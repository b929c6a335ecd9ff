//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{PlayerImpact, laser_enemy_sweep, player_enemy_sweep, wave_turn_check};
pub use rect::Rect;
pub use state::{Enemy, GameState, Laser, Player, TickEvent};
pub use tick::{TickInput, generate_wave, spawn_wave, tick};
