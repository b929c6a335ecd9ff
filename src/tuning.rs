//! Data-driven game balance
//!
//! Defaults match the classic balance. An optional `tuning.json` in the
//! working directory overrides any subset of the fields; a malformed file
//! logs a warning and falls back to defaults.

use serde::{Deserialize, Serialize};

/// Gameplay tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lasers allowed on screen at once
    pub max_shots: usize,
    /// Lives at the start of a run
    pub starting_lives: u32,
    /// Player horizontal distance per tick
    pub player_speed: f32,
    /// Laser vertical velocity per tick (negative = up)
    pub laser_speed: f32,
    /// Wave speed range floor before the difficulty factor is added
    pub enemy_min_speed: f32,
    /// Wave speed range ceiling (exclusive) before the difficulty factor
    pub enemy_max_speed: f32,
    /// Ceiling on the difficulty factor added to the speed range
    pub max_difficulty: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_shots: 1,
            starting_lives: 3,
            player_speed: 7.0,
            laser_speed: -9.0,
            enemy_min_speed: 1.0,
            enemy_max_speed: 5.0,
            max_difficulty: 4,
        }
    }
}

impl Tuning {
    /// Load overrides from `path`; a missing file means defaults
    pub fn load(path: &str) -> Tuning {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed {path}: {err}");
                    Tuning::default()
                }
            },
            Err(_) => Tuning::default(),
        }
    }
}
