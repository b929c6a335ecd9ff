//! Collision resolution for the tick's ordered phases
//!
//! Three sweeps, run in a fixed order each tick: the wave turn check, the
//! player-enemy sweep, and the laser-enemy sweep. Consequences (lives,
//! score, wave reset) are applied by the tick; the sweeps only mutate the
//! collections and report what happened.

use super::state::{Enemy, Laser, Player};

/// Outcome of the player-enemy sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerImpact {
    /// An enemy touched the player this tick
    pub hit: bool,
    /// Enemies removed by the sweep
    pub destroyed: usize,
}

/// Flip and drop the whole wave when any member has flagged an edge.
///
/// Scanning stops at the first flagged member, so at most one reversal
/// happens per tick even when several enemies sit on the edge at once.
/// Returns whether the wave turned.
pub fn wave_turn_check(enemies: &mut [Enemy]) -> bool {
    let turned = enemies.iter().any(|e| e.change_direction);
    if turned {
        for enemy in enemies.iter_mut() {
            enemy.descend();
        }
    }
    turned
}

/// Remove every enemy overlapping the player.
///
/// All intersecting enemies are destroyed, but the caller applies at most
/// one hit to the player per tick regardless of how many overlapped.
pub fn player_enemy_sweep(player: &Player, enemies: &mut Vec<Enemy>) -> PlayerImpact {
    let before = enemies.len();
    enemies.retain(|e| !e.rect.intersects(&player.rect));
    let destroyed = before - enemies.len();
    PlayerImpact {
        hit: destroyed > 0,
        destroyed,
    }
}

/// Destroy every intersecting (laser, enemy) pair; returns enemies killed.
///
/// A laser is consumed by its first sweep entry but may take several
/// enemies with it when overlaps stack; every destroyed enemy counts.
pub fn laser_enemy_sweep(lasers: &mut Vec<Laser>, enemies: &mut Vec<Enemy>) -> usize {
    let mut killed = 0;
    lasers.retain(|laser| {
        let before = enemies.len();
        enemies.retain(|e| !e.rect.intersects(&laser.rect));
        let hits = before - enemies.len();
        killed += hits;
        hits == 0
    });
    killed
}
