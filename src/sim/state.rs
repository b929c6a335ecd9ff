//! Entity state and core simulation types
//!
//! Pure data plus per-tick rules; no rendering or platform dependencies.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::screen_rect;
use crate::tuning::Tuning;

/// Discrete notifications emitted by a tick, drained by the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// A laser left the player's gun
    ShotFired,
    /// An enemy ran into the player
    PlayerHit,
    /// A laser destroyed an enemy
    EnemyDestroyed,
    /// The wave was exhausted and a new one spawned
    WaveCleared,
}

/// The player's jet
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal distance covered per tick
    pub speed: f32,
    /// Strafe direction: -1 left, 0 idle, 1 right
    pub facing: f32,
    /// Fire key state for the current tick
    pub firing: bool,
    /// Mirrors `firing` from the previous tick; blocks hold-to-spam
    pub reloading: bool,
    pub lives: u32,
    /// Unbobbed top coordinate; the bounce offset is applied against this
    orig_top: f32,
}

impl Player {
    pub fn new(speed: f32, lives: u32) -> Self {
        let rect = Self::spawn_rect();
        Self {
            rect,
            speed,
            facing: 0.0,
            firing: false,
            reloading: false,
            lives,
            orig_top: rect.y,
        }
    }

    /// Spawn anchor: midbottom of the screen, raised off the border
    fn spawn_rect() -> Rect {
        let screen = screen_rect();
        Rect::new(
            screen.center_x() - PLAYER_W / 2.0,
            screen.bottom() - PLAYER_H - PLAYER_RAISE,
            PLAYER_W,
            PLAYER_H,
        )
    }

    /// Strafe, clamp to the screen, then derive the bob offset from the
    /// clamped left coordinate.
    pub fn advance(&mut self) {
        self.rect.x += self.facing * self.speed;
        self.rect = self.rect.clamped(&screen_rect());
        self.rect.y = self.orig_top - ((self.rect.x / PLAYER_BOUNCE).floor() as i32 % 2) as f32;
    }

    /// Where lasers spawn: the sprite's top center
    pub fn gun_pos(&self) -> Vec2 {
        Vec2::new(self.rect.center_x(), self.rect.y)
    }

    /// Lose a life and return to the spawn anchor. Facing, firing and
    /// reloading deliberately survive the respawn.
    pub fn died(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.rect = Self::spawn_rect();
    }
}

/// One alien in the wave
#[derive(Debug, Clone)]
pub struct Enemy {
    /// 1-based position within the wave
    pub id: u32,
    pub rect: Rect,
    pub speed: f32,
    /// ±1; shared by the whole wave at spawn
    pub facing: f32,
    /// Set when the last advance left the sprite past a screen edge
    pub change_direction: bool,
    start: Vec2,
    start_facing: f32,
    /// Distance overshot past the edge, used to re-align wave spacing
    overshoot: f32,
}

impl Enemy {
    pub fn new(id: u32, speed: f32, facing: f32) -> Self {
        Self {
            id,
            rect: Rect::new(0.0, 0.0, ENEMY_SIZE, ENEMY_SIZE),
            speed,
            facing,
            change_direction: false,
            start: Vec2::ZERO,
            start_facing: facing,
            overshoot: 0.0,
        }
    }

    /// Place the enemy at its grid cell. Left-facing waves are mirrored
    /// against the right screen edge.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.start = Vec2::new(x, y);
        self.rect = Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE);
        if self.facing < 0.0 {
            self.rect.set_right(screen_rect().right() - x);
        }
    }

    /// Send the enemy back to its spawn cell, one speed step faster
    pub fn reset_position(&mut self) {
        self.speed = (self.speed + 1.0).min(ENEMY_SPEED_CAP);
        let start = self.start;
        self.set_position(start.x, start.y);
        if self.start_facing < 0.0 {
            self.rect.set_right(screen_rect().right() - start.x);
        }
    }

    /// Horizontal march; flags `change_direction` when the sprite is no
    /// longer fully on screen.
    pub fn advance(&mut self) {
        self.rect.x += self.facing * self.speed;
        self.change_direction = !screen_rect().contains(&self.rect);
    }

    /// Edge response, invoked on every wave member when any member flags:
    /// flip, drop one row, clamp back in. Members that flagged also shift
    /// by their overshoot so wave spacing survives the clamp.
    pub fn descend(&mut self) {
        self.calc_overshoot();

        self.facing = -self.facing;
        self.rect.y = self.rect.bottom() + 1.0;
        self.rect = self.rect.clamped(&screen_rect());

        if self.change_direction {
            if self.facing < 0.0 {
                self.rect.set_right(screen_rect().right() + self.overshoot);
            }
            if self.facing > 0.0 {
                self.rect.x += self.overshoot;
            }
        }
    }

    /// Remaining distance past the screen edge in the current direction
    fn calc_overshoot(&mut self) {
        let screen = screen_rect();
        self.overshoot = if self.facing > 0.0 {
            self.rect.right() - screen.right()
        } else if self.facing < 0.0 {
            self.rect.x - screen.x
        } else {
            0.0
        };
    }
}

/// A player shot, travelling straight up
#[derive(Debug, Clone)]
pub struct Laser {
    pub rect: Rect,
    /// Vertical velocity per tick (negative = up)
    pub speed: f32,
}

impl Laser {
    /// Spawn with the midbottom at `pos` (the player's gun)
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            rect: Rect::new(pos.x - LASER_W / 2.0, pos.y - LASER_H, LASER_W, LASER_H),
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.rect.y += self.speed;
    }

    /// Lasers die the moment their top coordinate reaches the screen top
    pub fn alive(&self) -> bool {
        self.rect.y > 0.0
    }
}

/// Complete state of one Game-scene run (deterministic, headless)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tick_count: u64,
    pub score: u32,
    /// Wave-regeneration difficulty factor, added to the enemy speed range
    pub difficulty: u32,
    /// Removed from play when lives reach zero
    pub player: Option<Player>,
    pub enemies: Vec<Enemy>,
    pub lasers: Vec<Laser>,
    pub tuning: Tuning,
    events: Vec<TickEvent>,
}

impl GameState {
    /// A fresh run: full lives, zero score, first wave spawned
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
            score: 0,
            difficulty: 0,
            player: Some(Player::new(tuning.player_speed, tuning.starting_lives)),
            enemies: Vec::new(),
            lasers: Vec::new(),
            tuning,
            events: Vec::new(),
        };
        super::tick::generate_wave(&mut state);
        state
    }

    /// Lives as shown in the HUD; zero once the player is gone
    pub fn lives(&self) -> u32 {
        self.player.as_ref().map_or(0, |p| p.lives)
    }

    /// The run is over once the player has been removed from play
    pub fn game_over(&self) -> bool {
        self.player.is_none()
    }

    pub fn push_event(&mut self, event: TickEvent) {
        self.events.push(event);
    }

    /// Hand this tick's notifications to the frame driver
    pub fn drain_events(&mut self) -> Vec<TickEvent> {
        std::mem::take(&mut self.events)
    }
}
