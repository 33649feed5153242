//! Asteroids - a classic arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, state machine)
//! - `leaderboard`: Persisted score table
//! - `settings`: User preferences
//! - `error`: Crate error taxonomy
//!
//! Rendering, audio playback and input-device polling are external
//! collaborators: frontends feed `sim::TickInput`, read the `Session`,
//! and drain its `GameEvent` queue.

pub mod error;
pub mod leaderboard;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use leaderboard::Leaderboard;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1500.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Fixed simulation rate (frames per second)
    pub const FRAMERATE: u32 = 60;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const FINAL_LEVEL: u32 = 4;
    pub const MAX_NICKNAME_LEN: usize = 20;
    pub const DEFAULT_NICKNAME: &str = "Default";

    /// Ship tuning
    pub const SHIP_RADIUS: f32 = 20.0;
    /// Rotation step (degrees per frame)
    pub const SHIP_ROTATION_DEG: f32 = 3.0;
    /// Linear acceleration (pixels per frame, applied while thrusting)
    pub const SHIP_ACCELERATION: f32 = 0.25;
    /// Exponential velocity decay factor while not thrusting
    pub const SHIP_DRAG: f32 = 0.05;
    pub const SHIP_BULLET_SPEED: f32 = 3.0;

    /// Projectile radius (both flavors)
    pub const BULLET_RADIUS: f32 = 5.0;

    /// Asteroid tuning. Radius = base * tier scale * per-rock base scale.
    pub const ASTEROID_BASE_RADIUS: f32 = 60.0;
    pub const ASTEROID_MIN_SPEED: f32 = 0.25;
    pub const ASTEROID_MAX_SPEED: f32 = 1.0;
    pub const ASTEROID_MIN_SCALE: f32 = 0.8;
    pub const ASTEROID_MAX_SCALE: f32 = 1.5;
    /// Minimum spawn distance from the ship
    pub const MIN_ASTEROID_DISTANCE: f32 = 250.0;

    /// Saucer tuning
    pub const SAUCER_RADIUS: f32 = 24.0;
    /// Straight-line speed (pixels per frame)
    pub const SAUCER_SPEED: f32 = 1.0;
    /// Fires every this many frames of life
    pub const SAUCER_FIRE_PERIOD: u32 = 25;
    pub const SAUCER_BULLET_SPEED: f32 = 1.0;
    /// Spawn period multiplier, sampled each frame in [min, max) seconds
    pub const SAUCER_PERIOD_MIN_SECS: u32 = 8;
    pub const SAUCER_PERIOD_MAX_SECS: u32 = 12;
    /// Fixed offset within the spawn period (frames). The trigger fires on
    /// `frame % period == offset`, desyncing spawns from period boundaries.
    pub const SAUCER_SPAWN_OFFSET_FRAMES: u64 = (FRAMERATE * 3) as u64;

    /// Score awards
    pub const SCORE_SAUCER: u32 = 200;
    pub const SCORE_ASTEROID_TIER_3: u32 = 25;
    pub const SCORE_ASTEROID_TIER_2: u32 = 50;
    pub const SCORE_ASTEROID_TIER_1: u32 = 100;
}

/// Wrap a position toroidally into `[0, w) x [0, h)`.
///
/// Negative coordinates wrap into the positive range.
#[inline]
pub fn wrap_position(position: Vec2, bounds: Vec2) -> Vec2 {
    let mut p = Vec2::new(
        position.x.rem_euclid(bounds.x),
        position.y.rem_euclid(bounds.y),
    );
    // rem_euclid can round up to the modulus itself for tiny negatives
    if p.x >= bounds.x {
        p.x = 0.0;
    }
    if p.y >= bounds.y {
        p.y = 0.0;
    }
    p
}

/// The play area as a vector, for wrap/bounds checks.
#[inline]
pub fn screen_bounds() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}

/// Standard ship spawn position: the screen center.
#[inline]
pub fn standard_spawn() -> Vec2 {
    screen_bounds() / 2.0
}
