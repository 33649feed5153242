//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only
//! - Seeded RNG only, owned by the `Session`
//! - Creation and removal of entities at fixed points within a frame
//! - No rendering, audio or file I/O

pub mod collision;
pub mod entity;
pub mod spawner;
pub mod state;
pub mod tick;

pub use entity::{Asteroid, Body, Owner, Projectile, Saucer, Ship, SplitOutcome};
pub use state::{GameEvent, GameState, Session};
pub use tick::{MenuAction, Rotate, TickInput, tick};
