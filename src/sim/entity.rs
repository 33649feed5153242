//! Game entities and their shared motion/collision core
//!
//! Every entity embeds a [`Body`]. Motion comes in two flavors: toroidal
//! wrapping (ship, asteroids) and straight lines that may leave the play
//! area (projectiles, saucers) - for the latter, going out of bounds is a
//! valid destruction trigger, handled by the collision/cleanup pass.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::error::GameError;
use crate::wrap_position;

/// Kinematic core shared by all entities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Toroidal move: exiting one edge re-enters the opposite edge.
    pub fn advance_wrapped(&mut self, bounds: Vec2) {
        self.position = wrap_position(self.position + self.velocity, bounds);
    }

    /// Straight-line move, no wrapping.
    pub fn advance_linear(&mut self) {
        self.position += self.velocity;
    }

    /// True if this body can participate in collision checks.
    pub fn is_collidable(&self) -> bool {
        self.radius > 0.0 && self.position.is_finite()
    }

    /// Circle-overlap test: true iff the center distance is below the sum
    /// of radii. Errs on a degenerate operand - that is a programming
    /// error in the integration, never normal control flow.
    pub fn collides_with(&self, other: &Body) -> Result<bool, GameError> {
        if !self.is_collidable() {
            return Err(GameError::InvalidOperand {
                radius: self.radius,
            });
        }
        if !other.is_collidable() {
            return Err(GameError::InvalidOperand {
                radius: other.radius,
            });
        }
        Ok(self.position.distance(other.position) < self.radius + other.radius)
    }

    /// True while the center is inside `[0, w) x [0, h)`.
    pub fn in_bounds(&self, bounds: Vec2) -> bool {
        self.position.x >= 0.0
            && self.position.x < bounds.x
            && self.position.y >= 0.0
            && self.position.y < bounds.y
    }
}

/// Uniform random speed in `[min_speed, max_speed)`, uniform random direction.
pub fn random_velocity(rng: &mut Pcg32, min_speed: f32, max_speed: f32) -> Vec2 {
    let speed = rng.random_range(min_speed..max_speed);
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    Vec2::from_angle(angle) * speed
}

/// Which side a projectile belongs to (determines its collision group)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Ship,
    Saucer,
}

/// A bullet. Straight-line, non-wrapping; destroyed on leaving the play
/// area or on collision.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub body: Body,
    pub owner: Owner,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2, owner: Owner) -> Self {
        Self {
            body: Body::new(position, velocity, BULLET_RADIUS),
            owner,
        }
    }

    pub fn advance(&mut self) {
        self.body.advance_linear();
    }
}

/// The player's ship
///
/// `direction` is the unit heading, independent of velocity. Exactly one
/// ship per session; at 0 lives it stops being drawn, moved or targeted,
/// but the instance survives until the session restarts.
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Body,
    pub direction: Vec2,
    pub lives: u32,
    pub score: u32,
    pub is_alive: bool,
    pub is_accelerating: bool,
    pub is_rotating: bool,
}

impl Ship {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::new(position, Vec2::ZERO, SHIP_RADIUS),
            direction: Vec2::new(0.0, -1.0),
            lives: STARTING_LIVES,
            score: 0,
            is_alive: true,
            is_accelerating: false,
            is_rotating: false,
        }
    }

    /// Rotate the heading by the fixed per-frame step. Unclamped: full
    /// 360 degree freedom.
    pub fn rotate(&mut self, clockwise: bool) {
        let sign = if clockwise { 1.0 } else { -1.0 };
        let angle = (SHIP_ROTATION_DEG * sign).to_radians();
        self.direction = Vec2::from_angle(angle).rotate(self.direction);
        self.is_rotating = true;
    }

    pub fn stop_rotating(&mut self) {
        self.is_rotating = false;
    }

    /// Thrust along the current heading. Called once per held frame.
    pub fn accelerate(&mut self) {
        self.body.velocity += self.direction * SHIP_ACCELERATION;
        self.is_accelerating = true;
    }

    /// Exponential drag toward rest while thrust is not held. Skipped at
    /// exactly zero velocity.
    pub fn decelerate(&mut self) {
        self.is_accelerating = false;
        if self.body.velocity != Vec2::ZERO {
            self.body.velocity -= self.body.velocity * SHIP_DRAG;
        }
    }

    pub fn advance(&mut self, bounds: Vec2) {
        self.body.advance_wrapped(bounds);
    }

    /// Spawn a bullet at the ship, inheriting the ship's momentum.
    pub fn shoot(&self) -> Projectile {
        let velocity = self.direction * SHIP_BULLET_SPEED + self.body.velocity;
        Projectile::new(self.body.position, velocity, Owner::Ship)
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Lose one life. Lives never go negative; `is_alive` flips exactly
    /// when they reach zero.
    pub fn take_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.is_alive = false;
        }
    }
}

/// Result of destroying an asteroid: score for the shooter plus the
/// child rocks to merge into the session.
#[derive(Debug)]
pub struct SplitOutcome {
    pub score: u32,
    pub children: Vec<Asteroid>,
}

/// A drifting rock. `tier` 3 is largest; tier 1 is terminal.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    pub tier: u8,
    /// Per-rock random size multiplier, shared with children on split
    pub base_scale: f32,
}

impl Asteroid {
    pub fn new(position: Vec2, tier: u8, base_scale: f32, rng: &mut Pcg32) -> Self {
        let radius = ASTEROID_BASE_RADIUS * Self::tier_scale(tier) * base_scale;
        let velocity = random_velocity(rng, ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED);
        Self {
            body: Body::new(position, velocity, radius),
            tier,
            base_scale,
        }
    }

    fn tier_scale(tier: u8) -> f32 {
        match tier {
            3 => 1.0,
            2 => 0.5,
            _ => 0.25,
        }
    }

    /// Score awarded for destroying a rock of the given tier. Smaller
    /// rocks are worth more.
    pub fn score_value(tier: u8) -> u32 {
        match tier {
            3 => SCORE_ASTEROID_TIER_3,
            2 => SCORE_ASTEROID_TIER_2,
            _ => SCORE_ASTEROID_TIER_1,
        }
    }

    pub fn advance(&mut self, bounds: Vec2) {
        self.body.advance_wrapped(bounds);
    }

    /// Break the rock apart. Score is awarded for the current tier; a
    /// tier above 1 yields exactly two children at the parent's position,
    /// one tier down, same base scale. Children inherit position only -
    /// each gets an independent fresh random drift velocity.
    pub fn split(&self, rng: &mut Pcg32) -> SplitOutcome {
        let score = Self::score_value(self.tier);
        let mut children = Vec::new();
        if self.tier > 1 {
            for _ in 0..2 {
                children.push(Asteroid::new(
                    self.body.position,
                    self.tier - 1,
                    self.base_scale,
                    rng,
                ));
            }
        }
        SplitOutcome { score, children }
    }
}

/// An enemy saucer. Crosses the screen in a straight line along a fixed
/// cardinal heading, firing periodically; despawns on leaving the bounds.
#[derive(Debug, Clone)]
pub struct Saucer {
    pub body: Body,
    /// Cardinal travel direction, constant for the saucer's lifetime
    pub heading: Vec2,
    pub frames_alive: u32,
}

impl Saucer {
    pub fn new(position: Vec2, heading: Vec2) -> Self {
        Self {
            body: Body::new(position, heading * SAUCER_SPEED, SAUCER_RADIUS),
            heading,
            frames_alive: 0,
        }
    }

    /// Straight-line move; the life counter drives the firing cadence and
    /// is independent of any wrap logic.
    pub fn advance(&mut self) {
        self.body.advance_linear();
        self.frames_alive += 1;
    }

    /// True on every `SAUCER_FIRE_PERIOD`th frame of life, including the
    /// spawn frame itself: a fresh saucer gets a shot off from the edge
    /// before it has moved.
    pub fn should_fire(&self) -> bool {
        self.frames_alive % SAUCER_FIRE_PERIOD == 0
    }

    /// Spawn a bullet with a random spread over the saucer's own motion.
    pub fn shoot(&self, rng: &mut Pcg32) -> Projectile {
        let velocity =
            random_velocity(rng, 1.0, 2.0) * SAUCER_BULLET_SPEED + self.body.velocity;
        Projectile::new(self.body.position, velocity, Owner::Saucer)
    }
}
