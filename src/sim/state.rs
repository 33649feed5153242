//! Top-level game state machine and the session root
//!
//! The `Session` is the single mutable root of a playthrough: it owns
//! every entity collection, the level counter, the seeded RNG and the
//! in-memory leaderboard. All subsystems receive it explicitly; there
//! are no ambient globals.

use glam::Vec2;
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Asteroid, Projectile, Saucer, Ship};
use super::spawner;
use crate::consts::*;
use crate::leaderboard::Leaderboard;
use crate::{screen_bounds, standard_spawn};

/// Top-level game states. `MainMenu` is initial; `Quit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    /// Nickname entry before a run starts
    EnterName,
    Leaderboard,
    Playing,
    /// Gameplay frozen; all entity state preserved
    Paused,
    Win,
    Lose,
    Quit,
}

/// Discrete cues emitted by the simulation for external audio/fx
/// collaborators. Drained by the frontend each frame; no core logic
/// depends on consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    SaucerShotFired,
    ThrustStarted,
    ThrustStopped,
    RotationStarted,
    RotationStopped,
    ShipHit,
    AsteroidHit { tier: u8 },
    SaucerDestroyed,
    LevelUp { level: u32 },
    Won,
    Lost,
}

/// The complete in-memory state for one playthrough
#[derive(Debug)]
pub struct Session {
    pub state: GameState,
    /// Current level, 1 through `FINAL_LEVEL`
    pub level: u32,
    /// Frames simulated since the session started (monotonic across
    /// level-ups, reset only on restart)
    pub frame: u64,
    pub nickname: String,
    pub leaderboard: Leaderboard,

    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub ship_bullets: Vec<Projectile>,
    pub saucer_bullets: Vec<Projectile>,
    pub saucers: Vec<Saucer>,
    /// Saucers still owed to the current level
    pub saucer_quota: u32,

    /// Cues pending frontend pickup
    pub events: Vec<GameEvent>,

    pub seed: u64,
    pub rng: Pcg32,

    /// The placeholder nickname is discarded on the first typed character
    nickname_is_default: bool,
}

impl Session {
    /// Create a session in the main menu with level-1 enemies staged.
    pub fn new(seed: u64) -> Self {
        let mut session = Self {
            state: GameState::MainMenu,
            level: 1,
            frame: 0,
            nickname: DEFAULT_NICKNAME.to_string(),
            leaderboard: Leaderboard::new(),
            ship: Ship::new(standard_spawn()),
            asteroids: Vec::new(),
            ship_bullets: Vec::new(),
            saucer_bullets: Vec::new(),
            saucers: Vec::new(),
            saucer_quota: 0,
            events: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            nickname_is_default: true,
        };
        session.generate_enemies();
        session
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the pending cues to the frontend.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Stage the current level's enemies: asteroids placed now, the
    /// saucer quota spent gradually by the spawner.
    pub fn generate_enemies(&mut self) {
        let (asteroid_count, saucer_quota) = spawner::level_quotas(self.level);
        let rocks = spawner::generate_asteroids(
            &mut self.rng,
            self.ship.body.position,
            screen_bounds(),
            asteroid_count,
        );
        self.asteroids.extend(rocks);
        self.saucer_quota = saucer_quota;
    }

    /// All hostiles currently on screen are gone. Pending saucer quota
    /// does not block this - clearing the field before a saucer shows up
    /// advances the level, exactly like the original game.
    pub fn field_cleared(&self) -> bool {
        self.asteroids.is_empty() && self.saucers.is_empty()
    }

    /// Evaluate lose/win/level-advance after the collision pass.
    pub fn check_game_state(&mut self) {
        if !self.ship.is_alive {
            self.enter_game_over(GameState::Lose);
        } else if self.field_cleared() {
            if self.level == FINAL_LEVEL {
                self.enter_game_over(GameState::Win);
            } else {
                self.level_up();
            }
        }
    }

    /// Advance to the next level in place: state stays `Playing`.
    /// Ship velocity is deliberately left alone; only position and
    /// heading reset.
    fn level_up(&mut self) {
        self.ship.body.position = standard_spawn();
        self.ship.direction = Vec2::new(0.0, -1.0);
        self.ship_bullets.clear();
        self.saucer_bullets.clear();
        self.level += 1;
        self.generate_enemies();
        self.push_event(GameEvent::LevelUp { level: self.level });
        info!(
            "level up: now level {} ({} asteroids, saucer quota {})",
            self.level,
            self.asteroids.len(),
            self.saucer_quota
        );
    }

    fn enter_game_over(&mut self, state: GameState) {
        self.state = state;
        let event = if state == GameState::Win {
            GameEvent::Won
        } else {
            GameEvent::Lost
        };
        self.push_event(event);
        self.record_score();
        info!(
            "game over ({state:?}): {} scored {}",
            self.nickname, self.ship.score
        );
    }

    /// Fold the run's score into the leaderboard, keeping the per-name
    /// maximum. Called once per game-ending transition; the frontend
    /// persists the table when it sees the `Won`/`Lost` cue.
    fn record_score(&mut self) {
        self.leaderboard.record(&self.nickname, self.ship.score);
    }

    /// Rebuild all entity/level state for a fresh run, preserving the
    /// nickname and the in-memory leaderboard. Used by "restart" on the
    /// win/lose screens.
    pub fn restart_playing(&mut self) {
        self.reset_run();
        self.state = GameState::Playing;
    }

    /// Full reset back to the main menu: run state, nickname placeholder
    /// and all. The leaderboard survives (it was loaded once at startup).
    pub fn restart_to_menu(&mut self) {
        self.reset_run();
        self.nickname = DEFAULT_NICKNAME.to_string();
        self.nickname_is_default = true;
        self.state = GameState::MainMenu;
    }

    fn reset_run(&mut self) {
        self.level = 1;
        self.frame = 0;
        self.ship = Ship::new(standard_spawn());
        self.asteroids.clear();
        self.ship_bullets.clear();
        self.saucer_bullets.clear();
        self.saucers.clear();
        self.events.clear();
        self.generate_enemies();
    }

    /// Append a typed character to the nickname. The first keystroke
    /// replaces the default placeholder; input beyond the length cap is
    /// dropped.
    pub fn nickname_push(&mut self, c: char) {
        if self.nickname_is_default {
            self.nickname.clear();
            self.nickname_is_default = false;
        }
        if self.nickname.chars().count() < MAX_NICKNAME_LEN {
            self.nickname.push(c);
        }
    }

    /// Delete the last nickname character. Editing the placeholder this
    /// way does not claim it: the next typed character still replaces
    /// whatever is left of the default wholesale.
    pub fn nickname_backspace(&mut self) {
        self.nickname.pop();
    }
}
