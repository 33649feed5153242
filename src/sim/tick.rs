//! Fixed frame-step simulation tick
//!
//! One unified entry point advances the whole state machine: every state
//! has a per-frame step, so menus and pause screens are just states of
//! the same loop rather than nested blocking loops.

use log::debug;

use super::collision;
use super::spawner;
use super::state::{GameEvent, GameState, Session};
use crate::error::GameError;
use crate::screen_bounds;

/// Ship rotation input for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotate {
    Clockwise,
    CounterClockwise,
}

/// Menu/button actions (pointer clicks or their keyboard equivalents)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Main menu: begin a run (goes to name entry)
    Play,
    /// Main menu: open the leaderboard
    ShowLeaderboard,
    /// Return to the main menu
    ToMenu,
    /// Win/lose screens: restart with the same nickname
    Restart,
}

/// Input commands for a single frame. Held keys are level-triggered
/// (`rotate`, `thrust`); everything else is a one-shot edge the frontend
/// clears after each tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub rotate: Option<Rotate>,
    pub thrust: bool,
    /// Fire one bullet (key press, not held)
    pub fire: bool,
    /// Pause/resume (escape)
    pub pause: bool,
    /// Confirm (return): leaves name entry when the nickname is non-empty
    pub confirm: bool,
    /// Name editing
    pub backspace: bool,
    /// Leaderboard toggle
    pub tab: bool,
    /// Typed character for name entry
    pub text: Option<char>,
    pub action: Option<MenuAction>,
    /// Window close
    pub quit: bool,
}

/// Advance the session by one frame.
pub fn tick(session: &mut Session, input: &TickInput) -> Result<(), GameError> {
    if input.quit {
        session.state = GameState::Quit;
        return Ok(());
    }

    match session.state {
        GameState::MainMenu => {
            match input.action {
                Some(MenuAction::Play) => session.state = GameState::EnterName,
                Some(MenuAction::ShowLeaderboard) => session.state = GameState::Leaderboard,
                _ => {}
            }
            if input.tab {
                session.state = GameState::Leaderboard;
            }
        }

        GameState::EnterName => {
            if input.backspace {
                session.nickname_backspace();
            } else if let Some(c) = input.text {
                session.nickname_push(c);
            }
            let confirmed = input.confirm || input.action == Some(MenuAction::Play);
            if confirmed && !session.nickname.is_empty() {
                session.state = GameState::Playing;
            } else if input.action == Some(MenuAction::ToMenu) {
                session.state = GameState::MainMenu;
            }
        }

        GameState::Leaderboard => {
            if input.tab || input.action == Some(MenuAction::ToMenu) {
                session.state = GameState::MainMenu;
            }
        }

        GameState::Playing => {
            if input.pause {
                session.state = GameState::Paused;
            } else {
                step_playing(session, input)?;
            }
        }

        GameState::Paused => {
            if input.pause {
                session.state = GameState::Playing;
            } else if input.action == Some(MenuAction::ToMenu) {
                // leaving a paused run abandons it entirely
                session.restart_to_menu();
            }
        }

        GameState::Win | GameState::Lose => match input.action {
            Some(MenuAction::Restart) => session.restart_playing(),
            Some(MenuAction::ToMenu) => session.restart_to_menu(),
            _ => {}
        },

        GameState::Quit => {}
    }

    Ok(())
}

/// The gameplay pipeline: input -> advance -> spawn -> saucer logic ->
/// collisions -> state check.
fn step_playing(session: &mut Session, input: &TickInput) -> Result<(), GameError> {
    let bounds = screen_bounds();

    handle_ship_input(session, input);

    // advance every entity before any spawning or resolution
    if session.ship.is_alive {
        session.ship.advance(bounds);
    }
    for rock in &mut session.asteroids {
        rock.advance(bounds);
    }
    for bullet in &mut session.ship_bullets {
        bullet.advance();
    }
    for bullet in &mut session.saucer_bullets {
        bullet.advance();
    }
    for saucer in &mut session.saucers {
        saucer.advance();
    }

    if session.saucer_quota > 0
        && let Some(saucer) = spawner::maybe_spawn_saucer(&mut session.rng, session.frame, bounds)
    {
        debug!(
            "saucer spawned at {:?} heading {:?} ({} left in quota)",
            saucer.body.position,
            saucer.heading,
            session.saucer_quota - 1
        );
        session.saucers.push(saucer);
        session.saucer_quota -= 1;
    }

    // saucer firing, then despawn of saucers that left the play area
    for i in 0..session.saucers.len() {
        if session.saucers[i].should_fire() {
            let bullet = session.saucers[i].shoot(&mut session.rng);
            session.saucer_bullets.push(bullet);
            session.push_event(GameEvent::SaucerShotFired);
        }
    }
    session.saucers.retain(|s| s.body.in_bounds(bounds));

    collision::resolve(session)?;

    session.frame += 1;
    session.check_game_state();
    Ok(())
}

fn handle_ship_input(session: &mut Session, input: &TickInput) {
    if !session.ship.is_alive {
        return;
    }

    let was_rotating = session.ship.is_rotating;
    match input.rotate {
        Some(Rotate::Clockwise) => session.ship.rotate(true),
        Some(Rotate::CounterClockwise) => session.ship.rotate(false),
        None => session.ship.stop_rotating(),
    }
    if session.ship.is_rotating && !was_rotating {
        session.push_event(GameEvent::RotationStarted);
    } else if !session.ship.is_rotating && was_rotating {
        session.push_event(GameEvent::RotationStopped);
    }

    let was_accelerating = session.ship.is_accelerating;
    if input.thrust {
        session.ship.accelerate();
    } else {
        session.ship.decelerate();
    }
    if session.ship.is_accelerating && !was_accelerating {
        session.push_event(GameEvent::ThrustStarted);
    } else if !session.ship.is_accelerating && was_accelerating {
        session.push_event(GameEvent::ThrustStopped);
    }

    if input.fire {
        let bullet = session.ship.shoot();
        session.ship_bullets.push(bullet);
        session.push_event(GameEvent::ShotFired);
    }
}
