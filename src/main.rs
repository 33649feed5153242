//! Asteroids headless entry point
//!
//! Drives the simulation without a renderer: an autopilot plays through
//! the menu flow and a run, logging events as they happen. Useful for
//! exercising the full session lifecycle end to end.
//!
//! Usage: `asteroids [seed] [max_frames]`

use std::path::PathBuf;

use asteroids::consts::FRAMERATE;
use asteroids::sim::{GameEvent, GameState, MenuAction, Rotate, Session, TickInput, tick};
use asteroids::{Leaderboard, Settings};

const LEADERBOARD_FILE: &str = "record_table.txt";
const SETTINGS_FILE: &str = "settings.json";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    // default cap: five minutes of simulated play
    let max_frames: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or((FRAMERATE as u64) * 300);

    let settings = Settings::load(&PathBuf::from(SETTINGS_FILE));

    let mut session = Session::new(seed);
    log::info!(
        "starting with seed {} (show_fps: {})",
        session.seed,
        settings.show_fps
    );
    match Leaderboard::load(&PathBuf::from(LEADERBOARD_FILE)) {
        Ok(board) => session.leaderboard = board,
        Err(e) => log::error!("leaderboard load failed: {e}"),
    }

    if let Err(e) = run(&mut session, max_frames) {
        log::error!("simulation error: {e}");
        std::process::exit(1);
    }

    log::info!(
        "finished in state {:?} with score {} after {} frames (seed {})",
        session.state,
        session.ship.score,
        session.frame,
        session.seed
    );
    if let Err(e) = session.leaderboard.save(&PathBuf::from(LEADERBOARD_FILE)) {
        log::error!("leaderboard save failed: {e}");
    }
}

/// Step through menu, name entry, and a full autopilot run.
fn run(session: &mut Session, max_frames: u64) -> Result<(), asteroids::GameError> {
    tick(session, &action(MenuAction::Play))?;
    for c in "Pilot".chars() {
        let input = TickInput {
            text: Some(c),
            ..Default::default()
        };
        tick(session, &input)?;
    }
    let confirm = TickInput {
        confirm: true,
        ..Default::default()
    };
    tick(session, &confirm)?;
    log::info!("run started as {:?}", session.nickname);

    let mut steps: u64 = 0;
    while session.state == GameState::Playing && steps < max_frames {
        let input = autopilot(steps);
        tick(session, &input)?;
        for event in session.take_events() {
            report(session, &event);
        }
        steps += 1;
    }
    Ok(())
}

fn action(a: MenuAction) -> TickInput {
    TickInput {
        action: Some(a),
        ..Default::default()
    }
}

/// Canned inputs: spin continuously, thrust in bursts, fire twice a second.
fn autopilot(step: u64) -> TickInput {
    TickInput {
        rotate: Some(Rotate::Clockwise),
        thrust: step % 120 < 30,
        fire: step % 30 == 0,
        ..Default::default()
    }
}

fn report(session: &Session, event: &GameEvent) {
    match event {
        GameEvent::AsteroidHit { tier } => {
            log::info!("asteroid (tier {tier}) destroyed, score {}", session.ship.score);
        }
        GameEvent::SaucerDestroyed => {
            log::info!("saucer destroyed, score {}", session.ship.score);
        }
        GameEvent::ShipHit => {
            log::info!("ship hit, {} lives left", session.ship.lives);
        }
        GameEvent::LevelUp { level } => log::info!("reached level {level}"),
        GameEvent::Won => log::info!("all levels cleared"),
        GameEvent::Lost => log::info!("out of lives"),
        _ => log::debug!("{event:?}"),
    }
}
