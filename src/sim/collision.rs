//! Per-frame collision and cleanup pass
//!
//! Runs once per simulated frame in a fixed order. Within each category,
//! collections are walked in creation order and an entity removed here is
//! never checked against further partners in the same pass - at most one
//! resolution per entity per frame.

use super::entity::Owner;
use super::state::{GameEvent, Session};
use crate::error::GameError;
use crate::{screen_bounds, standard_spawn};

/// Resolve all collisions for the current frame.
///
/// Order:
/// 1. drop ship bullets that left the play area
/// 2. ship bullet vs saucer bullet (mutual cancellation)
/// 3. ship bullet vs saucer (+200)
/// 4. ship bullet vs asteroid (split)
/// 5. ship vs asteroid / saucer bullet / saucer
pub fn resolve(session: &mut Session) -> Result<(), GameError> {
    let bounds = screen_bounds();
    session.ship_bullets.retain(|b| b.body.in_bounds(bounds));

    cancel_opposing_bullets(session)?;
    bullets_vs_saucers(session)?;
    bullets_vs_asteroids(session)?;
    ship_vs_hazards(session)?;
    Ok(())
}

/// A ship bullet meeting a saucer bullet removes both. No score.
fn cancel_opposing_bullets(session: &mut Session) -> Result<(), GameError> {
    let mut i = 0;
    while i < session.ship_bullets.len() {
        let mut hit = None;
        for (j, enemy) in session.saucer_bullets.iter().enumerate() {
            if session.ship_bullets[i].body.collides_with(&enemy.body)? {
                hit = Some(j);
                break;
            }
        }
        if let Some(j) = hit {
            session.saucer_bullets.remove(j);
            session.ship_bullets.remove(i);
        } else {
            i += 1;
        }
    }
    Ok(())
}

fn bullets_vs_saucers(session: &mut Session) -> Result<(), GameError> {
    let mut i = 0;
    while i < session.ship_bullets.len() {
        let mut hit = None;
        for (j, saucer) in session.saucers.iter().enumerate() {
            if session.ship_bullets[i].body.collides_with(&saucer.body)? {
                hit = Some(j);
                break;
            }
        }
        if let Some(j) = hit {
            session.saucers.remove(j);
            session.ship_bullets.remove(i);
            session.ship.add_score(crate::consts::SCORE_SAUCER);
            session.push_event(GameEvent::SaucerDestroyed);
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Asteroid hit by a ship bullet: both go, the rock splits, score is
/// awarded for the destroyed tier. Children are merged after the walk so
/// they are never re-checked within this pass.
fn bullets_vs_asteroids(session: &mut Session) -> Result<(), GameError> {
    let mut spawned = Vec::new();
    let mut i = 0;
    'rocks: while i < session.asteroids.len() {
        for j in 0..session.ship_bullets.len() {
            if session.asteroids[i]
                .body
                .collides_with(&session.ship_bullets[j].body)?
            {
                let rock = session.asteroids.remove(i);
                session.ship_bullets.remove(j);
                let outcome = rock.split(&mut session.rng);
                session.ship.add_score(outcome.score);
                spawned.extend(outcome.children);
                session.push_event(GameEvent::AsteroidHit { tier: rock.tier });
                continue 'rocks;
            }
        }
        i += 1;
    }
    session.asteroids.extend(spawned);
    Ok(())
}

/// Ship vs asteroids, then saucer bullets, then saucers. Asteroid and
/// saucer hits teleport the ship back to the standard spawn (the hazard
/// itself survives); saucer-bullet hits remove the bullet but leave the
/// ship where it is. The asymmetry is intentional.
fn ship_vs_hazards(session: &mut Session) -> Result<(), GameError> {
    for i in 0..session.asteroids.len() {
        if !session.ship.is_alive {
            break;
        }
        if session.asteroids[i].body.collides_with(&session.ship.body)? {
            wreck_ship(session, true);
        }
    }

    let mut i = 0;
    while i < session.saucer_bullets.len() {
        if !session.ship.is_alive {
            break;
        }
        debug_assert_eq!(session.saucer_bullets[i].owner, Owner::Saucer);
        if session.saucer_bullets[i]
            .body
            .collides_with(&session.ship.body)?
        {
            session.saucer_bullets.remove(i);
            wreck_ship(session, false);
        } else {
            i += 1;
        }
    }

    for i in 0..session.saucers.len() {
        if !session.ship.is_alive {
            break;
        }
        if session.saucers[i].body.collides_with(&session.ship.body)? {
            wreck_ship(session, true);
        }
    }

    Ok(())
}

fn wreck_ship(session: &mut Session, teleport: bool) {
    if teleport {
        session.ship.body.position = standard_spawn();
    }
    session.ship.take_hit();
    session.push_event(GameEvent::ShipHit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::{Asteroid, Projectile, Saucer};
    use crate::sim::state::GameState;
    use crate::standard_spawn;
    use glam::Vec2;

    fn playing_session() -> Session {
        let mut session = Session::new(77);
        session.state = GameState::Playing;
        // start from an empty field so tests control exactly what collides
        session.asteroids.clear();
        session.saucer_quota = 0;
        session
    }

    fn ship_bullet_at(pos: Vec2) -> Projectile {
        Projectile::new(pos, Vec2::new(0.0, -3.0), Owner::Ship)
    }

    fn saucer_bullet_at(pos: Vec2) -> Projectile {
        Projectile::new(pos, Vec2::new(1.0, 0.0), Owner::Saucer)
    }

    #[test]
    fn test_out_of_bounds_ship_bullets_removed() {
        let mut session = playing_session();
        session.ship_bullets.push(ship_bullet_at(Vec2::new(-1.0, 50.0)));
        session.ship_bullets.push(ship_bullet_at(Vec2::new(100.0, 100.0)));
        resolve(&mut session).unwrap();
        assert_eq!(session.ship_bullets.len(), 1);
        assert_eq!(session.ship_bullets[0].body.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_opposing_bullets_cancel_without_score() {
        let mut session = playing_session();
        let spot = Vec2::new(400.0, 300.0);
        session.ship_bullets.push(ship_bullet_at(spot));
        session.saucer_bullets.push(saucer_bullet_at(spot));
        resolve(&mut session).unwrap();
        assert!(session.ship_bullets.is_empty());
        assert!(session.saucer_bullets.is_empty());
        assert_eq!(session.ship.score, 0);
    }

    #[test]
    fn test_bullet_destroys_saucer_for_200() {
        let mut session = playing_session();
        let spot = Vec2::new(200.0, 200.0);
        session.ship_bullets.push(ship_bullet_at(spot));
        session.saucers.push(Saucer::new(spot, Vec2::new(1.0, 0.0)));
        resolve(&mut session).unwrap();
        assert!(session.ship_bullets.is_empty());
        assert!(session.saucers.is_empty());
        assert_eq!(session.ship.score, SCORE_SAUCER);
        assert!(session.events.contains(&GameEvent::SaucerDestroyed));
    }

    #[test]
    fn test_bullet_splits_asteroid() {
        let mut session = playing_session();
        let spot = Vec2::new(300.0, 300.0);
        let rock = Asteroid::new(spot, 3, 1.0, &mut session.rng);
        session.asteroids.push(rock);
        session.ship_bullets.push(ship_bullet_at(spot));
        resolve(&mut session).unwrap();
        assert!(session.ship_bullets.is_empty());
        // parent replaced by exactly two tier-2 children at its position
        assert_eq!(session.asteroids.len(), 2);
        for child in &session.asteroids {
            assert_eq!(child.tier, 2);
            assert_eq!(child.body.position, spot);
        }
        assert_eq!(session.ship.score, SCORE_ASTEROID_TIER_3);
    }

    #[test]
    fn test_tier_1_asteroid_leaves_nothing() {
        let mut session = playing_session();
        let spot = Vec2::new(300.0, 300.0);
        let rock = Asteroid::new(spot, 1, 1.0, &mut session.rng);
        session.asteroids.push(rock);
        session.ship_bullets.push(ship_bullet_at(spot));
        resolve(&mut session).unwrap();
        assert!(session.asteroids.is_empty());
        assert_eq!(session.ship.score, SCORE_ASTEROID_TIER_1);
    }

    #[test]
    fn test_one_bullet_resolves_once() {
        // Two overlapping rocks, one bullet: only the first (creation
        // order) splits.
        let mut session = playing_session();
        let spot = Vec2::new(300.0, 300.0);
        let first = Asteroid::new(spot, 1, 1.0, &mut session.rng);
        let second = Asteroid::new(spot, 1, 1.0, &mut session.rng);
        session.asteroids.push(first);
        session.asteroids.push(second);
        session.ship_bullets.push(ship_bullet_at(spot));
        resolve(&mut session).unwrap();
        assert_eq!(session.asteroids.len(), 1);
        assert_eq!(session.ship.score, SCORE_ASTEROID_TIER_1);
    }

    #[test]
    fn test_asteroid_hit_teleports_ship() {
        let mut session = playing_session();
        session.ship.body.position = Vec2::new(100.0, 100.0);
        let rock = Asteroid::new(Vec2::new(100.0, 100.0), 3, 1.0, &mut session.rng);
        session.asteroids.push(rock);
        resolve(&mut session).unwrap();
        assert_eq!(session.ship.lives, STARTING_LIVES - 1);
        assert_eq!(session.ship.body.position, standard_spawn());
        // the rock survives the crash
        assert_eq!(session.asteroids.len(), 1);
        assert!(session.events.contains(&GameEvent::ShipHit));
    }

    #[test]
    fn test_saucer_bullet_hit_does_not_teleport() {
        let mut session = playing_session();
        session.ship.body.position = Vec2::new(100.0, 100.0);
        session
            .saucer_bullets
            .push(saucer_bullet_at(Vec2::new(100.0, 100.0)));
        resolve(&mut session).unwrap();
        assert_eq!(session.ship.lives, STARTING_LIVES - 1);
        assert_eq!(session.ship.body.position, Vec2::new(100.0, 100.0));
        assert!(session.saucer_bullets.is_empty());
    }

    #[test]
    fn test_fatal_hit_kills_ship() {
        let mut session = playing_session();
        session.ship.lives = 1;
        let rock = Asteroid::new(session.ship.body.position, 3, 1.0, &mut session.rng);
        session.asteroids.push(rock);
        resolve(&mut session).unwrap();
        assert_eq!(session.ship.lives, 0);
        assert!(!session.ship.is_alive);

        session.check_game_state();
        assert_eq!(session.state, GameState::Lose);
    }

    #[test]
    fn test_dead_ship_is_not_targeted() {
        let mut session = playing_session();
        session.ship.lives = 1;
        session.ship.take_hit();
        session
            .saucer_bullets
            .push(saucer_bullet_at(session.ship.body.position));
        resolve(&mut session).unwrap();
        assert_eq!(session.ship.lives, 0);
        // the bullet was not consumed by a dead ship
        assert_eq!(session.saucer_bullets.len(), 1);
    }
}
