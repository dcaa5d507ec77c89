//! Collision outcomes
//!
//! What happens once a collision predicate fires: damage, destruction,
//! pickups, escapes, and the score/achievement side effects they carry.

use super::achievements::AchievementId;
use super::effects::{HEAVY_EXPLOSION, HIT_SPARKS, LIGHT_EXPLOSION, explode};
use super::rng::RandomSource;
use super::spawner::roll_power_up;
use super::state::{Bullet, Enemy, EnemyKind, GameEvent, GameState, PowerUpKind};
use crate::consts::*;
use crate::ms_to_ticks;

/// Result of something touching the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerHit {
    /// Still in the grace window
    Ignored,
    /// Shield consumed, health untouched
    Absorbed,
    /// Lost one health point
    Damaged,
    /// Lost the last health point
    Fatal,
}

/// Apply one hit to the player. Any non-ignored hit restarts the grace window.
pub fn damage_player(state: &mut GameState) -> PlayerHit {
    let player = &mut state.entities.player;
    if !player.is_vulnerable() {
        return PlayerHit::Ignored;
    }
    player.invulnerability_ticks = INVULNERABILITY_TICKS;

    if player.has_shield {
        player.has_shield = false;
        state.emit(GameEvent::ShieldAbsorbed);
        state.unlock(AchievementId::ShieldMaster);
        return PlayerHit::Absorbed;
    }

    state.health = state.health.saturating_sub(1);
    state.emit(GameEvent::PlayerDamaged {
        health: state.health,
    });
    if state.health == 0 {
        state.end_game();
        PlayerHit::Fatal
    } else {
        PlayerHit::Damaged
    }
}

/// A player bullet struck `enemy`: subtract its power and throw sparks
pub fn hit_enemy(
    state: &mut GameState,
    enemy: &mut Enemy,
    bullet: &Bullet,
    rng: &mut impl RandomSource,
) {
    enemy.hp -= bullet.power;
    state.emit(GameEvent::EnemyHit {
        kind: enemy.kind,
        pos: bullet.pos,
    });
    explode(state, bullet.pos, enemy.kind.color(), HIT_SPARKS, false, rng);
}

/// Score, achievements, explosion, and drop roll for a dead enemy
pub fn destroy_enemy(state: &mut GameState, enemy: &Enemy, rng: &mut impl RandomSource) {
    state.adjust_score(enemy.score_value as i64);
    state.emit(GameEvent::EnemyDestroyed {
        kind: enemy.kind,
        pos: enemy.pos,
        score: enemy.score_value,
    });
    state.unlock(AchievementId::FirstBlood);
    if state.score >= ACE_PILOT_SCORE {
        state.unlock(AchievementId::AcePilot);
    }

    let heavy = enemy.kind == EnemyKind::Heavy;
    let count = if heavy { HEAVY_EXPLOSION } else { LIGHT_EXPLOSION };
    explode(state, enemy.pos, enemy.kind.color(), count, heavy, rng);

    if let Some(power_up) = roll_power_up(enemy.pos, rng) {
        log::debug!("Dropped {:?} power-up", power_up.kind);
        state.entities.power_ups.push(power_up);
    }
}

/// An enemy left through the bottom edge
pub fn enemy_escaped(state: &mut GameState, enemy: &Enemy) {
    state.adjust_score(-(ESCAPE_PENALTY as i64));
    state.escape_warning_ticks = ms_to_ticks(ESCAPE_WARNING_MS);
    log::debug!("{} enemy escaped, score now {}", enemy.kind.as_str(), state.score);
    state.emit(GameEvent::EnemyEscaped {
        kind: enemy.kind,
        penalty: ESCAPE_PENALTY,
    });
}

/// Apply a picked-up power-up to the player
pub fn collect_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::TripleShot => {
            state.entities.player.triple_shot_charges = TRIPLE_SHOT_CHARGES;
            state.unlock(AchievementId::PowerHungry);
        }
        PowerUpKind::Shield => {
            state.entities.player.has_shield = true;
        }
    }
    log::debug!("Collected {:?}", kind);
    state.emit(GameEvent::PowerUpCollected { kind });
}
