//! Enemy spawning, enemy return fire, and power-up drops
//!
//! All randomness comes through a `RandomSource` so callers control the
//! outcome of every roll.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Bullet, Difficulty, Enemy, EnemyKind, GameState, PowerUp, PowerUpKind};
use crate::consts::*;

/// Classify a uniform roll in [0, 1) into an enemy type for `level`
pub fn roll_enemy_kind(level: u32, roll: f32) -> EnemyKind {
    // (basic upper bound, fast upper bound); the rest is heavy
    let (basic, fast) = match level {
        0 | 1 => (0.7, 1.0),
        2 => (0.4, 0.8),
        _ => (0.3, 0.7),
    };
    if roll < basic {
        EnemyKind::Basic
    } else if roll < fast {
        EnemyKind::Fast
    } else {
        EnemyKind::Heavy
    }
}

/// Per-type parameters before placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub hp: i32,
    pub speed: f32,
    pub score_value: u64,
    pub size: f32,
}

impl EnemyKind {
    /// Stats scaled by level and difficulty
    pub fn stats(&self, level: u32, difficulty: Difficulty) -> EnemyStats {
        let d = difficulty.multiplier();
        let level = level as f32;
        match self {
            EnemyKind::Basic => EnemyStats {
                hp: 1,
                speed: (2.0 + 0.2 * level) * d,
                score_value: 100,
                size: 60.0,
            },
            EnemyKind::Fast => EnemyStats {
                hp: 1,
                speed: (4.0 + 0.5 * level) * d,
                score_value: 150,
                size: 60.0,
            },
            EnemyKind::Heavy => EnemyStats {
                hp: (3.0 * d).ceil() as i32,
                speed: (1.5 + 0.1 * level) * d,
                score_value: 500,
                size: 80.0,
            },
        }
    }
}

/// Build an enemy of `kind` at horizontal roll `x_roll`, just above the top edge
pub fn make_enemy(
    kind: EnemyKind,
    level: u32,
    difficulty: Difficulty,
    field_width: f32,
    x_roll: f32,
    now: u64,
) -> Enemy {
    let stats = kind.stats(level, difficulty);
    let x = x_roll * (field_width - stats.size).max(0.0) + stats.size / 2.0;
    Enemy {
        pos: Vec2::new(x, -stats.size / 2.0),
        width: stats.size,
        height: stats.size,
        hp: stats.hp,
        max_hp: stats.hp,
        speed: stats.speed,
        kind,
        score_value: stats.score_value,
        last_shot_tick: now,
    }
}

/// Per-tick probability of a new enemy
pub fn spawn_probability(level: u32, difficulty: Difficulty) -> f32 {
    (0.01 + 0.002 * level as f32) * difficulty.spawn_rate_factor()
}

/// Cadence check: possibly add one enemy. Returns true if one was spawned.
pub fn maybe_spawn_enemy(state: &mut GameState, rng: &mut impl RandomSource) -> bool {
    if rng.next_f32() >= spawn_probability(state.level, state.difficulty) {
        return false;
    }
    let kind = roll_enemy_kind(state.level, rng.next_f32());
    let x_roll = rng.next_f32();
    let enemy = make_enemy(
        kind,
        state.level,
        state.difficulty,
        state.field.width,
        x_roll,
        state.time_ticks,
    );
    log::debug!(
        "Spawned {} enemy at x={:.0} (level {})",
        kind.as_str(),
        enemy.pos.x,
        state.level
    );
    state.entities.enemies.push(enemy);
    true
}

/// Return fire: a bullet if the enemy is high enough and off cooldown.
/// Resets the enemy's shot clock when it fires.
pub fn enemy_return_fire(
    enemy: &mut Enemy,
    field_height: f32,
    now: u64,
    cooldown: u64,
) -> Option<Bullet> {
    if enemy.pos.y >= field_height * ENEMY_FIRE_ZONE {
        return None;
    }
    if now.saturating_sub(enemy.last_shot_tick) < cooldown {
        return None;
    }
    enemy.last_shot_tick = now;
    Some(Bullet::enemy(Vec2::new(
        enemy.pos.x,
        enemy.pos.y + enemy.height / 2.0,
    )))
}

/// Drop roll on enemy destruction
pub fn roll_power_up(pos: Vec2, rng: &mut impl RandomSource) -> Option<PowerUp> {
    if rng.next_f32() >= POWER_UP_DROP_CHANCE {
        return None;
    }
    let kind = if rng.next_f32() < 0.5 {
        PowerUpKind::TripleShot
    } else {
        PowerUpKind::Shield
    };
    Some(PowerUp::new(pos, kind))
}
