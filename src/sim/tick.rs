//! Per-frame simulation tick
//!
//! One call advances the session by exactly one display frame. Stages run
//! in a fixed order: player, bullets, spawning, enemies, power-ups,
//! particles, grace window and shake, level timer.

use glam::Vec2;

use super::collision::{
    bullet_hits_enemy, bullet_hits_player, enemy_touches_player, power_up_in_reach,
};
use super::effects::{age_particles, decay_shake};
use super::resolve::{collect_power_up, damage_player, destroy_enemy, enemy_escaped, hit_enemy};
use super::rng::RandomSource;
use super::spawner::{enemy_return_fire, maybe_spawn_enemy};
use super::state::{Bullet, GameEvent, GameState};
use crate::consts::*;
use crate::ms_to_ticks;

/// Abstract input intent for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire held or pressed
    pub fire: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Absolute pointer/touch position that overrides player coordinates
    pub pointer: Option<Vec2>,
    /// Idle/demo mode - autopilot flies the craft
    pub idle_mode: bool,
}

/// Advance the game state by one tick and return the events raised since
/// the previous call
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    if input.pause {
        state.toggle_pause();
    }

    if !state.is_playing() {
        return state.drain_events();
    }

    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    state.time_ticks += 1;
    state.achievements.prune_notices(state.time_ticks);
    state.escape_warning_ticks = state.escape_warning_ticks.saturating_sub(1);

    move_player(state, &input);
    if input.fire {
        try_fire(state);
    }

    update_bullets(state);
    if !state.is_playing() {
        return state.drain_events();
    }

    maybe_spawn_enemy(state, rng);

    update_enemies(state, rng);
    if !state.is_playing() {
        return state.drain_events();
    }

    update_power_ups(state);
    age_particles(&mut state.entities.particles);

    let player = &mut state.entities.player;
    player.invulnerability_ticks = player.invulnerability_ticks.saturating_sub(1);
    state.screen_shake = decay_shake(state.screen_shake);

    state.timer_ticks = state.timer_ticks.saturating_sub(1);
    if state.timer_ticks == 0 {
        state.complete_level();
    }

    state.drain_events()
}

/// Apply movement intent, then the pointer override, then clamp
fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.entities.player;
    let mut dir = Vec2::ZERO;
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    player.pos += dir * PLAYER_SPEED;

    if let Some(pointer) = input.pointer {
        player.pos = pointer;
    }
    player.clamp_to(&state.field);
}

/// Fire if the shot cooldown has elapsed
fn try_fire(state: &mut GameState) {
    let cooldown = ms_to_ticks(SHOT_COOLDOWN_MS) as u64;
    let now = state.time_ticks;
    if state
        .last_shot_tick
        .is_some_and(|last| now.saturating_sub(last) < cooldown)
    {
        return;
    }
    state.last_shot_tick = Some(now);

    let player = &mut state.entities.player;
    let muzzle = Vec2::new(player.pos.x, player.pos.y - player.height / 2.0);
    let straight = Vec2::new(0.0, -BULLET_SPEED);

    let count = if player.triple_shot_charges > 0 {
        player.triple_shot_charges -= 1;
        let spread = Vec2::new(TRIPLE_SHOT_SPREAD, 0.0);
        state.entities.bullets.extend([
            Bullet::player(muzzle, straight),
            Bullet::player(muzzle, straight - spread),
            Bullet::player(muzzle, straight + spread),
        ]);
        3
    } else {
        state.entities.bullets.push(Bullet::player(muzzle, straight));
        1
    };
    state.emit(GameEvent::Shot { bullets: count });
}

/// Move bullets, cull strays, and resolve enemy bullets against the player
fn update_bullets(state: &mut GameState) {
    let mut bullets = std::mem::take(&mut state.entities.bullets);
    bullets.retain_mut(|bullet| {
        bullet.pos += bullet.vel;
        if !state.field.contains_padded(bullet.pos, BULLET_CULL_PADDING) {
            return false;
        }
        if bullet.is_enemy
            && state.entities.player.is_vulnerable()
            && bullet_hits_player(bullet, &state.entities.player)
        {
            damage_player(state);
            return false;
        }
        true
    });
    // Nothing spawns bullets during this pass, so the taken list is complete
    state.entities.bullets = bullets;
}

/// Move enemies, let them fire, and resolve player bullets, body contact,
/// destruction, and escapes
fn update_enemies(state: &mut GameState, rng: &mut impl RandomSource) {
    let cooldown = state.difficulty.enemy_fire_cooldown_ticks();
    let mut enemies = std::mem::take(&mut state.entities.enemies).into_iter();
    let mut survivors = Vec::with_capacity(enemies.len());

    while let Some(mut enemy) = enemies.next() {
        enemy.pos.y += enemy.speed;

        let now = state.time_ticks;
        if let Some(shot) = enemy_return_fire(&mut enemy, state.field.height, now, cooldown) {
            state.entities.bullets.push(shot);
        }

        // Player bullets against this enemy
        let mut i = 0;
        while i < state.entities.bullets.len() && !enemy.is_destroyed() {
            let bullet = &state.entities.bullets[i];
            if !bullet.is_enemy && bullet_hits_enemy(bullet, &enemy) {
                let bullet = state.entities.bullets.swap_remove(i);
                hit_enemy(state, &mut enemy, &bullet, rng);
            } else {
                i += 1;
            }
        }

        // Body contact
        if !enemy.is_destroyed()
            && state.entities.player.is_vulnerable()
            && enemy_touches_player(&enemy, &state.entities.player)
        {
            damage_player(state);
            enemy.hp = 0;
        }

        if enemy.is_destroyed() {
            destroy_enemy(state, &enemy, rng);
        } else if enemy.pos.y - enemy.height / 2.0 > state.field.height {
            enemy_escaped(state, &enemy);
        } else {
            survivors.push(enemy);
        }

        // Game over freezes whoever has not moved yet
        if !state.is_playing() {
            survivors.extend(enemies);
            break;
        }
    }

    state.entities.enemies = survivors;
}

/// Drift power-ups downward, collect the ones in reach, drop the fallen
fn update_power_ups(state: &mut GameState) {
    let power_ups = std::mem::take(&mut state.entities.power_ups);
    let mut remaining = Vec::with_capacity(power_ups.len());

    for mut power_up in power_ups {
        power_up.pos.y += POWER_UP_FALL_SPEED;
        if power_up_in_reach(&power_up, &state.entities.player) {
            collect_power_up(state, power_up.kind);
        } else if power_up.pos.y - power_up.size <= state.field.height {
            remaining.push(power_up);
        }
    }

    state.entities.power_ups = remaining;
}

/// Demo-mode input: grab a power-up when nothing is close, otherwise line
/// up under the lowest enemy. Always fires.
pub fn autopilot(state: &GameState) -> TickInput {
    let player = &state.entities.player;

    let lowest_enemy = state
        .entities
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(std::cmp::Ordering::Equal));

    let danger_close = lowest_enemy
        .map(|e| e.pos.y > state.field.height * 0.5)
        .unwrap_or(false);

    let power_up_x = if danger_close {
        None
    } else {
        nearest_power_up(state)
    };
    let target_x = power_up_x.or(lowest_enemy.map(|e| e.pos.x));

    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };
    if let Some(x) = target_x {
        let dx = x - player.pos.x;
        if dx.abs() > PLAYER_SPEED {
            input.left = dx < 0.0;
            input.right = dx > 0.0;
        }
    }
    input
}

fn nearest_power_up(state: &GameState) -> Option<f32> {
    let player = &state.entities.player;
    state
        .entities
        .power_ups
        .iter()
        .min_by(|a, b| {
            let da = (a.pos - player.pos).length_squared();
            let db = (b.pos - player.pos).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.pos.x)
}
