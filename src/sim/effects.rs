//! Explosion particles and camera shake
//!
//! Purely cosmetic. Nothing here feeds back into gameplay.

use glam::Vec2;
use std::f32::consts::TAU;

use super::rng::RandomSource;
use super::state::{GameEvent, GameState, Particle};
use crate::consts::{PARTICLE_DAMPING, PARTICLE_DECAY, SHAKE_DECAY};

/// Particles in a bullet-impact burst
pub const HIT_SPARKS: usize = 5;
/// Particles in a regular enemy explosion
pub const LIGHT_EXPLOSION: usize = 25;
/// Particles in a heavy enemy explosion
pub const HEAVY_EXPLOSION: usize = 50;

/// Shake contributed per radial particle
const SHAKE_PER_PARTICLE: f32 = 0.2;

/// Append a core flash plus `count` radial particles at `pos`
pub fn spawn_explosion(
    particles: &mut Vec<Particle>,
    pos: Vec2,
    color: u32,
    count: usize,
    heavy: bool,
    rng: &mut impl RandomSource,
) {
    particles.push(Particle {
        pos,
        vel: Vec2::ZERO,
        life: 1.0,
        color,
        size: if heavy { 40.0 } else { 20.0 },
        glow: true,
    });

    let (min_speed, max_speed) = if heavy { (2.0, 10.0) } else { (1.0, 6.0) };
    for _ in 0..count {
        let angle = rng.range(0.0, TAU);
        let speed = rng.range(min_speed, max_speed);
        let size = rng.range(2.0, 6.0);
        particles.push(Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: 1.0,
            color,
            size,
            glow: heavy,
        });
    }
}

/// Camera shake requested by an explosion of `count` particles
pub fn shake_for(count: usize) -> f32 {
    count as f32 * SHAKE_PER_PARTICLE
}

/// Spawn an explosion into the session: particles, shake, and an event
/// the audio collaborator turns into a cue
pub fn explode(
    state: &mut GameState,
    pos: Vec2,
    color: u32,
    count: usize,
    heavy: bool,
    rng: &mut impl RandomSource,
) {
    spawn_explosion(&mut state.entities.particles, pos, color, count, heavy, rng);
    let shake = shake_for(count);
    state.screen_shake = state.screen_shake.max(shake);
    state.emit(GameEvent::Explosion { pos, heavy, shake });
}

/// Move, slow, and age every particle; drop the dead ones
pub fn age_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel *= PARTICLE_DAMPING;
        particle.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}

/// One tick of multiplicative shake decay
pub fn decay_shake(shake: f32) -> f32 {
    let shake = shake * SHAKE_DECAY;
    if shake < 0.01 { 0.0 } else { shake }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;

    #[test]
    fn test_explosion_counts() {
        let mut rng = ScriptedRandom::constant(0.5);
        let mut particles = Vec::new();
        spawn_explosion(&mut particles, Vec2::ZERO, 0xffffff, LIGHT_EXPLOSION, false, &mut rng);
        assert_eq!(particles.len(), 1 + LIGHT_EXPLOSION);
        assert!(particles[0].glow);
        assert_eq!(particles[0].size, 20.0);
        assert!(particles.iter().all(|p| p.life == 1.0));

        particles.clear();
        spawn_explosion(&mut particles, Vec2::ZERO, 0xffffff, HEAVY_EXPLOSION, true, &mut rng);
        assert_eq!(particles.len(), 1 + HEAVY_EXPLOSION);
        assert_eq!(particles[0].size, 40.0);
    }

    #[test]
    fn test_particles_die_linearly() {
        let mut rng = ScriptedRandom::constant(0.25);
        let mut particles = Vec::new();
        spawn_explosion(&mut particles, Vec2::ZERO, 0, HIT_SPARKS, false, &mut rng);

        let mut last = 1.0;
        for _ in 0..10 {
            age_particles(&mut particles);
            let life = particles[0].life;
            assert!(life < last);
            last = life;
        }
        // 1.0 / 0.02 = 50 ticks total
        for _ in 0..45 {
            age_particles(&mut particles);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_shake_decay() {
        assert!((decay_shake(10.0) - 9.0).abs() < 1e-5);
        assert_eq!(decay_shake(0.011), 0.0);

        let mut shake = shake_for(HEAVY_EXPLOSION);
        assert!((shake - 10.0).abs() < 1e-5);
        for _ in 0..200 {
            shake = decay_shake(shake);
        }
        assert_eq!(shake, 0.0);
    }

    #[test]
    fn test_explode_raises_shake_and_emits() {
        let mut state = GameState::default();
        state.screen_shake = 7.0;
        let mut rng = ScriptedRandom::constant(0.5);
        explode(&mut state, Vec2::ONE, 0, HIT_SPARKS, false, &mut rng);
        // Smaller explosions never reduce an ongoing shake
        assert_eq!(state.screen_shake, 7.0);
        assert_eq!(state.entities.particles.len(), 1 + HIT_SPARKS);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::Explosion { heavy: false, .. })
        ));
    }
}
