//! Entity collections owned by a session

use serde::{Deserialize, Serialize};

use super::state::{Bullet, Enemy, Particle, PlayField, Player, PowerUp};

/// The player singleton plus every unordered entity collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub power_ups: Vec<PowerUp>,
}

impl EntityStore {
    pub fn new(field: &PlayField) -> Self {
        Self {
            player: Player::new(field.player_start()),
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            power_ups: Vec::new(),
        }
    }

    /// Clear every collection and put a fresh player at the start position
    pub fn reset(&mut self, field: &PlayField) {
        *self = Self::new(field);
    }

    /// Drop enemies, bullets and power-ups; the player and particles stay
    pub fn clear_hostiles(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
    }

    pub fn player_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| !b.is_enemy)
    }

    pub fn enemy_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.is_enemy)
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
            && self.enemies.is_empty()
            && self.particles.is_empty()
            && self.power_ups.is_empty()
    }
}
