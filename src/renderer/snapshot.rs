//! Read-only frame snapshot handed to a renderer after each tick

use glam::Vec2;
use serde::Serialize;

use super::visual::{
    VisualDescriptor, bullet_visual, enemy_visual, particle_visual, player_visual,
    power_up_visual,
};
use crate::settings::Settings;
use crate::sim::GameState;

/// One drawable
#[derive(Debug, Clone, Serialize)]
pub struct Sprite {
    pub pos: Vec2,
    pub alpha: f32,
    pub visual: VisualDescriptor,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub width: f32,
    pub height: f32,
    /// Camera shake magnitude after settings are applied
    pub shake: f32,
    pub player: Sprite,
    pub enemies: Vec<Sprite>,
    pub bullets: Vec<Sprite>,
    pub power_ups: Vec<Sprite>,
    pub particles: Vec<Sprite>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        let store = &state.entities;
        let player = &store.player;

        // Blink while in the grace window
        let dim_phase = (player.invulnerability_ticks / 6) % 2 == 0;
        let player_alpha = if player.invulnerability_ticks > 0 && dim_phase {
            0.4
        } else {
            1.0
        };

        let particles = if settings.particles {
            store
                .particles
                .iter()
                .map(|p| Sprite {
                    pos: p.pos,
                    alpha: p.life,
                    visual: particle_visual(p),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            width: state.field.width,
            height: state.field.height,
            shake: if settings.effective_screen_shake() {
                state.screen_shake
            } else {
                0.0
            },
            player: Sprite {
                pos: player.pos,
                alpha: player_alpha,
                visual: player_visual(player.has_shield),
            },
            enemies: store
                .enemies
                .iter()
                .map(|e| Sprite {
                    pos: e.pos,
                    alpha: 1.0,
                    visual: enemy_visual(e.kind, e.width),
                })
                .collect(),
            bullets: store
                .bullets
                .iter()
                .map(|b| Sprite {
                    pos: b.pos,
                    alpha: 1.0,
                    visual: bullet_visual(b),
                })
                .collect(),
            power_ups: store
                .power_ups
                .iter()
                .map(|p| Sprite {
                    pos: p.pos,
                    alpha: 1.0,
                    visual: power_up_visual(p.kind, p.size),
                })
                .collect(),
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, Difficulty, ScriptedRandom, effects::explode};

    #[test]
    fn test_capture_respects_settings() {
        let mut state = GameState::default();
        state.start_new_game(Difficulty::Normal);
        state.entities.bullets.push(Bullet::enemy(Vec2::new(1.0, 2.0)));
        let mut rng = ScriptedRandom::constant(0.5);
        explode(&mut state, Vec2::ZERO, 0xffffff, 25, false, &mut rng);

        let snap = FrameSnapshot::capture(&state, &Settings::default());
        assert_eq!(snap.bullets.len(), 1);
        assert_eq!(snap.particles.len(), 26);
        assert!(snap.shake > 0.0);

        let quiet = Settings {
            particles: false,
            reduced_motion: true,
            ..Default::default()
        };
        let snap = FrameSnapshot::capture(&state, &quiet);
        assert!(snap.particles.is_empty());
        assert_eq!(snap.shake, 0.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::default();
        let snap = FrameSnapshot::capture(&state, &Settings::default());
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"player\""));
    }
}
