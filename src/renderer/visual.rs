//! Visual descriptors for entity types
//!
//! A renderer looks up `asset_key` first and draws `shape` when the sprite
//! is missing, so the simulation never needs to know which assets loaded.

use serde::Serialize;

use crate::sim::{Bullet, EnemyKind, Particle, PowerUpKind};

/// Vector fallback shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    /// Upward-pointing triangle (player craft)
    Ship,
    /// Downward-pointing triangle
    InvertedTriangle,
    Diamond,
    Hexagon,
    Circle,
    /// Short vertical streak
    Streak,
}

/// How to draw one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualDescriptor {
    pub shape: Shape,
    /// Optional sprite asset
    pub asset_key: Option<&'static str>,
    pub color: u32,
    /// Draw size in play-field units
    pub size: f32,
    pub glow: bool,
}

pub fn player_visual(shielded: bool) -> VisualDescriptor {
    VisualDescriptor {
        shape: Shape::Ship,
        asset_key: Some("player"),
        color: 0x00ffcc,
        size: crate::consts::PLAYER_SIZE,
        glow: shielded,
    }
}

pub fn enemy_visual(kind: EnemyKind, size: f32) -> VisualDescriptor {
    let (shape, asset_key) = match kind {
        EnemyKind::Basic => (Shape::InvertedTriangle, "enemy_basic"),
        EnemyKind::Fast => (Shape::Diamond, "enemy_fast"),
        EnemyKind::Heavy => (Shape::Hexagon, "enemy_heavy"),
    };
    VisualDescriptor {
        shape,
        asset_key: Some(asset_key),
        color: kind.color(),
        size,
        glow: kind == EnemyKind::Heavy,
    }
}

pub fn power_up_visual(kind: PowerUpKind, size: f32) -> VisualDescriptor {
    let asset_key = match kind {
        PowerUpKind::TripleShot => "powerup_triple",
        PowerUpKind::Shield => "powerup_shield",
    };
    VisualDescriptor {
        shape: Shape::Circle,
        asset_key: Some(asset_key),
        color: kind.color(),
        size,
        glow: true,
    }
}

/// Bullets are always vector-drawn
pub fn bullet_visual(bullet: &Bullet) -> VisualDescriptor {
    VisualDescriptor {
        shape: Shape::Streak,
        asset_key: None,
        color: bullet.color,
        size: if bullet.is_enemy { 6.0 } else { 4.0 },
        glow: true,
    }
}

pub fn particle_visual(particle: &Particle) -> VisualDescriptor {
    VisualDescriptor {
        shape: Shape::Circle,
        asset_key: None,
        color: particle.color,
        size: particle.size,
        glow: particle.glow,
    }
}

/// 0xRRGGBB -> linear [r, g, b, a] floats
pub fn rgba(color: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((color >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha.clamp(0.0, 1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_enemy_shapes_distinct() {
        let shapes: Vec<_> = [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Heavy]
            .iter()
            .map(|k| enemy_visual(*k, 60.0).shape)
            .collect();
        assert_eq!(
            shapes,
            vec![Shape::InvertedTriangle, Shape::Diamond, Shape::Hexagon]
        );
        assert_eq!(enemy_visual(EnemyKind::Heavy, 80.0).asset_key, Some("enemy_heavy"));
    }

    #[test]
    fn test_bullets_have_no_asset() {
        let b = Bullet::enemy(Vec2::ZERO);
        let v = bullet_visual(&b);
        assert_eq!(v.asset_key, None);
        assert_eq!(v.color, Bullet::ENEMY_COLOR);
    }

    #[test]
    fn test_rgba() {
        assert_eq!(rgba(0xff0000, 1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba(0x00ff00, 2.0), [0.0, 1.0, 0.0, 1.0]);
    }
}
