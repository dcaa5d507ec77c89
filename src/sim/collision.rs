//! Collision predicates for axis-aligned play-field geometry
//!
//! All entities are centered boxes. Bullets are points. Each check keeps its
//! own threshold: enemy bodies use a tighter box than bullets so that grazing
//! contact with the player does not count.

use glam::Vec2;

use super::state::{Bullet, Enemy, Player, PowerUp};
use crate::consts::{BODY_HITBOX_DIVISOR, POWER_UP_PICKUP_RANGE};

/// True if `point` lies strictly inside the box centered at `center`
#[inline]
pub fn point_in_box(point: Vec2, center: Vec2, half_extent: Vec2) -> bool {
    let d = (point - center).abs();
    d.x < half_extent.x && d.y < half_extent.y
}

/// Player bullet against an enemy rectangle
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    point_in_box(bullet.pos, enemy.pos, enemy.half_extent())
}

/// Enemy bullet against the player's half-extent box
pub fn bullet_hits_player(bullet: &Bullet, player: &Player) -> bool {
    point_in_box(bullet.pos, player.pos, player.half_extent())
}

/// Enemy body against the player, using combined extents over the body divisor
pub fn enemy_touches_player(enemy: &Enemy, player: &Player) -> bool {
    let reach = Vec2::new(
        (enemy.width + player.width) / BODY_HITBOX_DIVISOR,
        (enemy.height + player.height) / BODY_HITBOX_DIVISOR,
    );
    point_in_box(enemy.pos, player.pos, reach)
}

/// Power-up within pickup reach of the player
pub fn power_up_in_reach(power_up: &PowerUp, player: &Player) -> bool {
    point_in_box(
        power_up.pos,
        player.pos,
        Vec2::splat(POWER_UP_PICKUP_RANGE),
    )
}
