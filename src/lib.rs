//! Nova Strike - a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation core (entities, spawning, collisions, game state machine)
//! - `renderer`: Visual descriptors and per-frame snapshots for a renderer
//! - `platform`: Input device state -> abstract tick input
//! - `audio`: Sound cue mapping and playback dispatch
//! - `ui`: HUD view model
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per display refresh)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Default play-field dimensions
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Distance of the start position above the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 100.0;
    pub const MAX_HEALTH: u8 = 3;
    /// Grace window after any hit (including shield absorption)
    pub const INVULNERABILITY_TICKS: u32 = 120;

    /// Player weapon
    pub const SHOT_COOLDOWN_MS: u32 = 150;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const TRIPLE_SHOT_SPREAD: f32 = 2.0;
    pub const TRIPLE_SHOT_CHARGES: u32 = 50;
    pub const PLAYER_BULLET_POWER: i32 = 1;

    /// Enemy weapon
    pub const ENEMY_BULLET_SPEED: f32 = 5.0;
    pub const ENEMY_BULLET_POWER: i32 = 1;
    /// Enemies only fire while above this fraction of the field height
    pub const ENEMY_FIRE_ZONE: f32 = 0.6;

    /// Bullets are culled once this far outside the field
    pub const BULLET_CULL_PADDING: f32 = 50.0;

    /// Enemy body hitbox divisor (bullets use 2.0)
    pub const BODY_HITBOX_DIVISOR: f32 = 2.5;
    pub const ESCAPE_PENALTY: u64 = 50;

    /// Power-ups
    pub const POWER_UP_SIZE: f32 = 20.0;
    pub const POWER_UP_FALL_SPEED: f32 = 2.0;
    pub const POWER_UP_PICKUP_RANGE: f32 = 30.0;
    pub const POWER_UP_DROP_CHANCE: f32 = 0.1;

    /// Level timer
    pub const LEVEL_DURATION_SECS: u32 = 45;

    /// Particles
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_DAMPING: f32 = 0.96;

    /// Camera shake decay per tick
    pub const SHAKE_DECAY: f32 = 0.9;

    /// Score needed for the ace pilot achievement
    pub const ACE_PILOT_SCORE: u64 = 5000;
    /// Level that awards survivor when its timer runs out
    pub const SURVIVOR_LEVEL: u32 = 3;

    /// UI notice durations
    pub const ACHIEVEMENT_NOTICE_MS: u32 = 3000;
    pub const ESCAPE_WARNING_MS: u32 = 1000;
}

/// Convert a wall-clock duration to whole ticks at the nominal rate
#[inline]
pub const fn ms_to_ticks(ms: u32) -> u32 {
    ms * consts::TICKS_PER_SECOND / 1000
}

/// Level length in ticks
#[inline]
pub const fn level_duration_ticks() -> u32 {
    consts::LEVEL_DURATION_SECS * consts::TICKS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(consts::SHOT_COOLDOWN_MS), 9);
        assert_eq!(ms_to_ticks(2500), 150);
        assert_eq!(ms_to_ticks(1500), 90);
        assert_eq!(level_duration_ticks(), 2700);
    }
}
