//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of I/O:
//! - One tick per display frame, durations counted in ticks
//! - Randomness only through an injected `RandomSource`
//! - Side effects reported as `GameEvent`s, never performed
//! - No rendering, audio, or platform dependencies

pub mod achievements;
pub mod collision;
pub mod effects;
pub mod resolve;
pub mod rng;
pub mod session;
pub mod spawner;
pub mod state;
pub mod store;
pub mod tick;

pub use achievements::{AchievementId, AchievementNotice, AchievementTracker};
pub use resolve::PlayerHit;
pub use rng::{RandomSource, ScriptedRandom, default_rng};
pub use spawner::{EnemyStats, roll_enemy_kind, spawn_probability};
pub use state::{
    Bullet, Difficulty, Enemy, EnemyKind, GameEvent, GamePhase, GameState, Particle, PlayField,
    Player, PowerUp, PowerUpKind,
};
pub use store::EntityStore;
pub use tick::{TickInput, autopilot, tick};
