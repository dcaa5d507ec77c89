//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here; there is no ambient state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::achievements::{AchievementId, AchievementTracker};
use super::store::EntityStore;
use crate::consts::*;
use crate::{level_duration_ticks, ms_to_ticks};

/// Chosen difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Scalar applied to enemy speed and heavy hp
    pub fn multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Scalar applied to the per-tick spawn probability
    pub fn spawn_rate_factor(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 2.0,
        }
    }

    /// Minimum ticks between two shots of the same enemy
    pub fn enemy_fire_cooldown_ticks(&self) -> u64 {
        let ms = match self {
            Difficulty::Easy | Difficulty::Normal => 2500,
            Difficulty::Hard => 1500,
        };
        ms_to_ticks(ms) as u64
    }
}

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu, nothing simulated
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Frozen; no entity or timer mutation
    Paused,
    /// Health reached zero
    GameOver,
    /// Level timer reached zero
    LevelComplete,
}

/// Rectangular play-field matching the display surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Canonical player start: centered, offset above the bottom edge
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - PLAYER_START_OFFSET)
    }

    /// True if `pos` lies within the field grown by `pad` on every side
    pub fn contains_padded(&self, pos: Vec2, pad: f32) -> bool {
        pos.x >= -pad && pos.x <= self.width + pad && pos.y >= -pad && pos.y <= self.height + pad
    }
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Damage is ignored while > 0
    pub invulnerability_ticks: u32,
    /// One-hit consumable shield
    pub has_shield: bool,
    /// Remaining triple-fire volleys
    pub triple_shot_charges: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            invulnerability_ticks: 0,
            has_shield: false,
            triple_shot_charges: 0,
        }
    }

    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_vulnerable(&self) -> bool {
        self.invulnerability_ticks == 0
    }

    /// Keep the craft fully inside the field
    pub fn clamp_to(&mut self, field: &PlayField) {
        let half = self.half_extent();
        self.pos.x = self.pos.x.clamp(half.x, (field.width - half.x).max(half.x));
        self.pos.y = self.pos.y.clamp(half.y, (field.height - half.y).max(half.y));
    }
}

/// A projectile from either side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Damage dealt on hit
    pub power: i32,
    /// Enemy bullets target the player, player bullets target enemies
    pub is_enemy: bool,
    pub color: u32,
}

impl Bullet {
    pub const PLAYER_COLOR: u32 = 0x00e5ff;
    pub const ENEMY_COLOR: u32 = 0xff3366;

    pub fn player(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            power: PLAYER_BULLET_POWER,
            is_enemy: false,
            color: Self::PLAYER_COLOR,
        }
    }

    pub fn enemy(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, ENEMY_BULLET_SPEED),
            power: ENEMY_BULLET_POWER,
            is_enemy: true,
            color: Self::ENEMY_COLOR,
        }
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Heavy,
}

impl EnemyKind {
    pub fn color(&self) -> u32 {
        match self {
            EnemyKind::Basic => 0xff4d4d,
            EnemyKind::Fast => 0xffb000,
            EnemyKind::Heavy => 0xb04dff,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
            EnemyKind::Fast => "fast",
            EnemyKind::Heavy => "heavy",
        }
    }
}

/// A descending hostile craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub hp: i32,
    pub max_hp: i32,
    /// Downward pixels per tick
    pub speed: f32,
    pub kind: EnemyKind,
    pub score_value: u64,
    /// Session tick of the last shot (spawn tick until the first shot)
    pub last_shot_tick: u64,
}

impl Enemy {
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0
    }
}

/// A cosmetic particle (never affects gameplay)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases every tick
    pub life: f32,
    pub color: u32,
    pub size: f32,
    pub glow: bool,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    TripleShot,
    Shield,
}

impl PowerUpKind {
    pub fn color(&self) -> u32 {
        match self {
            PowerUpKind::TripleShot => 0xffd700,
            PowerUpKind::Shield => 0x00aaff,
        }
    }
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub color: u32,
    pub size: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            color: kind.color(),
            size: POWER_UP_SIZE,
        }
    }
}

/// Side effects raised during a tick or a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Player fired `bullets` projectiles
    Shot { bullets: usize },
    /// A player bullet damaged an enemy without necessarily killing it
    EnemyHit { kind: EnemyKind, pos: Vec2 },
    EnemyDestroyed { kind: EnemyKind, pos: Vec2, score: u64 },
    /// An enemy left through the bottom edge
    EnemyEscaped { kind: EnemyKind, penalty: u64 },
    PlayerDamaged { health: u8 },
    ShieldAbsorbed,
    PowerUpCollected { kind: PowerUpKind },
    Explosion { pos: Vec2, heavy: bool, shake: f32 },
    AchievementUnlocked { id: AchievementId },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: PlayField,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    pub score: u64,
    pub health: u8,
    /// Ticks left on the level timer
    pub timer_ticks: u32,
    /// Session clock, advances only while Playing
    pub time_ticks: u64,
    /// Tick of the last player shot
    pub last_shot_tick: Option<u64>,
    pub entities: EntityStore,
    /// Camera shake magnitude consumed by the renderer
    pub screen_shake: f32,
    pub achievements: AchievementTracker,
    /// Ticks left on the "enemy escaped" warning
    pub escape_warning_ticks: u32,
    /// Events not yet handed to collaborators
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(PlayField::default())
    }
}

impl GameState {
    /// Fresh session sitting on the Start menu
    pub fn new(field: PlayField) -> Self {
        Self {
            field,
            difficulty: Difficulty::Normal,
            phase: GamePhase::Start,
            level: 1,
            score: 0,
            health: MAX_HEALTH,
            timer_ticks: level_duration_ticks(),
            time_ticks: 0,
            last_shot_tick: None,
            entities: EntityStore::new(&field),
            screen_shake: 0.0,
            achievements: AchievementTracker::default(),
            escape_warning_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Record an event for the collaborators
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand over all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Unlock an achievement, emitting an event the first time only
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        let newly = self.achievements.unlock(id, self.time_ticks);
        if newly {
            log::info!("Achievement unlocked: {}", id.title());
            self.emit(GameEvent::AchievementUnlocked { id });
        }
        newly
    }

    /// Add to the score, floored at zero for negative deltas
    pub fn adjust_score(&mut self, delta: i64) {
        self.score = if delta >= 0 {
            self.score.saturating_add(delta as u64)
        } else {
            self.score.saturating_sub(delta.unsigned_abs())
        };
    }

    /// Whole seconds left on the level timer (rounded up)
    pub fn seconds_remaining(&self) -> u32 {
        self.timer_ticks.div_ceil(TICKS_PER_SECOND)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
