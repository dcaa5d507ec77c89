//! Game state machine
//!
//! Start -> Playing <-> Paused, Playing -> GameOver | LevelComplete,
//! LevelComplete -> Playing (next level), and any of GameOver,
//! LevelComplete, Paused -> Start. Requests that do not match the current
//! phase are ignored and return false.

use super::achievements::AchievementId;
use super::state::{Difficulty, GameEvent, GamePhase, GameState, PlayField};
use crate::consts::{MAX_HEALTH, SURVIVOR_LEVEL};
use crate::level_duration_ticks;

impl GameState {
    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!("Phase {:?} -> {:?}", from, to);
        self.emit(GameEvent::PhaseChanged { from, to });
    }

    /// Clear all per-session values back to level 1
    fn reset_session(&mut self) {
        self.level = 1;
        self.score = 0;
        self.health = MAX_HEALTH;
        self.timer_ticks = level_duration_ticks();
        self.time_ticks = 0;
        self.last_shot_tick = None;
        self.screen_shake = 0.0;
        self.escape_warning_ticks = 0;
        self.entities.reset(&self.field);
        self.achievements.clear_notices();
    }

    /// Start -> Playing with the chosen difficulty
    pub fn start_new_game(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != GamePhase::Start {
            log::debug!("Ignoring new game request in {:?}", self.phase);
            return false;
        }
        self.difficulty = difficulty;
        self.reset_session();
        log::info!("New game on {}", difficulty.as_str());
        self.set_phase(GamePhase::Playing);
        true
    }

    /// Playing <-> Paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => self.set_phase(GamePhase::Paused),
            GamePhase::Paused => self.set_phase(GamePhase::Playing),
            _ => return false,
        }
        true
    }

    /// LevelComplete -> Playing on the next level. Player position and
    /// power-ups carry over.
    pub fn next_level(&mut self) -> bool {
        if self.phase != GamePhase::LevelComplete {
            log::debug!("Ignoring next level request in {:?}", self.phase);
            return false;
        }
        self.level += 1;
        self.health = MAX_HEALTH;
        self.timer_ticks = level_duration_ticks();
        self.entities.clear_hostiles();
        log::info!("Starting level {}", self.level);
        self.set_phase(GamePhase::Playing);
        true
    }

    /// GameOver | LevelComplete | Paused -> Start, discarding the session
    pub fn return_to_menu(&mut self) -> bool {
        match self.phase {
            GamePhase::GameOver | GamePhase::LevelComplete | GamePhase::Paused => {
                self.reset_session();
                self.set_phase(GamePhase::Start);
                true
            }
            _ => false,
        }
    }

    /// Playing -> GameOver once health is gone
    pub(crate) fn end_game(&mut self) {
        if self.phase == GamePhase::Playing {
            log::info!("Game over: score {} on level {}", self.score, self.level);
            self.set_phase(GamePhase::GameOver);
        }
    }

    /// Playing -> LevelComplete once the timer runs out
    pub(crate) fn complete_level(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        log::info!("Level {} complete: score {}", self.level, self.score);
        self.set_phase(GamePhase::LevelComplete);
        if self.level == SURVIVOR_LEVEL {
            self.unlock(AchievementId::Survivor);
        }
    }

    /// Follow the display surface size; the player is kept in bounds
    pub fn resize_field(&mut self, field: PlayField) {
        self.field = field;
        self.entities.player.clamp_to(&field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, PowerUp, PowerUpKind};
    use glam::Vec2;

    fn playing() -> GameState {
        let mut state = GameState::default();
        assert!(state.start_new_game(Difficulty::Normal));
        state.drain_events();
        state
    }

    #[test]
    fn test_start_resets_session() {
        let mut state = GameState::default();
        state.score = 999;
        state.health = 1;
        state.entities.bullets.push(Bullet::enemy(Vec2::ZERO));
        assert!(state.start_new_game(Difficulty::Hard));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.score, 0);
        assert_eq!(state.health, MAX_HEALTH);
        assert_eq!(state.timer_ticks, 2700);
        assert!(state.entities.is_empty());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Start,
                to: GamePhase::Playing
            }]
        );
    }

    #[test]
    fn test_impossible_transitions_are_noops() {
        let mut state = GameState::default();
        assert!(!state.next_level());
        assert!(!state.toggle_pause());
        assert!(!state.return_to_menu());
        assert_eq!(state.phase, GamePhase::Start);

        let mut state = playing();
        assert!(!state.start_new_game(Difficulty::Easy));
        assert!(!state.next_level());
        assert!(!state.return_to_menu());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_pause_round_trip() {
        let mut state = playing();
        assert!(state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_next_level_keeps_player() {
        let mut state = playing();
        state.entities.player.pos = Vec2::new(100.0, 300.0);
        state.entities.player.has_shield = true;
        state.entities.player.triple_shot_charges = 20;
        state.entities.power_ups.push(PowerUp::new(Vec2::ZERO, PowerUpKind::Shield));
        state.health = 1;
        state.score = 1234;
        state.timer_ticks = 0;
        state.complete_level();
        assert_eq!(state.phase, GamePhase::LevelComplete);

        assert!(state.next_level());
        assert_eq!(state.level, 2);
        assert_eq!(state.health, MAX_HEALTH);
        assert_eq!(state.timer_ticks, 2700);
        assert_eq!(state.score, 1234);
        assert!(state.entities.power_ups.is_empty());
        assert_eq!(state.entities.player.pos, Vec2::new(100.0, 300.0));
        assert!(state.entities.player.has_shield);
        assert_eq!(state.entities.player.triple_shot_charges, 20);
    }

    #[test]
    fn test_survivor_only_on_level_three() {
        let mut state = playing();
        state.complete_level();
        assert!(!state.achievements.is_unlocked(AchievementId::Survivor));

        let mut state = playing();
        state.level = 3;
        state.complete_level();
        assert!(state.achievements.is_unlocked(AchievementId::Survivor));
    }

    #[test]
    fn test_return_to_menu_discards_session() {
        let mut state = playing();
        state.unlock(AchievementId::FirstBlood);
        state.score = 700;
        state.level = 2;
        state.health = 0;
        state.end_game();
        assert_eq!(state.phase, GamePhase::GameOver);

        assert!(state.return_to_menu());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.health, MAX_HEALTH);
        // Achievements outlive the session; their notices do not
        assert!(state.achievements.is_unlocked(AchievementId::FirstBlood));
        assert_eq!(state.achievements.active_notices(0).count(), 0);
    }

    #[test]
    fn test_paused_return_to_menu() {
        let mut state = playing();
        state.score = 300;
        state.entities.bullets.push(Bullet::enemy(Vec2::ZERO));
        assert!(state.toggle_pause());
        state.drain_events();

        assert!(state.return_to_menu());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert!(state.entities.is_empty());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Paused,
                to: GamePhase::Start
            }]
        );
    }

    #[test]
    fn test_resize_clamps_player() {
        let mut state = playing();
        state.resize_field(PlayField::new(200.0, 200.0));
        assert_eq!(state.entities.player.pos, Vec2::new(175.0, 175.0));
    }
}
