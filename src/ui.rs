//! HUD view model
//!
//! Everything the UI shows about the session, captured after a tick.
//!
//! Notice lifetimes count session ticks, which only advance while Playing,
//! so a toast raised on entering LevelComplete stays up until play resumes.

use serde::Serialize;

use crate::sim::{AchievementId, GamePhase, GameState};

/// A currently displayed achievement toast
#[derive(Debug, Clone, Serialize)]
pub struct NoticeView {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Ticks until the toast disappears
    pub ticks_left: u64,
}

/// HUD contents
#[derive(Debug, Clone, Serialize)]
pub struct HudView {
    pub phase: GamePhase,
    pub difficulty: &'static str,
    pub score: u64,
    pub level: u32,
    pub health: u8,
    pub seconds_left: u32,
    pub shield: bool,
    pub triple_shot_charges: u32,
    /// Transient "enemy escaped" warning
    pub enemy_escaped: bool,
    pub notices: Vec<NoticeView>,
    pub achievements_unlocked: usize,
}

impl HudView {
    pub fn capture(state: &GameState) -> Self {
        let now = state.time_ticks;
        let notices = state
            .achievements
            .active_notices(now)
            .map(|n| NoticeView {
                id: n.id.as_str(),
                title: n.id.title(),
                description: n.id.description(),
                ticks_left: n.expires_at_tick - now,
            })
            .collect();

        Self {
            phase: state.phase,
            difficulty: state.difficulty.as_str(),
            score: state.score,
            level: state.level,
            health: state.health,
            seconds_left: state.seconds_remaining(),
            shield: state.entities.player.has_shield,
            triple_shot_charges: state.entities.player.triple_shot_charges,
            enemy_escaped: state.escape_warning_ticks > 0,
            notices,
            achievements_unlocked: state.achievements.unlocked_count(),
        }
    }

    /// Total number of achievements
    pub fn achievements_total() -> usize {
        AchievementId::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;

    #[test]
    fn test_hud_capture() {
        let mut state = GameState::default();
        state.start_new_game(Difficulty::Easy);
        state.time_ticks = 10;
        state.unlock(AchievementId::PowerHungry);
        state.escape_warning_ticks = 5;
        state.timer_ticks = 59;

        let hud = HudView::capture(&state);
        assert_eq!(hud.phase, GamePhase::Playing);
        assert_eq!(hud.difficulty, "Easy");
        assert_eq!(hud.seconds_left, 1);
        assert!(hud.enemy_escaped);
        assert_eq!(hud.notices.len(), 1);
        assert_eq!(hud.notices[0].id, "power_hungry");
        assert_eq!(hud.notices[0].ticks_left, 180);
        assert_eq!(hud.achievements_unlocked, 1);
        assert_eq!(HudView::achievements_total(), 5);
    }
}
