//! Achievement tracking
//!
//! Unlocking is idempotent. The first unlock of an id queues a notice that
//! the UI shows until its expiry tick; the core never runs timers itself.

use serde::{Deserialize, Serialize};

use crate::consts::ACHIEVEMENT_NOTICE_MS;
use crate::ms_to_ticks;

/// Known achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AchievementId {
    /// Destroy any enemy
    FirstBlood,
    /// Outlast the level 3 timer
    Survivor,
    /// Pick up a triple shot
    PowerHungry,
    /// Let a shield absorb a hit
    ShieldMaster,
    /// Reach 5000 points
    AcePilot,
}

impl AchievementId {
    pub const ALL: [AchievementId; 5] = [
        AchievementId::FirstBlood,
        AchievementId::Survivor,
        AchievementId::PowerHungry,
        AchievementId::ShieldMaster,
        AchievementId::AcePilot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstBlood => "first_blood",
            AchievementId::Survivor => "survivor",
            AchievementId::PowerHungry => "power_hungry",
            AchievementId::ShieldMaster => "shield_master",
            AchievementId::AcePilot => "ace_pilot",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AchievementId::FirstBlood => "First Blood",
            AchievementId::Survivor => "Survivor",
            AchievementId::PowerHungry => "Power Hungry",
            AchievementId::ShieldMaster => "Shield Master",
            AchievementId::AcePilot => "Ace Pilot",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementId::FirstBlood => "Destroy your first enemy",
            AchievementId::Survivor => "Survive level 3",
            AchievementId::PowerHungry => "Collect a triple shot",
            AchievementId::ShieldMaster => "Block a hit with a shield",
            AchievementId::AcePilot => "Score 5000 points",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// A "newly unlocked" notification for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementNotice {
    pub id: AchievementId,
    /// Session tick at which the notice stops being shown
    pub expires_at_tick: u64,
}

/// Unlocked flags plus the pending notice queue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementTracker {
    unlocked: [bool; 5],
    notices: Vec<AchievementNotice>,
}

impl AchievementTracker {
    /// Mark `id` unlocked. Returns true only on the first unlock.
    pub fn unlock(&mut self, id: AchievementId, now: u64) -> bool {
        let slot = &mut self.unlocked[id.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.notices.push(AchievementNotice {
            id,
            expires_at_tick: now + ms_to_ticks(ACHIEVEMENT_NOTICE_MS) as u64,
        });
        true
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked[id.index()]
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.iter().filter(|u| **u).count()
    }

    /// Notices still visible at tick `now`
    pub fn active_notices(&self, now: u64) -> impl Iterator<Item = &AchievementNotice> {
        self.notices.iter().filter(move |n| n.expires_at_tick > now)
    }

    /// Forget notices that have expired by tick `now`
    pub fn prune_notices(&mut self, now: u64) {
        self.notices.retain(|n| n.expires_at_tick > now);
    }

    pub fn clear_notices(&mut self) {
        self.notices.clear();
    }
}
