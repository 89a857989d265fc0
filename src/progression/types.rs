//! Persisted progression state.

use super::levels::{level_for_xp, level_progress, level_title, xp_for_next_level};
use super::xp::XpBreakdown;
use crate::achievements::{AchievementId, Achievements, PlayerStats};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Process-wide progression: XP, lifetime counters and achievements.
///
/// Level and title are always derived from `total_xp`, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressionState {
    pub total_xp: u64,
    pub achievements: Achievements,
    pub games_played: u32,
    pub correct_answers: u32,
    pub perfect_games: u32,
    pub longest_streak: u32,
    pub day_streak: u32,
    pub last_played: Option<NaiveDate>,
    /// Ids of completed daily challenges (`daily-YYYY-MM-DD`).
    #[serde(default)]
    pub completed_challenges: Vec<String>,
}

/// What one finished run changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunRewards {
    pub xp: XpBreakdown,
    /// XP granted by achievements unlocked in this update.
    pub achievement_xp: u64,
    pub leveled_up: bool,
    /// Set only when the level rose.
    pub new_level: Option<u32>,
    pub newly_unlocked: Vec<AchievementId>,
}

impl RunRewards {
    pub fn total_xp(&self) -> u64 {
        self.xp.total() + self.achievement_xp
    }
}

impl ProgressionState {
    pub fn level(&self) -> u32 {
        level_for_xp(self.total_xp)
    }

    pub fn level_title(&self) -> &'static str {
        level_title(self.level())
    }

    pub fn xp_for_next_level(&self) -> u64 {
        xp_for_next_level(self.level())
    }

    pub fn level_progress(&self) -> f64 {
        level_progress(self.total_xp)
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievements.is_unlocked(id)
    }

    pub fn unseen_achievements(&self) -> &[AchievementId] {
        &self.achievements.unseen
    }

    /// Snapshot for requirement checks.
    pub fn player_stats(&self) -> PlayerStats {
        PlayerStats {
            level: self.level(),
            games_played: self.games_played,
            correct_answers: self.correct_answers,
            perfect_games: self.perfect_games,
            longest_streak: self.longest_streak,
            day_streak: self.day_streak,
        }
    }
}
