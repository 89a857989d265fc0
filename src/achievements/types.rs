//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Progress,
    Accuracy,
    Streak,
    Consistency,
    Problems,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 5] = [
        AchievementCategory::Progress,
        AchievementCategory::Accuracy,
        AchievementCategory::Streak,
        AchievementCategory::Consistency,
        AchievementCategory::Problems,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Progress => "Progress",
            AchievementCategory::Accuracy => "Accuracy",
            AchievementCategory::Streak => "Streak",
            AchievementCategory::Consistency => "Consistency",
            AchievementCategory::Problems => "Problems",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Badge color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#6B7280",
            Rarity::Rare => "#3B82F6",
            Rarity::Epic => "#9333EA",
            Rarity::Legendary => "#F59E0B",
        }
    }
}

/// Unique identifier for each achievement. Serialized as its snake_case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Progress
    FirstSteps,
    GettingStarted,
    RisingStar,
    MathMaster,
    Elite,
    GettingWarmedUp,
    Regular,
    Veteran,
    // Accuracy
    SharpMind,
    Perfectionist,
    Flawless,
    // Streak
    OnFire,
    Unstoppable,
    LegendaryStreak,
    // Consistency
    DailyPlayer,
    Dedicated,
    Committed,
    // Problems
    Century,
    ThousandClub,
    ProblemCrusher,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstSteps => "first_steps",
            AchievementId::GettingStarted => "getting_started",
            AchievementId::RisingStar => "rising_star",
            AchievementId::MathMaster => "math_master",
            AchievementId::Elite => "elite",
            AchievementId::GettingWarmedUp => "getting_warmed_up",
            AchievementId::Regular => "regular",
            AchievementId::Veteran => "veteran",
            AchievementId::SharpMind => "sharp_mind",
            AchievementId::Perfectionist => "perfectionist",
            AchievementId::Flawless => "flawless",
            AchievementId::OnFire => "on_fire",
            AchievementId::Unstoppable => "unstoppable",
            AchievementId::LegendaryStreak => "legendary_streak",
            AchievementId::DailyPlayer => "daily_player",
            AchievementId::Dedicated => "dedicated",
            AchievementId::Committed => "committed",
            AchievementId::Century => "century",
            AchievementId::ThousandClub => "thousand_club",
            AchievementId::ProblemCrusher => "problem_crusher",
        }
    }
}

/// Lifetime counters an achievement requirement is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub level: u32,
    pub games_played: u32,
    pub correct_answers: u32,
    pub perfect_games: u32,
    pub longest_streak: u32,
    pub day_streak: u32,
}

/// Unlock condition: a metric and the threshold it must reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Level(u32),
    GamesPlayed(u32),
    CorrectAnswers(u32),
    PerfectGames(u32),
    LongestStreak(u32),
    DayStreak(u32),
}

impl Requirement {
    pub fn is_met(&self, stats: &PlayerStats) -> bool {
        match *self {
            Requirement::Level(n) => stats.level >= n,
            Requirement::GamesPlayed(n) => stats.games_played >= n,
            Requirement::CorrectAnswers(n) => stats.correct_answers >= n,
            Requirement::PerfectGames(n) => stats.perfect_games >= n,
            Requirement::LongestStreak(n) => stats.longest_streak >= n,
            Requirement::DayStreak(n) => stats.day_streak >= n,
        }
    }

    pub fn threshold(&self) -> u32 {
        match *self {
            Requirement::Level(n)
            | Requirement::GamesPlayed(n)
            | Requirement::CorrectAnswers(n)
            | Requirement::PerfectGames(n)
            | Requirement::LongestStreak(n)
            | Requirement::DayStreak(n) => n,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    pub xp_reward: u64,
    pub requirement: Requirement,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlocked and not-yet-seen achievements. Unlocks are permanent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Achievements {
    /// Map of unlocked achievements.
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
    /// Unlocked but not yet acknowledged by the player, oldest first.
    pub unseen: Vec<AchievementId>,
}

impl Achievements {
    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        self.unseen.push(id);
        true
    }

    /// Acknowledge an unlock. Returns true if it was unseen.
    pub fn mark_seen(&mut self, id: AchievementId) -> bool {
        let before = self.unseen.len();
        self.unseen.retain(|&unseen| unseen != id);
        self.unseen.len() != before
    }

    /// One pass over the catalog: unlocks every locked achievement whose
    /// requirement `stats` meets, returning them in catalog order.
    pub fn evaluate(&mut self, stats: &PlayerStats) -> Vec<&'static AchievementDef> {
        use super::data::ALL_ACHIEVEMENTS;

        let mut newly_unlocked = Vec::new();
        for def in ALL_ACHIEVEMENTS {
            if def.requirement.is_met(stats) && self.unlock(def.id) {
                newly_unlocked.push(def);
            }
        }
        newly_unlocked
    }

    /// Get the total number of achievements.
    pub fn total_count(&self) -> usize {
        use super::data::ALL_ACHIEVEMENTS;
        ALL_ACHIEVEMENTS.len()
    }

    /// Get the number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Get unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// Get count of unlocked/total by category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        use super::data::ALL_ACHIEVEMENTS;

        let category_achievements: Vec<_> = ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| a.category == category)
            .collect();

        let unlocked = category_achievements
            .iter()
            .filter(|a| self.is_unlocked(a.id))
            .count();

        (unlocked, category_achievements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> PlayerStats {
        PlayerStats {
            level: 1,
            ..PlayerStats::default()
        }
    }

    #[test]
    fn test_unlock_is_permanent_and_fires_once() {
        let mut achievements = Achievements::default();
        assert!(achievements.unlock(AchievementId::FirstSteps));
        assert!(!achievements.unlock(AchievementId::FirstSteps));
        assert!(achievements.is_unlocked(AchievementId::FirstSteps));
        assert_eq!(achievements.unseen, vec![AchievementId::FirstSteps]);
    }

    #[test]
    fn test_mark_seen_drains_unseen() {
        let mut achievements = Achievements::default();
        achievements.unlock(AchievementId::FirstSteps);
        achievements.unlock(AchievementId::SharpMind);

        assert!(achievements.mark_seen(AchievementId::FirstSteps));
        assert!(!achievements.mark_seen(AchievementId::FirstSteps));
        assert_eq!(achievements.unseen, vec![AchievementId::SharpMind]);
        assert!(achievements.is_unlocked(AchievementId::FirstSteps));
    }

    #[test]
    fn test_requirement_kinds() {
        let s = PlayerStats {
            level: 5,
            games_played: 10,
            correct_answers: 100,
            perfect_games: 1,
            longest_streak: 10,
            day_streak: 7,
        };
        assert!(Requirement::Level(5).is_met(&s));
        assert!(!Requirement::Level(6).is_met(&s));
        assert!(Requirement::GamesPlayed(10).is_met(&s));
        assert!(Requirement::CorrectAnswers(100).is_met(&s));
        assert!(!Requirement::PerfectGames(5).is_met(&s));
        assert!(Requirement::LongestStreak(10).is_met(&s));
        assert!(!Requirement::DayStreak(30).is_met(&s));
        assert_eq!(Requirement::DayStreak(30).threshold(), 30);
    }

    #[test]
    fn test_evaluate_unlocks_in_catalog_order_once() {
        let mut achievements = Achievements::default();
        let mut s = stats();
        s.games_played = 1;
        s.perfect_games = 1;

        let unlocked: Vec<_> = achievements.evaluate(&s).iter().map(|d| d.id).collect();
        assert_eq!(
            unlocked,
            vec![AchievementId::FirstSteps, AchievementId::SharpMind]
        );
        assert!(achievements.evaluate(&s).is_empty());
    }

    #[test]
    fn test_count_by_category() {
        let mut achievements = Achievements::default();
        achievements.unlock(AchievementId::OnFire);
        assert_eq!(
            achievements.count_by_category(AchievementCategory::Streak),
            (1, 3)
        );
        assert_eq!(achievements.total_count(), 20);
        assert!((achievements.unlock_percentage() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ids_serialize_as_snake_case() {
        let json = serde_json::to_string(&AchievementId::LegendaryStreak).unwrap();
        assert_eq!(json, "\"legendary_streak\"");
        assert_eq!(AchievementId::ThousandClub.as_str(), "thousand_club");
    }
}
