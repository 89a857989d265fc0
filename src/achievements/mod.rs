//! Achievement system module.
//!
//! A fixed catalog of milestone achievements evaluated against lifetime
//! player stats after every finished run. Unlocks are permanent.

pub mod data;
pub mod types;

pub use data::{find_by_str, get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use types::{
    AchievementCategory, AchievementDef, AchievementId, Achievements, PlayerStats, Rarity,
    Requirement, UnlockedAchievement,
};
