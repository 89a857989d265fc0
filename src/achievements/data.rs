//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef, AchievementId, Rarity, Requirement};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // PROGRESS ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstSteps,
        name: "First Steps",
        description: "Complete your first game",
        icon: "footsteps",
        category: AchievementCategory::Progress,
        rarity: Rarity::Common,
        xp_reward: 25,
        requirement: Requirement::GamesPlayed(1),
    },
    AchievementDef {
        id: AchievementId::GettingStarted,
        name: "Getting Started",
        description: "Reach level 5",
        icon: "trending-up",
        category: AchievementCategory::Progress,
        rarity: Rarity::Common,
        xp_reward: 50,
        requirement: Requirement::Level(5),
    },
    AchievementDef {
        id: AchievementId::RisingStar,
        name: "Rising Star",
        description: "Reach level 10",
        icon: "star",
        category: AchievementCategory::Progress,
        rarity: Rarity::Rare,
        xp_reward: 100,
        requirement: Requirement::Level(10),
    },
    AchievementDef {
        id: AchievementId::MathMaster,
        name: "Math Master",
        description: "Reach level 25",
        icon: "school",
        category: AchievementCategory::Progress,
        rarity: Rarity::Epic,
        xp_reward: 250,
        requirement: Requirement::Level(25),
    },
    AchievementDef {
        id: AchievementId::Elite,
        name: "Elite",
        description: "Reach level 50",
        icon: "diamond",
        category: AchievementCategory::Progress,
        rarity: Rarity::Legendary,
        xp_reward: 500,
        requirement: Requirement::Level(50),
    },
    // ═══════════════════════════════════════════════════════════════
    // ACCURACY ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::SharpMind,
        name: "Sharp Mind",
        description: "Get 100% accuracy in a game",
        icon: "checkmark-circle",
        category: AchievementCategory::Accuracy,
        rarity: Rarity::Common,
        xp_reward: 30,
        requirement: Requirement::PerfectGames(1),
    },
    AchievementDef {
        id: AchievementId::Perfectionist,
        name: "Perfectionist",
        description: "Get 5 perfect games",
        icon: "ribbon",
        category: AchievementCategory::Accuracy,
        rarity: Rarity::Rare,
        xp_reward: 100,
        requirement: Requirement::PerfectGames(5),
    },
    AchievementDef {
        id: AchievementId::Flawless,
        name: "Flawless",
        description: "Get 25 perfect games",
        icon: "medal",
        category: AchievementCategory::Accuracy,
        rarity: Rarity::Epic,
        xp_reward: 300,
        requirement: Requirement::PerfectGames(25),
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAK ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::OnFire,
        name: "On Fire",
        description: "Get a 10 answer streak",
        icon: "flame",
        category: AchievementCategory::Streak,
        rarity: Rarity::Common,
        xp_reward: 40,
        requirement: Requirement::LongestStreak(10),
    },
    AchievementDef {
        id: AchievementId::Unstoppable,
        name: "Unstoppable",
        description: "Get a 25 answer streak",
        icon: "flash",
        category: AchievementCategory::Streak,
        rarity: Rarity::Rare,
        xp_reward: 100,
        requirement: Requirement::LongestStreak(25),
    },
    AchievementDef {
        id: AchievementId::LegendaryStreak,
        name: "Legendary",
        description: "Get a 50 answer streak",
        icon: "rocket",
        category: AchievementCategory::Streak,
        rarity: Rarity::Legendary,
        xp_reward: 500,
        requirement: Requirement::LongestStreak(50),
    },
    // ═══════════════════════════════════════════════════════════════
    // CONSISTENCY ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::DailyPlayer,
        name: "Daily Player",
        description: "Play 7 days in a row",
        icon: "calendar",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Rare,
        xp_reward: 150,
        requirement: Requirement::DayStreak(7),
    },
    AchievementDef {
        id: AchievementId::Dedicated,
        name: "Dedicated",
        description: "Play 30 days in a row",
        icon: "calendar-outline",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Epic,
        xp_reward: 500,
        requirement: Requirement::DayStreak(30),
    },
    AchievementDef {
        id: AchievementId::Committed,
        name: "Committed",
        description: "Play 100 days in a row",
        icon: "trophy",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Legendary,
        xp_reward: 1000,
        requirement: Requirement::DayStreak(100),
    },
    // ═══════════════════════════════════════════════════════════════
    // PROBLEM ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Century,
        name: "Century",
        description: "Solve 100 problems",
        icon: "calculator",
        category: AchievementCategory::Problems,
        rarity: Rarity::Common,
        xp_reward: 50,
        requirement: Requirement::CorrectAnswers(100),
    },
    AchievementDef {
        id: AchievementId::ThousandClub,
        name: "Thousand Club",
        description: "Solve 1,000 problems",
        icon: "bar-chart",
        category: AchievementCategory::Problems,
        rarity: Rarity::Rare,
        xp_reward: 200,
        requirement: Requirement::CorrectAnswers(1000),
    },
    AchievementDef {
        id: AchievementId::ProblemCrusher,
        name: "Problem Crusher",
        description: "Solve 10,000 problems",
        icon: "nuclear",
        category: AchievementCategory::Problems,
        rarity: Rarity::Legendary,
        xp_reward: 1000,
        requirement: Requirement::CorrectAnswers(10_000),
    },
    // ═══════════════════════════════════════════════════════════════
    // GAMES PLAYED (shown under Progress)
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::GettingWarmedUp,
        name: "Getting Warmed Up",
        description: "Play 10 games",
        icon: "game-controller",
        category: AchievementCategory::Progress,
        rarity: Rarity::Common,
        xp_reward: 30,
        requirement: Requirement::GamesPlayed(10),
    },
    AchievementDef {
        id: AchievementId::Regular,
        name: "Regular",
        description: "Play 50 games",
        icon: "fitness",
        category: AchievementCategory::Progress,
        rarity: Rarity::Rare,
        xp_reward: 100,
        requirement: Requirement::GamesPlayed(50),
    },
    AchievementDef {
        id: AchievementId::Veteran,
        name: "Veteran",
        description: "Play 200 games",
        icon: "shield-checkmark",
        category: AchievementCategory::Progress,
        rarity: Rarity::Epic,
        xp_reward: 300,
        requirement: Requirement::GamesPlayed(200),
    },
];

/// Get the definition for a specific achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Look up a definition by its string id (`"first_steps"`).
pub fn find_by_str(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id.as_str() == id)
}

/// Get achievements filtered by category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}
