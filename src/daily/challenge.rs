//! Daily challenge templates and generation.

use super::rng::DateSeededRng;
use crate::core::{Category, Difficulty};
use crate::problems::{generate_category, MathProblem};
use chrono::{Days, Local, NaiveDate, NaiveDateTime};

/// A fixed challenge shape. One is picked per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub difficulty: Difficulty,
    pub category: Category,
    pub time_limit_secs: u32,
    pub problem_count: u32,
    pub target_score: u32,
    pub xp_reward: u32,
    pub badge: Option<&'static str>,
}

pub const CHALLENGE_TEMPLATES: [ChallengeTemplate; 10] = [
    ChallengeTemplate {
        title: "Speed Demon",
        description: "Solve 10 problems in 30 seconds!",
        emoji: "⚡",
        difficulty: Difficulty::Medium,
        category: Category::Arithmetic,
        time_limit_secs: 30,
        problem_count: 10,
        target_score: 500,
        xp_reward: 100,
        badge: Some("⚡"),
    },
    ChallengeTemplate {
        title: "Perfect Ten",
        description: "Get 10 correct in a row!",
        emoji: "🎯",
        difficulty: Difficulty::Easy,
        category: Category::Arithmetic,
        time_limit_secs: 120,
        problem_count: 10,
        target_score: 400,
        xp_reward: 80,
        badge: Some("🎯"),
    },
    ChallengeTemplate {
        title: "Fraction Master",
        description: "Conquer 8 fraction problems!",
        emoji: "🧮",
        difficulty: Difficulty::Medium,
        category: Category::Fractions,
        time_limit_secs: 90,
        problem_count: 8,
        target_score: 450,
        xp_reward: 120,
        badge: Some("🧮"),
    },
    ChallengeTemplate {
        title: "Percentage Pro",
        description: "Master 8 percentage calculations!",
        emoji: "📊",
        difficulty: Difficulty::Medium,
        category: Category::Percentages,
        time_limit_secs: 90,
        problem_count: 8,
        target_score: 450,
        xp_reward: 110,
        badge: Some("📊"),
    },
    ChallengeTemplate {
        title: "Algebra Adventure",
        description: "Solve 6 algebra problems!",
        emoji: "🔢",
        difficulty: Difficulty::Hard,
        category: Category::Algebra,
        time_limit_secs: 120,
        problem_count: 6,
        target_score: 500,
        xp_reward: 150,
        badge: Some("🔢"),
    },
    ChallengeTemplate {
        title: "Power Hour",
        description: "Calculate 8 powers and squares!",
        emoji: "💪",
        difficulty: Difficulty::Medium,
        category: Category::Powers,
        time_limit_secs: 90,
        problem_count: 8,
        target_score: 400,
        xp_reward: 100,
        badge: Some("💪"),
    },
    ChallengeTemplate {
        title: "Root Rush",
        description: "Find 8 square roots!",
        emoji: "√",
        difficulty: Difficulty::Medium,
        category: Category::Roots,
        time_limit_secs: 60,
        problem_count: 8,
        target_score: 350,
        xp_reward: 90,
        badge: Some("√"),
    },
    ChallengeTemplate {
        title: "Pattern Finder",
        description: "Discover 5 sequences!",
        emoji: "🔍",
        difficulty: Difficulty::Hard,
        category: Category::Sequences,
        time_limit_secs: 120,
        problem_count: 5,
        target_score: 400,
        xp_reward: 130,
        badge: Some("🔍"),
    },
    ChallengeTemplate {
        title: "Marathon Math",
        description: "Solve 20 mixed problems!",
        emoji: "🏃",
        difficulty: Difficulty::Easy,
        category: Category::Arithmetic,
        time_limit_secs: 180,
        problem_count: 20,
        target_score: 600,
        xp_reward: 150,
        badge: Some("🏃"),
    },
    ChallengeTemplate {
        title: "Expert Challenge",
        description: "Take on 10 expert problems!",
        emoji: "🏆",
        difficulty: Difficulty::Expert,
        category: Category::Arithmetic,
        time_limit_secs: 120,
        problem_count: 10,
        target_score: 700,
        xp_reward: 200,
        badge: Some("🏆"),
    },
];

/// The challenge for one calendar day, with its problems pre-generated.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyChallenge {
    /// `daily-YYYY-MM-DD`
    pub id: String,
    pub date: NaiveDate,
    pub template: ChallengeTemplate,
    pub problems: Vec<MathProblem>,
}

/// Hours and whole minutes until the next local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUntilNext {
    pub hours: u32,
    pub minutes: u32,
}

pub fn challenge_id(date: NaiveDate) -> String {
    format!("daily-{}", date.format("%Y-%m-%d"))
}

/// Deterministic challenge for `date`. Template choice and every problem are
/// drawn from the same date-seeded generator.
pub fn for_date(date: NaiveDate) -> DailyChallenge {
    let date_str = date.format("%Y-%m-%d").to_string();
    let mut rng = DateSeededRng::from_date_str(&date_str);

    let index = (rng.next_f64() * CHALLENGE_TEMPLATES.len() as f64) as usize;
    let template = CHALLENGE_TEMPLATES[index.min(CHALLENGE_TEMPLATES.len() - 1)];

    let problems = (0..template.problem_count)
        .map(|_| generate_category(template.category, template.difficulty, &mut rng))
        .collect();

    DailyChallenge {
        id: challenge_id(date),
        date,
        template,
        problems,
    }
}

/// Today's challenge by local calendar date.
pub fn today() -> DailyChallenge {
    for_date(Local::now().date_naive())
}

pub fn time_until_next_at(now: NaiveDateTime) -> TimeUntilNext {
    let next_midnight = now
        .date()
        .checked_add_days(Days::new(1))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(now);
    let minutes_left = (next_midnight - now).num_minutes().max(0);
    TimeUntilNext {
        hours: (minutes_left / 60) as u32,
        minutes: (minutes_left % 60) as u32,
    }
}

pub fn time_until_next() -> TimeUntilNext {
    time_until_next_at(Local::now().naive_local())
}

/// Percent bonus for consecutive days of daily challenges.
pub fn streak_bonus(streak_days: u32) -> u32 {
    match streak_days {
        30.. => 50,
        14.. => 30,
        7.. => 20,
        3.. => 10,
        _ => 0,
    }
}

pub fn has_completed(completed: &[String], date: NaiveDate) -> bool {
    let id = challenge_id(date);
    completed.iter().any(|c| *c == id)
}
