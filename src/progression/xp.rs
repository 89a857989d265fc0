//! XP awarded for a finished run.

use crate::core::{
    XP_DAILY_CHALLENGE, XP_FIRST_GAME_OF_DAY, XP_PERFECT_BONUS, XP_PER_CORRECT, XP_PER_STREAK,
    XP_STREAK_CAP, XP_STREAK_THRESHOLD,
};

/// Where a slice of run XP came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpSource {
    CorrectAnswers,
    PerfectGame,
    /// Best in-run streak that earned the bonus
    Streak(u32),
    FirstGameOfDay,
    DailyChallenge,
}

impl XpSource {
    pub fn label(&self) -> String {
        match self {
            XpSource::CorrectAnswers => "Correct Answers".to_string(),
            XpSource::PerfectGame => "Perfect Game!".to_string(),
            XpSource::Streak(streak) => format!("{} Streak Bonus", streak),
            XpSource::FirstGameOfDay => "First Game Today".to_string(),
            XpSource::DailyChallenge => "Daily Challenge".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XpBreakdown {
    pub entries: Vec<(XpSource, u64)>,
}

impl XpBreakdown {
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }
}

/// Inputs to the XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunXpInput {
    pub correct_answers: u32,
    pub perfect: bool,
    pub best_streak: u32,
    pub first_game_of_day: bool,
    pub daily_challenge: bool,
}

pub fn calculate_game_xp(input: RunXpInput) -> XpBreakdown {
    let mut entries = vec![(
        XpSource::CorrectAnswers,
        u64::from(input.correct_answers) * XP_PER_CORRECT,
    )];

    if input.perfect {
        entries.push((XpSource::PerfectGame, XP_PERFECT_BONUS));
    }
    if input.best_streak >= XP_STREAK_THRESHOLD {
        let bonus = u64::from(input.best_streak.min(XP_STREAK_CAP)) * XP_PER_STREAK;
        entries.push((XpSource::Streak(input.best_streak), bonus));
    }
    if input.first_game_of_day {
        entries.push((XpSource::FirstGameOfDay, XP_FIRST_GAME_OF_DAY));
    }
    if input.daily_challenge {
        entries.push((XpSource::DailyChallenge, XP_DAILY_CHALLENGE));
    }

    XpBreakdown { entries }
}
