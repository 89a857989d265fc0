//! Bounded run history and aggregate statistics.

use super::types::GameResult;
use crate::core::{GameMode, HISTORY_LIMIT};
use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Longest play streak counted back from today.
const STREAK_LOOKBACK_DAYS: u64 = 365;
/// Days covered by `History::daily_activity`.
const ACTIVITY_DAYS: u64 = 7;

/// Most-recent runs, oldest first. Capped at `HISTORY_LIMIT`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<GameResult>,
}

/// Per-mode aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModeStats {
    pub games: u32,
    pub best_score: u32,
}

/// Aggregates over the retained history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryStats {
    pub total_games: u32,
    pub total_correct: u32,
    pub total_wrong: u32,
    pub total_time_ms: u64,
    pub best_score: u32,
    /// Mean accuracy, rounded to a whole percent.
    pub average_accuracy: u32,
    /// Modes with at least one game, in `GameMode::ALL` order.
    pub by_mode: Vec<(GameMode, ModeStats)>,
}

/// Window for period analytics, ending at the caller's `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    AllTime,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Week, TimeRange::Month, TimeRange::AllTime];

    /// Length of the window, `None` for all time.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::AllTime => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Week => "7 Days",
            Self::Month => "30 Days",
            Self::AllTime => "All Time",
        }
    }
}

/// Totals for the runs inside a `TimeRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodStats {
    pub games: u32,
    pub problems: u32,
    pub correct: u32,
    pub time_ms: u64,
    /// Correct over problems, rounded to a whole percent.
    pub accuracy: u32,
    pub average_score: u32,
}

/// Runs finished on one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub games: u32,
    pub correct: u32,
}

/// Accuracy for one classic mode inside a `TimeRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeAccuracy {
    pub games: u32,
    pub accuracy: u32,
}

fn played_at(result: &GameResult) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&result.date)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

fn rounded_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result, evicting the oldest entries past the cap.
    pub fn push(&mut self, result: GameResult) {
        self.entries.push_back(result);
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&GameResult> {
        self.entries.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameResult> {
        self.entries.iter()
    }

    /// The newest `n` results, newest first.
    pub fn recent(&self, n: usize) -> Vec<&GameResult> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> HistoryStats {
        let mut stats = HistoryStats {
            total_games: self.entries.len() as u32,
            ..HistoryStats::default()
        };
        if self.entries.is_empty() {
            return stats;
        }

        let mut accuracy_sum = 0.0;
        for result in &self.entries {
            stats.total_correct += result.correct_count;
            stats.total_wrong += result.wrong_count();
            stats.total_time_ms += result.time_ms;
            stats.best_score = stats.best_score.max(result.score);
            accuracy_sum += result.accuracy;
        }
        stats.average_accuracy = (accuracy_sum / self.entries.len() as f64).round() as u32;

        stats.by_mode = GameMode::ALL
            .into_iter()
            .filter_map(|mode| {
                let mut mode_stats = ModeStats::default();
                for result in self.entries.iter().filter(|r| r.mode == mode) {
                    mode_stats.games += 1;
                    mode_stats.best_score = mode_stats.best_score.max(result.score);
                }
                (mode_stats.games > 0).then_some((mode, mode_stats))
            })
            .collect();

        stats
    }

    /// Runs played after `now` minus the range. Results with an unreadable
    /// date only count toward `AllTime`.
    fn within(
        &self,
        range: TimeRange,
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = &GameResult> {
        let cutoff = range.days().map(|days| now - Duration::days(days));
        self.entries.iter().filter(move |result| match cutoff {
            None => true,
            Some(cutoff) => played_at(result).is_some_and(|at| at > cutoff),
        })
    }

    pub fn period_stats(&self, range: TimeRange, now: DateTime<Utc>) -> PeriodStats {
        let mut stats = PeriodStats::default();
        let mut score_sum = 0u64;
        for result in self.within(range, now) {
            stats.games += 1;
            stats.problems += result.total_count;
            stats.correct += result.correct_count;
            stats.time_ms += result.time_ms;
            score_sum += u64::from(result.score);
        }
        stats.accuracy = rounded_percent(stats.correct, stats.problems);
        if stats.games > 0 {
            stats.average_score = (score_sum as f64 / f64::from(stats.games)).round() as u32;
        }
        stats
    }

    /// Games and correct answers for each of the last seven days ending at
    /// `today`, oldest first.
    pub fn daily_activity(&self, today: NaiveDate) -> Vec<DayActivity> {
        (0..ACTIVITY_DAYS)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(|date| {
                let mut day = DayActivity {
                    date,
                    games: 0,
                    correct: 0,
                };
                for result in &self.entries {
                    if played_at(result).map(|at| at.date_naive()) == Some(date) {
                        day.games += 1;
                        day.correct += result.correct_count;
                    }
                }
                day
            })
            .collect()
    }

    /// Accuracy per classic (non-puzzle) mode, including modes not played.
    pub fn mode_accuracy(
        &self,
        range: TimeRange,
        now: DateTime<Utc>,
    ) -> Vec<(GameMode, ModeAccuracy)> {
        GameMode::ALL
            .into_iter()
            .filter(|mode| !mode.is_puzzle())
            .map(|mode| {
                let (mut games, mut correct, mut total) = (0, 0, 0);
                for result in self.within(range, now).filter(|r| r.mode == mode) {
                    games += 1;
                    correct += result.correct_count;
                    total += result.total_count;
                }
                let accuracy = rounded_percent(correct, total);
                (mode, ModeAccuracy { games, accuracy })
            })
            .collect()
    }

    /// Consecutive UTC days with at least one run, counted back from `today`.
    /// A today without runs does not break the streak.
    pub fn play_streak(&self, today: NaiveDate) -> u32 {
        let played: HashSet<NaiveDate> = self
            .entries
            .iter()
            .filter_map(played_at)
            .map(|at| at.date_naive())
            .collect();

        let mut streak = 0;
        for back in 0..STREAK_LOOKBACK_DAYS {
            let Some(day) = today.checked_sub_days(Days::new(back)) else {
                break;
            };
            if played.contains(&day) {
                streak += 1;
            } else if back > 0 {
                break;
            }
        }
        streak
    }
}
