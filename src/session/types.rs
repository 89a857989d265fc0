//! Session data structures: run-in-progress state and the finished-run record.

use crate::core::{Difficulty, GameMode, ProblemSource, INITIAL_LIVES};
use crate::problems::MathProblem;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Playing,
    Paused,
    Finished,
}

/// Pre-generated problems for a daily challenge run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyRun {
    pub challenge_id: String,
    pub queue: VecDeque<MathProblem>,
}

/// Mutable run-in-progress state.
///
/// `time_limit_ms` is mode-dependent: for survival it bounds each problem,
/// otherwise it bounds the whole run. Zero means unlimited.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub source: ProblemSource,
    pub phase: SessionPhase,
    pub lives: u32,
    /// 1-based index of the problem being served.
    pub problem_index: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub elapsed_ms: u64,
    pub time_limit_ms: u64,
    /// Problems to serve before the run ends. Zero means unlimited.
    pub target_problems: u32,
    /// Elapsed time when the current problem was served.
    pub problem_started_ms: u64,
    pub current_problem: Option<MathProblem>,
    pub daily: Option<DailyRun>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            source: ProblemSource::default(),
            phase: SessionPhase::Idle,
            lives: INITIAL_LIVES,
            problem_index: 0,
            correct_count: 0,
            wrong_count: 0,
            streak: 0,
            best_streak: 0,
            elapsed_ms: 0,
            time_limit_ms: 0,
            target_problems: 0,
            problem_started_ms: 0,
            current_problem: None,
            daily: None,
        }
    }
}

impl SessionState {
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, SessionPhase::Playing | SessionPhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn total_answered(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    /// Milliseconds left on the active timer, if the mode has one.
    pub fn time_remaining_ms(&self) -> Option<u64> {
        if self.time_limit_ms == 0 {
            return None;
        }
        let used = if self.mode == GameMode::Survival {
            self.elapsed_ms.saturating_sub(self.problem_started_ms)
        } else {
            self.elapsed_ms
        };
        Some(self.time_limit_ms.saturating_sub(used))
    }

    pub(crate) fn record_correct(&mut self) {
        self.correct_count += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
    }

    pub(crate) fn record_wrong(&mut self) {
        self.wrong_count += 1;
        self.streak = 0;
    }
}

/// Feedback for one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: i64,
    /// The submission ended the run.
    pub finished: bool,
}

/// What a tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Not playing, or paused
    Ignored,
    Running,
    /// Survival problem ran out of time and a life was lost
    ProblemTimedOut { correct_answer: i64, lives: u32 },
    Finished,
}

/// Immutable record of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub id: String,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub source: ProblemSource,
    pub score: u32,
    pub correct_count: u32,
    pub total_count: u32,
    /// Percentage, 0 when nothing was answered.
    pub accuracy: f64,
    pub time_ms: u64,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub date: String,
    #[serde(default)]
    pub best_streak: u32,
    #[serde(default)]
    pub daily_challenge_id: Option<String>,
}

impl GameResult {
    pub fn is_perfect(&self) -> bool {
        self.total_count > 0 && self.correct_count == self.total_count
    }

    pub fn wrong_count(&self) -> u32 {
        self.total_count.saturating_sub(self.correct_count)
    }
}
