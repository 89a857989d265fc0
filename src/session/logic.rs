//! The run state machine: `Idle → Playing ⇄ Paused → Finished → Idle`.
//!
//! Time is supplied by the caller as active (unpaused) elapsed milliseconds,
//! so ticks may arrive at any cadence.

use super::history::History;
use super::types::{AnswerOutcome, DailyRun, GameResult, SessionPhase, SessionState, TickEvent};
use crate::core::{
    accuracy_percent, calculate_score, Difficulty, GameMode, Operation, ProblemSource,
    SPEEDRUN_PROBLEMS, SURVIVAL_TIME_PER_PROBLEM_MS, TIMEATTACK_DURATION_MS,
};
use crate::daily::DailyChallenge;
use crate::problems::{
    check_answer, generate_category, generate_configured, generate_problem, MathProblem,
};
use chrono::{SecondsFormat, Utc};
use rand::Rng;

/// Drives one run at a time and owns the bounded history of finished runs.
#[derive(Debug, Clone, Default)]
pub struct SessionStateMachine {
    state: SessionState,
    history: History,
}

/// Generates the next problem for a source.
pub fn generate_for_source<R: Rng>(
    source: &ProblemSource,
    difficulty: Difficulty,
    rng: &mut R,
) -> MathProblem {
    match source {
        ProblemSource::Operation(op) => generate_problem(difficulty, *op, rng),
        ProblemSource::Category(category) => generate_category(*category, difficulty, rng),
        ProblemSource::Configured(config) => generate_configured(difficulty, config, rng),
        ProblemSource::Puzzle(_) => generate_problem(difficulty, Operation::Mixed, rng),
    }
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a machine around a previously persisted history.
    pub fn with_history(history: History) -> Self {
        Self {
            state: SessionState::default(),
            history,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn current_problem(&self) -> Option<&MathProblem> {
        self.state.current_problem.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.state.elapsed_ms
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Starts a fresh run, discarding any run in progress.
    ///
    /// Puzzle modes run on `PuzzleRun`; started here they follow practice rules.
    pub fn start<R: Rng>(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
        source: impl Into<ProblemSource>,
        rng: &mut R,
    ) {
        let (time_limit_ms, target_problems) = match mode {
            GameMode::SpeedRun => (0, SPEEDRUN_PROBLEMS),
            GameMode::TimeAttack => (TIMEATTACK_DURATION_MS, 0),
            GameMode::Survival => (SURVIVAL_TIME_PER_PROBLEM_MS, 0),
            _ => (0, 0),
        };

        self.state = SessionState {
            mode,
            difficulty,
            source: source.into(),
            phase: SessionPhase::Playing,
            time_limit_ms,
            target_problems,
            ..SessionState::default()
        };
        self.advance(rng);

        tracing::debug!(mode = mode.name(), difficulty = difficulty.name(), "run started");
    }

    /// Starts a daily challenge run serving the challenge's problems in order.
    /// Ends after the last problem or at the challenge's time limit.
    pub fn start_daily<R: Rng>(&mut self, challenge: &DailyChallenge, rng: &mut R) {
        let template = &challenge.template;
        self.state = SessionState {
            mode: GameMode::Practice,
            difficulty: template.difficulty,
            source: ProblemSource::Category(template.category),
            phase: SessionPhase::Playing,
            time_limit_ms: u64::from(template.time_limit_secs) * 1000,
            target_problems: challenge.problems.len() as u32,
            daily: Some(DailyRun {
                challenge_id: challenge.id.clone(),
                queue: challenge.problems.iter().cloned().collect(),
            }),
            ..SessionState::default()
        };
        self.advance(rng);

        tracing::debug!(challenge = %challenge.id, "daily challenge started");
    }

    /// Answers the current problem.
    pub fn submit_answer<R: Rng>(&mut self, value: i64, rng: &mut R) -> Option<AnswerOutcome> {
        let index = self.state.problem_index;
        self.submit_answer_for(index, value, rng)
    }

    /// Answers problem `problem_index`. Returns `None` (and changes nothing)
    /// when not playing, paused, or when the index is stale.
    pub fn submit_answer_for<R: Rng>(
        &mut self,
        problem_index: u32,
        value: i64,
        rng: &mut R,
    ) -> Option<AnswerOutcome> {
        if self.state.phase != SessionPhase::Playing || problem_index != self.state.problem_index {
            return None;
        }
        let problem = self.state.current_problem.as_ref()?;
        let correct = check_answer(problem, value);
        let correct_answer = problem.answer;

        if correct {
            self.state.record_correct();
        } else {
            self.state.record_wrong();
            if self.state.mode == GameMode::Survival {
                self.state.lives = self.state.lives.saturating_sub(1);
                if self.state.lives == 0 {
                    self.end();
                    return Some(AnswerOutcome {
                        correct,
                        correct_answer,
                        finished: true,
                    });
                }
            }
        }

        let target = self.state.target_problems;
        if target > 0 && self.state.problem_index >= target {
            self.end();
        } else {
            self.advance(rng);
        }

        Some(AnswerOutcome {
            correct,
            correct_answer,
            finished: self.state.is_finished(),
        })
    }

    /// Updates elapsed time and applies the mode's timer rule.
    pub fn tick<R: Rng>(&mut self, elapsed_ms: u64, rng: &mut R) -> TickEvent {
        if self.state.phase != SessionPhase::Playing {
            return TickEvent::Ignored;
        }
        self.state.elapsed_ms = self.state.elapsed_ms.max(elapsed_ms);
        let limit = self.state.time_limit_ms;
        if limit == 0 {
            return TickEvent::Running;
        }

        if self.state.mode == GameMode::Survival {
            let on_problem = self.state.elapsed_ms - self.state.problem_started_ms;
            if on_problem < limit {
                return TickEvent::Running;
            }
            let correct_answer = self
                .state
                .current_problem
                .as_ref()
                .map(|p| p.answer)
                .unwrap_or_default();
            self.state.record_wrong();
            self.state.lives = self.state.lives.saturating_sub(1);
            if self.state.lives == 0 {
                self.end();
                return TickEvent::Finished;
            }
            self.advance(rng);
            return TickEvent::ProblemTimedOut {
                correct_answer,
                lives: self.state.lives,
            };
        }

        if self.state.elapsed_ms >= limit {
            self.end();
            TickEvent::Finished
        } else {
            TickEvent::Running
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state.phase != SessionPhase::Playing {
            return false;
        }
        self.state.phase = SessionPhase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.phase != SessionPhase::Paused {
            return false;
        }
        self.state.phase = SessionPhase::Playing;
        true
    }

    /// Finishes the run, records it in history and returns the result.
    /// Only a playing (unpaused) run can finish.
    pub fn end(&mut self) -> Option<GameResult> {
        if self.state.phase != SessionPhase::Playing {
            return None;
        }
        let state = &self.state;
        let total = state.total_answered();
        // An empty run is scored as one problem so it keeps the speed bonus.
        let scored_total = total.max(1);
        let result = GameResult {
            id: uuid::Uuid::new_v4().to_string(),
            mode: state.mode,
            difficulty: state.difficulty,
            source: state.source.clone(),
            score: calculate_score(
                state.correct_count,
                scored_total,
                state.elapsed_ms,
                state.difficulty,
            ),
            correct_count: state.correct_count,
            total_count: total,
            accuracy: accuracy_percent(state.correct_count, total),
            time_ms: state.elapsed_ms,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            best_streak: state.best_streak,
            daily_challenge_id: state.daily.as_ref().map(|d| d.challenge_id.clone()),
        };

        self.history.push(result.clone());
        self.state.phase = SessionPhase::Finished;
        self.state.current_problem = None;

        tracing::info!(
            mode = result.mode.name(),
            score = result.score,
            accuracy = result.accuracy,
            "run finished"
        );
        Some(result)
    }

    /// Back to idle. Also abandons a run in progress without recording it.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
    }

    /// The most recently finished run, while the machine is still `Finished`.
    pub fn last_result(&self) -> Option<&GameResult> {
        if self.state.is_finished() {
            self.history.latest()
        } else {
            None
        }
    }

    fn advance<R: Rng>(&mut self, rng: &mut R) {
        let next = match self.state.daily.as_mut().and_then(|d| d.queue.pop_front()) {
            Some(problem) => problem,
            None => generate_for_source(&self.state.source, self.state.difficulty, rng),
        };
        self.state.current_problem = Some(next);
        self.state.problem_index += 1;
        self.state.problem_started_ms = self.state.elapsed_ms;
    }
}
