//! Top-level owner wiring runs to history, progression and persistence.
//!
//! The store is injected so callers can use the on-disk `SaveManager` or an
//! in-memory store. Store failures are logged and never undo a committed run.

use crate::achievements::AchievementId;
use crate::core::{Difficulty, GameMode, ProblemSource};
use crate::daily::DailyChallenge;
use crate::progression::{ProgressionState, RunRewards};
use crate::puzzles::{PuzzleChoice, PuzzleOutcome, PuzzleRun};
use crate::save_manager::ProgressStore;
use crate::session::{AnswerOutcome, GameResult, SessionStateMachine, TickEvent};
use rand::Rng;

pub struct AppContext<S: ProgressStore> {
    session: SessionStateMachine,
    puzzle: Option<PuzzleRun>,
    progression: ProgressionState,
    last_rewards: Option<RunRewards>,
    store: S,
}

impl<S: ProgressStore> AppContext<S> {
    /// Restores history and progression from `store`. A record that fails to
    /// load starts fresh.
    pub fn open(store: S) -> Self {
        let history = store.load_history().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load history, starting empty");
            Default::default()
        });
        let progression = store.load_progression().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load progression, starting fresh");
            Default::default()
        });
        Self {
            session: SessionStateMachine::with_history(history),
            puzzle: None,
            progression,
            last_rewards: None,
            store,
        }
    }

    pub fn session(&self) -> &SessionStateMachine {
        &self.session
    }

    pub fn puzzle(&self) -> Option<&PuzzleRun> {
        self.puzzle.as_ref()
    }

    pub fn progression(&self) -> &ProgressionState {
        &self.progression
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rewards from the most recently committed run.
    pub fn last_rewards(&self) -> Option<&RunRewards> {
        self.last_rewards.as_ref()
    }

    // =========================================================================
    // Standard runs
    // =========================================================================

    pub fn start<R: Rng>(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
        source: impl Into<ProblemSource>,
        rng: &mut R,
    ) {
        self.puzzle = None;
        self.last_rewards = None;
        self.session.start(mode, difficulty, source, rng);
    }

    pub fn start_daily<R: Rng>(&mut self, challenge: &DailyChallenge, rng: &mut R) {
        self.puzzle = None;
        self.last_rewards = None;
        self.session.start_daily(challenge, rng);
    }

    /// Answers the current problem; commits the run if it ended.
    pub fn submit_answer<R: Rng>(&mut self, value: i64, rng: &mut R) -> Option<AnswerOutcome> {
        let outcome = self.session.submit_answer(value, rng)?;
        if outcome.finished {
            self.commit_finished_session();
        }
        Some(outcome)
    }

    pub fn tick<R: Rng>(&mut self, elapsed_ms: u64, rng: &mut R) -> TickEvent {
        let event = self.session.tick(elapsed_ms, rng);
        if event == TickEvent::Finished {
            self.commit_finished_session();
        }
        event
    }

    pub fn pause(&mut self) -> bool {
        self.session.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.session.resume()
    }

    /// Ends the current run on the player's request (practice has no other
    /// way to finish).
    pub fn end_run(&mut self) -> Option<RunRewards> {
        let result = self.session.end()?;
        Some(self.commit(&result))
    }

    /// Leaves the current run without recording anything.
    pub fn abandon(&mut self) {
        self.session.reset();
        self.puzzle = None;
    }

    // =========================================================================
    // Puzzle runs
    // =========================================================================

    pub fn start_puzzle<R: Rng>(&mut self, mode: GameMode, rng: &mut R) {
        self.session.reset();
        self.last_rewards = None;
        self.puzzle = Some(PuzzleRun::new(mode, rng));
    }

    pub fn answer_puzzle<R: Rng>(
        &mut self,
        choice: PuzzleChoice,
        rng: &mut R,
    ) -> Option<PuzzleOutcome> {
        self.puzzle.as_mut()?.answer(choice, rng)
    }

    /// Advances the puzzle clock; returns the rewards when time runs out.
    pub fn tick_puzzle(&mut self, elapsed_ms: u64) -> Option<RunRewards> {
        let result = self.puzzle.as_mut()?.tick(elapsed_ms)?;
        self.session.history_mut().push(result.clone());
        Some(self.commit(&result))
    }

    // =========================================================================
    // Progression
    // =========================================================================

    pub fn mark_achievement_seen(&mut self, id: AchievementId) -> bool {
        let changed = self.progression.mark_achievement_seen(id);
        if changed {
            self.persist_progression();
        }
        changed
    }

    pub fn reset_progress(&mut self) {
        self.progression.reset_progress();
        self.session.history_mut().clear();
        self.persist_history();
        self.persist_progression();
    }

    fn commit_finished_session(&mut self) {
        if let Some(result) = self.session.last_result().cloned() {
            self.commit(&result);
        }
    }

    fn commit(&mut self, result: &GameResult) -> RunRewards {
        let rewards = self
            .progression
            .apply_run_result(result, result.is_perfect());
        self.persist_history();
        self.persist_progression();
        self.last_rewards = Some(rewards.clone());
        rewards
    }

    fn persist_history(&mut self) {
        if let Err(e) = self.store.save_history(self.session.history()) {
            tracing::warn!(error = %e, "failed to save history");
        }
    }

    fn persist_progression(&mut self) {
        if let Err(e) = self.store.save_progression(&self.progression) {
            tracing::warn!(error = %e, "failed to save progression");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use crate::error::SaveError;
    use crate::save_manager::MemoryStore;
    use crate::session::History;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn current_answer<S: ProgressStore>(app: &AppContext<S>) -> i64 {
        app.session()
            .current_problem()
            .map(|p| p.answer)
            .unwrap_or_default()
    }

    /// Accepts nothing; every write fails.
    struct FailingStore;

    impl ProgressStore for FailingStore {
        fn load_history(&self) -> Result<History, SaveError> {
            Err(SaveError::ChecksumMismatch)
        }
        fn save_history(&mut self, _: &History) -> Result<(), SaveError> {
            Err(SaveError::NoConfigDir)
        }
        fn load_progression(&self) -> Result<ProgressionState, SaveError> {
            Err(SaveError::ChecksumMismatch)
        }
        fn save_progression(&mut self, _: &ProgressionState) -> Result<(), SaveError> {
            Err(SaveError::NoConfigDir)
        }
    }

    #[test]
    fn test_speedrun_commits_once_finished() {
        let mut rng = seeded_rng();
        let mut app = AppContext::open(MemoryStore::new());
        app.start(GameMode::SpeedRun, Difficulty::Easy, Operation::Add, &mut rng);

        for _ in 0..19 {
            let answer = current_answer(&app);
            let outcome = app.submit_answer(answer, &mut rng).expect("playing");
            assert!(!outcome.finished);
            assert!(app.last_rewards().is_none());
        }
        let answer = current_answer(&app);
        assert!(app.submit_answer(answer, &mut rng).expect("playing").finished);

        let rewards = app.last_rewards().expect("rewards after finish");
        assert!(rewards.newly_unlocked.contains(&AchievementId::FirstSteps));
        assert_eq!(app.progression().games_played, 1);
        assert_eq!(app.progression().perfect_games, 1);
        assert_eq!(app.session().history().len(), 1);

        let stored = app.store().load_progression().expect("load");
        assert_eq!(&stored, app.progression());
        assert_eq!(app.store().load_history().expect("load").len(), 1);
    }

    #[test]
    fn test_reopen_restores_state() {
        let mut rng = seeded_rng();
        let mut app = AppContext::open(MemoryStore::new());
        app.start(GameMode::Practice, Difficulty::Medium, Operation::Mixed, &mut rng);
        let answer = current_answer(&app);
        app.submit_answer(answer, &mut rng);
        app.end_run().expect("practice run ends on request");

        let reopened = AppContext::open(app.store().clone());
        assert_eq!(reopened.progression(), app.progression());
        assert_eq!(reopened.session().history(), app.session().history());
    }

    #[test]
    fn test_abandoned_run_is_not_recorded() {
        let mut rng = seeded_rng();
        let mut app = AppContext::open(MemoryStore::new());
        app.start(GameMode::TimeAttack, Difficulty::Easy, Operation::Add, &mut rng);
        app.submit_answer(0, &mut rng);
        app.abandon();

        assert!(app.end_run().is_none());
        assert!(app.session().history().is_empty());
        assert_eq!(app.progression().games_played, 0);
    }

    #[test]
    fn test_time_attack_commits_on_tick() {
        let mut rng = seeded_rng();
        let mut app = AppContext::open(MemoryStore::new());
        app.start(GameMode::TimeAttack, Difficulty::Easy, Operation::Add, &mut rng);
        assert_eq!(app.tick(30_000, &mut rng), TickEvent::Running);
        assert_eq!(app.tick(60_000, &mut rng), TickEvent::Finished);
        assert!(app.last_rewards().is_some());
        assert_eq!(app.progression().games_played, 1);
    }

    #[test]
    fn test_puzzle_run_feeds_history_and_progression() {
        let mut rng = seeded_rng();
        let mut app = AppContext::open(MemoryStore::new());
        app.start_puzzle(GameMode::Compare, &mut rng);

        let answer = app.puzzle().expect("puzzle").problem.answer;
        let outcome = app.answer_puzzle(answer, &mut rng).expect("running");
        assert!(outcome.correct);

        assert!(app.tick_puzzle(59_999).is_none());
        let rewards = app.tick_puzzle(60_000).expect("finished");
        assert!(rewards.xp.total() >= 10);
        assert!(app.tick_puzzle(61_000).is_none());

        let latest = app.session().history().latest().expect("recorded");
        assert_eq!(latest.source, ProblemSource::Puzzle(GameMode::Compare));
        assert_eq!(app.progression().correct_answers, 1);
    }

    #[test]
    fn test_store_failures_do_not_unwind_state() {
        let mut rng = seeded_rng();
        let mut app = AppContext::open(FailingStore);
        assert!(app.session().history().is_empty());

        app.start(GameMode::Practice, Difficulty::Easy, Operation::Add, &mut rng);
        let answer = current_answer(&app);
        app.submit_answer(answer, &mut rng);
        assert!(app.end_run().is_some());

        assert_eq!(app.progression().games_played, 1);
        assert_eq!(app.session().history().len(), 1);
    }

    #[test]
    fn test_mark_seen_and_reset_progress_persist() {
        let mut rng = seeded_rng();
        let mut app = AppContext::open(MemoryStore::new());
        app.start(GameMode::Practice, Difficulty::Easy, Operation::Add, &mut rng);
        app.end_run();

        assert!(app.mark_achievement_seen(AchievementId::FirstSteps));
        assert!(!app.mark_achievement_seen(AchievementId::FirstSteps));
        let stored = app.store().load_progression().expect("load");
        assert!(stored.unseen_achievements().is_empty());

        app.reset_progress();
        assert_eq!(
            app.store().load_progression().expect("load"),
            ProgressionState::default()
        );
        assert!(app.store().load_history().expect("load").is_empty());
    }
}
