//! Applying finished runs to progression.

use super::types::{ProgressionState, RunRewards};
use super::xp::{calculate_game_xp, RunXpInput};
use crate::achievements::AchievementId;
use crate::daily;
use crate::session::GameResult;
use chrono::{Local, NaiveDate};

impl ProgressionState {
    /// Applies a finished run using today's local date.
    pub fn apply_run_result(&mut self, result: &GameResult, is_perfect: bool) -> RunRewards {
        self.apply_run_result_on(result, is_perfect, Local::now().date_naive())
    }

    /// Applies a finished run as of `today`.
    ///
    /// Order: run XP, lifetime counters and day streak, one achievement pass
    /// against the updated stats, then achievement XP.
    pub fn apply_run_result_on(
        &mut self,
        result: &GameResult,
        is_perfect: bool,
        today: NaiveDate,
    ) -> RunRewards {
        let level_before = self.level();
        let first_game_of_day = self.last_played != Some(today);
        let daily_challenge = result
            .daily_challenge_id
            .as_ref()
            .is_some_and(|id| !self.completed_challenges.contains(id));

        let xp = calculate_game_xp(RunXpInput {
            correct_answers: result.correct_count,
            perfect: is_perfect,
            best_streak: result.best_streak,
            first_game_of_day,
            daily_challenge,
        });
        self.total_xp += xp.total();

        self.games_played += 1;
        self.correct_answers += result.correct_count;
        if is_perfect {
            self.perfect_games += 1;
        }
        self.longest_streak = self.longest_streak.max(result.best_streak);
        self.update_day_streak(today);
        if daily_challenge {
            self.completed_challenges
                .extend(result.daily_challenge_id.iter().cloned());
        }

        let stats = self.player_stats();
        let unlocked = self.achievements.evaluate(&stats);
        let achievement_xp: u64 = unlocked.iter().map(|def| def.xp_reward).sum();
        for def in &unlocked {
            tracing::info!(achievement = def.id.as_str(), xp = def.xp_reward, "achievement unlocked");
        }
        self.total_xp += achievement_xp;

        let level_after = self.level();
        let leveled_up = level_after > level_before;
        if leveled_up {
            tracing::info!(level = level_after, title = self.level_title(), "level up");
        }

        RunRewards {
            xp,
            achievement_xp,
            leveled_up,
            new_level: leveled_up.then_some(level_after),
            newly_unlocked: unlocked.iter().map(|def| def.id).collect(),
        }
    }

    /// Same day: unchanged. Day after the last play: +1. Otherwise: 1.
    pub fn update_day_streak(&mut self, today: NaiveDate) {
        self.day_streak = match self.last_played {
            Some(last) if last == today => self.day_streak.max(1),
            Some(last) if last.succ_opt() == Some(today) => self.day_streak + 1,
            _ => 1,
        };
        self.last_played = Some(today);
    }

    /// Returns true if the achievement was unseen.
    pub fn mark_achievement_seen(&mut self, id: AchievementId) -> bool {
        self.achievements.mark_seen(id)
    }

    pub fn has_completed_daily(&self, date: NaiveDate) -> bool {
        daily::has_completed(&self.completed_challenges, date)
    }

    pub fn reset_progress(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, GameMode, ProblemSource};
    use crate::progression::xp::XpSource;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn result(correct: u32, total: u32, best_streak: u32) -> GameResult {
        GameResult {
            id: "run".to_string(),
            mode: GameMode::Practice,
            difficulty: Difficulty::Easy,
            source: ProblemSource::default(),
            score: 0,
            correct_count: correct,
            total_count: total,
            accuracy: if total == 0 {
                0.0
            } else {
                correct as f64 / total as f64 * 100.0
            },
            time_ms: 30_000,
            date: "2024-03-15T10:00:00.000Z".to_string(),
            best_streak,
            daily_challenge_id: None,
        }
    }

    #[test]
    fn test_first_run() {
        let mut state = ProgressionState::default();
        let rewards = state.apply_run_result_on(&result(10, 10, 10), true, date(2024, 3, 15));

        // 100 correct + 50 perfect + 50 streak + 25 first of day
        assert_eq!(rewards.xp.total(), 225);
        assert_eq!(
            rewards.newly_unlocked,
            vec![
                AchievementId::FirstSteps,
                AchievementId::SharpMind,
                AchievementId::OnFire
            ]
        );
        assert_eq!(rewards.achievement_xp, 25 + 30 + 40);
        assert_eq!(state.total_xp, 320);
        assert_eq!(state.level(), 1);
        assert!(!rewards.leveled_up);
        assert_eq!(state.day_streak, 1);
        assert_eq!(state.games_played, 1);
        assert_eq!(state.perfect_games, 1);
        assert_eq!(state.unseen_achievements().len(), 3);
    }

    #[test]
    fn test_second_run_same_day_has_no_first_game_bonus() {
        let mut state = ProgressionState::default();
        let today = date(2024, 3, 15);
        state.apply_run_result_on(&result(1, 2, 1), false, today);
        let rewards = state.apply_run_result_on(&result(3, 4, 2), false, today);
        assert_eq!(rewards.xp.total(), 30);
        assert_eq!(state.day_streak, 1);
    }

    #[test]
    fn test_day_streak_accounting() {
        let mut state = ProgressionState::default();
        state.update_day_streak(date(2024, 2, 28));
        assert_eq!(state.day_streak, 1);
        state.update_day_streak(date(2024, 2, 29));
        assert_eq!(state.day_streak, 2);
        state.update_day_streak(date(2024, 2, 29));
        assert_eq!(state.day_streak, 2);
        state.update_day_streak(date(2024, 3, 1));
        assert_eq!(state.day_streak, 3);
        state.update_day_streak(date(2024, 3, 3));
        assert_eq!(state.day_streak, 1);
    }

    #[test]
    fn test_achievement_xp_applies_after_one_pass() {
        let mut state = ProgressionState {
            total_xp: 2_470,
            ..ProgressionState::default()
        };
        // 0 correct + 25 first of day = 2495, still level 4
        let rewards = state.apply_run_result_on(&result(0, 1, 0), false, date(2024, 3, 15));
        assert_eq!(rewards.newly_unlocked, vec![AchievementId::FirstSteps]);
        assert_eq!(state.total_xp, 2_520);
        assert_eq!(state.level(), 5);
        assert_eq!(rewards.new_level, Some(5));
        // Level 5 reached through achievement XP; picked up on the next run
        assert!(!state.is_unlocked(AchievementId::GettingStarted));

        let rewards = state.apply_run_result_on(&result(0, 1, 0), false, date(2024, 3, 15));
        assert_eq!(rewards.newly_unlocked, vec![AchievementId::GettingStarted]);
    }

    #[test]
    fn test_daily_bonus_once_per_challenge() {
        let mut state = ProgressionState::default();
        let today = date(2024, 3, 15);
        let mut daily_run = result(0, 1, 0);
        daily_run.daily_challenge_id = Some("daily-2024-03-15".to_string());

        let first = state.apply_run_result_on(&daily_run, false, today);
        assert!(first
            .xp
            .entries
            .iter()
            .any(|&(source, amount)| source == XpSource::DailyChallenge && amount == 100));
        assert!(state.has_completed_daily(today));

        let again = state.apply_run_result_on(&daily_run, false, today);
        assert_eq!(again.xp.total(), 0);
        assert_eq!(state.completed_challenges.len(), 1);
    }

    #[test]
    fn test_mark_seen_and_reset() {
        let mut state = ProgressionState::default();
        state.apply_run_result_on(&result(1, 1, 1), true, date(2024, 3, 15));
        assert!(state.mark_achievement_seen(AchievementId::FirstSteps));
        assert!(state.is_unlocked(AchievementId::FirstSteps));
        assert!(!state.unseen_achievements().contains(&AchievementId::FirstSteps));

        state.reset_progress();
        assert_eq!(state, ProgressionState::default());
        assert_eq!(state.level_title(), "Math Beginner");
    }
}
