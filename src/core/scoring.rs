//! Run scoring.
//!
//! Score = base + accuracy bonus + speed bonus, each scaled by the difficulty
//! multiplier, rounded once at the end.

use super::constants::{
    ACCURACY_BONUS_POINTS, BASE_POINTS_PER_CORRECT, SPEED_BONUS_MS_PER_PROBLEM,
    SPEED_BONUS_POINTS,
};
use super::types::Difficulty;

/// Fraction of the speed bonus earned: 1.0 at zero time, decaying linearly to
/// 0.0 at an average of 10 s per problem. A run with no problems earns none.
pub fn time_bonus_factor(total_count: u32, elapsed_ms: u64) -> f64 {
    if total_count == 0 {
        return 0.0;
    }
    let budget_ms = total_count as f64 * SPEED_BONUS_MS_PER_PROBLEM;
    (1.0 - elapsed_ms as f64 / budget_ms).max(0.0)
}

/// Calculates the score for a finished run.
pub fn calculate_score(
    correct_count: u32,
    total_count: u32,
    elapsed_ms: u64,
    difficulty: Difficulty,
) -> u32 {
    let accuracy = if total_count == 0 {
        0.0
    } else {
        correct_count as f64 / total_count as f64
    };
    let multiplier = difficulty.multiplier();

    let base_score = correct_count as f64 * BASE_POINTS_PER_CORRECT * multiplier;
    let accuracy_bonus = accuracy * ACCURACY_BONUS_POINTS * multiplier;
    let speed_bonus =
        time_bonus_factor(total_count, elapsed_ms) * SPEED_BONUS_POINTS * multiplier;

    (base_score + accuracy_bonus + speed_bonus).round() as u32
}

/// Accuracy as a percentage (0.0 - 100.0). Zero when nothing was answered.
pub fn accuracy_percent(correct_count: u32, total_count: u32) -> f64 {
    if total_count == 0 {
        return 0.0;
    }
    correct_count as f64 / total_count as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_score() {
        // base 1200 + accuracy 60 + speed 75
        assert_eq!(calculate_score(8, 10, 50_000, Difficulty::Medium), 1335);
    }

    #[test]
    fn test_multipliers() {
        // 10/10 in zero time: 1000 + 50 + 100 = 1150 before multiplier
        assert_eq!(calculate_score(10, 10, 0, Difficulty::Easy), 1150);
        assert_eq!(calculate_score(10, 10, 0, Difficulty::Hard), 2300);
        assert_eq!(calculate_score(10, 10, 0, Difficulty::Expert), 3450);
    }

    #[test]
    fn test_speed_bonus_decays_to_zero() {
        assert_eq!(time_bonus_factor(10, 0), 1.0);
        assert_eq!(time_bonus_factor(10, 100_000), 0.0);
        assert_eq!(time_bonus_factor(10, 500_000), 0.0);
        assert_eq!(calculate_score(0, 10, 200_000, Difficulty::Easy), 0);
    }

    #[test]
    fn test_empty_run_scores_zero() {
        assert_eq!(calculate_score(0, 0, 0, Difficulty::Expert), 0);
        assert_eq!(accuracy_percent(0, 0), 0.0);
    }

    #[test]
    fn test_rounding_happens_once() {
        // 1 correct of 3 on easy in 15s: 100 + 16.67 + 50 = 166.67
        assert_eq!(calculate_score(1, 3, 15_000, Difficulty::Easy), 167);
    }

    #[test]
    fn test_accuracy_percent() {
        assert_eq!(accuracy_percent(3, 4), 75.0);
        assert_eq!(accuracy_percent(4, 4), 100.0);
    }
}
