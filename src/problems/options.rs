//! Multiple-choice option generation.

use crate::core::{DISTRACTOR_SCALE, MIN_DISTRACTOR_OFFSET, OPTION_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds a shuffled option set: `correct` plus three distinct, non-negative
/// distractors within `max(5, |correct| * 0.3)` of it.
///
/// Always terminates for `correct >= 0`: `correct + 1 ..= correct + 5` are
/// valid distractors.
pub fn generate_options<R: Rng>(correct: i64, rng: &mut R) -> Vec<i64> {
    let range = ((correct.abs() as f64 * DISTRACTOR_SCALE) as i64).max(MIN_DISTRACTOR_OFFSET);
    let mut options = vec![correct];

    while options.len() < OPTION_COUNT {
        let offset = rng.gen_range(-range..=range);
        let candidate = correct + offset;
        if offset != 0 && candidate >= 0 && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    options.shuffle(rng);
    options
}

/// Puzzle-style options: distractors `correct ± 1..=spread`, non-negative.
pub fn generate_near_options<R: Rng>(correct: i64, spread: i64, rng: &mut R) -> Vec<i64> {
    let spread = spread.max(MIN_DISTRACTOR_OFFSET);
    let mut options = vec![correct];

    while options.len() < OPTION_COUNT {
        let magnitude = rng.gen_range(1..=spread);
        let candidate = if rng.gen_bool(0.5) {
            correct + magnitude
        } else {
            correct - magnitude
        };
        if candidate >= 0 && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_valid(options: &[i64], correct: i64) {
        assert_eq!(options.len(), 4);
        assert!(options.contains(&correct));
        assert!(options.iter().all(|&o| o >= 0));
        let mut sorted = options.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 4, "duplicate options: {:?}", options);
    }

    #[test]
    fn test_options_for_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            assert_valid(&generate_options(0, &mut rng), 0);
        }
    }

    #[test]
    fn test_options_scale_with_answer() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..50 {
            let options = generate_options(1000, &mut rng);
            assert_valid(&options, 1000);
            assert!(options.iter().all(|&o| (o - 1000).abs() <= 300));
        }
    }

    #[test]
    fn test_small_answers_stay_within_minimum_offset() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for correct in 0..10 {
            let options = generate_options(correct, &mut rng);
            assert_valid(&options, correct);
            assert!(options.iter().all(|&o| (o - correct).abs() <= 5));
        }
    }

    #[test]
    fn test_correct_position_varies() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let positions: std::collections::HashSet<usize> = (0..100)
            .map(|_| {
                let options = generate_options(50, &mut rng);
                options.iter().position(|&o| o == 50).unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }

    #[test]
    fn test_near_options() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for correct in [0, 1, 2, 30, 1024] {
            let options = generate_near_options(correct, 10, &mut rng);
            assert_valid(&options, correct);
            assert!(options.iter().all(|&o| (o - correct).abs() <= 10));
        }
    }
}
