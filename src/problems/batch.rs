//! Duplicate-free problem batches.

use super::arithmetic::generate_problem;
use super::types::{Fingerprint, MathProblem};
use crate::core::{Difficulty, Operation, MAX_GENERATION_ATTEMPTS};
use rand::Rng;
use std::collections::HashSet;

/// Collects `count` problems from `generate`, skipping fingerprints already
/// produced in this batch.
///
/// A small operand space can make uniqueness impossible (easy subtraction has
/// only 55 distinct problems). After `MAX_GENERATION_ATTEMPTS` consecutive
/// duplicates the next problem is accepted as-is, so the batch always has
/// exactly `count` entries.
pub fn generate_unique<R, F>(count: usize, rng: &mut R, mut generate: F) -> Vec<MathProblem>
where
    R: Rng,
    F: FnMut(&mut R) -> MathProblem,
{
    let mut problems = Vec::with_capacity(count);
    let mut seen: HashSet<Fingerprint> = HashSet::with_capacity(count);
    let mut duplicates_in_a_row = 0;

    while problems.len() < count {
        let problem = generate(rng);
        let fresh = seen.insert(problem.fingerprint());

        if fresh || duplicates_in_a_row >= MAX_GENERATION_ATTEMPTS {
            if !fresh {
                tracing::warn!(
                    display = %problem.display,
                    batch_size = count,
                    "accepting duplicate problem after retry cap"
                );
            }
            problems.push(problem);
            duplicates_in_a_row = 0;
        } else {
            duplicates_in_a_row += 1;
        }
    }

    problems
}

/// Generates `count` distinct problems for an operation (or `Mixed`).
pub fn generate_many<R: Rng>(
    count: usize,
    difficulty: Difficulty,
    operation: Operation,
    rng: &mut R,
) -> Vec<MathProblem> {
    generate_unique(count, rng, |rng| generate_problem(difficulty, operation, rng))
}
