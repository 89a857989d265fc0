//! Basic four-operation problem generation.

use super::options::generate_options;
use super::types::{generate_id, MathProblem, ProblemKind};
use crate::core::{Difficulty, Operation, DIVIDE_CAP};
use crate::session::GameConfig;
use rand::seq::SliceRandom;
use rand::Rng;

/// Inclusive operand bounds used by one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandBounds {
    pub min: i64,
    pub max: i64,
    pub multiply_cap: i64,
}

impl OperandBounds {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (min, max) = difficulty.range();
        Self {
            min,
            max,
            multiply_cap: difficulty.multiply_cap(),
        }
    }

    /// Lowers the upper bound to `limit`, never below `min`.
    pub fn capped(self, limit: i64) -> Self {
        let max = self.max.min(limit).max(self.min);
        Self {
            min: self.min,
            max,
            multiply_cap: self.multiply_cap.min(max).max(self.min),
        }
    }
}

/// Resolves `Mixed` to a concrete operation allowed at `difficulty`.
pub fn pick_operation<R: Rng>(difficulty: Difficulty, operation: Operation, rng: &mut R) -> Operation {
    if operation != Operation::Mixed {
        return operation;
    }
    difficulty
        .operations()
        .choose(rng)
        .copied()
        .unwrap_or(Operation::Add)
}

/// Draws `(operand1, operand2, answer)` for a concrete operation.
fn draw_operands<R: Rng>(op: Operation, bounds: OperandBounds, rng: &mut R) -> (i64, i64, i64) {
    let OperandBounds { min, max, .. } = bounds;
    match op {
        Operation::Subtract => {
            let mut a = rng.gen_range(min..=max);
            let mut b = rng.gen_range(min..=a.min(max));
            if b > a {
                std::mem::swap(&mut a, &mut b);
            }
            (a, b, a - b)
        }
        Operation::Multiply => {
            let cap = max.min(bounds.multiply_cap).max(min);
            let a = rng.gen_range(min..=cap);
            let b = rng.gen_range(min..=cap);
            (a, b, a * b)
        }
        Operation::Divide => {
            let cap = DIVIDE_CAP.min(max).max(1);
            let divisor = rng.gen_range(min.max(1).min(cap)..=cap);
            let quotient = rng.gen_range(1..=cap);
            (divisor * quotient, divisor, quotient)
        }
        Operation::Add | Operation::Mixed => {
            let a = rng.gen_range(min..=max);
            let b = rng.gen_range(min..=max);
            (a, b, a + b)
        }
    }
}

fn build<R: Rng>(
    difficulty: Difficulty,
    op: Operation,
    bounds: OperandBounds,
    rng: &mut R,
) -> MathProblem {
    // Callers resolve Mixed first; anything left over becomes addition.
    let op = if op == Operation::Mixed { Operation::Add } else { op };
    let (operand1, operand2, answer) = draw_operands(op, bounds, rng);
    let symbol = op.symbol();

    MathProblem {
        id: generate_id(rng),
        difficulty,
        kind: ProblemKind::Operation(op),
        operand1,
        operand2,
        symbol: symbol.to_string(),
        answer,
        display: format!("{} {} {}", operand1, symbol, operand2),
        options: None,
        hint: None,
        explanation: None,
    }
}

/// Generates a single free-answer problem for an operation (or `Mixed`).
pub fn generate_problem<R: Rng>(difficulty: Difficulty, operation: Operation, rng: &mut R) -> MathProblem {
    let op = pick_operation(difficulty, operation, rng);
    build(difficulty, op, OperandBounds::for_difficulty(difficulty), rng)
}

/// Generates a problem from a setup-screen config: a uniformly chosen enabled
/// operation, with its operand bound lowered to the configured maximum.
/// Falls back to addition when nothing is enabled.
pub fn generate_configured<R: Rng>(difficulty: Difficulty, config: &GameConfig, rng: &mut R) -> MathProblem {
    let enabled = config.enabled_operations();
    let op = enabled.choose(rng).copied().unwrap_or(Operation::Add);
    let limit = config.operation(op).max_number as i64;
    let bounds = OperandBounds::for_difficulty(difficulty).capped(limit);
    build(difficulty, op, bounds, rng)
}

/// The `arithmetic` category: a mixed-operation problem with four options.
pub fn generate_arithmetic<R: Rng>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let mut problem = generate_problem(difficulty, Operation::Mixed, rng);
    problem.options = Some(generate_options(problem.answer, rng));
    problem
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn recompute(problem: &MathProblem) -> i64 {
        problem
            .operation()
            .and_then(|op| op.apply(problem.operand1, problem.operand2))
            .unwrap()
    }

    #[test]
    fn test_answers_match_operands() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            for op in Operation::CONCRETE {
                for _ in 0..200 {
                    let p = generate_problem(difficulty, op, &mut rng);
                    assert_eq!(p.operation(), Some(op));
                    assert_eq!(recompute(&p), p.answer, "{}", p.display);
                }
            }
        }
    }

    #[test]
    fn test_subtract_never_negative() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            for _ in 0..500 {
                let p = generate_problem(difficulty, Operation::Subtract, &mut rng);
                assert!(p.operand1 >= p.operand2);
                assert!(p.answer >= 0);
            }
        }
    }

    #[test]
    fn test_divide_is_exact() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            for _ in 0..500 {
                let p = generate_problem(difficulty, Operation::Divide, &mut rng);
                assert!(p.operand2 >= 1);
                assert_eq!(p.operand1 % p.operand2, 0);
                assert_eq!(p.operand1 / p.operand2, p.answer);
                assert!((1..=12).contains(&p.answer));
            }
        }
    }

    #[test]
    fn test_expert_divisor_respects_tier_minimum() {
        let mut rng = seeded_rng();
        for _ in 0..200 {
            let p = generate_problem(Difficulty::Expert, Operation::Divide, &mut rng);
            assert!((10..=12).contains(&p.operand2));
        }
    }

    #[test]
    fn test_multiply_caps() {
        let mut rng = seeded_rng();
        for _ in 0..500 {
            let p = generate_problem(Difficulty::Hard, Operation::Multiply, &mut rng);
            assert!(p.operand1 <= 12 && p.operand2 <= 12);
            let p = generate_problem(Difficulty::Expert, Operation::Multiply, &mut rng);
            assert!((10..=25).contains(&p.operand1) && (10..=25).contains(&p.operand2));
        }
    }

    #[test]
    fn test_operands_in_tier_range() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            let (min, max) = difficulty.range();
            for _ in 0..300 {
                let p = generate_problem(difficulty, Operation::Add, &mut rng);
                assert!((min..=max).contains(&p.operand1));
                assert!((min..=max).contains(&p.operand2));
            }
        }
    }

    #[test]
    fn test_mixed_easy_only_add_or_subtract() {
        let mut rng = seeded_rng();
        for _ in 0..300 {
            let p = generate_problem(Difficulty::Easy, Operation::Mixed, &mut rng);
            assert!(matches!(
                p.operation(),
                Some(Operation::Add) | Some(Operation::Subtract)
            ));
        }
    }

    #[test]
    fn test_mixed_hard_uses_all_operations() {
        let mut rng = seeded_rng();
        let seen: std::collections::HashSet<_> = (0..400)
            .filter_map(|_| generate_problem(Difficulty::Hard, Operation::Mixed, &mut rng).operation())
            .collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_display_format() {
        let mut rng = seeded_rng();
        let p = generate_problem(Difficulty::Easy, Operation::Add, &mut rng);
        assert_eq!(p.display, format!("{} + {}", p.operand1, p.operand2));
        assert!(p.options.is_none());
    }

    #[test]
    fn test_arithmetic_category_has_options() {
        let mut rng = seeded_rng();
        for _ in 0..100 {
            let p = generate_arithmetic(Difficulty::Medium, &mut rng);
            let options = p.options.as_ref().unwrap();
            assert_eq!(options.len(), 4);
            assert!(options.contains(&p.answer));
        }
    }

    #[test]
    fn test_configured_respects_enabled_ops_and_caps() {
        let mut rng = seeded_rng();
        let mut config = GameConfig::default();
        config.set_max_number(Operation::Add, 5);
        config.toggle_operation(Operation::Subtract);
        config.toggle_operation(Operation::Multiply);
        // Only addition (max 5) remains enabled.
        for _ in 0..200 {
            let p = generate_configured(Difficulty::Hard, &config, &mut rng);
            assert_eq!(p.operation(), Some(Operation::Add));
            assert!(p.operand1 <= 5 && p.operand2 <= 5);
        }
    }

    #[test]
    fn test_bounds_capped_never_below_min() {
        let bounds = OperandBounds::for_difficulty(Difficulty::Expert).capped(3);
        assert_eq!(bounds.min, 10);
        assert_eq!(bounds.max, 10);
        assert_eq!(bounds.multiply_cap, 10);
    }
}
