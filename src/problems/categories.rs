//! Extended problem categories: fractions, percentages, algebra, powers,
//! roots and sequences.
//!
//! Every category produces a whole-number answer and four options that
//! include it.

use super::arithmetic::generate_arithmetic;
use super::options::generate_options;
use super::types::{generate_id, MathProblem, ProblemKind};
use crate::core::{Category, Difficulty};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates one problem of the given category.
pub fn generate_category<R: Rng>(category: Category, difficulty: Difficulty, rng: &mut R) -> MathProblem {
    match category {
        Category::Arithmetic => generate_arithmetic(difficulty, rng),
        Category::Fractions => generate_fractions(difficulty, rng),
        Category::Percentages => generate_percentages(difficulty, rng),
        Category::Algebra => generate_algebra(difficulty, rng),
        Category::Powers => generate_powers(difficulty, rng),
        Category::Roots => generate_roots(difficulty, rng),
        Category::Sequences => generate_sequences(difficulty, rng),
    }
}

/// Category-specific parts of a problem, before id and options are attached.
struct Draft {
    operands: (i64, i64),
    symbol: String,
    answer: i64,
    display: String,
    hint: Option<String>,
    explanation: Option<String>,
}

/// Shared tail of every category generator.
fn finish<R: Rng>(
    rng: &mut R,
    category: Category,
    difficulty: Difficulty,
    draft: Draft,
) -> MathProblem {
    let options = generate_options(draft.answer, rng);
    MathProblem {
        id: generate_id(rng),
        difficulty,
        kind: ProblemKind::Category(category),
        operand1: draft.operands.0,
        operand2: draft.operands.1,
        symbol: draft.symbol,
        answer: draft.answer,
        display: draft.display,
        options: Some(options),
        hint: draft.hint,
        explanation: draft.explanation,
    }
}

fn pick<R: Rng>(values: &[i64], fallback: i64, rng: &mut R) -> i64 {
    values.choose(rng).copied().unwrap_or(fallback)
}

// =========================================================================
// Fractions
// =========================================================================

/// Same-denominator addition or subtraction. The answer is the result's
/// numerator over the shared denominator.
pub fn generate_fractions<R: Rng>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let denominators: &[i64] = match difficulty {
        Difficulty::Easy => &[2, 4],
        Difficulty::Medium => &[2, 3, 4, 5],
        _ => &[2, 3, 4, 5, 6, 8, 10],
    };
    let d = pick(denominators, 4, rng);
    let mut n1 = rng.gen_range(1..d);
    let mut n2 = rng.gen_range(1..d);

    let (op, answer) = if rng.gen_bool(0.5) {
        ("+", n1 + n2)
    } else {
        if n1 < n2 {
            std::mem::swap(&mut n1, &mut n2);
        }
        ("−", n1 - n2)
    };

    let display = format!("{}/{} {} {}/{}", n1, d, op, n2, d);
    let explanation = format!("{} = {}/{}", display, answer, d);
    finish(
        rng,
        Category::Fractions,
        difficulty,
        Draft {
            operands: (n1, n2),
            symbol: format!("{}/{}", op, d),
            answer,
            display,
            hint: Some(format!("Same denominator: {}", d)),
            explanation: Some(explanation),
        },
    )
}

// =========================================================================
// Percentages
// =========================================================================

/// `percent% of base`, restricted to bases that give a whole answer.
pub fn generate_percentages<R: Rng>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let percentages: &[i64] = match difficulty {
        Difficulty::Easy => &[10, 20, 25, 50],
        Difficulty::Medium => &[5, 10, 15, 20, 25, 30, 50, 75],
        _ => &[5, 10, 12, 15, 20, 25, 30, 33, 40, 50, 60, 75, 80],
    };
    let bases: &[i64] = match difficulty {
        Difficulty::Easy => &[10, 20, 50, 100],
        Difficulty::Medium => &[20, 40, 50, 80, 100, 200],
        _ => &[24, 36, 48, 60, 80, 120, 150, 200, 250],
    };

    let percent = pick(percentages, 50, rng);
    let whole: Vec<i64> = bases
        .iter()
        .copied()
        .filter(|base| (percent * base) % 100 == 0)
        .collect();
    let base = pick(&whole, 100, rng);
    let answer = percent * base / 100;

    finish(
        rng,
        Category::Percentages,
        difficulty,
        Draft {
            operands: (percent, base),
            symbol: "%".to_string(),
            answer,
            display: format!("{}% of {}", percent, base),
            hint: Some(format!("{}% = {}/100", percent, percent)),
            explanation: None,
        },
    )
}

// =========================================================================
// Algebra
// =========================================================================

/// Solve for `x` in a one-step (easy) or two-step linear equation.
pub fn generate_algebra<R: Rng>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let x_max = match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 20,
        _ => 50,
    };
    let (a_max, b_max) = match difficulty {
        Difficulty::Easy => (5, 20),
        _ => (10, 50),
    };
    let x = rng.gen_range(1..=x_max);
    let a = rng.gen_range(2..=a_max);
    let b = rng.gen_range(1..=b_max);

    let form = if difficulty == Difficulty::Easy {
        rng.gen_range(0..3)
    } else {
        rng.gen_range(3..5)
    };
    let (equation, coefficient, rhs, symbol) = match form {
        0 => (format!("x + {} = {}", b, x + b), 1, x + b, "x+"),
        1 => (format!("x - {} = {}", b, x - b), 1, x - b, "x−"),
        2 => (format!("{}x = {}", a, a * x), a, a * x, "x×"),
        3 => (format!("{}x + {} = {}", a, b, a * x + b), a, a * x + b, "x+"),
        _ => (format!("{}x - {} = {}", a, b, a * x - b), a, a * x - b, "x−"),
    };

    finish(
        rng,
        Category::Algebra,
        difficulty,
        Draft {
            operands: (coefficient, rhs),
            symbol: symbol.to_string(),
            answer: x,
            display: format!("{}, x = ?", equation),
            hint: Some("Isolate x on one side".to_string()),
            explanation: None,
        },
    )
}

// =========================================================================
// Powers
// =========================================================================

fn superscript(exp: i64) -> Option<&'static str> {
    match exp {
        2 => Some("²"),
        3 => Some("³"),
        4 => Some("⁴"),
        5 => Some("⁵"),
        _ => None,
    }
}

/// `base^exp` with both drawn from tier-dependent ranges.
pub fn generate_powers<R: Rng>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let (max_base, max_exp) = match difficulty {
        Difficulty::Easy => (5, 2),
        Difficulty::Medium => (10, 3),
        _ => (12, 4),
    };
    let base: i64 = rng.gen_range(2..=max_base);
    let exp: i64 = rng.gen_range(2..=max_exp);
    let answer = base.pow(exp as u32);

    let display = match superscript(exp) {
        Some(sup) => format!("{}{}", base, sup),
        None => format!("{}^{}", base, exp),
    };
    let hint = vec![base.to_string(); exp as usize].join(" × ");

    finish(
        rng,
        Category::Powers,
        difficulty,
        Draft {
            operands: (base, exp),
            symbol: "^".to_string(),
            answer,
            display,
            hint: Some(hint),
            explanation: None,
        },
    )
}

// =========================================================================
// Roots
// =========================================================================

/// Square root of a perfect square from a tier-dependent table.
pub fn generate_roots<R: Rng>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let max_root = match difficulty {
        Difficulty::Easy => 6,
        Difficulty::Medium => 10,
        _ => 15,
    };
    let root = rng.gen_range(2..=max_root);
    let square = root * root;

    finish(
        rng,
        Category::Roots,
        difficulty,
        Draft {
            operands: (square, 2),
            symbol: "√".to_string(),
            answer: root,
            display: format!("√{}", square),
            hint: None,
            explanation: None,
        },
    )
}

// =========================================================================
// Sequences
// =========================================================================

/// Four visible terms of a progression; the answer is the fifth.
pub fn generate_sequences<R: Rng>(difficulty: Difficulty, rng: &mut R) -> MathProblem {
    let last_kind = if difficulty == Difficulty::Easy { 1 } else { 3 };
    let (terms, answer, symbol): ([i64; 4], i64, &str) = match rng.gen_range(0..=last_kind) {
        0 => {
            let start = rng.gen_range(1..=10);
            let diff_max = if difficulty == Difficulty::Easy { 5 } else { 10 };
            let diff = rng.gen_range(2..=diff_max);
            (
                [start, start + diff, start + 2 * diff, start + 3 * diff],
                start + 4 * diff,
                "seq+",
            )
        }
        1 => {
            let start = rng.gen_range(1..=5);
            let ratio: i64 = rng.gen_range(2..=3);
            (
                [start, start * ratio, start * ratio.pow(2), start * ratio.pow(3)],
                start * ratio.pow(4),
                "seq×",
            )
        }
        2 => {
            let start: i64 = rng.gen_range(1..=5);
            (
                [
                    start.pow(2),
                    (start + 1).pow(2),
                    (start + 2).pow(2),
                    (start + 3).pow(2),
                ],
                (start + 4).pow(2),
                "seq²",
            )
        }
        _ => {
            let a = rng.gen_range(1..=5);
            let b = rng.gen_range(1..=5);
            ([a, b, a + b, a + 2 * b], 2 * a + 3 * b, "seqF")
        }
    };

    let shown: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
    finish(
        rng,
        Category::Sequences,
        difficulty,
        Draft {
            operands: (terms[0], terms[1]),
            symbol: symbol.to_string(),
            answer,
            display: format!("{}, ?", shown.join(", ")),
            hint: Some("Find the pattern".to_string()),
            explanation: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_every_category_has_valid_options() {
        let mut rng = seeded_rng();
        for category in Category::ALL {
            for difficulty in Difficulty::ALL {
                for _ in 0..100 {
                    let p = generate_category(category, difficulty, &mut rng);
                    let options = p.options.as_ref().expect("category problems carry options");
                    assert_eq!(options.len(), 4);
                    assert!(options.contains(&p.answer), "{:?}", p);
                    assert!(options.iter().all(|&o| o >= 0));
                    let mut sorted = options.clone();
                    sorted.sort();
                    sorted.dedup();
                    assert_eq!(sorted.len(), 4);
                }
            }
        }
    }

    #[test]
    fn test_fraction_answer_is_numerator() {
        let mut rng = seeded_rng();
        for _ in 0..200 {
            let p = generate_fractions(Difficulty::Hard, &mut rng);
            let expected = if p.symbol.starts_with('+') {
                p.operand1 + p.operand2
            } else {
                p.operand1 - p.operand2
            };
            assert_eq!(p.answer, expected);
            assert!(p.answer >= 0);
            assert!(p.explanation.as_ref().unwrap().ends_with(&format!(
                "= {}/{}",
                p.answer,
                p.symbol.split('/').nth(1).unwrap()
            )));
        }
    }

    #[test]
    fn test_percentages_are_whole() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let p = generate_percentages(difficulty, &mut rng);
                assert_eq!(p.operand1 * p.operand2 % 100, 0);
                assert_eq!(p.answer, p.operand1 * p.operand2 / 100);
            }
        }
    }

    #[test]
    fn test_algebra_answer_solves_display() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let p = generate_algebra(difficulty, &mut rng);
                assert!(p.display.ends_with(", x = ?"));
                assert!(p.answer >= 1);
                // operand1 is the coefficient of x, operand2 the right-hand side
                let constant = p.operand2 - p.operand1 * p.answer;
                match p.symbol.as_str() {
                    "x×" => assert_eq!(constant, 0),
                    "x+" => assert!(constant > 0),
                    "x−" => assert!(constant < 0),
                    other => panic!("unexpected form {}", other),
                }
            }
        }
    }

    #[test]
    fn test_easy_algebra_is_one_step() {
        let mut rng = seeded_rng();
        for _ in 0..100 {
            let p = generate_algebra(Difficulty::Easy, &mut rng);
            assert!(p.operand1 == 1 || p.symbol == "x×");
        }
    }

    #[test]
    fn test_powers() {
        let mut rng = seeded_rng();
        for _ in 0..200 {
            let p = generate_powers(Difficulty::Medium, &mut rng);
            assert!((2..=10).contains(&p.operand1));
            assert!((2..=3).contains(&p.operand2));
            assert_eq!(p.answer, p.operand1.pow(p.operand2 as u32));
        }
        let p = generate_powers(Difficulty::Easy, &mut rng);
        assert!(p.display.ends_with('²'));
    }

    #[test]
    fn test_roots_are_perfect_squares() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            for _ in 0..100 {
                let p = generate_roots(difficulty, &mut rng);
                assert_eq!(p.answer * p.answer, p.operand1);
                assert_eq!(p.display, format!("√{}", p.operand1));
            }
        }
    }

    #[test]
    fn test_sequence_fifth_term() {
        let mut rng = seeded_rng();
        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let p = generate_sequences(difficulty, &mut rng);
                let terms: Vec<i64> = p
                    .display
                    .trim_end_matches(", ?")
                    .split(", ")
                    .map(|t| t.parse().unwrap())
                    .collect();
                assert_eq!(terms.len(), 4);
                let next = match p.symbol.as_str() {
                    "seq+" => terms[3] + (terms[1] - terms[0]),
                    "seq×" => terms[3] * (terms[1] / terms[0]),
                    "seq²" => {
                        let root = (terms[3] as f64).sqrt() as i64;
                        (root + 1) * (root + 1)
                    }
                    "seqF" => terms[2] + terms[3],
                    other => panic!("unexpected sequence {}", other),
                };
                assert_eq!(p.answer, next, "{}", p.display);
            }
        }
    }

    #[test]
    fn test_easy_sequences_are_arithmetic_or_geometric() {
        let mut rng = seeded_rng();
        for _ in 0..100 {
            let p = generate_sequences(Difficulty::Easy, &mut rng);
            assert!(p.symbol == "seq+" || p.symbol == "seq×");
        }
    }

    #[test]
    fn test_draft_fields_reach_the_problem() {
        let mut rng = seeded_rng();
        let fraction = generate_fractions(Difficulty::Medium, &mut rng);
        assert!(fraction.hint.as_deref().unwrap().starts_with("Same denominator"));
        assert!(fraction.explanation.is_some());
        assert_eq!(fraction.kind, ProblemKind::Category(Category::Fractions));

        let power = generate_powers(Difficulty::Easy, &mut rng);
        assert_eq!(power.symbol, "^");
        assert_eq!(power.operand1.pow(power.operand2 as u32), power.answer);
        assert!(power.hint.is_some());
        assert!(power.explanation.is_none());

        let root = generate_roots(Difficulty::Easy, &mut rng);
        assert_eq!(root.display, format!("√{}", root.operand1));
        assert!(root.hint.is_none());
        assert!(root.options.as_ref().unwrap().contains(&root.answer));
    }
}
