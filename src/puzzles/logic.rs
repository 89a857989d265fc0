//! Puzzle generation and the timed puzzle run.

use super::types::{
    Expression, PuzzleChoice, PuzzleKind, PuzzleOutcome, PuzzleProblem, SequencePattern, Side,
    Slot,
};
use crate::core::{accuracy_percent, Difficulty, GameMode, Operation, ProblemSource, PUZZLE_DURATION_MS};
use crate::problems::generate_near_options;
use crate::problems::types::generate_id;
use crate::session::GameResult;
use chrono::{SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

const PUZZLE_OPERATIONS: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];
const PUZZLE_OPERAND_MAX: i64 = 12;
const TRUEFALSE_MAX_OFFSET: i64 = 5;
const MISSING_SPREAD: i64 = 5;
const SEQUENCE_SPREAD: i64 = 10;

/// Random expression with operands in 1..=12. Subtraction keeps the larger
/// operand first.
fn random_expression<R: Rng>(rng: &mut R) -> Expression {
    let op = PUZZLE_OPERATIONS
        .choose(rng)
        .copied()
        .unwrap_or(Operation::Add);
    let mut a = rng.gen_range(1..=PUZZLE_OPERAND_MAX);
    let mut b = rng.gen_range(1..=PUZZLE_OPERAND_MAX);
    if op == Operation::Subtract && b > a {
        std::mem::swap(&mut a, &mut b);
    }
    Expression { a, op, b }
}

fn numbers(values: Vec<i64>) -> Vec<PuzzleChoice> {
    values.into_iter().map(PuzzleChoice::Number).collect()
}

/// "Which is bigger?"
pub fn generate_compare<R: Rng>(rng: &mut R) -> PuzzleProblem {
    let left = random_expression(rng);
    let right = random_expression(rng);
    let side = match left.value().cmp(&right.value()) {
        std::cmp::Ordering::Greater => Side::Left,
        std::cmp::Ordering::Less => Side::Right,
        std::cmp::Ordering::Equal => Side::Equal,
    };

    PuzzleProblem {
        id: generate_id(rng),
        display: format!("{}  vs  {}", left.display(), right.display()),
        kind: PuzzleKind::Compare { left, right },
        answer: PuzzleChoice::Side(side),
        options: [Side::Left, Side::Equal, Side::Right]
            .into_iter()
            .map(PuzzleChoice::Side)
            .collect(),
    }
}

/// "Is this correct?" The shown result is right half the time, otherwise off
/// by 1..=5 (never negative).
pub fn generate_true_false<R: Rng>(rng: &mut R) -> PuzzleProblem {
    let expression = random_expression(rng);
    let value = expression.value();
    let truthful = rng.gen_bool(0.5);

    let shown = if truthful {
        value
    } else {
        let offset = rng.gen_range(1..=TRUEFALSE_MAX_OFFSET);
        if rng.gen_bool(0.5) || value < offset {
            value + offset
        } else {
            value - offset
        }
    };

    PuzzleProblem {
        id: generate_id(rng),
        display: format!("{} = {}", expression.display(), shown),
        kind: PuzzleKind::TrueFalse { expression, shown },
        answer: PuzzleChoice::Truth(truthful),
        options: vec![PuzzleChoice::Truth(true), PuzzleChoice::Truth(false)],
    }
}

/// "Find the missing number" in `a op b = r`.
pub fn generate_missing<R: Rng>(rng: &mut R) -> PuzzleProblem {
    let expression = random_expression(rng);
    let hidden = Slot::ALL.choose(rng).copied().unwrap_or(Slot::Result);
    let Expression { a, op, b } = expression;
    let result = expression.value();
    let symbol = op.symbol();

    let (answer, display) = match hidden {
        Slot::First => (a, format!("? {} {} = {}", symbol, b, result)),
        Slot::Second => (b, format!("{} {} ? = {}", a, symbol, result)),
        Slot::Result => (result, format!("{} {} {} = ?", a, symbol, b)),
    };
    let options = generate_near_options(answer, MISSING_SPREAD, rng);

    PuzzleProblem {
        id: generate_id(rng),
        kind: PuzzleKind::Missing { expression, hidden },
        display,
        answer: PuzzleChoice::Number(answer),
        options: numbers(options),
    }
}

/// Four terms of a progression; the fifth is the answer.
pub fn sequence_terms<R: Rng>(pattern: SequencePattern, rng: &mut R) -> ([i64; 4], i64) {
    match pattern {
        SequencePattern::Add => {
            let step = rng.gen_range(2..=8);
            let start = rng.gen_range(1..=10);
            let term = |n: i64| start + step * n;
            ([term(0), term(1), term(2), term(3)], term(4))
        }
        SequencePattern::Subtract => {
            let step = rng.gen_range(2..=6);
            let start = rng.gen_range(30..=49);
            let term = |n: i64| start - step * n;
            ([term(0), term(1), term(2), term(3)], term(4))
        }
        SequencePattern::Multiply => {
            let ratio: i64 = rng.gen_range(2..=3);
            let start = rng.gen_range(2..=4);
            let term = |n: u32| start * ratio.pow(n);
            ([term(0), term(1), term(2), term(3)], term(4))
        }
        SequencePattern::Power => {
            let base: i64 = rng.gen_range(2..=4);
            ([base, base.pow(2), base.pow(3), base.pow(4)], base.pow(5))
        }
    }
}

/// "What comes next?"
pub fn generate_sequence<R: Rng>(rng: &mut R) -> PuzzleProblem {
    let pattern = SequencePattern::ALL
        .choose(rng)
        .copied()
        .unwrap_or(SequencePattern::Add);
    let (terms, answer) = sequence_terms(pattern, rng);
    let options = generate_near_options(answer, SEQUENCE_SPREAD, rng);
    let shown: Vec<String> = terms.iter().map(i64::to_string).collect();

    PuzzleProblem {
        id: generate_id(rng),
        display: format!("{}, ?", shown.join(", ")),
        kind: PuzzleKind::Sequence {
            pattern,
            terms: terms.to_vec(),
        },
        answer: PuzzleChoice::Number(answer),
        options: numbers(options),
    }
}

/// Generates a puzzle for a puzzle mode. Classic modes get a compare puzzle.
pub fn generate_puzzle<R: Rng>(mode: GameMode, rng: &mut R) -> PuzzleProblem {
    match mode {
        GameMode::TrueFalse => generate_true_false(rng),
        GameMode::Missing => generate_missing(rng),
        GameMode::Sequence => generate_sequence(rng),
        _ => generate_compare(rng),
    }
}

/// Points for a correct answer given the streak before it.
pub fn points_for(mode: GameMode, streak: u32) -> u32 {
    match mode {
        GameMode::Sequence => 15 + 3 * streak,
        _ => 10 + 2 * streak,
    }
}

// =========================================================================
// Timed run
// =========================================================================

/// A 60-second puzzle run with unlimited problems and streak scoring.
#[derive(Debug, Clone)]
pub struct PuzzleRun {
    pub mode: GameMode,
    pub problem: PuzzleProblem,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub elapsed_ms: u64,
    pub finished: bool,
}

impl PuzzleRun {
    pub fn new<R: Rng>(mode: GameMode, rng: &mut R) -> Self {
        let problem = generate_puzzle(mode, rng);
        Self {
            mode: problem.mode(),
            problem,
            score: 0,
            streak: 0,
            best_streak: 0,
            correct_count: 0,
            wrong_count: 0,
            elapsed_ms: 0,
            finished: false,
        }
    }

    pub fn time_left_ms(&self) -> u64 {
        PUZZLE_DURATION_MS.saturating_sub(self.elapsed_ms)
    }

    pub fn problems_answered(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    /// Scores the answer and serves the next puzzle. Ignored once finished.
    pub fn answer<R: Rng>(&mut self, choice: PuzzleChoice, rng: &mut R) -> Option<PuzzleOutcome> {
        if self.finished {
            return None;
        }
        let correct = self.problem.is_correct(choice);
        let answer = self.problem.answer;
        let points = if correct {
            let points = points_for(self.mode, self.streak);
            self.score += points;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            self.correct_count += 1;
            points
        } else {
            self.streak = 0;
            self.wrong_count += 1;
            0
        };

        self.problem = generate_puzzle(self.mode, rng);
        Some(PuzzleOutcome {
            correct,
            answer,
            points,
        })
    }

    /// Advances the clock. Returns the run's result exactly once, when time
    /// runs out.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<GameResult> {
        if self.finished {
            return None;
        }
        self.elapsed_ms = self.elapsed_ms.max(elapsed_ms);
        if self.elapsed_ms < PUZZLE_DURATION_MS {
            return None;
        }
        self.finished = true;

        let total = self.problems_answered();
        let result = GameResult {
            id: uuid::Uuid::new_v4().to_string(),
            mode: self.mode,
            difficulty: Difficulty::Easy,
            source: ProblemSource::Puzzle(self.mode),
            score: self.score,
            correct_count: self.correct_count,
            total_count: total,
            accuracy: accuracy_percent(self.correct_count, total),
            time_ms: PUZZLE_DURATION_MS,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            best_streak: self.best_streak,
            daily_challenge_id: None,
        };
        tracing::info!(
            mode = result.mode.name(),
            score = result.score,
            "puzzle run finished"
        );
        Some(result)
    }
}
