//! Problem data structures.

use crate::core::{Category, Difficulty, Operation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What kind of problem this is: a basic operation or an extended category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Operation(Operation),
    Category(Category),
}

/// A generated problem. Immutable once created.
///
/// For extended categories the operands hold the two values that identify the
/// problem (numerators, percent and base, coefficient and constant, ...), and
/// `symbol` names the category's operator, so fingerprints stay meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathProblem {
    pub id: String,
    pub difficulty: Difficulty,
    pub kind: ProblemKind,
    pub operand1: i64,
    pub operand2: i64,
    pub symbol: String,
    pub answer: i64,
    pub display: String,
    /// Multiple-choice options: the answer plus three distractors, shuffled.
    #[serde(default)]
    pub options: Option<Vec<i64>>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// The `(operand1, symbol, operand2)` tuple used to detect duplicates in a batch.
pub type Fingerprint = (i64, String, i64);

impl MathProblem {
    pub fn fingerprint(&self) -> Fingerprint {
        (self.operand1, self.symbol.clone(), self.operand2)
    }

    /// The concrete operation, for basic arithmetic problems.
    pub fn operation(&self) -> Option<Operation> {
        match self.kind {
            ProblemKind::Operation(op) => Some(op),
            ProblemKind::Category(_) => None,
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.options.is_some()
    }
}

/// Exact integer comparison. Parsing user input is the caller's concern.
pub fn check_answer(problem: &MathProblem, value: i64) -> bool {
    problem.answer == value
}

/// Builds a problem id from the supplied RNG, so seeded runs reproduce ids.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .simple()
        .to_string()
}

/// Formats a duration as `m:ss.cc` (or `s.ccs` under a minute).
pub fn format_time(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;
    let hundredths = (ms % 1000) / 10;

    if minutes > 0 {
        format!("{}:{:02}.{:02}", minutes, remaining_seconds, hundredths)
    } else {
        format!("{}.{:02}s", remaining_seconds, hundredths)
    }
}
