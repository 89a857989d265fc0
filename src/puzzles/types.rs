//! Puzzle problem shapes.

use crate::core::{GameMode, Operation};
use serde::{Deserialize, Serialize};

/// `a op b` with a small operand range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression {
    pub a: i64,
    pub op: Operation,
    pub b: i64,
}

impl Expression {
    pub fn value(&self) -> i64 {
        self.op.apply(self.a, self.b).unwrap_or_default()
    }

    pub fn display(&self) -> String {
        format!("{} {} {}", self.a, self.op.symbol(), self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Equal,
}

/// Which slot of `a op b = r` is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    First,
    Second,
    Result,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::First, Slot::Second, Slot::Result];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequencePattern {
    Add,
    Subtract,
    Multiply,
    Power,
}

impl SequencePattern {
    pub const ALL: [SequencePattern; 4] = [
        SequencePattern::Add,
        SequencePattern::Multiply,
        SequencePattern::Subtract,
        SequencePattern::Power,
    ];
}

/// A player's answer to a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleChoice {
    Side(Side),
    Truth(bool),
    Number(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleKind {
    Compare {
        left: Expression,
        right: Expression,
    },
    TrueFalse {
        expression: Expression,
        shown: i64,
    },
    Missing {
        expression: Expression,
        hidden: Slot,
    },
    Sequence {
        pattern: SequencePattern,
        terms: Vec<i64>,
    },
}

/// One puzzle. `options` lists every choice offered, answer included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleProblem {
    pub id: String,
    pub kind: PuzzleKind,
    pub display: String,
    pub answer: PuzzleChoice,
    pub options: Vec<PuzzleChoice>,
}

impl PuzzleProblem {
    pub fn mode(&self) -> GameMode {
        match self.kind {
            PuzzleKind::Compare { .. } => GameMode::Compare,
            PuzzleKind::TrueFalse { .. } => GameMode::TrueFalse,
            PuzzleKind::Missing { .. } => GameMode::Missing,
            PuzzleKind::Sequence { .. } => GameMode::Sequence,
        }
    }

    pub fn is_correct(&self, choice: PuzzleChoice) -> bool {
        self.answer == choice
    }
}

/// Feedback for one puzzle answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleOutcome {
    pub correct: bool,
    pub answer: PuzzleChoice,
    pub points: u32,
}
