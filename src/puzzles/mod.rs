//! Puzzle variants: compare, true/false, missing number and sequence.
//!
//! Each runs for a fixed 60 seconds with streak-based scoring.

pub mod logic;
pub mod types;

pub use logic::{
    generate_compare, generate_missing, generate_puzzle, generate_sequence, generate_true_false,
    points_for, sequence_terms, PuzzleRun,
};
pub use types::{
    Expression, PuzzleChoice, PuzzleKind, PuzzleOutcome, PuzzleProblem, SequencePattern, Side,
    Slot,
};
