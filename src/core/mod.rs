//! Shared vocabulary, constants and scoring.

pub mod constants;
pub mod scoring;
pub mod types;

pub use constants::*;
pub use scoring::{accuracy_percent, calculate_score, time_bonus_factor};
pub use types::{AgeGroup, Category, Difficulty, GameMode, Operation, ProblemSource};
