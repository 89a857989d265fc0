//! MathDash - Arithmetic Practice Game Library
//!
//! Problem generation, scoring, the run state machine for every game mode,
//! daily challenges, and XP/achievement progression. Rendering and input are
//! left to the embedding application.

pub mod achievements;
pub mod app;
pub mod core;
pub mod daily;
pub mod error;
pub mod problems;
pub mod progression;
pub mod puzzles;
pub mod save_manager;
pub mod session;
pub mod settings;

pub use app::AppContext;
pub use crate::core::{AgeGroup, Category, Difficulty, GameMode, Operation, ProblemSource};
pub use error::{ConfigError, SaveError};
pub use problems::MathProblem;
pub use progression::{ProgressionState, RunRewards};
pub use save_manager::{MemoryStore, ProgressStore, SaveManager};
pub use session::{GameConfig, GameResult, History, SessionStateMachine};
pub use settings::Settings;
