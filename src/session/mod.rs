//! Game runs: setup configuration, the run state machine and run history.

pub mod config;
pub mod history;
pub mod logic;
pub mod types;

pub use config::{GameConfig, OperationConfig};
pub use history::{
    DayActivity, History, HistoryStats, ModeAccuracy, ModeStats, PeriodStats, TimeRange,
};
pub use logic::{generate_for_source, SessionStateMachine};
pub use types::{AnswerOutcome, DailyRun, GameResult, SessionPhase, SessionState, TickEvent};
