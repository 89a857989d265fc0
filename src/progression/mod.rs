//! Progression: XP, levels, day streaks and achievement unlocks.

pub mod levels;
pub mod logic;
pub mod types;
pub mod xp;

pub use levels::{
    format_xp, level_for_xp, level_progress, level_title, xp_for_level, xp_for_next_level,
};
pub use types::{ProgressionState, RunRewards};
pub use xp::{calculate_game_xp, RunXpInput, XpBreakdown, XpSource};
