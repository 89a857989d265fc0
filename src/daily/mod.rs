//! Daily challenge: one deterministic challenge per calendar day, identical
//! for every player.

pub mod challenge;
pub mod rng;

pub use challenge::{
    challenge_id, for_date, has_completed, streak_bonus, time_until_next, time_until_next_at,
    today, ChallengeTemplate, DailyChallenge, TimeUntilNext, CHALLENGE_TEMPLATES,
};
pub use rng::{date_seed, DateSeededRng};
