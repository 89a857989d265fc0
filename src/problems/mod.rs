//! Problem generation.
//!
//! All generators take the RNG as a parameter. Gameplay passes a thread RNG;
//! the daily challenge passes its date-seeded generator so every player sees
//! the same problems.

pub mod arithmetic;
pub mod batch;
pub mod categories;
pub mod options;
pub mod types;

pub use arithmetic::{generate_arithmetic, generate_configured, generate_problem, pick_operation};
pub use batch::{generate_many, generate_unique};
pub use categories::generate_category;
pub use options::{generate_near_options, generate_options};
pub use types::{check_answer, format_time, Fingerprint, MathProblem, ProblemKind};
