// Problem generation
pub const DEFAULT_MULTIPLY_CAP: i64 = 12;
pub const EXPERT_MULTIPLY_CAP: i64 = 25;
pub const DIVIDE_CAP: i64 = 12;
pub const OPTION_COUNT: usize = 4;
pub const MIN_DISTRACTOR_OFFSET: i64 = 5;
pub const DISTRACTOR_SCALE: f64 = 0.3;
/// Retry cap for any "draw until acceptable" loop (batch dedup, whole percentages).
pub const MAX_GENERATION_ATTEMPTS: u32 = 1000;

// Session modes
pub const INITIAL_LIVES: u32 = 3;
pub const SPEEDRUN_PROBLEMS: u32 = 20;
pub const TIMEATTACK_DURATION_MS: u64 = 60_000;
pub const SURVIVAL_TIME_PER_PROBLEM_MS: u64 = 10_000;
pub const PUZZLE_DURATION_MS: u64 = 60_000;

// Scoring
pub const BASE_POINTS_PER_CORRECT: f64 = 100.0;
pub const ACCURACY_BONUS_POINTS: f64 = 50.0;
pub const SPEED_BONUS_POINTS: f64 = 100.0;
pub const SPEED_BONUS_MS_PER_PROBLEM: f64 = 10_000.0;

// History
pub const HISTORY_LIMIT: usize = 50;

// Setup screen
pub const MIN_PROBLEM_COUNT: u32 = 5;
pub const MAX_PROBLEM_COUNT: u32 = 50;
pub const DEFAULT_PROBLEM_COUNT: u32 = 20;

// XP and leveling
pub const XP_PER_LEVEL_UNIT: u64 = 100;
pub const XP_PER_CORRECT: u64 = 10;
pub const XP_PERFECT_BONUS: u64 = 50;
pub const XP_STREAK_THRESHOLD: u32 = 5;
pub const XP_STREAK_CAP: u32 = 25;
pub const XP_PER_STREAK: u64 = 5;
pub const XP_FIRST_GAME_OF_DAY: u64 = 25;
pub const XP_DAILY_CHALLENGE: u64 = 100;

// Save file
pub const SAVE_VERSION_MAGIC: u64 = 0x4D41_5448_4441_0001;
