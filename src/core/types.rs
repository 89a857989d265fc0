//! Shared vocabulary: difficulty tiers, operations, categories and game modes.

use super::constants::{DEFAULT_MULTIPLY_CAP, EXPERT_MULTIPLY_CAP};
use crate::session::GameConfig;
use serde::{Deserialize, Serialize};

/// Difficulty tier. Each tier maps to a fixed operand range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    /// Inclusive operand range `(min, max)`.
    pub fn range(&self) -> (i64, i64) {
        match self {
            Self::Easy => (1, 10),
            Self::Medium => (1, 50),
            Self::Hard => (1, 100),
            Self::Expert => (10, 999),
        }
    }

    /// Operations `mixed` may pick from at this tier.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Self::Easy => &[Operation::Add, Operation::Subtract],
            _ => &[
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ],
        }
    }

    /// Score multiplier applied by the scoring engine.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
            Self::Expert => 3.0,
        }
    }

    /// Upper bound for multiplication operands.
    pub fn multiply_cap(&self) -> i64 {
        match self {
            Self::Expert => EXPERT_MULTIPLY_CAP,
            _ => DEFAULT_MULTIPLY_CAP,
        }
    }
}

/// Basic arithmetic operation, or `Mixed` to pick one per problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    #[default]
    Mixed,
}

impl Operation {
    /// The four concrete operations, in setup-screen order.
    pub const CONCRETE: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Mixed => "Mixed",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Mixed => "?",
        }
    }

    /// Apply the operation. `Mixed` and division by zero yield `None`.
    pub fn apply(&self, a: i64, b: i64) -> Option<i64> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => a.checked_sub(b),
            Self::Multiply => a.checked_mul(b),
            Self::Divide => a.checked_div(b),
            Self::Mixed => None,
        }
    }
}

/// Problem category. `Arithmetic` is the mixed four-operation generator; the
/// rest are the extended categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Arithmetic,
    Fractions,
    Percentages,
    Algebra,
    Powers,
    Roots,
    Sequences,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Arithmetic,
        Category::Fractions,
        Category::Percentages,
        Category::Algebra,
        Category::Powers,
        Category::Roots,
        Category::Sequences,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Arithmetic => "Arithmetic",
            Self::Fractions => "Fractions",
            Self::Percentages => "Percentages",
            Self::Algebra => "Algebra",
            Self::Powers => "Powers",
            Self::Roots => "Roots",
            Self::Sequences => "Sequences",
        }
    }
}

/// Player age band. Picks which categories are offered and the starting
/// difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Kids,
    Junior,
    Teen,
    Adult,
    Expert,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Kids,
        AgeGroup::Junior,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::Expert,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Kids => "Kids",
            Self::Junior => "Junior",
            Self::Teen => "Teen",
            Self::Adult => "Adult",
            Self::Expert => "Expert",
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        use Category::*;
        match self {
            Self::Kids => &[Arithmetic],
            Self::Junior => &[Arithmetic, Fractions, Percentages],
            Self::Teen => &[Arithmetic, Fractions, Percentages, Algebra, Powers, Roots],
            Self::Adult => &[Arithmetic, Percentages, Algebra, Powers, Roots, Sequences],
            Self::Expert => &Category::ALL,
        }
    }

    pub fn default_difficulty(&self) -> Difficulty {
        match self {
            Self::Kids => Difficulty::Easy,
            Self::Junior | Self::Teen => Difficulty::Medium,
            Self::Adult => Difficulty::Hard,
            Self::Expert => Difficulty::Expert,
        }
    }
}

/// Game mode. The first four are classic modes driven by the session state
/// machine; the last four are puzzle variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Practice,
    #[serde(rename = "speedrun")]
    SpeedRun,
    #[serde(rename = "timeattack")]
    TimeAttack,
    Survival,
    Compare,
    #[serde(rename = "truefalse")]
    TrueFalse,
    Missing,
    Sequence,
}

impl GameMode {
    pub const ALL: [GameMode; 8] = [
        GameMode::Practice,
        GameMode::SpeedRun,
        GameMode::TimeAttack,
        GameMode::Survival,
        GameMode::Compare,
        GameMode::TrueFalse,
        GameMode::Missing,
        GameMode::Sequence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Practice => "Practice",
            Self::SpeedRun => "Speed Run",
            Self::TimeAttack => "Time Attack",
            Self::Survival => "Survival",
            Self::Compare => "Compare",
            Self::TrueFalse => "True/False",
            Self::Missing => "Missing #",
            Self::Sequence => "Sequence",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Practice => "Learn at your pace",
            Self::SpeedRun => "20 problems, be fast!",
            Self::TimeAttack => "60 seconds challenge",
            Self::Survival => "3 lives, don't miss!",
            Self::Compare => "Which is bigger?",
            Self::TrueFalse => "Is this correct?",
            Self::Missing => "Find the missing number",
            Self::Sequence => "What comes next?",
        }
    }

    /// Puzzle variants skip the setup flow and run on their own timer.
    pub fn is_puzzle(&self) -> bool {
        matches!(
            self,
            Self::Compare | Self::TrueFalse | Self::Missing | Self::Sequence
        )
    }
}

/// Where a run draws its problems from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemSource {
    Operation(Operation),
    Category(Category),
    /// Operation pool and operand caps chosen on the setup screen.
    Configured(GameConfig),
    /// Puzzle runs generate their own problems.
    Puzzle(GameMode),
}

impl Default for ProblemSource {
    fn default() -> Self {
        ProblemSource::Operation(Operation::Mixed)
    }
}

impl From<Operation> for ProblemSource {
    fn from(op: Operation) -> Self {
        ProblemSource::Operation(op)
    }
}

impl From<Category> for ProblemSource {
    fn from(category: Category) -> Self {
        ProblemSource::Category(category)
    }
}

impl From<GameConfig> for ProblemSource {
    fn from(config: GameConfig) -> Self {
        ProblemSource::Configured(config)
    }
}

impl ProblemSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Operation(op) => op.name(),
            Self::Category(category) => category.name(),
            Self::Configured(_) => "Custom",
            Self::Puzzle(mode) => mode.name(),
        }
    }
}
