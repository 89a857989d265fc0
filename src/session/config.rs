//! Setup-screen run configuration.

use crate::core::{
    Difficulty, Operation, DEFAULT_PROBLEM_COUNT, MAX_PROBLEM_COUNT, MIN_PROBLEM_COUNT,
};
use crate::error::ConfigError;
use crate::problems::{generate_configured, generate_unique, MathProblem};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-operation setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationConfig {
    pub enabled: bool,
    pub max_number: u32,
}

/// User-chosen run parameters. Consumed once when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub problem_count: u32,
    pub add: OperationConfig,
    pub subtract: OperationConfig,
    pub multiply: OperationConfig,
    pub divide: OperationConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            problem_count: DEFAULT_PROBLEM_COUNT,
            add: OperationConfig {
                enabled: true,
                max_number: 100,
            },
            subtract: OperationConfig {
                enabled: true,
                max_number: 100,
            },
            multiply: OperationConfig {
                enabled: true,
                max_number: 12,
            },
            divide: OperationConfig {
                enabled: false,
                max_number: 12,
            },
        }
    }
}

impl GameConfig {
    /// Upper limit for an operation's `max_number` slider.
    pub fn max_limit(op: Operation) -> u32 {
        match op {
            Operation::Multiply | Operation::Divide => 20,
            _ => 999,
        }
    }

    /// Setting for `op`. `Mixed` reads the addition slot.
    pub fn operation(&self, op: Operation) -> OperationConfig {
        match op {
            Operation::Subtract => self.subtract,
            Operation::Multiply => self.multiply,
            Operation::Divide => self.divide,
            Operation::Add | Operation::Mixed => self.add,
        }
    }

    /// Writable slot for a concrete operation. `Mixed` has none.
    fn operation_mut(&mut self, op: Operation) -> Option<&mut OperationConfig> {
        match op {
            Operation::Add => Some(&mut self.add),
            Operation::Subtract => Some(&mut self.subtract),
            Operation::Multiply => Some(&mut self.multiply),
            Operation::Divide => Some(&mut self.divide),
            Operation::Mixed => None,
        }
    }

    /// Enabled operations in setup-screen order.
    pub fn enabled_operations(&self) -> Vec<Operation> {
        Operation::CONCRETE
            .into_iter()
            .filter(|&op| self.operation(op).enabled)
            .collect()
    }

    /// Flip an operation on or off. Refuses to disable the last enabled
    /// operation, and refuses `Mixed`; returns whether the toggle happened.
    pub fn toggle_operation(&mut self, op: Operation) -> bool {
        let last_enabled = self.enabled_operations().len() <= 1;
        let Some(setting) = self.operation_mut(op) else {
            return false;
        };
        if setting.enabled && last_enabled {
            return false;
        }
        setting.enabled = !setting.enabled;
        true
    }

    /// Set an operation's operand bound, clamped to `1..=max_limit`.
    /// Ignored for `Mixed`.
    pub fn set_max_number(&mut self, op: Operation, value: u32) {
        let limit = Self::max_limit(op);
        if let Some(setting) = self.operation_mut(op) {
            setting.max_number = value.clamp(1, limit);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PROBLEM_COUNT..=MAX_PROBLEM_COUNT).contains(&self.problem_count) {
            return Err(ConfigError::ProblemCountOutOfRange {
                count: self.problem_count,
                min: MIN_PROBLEM_COUNT,
                max: MAX_PROBLEM_COUNT,
            });
        }
        if self.enabled_operations().is_empty() {
            return Err(ConfigError::NoOperationEnabled);
        }
        for op in Operation::CONCRETE {
            let setting = self.operation(op);
            let limit = Self::max_limit(op);
            if setting.max_number == 0 || setting.max_number > limit {
                return Err(ConfigError::MaxNumberOutOfRange {
                    operation: op.name(),
                    value: setting.max_number,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// A duplicate-free batch of `problem_count` problems drawn from this config.
    pub fn problem_set<R: Rng>(&self, difficulty: Difficulty, rng: &mut R) -> Vec<MathProblem> {
        generate_unique(self.problem_count as usize, rng, |rng| {
            generate_configured(difficulty, self, rng)
        })
    }
}
