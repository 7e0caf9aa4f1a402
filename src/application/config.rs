use crate::domain::{Algorithm, RuleError, RuleTable, Seed};
use thiserror::Error;

/// Smallest number of generations a run may print
pub const MIN_GENERATIONS: u32 = 1;
/// Largest number of generations a run may print
pub const MAX_GENERATIONS: u32 = 49;

/// Errors raised while validating run parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error("generation count {0} is outside 1..=49")]
    Generations(i64),
    #[error("initial value {0} must be 1 or 2")]
    Seed(i64),
}

/// Validate a generation count
pub fn parse_generations(value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value)
        .ok()
        .filter(|n| (MIN_GENERATIONS..=MAX_GENERATIONS).contains(n))
        .ok_or(ConfigError::Generations(value))
}

/// Validate the value of the initial active cell
pub fn parse_seed(value: i64) -> Result<Seed, ConfigError> {
    match value {
        1 => Ok(Seed::Low),
        2 => Ok(Seed::High),
        other => Err(ConfigError::Seed(other)),
    }
}

/// Validated parameters of one run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub table: RuleTable,
    /// Rows to produce, counting the seeded row
    pub generations: u32,
    pub seed: Seed,
    pub algorithm: Algorithm,
}

impl SimulationConfig {
    /// Validate raw values into a config using the serial sweep
    pub fn new(rule: i64, generations: i64, seed: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            table: RuleTable::decode(rule)?,
            generations: parse_generations(generations)?,
            seed: parse_seed(seed)?,
            algorithm: Algorithm::default(),
        })
    }

    /// Set the sweep implementation (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            table: RuleTable::default(),
            generations: MAX_GENERATIONS,
            seed: Seed::default(),
            algorithm: Algorithm::default(),
        }
    }
}
