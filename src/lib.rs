// Domain layer - ring, rule table, stepping
pub mod domain;

// Application layer - run configuration and orchestration
pub mod application;

// Infrastructure layer - prompts, rendering, command line
pub mod rendering;
pub mod input;
pub mod cli;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, RuleError, RuleTable, Seed, State, World, WORLD_SIZE};
pub use application::{Camera, ConfigError, Generation, Simulation, SimulationConfig};
