mod camera;
mod config;
mod simulation;

pub use camera::Camera;
pub use config::{
    ConfigError, SimulationConfig, MAX_GENERATIONS, MIN_GENERATIONS, parse_generations, parse_seed,
};
pub use simulation::{Generation, Simulation, random_rule};
