//! Algorithm enum for selecting how a generation is swept.
//!
//! Both sweeps produce identical worlds; the parallel one hands the ring
//! to rayon and exists for benchmarking.

use super::{RuleTable, World};

/// Available sweep implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Plain loop over the ring
    #[default]
    Serial,
    /// rayon parallel iterator over the ring
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and the viewer panel
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Refresh local sums with the selected sweep
    pub fn recompute_sums(self, world: &mut World) {
        match self {
            Algorithm::Serial => world.recompute_sums(),
            Algorithm::Parallel => world.recompute_sums_parallel(),
        }
    }

    /// Step the world with the selected sweep
    pub fn step(self, world: &mut World, table: &RuleTable) -> u32 {
        match self {
            Algorithm::Serial => world.step(table),
            Algorithm::Parallel => world.step_parallel(table),
        }
    }
}
