mod cell;
mod rules;
mod world;
mod algorithm;

pub use cell::{Cell, State};
pub use rules::{RuleTable, RuleError, MAX_RULE, TABLE_LEN, default_rule};
pub use world::{World, Seed, WORLD_SIZE, left, right};
pub use algorithm::Algorithm;
