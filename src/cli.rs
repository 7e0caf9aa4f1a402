//! Command-line options shared by the binaries.

use clap::Args;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::application::{SimulationConfig, parse_generations, parse_seed, random_rule};
use crate::domain::{Algorithm, RuleTable};

/// Run parameters. Anything left out is asked for (console) or defaulted (viewer).
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Rule code, 0 to 2186
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "random_rule")]
    pub rule: Option<i64>,

    /// Pick a uniformly random rule code
    #[arg(long)]
    pub random_rule: bool,

    /// Number of generations to print, 1 to 49, counting the seeded row
    #[arg(short, long, allow_negative_numbers = true)]
    pub generations: Option<i64>,

    /// Value of the initial active cell, 1 or 2
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Sweep implementation
    #[arg(long, value_enum, default_value_t = Algorithm::Serial)]
    pub algorithm: Algorithm,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RunArgs {
    /// Rule table from `--rule` or `--random-rule`, if either was given
    pub fn rule_table(&self) -> Result<Option<RuleTable>, crate::domain::RuleError> {
        if self.random_rule {
            return Ok(Some(random_rule()));
        }
        self.rule.map(RuleTable::decode).transpose()
    }

    /// Fill every missing value from the defaults
    pub fn to_config_or_default(&self) -> anyhow::Result<SimulationConfig> {
        let defaults = SimulationConfig::default();
        Ok(SimulationConfig {
            table: self.rule_table()?.unwrap_or(defaults.table),
            generations: self
                .generations
                .map(parse_generations)
                .transpose()?
                .unwrap_or(defaults.generations),
            seed: self.seed.map(parse_seed).transpose()?.unwrap_or(defaults.seed),
            algorithm: self.algorithm,
        })
    }
}

/// Map `-v` occurrences to a log level; warnings always show
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(level_for(verbose))
        .without_timestamps()
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Seed;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        run: RunArgs,
    }

    fn parse(args: &[&str]) -> RunArgs {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
            .run
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["--rule", "777", "-g", "12", "-s", "2", "--algorithm", "parallel", "-vv"]);
        assert_eq!(args.rule, Some(777));
        assert_eq!(args.generations, Some(12));
        assert_eq!(args.seed, Some(2));
        assert_eq!(args.algorithm, Algorithm::Parallel);
        assert_eq!(level_for(args.verbose), LevelFilter::Debug);
    }

    #[test]
    fn test_missing_values_default() {
        let config = parse(&[]).to_config_or_default().unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_partial_values() {
        let config = parse(&["-s", "2", "-g", "3"]).to_config_or_default().unwrap();
        assert_eq!(config.seed, Seed::High);
        assert_eq!(config.generations, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse(&["--rule", "-5"]).to_config_or_default().is_err());
        assert!(parse(&["-g", "50"]).to_config_or_default().is_err());
        assert!(parse(&["-s", "0"]).to_config_or_default().is_err());
    }

    #[test]
    fn test_random_rule_conflicts_with_rule() {
        let result = TestCli::try_parse_from(["test", "--rule", "1", "--random-rule"]);
        assert!(result.is_err());
        assert!(parse(&["--random-rule"]).rule_table().unwrap().is_some());
    }
}
