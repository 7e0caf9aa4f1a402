use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use totalistic_ca::{
    Simulation, SimulationConfig, WORLD_SIZE,
    application::{parse_generations, parse_seed},
    cli::{RunArgs, init_logging},
    input::{prompt_generations, prompt_rule, prompt_seed},
    rendering,
};

/// Three-state totalistic cellular automaton on a ring of 65 cells.
#[derive(Parser)]
#[command(name = "totalistic", version, about)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.run.verbose)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Welcome to the Totalistic Cellular Automaton!")?;

    let table = match cli.run.rule_table()? {
        Some(table) => table,
        None => prompt_rule(&mut input, &mut out).context("failed to read rule code")?,
    };
    writeln!(out)?;
    writeln!(out, "{}", rendering::rule_summary(&table))?;
    writeln!(out)?;
    writeln!(out, "{}", rendering::evolution_diagram(&table))?;
    writeln!(out)?;

    let generations = match cli.run.generations {
        Some(value) => parse_generations(value)?,
        None => prompt_generations(&mut input, &mut out)
            .context("failed to read generation count")?,
    };
    let seed = match cli.run.seed {
        Some(value) => parse_seed(value)?,
        None => prompt_seed(&mut input, &mut out).context("failed to read initial value")?,
    };

    let config = SimulationConfig { table, generations, seed, algorithm: cli.run.algorithm };

    writeln!(out)?;
    writeln!(out, "Initializing world & evolving...")?;

    let mut simulation = Simulation::new(&config);
    for generation in simulation.run_to_end() {
        writeln!(out, "{}", rendering::generation_row(generation))?;
    }
    writeln!(out, "{}", rendering::separator(WORLD_SIZE))?;

    let (tens, ones) = rendering::count_rows(&simulation.world);
    writeln!(out, "{tens}")?;
    writeln!(out, "{ones}")?;
    out.flush()?;

    Ok(())
}
