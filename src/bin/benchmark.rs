//! Performance benchmark comparing serial and parallel sweeps

use std::time::Instant;

use anyhow::{Result, ensure};
use totalistic_ca::{
    Algorithm, RuleTable, Seed, World,
    application::random_rule,
    cli::init_logging,
};

fn benchmark(algorithm: Algorithm, table: &RuleTable, iterations: u32) -> (f64, World) {
    let mut world = World::new(Seed::High);
    algorithm.recompute_sums(&mut world);

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.step(&mut world, table);
        algorithm.recompute_sums(&mut world);
    }
    let per_gen_us = start.elapsed().as_secs_f64() * 1_000_000.0 / iterations as f64;
    (per_gen_us, world)
}

fn main() -> Result<()> {
    init_logging(0)?;
    println!("=== Totalistic Ring Benchmark ===\n");

    let rules = 8;
    let iterations = 10_000;

    println!("{:>8} {:>12} {:>12} {:>10}", "Rule", "Serial", "Parallel", "Ratio");
    println!("{:-<45}", "");

    for _ in 0..rules {
        let table = random_rule();
        let (serial_us, serial_world) = benchmark(Algorithm::Serial, &table, iterations);
        let (parallel_us, parallel_world) = benchmark(Algorithm::Parallel, &table, iterations);
        ensure!(
            serial_world == parallel_world,
            "rule #{} diverged between sweeps",
            table.code()
        );

        println!(
            "{:>8} {:>10.2}us {:>10.2}us {:>9.1}x",
            format!("#{}", table.code()),
            serial_us,
            parallel_us,
            parallel_us / serial_us
        );
    }

    Ok(())
}
