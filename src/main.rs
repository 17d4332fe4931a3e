use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};

use life_bench::app::{Bench, ScenarioDescriptor, Seed, Strategy};
use life_bench::config::{
    AVERAGE_WINDOW, DEFAULT_FRAMES, GRID_HEIGHT, GRID_WIDTH, RANDOM_DENSITY,
};

/// Time Game of Life generations under different render strategies
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,

    /// Frames to run per scenario
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: usize,

    /// Samples kept by each moving average
    #[arg(long, default_value_t = AVERAGE_WINDOW)]
    window: usize,

    /// Scenario to run (step, text, pixels); repeat for several, default all
    #[arg(long = "scenario")]
    scenarios: Vec<Strategy>,

    /// Seed a random soup from SEED instead of the canonical pattern
    #[arg(long, value_name = "SEED")]
    random: Option<u64>,

    /// Print each scenario's final generation as text
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let strategies = if args.scenarios.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.scenarios.clone()
    };
    let seed = match args.random {
        Some(seed) => Seed::Random {
            density: RANDOM_DENSITY,
            seed,
        },
        None => Seed::Canonical,
    };

    let descriptors: Vec<_> = strategies
        .iter()
        .map(|&strategy| ScenarioDescriptor {
            name: strategy.name().to_string(),
            strategy,
            width: args.width,
            height: args.height,
            seed,
            window: args.window,
        })
        .collect();

    log::info!(
        "Grid size: {}x{}, {} frames per scenario, window {}",
        args.width,
        args.height,
        args.frames,
        args.window
    );

    let mut bench = Bench::new(&descriptors)?;
    let reports = bench.run_all(args.frames);

    println!(
        "{:10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "scenario", "gens", "alive", "avg ms", "min ms", "max ms"
    );
    for report in &reports {
        match report.timing {
            Some(t) => println!(
                "{:10} {:>10} {:>10} {:>10.3} {:>10.3} {:>10.3}",
                report.name, report.generation, report.population, t.average, t.min, t.max
            ),
            None => println!(
                "{:10} {:>10} {:>10} {:>10} {:>10} {:>10}",
                report.name, report.generation, report.population, "-", "-", "-"
            ),
        }
    }

    if args.print {
        for scenario in bench.scenarios() {
            println!("\n{}:\n{}", scenario.name(), scenario.grid());
        }
    }

    Ok(())
}
