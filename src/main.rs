use std::process;

use clap::Parser;
use metascore_sim::{
    args::{Args, Command},
    model::{
        error::ConfigurationError,
        simulation::{SimulationResult, SimulationRunner},
        sweep::run_sweep
    }
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let runner = SimulationRunner::new(args.simulation_config()).unwrap_or_else(|e| exit_with(e));

    match &args.command {
        Command::Simulate(simulate) => {
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let result = runner
                .run(&simulate.run_parameters(), &mut rng)
                .unwrap_or_else(|e| exit_with(e));

            if args.json {
                print_json(&result);
            } else {
                print_summary(&result);
            }
        }
        Command::Sweep(sweep) => {
            let config = sweep.sweep_config(args.seed);
            info!("Running {} simulations", config.run_count());

            let result = run_sweep(&runner, &config).unwrap_or_else(|e| exit_with(e));

            if args.json {
                print_json(&result);
            } else {
                for run in &result.raw {
                    print_summary(run);
                }
            }
        }
    }
}

fn exit_with(e: ConfigurationError) -> ! {
    error!("Invalid configuration: {e}");
    process::exit(1);
}

fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize results: {e}");
            process::exit(1);
        }
    }
}

fn print_summary(result: &SimulationResult) {
    let rate = |value: Option<f64>| value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.3}"));
    let counts = &result.tier_counts;

    println!(
        "games={} players={} randomness<={} engagement<={}",
        result.number_of_games, result.number_of_players, result.randomness_range.max, result.engagement_range.max
    );
    println!(
        "  tiers: elite={} strong={} wooden={} unranked={} podium_exempt={}",
        counts.elite, counts.strong, counts.wooden, counts.unranked, counts.podium_exempt
    );
    println!(
        "  participation: total={} podium={} elite={} strong={} wooden={} unranked={}",
        rate(result.participation.total),
        rate(result.participation.podium),
        rate(result.participation.elite),
        rate(result.participation.strong),
        rate(result.participation.wooden),
        rate(result.participation.unranked)
    );
}
