use itertools::{iproduct, repeat_n};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    model::{
        error::ConfigurationError,
        simulation::{RunParameters, SimulationResult, SimulationRunner},
        structures::{game::validate_randomness, numeric_range::NumericRange}
    },
    utils::progress_utils::progress_bar
};

/// One swept parameter: the range to cover and how many steps to cover it in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub range: NumericRange,
    pub steps: usize
}

impl SweepAxis {
    pub fn values(&self) -> Vec<f64> {
        self.range.steps(self.steps)
    }

    /// The per-run sampling range for a swept value: from the axis minimum up to `value`.
    fn range_up_to(&self, value: f64) -> NumericRange {
        NumericRange {
            min: self.range.min,
            // Step drift may overshoot the axis by a hair
            max: value.min(self.range.max),
            resolution: self.range.resolution
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub games: SweepAxis,
    pub players: SweepAxis,
    pub engagement: SweepAxis,
    pub randomness: SweepAxis,
    pub sims_per_parameter_set: usize,
    /// Run `i` of the sweep is seeded with `seed + i`
    pub seed: u64,
    pub parallel: bool,
    pub show_progress: bool
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for axis in [&self.games, &self.players, &self.engagement] {
            axis.range.validate()?;
        }
        validate_randomness(&self.randomness.range)?;

        if self.sims_per_parameter_set == 0 {
            return Err(ConfigurationError::ZeroRepetitions);
        }

        Ok(())
    }

    /// Number of simulations the sweep will run.
    pub fn run_count(&self) -> usize {
        [&self.games, &self.players, &self.engagement, &self.randomness]
            .iter()
            .map(|axis| axis.values().len())
            .product::<usize>()
            * self.sims_per_parameter_set
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub raw: Vec<SimulationResult>
}

/// Every combination of the swept values, games varying slowest and randomness fastest.
pub fn parameter_grid(config: &SweepConfig) -> Vec<RunParameters> {
    let games = config.games.values();
    let players = config.players.values();
    let engagement = config.engagement.values();
    let randomness = config.randomness.values();

    iproduct!(games, players, engagement, randomness)
        .map(|(games, players, engagement, randomness)| RunParameters {
            number_of_games: games.round() as usize,
            number_of_players: players.round() as usize,
            randomness_range: config.randomness.range_up_to(randomness),
            engagement_range: config.engagement.range_up_to(engagement)
        })
        .collect()
}

/// Runs `sims_per_parameter_set` simulations for every point of the parameter grid.
///
/// Each run owns a generator seeded from its position in the sweep, so the results are identical
/// whether or not the runs execute in parallel.
pub fn run_sweep(runner: &SimulationRunner, config: &SweepConfig) -> Result<SweepResult, ConfigurationError> {
    config.validate()?;

    let grid = parameter_grid(config);
    for parameters in &grid {
        parameters.validate()?;
    }
    let jobs: Vec<(u64, RunParameters)> = grid
        .iter()
        .flat_map(|parameters| repeat_n(*parameters, config.sims_per_parameter_set))
        .enumerate()
        .map(|(i, parameters)| (config.seed.wrapping_add(i as u64), parameters))
        .collect();

    info!(
        "Sweeping {} parameter sets x {} simulations ({} runs)",
        grid.len(),
        config.sims_per_parameter_set,
        jobs.len()
    );

    let bar = progress_bar(jobs.len() as u64, "Running simulations".to_string(), config.show_progress);
    let run_job = |(seed, parameters): &(u64, RunParameters)| {
        let mut rng = ChaCha8Rng::seed_from_u64(*seed);
        let result = runner.run(parameters, &mut rng);
        bar.inc(1);
        result
    };

    let raw: Vec<SimulationResult> = if config.parallel {
        jobs.par_iter().map(run_job).collect::<Result<_, _>>()?
    } else {
        jobs.iter().map(run_job).collect::<Result<_, _>>()?
    };
    bar.finish();

    info!("Sweep complete, {} results collected", raw.len());

    Ok(SweepResult { raw })
}
