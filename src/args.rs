use clap::{Parser, Subcommand};

use crate::model::{
    constants::{
        MAX_GAME_SCORE, PARTICIPATION_CAP, PERFORMANCE_PORTION, PODIUM_PORTION, SECOND_PLACE_DENOMINATOR,
        THIRD_PLACE_DENOMINATOR, TIER1_SCORE_THRESHOLD, TIER2_PERCENTILE, TIER3_PERCENTILE
    },
    simulation::{RunParameters, SimulationConfig},
    structures::{
        game::validate_randomness,
        numeric_range::NumericRange,
        ranking_config::{ElitePolicy, RankingConfig},
        scoring_config::ScoringConfig
    },
    sweep::{SweepAxis, SweepConfig}
};

#[derive(Parser, Clone)]
#[command(
    display_name = "Metascore Simulator",
    long_about = "Simulates competitive games and evaluates how a metascore ranking rewards skill and participation"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Score awarded to a player who wins a game with the top score
    #[arg(long, env, default_value_t = MAX_GAME_SCORE)]
    pub max_score: f64,

    #[arg(long, env, default_value_t = PERFORMANCE_PORTION)]
    pub performance_portion: f64,

    #[arg(long, env, default_value_t = PODIUM_PORTION)]
    pub podium_portion: f64,

    #[arg(long, env, default_value_t = SECOND_PLACE_DENOMINATOR)]
    pub second_place_denominator: f64,

    #[arg(long, env, default_value_t = THIRD_PLACE_DENOMINATOR)]
    pub third_place_denominator: f64,

    /// Minimum total score to be ranked
    #[arg(long, env, default_value_t = TIER1_SCORE_THRESHOLD)]
    pub tier1_threshold: f64,

    #[arg(long, env, default_value_t = TIER2_PERCENTILE)]
    pub tier2_percentile: f64,

    #[arg(long, env, default_value_t = TIER3_PERCENTILE)]
    pub tier3_percentile: f64,

    /// Count overall podium finishers in the elite tier as well
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub elite_includes_podium: bool,

    /// Most games any single player signs up for
    #[arg(long, env, default_value_t = PARTICIPATION_CAP)]
    pub participation_cap: usize,

    #[arg(short, long, env, default_value_t = 0)]
    pub seed: u64,

    /// Print the full result as JSON instead of a summary
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Run a single simulation
    Simulate(SimulateArgs),
    /// Sweep every combination of games, players, engagement and randomness
    Sweep(SweepArgs)
}

#[derive(clap::Args, Clone)]
pub struct SimulateArgs {
    #[arg(short, long, default_value_t = 5)]
    pub games: usize,

    #[arg(short, long, default_value_t = 10_000)]
    pub players: usize,

    /// Game randomness range, as MIN:MAX:RESOLUTION within [0, 1]
    #[arg(long, default_value = "0.25:1:0.1", value_parser = parse_randomness)]
    pub randomness: NumericRange,

    /// Player engagement range, as MIN:MAX:RESOLUTION
    #[arg(long, default_value = "0.1:1:0.1", value_parser = parse_range)]
    pub engagement: NumericRange
}

#[derive(clap::Args, Clone)]
pub struct SweepArgs {
    #[arg(long, default_value = "3:50:1", value_parser = parse_range)]
    pub games: NumericRange,

    #[arg(long, default_value = "100:100000:1000", value_parser = parse_range)]
    pub players: NumericRange,

    #[arg(long, default_value = "0.1:1:0.1", value_parser = parse_range)]
    pub engagement: NumericRange,

    /// Within [0, 1]
    #[arg(long, default_value = "0:1:0.1", value_parser = parse_randomness)]
    pub randomness: NumericRange,

    /// Values taken along each swept range
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// Simulations per parameter set
    #[arg(long, default_value_t = 100)]
    pub sims: usize,

    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub parallel: bool,

    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_progress: bool,

    /// Drop raw scores from the collected results
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub drop_scores: bool
}

/// Parses `MIN:MAX:RESOLUTION`.
pub fn parse_range(s: &str) -> Result<NumericRange, String> {
    let parts = s
        .split(':')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("'{part}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [min, max, resolution] => NumericRange::new(*min, *max, *resolution).map_err(|e| e.to_string()),
        _ => Err(format!("expected MIN:MAX:RESOLUTION, got '{s}'"))
    }
}

/// Parses `MIN:MAX:RESOLUTION` for game randomness, which must lie within `[0, 1]`.
pub fn parse_randomness(s: &str) -> Result<NumericRange, String> {
    let range = parse_range(s)?;
    validate_randomness(&range).map_err(|e| e.to_string())?;

    Ok(range)
}

impl Args {
    pub fn simulation_config(&self) -> SimulationConfig {
        let drop_scores = matches!(&self.command, Command::Sweep(sweep) if sweep.drop_scores);

        SimulationConfig {
            scoring: ScoringConfig {
                max: self.max_score,
                performance_portion: self.performance_portion,
                podium_portion: self.podium_portion,
                second_place_denominator: self.second_place_denominator,
                third_place_denominator: self.third_place_denominator
            },
            ranking: RankingConfig {
                tier1_score_threshold: self.tier1_threshold,
                tier2_percentile: self.tier2_percentile,
                tier3_percentile: self.tier3_percentile,
                elite_policy: if self.elite_includes_podium {
                    ElitePolicy::IncludePodium
                } else {
                    ElitePolicy::ExcludePodium
                }
            },
            participation_cap: self.participation_cap,
            retain_scores: !drop_scores
        }
    }
}

impl SimulateArgs {
    pub fn run_parameters(&self) -> RunParameters {
        RunParameters {
            number_of_games: self.games,
            number_of_players: self.players,
            randomness_range: self.randomness,
            engagement_range: self.engagement
        }
    }
}

impl SweepArgs {
    pub fn sweep_config(&self, seed: u64) -> SweepConfig {
        let axis = |range: NumericRange| SweepAxis {
            range,
            steps: self.steps
        };

        SweepConfig {
            games: axis(self.games),
            players: axis(self.players),
            engagement: axis(self.engagement),
            randomness: axis(self.randomness),
            sims_per_parameter_set: self.sims,
            seed,
            parallel: self.parallel,
            show_progress: !self.no_progress
        }
    }
}
