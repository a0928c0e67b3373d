use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{
    constants::PARTICIPATION_CAP,
    entities::{generate_games, generate_players},
    error::ConfigurationError,
    game_tabulator::{tabulate_games, GameTabulation},
    match_assigner::assign_all,
    metascore_tabulator::{tabulate_metascores, MetascoreTabulation, TierCounts},
    participation::{tabulate_participation, ParticipationReport},
    performance::{tabulate_performance, PerformanceReport},
    score_aggregator::ScoreAggregator,
    score_generator::generate_scores,
    structures::{
        game::{validate_randomness, Game, GameId},
        numeric_range::NumericRange,
        player::{Player, PlayerId},
        ranking_config::RankingConfig,
        score_entry::ScoreEntry,
        scoring_config::ScoringConfig
    }
};

/// Everything about a run that stays fixed across a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub scoring: ScoringConfig,
    pub ranking: RankingConfig,
    /// Most games any single player signs up for
    pub participation_cap: usize,
    /// Keep every raw score in the result. Large sweeps may want to drop them.
    pub retain_scores: bool
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            scoring: ScoringConfig::default(),
            ranking: RankingConfig::default(),
            participation_cap: PARTICIPATION_CAP,
            retain_scores: true
        }
    }
}

/// The swept inputs of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    pub number_of_games: usize,
    pub number_of_players: usize,
    pub randomness_range: NumericRange,
    pub engagement_range: NumericRange
}

impl RunParameters {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_randomness(&self.randomness_range)?;
        self.engagement_range.validate()?;

        if GameId::try_from(self.number_of_games).is_err() {
            return Err(ConfigurationError::CountTooLarge {
                name: "number_of_games",
                value: self.number_of_games
            });
        }
        if PlayerId::try_from(self.number_of_players).is_err() {
            return Err(ConfigurationError::CountTooLarge {
                name: "number_of_players",
                value: self.number_of_players
            });
        }

        Ok(())
    }
}

/// Summary of a run, as collected by a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub number_of_games: usize,
    pub number_of_players: usize,
    pub randomness_range: NumericRange,
    pub engagement_range: NumericRange,
    pub participation: ParticipationReport,
    pub performance: PerformanceReport,
    pub tier_counts: TierCounts,
    pub scores: Vec<ScoreEntry>
}

/// Every intermediate record of a run.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub parameters: RunParameters,
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub scores: Vec<ScoreEntry>,
    pub game_tabulations: Vec<GameTabulation>,
    pub metascores: MetascoreTabulation,
    pub participation: ParticipationReport,
    pub performance: PerformanceReport
}

impl SimulationOutcome {
    pub fn into_result(self, retain_scores: bool) -> SimulationResult {
        SimulationResult {
            number_of_games: self.parameters.number_of_games,
            number_of_players: self.parameters.number_of_players,
            randomness_range: self.parameters.randomness_range,
            engagement_range: self.parameters.engagement_range,
            participation: self.participation,
            performance: self.performance,
            tier_counts: self.metascores.tiers.counts(),
            scores: if retain_scores { self.scores } else { Vec::new() }
        }
    }
}

pub struct SimulationRunner {
    aggregator: ScoreAggregator,
    config: SimulationConfig
}

impl SimulationRunner {
    /// Validates `config` up front; a runner that exists can always run.
    pub fn new(config: SimulationConfig) -> Result<SimulationRunner, ConfigurationError> {
        config.ranking.validate()?;

        Ok(SimulationRunner {
            aggregator: ScoreAggregator::new(config.scoring)?,
            config
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run(&self, parameters: &RunParameters, rng: &mut impl Rng) -> Result<SimulationResult, ConfigurationError> {
        Ok(self.simulate(parameters, rng)?.into_result(self.config.retain_scores))
    }

    /// # Simulation
    ///
    /// 1. Generate the players and games.
    /// 2. Every player picks the games they will play, then plays them once.
    /// 3. Tabulate each game's leaderboard, then the overall metascore leaderboard and tiers.
    /// 4. Report participation and performance for the podium and every tier.
    ///
    /// `parameters` are validated before anything is drawn from `rng`.
    pub fn simulate(
        &self,
        parameters: &RunParameters,
        rng: &mut impl Rng
    ) -> Result<SimulationOutcome, ConfigurationError> {
        parameters.validate()?;

        info!(
            "Simulating {} players playing {} games...",
            parameters.number_of_players, parameters.number_of_games
        );

        let mut players = generate_players(parameters.number_of_players, &parameters.engagement_range, rng);
        let games = generate_games(parameters.number_of_games, &parameters.randomness_range, rng);

        assign_all(&mut players, &games, self.config.participation_cap, rng);
        let scores = generate_scores(&players, &games, rng);
        debug!("Players played {} games in total", scores.len());

        let game_tabulations = tabulate_games(games.iter().map(|g| g.id), &scores);
        let metascores = tabulate_metascores(&players, &game_tabulations, &self.aggregator, &self.config.ranking);

        let counts = metascores.tiers.counts();
        debug!(
            "{} elite, {} strong, {} wooden, {} unranked, {} podium exempt",
            counts.elite, counts.strong, counts.wooden, counts.unranked, counts.podium_exempt
        );

        let participation = tabulate_participation(&players, games.len(), &metascores);
        let performance = tabulate_performance(&players, &metascores, &game_tabulations);
        debug!("Participation: {:?}", participation);

        Ok(SimulationOutcome {
            parameters: *parameters,
            players,
            games,
            scores,
            game_tabulations,
            metascores,
            participation,
            performance
        })
    }
}
