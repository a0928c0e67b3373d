use crate::model::{error::ConfigurationError, structures::scoring_config::ScoringConfig};

/// Turns a player's result in one game into that game's contribution to their metascore.
///
/// Construction validates the [`ScoringConfig`], so scoring itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAggregator {
    config: ScoringConfig
}

impl ScoreAggregator {
    pub fn new(config: ScoringConfig) -> Result<ScoreAggregator, ConfigurationError> {
        config.validate()?;

        Ok(ScoreAggregator { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Bonus awarded for a 1-based placement. Only the podium earns one.
    pub fn podium_bonus(&self, rank: usize) -> f64 {
        let podium_share = self.config.max * self.config.podium_portion;

        match rank {
            1 => podium_share,
            2 => podium_share / self.config.second_place_denominator,
            3 => podium_share / self.config.third_place_denominator,
            _ => 0.0
        }
    }

    /// `floor(max * performance_portion * performance + podium_bonus(rank))`.
    ///
    /// A player without a performance or a placement did not play the game and earns nothing.
    pub fn contribution(&self, normalized_performance: Option<f64>, rank: Option<usize>) -> f64 {
        match (normalized_performance, rank) {
            (Some(performance), Some(rank)) => {
                let performance_score = self.config.max * self.config.performance_portion * performance;

                (performance_score + self.podium_bonus(rank)).floor()
            }
            _ => 0.0
        }
    }
}

/// One-shot form of [`ScoreAggregator::contribution`] that validates `config` on every call.
pub fn calculate_game_score_component(
    normalized_performance: Option<f64>,
    rank: Option<usize>,
    config: &ScoringConfig
) -> Result<f64, ConfigurationError> {
    let aggregator = ScoreAggregator::new(*config)?;

    Ok(aggregator.contribution(normalized_performance, rank))
}

#[cfg(test)]
mod tests {
    use crate::model::{
        error::ConfigurationError,
        score_aggregator::{calculate_game_score_component, ScoreAggregator},
        structures::scoring_config::ScoringConfig
    };

    fn config() -> ScoringConfig {
        ScoringConfig {
            max: 1000.0,
            performance_portion: 0.4,
            podium_portion: 0.6,
            second_place_denominator: 2.0,
            third_place_denominator: 4.0
        }
    }

    #[test]
    fn test_winner_earns_max() {
        let aggregator = ScoreAggregator::new(config()).unwrap();

        assert_eq!(aggregator.contribution(Some(1.0), Some(1)), 1000.0);
    }

    #[test]
    fn test_second_and_third_place() {
        let aggregator = ScoreAggregator::new(config()).unwrap();

        // 400 * 0.8 + 600 / 2
        assert_eq!(aggregator.contribution(Some(0.8), Some(2)), 620.0);
        // 400 * 0.5 + 600 / 4
        assert_eq!(aggregator.contribution(Some(0.5), Some(3)), 350.0);
    }

    #[test]
    fn test_off_podium_is_floored() {
        let aggregator = ScoreAggregator::new(config()).unwrap();

        // 400 * 0.33333 = 133.33
        assert_eq!(aggregator.contribution(Some(1.0 / 3.0), Some(4)), 133.0);
        assert_eq!(aggregator.contribution(Some(0.0), Some(50)), 0.0);
    }

    #[test]
    fn test_missing_inputs_earn_nothing() {
        let aggregator = ScoreAggregator::new(config()).unwrap();

        assert_eq!(aggregator.contribution(None, Some(1)), 0.0);
        assert_eq!(aggregator.contribution(Some(1.0), None), 0.0);
        assert_eq!(aggregator.contribution(None, None), 0.0);
    }

    #[test]
    fn test_contribution_bounded_and_integral() {
        let aggregator = ScoreAggregator::new(ScoringConfig::default()).unwrap();
        let max = aggregator.config().max;

        for rank in 1..10 {
            for step in 0..=20 {
                let performance = step as f64 / 20.0;
                let contribution = aggregator.contribution(Some(performance), Some(rank));

                assert!((0.0..=max).contains(&contribution), "{contribution} out of bounds");
                assert_eq!(contribution, contribution.floor());
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let invalid = ScoringConfig {
            performance_portion: 0.2,
            podium_portion: 0.5,
            ..config()
        };

        assert!(matches!(
            ScoreAggregator::new(invalid),
            Err(ConfigurationError::PortionsDoNotSumToOne { .. })
        ));
        assert!(calculate_game_score_component(Some(1.0), Some(1), &invalid).is_err());
        // Validation happens even when the player did not play
        assert!(calculate_game_score_component(None, None, &invalid).is_err());
    }

    #[test]
    fn test_one_shot_matches_aggregator() {
        let aggregator = ScoreAggregator::new(config()).unwrap();

        assert_eq!(
            calculate_game_score_component(Some(0.8), Some(2), &config()),
            Ok(aggregator.contribution(Some(0.8), Some(2)))
        );
    }
}
