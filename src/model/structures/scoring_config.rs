use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{
        MAX_GAME_SCORE, PERFORMANCE_PORTION, PODIUM_PORTION, PORTION_TOLERANCE, SECOND_PLACE_DENOMINATOR,
        THIRD_PLACE_DENOMINATOR
    },
    error::ConfigurationError
};

/// Weights of the per-game score formula.
///
/// A game is worth at most `max`: `performance_portion` of it is scaled by the player's normalized
/// performance, `podium_portion` of it goes to the winner, divided down for second and third place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub max: f64,
    pub performance_portion: f64,
    pub podium_portion: f64,
    pub second_place_denominator: f64,
    pub third_place_denominator: f64
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            max: MAX_GAME_SCORE,
            performance_portion: PERFORMANCE_PORTION,
            podium_portion: PODIUM_PORTION,
            second_place_denominator: SECOND_PLACE_DENOMINATOR,
            third_place_denominator: THIRD_PLACE_DENOMINATOR
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.max.is_finite() || self.max <= 0.0 {
            return Err(ConfigurationError::InvalidMax(self.max));
        }

        for (name, value) in [
            ("performance_portion", self.performance_portion),
            ("podium_portion", self.podium_portion)
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::PortionOutOfRange { name, value });
            }
        }

        let sum = self.performance_portion + self.podium_portion;
        if (sum - 1.0).abs() > PORTION_TOLERANCE {
            return Err(ConfigurationError::PortionsDoNotSumToOne {
                performance: self.performance_portion,
                podium: self.podium_portion,
                sum
            });
        }

        for (name, value) in [
            ("second_place_denominator", self.second_place_denominator),
            ("third_place_denominator", self.third_place_denominator)
        ] {
            // NaN fails this comparison too
            if !(value >= 1.0) {
                return Err(ConfigurationError::InvalidDenominator { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{error::ConfigurationError, structures::scoring_config::ScoringConfig};

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ScoringConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_portions_must_sum_to_one() {
        let config = ScoringConfig {
            performance_portion: 0.3,
            podium_portion: 0.5,
            ..ScoringConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::PortionsDoNotSumToOne { .. })
        ));
    }

    #[test]
    fn test_float_noise_in_portions_is_tolerated() {
        let config = ScoringConfig {
            performance_portion: 0.1 + 0.2,
            podium_portion: 0.7,
            ..ScoringConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_negative_portion_rejected() {
        let config = ScoringConfig {
            performance_portion: 1.5,
            podium_portion: -0.5,
            ..ScoringConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::PortionOutOfRange {
                name: "performance_portion",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_denominator_below_one_rejected() {
        let config = ScoringConfig {
            third_place_denominator: 0.5,
            ..ScoringConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidDenominator {
                name: "third_place_denominator",
                value: 0.5
            })
        );
    }

    #[test]
    fn test_non_positive_max_rejected() {
        let config = ScoringConfig {
            max: 0.0,
            ..ScoringConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigurationError::InvalidMax(0.0)));
    }
}
