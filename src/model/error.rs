use thiserror::Error;

/// Rejected configuration. Raised by constructors before any simulation work begins.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Scoring portions must sum to 1 (performance {performance} + podium {podium} = {sum})")]
    PortionsDoNotSumToOne { performance: f64, podium: f64, sum: f64 },

    #[error("Scoring portion `{name}` must lie in [0, 1], got {value}")]
    PortionOutOfRange { name: &'static str, value: f64 },

    #[error("Placement denominator `{name}` must be at least 1, got {value}")]
    InvalidDenominator { name: &'static str, value: f64 },

    #[error("Maximum game score must be positive and finite, got {0}")]
    InvalidMax(f64),

    #[error("Invalid range [{min}, {max}] with resolution {resolution}")]
    InvalidRange { min: f64, max: f64, resolution: f64 },

    #[error("Tier percentiles must satisfy 0 <= tier2 ({tier2}) <= tier3 ({tier3}) <= 1")]
    InvalidPercentiles { tier2: f64, tier3: f64 },

    #[error("Game randomness must lie in [0, 1], got [{min}, {max}]")]
    InvalidRandomness { min: f64, max: f64 },

    #[error("`{name}` of {value} does not fit in an id")]
    CountTooLarge { name: &'static str, value: usize },

    #[error("At least one simulation per parameter set is required")]
    ZeroRepetitions
}
