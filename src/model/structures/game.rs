use serde::{Deserialize, Serialize};

use crate::model::{error::ConfigurationError, structures::numeric_range::NumericRange};

pub type GameId = u32;

/// Upper bound (exclusive) for a game's theoretical maximum score.
pub const THEORETICAL_MAX_CEILING: f64 = 1_000_000_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    /// Best possible score in `[0, THEORETICAL_MAX_CEILING)`
    pub theoretical_max: f64,
    /// How much luck shaves off a player's skill-derived score
    pub randomness: f64
}

/// Randomness outside `[0, 1]` would drive scores below zero.
pub fn validate_randomness(range: &NumericRange) -> Result<(), ConfigurationError> {
    range.validate()?;

    if range.min < 0.0 || range.max > 1.0 {
        return Err(ConfigurationError::InvalidRandomness {
            min: range.min,
            max: range.max
        });
    }

    Ok(())
}
