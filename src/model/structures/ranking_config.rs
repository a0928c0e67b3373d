use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{TIER1_SCORE_THRESHOLD, TIER2_PERCENTILE, TIER3_PERCENTILE},
    error::ConfigurationError
};

/// Whether overall podium finishers may also be counted in the elite tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElitePolicy {
    /// Podium finishers are held out of the elite bucket and reported on their own
    #[default]
    ExcludePodium,
    IncludePodium
}

/// Thresholds that split the overall leaderboard into tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Minimum total score to be ranked at all
    pub tier1_score_threshold: f64,
    /// Standing at or below which a ranked player is wooden
    pub tier2_percentile: f64,
    /// Standing at or below which a ranked player is strong; above it, elite
    pub tier3_percentile: f64,
    pub elite_policy: ElitePolicy
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig {
            tier1_score_threshold: TIER1_SCORE_THRESHOLD,
            tier2_percentile: TIER2_PERCENTILE,
            tier3_percentile: TIER3_PERCENTILE,
            elite_policy: ElitePolicy::default()
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let (tier2, tier3) = (self.tier2_percentile, self.tier3_percentile);
        let ordered = 0.0 <= tier2 && tier2 <= tier3 && tier3 <= 1.0;
        if !ordered || self.tier1_score_threshold.is_nan() {
            return Err(ConfigurationError::InvalidPercentiles { tier2, tier3 });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        error::ConfigurationError,
        structures::ranking_config::{ElitePolicy, RankingConfig}
    };

    #[test]
    fn test_default_is_valid() {
        let config = RankingConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.elite_policy, ElitePolicy::ExcludePodium);
    }

    #[test]
    fn test_inverted_percentiles_rejected() {
        let config = RankingConfig {
            tier2_percentile: 0.9,
            tier3_percentile: 0.5,
            ..RankingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidPercentiles { tier2: 0.9, tier3: 0.5 })
        );
    }

    #[test]
    fn test_percentile_above_one_rejected() {
        let config = RankingConfig {
            tier3_percentile: 1.2,
            ..RankingConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_equal_percentiles_allowed() {
        let config = RankingConfig {
            tier2_percentile: 0.7,
            tier3_percentile: 0.7,
            ..RankingConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }
}
