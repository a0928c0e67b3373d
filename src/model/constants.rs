// Scoring defaults
pub const MAX_GAME_SCORE: f64 = 1_000_000_000_000.0;
pub const PERFORMANCE_PORTION: f64 = 0.5;
pub const PODIUM_PORTION: f64 = 0.5;
pub const SECOND_PLACE_DENOMINATOR: f64 = 2.0;
pub const THIRD_PLACE_DENOMINATOR: f64 = 4.0;
pub const PORTION_TOLERANCE: f64 = 1e-9;
// Ranking defaults
pub const TIER1_SCORE_THRESHOLD: f64 = MAX_GAME_SCORE;
pub const TIER2_PERCENTILE: f64 = 0.5;
pub const TIER3_PERCENTILE: f64 = 0.85;
// Match assignment
pub const PARTICIPATION_CAP: usize = 7;
pub const GAME_INCLUSION_PROBABILITY: f64 = 0.5;
