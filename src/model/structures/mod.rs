pub mod game;
pub mod numeric_range;
pub mod player;
pub mod podium;
pub mod ranking_config;
pub mod score_entry;
pub mod scoring_config;
pub mod tier;
