//! The scoring-and-ranking pipeline
//!
//! entities -> match_assigner -> score_generator -> game_tabulator -> score_aggregator
//! -> metascore_tabulator -> {participation, performance}, driven by `simulation` and `sweep`.
pub mod constants;
pub mod entities;
pub mod error;
pub mod game_tabulator;
pub mod match_assigner;
pub mod metascore_tabulator;
pub mod participation;
pub mod performance;
pub mod score_aggregator;
pub mod score_generator;
pub mod simulation;
pub mod statistics;
pub mod structures;
pub mod sweep;
