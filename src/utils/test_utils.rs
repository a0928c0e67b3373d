use std::collections::BTreeSet;

use crate::model::{
    simulation::RunParameters,
    structures::{
        game::{Game, GameId},
        numeric_range::NumericRange,
        player::{Player, PlayerId},
        score_entry::ScoreEntry
    }
};

pub fn generate_player(id: PlayerId, skill: f64, participation: f64) -> Player {
    Player {
        id,
        skill,
        participation,
        games: BTreeSet::new()
    }
}

pub fn generate_game(id: GameId, theoretical_max: f64, randomness: f64) -> Game {
    Game {
        id,
        theoretical_max,
        randomness
    }
}

pub fn generate_score(player: PlayerId, game: GameId, score: f64) -> ScoreEntry {
    ScoreEntry { player, game, score }
}

pub fn generate_run_parameters(number_of_games: usize, number_of_players: usize) -> RunParameters {
    RunParameters {
        number_of_games,
        number_of_players,
        randomness_range: NumericRange {
            min: 0.25,
            max: 1.0,
            resolution: 0.1
        },
        engagement_range: NumericRange {
            min: 0.1,
            max: 1.0,
            resolution: 0.1
        }
    }
}
