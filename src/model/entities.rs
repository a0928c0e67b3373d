use std::collections::BTreeSet;

use rand::Rng;

use crate::model::structures::{
    game::{Game, GameId, THEORETICAL_MAX_CEILING},
    numeric_range::NumericRange,
    player::{Player, PlayerId}
};

/// Creates a player with a uniform skill and a participation propensity drawn from `engagement`.
/// The player starts out playing no games.
pub fn generate_player(id: PlayerId, engagement: &NumericRange, rng: &mut impl Rng) -> Player {
    Player {
        id,
        skill: rng.random::<f64>(),
        participation: engagement.sample(rng),
        games: BTreeSet::new()
    }
}

/// Creates a game with a uniform theoretical maximum and a randomness factor drawn from `randomness`.
pub fn generate_game(id: GameId, randomness: &NumericRange, rng: &mut impl Rng) -> Game {
    Game {
        id,
        theoretical_max: rng.random::<f64>() * THEORETICAL_MAX_CEILING,
        randomness: randomness.sample(rng)
    }
}

/// Players `0..count`, in id order. `count` must fit in a [`PlayerId`], which
/// [`RunParameters::validate`](crate::model::simulation::RunParameters::validate) checks.
pub fn generate_players(count: usize, engagement: &NumericRange, rng: &mut impl Rng) -> Vec<Player> {
    (0..count as PlayerId)
        .map(|id| generate_player(id, engagement, rng))
        .collect()
}

/// Games `0..count`, in id order. `count` must fit in a [`GameId`].
pub fn generate_games(count: usize, randomness: &NumericRange, rng: &mut impl Rng) -> Vec<Game> {
    (0..count as GameId).map(|id| generate_game(id, randomness, rng)).collect()
}
