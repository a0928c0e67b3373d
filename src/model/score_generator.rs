use rand::Rng;

use crate::model::structures::{game::Game, player::Player, score_entry::ScoreEntry};

/// Raw score for one play: the skill-derived share of the game's maximum, less a random fraction
/// (at most `randomness`) of it.
///
/// `luck` is a uniform draw in `[0, 1)`.
pub fn score(game: &Game, player: &Player, luck: f64) -> f64 {
    game.theoretical_max * (player.skill - game.randomness * luck * player.skill)
}

/// Plays every assigned (player, game) pair once. Entries are grouped by game, players in slice order.
pub fn generate_scores(players: &[Player], games: &[Game], rng: &mut impl Rng) -> Vec<ScoreEntry> {
    let mut scores = Vec::new();

    for game in games {
        for player in players.iter().filter(|p| p.plays(game.id)) {
            scores.push(ScoreEntry {
                player: player.id,
                game: game.id,
                score: score(game, player, rng.random::<f64>())
            });
        }
    }

    scores
}
