use rand::Rng;

use crate::model::{
    constants::GAME_INCLUSION_PROBABILITY,
    structures::{game::Game, player::Player}
};

/// Number of games a player with propensity `participation` signs up for out of `game_count`.
///
/// `ceil(game_count * participation)`, capped at `participation_cap` and never more than the
/// games available.
pub fn target_game_count(participation: f64, game_count: usize, participation_cap: usize) -> usize {
    let wanted = (game_count as f64 * participation).ceil();
    // NaN and negative propensities want nothing
    let wanted = if wanted > 0.0 { wanted as usize } else { 0 };

    wanted.min(participation_cap).min(game_count)
}

/// Decides which games `player` plays.
///
/// Cycles through `games`, taking each candidate on a coin flip and skipping games already taken,
/// until the player's target count is met. Any previous assignment is replaced.
pub fn assign_games(player: &mut Player, games: &[Game], participation_cap: usize, rng: &mut impl Rng) {
    let target = target_game_count(player.participation, games.len(), participation_cap);
    player.games.clear();

    for game in games.iter().cycle() {
        if player.games.len() >= target {
            break;
        }

        if rng.random_bool(GAME_INCLUSION_PROBABILITY) {
            player.games.insert(game.id);
        }
    }
}

/// Runs [`assign_games`] for every player, in order.
pub fn assign_all(players: &mut [Player], games: &[Game], participation_cap: usize, rng: &mut impl Rng) {
    for player in players.iter_mut() {
        assign_games(player, games, participation_cap, rng);
    }
}
