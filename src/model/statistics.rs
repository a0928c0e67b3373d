use std::collections::HashMap;

use crate::model::structures::player::{Player, PlayerId};

/// Arithmetic mean, `None` for an empty set rather than a division by zero.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    match count {
        0 => None,
        n => Some(sum / n as f64)
    }
}

/// Players keyed by id, for resolving ids held in leaderboards and tier buckets.
pub fn index_players(players: &[Player]) -> HashMap<PlayerId, &Player> {
    players.iter().map(|player| (player.id, player)).collect()
}
