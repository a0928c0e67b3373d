use serde::{Deserialize, Serialize};

use crate::model::structures::{game::GameId, player::PlayerId};

/// A single player's raw result in a single game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerId,
    pub game: GameId,
    pub score: f64
}
