use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::structures::game::GameId;

pub type PlayerId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Skill in `[0, 1]`
    pub skill: f64,
    /// Share of the available games this player wants to play
    pub participation: f64,
    /// Games this player takes part in, filled once by the match assigner
    pub games: BTreeSet<GameId>
}

impl Player {
    pub fn plays(&self, game: GameId) -> bool {
        self.games.contains(&game)
    }

    pub fn games_played(&self) -> usize {
        self.games.len()
    }
}
