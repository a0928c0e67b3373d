use std::cmp::Ordering;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::model::structures::{game::GameId, player::PlayerId, podium::Podium, score_entry::ScoreEntry};

/// Leaderboard of a single game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameTabulation {
    pub game: GameId,
    /// Entries sorted by score, best first
    pub leaderboard: Vec<ScoreEntry>,
    /// Score relative to the top score, kept in leaderboard order
    pub normalized_performance: IndexMap<PlayerId, f64>,
    pub podium: Podium<ScoreEntry>
}

impl GameTabulation {
    /// 0-based leaderboard position, `None` if the player did not play this game.
    pub fn rank_index(&self, player: PlayerId) -> Option<usize> {
        self.normalized_performance.get_index_of(&player)
    }

    /// 1-based placement, `None` if the player did not play this game.
    pub fn rank(&self, player: PlayerId) -> Option<usize> {
        self.rank_index(player).map(|i| i + 1)
    }

    pub fn performance(&self, player: PlayerId) -> Option<f64> {
        self.normalized_performance.get(&player).copied()
    }

    pub fn participants(&self) -> usize {
        self.leaderboard.len()
    }
}

/// Best score first. Exact ties go to the lower player id.
pub fn compare_scores(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score.total_cmp(&a.score).then(a.player.cmp(&b.player))
}

/// Builds the leaderboard of `game` from every score recorded in the run.
pub fn tabulate_game(game: GameId, scores: &[ScoreEntry]) -> GameTabulation {
    let leaderboard: Vec<ScoreEntry> = scores
        .iter()
        .filter(|entry| entry.game == game)
        .copied()
        .sorted_by(compare_scores)
        .collect();

    let top = leaderboard.first().map(|entry| entry.score).unwrap_or_default();
    let normalized_performance = leaderboard
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.player, normalize(i, entry.score, top)))
        .collect();

    GameTabulation {
        game,
        podium: Podium::from_leaderboard(&leaderboard),
        leaderboard,
        normalized_performance
    }
}

/// Tabulates each of `games` in order.
pub fn tabulate_games(games: impl IntoIterator<Item = GameId>, scores: &[ScoreEntry]) -> Vec<GameTabulation> {
    games.into_iter().map(|game| tabulate_game(game, scores)).collect()
}

fn normalize(index: usize, score: f64, top: f64) -> f64 {
    // A zero top score means everyone tied with the leader
    if index == 0 || top <= 0.0 {
        1.0
    } else {
        score / top
    }
}
