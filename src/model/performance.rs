use serde::Serialize;

use crate::model::{
    game_tabulator::GameTabulation,
    metascore_tabulator::MetascoreTabulation,
    statistics::{index_players, mean},
    structures::{
        player::{Player, PlayerId},
        tier::Tier
    }
};

/// How often a player finished in each podium position across all games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Placings {
    pub podiums: usize,
    pub firsts: usize,
    pub seconds: usize,
    pub thirds: usize
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerPerformance {
    pub player: PlayerId,
    pub placings: Placings,
    /// Mean normalized performance over the games played, `None` if none were
    pub average_performance: Option<f64>
}

/// Per-player means over one tier. Every field is `None` for an empty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BucketPerformance {
    pub players: usize,
    pub podiums: Option<f64>,
    pub firsts: Option<f64>,
    pub seconds: Option<f64>,
    pub thirds: Option<f64>,
    pub average_performance: Option<f64>
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub rank1: Option<PlayerPerformance>,
    pub rank2: Option<PlayerPerformance>,
    pub rank3: Option<PlayerPerformance>,
    pub unranked: BucketPerformance,
    pub wooden: BucketPerformance,
    pub strong: BucketPerformance,
    pub elite: BucketPerformance
}

pub fn count_placings(player: PlayerId, game_tabulations: &[GameTabulation]) -> Placings {
    let mut placings = Placings::default();

    for rank_index in game_tabulations.iter().filter_map(|t| t.rank_index(player)) {
        match rank_index {
            0 => placings.firsts += 1,
            1 => placings.seconds += 1,
            2 => placings.thirds += 1,
            _ => continue
        }
        placings.podiums += 1;
    }

    placings
}

/// Sum of normalized performance over every game, divided by the number of games the player played.
pub fn average_performance(player: &Player, game_tabulations: &[GameTabulation]) -> Option<f64> {
    let total: f64 = game_tabulations
        .iter()
        .map(|t| t.performance(player.id).unwrap_or_default())
        .sum();

    match player.games_played() {
        0 => None,
        n => Some(total / n as f64)
    }
}

pub fn player_performance(player: &Player, game_tabulations: &[GameTabulation]) -> PlayerPerformance {
    PlayerPerformance {
        player: player.id,
        placings: count_placings(player.id, game_tabulations),
        average_performance: average_performance(player, game_tabulations)
    }
}

pub fn bucket_performance<'a>(
    members: impl IntoIterator<Item = &'a Player>,
    game_tabulations: &[GameTabulation]
) -> BucketPerformance {
    let performances: Vec<PlayerPerformance> = members
        .into_iter()
        .map(|player| player_performance(player, game_tabulations))
        .collect();
    let placing_mean = |field: fn(&Placings) -> usize| mean(performances.iter().map(|p| field(&p.placings) as f64));

    BucketPerformance {
        players: performances.len(),
        podiums: placing_mean(|p| p.podiums),
        firsts: placing_mean(|p| p.firsts),
        seconds: placing_mean(|p| p.seconds),
        thirds: placing_mean(|p| p.thirds),
        average_performance: mean(performances.iter().filter_map(|p| p.average_performance))
    }
}

pub fn tabulate_performance(
    players: &[Player],
    metascores: &MetascoreTabulation,
    game_tabulations: &[GameTabulation]
) -> PerformanceReport {
    let index = index_players(players);

    let [rank1, rank2, rank3] = metascores.podium.slots().map(|slot| {
        slot.and_then(|entry| index.get(&entry.player))
            .map(|player| player_performance(player, game_tabulations))
    });

    let bucket = |tier: Tier| {
        let members = metascores
            .tiers
            .bucket(tier)
            .iter()
            .filter_map(|id| index.get(id).copied());
        bucket_performance(members, game_tabulations)
    };

    PerformanceReport {
        rank1,
        rank2,
        rank3,
        unranked: bucket(Tier::Unranked),
        wooden: bucket(Tier::Wooden),
        strong: bucket(Tier::Strong),
        elite: bucket(Tier::Elite)
    }
}
