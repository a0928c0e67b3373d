use std::{cmp::Ordering, collections::BTreeMap};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{
    game_tabulator::GameTabulation,
    score_aggregator::ScoreAggregator,
    structures::{
        player::{Player, PlayerId},
        podium::Podium,
        ranking_config::{ElitePolicy, RankingConfig},
        tier::Tier
    }
};

/// A row of the overall leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetascoreEntry {
    pub player: PlayerId,
    pub score: f64,
    pub skill: f64
}

/// Players grouped by tier, each bucket in leaderboard order.
///
/// With [`ElitePolicy::ExcludePodium`], podium finishers whose standing would make them elite are kept
/// in `podium_exempt`; the five lists together always cover every player exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierBuckets {
    pub unranked: Vec<PlayerId>,
    pub wooden: Vec<PlayerId>,
    pub strong: Vec<PlayerId>,
    pub elite: Vec<PlayerId>,
    pub podium_exempt: Vec<PlayerId>
}

/// Bucket sizes, as logged after each run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub unranked: usize,
    pub wooden: usize,
    pub strong: usize,
    pub elite: usize,
    pub podium_exempt: usize
}

impl TierBuckets {
    pub fn bucket(&self, tier: Tier) -> &[PlayerId] {
        match tier {
            Tier::Unranked => &self.unranked,
            Tier::Wooden => &self.wooden,
            Tier::Strong => &self.strong,
            Tier::Elite => &self.elite
        }
    }

    fn bucket_mut(&mut self, tier: Tier) -> &mut Vec<PlayerId> {
        match tier {
            Tier::Unranked => &mut self.unranked,
            Tier::Wooden => &mut self.wooden,
            Tier::Strong => &mut self.strong,
            Tier::Elite => &mut self.elite
        }
    }

    /// The tier holding `player`, `None` for podium-exempt or unknown players.
    pub fn tier_of(&self, player: PlayerId) -> Option<Tier> {
        Tier::iter().find(|tier| self.bucket(*tier).contains(&player))
    }

    pub fn counts(&self) -> TierCounts {
        TierCounts {
            unranked: self.unranked.len(),
            wooden: self.wooden.len(),
            strong: self.strong.len(),
            elite: self.elite.len(),
            podium_exempt: self.podium_exempt.len()
        }
    }

    pub fn len(&self) -> usize {
        self.unranked.len() + self.wooden.len() + self.strong.len() + self.elite.len() + self.podium_exempt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetascoreTabulation {
    /// Sum of per-game contributions. Players who played nothing are absent.
    pub total_score: BTreeMap<PlayerId, f64>,
    pub leaderboard: Vec<MetascoreEntry>,
    /// Rank-based percentile, kept in leaderboard order
    pub normalized_standing: IndexMap<PlayerId, f64>,
    pub podium: Podium<MetascoreEntry>,
    pub tiers: TierBuckets
}

impl MetascoreTabulation {
    /// Total score, 0 for players who played nothing.
    pub fn score(&self, player: PlayerId) -> f64 {
        self.total_score.get(&player).copied().unwrap_or_default()
    }

    pub fn rank_index(&self, player: PlayerId) -> Option<usize> {
        self.normalized_standing.get_index_of(&player)
    }

    pub fn standing(&self, player: PlayerId) -> Option<f64> {
        self.normalized_standing.get(&player).copied()
    }
}

/// Sums every player's contribution over the games they played.
pub fn total_scores(game_tabulations: &[GameTabulation], aggregator: &ScoreAggregator) -> BTreeMap<PlayerId, f64> {
    let mut totals = BTreeMap::new();

    for tabulation in game_tabulations {
        for (rank_index, (player, performance)) in tabulation.normalized_performance.iter().enumerate() {
            let contribution = aggregator.contribution(Some(*performance), Some(rank_index + 1));
            *totals.entry(*player).or_insert(0.0) += contribution;
        }
    }

    totals
}

/// `1 - index / (count - 1)`; a lone player stands at 1.
pub fn normalized_standing(index: usize, count: usize) -> f64 {
    if count <= 1 {
        1.0
    } else {
        1.0 - index as f64 / (count - 1) as f64
    }
}

/// Places a player in a tier. The checks are ordered and the first match wins.
///
/// Returns `None` for a podium finisher that qualifies as elite while the policy excludes the podium.
pub fn classify(score: f64, standing: f64, rank_index: usize, config: &RankingConfig) -> Option<Tier> {
    if score < config.tier1_score_threshold {
        Some(Tier::Unranked)
    } else if standing <= config.tier2_percentile {
        Some(Tier::Wooden)
    } else if standing <= config.tier3_percentile {
        Some(Tier::Strong)
    } else {
        match config.elite_policy {
            ElitePolicy::ExcludePodium if rank_index < 3 => None,
            _ => Some(Tier::Elite)
        }
    }
}

/// Builds the overall leaderboard, standings, podium and tiers for a run.
pub fn tabulate_metascores(
    players: &[Player],
    game_tabulations: &[GameTabulation],
    aggregator: &ScoreAggregator,
    config: &RankingConfig
) -> MetascoreTabulation {
    let total_score = total_scores(game_tabulations, aggregator);

    let leaderboard: Vec<MetascoreEntry> = players
        .iter()
        .sorted_by(|a, b| compare_totals(&total_score, a.id, b.id))
        .map(|player| MetascoreEntry {
            player: player.id,
            score: total_score.get(&player.id).copied().unwrap_or_default(),
            skill: player.skill
        })
        .collect();

    let count = leaderboard.len();
    let standings: IndexMap<PlayerId, f64> = leaderboard
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.player, normalized_standing(i, count)))
        .collect();

    let mut tiers = TierBuckets::default();
    for (i, entry) in leaderboard.iter().enumerate() {
        match classify(entry.score, normalized_standing(i, count), i, config) {
            Some(tier) => tiers.bucket_mut(tier).push(entry.player),
            None => tiers.podium_exempt.push(entry.player)
        }
    }

    MetascoreTabulation {
        podium: Podium::from_leaderboard(&leaderboard),
        total_score,
        leaderboard,
        normalized_standing: standings,
        tiers
    }
}

/// Highest total first; players who played nothing rank below everyone who did; then lower id first.
fn compare_totals(totals: &BTreeMap<PlayerId, f64>, a: PlayerId, b: PlayerId) -> Ordering {
    match (totals.get(&a), totals.get(&b)) {
        (Some(x), Some(y)) => y.total_cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
    .then(a.cmp(&b))
}
