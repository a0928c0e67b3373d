use serde::Serialize;

use crate::model::{
    metascore_tabulator::MetascoreTabulation,
    statistics::{index_players, mean},
    structures::{
        player::{Player, PlayerId},
        tier::Tier
    }
};

/// Share of the available games played. Every rate is `None` when it cannot be defined: no games, no
/// podium finisher in that slot, or an empty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ParticipationReport {
    /// Mean over the whole population
    pub total: Option<f64>,
    pub rank1: Option<f64>,
    pub rank2: Option<f64>,
    pub rank3: Option<f64>,
    /// Mean of the three podium finishers
    pub podium: Option<f64>,
    pub unranked: Option<f64>,
    pub wooden: Option<f64>,
    pub strong: Option<f64>,
    pub elite: Option<f64>
}

/// `games played / number_of_games`.
pub fn participation_rate(player: &Player, number_of_games: usize) -> Option<f64> {
    match number_of_games {
        0 => None,
        n => Some(player.games_played() as f64 / n as f64)
    }
}

pub fn tabulate_participation(
    players: &[Player],
    number_of_games: usize,
    metascores: &MetascoreTabulation
) -> ParticipationReport {
    let index = index_players(players);
    let rate_of = |id: PlayerId| index.get(&id).and_then(|player| participation_rate(player, number_of_games));

    let [rank1, rank2, rank3] = metascores
        .podium
        .slots()
        .map(|slot| slot.and_then(|entry| rate_of(entry.player)));
    let podium = match (rank1, rank2, rank3) {
        (Some(a), Some(b), Some(c)) => Some((a + b + c) / 3.0),
        _ => None
    };

    let bucket_rate = |tier: Tier| mean(metascores.tiers.bucket(tier).iter().filter_map(|id| rate_of(*id)));

    ParticipationReport {
        total: mean(players.iter().filter_map(|player| participation_rate(player, number_of_games))),
        rank1,
        rank2,
        rank3,
        podium,
        unranked: bucket_rate(Tier::Unranked),
        wooden: bucket_rate(Tier::Wooden),
        strong: bucket_rate(Tier::Strong),
        elite: bucket_rate(Tier::Elite)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        model::{
            game_tabulator::tabulate_game,
            metascore_tabulator::tabulate_metascores,
            participation::{participation_rate, tabulate_participation},
            score_aggregator::ScoreAggregator,
            structures::{
                ranking_config::{ElitePolicy, RankingConfig},
                scoring_config::ScoringConfig
            }
        },
        utils::test_utils::{generate_player, generate_score}
    };

    fn ranking() -> RankingConfig {
        RankingConfig {
            tier1_score_threshold: 1.0,
            tier2_percentile: 0.5,
            tier3_percentile: 0.85,
            elite_policy: ElitePolicy::ExcludePodium
        }
    }

    #[test]
    fn test_participation_rate() {
        let mut player = generate_player(0, 0.5, 1.0);
        player.games.extend([0, 1]);

        assert_eq!(participation_rate(&player, 4), Some(0.5));
        assert_eq!(participation_rate(&player, 0), None);
    }

    #[test]
    fn test_report() {
        // Four players over four games; player i plays games 0..=i and scores higher the more it plays
        let mut players = (0..4).map(|id| generate_player(id, 0.5, 1.0)).collect::<Vec<_>>();
        let mut scores = Vec::new();
        for player in players.iter_mut() {
            for game in 0..=player.id {
                player.games.insert(game);
                scores.push(generate_score(player.id, game, 10.0 * (player.id + 1) as f64));
            }
        }
        let tabulations = (0..4).map(|game| tabulate_game(game, &scores)).collect::<Vec<_>>();
        let aggregator = ScoreAggregator::new(ScoringConfig::default()).unwrap();
        let metascores = tabulate_metascores(&players, &tabulations, &aggregator, &ranking());

        let report = tabulate_participation(&players, 4, &metascores);

        // rates: p0 .25, p1 .5, p2 .75, p3 1.0
        assert_abs_diff_eq!(report.total.unwrap(), 0.625);
        assert_eq!(report.rank1, Some(1.0));
        assert_eq!(report.rank2, Some(0.75));
        assert_eq!(report.rank3, Some(0.5));
        assert_abs_diff_eq!(report.podium.unwrap(), 0.75);
        // Standings 1, 2/3, 1/3, 0: p3 is podium exempt, p2 strong, p1 and p0 wooden
        assert_eq!(report.wooden, Some(0.375));
        assert_eq!(report.strong, Some(0.75));
        assert_eq!(report.elite, None);
        assert_eq!(report.unranked, None);
    }

    #[test]
    fn test_no_games_leaves_rates_undefined() {
        let players = (0..10).map(|id| generate_player(id, 0.5, 1.0)).collect::<Vec<_>>();
        let aggregator = ScoreAggregator::new(ScoringConfig::default()).unwrap();
        let metascores = tabulate_metascores(&players, &[], &aggregator, &ranking());

        let report = tabulate_participation(&players, 0, &metascores);

        assert_eq!(report.total, None);
        assert_eq!(report.rank1, None);
        assert_eq!(report.podium, None);
        assert_eq!(report.unranked, None);
        assert!(report.total.is_none() && report.wooden.is_none());
    }

    #[test]
    fn test_short_podium_has_no_podium_mean() {
        let mut players = (0..2).map(|id| generate_player(id, 0.5, 1.0)).collect::<Vec<_>>();
        players[0].games.insert(0);
        players[1].games.insert(0);
        let scores = vec![generate_score(0, 0, 5.0), generate_score(1, 0, 4.0)];
        let tabulations = vec![tabulate_game(0, &scores)];
        let aggregator = ScoreAggregator::new(ScoringConfig::default()).unwrap();
        let metascores = tabulate_metascores(&players, &tabulations, &aggregator, &ranking());

        let report = tabulate_participation(&players, 1, &metascores);

        assert_eq!(report.rank1, Some(1.0));
        assert_eq!(report.rank2, Some(1.0));
        assert_eq!(report.rank3, None);
        assert_eq!(report.podium, None);
    }
}
