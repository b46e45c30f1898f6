use crate::scoring::domain::ScoredPair;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPair {
    pub player: String,
    pub role: String,
    pub score: f64,
    pub rank: usize,
}

/// Highest score for one role and every player who reached it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub role: String,
    pub score: f64,
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleStanding {
    pub role: String,
    pub score: f64,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub player: String,
    pub roles: Vec<RoleStanding>,
}

/// Ranks pairs within each role, descending by score. Ties share the lowest rank
/// and leave a gap after them (90, 85, 85, 70 -> 1, 2, 2, 4). Input order is kept.
pub fn rank_per_role(pairs: &[ScoredPair]) -> Vec<RankedPair> {
    let mut by_role: HashMap<&str, Vec<f64>> = HashMap::new();
    for pair in pairs {
        by_role.entry(pair.role.as_str()).or_default().push(pair.score);
    }
    for scores in by_role.values_mut() {
        scores.sort_by(|left, right| right.total_cmp(left));
    }

    pairs
        .iter()
        .map(|pair| {
            let higher = by_role
                .get(pair.role.as_str())
                .map(|scores| scores.partition_point(|score| *score > pair.score))
                .unwrap_or(0);
            RankedPair {
                player: pair.player.clone(),
                role: pair.role.clone(),
                score: pair.score,
                rank: higher + 1,
            }
        })
        .collect()
}

/// One entry per role, sorted by role name. Tied leaders are all listed in
/// input order.
pub fn top_per_role(pairs: &[ScoredPair]) -> Vec<TopPerformer> {
    let mut leaders: BTreeMap<&str, TopPerformer> = BTreeMap::new();
    for pair in pairs {
        match leaders.get_mut(pair.role.as_str()) {
            Some(top) if pair.score > top.score => {
                top.score = pair.score;
                top.players = vec![pair.player.clone()];
            }
            Some(top) if pair.score == top.score => top.players.push(pair.player.clone()),
            Some(_) => {}
            None => {
                leaders.insert(
                    pair.role.as_str(),
                    TopPerformer {
                        role: pair.role.clone(),
                        score: pair.score,
                        players: vec![pair.player.clone()],
                    },
                );
            }
        }
    }
    leaders.into_values().collect()
}

/// One player's roles, best first. Equal scores keep catalogue order.
pub fn player_view(ranked: &[RankedPair], player: &str) -> Option<PlayerView> {
    let mut roles: Vec<RoleStanding> = ranked
        .iter()
        .filter(|pair| pair.player == player)
        .map(|pair| RoleStanding {
            role: pair.role.clone(),
            score: pair.score,
            rank: pair.rank,
        })
        .collect();
    if roles.is_empty() {
        return None;
    }
    roles.sort_by(|left, right| right.score.total_cmp(&left.score));
    Some(PlayerView {
        player: player.to_string(),
        roles,
    })
}

/// The `k` best roles of every player, players in first-seen order.
pub fn best_roles(ranked: &[RankedPair], k: usize) -> Vec<PlayerView> {
    let mut views: Vec<PlayerView> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for pair in ranked {
        let slot = *slots.entry(pair.player.as_str()).or_insert_with(|| {
            views.push(PlayerView {
                player: pair.player.clone(),
                roles: Vec::new(),
            });
            views.len() - 1
        });
        views[slot].roles.push(RoleStanding {
            role: pair.role.clone(),
            score: pair.score,
            rank: pair.rank,
        });
    }

    for view in &mut views {
        view.roles
            .sort_by(|left, right| right.score.total_cmp(&left.score));
        view.roles.truncate(k);
    }
    views
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(role: &str, scores: &[(&str, f64)]) -> Vec<ScoredPair> {
        scores
            .iter()
            .map(|(player, score)| ScoredPair::new(*player, role, *score))
            .collect()
    }

    #[test]
    fn ties_share_minimum_rank() {
        let ranked = rank_per_role(&pairs(
            "CM Su",
            &[("A", 90.0), ("B", 85.0), ("C", 85.0), ("D", 70.0)],
        ));
        let ranks: Vec<usize> = ranked.iter().map(|pair| pair.rank).collect();
        assert_eq!(ranks, vec![1, 2, 2, 4]);
    }

    #[test]
    fn ranks_are_independent_per_role() {
        let mut input = pairs("CM Su", &[("A", 10.0), ("B", 12.0)]);
        input.extend(pairs("Anc", &[("A", 15.0), ("B", 3.0)]));
        let ranked = rank_per_role(&input);
        let ranks: Vec<usize> = ranked.iter().map(|pair| pair.rank).collect();
        assert_eq!(ranks, vec![2, 1, 1, 2]);
    }

    #[test]
    fn top_per_role_lists_every_tied_player() {
        let top = top_per_role(&pairs("Reg", &[("A", 10.0), ("B", 10.0), ("C", 5.0)]));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].score, 10.0);
        assert_eq!(top[0].players, vec!["A", "B"]);
    }

    #[test]
    fn player_view_sorts_by_score_and_keeps_catalogue_order_on_ties() {
        let input = vec![
            ScoredPair::new("A", "Reg", 11.0),
            ScoredPair::new("A", "Anc", 14.0),
            ScoredPair::new("A", "CM Su", 11.0),
        ];
        let view = player_view(&rank_per_role(&input), "A").expect("player present");
        let roles: Vec<&str> = view.roles.iter().map(|role| role.role.as_str()).collect();
        assert_eq!(roles, vec!["Anc", "Reg", "CM Su"]);
        assert!(player_view(&rank_per_role(&input), "Z").is_none());
    }

    #[test]
    fn best_roles_truncates_per_player() {
        let input = vec![
            ScoredPair::new("A", "Reg", 11.0),
            ScoredPair::new("A", "Anc", 14.0),
            ScoredPair::new("B", "Reg", 9.0),
            ScoredPair::new("B", "Anc", 7.0),
        ];
        let best = best_roles(&rank_per_role(&input), 1);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].player, "A");
        assert_eq!(best[0].roles[0].role, "Anc");
        assert_eq!(best[1].roles.len(), 1);
        assert_eq!(best[1].roles[0].role, "Reg");
    }
}
