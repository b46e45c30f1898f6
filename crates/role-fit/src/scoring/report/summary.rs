use super::filters::{players_in_range, players_outside_top, ScoreRange};
use super::matrix::{RankMatrix, ScoreMatrix};
use super::rankings::{
    best_roles, player_view, rank_per_role, top_per_role, PlayerView, RankedPair, TopPerformer,
};
use super::views::{OutsideTopView, RangeView, ReportCounts, ReportOptions};
use crate::scoring::catalogue::RoleGroups;
use crate::scoring::engine::{ScoringRun, SkippedPair};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Every view of one scoring run, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleFitReport {
    pub counts: ReportCounts,
    pub data_range: Option<ScoreRange>,
    pub ranked_pairs: Vec<RankedPair>,
    pub top_per_role: Vec<TopPerformer>,
    pub score_matrix: ScoreMatrix,
    pub row_maxima: Vec<Vec<usize>>,
    pub outside_top: OutsideTopView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_view: Option<PlayerView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_filter: Option<RangeView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub best_roles: Vec<PlayerView>,
    pub skipped: Vec<SkippedPair>,
}

impl RoleFitReport {
    pub fn build(run: &ScoringRun, groups: &RoleGroups, options: &ReportOptions) -> Self {
        let ranked_pairs = rank_per_role(&run.pairs);
        let score_matrix = ScoreMatrix::from_pairs(&run.players, &run.roles, &run.pairs, groups);
        let rank_matrix = RankMatrix::from_ranked(&run.players, &run.roles, &ranked_pairs, groups);
        let row_maxima = score_matrix.row_maxima();

        let outside = players_outside_top(&ranked_pairs, options.top_n);
        let outside_set: HashSet<String> = outside.iter().cloned().collect();
        let outside_top = OutsideTopView {
            top_n: options.top_n,
            scores: score_matrix.retain_players(&outside_set),
            ranks: rank_matrix.retain_players(&outside_set),
            players: outside,
        };

        let range_filter = options.score_range.map(|range| {
            let players = players_in_range(&run.pairs, &range);
            let keep: HashSet<String> = players.iter().cloned().collect();
            RangeView {
                range,
                scores: score_matrix.retain_players(&keep),
                players,
            }
        });

        let focus = options
            .player
            .as_deref()
            .and_then(|player| player_view(&ranked_pairs, player));
        let best = options
            .best_roles
            .map(|k| best_roles(&ranked_pairs, k))
            .unwrap_or_default();

        let report = Self {
            counts: ReportCounts {
                players: run.players.len(),
                roles: run.roles.len(),
                pairs: run.pairs.len(),
                skipped: run.skipped.len(),
            },
            data_range: ScoreRange::spanning(&run.pairs),
            top_per_role: top_per_role(&run.pairs),
            ranked_pairs,
            score_matrix,
            row_maxima,
            outside_top,
            player_view: focus,
            range_filter,
            best_roles: best,
            skipped: run.skipped.clone(),
        };
        debug!(
            pairs = report.counts.pairs,
            outside_top = report.outside_top.players.len(),
            "role fit report assembled"
        );
        report
    }

    /// `true` when the run produced no scored pairs.
    pub fn is_empty(&self) -> bool {
        self.counts.pairs == 0
    }
}
