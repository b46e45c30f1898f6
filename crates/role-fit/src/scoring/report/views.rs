use super::filters::ScoreRange;
use super::matrix::{RankMatrix, ScoreMatrix};
use serde::Serialize;

pub const DEFAULT_TOP_N: usize = 3;

/// Caller choices that shape a [`super::RoleFitReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub top_n: usize,
    pub player: Option<String>,
    pub score_range: Option<ScoreRange>,
    pub best_roles: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            player: None,
            score_range: None,
            best_roles: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub players: usize,
    pub roles: usize,
    pub pairs: usize,
    pub skipped: usize,
}

/// Players never ranked inside the top N of any role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutsideTopView {
    pub top_n: usize,
    pub players: Vec<String>,
    pub scores: ScoreMatrix,
    pub ranks: RankMatrix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeView {
    pub range: ScoreRange,
    pub players: Vec<String>,
    pub scores: ScoreMatrix,
}
