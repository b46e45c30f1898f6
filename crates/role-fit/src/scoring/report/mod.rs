mod filters;
mod matrix;
mod rankings;
mod summary;
mod views;

pub use filters::{players_in_range, players_outside_top, FilterError, ScoreRange};
pub use matrix::{MatrixColumn, MatrixRow, PivotMatrix, RankMatrix, ScoreMatrix};
pub use rankings::{
    best_roles, player_view, rank_per_role, top_per_role, PlayerView, RankedPair, RoleStanding,
    TopPerformer,
};
pub use summary::RoleFitReport;
pub use views::{OutsideTopView, RangeView, ReportCounts, ReportOptions, DEFAULT_TOP_N};
