pub mod catalogue;
pub mod domain;
mod engine;
mod evaluator;
pub mod report;

pub use catalogue::{
    CatalogueError, RoleCatalogue, RoleDefinition, RoleGroups, TermDefinition, WeightSumWarning,
};
pub use domain::{
    AttributeStore, Duty, FormulaTerm, Player, RoleFormula, RoleGroup, Roster, ScoredPair,
};
pub use engine::{score_all, ScoringEngine, ScoringRun, SkippedPair, DEFAULT_PARALLEL_THRESHOLD};
pub use evaluator::{evaluate, round_score, EvaluationFailure};
pub use report::{FilterError, ReportOptions, RoleFitReport, ScoreRange};
