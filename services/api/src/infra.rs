use metrics_exporter_prometheus::PrometheusHandle;
use role_fit::error::AppError;
use role_fit::scoring::catalogue::WeightSumWarning;
use role_fit::scoring::{
    Duty, FormulaTerm, ReportOptions, RoleCatalogue, RoleGroup, ScoreRange, ScoringEngine,
};
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalogue: Arc<RoleCatalogue>,
    pub(crate) engine: ScoringEngine,
    pub(crate) default_top_n: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoleEntry {
    pub(crate) name: String,
    pub(crate) family: String,
    pub(crate) duty: Option<Duty>,
    pub(crate) group: RoleGroup,
    pub(crate) group_label: &'static str,
    pub(crate) terms: Vec<FormulaTerm>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoleListing {
    pub(crate) version: String,
    pub(crate) count: usize,
    pub(crate) weight_warnings: Vec<WeightSumWarning>,
    pub(crate) roles: Vec<RoleEntry>,
}

/// Catalogue contents in display order (group, then name).
pub(crate) fn role_listing(catalogue: &RoleCatalogue) -> RoleListing {
    let groups = catalogue.groups();
    let mut roles: Vec<RoleEntry> = catalogue
        .formulas()
        .iter()
        .map(|formula| {
            let group = groups.group_of(&formula.name);
            RoleEntry {
                name: formula.name.clone(),
                family: formula.family().to_string(),
                duty: formula.duty(),
                group,
                group_label: group.label(),
                terms: formula.terms.clone(),
            }
        })
        .collect();
    roles.sort_by(|left, right| groups.compare(&left.name, &right.name));

    RoleListing {
        version: catalogue.version().to_string(),
        count: roles.len(),
        weight_warnings: catalogue.weight_warnings().to_vec(),
        roles,
    }
}

/// Both bounds or neither.
pub(crate) fn score_range(
    min: Option<f64>,
    max: Option<f64>,
) -> Result<Option<ScoreRange>, AppError> {
    match (min, max) {
        (Some(min), Some(max)) => Ok(Some(ScoreRange::new(min, max)?)),
        (None, None) => Ok(None),
        _ => Err(AppError::InvalidRequest(
            "score range needs both a minimum and a maximum".to_string(),
        )),
    }
}

pub(crate) fn report_options(
    top_n: usize,
    player: Option<String>,
    score_range: Option<ScoreRange>,
    best_roles: Option<usize>,
) -> Result<ReportOptions, AppError> {
    if top_n == 0 {
        return Err(AppError::InvalidRequest(
            "top_n must be at least 1".to_string(),
        ));
    }
    Ok(ReportOptions {
        top_n,
        player,
        score_range,
        best_roles,
    })
}
