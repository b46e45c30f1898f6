use crate::infra::{report_options, role_listing, score_range, AppState, RoleListing};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use role_fit::error::AppError;
use role_fit::roster::RosterImporter;
use role_fit::scoring::{Player, RoleFitReport, Roster};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRangeRequest {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(default)]
    pub(crate) roster_csv: Option<String>,
    #[serde(default)]
    pub(crate) players: Option<Vec<Player>>,
    #[serde(default)]
    pub(crate) player: Option<String>,
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    #[serde(default)]
    pub(crate) score_range: Option<ScoreRangeRequest>,
    #[serde(default)]
    pub(crate) best_roles: Option<usize>,
    #[serde(default = "default_include_pairs")]
    pub(crate) include_pairs: bool,
}

fn default_include_pairs() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum RosterSource {
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) catalogue_version: String,
    pub(crate) roster_source: RosterSource,
    pub(crate) report: RoleFitReport,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/roles", axum::routing::get(roles_endpoint))
        .route("/api/v1/roles/score", axum::routing::post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn roles_endpoint(Extension(state): Extension<AppState>) -> Json<RoleListing> {
    Json(role_listing(&state.catalogue))
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        roster_csv,
        players,
        player,
        top_n,
        score_range: range,
        best_roles,
        include_pairs,
    } = payload;

    let (roster, roster_source) = match (roster_csv, players) {
        (Some(csv), None) => (
            RosterImporter::from_reader(Cursor::new(csv.into_bytes()))?,
            RosterSource::Csv,
        ),
        (None, Some(players)) => (Roster::from_players(players), RosterSource::Json),
        _ => {
            return Err(AppError::InvalidRequest(
                "provide exactly one of `roster_csv` or `players`".to_string(),
            ))
        }
    };

    let range = score_range(
        range.as_ref().map(|range| range.min),
        range.as_ref().map(|range| range.max),
    )?;
    let options = report_options(
        top_n.unwrap_or(state.default_top_n),
        player,
        range,
        best_roles,
    )?;

    let run = state.engine.score_all(&roster, &state.catalogue);
    let mut report = RoleFitReport::build(&run, state.catalogue.groups(), &options);
    if let (Some(name), None) = (&options.player, &report.player_view) {
        return Err(AppError::InvalidRequest(format!(
            "player '{name}' has no scores in this roster"
        )));
    }
    if !include_pairs {
        report.ranked_pairs.clear();
    }

    info!(
        players = report.counts.players,
        pairs = report.counts.pairs,
        skipped = report.counts.skipped,
        "role scores evaluated"
    );

    Ok(Json(ScoreResponse {
        evaluated_at: Utc::now(),
        catalogue_version: state.catalogue.version().to_string(),
        roster_source,
        report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use role_fit::scoring::{RoleCatalogue, ScoringEngine};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    const SQUAD: &str = "Name,Position,Fin,Ant,Cmp,OtB,Fir,Hea,Tec,Dec,Acc,Jum,Pac,Det\n\
Smith,ST (C),15,12,10,14,13,8,11,12,14,10,15,16\n\
Jones,D (C),6,11,9,5,10,15,8,12,11,16,12,14\n";

    fn test_state(ready: bool) -> AppState {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(handle),
            catalogue: Arc::new(RoleCatalogue::standard().expect("standard catalogue")),
            engine: ScoringEngine::default(),
            default_top_n: 3,
        }
    }

    async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = readiness_endpoint(Extension(test_state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(test_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn score_endpoint_scores_csv_rosters() {
        let request = ScoreRequest {
            roster_csv: Some(SQUAD.to_string()),
            player: Some("Smith".to_string()),
            include_pairs: true,
            ..ScoreRequest::default()
        };

        let Json(body) = score_endpoint(Extension(test_state(true)), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.roster_source, RosterSource::Csv);
        assert_eq!(body.report.counts.players, 2);
        assert_eq!(body.report.counts.pairs, 2 * 74);
        assert_eq!(body.report.outside_top.top_n, 3);
        assert_eq!(body.report.score_matrix.cell("Smith", "Poach At"), Some(13.9));
        let smith = body.report.player_view.expect("player view");
        assert_eq!(smith.roles.len(), 74);
    }

    #[tokio::test]
    async fn score_endpoint_accepts_json_players_and_filters() {
        let request: ScoreRequest = serde_json::from_value(json!({
            "players": [
                { "name": "Lee", "attributes": { "Fin": 16, "Pac": 17 } },
                { "name": "Kim", "attributes": { "Tck": 15, "Mar": 14 } }
            ],
            "top_n": 1,
            "score_range": { "min": 0.0, "max": 100.0 },
            "best_roles": 2,
            "include_pairs": false
        }))
        .expect("request parses");

        let Json(body) = score_endpoint(Extension(test_state(true)), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.roster_source, RosterSource::Json);
        assert!(body.report.ranked_pairs.is_empty());
        assert_eq!(body.report.best_roles.len(), 2);
        let range = body.report.range_filter.expect("range view");
        assert_eq!(range.players, vec!["Lee", "Kim"]);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_ambiguous_input() {
        let request = ScoreRequest {
            roster_csv: Some(SQUAD.to_string()),
            players: Some(Vec::new()),
            ..ScoreRequest::default()
        };
        let err = score_endpoint(Extension(test_state(true)), Json(request))
            .await
            .expect_err("ambiguous roster rejected");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = score_endpoint(Extension(test_state(true)), Json(ScoreRequest::default()))
            .await
            .expect_err("missing roster rejected");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_inverted_range_and_unknown_player() {
        let request = ScoreRequest {
            roster_csv: Some(SQUAD.to_string()),
            score_range: Some(ScoreRangeRequest { min: 9.0, max: 1.0 }),
            ..ScoreRequest::default()
        };
        let err = score_endpoint(Extension(test_state(true)), Json(request))
            .await
            .expect_err("inverted range rejected");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let request = ScoreRequest {
            roster_csv: Some(SQUAD.to_string()),
            player: Some("Nobody".to_string()),
            ..ScoreRequest::default()
        };
        let err = score_endpoint(Extension(test_state(true)), Json(request))
            .await
            .expect_err("unknown player rejected");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn router_serves_catalogue_and_scores() {
        let app = router().layer(Extension(test_state(true)));

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/roles")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["count"], 74);
        assert_eq!(payload["weight_warnings"].as_array().map(Vec::len), Some(72));

        let body = json!({ "roster_csv": SQUAD, "top_n": 1 });
        let response = app
            .oneshot(
                Request::post("/api/v1/roles/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["report"]["counts"]["players"], 2);
        assert!(payload["evaluated_at"].is_string());
    }

    #[tokio::test]
    async fn router_maps_bad_csv_to_client_error() {
        let app = router().layer(Extension(test_state(true)));
        let body = json!({ "roster_csv": "Player,Fin\nLee,12\n" });

        let response = app
            .oneshot(
                Request::post("/api/v1/roles/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .is_some_and(|message| message.contains("Name")));
    }
}
