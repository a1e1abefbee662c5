//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use tracing::debug;

use crate::domain::StationId;

use super::dto::{DirectRequest, DirectResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/direct", get(direct))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Answer whether a single bus route serves both stations.
///
/// Missing or non-integer IDs are echoed back as `null` and answered
/// with `false`; bad input never fails the request.
async fn direct(
    State(state): State<AppState>,
    Query(req): Query<DirectRequest>,
) -> Json<DirectResponse> {
    let dep = parse_sid(req.dep_sid.as_deref());
    let arr = parse_sid(req.arr_sid.as_deref());

    let direct_bus_route = match (dep, arr) {
        (Some(dep), Some(arr)) => state.index.has_connection(dep, arr),
        _ => {
            debug!(dep_sid = ?req.dep_sid, arr_sid = ?req.arr_sid, "unusable station IDs in query");
            false
        }
    };

    Json(DirectResponse {
        dep_sid: dep.map(|id| id.0),
        arr_sid: arr.map(|id| id.0),
        direct_bus_route,
    })
}

/// Parse a station ID parameter, treating anything non-integer as absent.
fn parse_sid(raw: Option<&str>) -> Option<StationId> {
    raw?.parse().ok()
}
