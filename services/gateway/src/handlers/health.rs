use crate::state::AppState;
use crate::SERVICE_VERSION;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub window_capacity: usize,
}

/// Liveness check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: SERVICE_VERSION,
        window_capacity: state.numbers.window().capacity(),
    })
}
