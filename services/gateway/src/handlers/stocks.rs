use crate::auth::UpstreamAuth;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use types::aggregate::StockAverageResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct StockQuery {
    pub minutes: i64,
    #[serde(default = "default_aggregation")]
    pub aggregation: String,
}

fn default_aggregation() -> String {
    "average".to_string()
}

pub async fn get_stock_average(
    State(state): State<AppState>,
    auth: UpstreamAuth,
    Path(ticker): Path<String>,
    query: Result<Query<StockQuery>, QueryRejection>,
) -> Result<Json<StockAverageResponse>, AppError> {
    // Missing or non-integer minutes
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let response = state
        .stocks
        .handle(&ticker, query.minutes, &query.aggregation, auth.token())
        .await?;
    Ok(Json(response))
}
