use crate::auth::UpstreamAuth;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use types::aggregate::NumbersResponse;

pub async fn get_numbers(
    State(state): State<AppState>,
    auth: UpstreamAuth,
    Path(category): Path<String>,
) -> Result<Json<NumbersResponse>, AppError> {
    let response = state.numbers.handle(&category, auth.token()).await?;
    Ok(Json(response))
}
