use crate::handlers::{health, numbers, stocks};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/numbers/{category}", get(numbers::get_numbers))
        .route("/stocks/{ticker}", get(stocks::get_stock_average))
        .route("/health", get(health::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
