use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::national_teams;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // National team API
        .route("/national-team", post(national_teams::create_national_team))
        .route(
            "/national-team/{nationalteam_id}",
            get(national_teams::get_national_team).delete(national_teams::delete_national_team),
        )
        .route("/service-addresses", get(national_teams::get_service_addresses))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
