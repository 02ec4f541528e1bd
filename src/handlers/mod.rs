pub mod appointments;
pub mod health;
pub mod slots;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/slots", get(slots::list_slots))
        .route("/api/appointments", post(appointments::create_appointment))
        .layer(TraceLayer::new_for_http())
        // The clinic's static site posts the form from its own origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
