//! Static health endpoint.

use crate::models::Envelope;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// GET /health
///
/// Always 200; there are no dependencies worth probing, so the payload is a
/// bare success envelope.
pub async fn health_check(State(state): State<AppState>) -> Json<Envelope> {
    Json(Envelope::ok(&state.config.service.official_email))
}
