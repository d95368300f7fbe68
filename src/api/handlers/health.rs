//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::LinkError;
use crate::state::AppState;

/// Returns service status and the number of registered links.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "links": 3 }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>, LinkError> {
    let links = state.link_service.count().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links,
    }))
}
