//! Handler for the CSV export endpoint.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::LinkError;
use crate::state::AppState;
use crate::utils::content_disposition::attachment;
use crate::utils::csv_exporter::to_csv;

/// Exports every link as a CSV attachment.
///
/// # Endpoint
///
/// `GET /downloads`
///
/// # Response Codes
///
/// - **200 OK**: `text/csv` body with a `Content-Disposition: attachment` header
/// - **204 No Content**: the registry is empty
pub async fn download_links_handler(State(state): State<AppState>) -> Result<Response, LinkError> {
    let records = state.link_service.export_all().await?;

    if records.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body = to_csv(&records)?;
    tracing::debug!(rows = records.len(), "CSV export rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, attachment(&state.export_filename)),
        ],
        body,
    )
        .into_response())
}
