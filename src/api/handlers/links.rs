//! Handlers for link endpoints (list, create, lookup, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, DeleteLinkResponse, LinkResponse, LinksPageResponse};
use crate::api::dto::pagination::LinksQueryParams;
use crate::error::LinkError;
use crate::state::AppState;

/// Lists one page of links in creation order.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Query Parameters
///
/// - `cursor` (optional): id of the last link of the previous page
/// - `page_size` (optional): items per page (default and maximum come from configuration)
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown cursor or an out-of-range page size.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<LinksQueryParams>,
) -> Result<Json<LinksPageResponse>, LinkError> {
    let page = state
        .link_service
        .list(params.cursor, params.page_size)
        .await?;

    Ok(Json(page.into()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com", "short_url": "promo" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL or slug, 409 Conflict when the
/// slug is taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), LinkError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(&payload.original_url, &payload.short_url)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Looks up a link by its slug.
///
/// `GET /urls/{short_url}`
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> Result<Json<LinkResponse>, LinkError> {
    let link = state.link_service.lookup_by_slug(&short_url).await?;
    Ok(Json(link.into()))
}

/// Deletes a link and returns the id it had.
///
/// `DELETE /urls/{short_url}`
///
/// # Errors
///
/// Returns 404 Not Found if no link uses the slug.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> Result<Json<DeleteLinkResponse>, LinkError> {
    let id = state.link_service.delete_link(&short_url).await?;
    Ok(Json(DeleteLinkResponse { id }))
}
