//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, download_links_handler, get_link_handler,
    list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link registry routes.
///
/// # Endpoints
///
/// - `GET    /urls`               - List links (cursor pagination)
/// - `POST   /urls`               - Create a link
/// - `GET    /urls/{short_url}`   - Look up a link by slug
/// - `DELETE /urls/{short_url}`   - Delete a link
/// - `GET    /downloads`          - Export all links as CSV
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_links_handler).post(create_link_handler))
        .route(
            "/urls/{short_url}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/downloads", get(download_links_handler))
}
