#![allow(dead_code)]

use axum_test::TestServer;
use brevly::application::services::{LinkService, PageLimits};
use brevly::domain::entities::{LinkRecord, NewLink};
use brevly::domain::repositories::LinkRepository;
use brevly::infrastructure::persistence::InMemoryLinkRepository;
use brevly::routes::api_router;
use brevly::state::AppState;
use brevly::utils::slug_validator;
use std::sync::Arc;

pub fn new_link(url: &str, slug: &str) -> NewLink {
    NewLink {
        original_url: url.to_string(),
        short_slug: slug_validator::validate(slug).unwrap(),
    }
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, slug: &str) -> LinkRecord {
    repo.create(new_link(&format!("https://example.com/{slug}"), slug))
        .await
        .unwrap()
}

pub fn create_test_service() -> Arc<LinkService<InMemoryLinkRepository>> {
    create_test_service_with_limits(PageLimits::default())
}

pub fn create_test_service_with_limits(
    limits: PageLimits,
) -> Arc<LinkService<InMemoryLinkRepository>> {
    let repo = Arc::new(InMemoryLinkRepository::new());
    Arc::new(LinkService::new(repo).with_page_limits(limits))
}

pub fn create_test_state() -> AppState {
    AppState::new(create_test_service(), "links.csv")
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(api_router(state)).unwrap()
}
