//! # Brevly
//!
//! Link registry core of a URL shortener: slug validation, an in-memory
//! registry with cursor pagination, CSV export and the rules that keep a
//! client-side list in step with the registry. An Axum service exposes the
//! registry with the same wire format as the production backend.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link records, pages, list events and the repository trait
//! - **Application Layer** ([`application`]) - Link service, list reconciler, session shell, notifications
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Utilities** ([`utils`]) - Slug and URL validators, CSV exporter, download filenames
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3333"   # Optional
//! cargo run
//!
//! curl -X POST localhost:3333/urls \
//!   -H 'content-type: application/json' \
//!   -d '{"original_url":"https://example.com","short_url":"promo"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::LinkError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::reconciler::LinkListCache;
    pub use crate::application::services::{LinkService, PageLimits};
    pub use crate::application::session::LinkSession;
    pub use crate::domain::entities::{LinkRecord, NewLink, Page};
    pub use crate::domain::link_event::{FetchTicket, LinkEvent};
    pub use crate::error::{ErrorKind, LinkError, ValidationError};
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
