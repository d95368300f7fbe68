//! Registry implementations.
//!
//! Concrete implementations of domain repository traits.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Session-scoped in-memory link registry

pub mod in_memory_link_repository;

pub use in_memory_link_repository::InMemoryLinkRepository;
