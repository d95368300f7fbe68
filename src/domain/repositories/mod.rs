//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for registry operations; implementations live
//! in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link create, delete, lookup and pagination

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
