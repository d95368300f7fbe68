//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Registry trait definitions
//! - [`link_event`] - Registry outcomes consumed by the list reconciler
//!
//! The domain layer has no dependency on the HTTP layer or on any concrete
//! registry implementation.

pub mod entities;
pub mod link_event;
pub mod repositories;
