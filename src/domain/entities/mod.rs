//! Core domain entities.
//!
//! - [`LinkRecord`] - A shortened link held by the registry
//! - [`NewLink`] - Validated input for creating a link
//! - [`Page`] - A cursor-paginated slice of the registry

pub mod link;
pub mod page;

pub use link::{LinkRecord, NewLink};
pub use page::Page;
