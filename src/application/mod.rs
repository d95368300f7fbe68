//! Application layer orchestrating registry operations.
//!
//! # Modules
//!
//! - [`services`] - [`services::LinkService`]: submission checks and registry calls
//! - [`reconciler`] - [`reconciler::LinkListCache`]: the client-held display list
//! - [`session`] - [`session::LinkSession`]: per-session composition of both
//! - [`notification`] - User-facing messages for errors and clipboard copies

pub mod notification;
pub mod reconciler;
pub mod services;
pub mod session;
