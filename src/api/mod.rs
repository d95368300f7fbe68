//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into registry operations and formats responses
//! with the wire names clients of the link API expect.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
