//! Pure helpers used across the crate.
//!
//! - [`slug_validator`] - Short slug grammar
//! - [`url_validator`] - Original URL checks
//! - [`csv_exporter`] - CSV rendering of link lists
//! - [`content_disposition`] - Download filename handling

pub mod content_disposition;
pub mod csv_exporter;
pub mod slug_validator;
pub mod url_validator;
