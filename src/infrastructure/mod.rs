//! Infrastructure layer implementing the domain contracts.
//!
//! # Modules
//!
//! - [`persistence`] - Registry implementations

pub mod persistence;
