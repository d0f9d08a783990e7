//! PAY.JP core library.
//!
//! This library provides the error taxonomy and client metadata shared by
//! the PAY.JP SDK components.

pub mod client_info;
pub mod config;
pub mod errors;
pub mod form;
pub mod types;

/// SDK version string, exported for runtime diagnostics by embedding
/// applications.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numeric counterpart of [`SDK_VERSION`]. Informational only.
pub const SDK_VERSION_NUMBER: f64 = 1.0;
