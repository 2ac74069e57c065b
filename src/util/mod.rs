//! Utility types and functions for CZML.
//!
//! This module contains the pieces used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - [`PreambleViolation`] - Document preamble diagnostics
//! - [`is_valid_uri`] / [`validate_uri`] - URI format checks

mod error;
mod uri;

pub use error::*;
pub use uri::*;
