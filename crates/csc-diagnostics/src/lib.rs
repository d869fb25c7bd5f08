//! Diagnostics and error handling
//!
//! This crate provides the error type shared by every stage of the
//! combination search, together with the structured error codes it carries.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for combination search operations
pub type Result<T> = std::result::Result<T, CscError>;
