//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - CSC0001-CSC0099: Configuration errors (rejected before any computation)
//! - CSC0100-CSC0199: Input errors (annotation files, JSON mappings)
//! - CSC0200-CSC0299: System errors (I/O, report output)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a configuration error (0001-0099)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is an input error (0100-0199)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a system error (0200-0299)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CSC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Configuration errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Invalid maximum depth").with_help("The maximum depth must be at least 1"),
    );
    map.insert(
        2,
        ErrorInfo::new("Invalid maximum combination size")
            .with_help("The maximum combination size must be at least 1"),
    );
    map.insert(
        3,
        ErrorInfo::new("Invalid expansion support")
            .with_help("Branches are expanded while their support stays at or above this value, so it must be at least 1"),
    );
    map.insert(4, ErrorInfo::new("Invalid node budget"));

    // Input errors (0100-0199)
    map.insert(100, ErrorInfo::new("Malformed annotation mapping"));
    map.insert(101, ErrorInfo::new("Unsupported input format"));
    map.insert(102, ErrorInfo::new("Invalid span window"));

    // System errors (0200-0299)
    map.insert(200, ErrorInfo::new("I/O error"));
    map.insert(201, ErrorInfo::new("Input path not found"));

    map
});

// Configuration errors
pub const CSC0001: ErrorCode = ErrorCode::new(1);
pub const CSC0002: ErrorCode = ErrorCode::new(2);
pub const CSC0003: ErrorCode = ErrorCode::new(3);
pub const CSC0004: ErrorCode = ErrorCode::new(4);

// Input errors
pub const CSC0100: ErrorCode = ErrorCode::new(100);
pub const CSC0101: ErrorCode = ErrorCode::new(101);
pub const CSC0102: ErrorCode = ErrorCode::new(102);

// System errors
pub const CSC0200: ErrorCode = ErrorCode::new(200);
pub const CSC0201: ErrorCode = ErrorCode::new(201);
