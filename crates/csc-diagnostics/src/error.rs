//! Error types

use crate::{CSC0200, CSC0201, ErrorCode};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the combination search
#[derive(Debug, Clone, Error)]
pub enum CscError {
    /// Search parameters rejected before any tree is built
    #[error("{code}: {message}")]
    InvalidConfiguration {
        code: ErrorCode,
        message: String,
        parameter: &'static str,
    },

    /// Annotation input that cannot be interpreted
    #[error("{code}: {message}")]
    Input {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// Filesystem failure while reading input or writing a report
    #[error("{code}: {message}")]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },
}

impl CscError {
    /// Create a configuration error for the named parameter
    pub fn invalid_configuration(
        code: ErrorCode,
        parameter: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            code,
            message: message.into(),
            parameter,
        }
    }

    /// Create an input error
    pub fn input(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Create an I/O error from a `std::io::Error` raised while touching `path`
    pub fn io(error: &std::io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let code = if error.kind() == std::io::ErrorKind::NotFound {
            CSC0201
        } else {
            CSC0200
        };
        Self::Io {
            code,
            message: format!("{}: {}", path.display(), error),
            path: Some(path.to_path_buf()),
        }
    }

    /// Attach the offending file to an input error
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Input { code, message, .. } => Self::Input {
                code,
                message,
                path: Some(file.into()),
            },
            Self::Io { code, message, .. } => Self::Io {
                code,
                message,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfiguration { code, .. } => *code,
            Self::Input { code, .. } => *code,
            Self::Io { code, .. } => *code,
        }
    }

    /// Get the file involved, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Input { path, .. } | Self::Io { path, .. } => path.as_deref(),
            Self::InvalidConfiguration { .. } => None,
        }
    }

    /// Help text registered for the error code
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }
}
