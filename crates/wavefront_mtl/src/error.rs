//! Scan errors

use thiserror::Error;

/// Errors raised while scanning an MTL source
#[derive(Error, Debug)]
pub enum ScanError {
    /// Structurally invalid content: a recognized command lacks a required
    /// parameter, or a numeric parameter cannot be parsed
    #[error("line {line}: {message}")]
    Corrupt {
        /// 1-based line number of the offending line
        line: usize,
        /// Human-readable description of the missing or malformed element
        message: String,
    },

    /// The underlying source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Create a corrupt-input error for `line`
    pub fn corrupt(line: usize, message: impl Into<String>) -> Self {
        Self::Corrupt {
            line,
            message: message.into(),
        }
    }

    /// Whether this is a corrupt-input error
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
