//! Error types and error code constants for exportmirror.
//!
//! This module provides a unified error type (`MirrorError`) that bridges
//! domain-specific errors (alphabet validation, counter exhaustion, config
//! loading, syntax-tree I/O) into a common format suitable for JSON output.
//!
//! ## Error Code Mapping
//!
//! - `2`: Configuration errors (invalid alphabet, unreadable or invalid config file)
//! - `3`: Range errors (the sequence counter is exhausted)
//! - `4`: Invalid syntax tree (JSON AST that cannot be read or written)
//! - `10`: Internal errors (bugs, poisoned locks)
//!
//! Declarations that are not eligible for rewriting are never errors.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Error Codes
// ============================================================================

/// Stable error codes for JSON error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// Invalid alphabet or configuration.
    Configuration = 2,
    /// Sequence counter exhausted.
    Range = 3,
    /// Syntax tree could not be read or written.
    InvalidAst = 4,
    /// Internal errors (bugs, unexpected state).
    Internal = 10,
}

impl ErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Alphabet Errors
// ============================================================================

/// Rejections raised while constructing an [`Alphabet`](crate::Alphabet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Fewer than two symbols were supplied.
    #[error("alphabet needs at least 2 symbols, got {count}")]
    TooFewSymbols { count: usize },

    /// The same symbol appears twice.
    #[error("alphabet symbol {symbol:?} appears at index {first} and index {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },

    /// The symbol would need escaping inside the target string literal.
    #[error("alphabet symbol {symbol:?} is not safe inside {quote} string literals")]
    UnsafeSymbol { symbol: char, quote: String },
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for exportmirror.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Invalid alphabet (fatal; no usable generator is produced).
    #[error("configuration error: {0}")]
    Configuration(#[from] AlphabetError),

    /// The sequence counter cannot advance any further.
    #[error("sequence counter out of range at {count}")]
    Range { count: u64 },

    /// Configuration file could not be read or parsed.
    #[error("config error: {message}")]
    Config { message: String },

    /// Syntax-tree JSON could not be read or written.
    #[error("invalid syntax tree: {message}")]
    InvalidAst { message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Result type for exportmirror operations.
pub type MirrorResult<T> = Result<T, MirrorError>;

impl From<&MirrorError> for ErrorCode {
    fn from(err: &MirrorError) -> Self {
        match err {
            MirrorError::Configuration(_) => ErrorCode::Configuration,
            MirrorError::Range { .. } => ErrorCode::Range,
            MirrorError::Config { .. } => ErrorCode::Configuration,
            MirrorError::InvalidAst { .. } => ErrorCode::InvalidAst,
            MirrorError::Internal { .. } => ErrorCode::Internal,
        }
    }
}

impl From<serde_json::Error> for MirrorError {
    fn from(err: serde_json::Error) -> Self {
        MirrorError::InvalidAst {
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl MirrorError {
    /// Create a config file error.
    pub fn config(message: impl Into<String>) -> Self {
        MirrorError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid syntax tree error.
    pub fn invalid_ast(message: impl Into<String>) -> Self {
        MirrorError::InvalidAst {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        MirrorError::Internal {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}
