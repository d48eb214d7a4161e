//! JSON response types for tools that drive the rewrite.
//!
//! Every response carries `status` and `schema_version` so consumers can
//! detect incompatible changes.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use exportmirror_core::{ErrorCode, MirrorError};
use exportmirror_ecma::RewriteReport;

/// Current output schema version.
pub const SCHEMA_VERSION: &str = "1";

/// Response for a successful rewrite pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifyResponse {
    /// Status: "ok".
    pub status: String,
    pub schema_version: String,
    /// Number of literals rewritten.
    pub replaced: usize,
    #[serde(flatten)]
    pub report: RewriteReport,
}

impl MinifyResponse {
    pub fn new(report: RewriteReport) -> Self {
        MinifyResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            replaced: report.len(),
            report,
        }
    }
}

/// Error information for error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code (see [`ErrorCode`]).
    pub code: u8,
    pub message: String,
    /// Error-specific structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    pub fn from_error(err: &MirrorError) -> Self {
        let details = match err {
            MirrorError::Range { count } => Some(serde_json::json!({ "count": count })),
            MirrorError::Configuration(_)
            | MirrorError::Config { .. }
            | MirrorError::InvalidAst { .. }
            | MirrorError::Internal { .. } => None,
        };
        ErrorInfo {
            code: ErrorCode::from(err).code(),
            message: err.to_string(),
            details,
        }
    }
}

/// Response for a failed rewrite pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    pub schema_version: String,
    pub error: ErrorInfo,
}

impl ErrorResponse {
    pub fn from_error(err: &MirrorError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}
