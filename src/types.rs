/// Shared serializable output types for both tools.
///
/// These are what gets written to stdout/stderr in JSON mode. Records
/// themselves are printed as [`crate::store::Record`].
use serde::{Deserialize, Serialize};

use crate::store::{AuditError, DedupeStats};

/// Result of an `audit-fill` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillSummary {
    /// Data file that was rewritten.
    pub path: String,
    /// Backup taken before the run.
    pub backup: String,
    /// Records read from the file.
    pub input: usize,
    /// Records written back.
    pub kept: usize,
    /// Duplicates folded into an earlier record.
    pub merged: usize,
    /// Records dropped for a blank question.
    pub discarded: usize,
    /// Answers replaced interactively, or null when not run with `--interactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers_updated: Option<usize>,
}

impl FillSummary {
    /// Assemble a summary from the pipeline's pieces.
    #[must_use]
    pub fn new(
        path: &std::path::Path,
        backup: &std::path::Path,
        stats: DedupeStats,
        answers_updated: Option<usize>,
    ) -> Self {
        Self {
            path: path.display().to_string(),
            backup: backup.display().to_string(),
            input: stats.input,
            kept: stats.kept,
            merged: stats.merged,
            discarded: stats.discarded,
            answers_updated,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from an `AuditError`.
    #[must_use]
    pub fn from_audit_error(err: &AuditError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
