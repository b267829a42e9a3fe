/// Errors from the store layer and the two command pipelines.
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a run of `audit-fill` or `audit-qna`.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The data file does not exist at the expected path.
    #[error("Fichier de questions introuvable: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The data file exists but is not valid JSON or a field has the wrong type.
    #[error("JSON invalide dans {}: {source}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying parser diagnostic.
        source: serde_json::Error,
    },

    /// The data file is valid JSON but its top level is not an array.
    #[error("{} ne contient pas un tableau JSON", path.display())]
    NotAnArray {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// Reading, copying or writing a file failed.
    #[error("{context} ({}): {source}", path.display())]
    Io {
        /// Which step failed (e.g. "lecture", "sauvegarde").
        context: &'static str,
        /// File involved in the failed step.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The operator closed input during the interactive fill.
    #[error("Saisie interrompue, aucune modification enregistrée")]
    Cancelled,

    /// The running executable's location could not be determined.
    #[error("Impossible de localiser l'exécutable: {0}")]
    ExecutableLocation(std::io::Error),
}

impl AuditError {
    /// Build an `Io` error for `path`.
    #[must_use]
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 2,
            Self::Cancelled => 130,
            Self::Parse { .. }
            | Self::NotAnArray { .. }
            | Self::Io { .. }
            | Self::ExecutableLocation(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Parse { .. } | Self::NotAnArray { .. } => "parse_error",
            Self::Io { .. } => "io_error",
            Self::Cancelled => "cancelled",
            Self::ExecutableLocation(_) => "executable_location",
        }
    }
}
