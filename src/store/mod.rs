/// Store layer: the on-disk question file, its backup, and deduplication.
pub mod backup;
pub mod dedupe;
pub mod errors;
pub mod file;
pub mod record;

use std::path::PathBuf;

pub use backup::{backup, backup_path};
pub use dedupe::{DedupeStats, dedupe, dedupe_with_stats, normalize_question};
pub use errors::AuditError;
pub use file::{load, load_raw, save};
pub use record::Record;

/// File name of the question store, resolved next to the executable.
pub const DATA_FILE_NAME: &str = "audit1_questions.json";

/// Suffix appended to the data path to form the single-generation backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Resolve the data file path: the explicit override if given, otherwise
/// [`DATA_FILE_NAME`] in the directory holding the running executable.
///
/// # Errors
///
/// Returns `AuditError::ExecutableLocation` if the executable path cannot
/// be determined.
pub fn resolve_data_path(explicit: Option<PathBuf>) -> Result<PathBuf, AuditError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let exe = std::env::current_exe().map_err(AuditError::ExecutableLocation)?;
    let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(dir.join(DATA_FILE_NAME))
}
