/// Single-generation backup taken before every mutating run.
use std::fs;
use std::path::{Path, PathBuf};

use super::BACKUP_SUFFIX;
use super::errors::AuditError;

/// The backup path for `path`: the same path with `.bak` appended.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

/// Copy `path` byte-for-byte to [`backup_path`], replacing any earlier backup.
///
/// Returns the backup path.
///
/// # Errors
///
/// Returns `AuditError::NotFound` if `path` does not exist, and
/// `AuditError::Io` if the copy fails for any other reason.
pub fn backup(path: &Path) -> Result<PathBuf, AuditError> {
    let dest = backup_path(path);
    fs::copy(path, &dest).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound && !path.exists() {
            AuditError::NotFound {
                path: path.to_owned(),
            }
        } else {
            AuditError::io("copie de sauvegarde", &dest, e)
        }
    })?;
    Ok(dest)
}
