/// Load and save the question file.
///
/// The on-disk format is a JSON array of `{question, answer, optional}`
/// objects, pretty-printed with two-space indentation and non-ASCII text
/// written literally.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::AuditError;
use super::record::Record;

/// Suffix of the sibling file `save` writes before renaming over the target.
const TMP_SUFFIX: &str = ".tmp";

/// Read and parse the question file at `path`.
///
/// # Errors
///
/// - `AuditError::NotFound` if `path` does not exist
/// - `AuditError::Parse` if the content is not valid JSON or a record field
///   has the wrong type
/// - `AuditError::NotAnArray` if the top-level value is not an array
/// - `AuditError::Io` on any other read failure
pub fn load(path: &Path) -> Result<Vec<Record>, AuditError> {
    let values = load_raw(path)?;
    serde_json::from_value(Value::Array(values)).map_err(|source| AuditError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Read the question file at `path` as untyped JSON objects, keys and key
/// order exactly as on disk.
///
/// # Errors
///
/// Same as [`load`], except that record field types are not checked.
pub fn load_raw(path: &Path) -> Result<Vec<Value>, AuditError> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AuditError::NotFound {
                path: path.to_owned(),
            }
        } else {
            AuditError::io("lecture", path, e)
        }
    })?;
    parse(&text, path)
}

fn parse(text: &str, path: &Path) -> Result<Vec<Value>, AuditError> {
    let value: Value = serde_json::from_str(text).map_err(|source| AuditError::Parse {
        path: path.to_owned(),
        source,
    })?;
    match value {
        Value::Array(values) => Ok(values),
        _ => Err(AuditError::NotAnArray {
            path: path.to_owned(),
        }),
    }
}

/// Serialize `records` into the on-disk text form (with trailing newline).
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json_text(records: &[Record]) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Overwrite the file at `path` with `records`.
///
/// The full text is rendered in memory, written to a temporary file next to
/// the real target and renamed over it, so a failed write never leaves a
/// truncated store. Symlinks are followed (the link stays a link) and the
/// target's permissions carry over to the new content.
///
/// # Errors
///
/// Returns `AuditError::Io` if the temporary file cannot be written, given
/// the target's permissions, or renamed.
pub fn save(path: &Path, records: &[Record]) -> Result<(), AuditError> {
    let text = to_json_text(records).map_err(|e| AuditError::io("sérialisation", path, e.into()))?;
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let tmp = tmp_path(&target);
    fs::write(&tmp, text).map_err(|e| AuditError::io("écriture", &tmp, e))?;
    if let Ok(meta) = fs::metadata(&target) {
        fs::set_permissions(&tmp, meta.permissions()).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AuditError::io("permissions", &tmp, e)
        })?;
    }
    fs::rename(&tmp, &target).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        AuditError::io("remplacement", &target, e)
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(TMP_SUFFIX);
    PathBuf::from(os)
}
