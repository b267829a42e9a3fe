/// `audit-qna`: print the question file as loaded, duplicates included.
use crate::cli::QnaCli;
use crate::cli::OutputCtx;
use crate::cli::output::{write_raw, write_records};
use crate::store::{AuditError, load, load_raw, resolve_data_path};

/// Run `audit-qna`.
///
/// Never deduplicates, never writes the data file or a backup. JSON formats
/// echo the objects as stored (unknown keys kept, missing keys left out);
/// the transcript and table read them as records with defaults applied.
///
/// # Errors
///
/// Returns `AuditError::NotFound` if the data file is missing, `AuditError::Parse`
/// if it is malformed, and `AuditError::Io` if stdout cannot be written.
pub fn run(args: &QnaCli, ctx: &OutputCtx) -> Result<(), AuditError> {
    let path = resolve_data_path(args.data.clone())?;
    let stdout_err = |e: std::io::Error| AuditError::io("écriture stdout", &path, e);

    if ctx.is_json() {
        let t_load = ctx.timer("load_raw");
        let values = load_raw(&path)?;
        drop(t_load);

        let _t_render = ctx.timer("render");
        return write_raw(&values, ctx).map_err(stdout_err);
    }

    let t_load = ctx.timer("load");
    let records = load(&path)?;
    drop(t_load);

    let _t_render = ctx.timer("render");
    write_records(&records, ctx).map_err(stdout_err)
}
