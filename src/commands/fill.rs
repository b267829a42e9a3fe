/// `audit-fill`: backup, load, dedupe, optionally fill interactively, save.
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::FillCli;
use crate::cli::OutputCtx;
use crate::cli::output::write_fill_summary;
use crate::fill::{FillOutcome, fill_interactively};
use crate::store::{AuditError, backup, dedupe_with_stats, load, resolve_data_path, save};
use crate::types::FillSummary;

/// How a fill pipeline ended without error.
#[derive(Debug, Clone)]
pub enum FillRun {
    /// The data file does not exist; nothing was touched.
    Missing,
    /// The cleaned collection was saved.
    Saved(FillSummary),
}

/// Run `audit-fill` against stdin/stdout.
///
/// A missing data file is reported on stdout and is not an error. Prompts go
/// to stdout, or to stderr when the summary is JSON so stdout stays parseable.
///
/// # Errors
///
/// Returns `AuditError::Cancelled` if input ends during the interactive pass,
/// and `AuditError` on backup, parse or write failure.
pub fn run(args: &FillCli, ctx: &OutputCtx) -> Result<(), AuditError> {
    let path = resolve_data_path(args.data.clone())?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts: Box<dyn Write> = if ctx.is_json() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    match execute(&path, args.wants_interactive(), ctx, &mut input, &mut prompts)? {
        FillRun::Missing => println!("{}", AuditError::NotFound { path }),
        FillRun::Saved(summary) => write_fill_summary(&summary, ctx),
    }
    Ok(())
}

/// The fill pipeline over an explicit path and prompt streams.
///
/// The backup is taken before anything is read. When the interactive pass
/// is cancelled the function returns before the save stage, so the data file
/// keeps its pre-run content.
///
/// # Errors
///
/// See [`run`].
pub fn execute<R, W>(
    path: &Path,
    interactive: bool,
    ctx: &OutputCtx,
    input: &mut R,
    prompts: &mut W,
) -> Result<FillRun, AuditError>
where
    R: BufRead,
    W: Write,
{
    if !path.exists() {
        return Ok(FillRun::Missing);
    }

    let t_backup = ctx.timer("backup");
    let backup_path = backup(path)?;
    drop(t_backup);
    ctx.note(format_args!("backup written to {}", backup_path.display()));

    let t_load = ctx.timer("load");
    let records = load(path)?;
    drop(t_load);

    let t_dedupe = ctx.timer("dedupe");
    let (mut cleaned, stats) = dedupe_with_stats(records);
    drop(t_dedupe);
    ctx.note(format_args!(
        "dedupe: input={} kept={} merged={} discarded={}",
        stats.input, stats.kept, stats.merged, stats.discarded
    ));

    let answers_updated = if interactive {
        match fill_interactively(&mut cleaned, input, prompts)
            .map_err(|e| AuditError::io("saisie interactive", path, e))?
        {
            FillOutcome::Completed { updated } => Some(updated),
            FillOutcome::Cancelled => return Err(AuditError::Cancelled),
        }
    } else {
        None
    };

    let t_save = ctx.timer("save");
    save(path, &cleaned)?;
    drop(t_save);

    Ok(FillRun::Saved(FillSummary::new(
        path,
        &backup_path,
        stats,
        answers_updated,
    )))
}
