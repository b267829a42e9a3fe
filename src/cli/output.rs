/// Output formatting: transcript, JSON, table modes, error envelopes, debug timing.
use std::io::{self, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use serde_json::Value;

use super::args::OutputFormat;
use crate::store::Record;
use crate::types::{ErrorOutput, FillSummary};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print stage timings and notes to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a `[debug]` note to stderr when `--debug` is set.
    pub fn note(&self, message: std::fmt::Arguments<'_>) {
        if self.debug {
            eprintln!("[debug] {message}");
        }
    }

    /// Whether the resolved format is one of the JSON variants.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(
            self.format,
            OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson
        )
    }
}

// --- Records ---

/// Render `records` in `ctx.format` to `out`.
///
/// # Errors
///
/// Returns `io::Error` if writing fails or serialization fails.
pub fn render_records<W: Write>(out: &mut W, records: &[Record], ctx: &OutputCtx) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Transcript => write_transcript(out, records),
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Compact => write_compact_json(out, records),
        OutputFormat::Ndjson => write_ndjson(out, records),
        OutputFormat::Table => write_records_table(out, records, ctx),
    }
}

/// Write `records` to stdout.
///
/// # Errors
///
/// Returns `io::Error` if stdout cannot be written.
pub fn write_records(records: &[Record], ctx: &OutputCtx) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_records(&mut out, records, ctx)?;
    out.flush()
}

/// Render untyped JSON objects (as read from disk) in `ctx.format`.
///
/// Only the JSON variants apply; any other format falls back to pretty JSON.
///
/// # Errors
///
/// Returns `io::Error` if writing fails or serialization fails.
pub fn render_raw<W: Write>(out: &mut W, values: &[Value], ctx: &OutputCtx) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Compact => write_compact_json(out, values),
        OutputFormat::Ndjson => write_ndjson(out, values),
        _ => write_json(out, values),
    }
}

/// Write untyped JSON objects to stdout.
///
/// # Errors
///
/// Returns `io::Error` if stdout cannot be written.
pub fn write_raw(values: &[Value], ctx: &OutputCtx) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_raw(&mut out, values, ctx)?;
    out.flush()
}

fn write_transcript<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}. Question: {}", i + 1, record.question)?;
        writeln!(out, "   Réponse: {}", record.answer)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_records_table<W: Write>(out: &mut W, records: &[Record], ctx: &OutputCtx) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["#", "QUESTION", "RÉPONSE", "OPTIONNELLE"]);
    }
    for (i, record) in records.iter().enumerate() {
        table.add_row([
            Cell::new(i + 1),
            Cell::new(&record.question),
            Cell::new(&record.answer),
            Cell::new(if record.optional { "oui" } else { "" }),
        ]);
    }
    writeln!(out, "{table}")
}

// --- Fill summary ---

/// Write the `audit-fill` completion summary to stdout.
pub fn write_fill_summary(summary: &FillSummary, ctx: &OutputCtx) {
    if ctx.is_json() {
        print_json(summary);
        return;
    }
    println!(
        "Nettoyé et enregistré {} questions dans {} (backup: {})",
        summary.kept, summary.path, summary.backup
    );
    if let Some(updated) = summary.answers_updated {
        println!("{updated} réponse(s) modifiée(s)");
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Erreur: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{s}")
}

fn write_compact_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let s = serde_json::to_string(value)?;
    writeln!(out, "{s}")
}

fn write_ndjson<W: Write, T: Serialize>(out: &mut W, values: &[T]) -> io::Result<()> {
    for v in values {
        let s = serde_json::to_string(v)?;
        writeln!(out, "{s}")?;
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
