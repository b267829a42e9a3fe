/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Exit status for command-line usage errors (`EX_USAGE`), kept apart from
/// the "file not found" status.
pub const USAGE_EXIT_CODE: i32 = 64;

/// Parse `C` from the process arguments, exiting with [`USAGE_EXIT_CODE`] on
/// a usage error instead of clap's default status.
#[must_use]
pub fn parse_or_exit<C: Parser>() -> C {
    match C::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { USAGE_EXIT_CODE } else { 0 });
        }
    }
}

/// audit-fill — deduplicate the question file and optionally fill answers.
#[derive(Debug, Parser)]
#[command(
    name = "audit-fill",
    about = "Deduplicate audit questions and optionally fill answers (creates a .bak backup)",
    version
)]
pub struct FillCli {
    /// Remove duplicate questions and save (creates backup).
    #[arg(long)]
    pub dedupe_only: bool,

    /// Ask each question and optionally fill answers.
    /// Takes effect even when combined with --dedupe-only.
    #[arg(long)]
    pub interactive: bool,

    /// Question file to process. Defaults to audit1_questions.json next to the executable.
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Print the run summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

impl FillCli {
    /// Whether the interactive pass runs. `--interactive` always wins.
    #[must_use]
    pub fn wants_interactive(&self) -> bool {
        self.interactive
    }
}

/// audit-qna — print the question file.
///
/// There is no `--help`/`--version`: every argument other than the output
/// flags falls through to `rest` and yields the transcript.
#[derive(Debug, Parser)]
#[command(
    name = "audit-qna",
    about = "Print the audit questions and answers",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct QnaCli {
    /// Shorthand for --output json.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "transcript")]
    pub output: OutputFormat,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long)]
    pub no_header: bool,

    /// Question file to print. Defaults to audit1_questions.json next to the executable.
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Print stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,

    /// Anything else is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Output format variants for `audit-qna`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Numbered question/answer blocks (human-readable).
    #[default]
    Transcript,
    /// JSON array (pretty-printed, two-space indent).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one record per line).
    Ndjson,
    /// Aligned table with headers.
    Table,
}
