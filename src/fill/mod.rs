/// Interactive answer filling: one blocking prompt per record.
use std::io::{self, BufRead, Write};

use crate::store::Record;

/// Shown in place of an empty answer.
pub const EMPTY_ANSWER_PLACEHOLDER: &str = "<vide>";

/// How an interactive pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Every record was presented; `updated` answers were replaced.
    Completed {
        /// Number of records whose answer changed.
        updated: usize,
    },
    /// Input ended before every record was presented. Nothing must be saved.
    Cancelled,
}

/// Walk `records` front to back, prompting on `output` and reading one line
/// of `input` per record. A line that is non-empty after trimming replaces the
/// answer; an empty line keeps it.
///
/// On end of input the pass stops and returns [`FillOutcome::Cancelled`];
/// answers already replaced in `records` are left in place, and callers must
/// discard the collection rather than save it.
///
/// # Errors
///
/// Returns `io::Error` if writing a prompt or reading a line fails.
pub fn fill_interactively<R, W>(
    records: &mut [Record],
    input: &mut R,
    output: &mut W,
) -> io::Result<FillOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut updated = 0;
    let mut line = String::new();

    for record in records.iter_mut() {
        let current = if record.answer.is_empty() {
            EMPTY_ANSWER_PLACEHOLDER
        } else {
            record.answer.as_str()
        };
        writeln!(output, "\nQuestion: {}", record.question)?;
        writeln!(output, "Réponse actuelle: {current}")?;
        write!(output, "Nouvelle réponse (ENTER pour garder): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(FillOutcome::Cancelled);
        }
        let answer = line.trim();
        if !answer.is_empty() {
            answer.clone_into(&mut record.answer);
            updated += 1;
        }
    }

    Ok(FillOutcome::Completed { updated })
}
