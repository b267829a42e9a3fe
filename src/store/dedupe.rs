/// Fold records whose questions differ only by case or spacing.
///
/// Two records are the same question when their normalization keys match:
/// lowercase, whitespace runs collapsed to one space, trimmed. The first
/// record seen for a key keeps its position; later duplicates only feed it
/// an answer (when it has none) and their `optional` flag (logical OR).
use std::collections::HashMap;

use super::record::Record;

/// Counters produced by [`dedupe_with_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupeStats {
    /// Records in the input.
    pub input: usize,
    /// Records in the output.
    pub kept: usize,
    /// Duplicates folded into an earlier record.
    pub merged: usize,
    /// Records dropped because their question is blank.
    pub discarded: usize,
}

/// Compute the normalization key of a question.
#[must_use]
pub fn normalize_question(question: &str) -> String {
    question
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deduplicate `records`, preserving first-seen order.
#[must_use]
pub fn dedupe(records: Vec<Record>) -> Vec<Record> {
    dedupe_with_stats(records).0
}

/// Deduplicate `records` and report what happened.
///
/// Kept records have their question trimmed. When both the kept record and a
/// duplicate carry a non-empty answer, the kept answer wins.
#[must_use]
pub fn dedupe_with_stats(records: Vec<Record>) -> (Vec<Record>, DedupeStats) {
    let mut stats = DedupeStats {
        input: records.len(),
        ..DedupeStats::default()
    };
    let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut out: Vec<Record> = Vec::with_capacity(records.len());

    for record in records {
        let key = normalize_question(&record.question);
        if key.is_empty() {
            stats.discarded += 1;
            continue;
        }
        if let Some(&pos) = index.get(&key) {
            merge_into(&mut out[pos], record);
            stats.merged += 1;
        } else {
            index.insert(key, out.len());
            out.push(Record {
                question: record.question.trim().to_owned(),
                ..record
            });
        }
    }

    stats.kept = out.len();
    (out, stats)
}

fn merge_into(kept: &mut Record, dup: Record) {
    if kept.answer.is_empty() && !dup.answer.is_empty() {
        kept.answer = dup.answer;
    }
    kept.optional |= dup.optional;
}
