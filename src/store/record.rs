/// The single persisted entity: one question with its answer.
use serde::{Deserialize, Deserializer, Serialize};

/// A question/answer entry of the audit file.
///
/// Field order here is the key order written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Question text. Stored trimmed once the file has been deduplicated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    /// Answer text; empty means unanswered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    /// Whether the question may be left unanswered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub optional: bool,
}

impl Record {
    /// Construct a record from its three fields.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>, optional: bool) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            optional,
        }
    }

    /// Whether the record still needs an answer.
    #[must_use]
    pub fn is_unanswered(&self) -> bool {
        self.answer.is_empty()
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
