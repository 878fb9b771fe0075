use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::ModelError;

/// Sentiment classification of a performance note.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    Positive,
    Negative,
    Neutral,
}

impl NoteType {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for NoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(ModelError::UnknownNoteType(other.to_string())),
        }
    }
}

/// A performance note as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier for the note.
    pub id: i64,

    /// The employee the note is about.
    pub employee_id: i64,

    /// Display name of that employee.
    pub employee_name: String,

    /// The note body.
    pub note: String,

    /// Sentiment classification.
    pub note_type: NoteType,

    /// When the note was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Payload for recording a new performance note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateNoteRequest {
    /// The employee the note is about.
    pub employee_id: i64,

    /// The note body.
    pub note: String,

    /// Sentiment classification.
    pub note_type: NoteType,
}

/// An employee entry for the notes-view filter dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i64,

    /// Display name.
    pub name: String,
}

/// Client-side filter applied to a fetched note list.
///
/// One filter serves every role's notes view; the backend already scopes the
/// list to what the caller may see, so filtering here is purely cosmetic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteFilter {
    /// Restrict to a single employee.
    pub employee_id: Option<i64>,

    /// Restrict to notes recorded in this calendar year.
    pub year: Option<i32>,

    /// Case-insensitive free-text match against the employee name, note
    /// body, and employee id. Empty means no text restriction.
    pub search: String,
}

impl NoteFilter {
    /// Whether a note passes every active restriction.
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        let by_employee = self.employee_id.is_none_or(|id| note.employee_id == id);
        let by_year = self.year.is_none_or(|year| note.timestamp.year() == year);
        let by_text = self.search.is_empty() || {
            let haystack = format!(
                "{} {} {}",
                note.employee_name, note.note, note.employee_id
            )
            .to_lowercase();
            haystack.contains(&self.search.to_lowercase())
        };

        by_employee && by_year && by_text
    }

    /// Apply the filter to a fetched list, preserving order.
    #[must_use]
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        notes
            .iter()
            .filter(|note| self.matches(note))
            .cloned()
            .collect()
    }
}
