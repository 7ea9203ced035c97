use serde::{Deserialize, Serialize};

pub type EpochMillis = i64;

/// A treatment event supplied by the host data context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentEvent {
    /// Event timestamp in epoch milliseconds
    pub mills: EpochMillis,
    /// Optional free-text note entered alongside the treatment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TreatmentEvent {
    pub fn new(mills: EpochMillis) -> Self {
        Self { mills, notes: None }
    }

    pub fn with_notes(mills: EpochMillis, notes: impl Into<String>) -> Self {
        Self {
            mills,
            notes: Some(notes.into()),
        }
    }
}
