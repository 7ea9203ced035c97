// Pill snapshot - the render-facing view of an age result. The host
// dashboard draws it; nothing here touches a UI toolkit.

use chrono::DateTime;
use serde::Serialize;

use super::evaluator::TreatmentAge;

/// Short label shown on the treatment-age pill
pub const PILL_LABEL: &str = "TAGE";

/// One label/value row in the pill's hover detail
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

/// Everything the host needs to draw the status pill
#[derive(Clone, Debug, Serialize)]
pub struct PillSnapshot {
    pub label: &'static str,
    pub value: String,
    pub info: Vec<InfoRow>,
    /// CSS class for the severity tint, if any
    pub status_class: Option<&'static str>,
}

impl PillSnapshot {
    pub fn from_age(age: &TreatmentAge) -> Self {
        let mut info = Vec::new();

        if let Some(changed) = age
            .treatment_mills
            .and_then(DateTime::from_timestamp_millis)
        {
            info.push(InfoRow {
                label: "Changed".to_string(),
                value: changed.format("%Y-%m-%d %H:%M").to_string(),
            });
        }
        if let Some(notes) = age.notes.as_deref().filter(|n| !n.is_empty()) {
            info.push(InfoRow {
                label: "Notes".to_string(),
                value: notes.to_string(),
            });
        }

        let value = if age.found {
            age.display.clone()
        } else {
            "n/a".to_string()
        };

        Self {
            label: PILL_LABEL,
            value,
            info,
            status_class: age.level.status_class(),
        }
    }
}
