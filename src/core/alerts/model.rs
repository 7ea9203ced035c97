// Alert model types for threshold preferences and notification payloads.

use serde::{Deserialize, Serialize};

use crate::core::model::EpochMillis;

/// Severity tier for the treatment-age pill
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ThresholdLevel {
    #[default]
    None,
    Info,
    Warn,
    Urgent,
}

impl ThresholdLevel {
    /// Get the display name for this level
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "OK",
            Self::Info => "Info",
            Self::Warn => "Warning",
            Self::Urgent => "Urgent",
        }
    }

    /// CSS class the dashboard applies to the pill, if any
    pub fn status_class(&self) -> Option<&'static str> {
        match self {
            Self::None | Self::Info => None,
            Self::Warn => Some("warn"),
            Self::Urgent => Some("urgent"),
        }
    }

    /// Classify an age in whole days against the configured thresholds.
    /// The highest threshold at or below the age wins (urgent > warn > info).
    pub fn classify(age_days: i64, prefs: &AlertPrefs) -> Self {
        for (level, threshold_days) in prefs.crossings() {
            if age_days >= i64::from(threshold_days) {
                return level;
            }
        }
        Self::None
    }
}

/// Threshold preferences supplied per evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPrefs {
    /// Age in days at which the pill turns informational
    #[serde(default = "default_info_days")]
    pub info_days: u32,
    /// Age in days at which the pill warns
    #[serde(default = "default_warn_days")]
    pub warn_days: u32,
    /// Age in days at which the pill is urgent
    #[serde(default = "default_urgent_days")]
    pub urgent_days: u32,
    /// Whether threshold crossings emit notifications
    #[serde(default)]
    pub enable_alerts: bool,
}

fn default_info_days() -> u32 {
    14
}

fn default_warn_days() -> u32 {
    21
}

fn default_urgent_days() -> u32 {
    28
}

impl Default for AlertPrefs {
    fn default() -> Self {
        Self {
            info_days: default_info_days(),
            warn_days: default_warn_days(),
            urgent_days: default_urgent_days(),
            enable_alerts: false,
        }
    }
}

impl AlertPrefs {
    /// Create prefs with notifications enabled at default thresholds
    pub fn default_enabled() -> Self {
        Self {
            enable_alerts: true,
            ..Self::default()
        }
    }

    /// Threshold checks ordered so the highest tier wins on ties
    pub fn crossings(&self) -> [(ThresholdLevel, u32); 3] {
        [
            (ThresholdLevel::Urgent, self.urgent_days),
            (ThresholdLevel::Warn, self.warn_days),
            (ThresholdLevel::Info, self.info_days),
        ]
    }
}

/// Notification payload handed to the host delivery mechanism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: ThresholdLevel,
    pub title: String,
    pub message: String,
    /// Whole-day count at the crossing that fired
    pub days: i64,
    /// Timestamp of the treatment event the age was measured from
    pub treatment_mills: EpochMillis,
}
