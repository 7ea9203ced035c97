// Alert engine - decides when a threshold crossing becomes a notification.

use std::collections::HashMap;

use log::{debug, info};

use super::model::{AlertPrefs, Notification, ThresholdLevel};
use crate::core::evaluator::TreatmentAge;
use crate::core::model::EpochMillis;

/// Minutes past an exact whole-day crossing during which a notification may
/// still fire. Evaluations outside this window stay silent.
pub const NOTIFY_WINDOW_MINUTES: i64 = 20;

/// Identity of a crossing: the treatment it was measured from and the day count
type Crossing = (EpochMillis, i64);

/// Alert engine state
pub struct AlertEngine {
    /// Threshold preferences
    prefs: AlertPrefs,
    /// Last crossing that fired per level, to keep it once-per-crossing
    fired: HashMap<ThresholdLevel, Crossing>,
}

impl AlertEngine {
    pub fn new(prefs: AlertPrefs) -> Self {
        Self {
            prefs,
            fired: HashMap::new(),
        }
    }

    /// Update the engine preferences (hot-reload friendly)
    pub fn update_prefs(&mut self, prefs: AlertPrefs) {
        self.prefs = prefs;
    }

    pub fn prefs(&self) -> &AlertPrefs {
        &self.prefs
    }

    /// Evaluate an age result against the thresholds.
    /// Returns a notification payload only when alerts are enabled, the age
    /// sits exactly on a whole-day threshold crossing inside the post-crossing
    /// window, and that crossing has not already fired.
    pub fn evaluate(&mut self, age: &TreatmentAge) -> Option<Notification> {
        if !self.prefs.enable_alerts || !age.found {
            return None;
        }
        let treatment_mills = age.treatment_mills?;

        // Exact whole-day crossing, inside the window
        if age.hours != 0 || age.min_fractions > NOTIFY_WINDOW_MINUTES {
            return None;
        }

        let level = self.crossed_level(age.days)?;

        let crossing = (treatment_mills, age.days);
        if self.fired.get(&level) == Some(&crossing) {
            debug!("crossing at {} days already notified", age.days);
            return None;
        }
        self.fired.insert(level, crossing);

        info!(
            "treatment age reached {} days ({})",
            age.days,
            level.display_name()
        );

        let mut message = format!("Last treatment was {} ago", age.display);
        if let Some(notes) = age.notes.as_deref().filter(|n| !n.is_empty()) {
            message.push_str(&format!(" ({notes})"));
        }

        Some(Notification {
            level,
            title: format!("Treatment age {} days", age.days),
            message,
            days: age.days,
            treatment_mills,
        })
    }

    /// Which threshold an age in whole days sits exactly on, if any.
    /// Tied thresholds resolve to the highest tier.
    fn crossed_level(&self, days: i64) -> Option<ThresholdLevel> {
        for (level, threshold_days) in self.prefs.crossings() {
            if days == i64::from(threshold_days) {
                return Some(level);
            }
        }
        None
    }
}
