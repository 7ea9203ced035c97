use log::debug;

use super::alerts::engine::AlertEngine;
use super::alerts::model::{AlertPrefs, Notification};
use super::evaluator::{self, TreatmentAge};
use super::model::{EpochMillis, TreatmentEvent};
use super::pill::PillSnapshot;
use super::state::TreatmentLog;

/// Everything one evaluation produces for the host sinks
pub struct TickOutput {
    pub age: TreatmentAge,
    pub pill: PillSnapshot,
    pub notification: Option<Notification>,
}

/// Ties the event log, the evaluator and the alert engine together.
/// The host calls `tick` with its current clock and forwards the output to
/// its property sink, pill renderer and notification delivery.
pub struct Coordinator {
    log: TreatmentLog,
    engine: AlertEngine,
}

impl Coordinator {
    pub fn new(prefs: AlertPrefs) -> Self {
        Self {
            log: TreatmentLog::new(),
            engine: AlertEngine::new(prefs),
        }
    }

    pub fn push_event(&mut self, event: TreatmentEvent) {
        self.log.push_event(event);
    }

    pub fn replace_events(&mut self, events: Vec<TreatmentEvent>) {
        self.log.replace_events(events);
    }

    /// Hot-reload preferences from host settings
    pub fn update_prefs(&mut self, prefs: AlertPrefs) {
        self.engine.update_prefs(prefs);
    }

    pub fn tick(&mut self, reference_mills: EpochMillis) -> TickOutput {
        let age =
            evaluator::find_latest_change(reference_mills, self.log.events(), self.engine.prefs());
        debug!(
            "tick at {reference_mills}: found={} age={} level={}",
            age.found,
            age.display,
            age.level.display_name()
        );

        let notification = self.engine.evaluate(&age);
        let pill = PillSnapshot::from_age(&age);

        TickOutput {
            age,
            pill,
            notification,
        }
    }
}
