// Treatment-age evaluation - selects the most recent qualifying treatment
// event at or before a reference time and computes its elapsed age.

use chrono::DateTime;
use log::debug;

use super::alerts::model::{AlertPrefs, ThresholdLevel};
use super::model::{EpochMillis, TreatmentEvent};

/// Result of a treatment-age evaluation. Recomputed fresh on every call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreatmentAge {
    /// Whether any event qualified (at or before the reference time)
    pub found: bool,
    /// Timestamp of the winning event
    pub treatment_mills: Option<EpochMillis>,
    /// Total elapsed whole hours since the winning event
    pub age_hours: i64,
    /// Elapsed whole days
    pub days: i64,
    /// Hours past the last whole day (0..24)
    pub hours: i64,
    /// Minutes past the last whole hour (0..60)
    pub min_fractions: i64,
    /// Note carried on the winning event
    pub notes: Option<String>,
    /// Pill value string, e.g. "2d5h" or "17h"
    pub display: String,
    /// Severity tier for the current age
    pub level: ThresholdLevel,
}

/// Scan events for the most recent one at or before `reference_mills` and
/// compute its age. Ties resolve to the smallest non-negative age, i.e. the
/// latest qualifying event. No qualifying event yields `found = false`.
pub fn find_latest_change(
    reference_mills: EpochMillis,
    events: &[TreatmentEvent],
    prefs: &AlertPrefs,
) -> TreatmentAge {
    let mut info = TreatmentAge::default();
    let mut prev_mills: EpochMillis = 0;

    for event in events {
        if event.mills <= prev_mills || event.mills > reference_mills {
            continue;
        }
        prev_mills = event.mills;

        let (Some(reference), Some(treated)) = (
            DateTime::from_timestamp_millis(reference_mills),
            DateTime::from_timestamp_millis(event.mills),
        ) else {
            continue;
        };

        let elapsed = reference - treated;
        let age_hours = elapsed.num_hours();

        if info.found && !(age_hours >= 0 && age_hours < info.age_hours) {
            continue;
        }

        info.found = true;
        info.treatment_mills = Some(event.mills);
        info.age_hours = age_hours;
        info.days = elapsed.num_days();
        info.hours = age_hours - info.days * 24;
        info.min_fractions = elapsed.num_minutes() - age_hours * 60;
        info.notes = event.notes.clone();
        info.display = format_age(info.days, info.hours, age_hours);
    }

    if info.found {
        info.level = ThresholdLevel::classify(info.days, prefs);
    } else {
        debug!("no qualifying treatment event at or before {reference_mills}");
    }

    info
}

/// Format an age as "<days>d<hours>h", dropping the day segment under 24h
fn format_age(days: i64, hours: i64, age_hours: i64) -> String {
    let mut display = String::new();
    if age_hours >= 24 {
        display.push_str(&format!("{days}d"));
    }
    display.push_str(&format!("{hours}h"));
    display
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: EpochMillis = 60_000;
    const HOUR: EpochMillis = 60 * MINUTE;
    const DAY: EpochMillis = 24 * HOUR;
    const REFERENCE: EpochMillis = 1_700_000_000_000;

    fn make_event(mills: EpochMillis) -> TreatmentEvent {
        TreatmentEvent::new(mills)
    }

    #[test]
    fn test_no_events_not_found() {
        let age = find_latest_change(REFERENCE, &[], &AlertPrefs::default());
        assert!(!age.found);
        assert_eq!(age.age_hours, 0);
        assert_eq!(age.level, ThresholdLevel::None);
        assert_eq!(age.treatment_mills, None);
    }

    #[test]
    fn test_future_events_ignored() {
        let events = vec![make_event(REFERENCE + HOUR)];
        let age = find_latest_change(REFERENCE, &events, &AlertPrefs::default());
        assert!(!age.found);
        assert_eq!(age.age_hours, 0);
    }

    #[test]
    fn test_single_event_age_and_display() {
        let events = vec![make_event(REFERENCE - 2 * DAY - 5 * HOUR - 30 * MINUTE)];
        let age = find_latest_change(REFERENCE, &events, &AlertPrefs::default());

        assert!(age.found);
        assert_eq!(age.days, 2);
        assert_eq!(age.hours, 5);
        assert_eq!(age.age_hours, 53);
        assert_eq!(age.min_fractions, 30);
        assert_eq!(age.display, "2d5h");
        assert_eq!(age.level, ThresholdLevel::None);
    }

    #[test]
    fn test_display_under_a_day_omits_day_segment() {
        let events = vec![make_event(REFERENCE - 17 * HOUR)];
        let age = find_latest_change(REFERENCE, &events, &AlertPrefs::default());
        assert_eq!(age.display, "17h");
    }

    #[test]
    fn test_event_exactly_at_reference_qualifies() {
        let events = vec![make_event(REFERENCE)];
        let age = find_latest_change(REFERENCE, &events, &AlertPrefs::default());
        assert!(age.found);
        assert_eq!(age.age_hours, 0);
        assert_eq!(age.display, "0h");
    }

    #[test]
    fn test_most_recent_qualifying_event_wins() {
        let events = vec![
            make_event(REFERENCE - 30 * DAY),
            make_event(REFERENCE - 3 * DAY),
            make_event(REFERENCE - 10 * DAY),
            make_event(REFERENCE + DAY),
        ];
        let age = find_latest_change(REFERENCE, &events, &AlertPrefs::default());

        assert!(age.found);
        assert_eq!(age.treatment_mills, Some(REFERENCE - 3 * DAY));
        assert_eq!(age.days, 3);
    }

    #[test]
    fn test_level_follows_thresholds() {
        let prefs = AlertPrefs::default();

        let age = find_latest_change(REFERENCE, &[make_event(REFERENCE - 14 * DAY)], &prefs);
        assert_eq!(age.level, ThresholdLevel::Info);

        let age = find_latest_change(REFERENCE, &[make_event(REFERENCE - 22 * DAY)], &prefs);
        assert_eq!(age.level, ThresholdLevel::Warn);

        let age = find_latest_change(REFERENCE, &[make_event(REFERENCE - 40 * DAY)], &prefs);
        assert_eq!(age.level, ThresholdLevel::Urgent);
    }

    #[test]
    fn test_notes_carried_from_winning_event() {
        let events = vec![
            TreatmentEvent::with_notes(REFERENCE - 10 * DAY, "old course"),
            TreatmentEvent::with_notes(REFERENCE - DAY, "new course"),
        ];
        let age = find_latest_change(REFERENCE, &events, &AlertPrefs::default());
        assert_eq!(age.notes.as_deref(), Some("new course"));
    }
}
