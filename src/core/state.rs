use super::model::TreatmentEvent;

/// Owned store of treatment events, sorted lazily by timestamp.
pub struct TreatmentLog {
    events: Vec<TreatmentEvent>,
    sorted: bool,
}

impl TreatmentLog {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            sorted: true,
        }
    }

    pub fn push_event(&mut self, event: TreatmentEvent) {
        self.events.push(event);
        self.sorted = false;
    }

    /// Replace the whole event list, e.g. when the host hands over a fresh
    /// data context on each tick.
    pub fn replace_events(&mut self, events: Vec<TreatmentEvent>) {
        self.events = events;
        self.sorted = false;
    }

    pub fn events(&mut self) -> &[TreatmentEvent] {
        if !self.sorted {
            self.events.sort_by_key(|event| event.mills);
            self.sorted = true;
        }
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for TreatmentLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_sorted_lazily() {
        let mut log = TreatmentLog::new();
        log.push_event(TreatmentEvent::new(300));
        log.push_event(TreatmentEvent::new(100));
        log.push_event(TreatmentEvent::new(200));

        let mills: Vec<i64> = log.events().iter().map(|e| e.mills).collect();
        assert_eq!(mills, vec![100, 200, 300]);
    }

    #[test]
    fn test_replace_events() {
        let mut log = TreatmentLog::new();
        log.push_event(TreatmentEvent::new(100));

        log.replace_events(vec![TreatmentEvent::new(500)]);
        assert_eq!(log.events().len(), 1);
        assert_eq!(log.events()[0].mills, 500);
    }
}
