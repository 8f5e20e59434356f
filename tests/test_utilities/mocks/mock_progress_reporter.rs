use dep_report::prelude::*;
use std::sync::{Arc, Mutex};

/// One captured call on the progress port
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Message(String),
    Lookup {
        current: usize,
        total: usize,
        reference: String,
    },
    Warning(String),
    Completion(String),
}

/// Mock ProgressReporter recording every event in call order
///
/// Clones share the same event log, so a test can keep one handle while the
/// use case owns the other.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Plain, warning and completion messages, without lookup ticks
    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Message(m)
                | ProgressEvent::Warning(m)
                | ProgressEvent::Completion(m) => Some(m),
                ProgressEvent::Lookup { .. } => None,
            })
            .collect()
    }

    /// `(current, total, name@version)` for every completed lookup
    pub fn lookups(&self) -> Vec<(usize, usize, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Lookup {
                    current,
                    total,
                    reference,
                } => Some((current, total, reference)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(ProgressEvent::Lookup {
            current,
            total,
            reference: message.unwrap_or_default().to_string(),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ProgressEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ProgressEvent::Completion(message.to_string()));
    }
}
