//! Observable filter events

use std::fmt;

use super::logger::Severity;

/// Events emitted while building filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A filter was built from field matches or raw text
    FilterBuilt,
    /// Filters were combined with AND/OR
    FilterCombined,
    /// A filter request was rejected
    FilterRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::FilterBuilt => "FILTER_BUILT",
            Event::FilterCombined => "FILTER_COMBINED",
            Event::FilterRejected => "FILTER_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::FilterBuilt | Event::FilterCombined => Severity::Trace,
            Event::FilterRejected => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
