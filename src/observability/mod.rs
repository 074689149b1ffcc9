//! Observability for filter construction
//!
//! Structured JSON logging with typed events. Logging has no effect on the
//! filters produced and never returns an error. Whether an event is written
//! at all is decided by the caller's [`FilterConfig`](crate::FilterConfig).
//!
//! ```ignore
//! use vmfilter::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::FilterBuilt, &[("fields", "1")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

