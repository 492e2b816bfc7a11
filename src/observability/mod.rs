//! Observability: structured logging and lifecycle events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on validation
//! 3. No async or background threads
//! 4. Deterministic output

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else if event == Event::ValidationRejected || event == Event::InputMalformed {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
