//! Observable events
//!
//! Events are explicit and typed. The data types themselves never log;
//! these cover the `camara` tool's lifecycle.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Input document read
    InputRead,
    /// Document accepted
    ValidationPassed,
    /// Document rejected by a validation rule
    ValidationRejected,
    /// Input could not be parsed as JSON
    InputMalformed,
    /// Error envelope produced
    ErrorRendered,
    /// Unrecoverable failure
    CommandFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InputRead => "INPUT_READ",
            Event::ValidationPassed => "VALIDATION_PASSED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::InputMalformed => "INPUT_MALFORMED",
            Event::ErrorRendered => "ERROR_RENDERED",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::CommandFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
