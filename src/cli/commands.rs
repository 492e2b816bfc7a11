//! CLI command implementations

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::basic::XCorrelator;
use crate::catalog::TypeKind;
use crate::error::{ErrorCode, ErrorFactory, ErrorInfo};
use crate::observability::{log_event, Event, Severity};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{parse_document, read_input, write_error, write_json, write_response};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum log severity (optional, default "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print JSON output (optional, default false)
    #[serde(default)]
    pub pretty: bool,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CliResult<()> {
        self.severity().map(|_| ())
    }

    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}

/// A document that failed validation, with the envelope to report it
#[derive(Debug)]
pub struct Rejection {
    pub error: CliError,
    pub info: ErrorInfo,
}

/// Parse and validate `text` as `kind`, returning its canonical JSON.
pub fn evaluate(kind: TypeKind, text: &str) -> Result<Value, Rejection> {
    let document = parse_document(text).map_err(|error| {
        log_event(Event::InputMalformed, &[("kind", kind.as_str()), ("reason", error.message())]);
        Rejection {
            info: ErrorFactory::invalid_argument(Some(error.message())),
            error,
        }
    })?;

    match kind.validate(document) {
        Ok(canonical) => {
            log_event(Event::ValidationPassed, &[("kind", kind.as_str())]);
            Ok(canonical)
        }
        Err(e) => {
            let reason = e.to_string();
            log_event(
                Event::ValidationRejected,
                &[("kind", kind.as_str()), ("reason", reason.as_str())],
            );
            Err(Rejection {
                info: ErrorFactory::invalid_argument(Some(&reason)),
                error: CliError::rejected(reason),
            })
        }
    }
}

/// Run a CLI command
pub fn run_command(command: Command, config: &Config) -> CliResult<()> {
    match command {
        Command::Validate { kind, input } => validate(kind, input.as_deref(), config),
        Command::Error { code, message } => error(code, message.as_deref(), config),
        Command::Describe { kind } => describe(kind, config),
        Command::Correlator => correlator(),
    }
}

/// Validate a document and report the outcome on stdout
pub fn validate(kind: TypeKind, input: Option<&Path>, config: &Config) -> CliResult<()> {
    let text = read_input(input)?;
    let bytes = text.len().to_string();
    log_event(Event::InputRead, &[("bytes", bytes.as_str()), ("kind", kind.as_str())]);

    match evaluate(kind, &text) {
        Ok(canonical) => write_response(canonical, config.pretty),
        Err(rejection) => {
            write_error(&rejection.info, config.pretty)?;
            Err(rejection.error)
        }
    }
}

/// Print the factory envelope for `code`
pub fn error(code: ErrorCode, message: Option<&str>, config: &Config) -> CliResult<()> {
    let info = ErrorFactory::for_code(code, message);
    let status = info.status_code().to_string();
    log_event(Event::ErrorRendered, &[("code", code.as_str()), ("status", status.as_str())]);
    write_json(&info, config.pretty)
}

/// Print the documentation of `kind`
pub fn describe(kind: TypeKind, config: &Config) -> CliResult<()> {
    write_json(&kind.doc(), config.pretty)
}

pub fn correlator() -> CliResult<()> {
    println!("{}", XCorrelator::generate());
    Ok(())
}
