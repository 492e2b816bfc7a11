//! CLI-specific error types

use std::io;

use thiserror::Error;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (input file, stdin, stdout)
    IoError,
    /// Input is not well-formed JSON
    MalformedInput,
    /// Input parsed but failed validation
    Rejected,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CAMARA_CLI_CONFIG_ERROR",
            Self::IoError => "CAMARA_CLI_IO_ERROR",
            Self::MalformedInput => "CAMARA_CLI_MALFORMED_INPUT",
            Self::Rejected => "CAMARA_CLI_REJECTED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
#[error("{}: {message}", .code.code())]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::MalformedInput, msg)
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Rejected, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
