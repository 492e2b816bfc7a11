//! The error envelope

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::codes::{ErrorCode, ErrorStatus};
use crate::docs::{Documented, FieldDoc};
use crate::validation::{ValidationError, ValidationResult};

/// Error information returned in API response bodies.
///
/// The status is implied by the code, so an `ErrorInfo` can never pair a
/// code with a status outside its closed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{} {}: {}", .code.status().as_u16(), .code, .message)]
#[serde(try_from = "ErrorInfoFields", into = "ErrorInfoFields")]
pub struct ErrorInfo {
    code: ErrorCode,
    message: String,
}

#[derive(Serialize, Deserialize)]
struct ErrorInfoFields {
    status: u16,
    code: String,
    message: String,
}

impl ErrorInfo {
    /// Builds from raw parts, rejecting unknown statuses, unknown codes and
    /// codes outside the status' set.
    pub fn new(status: u16, code: &str, message: impl Into<String>) -> ValidationResult<Self> {
        let status = ErrorStatus::try_from(status)?;
        let code: ErrorCode = code.parse()?;

        if !status.allows(code) {
            return Err(ValidationError::unknown_value(
                "code",
                format!("{} (not allowed with status {})", code, status.as_u16()),
            ));
        }

        Ok(Self {
            code,
            message: message.into(),
        })
    }

    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Uses the code's default message
    pub fn with_default_message(code: ErrorCode) -> Self {
        Self::from_code(code, code.default_message())
    }

    pub fn status(&self) -> ErrorStatus {
        self.code.status()
    }

    /// Numeric HTTP status
    pub fn status_code(&self) -> u16 {
        self.code.status().as_u16()
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<ErrorInfoFields> for ErrorInfo {
    type Error = ValidationError;

    fn try_from(fields: ErrorInfoFields) -> ValidationResult<Self> {
        Self::new(fields.status, &fields.code, fields.message)
    }
}

impl From<ErrorInfo> for ErrorInfoFields {
    fn from(info: ErrorInfo) -> Self {
        Self {
            status: info.status_code(),
            code: info.code.as_str().to_string(),
            message: info.message,
        }
    }
}

impl Documented for ErrorInfo {
    const NAME: &'static str = "ErrorInfo";

    fn description() -> &'static str {
        "Error information structure for API responses"
    }

    fn fields() -> &'static [FieldDoc] {
        const FIELDS: &[FieldDoc] = &[
            FieldDoc::required("status", "HTTP response status code"),
            FieldDoc::required("code", "A human-readable code to describe the error"),
            FieldDoc::required(
                "message",
                "A human-readable description of what the event represents",
            ),
        ];
        FIELDS
    }

    fn example() -> Value {
        json!({
            "status": 400,
            "code": "INVALID_ARGUMENT",
            "message": "Client specified an invalid argument, request body or query param."
        })
    }
}
