//! HTTP statuses and their closed sets of error codes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationResult};

/// The HTTP statuses an error envelope may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorStatus {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    UnprocessableContent,
    TooManyRequests,
    InternalServerError,
    ServiceUnavailable,
}

impl ErrorStatus {
    pub const ALL: [ErrorStatus; 8] = [
        ErrorStatus::BadRequest,
        ErrorStatus::Unauthorized,
        ErrorStatus::Forbidden,
        ErrorStatus::NotFound,
        ErrorStatus::UnprocessableContent,
        ErrorStatus::TooManyRequests,
        ErrorStatus::InternalServerError,
        ErrorStatus::ServiceUnavailable,
    ];

    pub fn as_u16(&self) -> u16 {
        match self {
            ErrorStatus::BadRequest => 400,
            ErrorStatus::Unauthorized => 401,
            ErrorStatus::Forbidden => 403,
            ErrorStatus::NotFound => 404,
            ErrorStatus::UnprocessableContent => 422,
            ErrorStatus::TooManyRequests => 429,
            ErrorStatus::InternalServerError => 500,
            ErrorStatus::ServiceUnavailable => 503,
        }
    }

    pub fn from_u16(status: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_u16() == status)
    }

    /// Standard reason phrase
    pub fn reason(&self) -> &'static str {
        match self {
            ErrorStatus::BadRequest => "Bad Request",
            ErrorStatus::Unauthorized => "Unauthorized",
            ErrorStatus::Forbidden => "Forbidden",
            ErrorStatus::NotFound => "Not Found",
            ErrorStatus::UnprocessableContent => "Unprocessable Content",
            ErrorStatus::TooManyRequests => "Too Many Requests",
            ErrorStatus::InternalServerError => "Internal Server Error",
            ErrorStatus::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// The closed set of codes allowed with this status
    pub fn codes(&self) -> &'static [ErrorCode] {
        match self {
            ErrorStatus::BadRequest => &[ErrorCode::InvalidArgument, ErrorCode::OutOfRange],
            ErrorStatus::Unauthorized => &[ErrorCode::Unauthenticated],
            ErrorStatus::Forbidden => {
                &[ErrorCode::PermissionDenied, ErrorCode::InvalidTokenContext]
            }
            ErrorStatus::NotFound => &[ErrorCode::NotFound, ErrorCode::IdentifierNotFound],
            ErrorStatus::UnprocessableContent => &[
                ErrorCode::ServiceNotApplicable,
                ErrorCode::MissingIdentifier,
                ErrorCode::UnsupportedIdentifier,
                ErrorCode::UnnecessaryIdentifier,
            ],
            ErrorStatus::TooManyRequests => &[ErrorCode::QuotaExceeded, ErrorCode::TooManyRequests],
            ErrorStatus::InternalServerError => &[ErrorCode::Internal],
            ErrorStatus::ServiceUnavailable => &[ErrorCode::Unavailable],
        }
    }

    pub fn allows(&self, code: ErrorCode) -> bool {
        self.codes().contains(&code)
    }
}

impl TryFrom<u16> for ErrorStatus {
    type Error = ValidationError;

    fn try_from(status: u16) -> ValidationResult<Self> {
        Self::from_u16(status).ok_or_else(|| ValidationError::unknown_value("status", status))
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    OutOfRange,
    Unauthenticated,
    PermissionDenied,
    InvalidTokenContext,
    NotFound,
    IdentifierNotFound,
    ServiceNotApplicable,
    MissingIdentifier,
    UnsupportedIdentifier,
    UnnecessaryIdentifier,
    QuotaExceeded,
    TooManyRequests,
    Internal,
    Unavailable,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 15] = [
        ErrorCode::InvalidArgument,
        ErrorCode::OutOfRange,
        ErrorCode::Unauthenticated,
        ErrorCode::PermissionDenied,
        ErrorCode::InvalidTokenContext,
        ErrorCode::NotFound,
        ErrorCode::IdentifierNotFound,
        ErrorCode::ServiceNotApplicable,
        ErrorCode::MissingIdentifier,
        ErrorCode::UnsupportedIdentifier,
        ErrorCode::UnnecessaryIdentifier,
        ErrorCode::QuotaExceeded,
        ErrorCode::TooManyRequests,
        ErrorCode::Internal,
        ErrorCode::Unavailable,
    ];

    /// Returns the wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ErrorCode::InvalidTokenContext => "INVALID_TOKEN_CONTEXT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::IdentifierNotFound => "IDENTIFIER_NOT_FOUND",
            ErrorCode::ServiceNotApplicable => "SERVICE_NOT_APPLICABLE",
            ErrorCode::MissingIdentifier => "MISSING_IDENTIFIER",
            ErrorCode::UnsupportedIdentifier => "UNSUPPORTED_IDENTIFIER",
            ErrorCode::UnnecessaryIdentifier => "UNNECESSARY_IDENTIFIER",
            ErrorCode::QuotaExceeded => "QUOTA_EXCEEDED",
            ErrorCode::TooManyRequests => "TOO_MANY_REQUESTS",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::Unavailable => "UNAVAILABLE",
        }
    }

    /// The status this code belongs to
    pub fn status(&self) -> ErrorStatus {
        match self {
            ErrorCode::InvalidArgument | ErrorCode::OutOfRange => ErrorStatus::BadRequest,
            ErrorCode::Unauthenticated => ErrorStatus::Unauthorized,
            ErrorCode::PermissionDenied | ErrorCode::InvalidTokenContext => ErrorStatus::Forbidden,
            ErrorCode::NotFound | ErrorCode::IdentifierNotFound => ErrorStatus::NotFound,
            ErrorCode::ServiceNotApplicable
            | ErrorCode::MissingIdentifier
            | ErrorCode::UnsupportedIdentifier
            | ErrorCode::UnnecessaryIdentifier => ErrorStatus::UnprocessableContent,
            ErrorCode::QuotaExceeded | ErrorCode::TooManyRequests => ErrorStatus::TooManyRequests,
            ErrorCode::Internal => ErrorStatus::InternalServerError,
            ErrorCode::Unavailable => ErrorStatus::ServiceUnavailable,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => {
                "Client specified an invalid argument, request body or query param."
            }
            ErrorCode::OutOfRange => "Client specified an invalid range.",
            ErrorCode::Unauthenticated => {
                "Request not authenticated due to missing, invalid, or expired credentials. \
                 A new authentication is required."
            }
            ErrorCode::PermissionDenied => {
                "Client does not have sufficient permissions to perform this action."
            }
            ErrorCode::InvalidTokenContext => "Field is not consistent with access token.",
            ErrorCode::NotFound => "The specified resource is not found.",
            ErrorCode::IdentifierNotFound => "Device identifier not found.",
            ErrorCode::ServiceNotApplicable => {
                "The service is not available for the provided identifier."
            }
            ErrorCode::MissingIdentifier => "The device cannot be identified.",
            ErrorCode::UnsupportedIdentifier => "The identifier provided is not supported.",
            ErrorCode::UnnecessaryIdentifier => {
                "The device is already identified by the access token."
            }
            ErrorCode::QuotaExceeded => "Out of resource quota.",
            ErrorCode::TooManyRequests => "Rate limit reached.",
            ErrorCode::Internal => "Unknown server error.",
            ErrorCode::Unavailable => "Service Unavailable.",
        }
    }
}

impl FromStr for ErrorCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("code", s))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
