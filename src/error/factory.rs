//! Pre-filled error envelopes
//!
//! One function per code. Each takes an optional message override and
//! otherwise uses the code's documented default message.

use super::codes::ErrorCode;
use super::info::ErrorInfo;
use crate::validation::ValidationError;

/// Factory for standardized error responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorFactory;

fn build(code: ErrorCode, message: Option<&str>) -> ErrorInfo {
    ErrorInfo::from_code(code, message.unwrap_or(code.default_message()))
}

impl ErrorFactory {
    /// Builds the envelope for any code.
    pub fn for_code(code: ErrorCode, message: Option<&str>) -> ErrorInfo {
        build(code, message)
    }

    /// 400 INVALID_ARGUMENT
    pub fn invalid_argument(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::InvalidArgument, message)
    }

    /// 400 OUT_OF_RANGE
    pub fn out_of_range(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::OutOfRange, message)
    }

    /// 401 UNAUTHENTICATED
    pub fn unauthenticated(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::Unauthenticated, message)
    }

    /// 403 PERMISSION_DENIED
    pub fn permission_denied(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::PermissionDenied, message)
    }

    /// 403 INVALID_TOKEN_CONTEXT
    pub fn invalid_token_context(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::InvalidTokenContext, message)
    }

    /// 403 INVALID_TOKEN_CONTEXT naming the request field that disagrees
    /// with the access token.
    pub fn invalid_token_context_for(field: &str) -> ErrorInfo {
        ErrorInfo::from_code(
            ErrorCode::InvalidTokenContext,
            format!("{} is not consistent with access token.", field),
        )
    }

    /// 404 NOT_FOUND
    pub fn not_found(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::NotFound, message)
    }

    /// 404 IDENTIFIER_NOT_FOUND
    pub fn identifier_not_found(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::IdentifierNotFound, message)
    }

    /// 422 SERVICE_NOT_APPLICABLE
    pub fn service_not_applicable(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::ServiceNotApplicable, message)
    }

    /// 422 MISSING_IDENTIFIER
    pub fn missing_identifier(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::MissingIdentifier, message)
    }

    /// 422 UNSUPPORTED_IDENTIFIER
    pub fn unsupported_identifier(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::UnsupportedIdentifier, message)
    }

    /// 422 UNNECESSARY_IDENTIFIER
    pub fn unnecessary_identifier(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::UnnecessaryIdentifier, message)
    }

    /// 429 QUOTA_EXCEEDED
    pub fn quota_exceeded(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::QuotaExceeded, message)
    }

    /// 429 TOO_MANY_REQUESTS
    pub fn too_many_requests(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::TooManyRequests, message)
    }

    /// 500 INTERNAL
    pub fn internal_error(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::Internal, message)
    }

    /// 503 UNAVAILABLE
    pub fn service_unavailable(message: Option<&str>) -> ErrorInfo {
        build(ErrorCode::Unavailable, message)
    }

    /// 400 INVALID_ARGUMENT carrying a validation failure as its message.
    ///
    /// Callers decide when a validation failure becomes a response; nothing
    /// in the data types calls this.
    pub fn from_validation(err: &ValidationError) -> ErrorInfo {
        ErrorInfo::from_code(ErrorCode::InvalidArgument, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorStatus;

    #[test]
    fn test_invalid_argument_default_and_override() {
        let default = ErrorFactory::invalid_argument(None);
        assert_eq!(default.status_code(), 400);
        assert_eq!(default.code().as_str(), "INVALID_ARGUMENT");
        assert!(!default.message().is_empty());

        let custom = ErrorFactory::invalid_argument(Some("X"));
        assert_eq!(custom.message(), "X");
        assert_eq!(custom.code(), default.code());
        assert_eq!(custom.status(), default.status());
    }

    #[test]
    fn test_invalid_token_context_for_field() {
        let info = ErrorFactory::invalid_token_context_for("phoneNumber");
        assert_eq!(info.status(), ErrorStatus::Forbidden);
        assert_eq!(info.message(), "phoneNumber is not consistent with access token.");
    }

    #[test]
    fn test_from_validation() {
        let err = ValidationError::out_of_range("latitude", -90, 90, 120);
        let info = ErrorFactory::from_validation(&err);
        assert_eq!(info.code(), ErrorCode::InvalidArgument);
        assert!(info.message().contains("latitude"));
    }
}
