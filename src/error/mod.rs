//! Error envelopes for API responses
//!
//! Every error body carries an HTTP status, a machine-readable code drawn
//! from the closed set for that status, and a human-readable message.
//!
//! Codes by status:
//! - 400: INVALID_ARGUMENT, OUT_OF_RANGE
//! - 401: UNAUTHENTICATED
//! - 403: PERMISSION_DENIED, INVALID_TOKEN_CONTEXT
//! - 404: NOT_FOUND, IDENTIFIER_NOT_FOUND
//! - 422: SERVICE_NOT_APPLICABLE, MISSING_IDENTIFIER, UNSUPPORTED_IDENTIFIER,
//!   UNNECESSARY_IDENTIFIER
//! - 429: QUOTA_EXCEEDED, TOO_MANY_REQUESTS
//! - 500: INTERNAL
//! - 503: UNAVAILABLE

mod codes;
mod factory;
mod info;

pub use codes::{ErrorCode, ErrorStatus};
pub use factory::ErrorFactory;
pub use info::ErrorInfo;
