//! Status-coded responses and errors.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::dto::ErrorBody;

/// HTTP status codes produced by the handlers.
pub mod status {
    /// 200 OK.
    pub const OK: u16 = 200;
    /// 201 Created.
    pub const CREATED: u16 = 201;
    /// 204 No Content.
    pub const NO_CONTENT: u16 = 204;
    /// 400 Bad Request.
    pub const BAD_REQUEST: u16 = 400;
    /// 401 Unauthorized.
    pub const UNAUTHORIZED: u16 = 401;
    /// 404 Not Found.
    pub const NOT_FOUND: u16 = 404;
    /// 500 Internal Server Error.
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Successful handler outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    status: u16,
    location: Option<String>,
    body: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 with a body.
    #[must_use]
    pub const fn ok(body: T) -> Self {
        Self {
            status: status::OK,
            location: None,
            body: Some(body),
        }
    }

    /// 201 with a body and the location of the created resource.
    #[must_use]
    pub fn created(location: impl Into<String>, body: T) -> Self {
        Self {
            status: status::CREATED,
            location: Some(location.into()),
            body: Some(body),
        }
    }

    /// 204 without a body.
    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: status::NO_CONTENT,
            location: None,
            body: None,
        }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the `Location` header value, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Consumes the response and returns the body.
    #[must_use]
    pub fn into_body(self) -> Option<T> {
        self.body
    }
}

/// Failed handler outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status} {}: {}", .body.code, .body.message)]
pub struct ApiError {
    status: u16,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: u16, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code: code.to_owned(),
                message: message.into(),
            },
        }
    }

    /// 400 for malformed or invalid input.
    #[must_use]
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        Self::new(status::BAD_REQUEST, code, message)
    }

    /// 401 for refused credentials.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(status::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    /// 404 for an absent resource.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(status::NOT_FOUND, "NOT_FOUND", message)
    }

    /// 500 with a generic message; details stay in the logs.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            status::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "an internal error occurred",
        )
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the error payload.
    #[must_use]
    pub const fn body(&self) -> &ErrorBody {
        &self.body
    }
}

/// Result type for handler operations.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Decodes a JSON request body.
///
/// # Errors
///
/// Returns a 400 [`ApiError`] when the body is not valid JSON for `T`.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes)
        .map_err(|err| ApiError::bad_request("INVALID_BODY", err.to_string()))
}
