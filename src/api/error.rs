//! HTTP error mapping for order handlers.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::domain::order::{OrderError, OrderErrorKind};

/// Error returned by handlers; rendered as `{ "error": ..., "code": ... }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: &'static str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
        }
    }

    /// 400, for bodies that cannot be parsed at all
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "BAD_REQUEST")
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let (status, code) = match err.kind() {
            OrderErrorKind::Validation => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            OrderErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            OrderErrorKind::InvalidTransition => (StatusCode::CONFLICT, "INVALID_TRANSITION"),
        };
        Self::new(status, err.to_string(), code)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorBody {
            error: &self.message,
            code: self.code(),
        })
    }
}
