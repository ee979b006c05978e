//! HTTP Error Handling
//!
//! 应用层错误按 [`ErrorKind`] 映射为 HTTP 状态码，errno 与状态码一致

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, ErrorKind, FieldError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    pub data: Option<()>,
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const CONFLICT: i32 = 409;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest {
        message: String,
        errors: Vec<FieldError>,
    },
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::NotFound(message) => {
                tracing::warn!(errno = errno::NOT_FOUND, error = %message, "Resource not found");
                ErrorResponse {
                    errno: errno::NOT_FOUND,
                    error: "not_found",
                    message,
                    errors: Vec::new(),
                    data: None,
                }
            }
            ApiError::BadRequest { message, errors } => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %message, "Bad request");
                ErrorResponse {
                    errno: errno::BAD_REQUEST,
                    error: "validation",
                    message,
                    errors,
                    data: None,
                }
            }
            ApiError::Conflict(message) => {
                tracing::warn!(errno = errno::CONFLICT, error = %message, "Resource conflict");
                ErrorResponse {
                    errno: errno::CONFLICT,
                    error: "cascade_blocked",
                    message,
                    errors: Vec::new(),
                    data: None,
                }
            }
            ApiError::Internal(message) => {
                tracing::error!(errno = errno::INTERNAL_ERROR, error = %message, "Internal server error");
                ErrorResponse {
                    errno: errno::INTERNAL_ERROR,
                    error: "persistence_fault",
                    message,
                    errors: Vec::new(),
                    data: None,
                }
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let message = e.to_string();
        match e.kind() {
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::Validation => ApiError::BadRequest {
                errors: e.field_errors().to_vec(),
                message,
            },
            ErrorKind::CascadeBlocked => ApiError::Conflict(message),
            ErrorKind::PersistenceFault => ApiError::Internal(message),
        }
    }
}
