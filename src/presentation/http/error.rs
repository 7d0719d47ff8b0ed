// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
            ApplicationError::DeadlineExceeded => Self::new(
                StatusCode::GATEWAY_TIMEOUT,
                "request deadline exceeded".into(),
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

/// Malformed bodies keep axum's status (400 for syntax, 422 for shape, 415
/// for content type) but get the JSON error envelope.
impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_map_to_statuses() {
        let cases = [
            (ApplicationError::validation("x"), StatusCode::UNPROCESSABLE_ENTITY),
            (ApplicationError::not_found("x"), StatusCode::NOT_FOUND),
            (ApplicationError::conflict("x"), StatusCode::CONFLICT),
            (ApplicationError::unauthorized("x"), StatusCode::UNAUTHORIZED),
            (ApplicationError::forbidden("x"), StatusCode::FORBIDDEN),
            (ApplicationError::infrastructure("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (ApplicationError::DeadlineExceeded, StatusCode::GATEWAY_TIMEOUT),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err).status(), status);
        }
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let err = HttpError::from_error(ApplicationError::infrastructure("pool exhausted"));
        assert_eq!(err.message, "internal server error");
    }
}
