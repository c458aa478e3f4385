use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug)]
pub enum AppError {
    /// Bad request error (invalid input).
    BadRequest(String),
    /// Request used an HTTP method the endpoint does not accept.
    MethodNotAllowed,
    /// GHL accepted the connection but rejected the submission.
    CrmRejected {
        /// HTTP status GHL answered with.
        status: StatusCode,
        /// Raw GHL response body, kept for the server-side log only.
        body: String,
    },
    /// Internal server error (transport failures, parse failures).
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::CrmRejected { status, body } => {
                write!(f, "CRM rejected submission ({}): {}", status, body)
            }
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Upstream and internal failures are logged with full detail here;
    /// the caller only ever sees the generic message.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::CrmRejected { status, body } => {
                tracing::error!("GHL error {}: {}", status, body);
                (StatusCode::BAD_GATEWAY, "CRM submission failed".to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!("Lead capture error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    ///
    /// A transport-level failure talking to GHL is an internal error, not an
    /// upstream rejection.
    fn from(err: reqwest::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}
