//! Server error types.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Errors returned to API clients.
///
/// Handlers default missing fields rather than failing, so the only client
/// error is a body that can't be read as JSON at all.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body wasn't valid JSON for the endpoint.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An interactive prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
