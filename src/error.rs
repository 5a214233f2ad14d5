use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to provider failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode provider response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("provider response contained no choices")]
    NoChoices
}

// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Generation(#[from] ProviderError)
}

impl IntoResponse for AppError {

    fn into_response(self) -> Response {

        let (status, body) = match self {
            AppError::BadRequest(details) => {
                tracing::warn!(%details, "rejected generate request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid request body".to_string(),
                        details: Some(details)
                    }
                )
            }
            AppError::Generation(err) => {
                // the cause stays server-side
                tracing::error!(error = %err, "text generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Failed to generate text".to_string(),
                        details: None
                    }
                )
            }
        };

        (status, Json(body)).into_response()

    }

}
