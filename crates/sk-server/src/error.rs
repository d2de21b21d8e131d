use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sk_core::Error;

use crate::schemas::ErrorResponse;

/// Request-terminal failures, each mapping to exactly one HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// 400: prompt absent or blank after trimming.
    MissingPrompt,
    /// 500: the code generation call failed or returned nothing.
    Generation { details: String },
    /// 500: the renderer exited nonzero. Carries its error stream and the
    /// generated code so the caller can inspect what was attempted.
    Render { details: String, code: String },
    /// 500: the renderer reported success but the video is not on disk.
    ArtifactMissing { details: String, code: String },
    /// 500: anything else (storage failures, unexpected conditions).
    Internal { details: String },
}

impl ApiError {
    pub fn internal(details: impl Into<String>) -> Self {
        Self::Internal {
            details: details.into(),
        }
    }

    /// Attaches the generated code to render-stage failures; everything else
    /// maps on its own.
    pub fn from_render_failure(err: Error, code: String) -> Self {
        match err {
            Error::Render { stderr } => Self::Render {
                details: stderr,
                code,
            },
            Error::ArtifactMissing { path } => Self::ArtifactMissing {
                details: format!("expected rendered video at '{}'", path.display()),
                code,
            },
            other => Self::Internal {
                details: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingPrompt => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Missing prompt in request body".to_string(),
                    details: None,
                    code: None,
                },
            ),
            ApiError::Generation { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Code generation failed".to_string(),
                    details: Some(details),
                    code: None,
                },
            ),
            ApiError::Render { details, code } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Manim rendering failed".to_string(),
                    details: Some(details),
                    code: Some(code),
                },
            ),
            ApiError::ArtifactMissing { details, code } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Rendered video not found".to_string(),
                    details: Some(details),
                    code: Some(code),
                },
            ),
            ApiError::Internal { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Server error".to_string(),
                    details: Some(details),
                    code: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
