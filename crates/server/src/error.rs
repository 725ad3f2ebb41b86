//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use triage_core::{FieldIssue, UpstreamError, ValidationError};

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request failed boundary validation; reported with field-level detail
    Validation(ValidationError),
    /// Upstream model call failed; reported with a generic message only
    Upstream(UpstreamError),
    /// No API key configured, the recommendation endpoint cannot run
    ProviderNotConfigured,
}

/// 422 body carrying one entry per failed field
#[derive(Serialize)]
struct ValidationBody {
    error: &'static str,
    issues: Vec<FieldIssue>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    error: "Request validation failed",
                    issues: err.issues,
                }),
            )
                .into_response(),
            AppError::Upstream(err) => {
                // Upstream internals go to the log, not to the caller
                tracing::error!(error = %err, "Upstream model call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Department recommendation failed",
                    }),
                )
                    .into_response()
            }
            AppError::ProviderNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorBody {
                    error: "Model provider not configured",
                }),
            )
                .into_response(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err)
    }
}
