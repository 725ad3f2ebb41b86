//! Health check endpoint

use axum::{Extension, Json, response::IntoResponse};
use serde::Serialize;

use crate::ai::SharedProvider;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    provider_configured: bool,
}

/// GET /health - Report server liveness and provider configuration.
///
/// The recommendation path holds no database or other local resource, so the
/// only thing worth reporting besides liveness is whether an upstream model
/// is configured.
pub async fn check(Extension(provider): Extension<Option<SharedProvider>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        provider_configured: provider.is_some(),
    })
}
