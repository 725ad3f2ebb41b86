//! Department recommendation HTTP handler

use axum::{Extension, Json, response::IntoResponse};
use serde_json::Value as JsonValue;
use triage_core::{RecommendationResponse, validate_request};

use crate::ai::SharedProvider;
use crate::error::AppError;
use crate::middleware::request_id::RequestId;

/// POST /recommend - Recommend a specialist department
///
/// The body is taken as raw JSON so every failed field lands in a single 422
/// instead of bailing at the first deserialization error. Validation runs
/// before the provider is even looked at, so invalid input never triggers an
/// outbound call.
pub async fn recommend(
    Extension(provider): Extension<Option<SharedProvider>>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let request = validate_request(&body)?;

    let provider = provider.ok_or(AppError::ProviderNotConfigured)?;

    tracing::info!(
        request_id = %request_id.0,
        gender = request.gender.as_str(),
        age = request.age,
        symptoms = request.symptoms.len(),
        "Recommendation request"
    );

    let department = crate::ai::triage::recommend_department(provider.as_ref(), &request).await?;

    tracing::info!(department = %department, "Recommendation produced");

    Ok(Json(RecommendationResponse {
        recommended_department: department,
    }))
}
