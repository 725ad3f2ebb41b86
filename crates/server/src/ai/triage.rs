//! Department recommendation via the upstream model

use std::sync::LazyLock;

use triage_core::{KNOWN_DEPARTMENTS, RecommendationRequest, UpstreamError, extract_department};

use super::provider::CompletionProvider;

static SYSTEM_PROMPT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "You are a highly experienced and accurate hospital triage assistant. \
         Your task is to recommend the single most appropriate specialist department \
         based on patient details. Patient symptoms may be reported in Bahasa Indonesia. \
         Your response MUST be a JSON object with a single key \"recommended_department\" \
         and its value being the department name in English, with no other text.\n\
         Example: {{\"recommended_department\": \"Neurology\"}}\n\n\
         Consider common medical departments such as: {}. \
         If a specific department isn't perfectly clear, choose the most general but \
         appropriate one (e.g., Internal Medicine or Emergency).",
        KNOWN_DEPARTMENTS.join(", ")
    )
});

/// Render the user message for a validated request.
///
/// The template is fixed, so identical requests produce identical prompts.
fn build_user_prompt(request: &RecommendationRequest) -> String {
    format!(
        "Patient Gender: {}\n\
         Patient Age: {}\n\
         Patient Symptoms: {}\n\n\
         Based on this information, what is the recommended department?",
        request.gender.as_str(),
        request.age,
        request.symptoms.join(", "),
    )
}

/// Ask the provider for a department recommendation.
///
/// One outbound call, no retry; the reply is reduced to a department name
/// with [`extract_department`].
pub async fn recommend_department(
    provider: &dyn CompletionProvider,
    request: &RecommendationRequest,
) -> Result<String, UpstreamError> {
    let reply = provider
        .complete(&SYSTEM_PROMPT, &build_user_prompt(request))
        .await?;

    tracing::debug!(reply = %reply, "Model reply received");

    extract_department(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::Gender;

    #[test]
    fn user_prompt_embeds_all_fields_in_order() {
        let request = RecommendationRequest {
            gender: Gender::Female,
            age: 62,
            symptoms: vec!["pusing".into(), "mual".into(), "sulit berjalan".into()],
        };

        let prompt = build_user_prompt(&request);
        assert!(prompt.contains("Patient Gender: female"));
        assert!(prompt.contains("Patient Age: 62"));
        assert!(prompt.contains("Patient Symptoms: pusing, mual, sulit berjalan"));
    }

    #[test]
    fn user_prompt_is_deterministic() {
        let request = RecommendationRequest {
            gender: Gender::Male,
            age: 35,
            symptoms: vec!["batuk".into(), "demam tinggi".into()],
        };

        assert_eq!(build_user_prompt(&request), build_user_prompt(&request));
    }

    #[test]
    fn system_prompt_offers_known_departments() {
        assert!(SYSTEM_PROMPT.contains("Neurology"));
        assert!(SYSTEM_PROMPT.contains("Pulmonology/Respiratory"));
        assert!(SYSTEM_PROMPT.contains("recommended_department"));
    }
}
