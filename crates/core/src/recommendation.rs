use serde::{Deserialize, Serialize};

/// Patient gender as accepted by the recommendation endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// A recommendation request that has passed boundary validation.
///
/// Invariants: `age` is strictly positive, `symptoms` is non-empty and
/// every entry is a non-empty string. Symptom order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub gender: Gender,
    pub age: u32,
    pub symptoms: Vec<String>,
}

/// Response body for a successful recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationResponse {
    pub recommended_department: String,
}
