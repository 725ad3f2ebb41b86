//! Boundary validation for recommendation requests
//!
//! The request body is validated from raw JSON rather than through a derive
//! so that every failed field is reported individually instead of bailing at
//! the first deserialization error.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::recommendation::{Gender, RecommendationRequest};

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Request rejected at the boundary, one issue per failed field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Request validation failed ({} issues)", issues.len())]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

/// Validate a raw JSON body into a [`RecommendationRequest`].
///
/// Constraints: `gender` must be one of male/female/other, `age` must be a
/// positive integer, `symptoms` must be a non-empty array of non-empty
/// strings. All violations are collected before returning.
pub fn validate_request(body: &JsonValue) -> Result<RecommendationRequest, ValidationError> {
    let Some(obj) = body.as_object() else {
        return Err(ValidationError {
            issues: vec![FieldIssue::new("body", "Request body must be a JSON object")],
        });
    };

    let mut issues = Vec::new();

    let gender = match obj.get("gender") {
        None | Some(JsonValue::Null) => {
            issues.push(FieldIssue::new("gender", "Missing required field"));
            None
        }
        Some(value) => match serde_json::from_value::<Gender>(value.clone()) {
            Ok(gender) => Some(gender),
            Err(_) => {
                issues.push(FieldIssue::new(
                    "gender",
                    "Must be one of: male, female, other",
                ));
                None
            }
        },
    };

    let age = match obj.get("age") {
        None | Some(JsonValue::Null) => {
            issues.push(FieldIssue::new("age", "Missing required field"));
            None
        }
        Some(value) => match value.as_i64() {
            Some(n) if n > 0 && n <= i64::from(u32::MAX) => Some(n as u32),
            _ => {
                issues.push(FieldIssue::new("age", "Must be a positive integer"));
                None
            }
        },
    };

    let symptoms = match obj.get("symptoms") {
        None | Some(JsonValue::Null) => {
            issues.push(FieldIssue::new("symptoms", "Missing required field"));
            None
        }
        Some(JsonValue::Array(items)) if items.is_empty() => {
            issues.push(FieldIssue::new("symptoms", "Must be a non-empty list"));
            None
        }
        Some(JsonValue::Array(items)) => {
            let mut symptoms = Vec::with_capacity(items.len());
            let mut valid = true;
            for (index, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(s) if !s.trim().is_empty() => symptoms.push(s.to_string()),
                    _ => {
                        issues.push(FieldIssue::new(
                            format!("symptoms[{index}]"),
                            "Must be a non-empty string",
                        ));
                        valid = false;
                    }
                }
            }
            valid.then_some(symptoms)
        }
        Some(_) => {
            issues.push(FieldIssue::new("symptoms", "Must be a list of strings"));
            None
        }
    };

    match (gender, age, symptoms) {
        (Some(gender), Some(age), Some(symptoms)) if issues.is_empty() => {
            Ok(RecommendationRequest {
                gender,
                age,
                symptoms,
            })
        }
        _ => Err(ValidationError { issues }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(err: ValidationError) -> Vec<String> {
        err.issues.into_iter().map(|i| i.field).collect()
    }

    #[test]
    fn accepts_valid_request() {
        let body = json!({
            "gender": "female",
            "age": 62,
            "symptoms": ["pusing", "mual", "sulit berjalan"]
        });

        let request = validate_request(&body).unwrap();
        assert_eq!(request.gender, Gender::Female);
        assert_eq!(request.age, 62);
        assert_eq!(request.symptoms, vec!["pusing", "mual", "sulit berjalan"]);
    }

    #[test]
    fn preserves_symptom_order() {
        let body = json!({"gender": "male", "age": 30, "symptoms": ["c", "a", "b"]});
        let request = validate_request(&body).unwrap();
        assert_eq!(request.symptoms, vec!["c", "a", "b"]);
    }

    #[test]
    fn rejects_non_positive_age() {
        for age in [json!(0), json!(-5)] {
            let body = json!({"gender": "male", "age": age, "symptoms": ["batuk"]});
            let err = validate_request(&body).unwrap_err();
            assert_eq!(fields(err), vec!["age"]);
        }
    }

    #[test]
    fn rejects_non_integer_age() {
        let body = json!({"gender": "male", "age": 62.5, "symptoms": ["batuk"]});
        let err = validate_request(&body).unwrap_err();
        assert_eq!(fields(err), vec!["age"]);

        let body = json!({"gender": "male", "age": "62", "symptoms": ["batuk"]});
        let err = validate_request(&body).unwrap_err();
        assert_eq!(fields(err), vec!["age"]);
    }

    #[test]
    fn rejects_unknown_gender() {
        let body = json!({"gender": "unknown", "age": 30, "symptoms": ["batuk"]});
        let err = validate_request(&body).unwrap_err();
        assert_eq!(fields(err), vec!["gender"]);
    }

    #[test]
    fn rejects_empty_symptom_list() {
        let body = json!({"gender": "male", "age": 30, "symptoms": []});
        let err = validate_request(&body).unwrap_err();
        assert_eq!(fields(err), vec!["symptoms"]);
    }

    #[test]
    fn rejects_blank_symptom_entries() {
        let body = json!({"gender": "male", "age": 30, "symptoms": ["batuk", "", 3]});
        let err = validate_request(&body).unwrap_err();
        assert_eq!(fields(err), vec!["symptoms[1]", "symptoms[2]"]);
    }

    #[test]
    fn reports_every_failed_field_at_once() {
        let err = validate_request(&json!({})).unwrap_err();
        let mut fields = fields(err);
        fields.sort();
        assert_eq!(fields, vec!["age", "gender", "symptoms"]);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = validate_request(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(fields(err), vec!["body"]);
    }
}
