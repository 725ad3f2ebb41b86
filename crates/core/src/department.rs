//! Department-name extraction from upstream model output

use serde::Deserialize;

use crate::error::UpstreamError;

/// Departments offered to the model in the system prompt.
///
/// The service does not enforce this list on output; it is only used to
/// canonicalize spelling when the model's answer matches one of these names
/// ignoring case.
pub const KNOWN_DEPARTMENTS: &[&str] = &[
    "Cardiology",
    "Dentistry",
    "Dermatology",
    "General Medicine",
    "Neurology",
    "Neurosurgery",
    "Pathology",
    "Plastic & Reconstruction Surgery",
    "Psychiatry",
    "Radiology",
    "Rehabilitation Medicine",
    "Orthopaedics",
    "Urology",
    "Emergency",
    "Obstetrics & Gynaecology",
    "Pulmonology/Respiratory",
    "Nephrology",
    "Internal Medicine",
    "General Surgery",
    "Ophthalmology",
    "ENT (Ear, Nose, Throat)",
    "Paediatrics",
];

/// Longest reply still accepted as a bare department name
const MAX_NAME_LEN: usize = 64;

/// Expected shape of the model's JSON answer
#[derive(Deserialize)]
struct ModelOutput {
    recommended_department: String,
}

/// Reduce the model's free-text reply to a department name.
///
/// The model is instructed to answer with `{"recommended_department": "..."}`
/// and nothing else, so the reply is stripped of markdown code fences and
/// parsed as that object first. Failing that, a single narrow fallback: the
/// first non-empty line, shed of surrounding quotes, backticks, and a
/// trailing period, is accepted when it still looks like a department name
/// (at most 64 chars, no sentence punctuation). Anything else fails with
/// [`UpstreamError::UnusableOutput`].
pub fn extract_department(reply: &str) -> Result<String, UpstreamError> {
    if let Some(json) = extract_json_object(reply)
        && let Ok(output) = serde_json::from_str::<ModelOutput>(&json)
    {
        let name = output.recommended_department.trim();
        if !name.is_empty() {
            return Ok(canonicalize(name));
        }
    }

    first_line_department(reply)
        .map(|name| canonicalize(&name))
        .ok_or_else(|| UpstreamError::UnusableOutput(truncate(reply)))
}

/// Extract a JSON object from text that might contain markdown code blocks
fn extract_json_object(text: &str) -> Option<String> {
    let trimmed = text.trim();

    // Direct JSON object
    if trimmed.starts_with('{') {
        return Some(trimmed.to_string());
    }

    // Wrapped in ```json ... ```
    if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        if let Some(end) = after.find("```") {
            return Some(after[..end].trim().to_string());
        }
    }

    // Wrapped in ``` ... ```
    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        if let Some(end) = after.find("```") {
            return Some(after[..end].trim().to_string());
        }
    }

    None
}

/// Accept the first non-empty line as a department name if it plausibly is one
fn first_line_department(reply: &str) -> Option<String> {
    let line = reply.lines().map(str::trim).find(|line| !line.is_empty())?;

    let name = line
        .trim_matches(|c| matches!(c, '"' | '\'' | '`'))
        .trim_end_matches('.')
        .trim();

    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return None;
    }
    // Sentence punctuation means prose, not a department name. Commas and
    // parentheses stay allowed: "ENT (Ear, Nose, Throat)".
    if name.contains(['.', '!', '?', ':', ';']) {
        return None;
    }

    Some(name.to_string())
}

/// Return the canonical spelling for answers matching a known department
fn canonicalize(name: &str) -> String {
    KNOWN_DEPARTMENTS
        .iter()
        .find(|d| d.eq_ignore_ascii_case(name))
        .map(|d| d.to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Cap reply text quoted in error messages
fn truncate(reply: &str) -> String {
    reply.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direct_json_object() {
        let reply = r#"{"recommended_department": "Neurology"}"#;
        assert_eq!(extract_department(reply).unwrap(), "Neurology");
    }

    #[test]
    fn parses_fenced_json_object() {
        let reply = "```json\n{\"recommended_department\": \"Pulmonology/Respiratory\"}\n```";
        assert_eq!(
            extract_department(reply).unwrap(),
            "Pulmonology/Respiratory"
        );
    }

    #[test]
    fn parses_anonymous_fence() {
        let reply = "```\n{\"recommended_department\": \"Cardiology\"}\n```";
        assert_eq!(extract_department(reply).unwrap(), "Cardiology");
    }

    #[test]
    fn accepts_bare_department_line() {
        assert_eq!(extract_department("Neurology").unwrap(), "Neurology");
        assert_eq!(extract_department("  Neurology.  ").unwrap(), "Neurology");
        assert_eq!(extract_department("\"Neurology\"").unwrap(), "Neurology");
    }

    #[test]
    fn canonicalizes_known_departments() {
        let reply = r#"{"recommended_department": "neurology"}"#;
        assert_eq!(extract_department(reply).unwrap(), "Neurology");
        assert_eq!(
            extract_department("ent (ear, nose, throat)").unwrap(),
            "ENT (Ear, Nose, Throat)"
        );
    }

    #[test]
    fn passes_through_unknown_departments() {
        let reply = r#"{"recommended_department": "Sports Medicine"}"#;
        assert_eq!(extract_department(reply).unwrap(), "Sports Medicine");
    }

    #[test]
    fn rejects_prose_reply() {
        let reply = "Based on the symptoms described, I would suggest the patient visits \
                     the neurology department. Dizziness and nausea often indicate...";
        assert!(matches!(
            extract_department(reply),
            Err(UpstreamError::UnusableOutput(_))
        ));
    }

    #[test]
    fn rejects_empty_reply() {
        assert!(matches!(
            extract_department("   \n  "),
            Err(UpstreamError::UnusableOutput(_))
        ));
        let reply = r#"{"recommended_department": ""}"#;
        assert!(extract_department(reply).is_err());
    }
}
