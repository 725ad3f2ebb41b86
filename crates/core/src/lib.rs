//! triage-core: Shared domain types for the triage recommendation service
//!
//! This crate provides the request/response model, boundary validation,
//! the error taxonomy, and the department-name extraction rule applied to
//! upstream model output. Pure logic, no I/O.

pub mod department;
pub mod error;
pub mod recommendation;
pub mod validation;

// Re-export our types
pub use department::{KNOWN_DEPARTMENTS, extract_department};
pub use error::UpstreamError;
pub use recommendation::{Gender, RecommendationRequest, RecommendationResponse};
pub use validation::{FieldIssue, ValidationError, validate_request};
