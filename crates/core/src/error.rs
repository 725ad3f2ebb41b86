use thiserror::Error;

/// Failure talking to, or interpreting the output of, the upstream model.
///
/// Upstream errors are terminal for the current request; there is no retry
/// and no fallback department heuristic.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request to model endpoint failed: {0}")]
    Transport(String),

    #[error("Model endpoint returned an error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model output could not be reduced to a department name: {0}")]
    UnusableOutput(String),
}
