//! Capability seam for the upstream text-completion model

use std::sync::Arc;

use async_trait::async_trait;
use triage_core::UpstreamError;

/// A text-completion provider: prompt in, free text out.
///
/// The live implementation talks to the Anthropic Messages API; tests swap
/// in deterministic stubs so no handler depends on the network.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Complete `user` under `system` instructions, returning the model's
    /// free-text reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String, UpstreamError>;
}

/// Shared handle to the configured provider
pub type SharedProvider = Arc<dyn CompletionProvider>;
