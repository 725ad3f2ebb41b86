//! Upstream model integration

pub mod client;
pub mod provider;
pub mod triage;

pub use client::ClaudeClient;
pub use provider::{CompletionProvider, SharedProvider};
