//! OpenAI-compatible client construction.

use crate::error::{NotesError, Result};
use crate::summary::SummarizerConfig;
use async_openai::{config::OpenAIConfig, Client};

/// Create a chat client for the configured endpoint.
///
/// No timeout is set unless one is configured, so the HTTP client default
/// applies.
pub fn create_client(config: &SummarizerConfig) -> Result<Client<OpenAIConfig>> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    let http_client = builder
        .build()
        .map_err(|e| NotesError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let openai_config = OpenAIConfig::new()
        .with_api_base(config.api_base.trim_end_matches('/'))
        .with_api_key(config.api_key.clone());

    Ok(Client::with_config(openai_config).with_http_client(http_client))
}
