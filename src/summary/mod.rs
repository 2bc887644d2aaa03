//! Summary generation for ytnotes.
//!
//! Sends a transcript, prefixed with an instruction prompt, to a language
//! model and returns the generated text.

mod openai;
mod prompt;

pub use openai::OpenAiSummarizer;
pub use prompt::{SummaryPrompt, WordCount};

use crate::config::SummarizerSettings;
use crate::error::{NotesError, Result};
use crate::transcript::Transcript;
use async_trait::async_trait;
use std::time::Duration;

/// Text returned by the language model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(String);

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for summary generators.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Model identifier, for display.
    fn model(&self) -> &str;

    /// Generate a summary of the transcript.
    ///
    /// Every failure is reported as `NotesError::GenerationFailed`.
    async fn summarize(&self, transcript: &Transcript, prompt: &SummaryPrompt) -> Result<Summary>;
}

/// Resolved connection settings for the model API.
///
/// Built once at startup and handed to the summarizer; nothing reads the
/// credential from the environment after that.
#[derive(Clone)]
pub struct SummarizerConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Option<Duration>,
    pub temperature: Option<f32>,
}

impl SummarizerConfig {
    /// Read the API key named by the settings from the environment.
    pub fn from_settings(settings: &SummarizerSettings) -> Result<Self> {
        let api_key = match std::env::var(&settings.api_key_env) {
            Ok(key) if !key.trim().is_empty() => key,
            Ok(_) => {
                return Err(NotesError::Config(format!(
                    "{} is empty. Set it with: export {}='...'",
                    settings.api_key_env, settings.api_key_env
                )))
            }
            Err(_) => {
                return Err(NotesError::Config(format!(
                    "{} not set. Set it with: export {}='...' (or add it to .env)",
                    settings.api_key_env, settings.api_key_env
                )))
            }
        };

        Ok(Self::with_key(settings, api_key))
    }

    /// Build a config with an explicit API key.
    pub fn with_key(settings: &SummarizerSettings, api_key: impl Into<String>) -> Self {
        Self {
            api_base: settings.api_base.clone(),
            api_key: api_key.into(),
            model: settings.model.clone(),
            timeout: settings.timeout_seconds.map(Duration::from_secs),
            temperature: settings.temperature,
        }
    }
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .finish()
    }
}
