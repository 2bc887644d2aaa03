//! Summarizer backed by an OpenAI-compatible chat completions API.

use super::{Summarizer, SummarizerConfig, Summary, SummaryPrompt};
use crate::error::{GenerationFailure, NotesError, Result};
use crate::openai::create_client;
use crate::transcript::Transcript;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Single-shot summarizer: one user message, no history, no streaming.
pub struct OpenAiSummarizer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiSummarizer {
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    fn failed(cause: GenerationFailure) -> NotesError {
        warn!(cause = cause.tag(), "Summary generation failed: {}", cause);
        NotesError::GenerationFailed { cause }
    }
}

/// Map a client error onto a failure cause.
fn classify_error(error: &OpenAIError) -> GenerationFailure {
    match error {
        OpenAIError::Reqwest(e) => GenerationFailure::Network(e.to_string()),
        OpenAIError::ApiError(api) => {
            let code = api.code.clone().unwrap_or_default();
            GenerationFailure::classify(&format!("{} {}", code, api.message))
        }
        other => GenerationFailure::Other(other.to_string()),
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, transcript, prompt), fields(video = %transcript.video(), words = %prompt.word_count()))]
    async fn summarize(&self, transcript: &Transcript, prompt: &SummaryPrompt) -> Result<Summary> {
        info!("Requesting summary from {}", self.model);

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.payload(transcript))
            .build()
            .map_err(|e| Self::failed(GenerationFailure::Other(e.to_string())))?
            .into();

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model).messages(vec![message]);
        if let Some(temperature) = self.temperature {
            args.temperature(temperature);
        }
        let request = args
            .build()
            .map_err(|e| Self::failed(GenerationFailure::Other(e.to_string())))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Self::failed(classify_error(&e)))?;

        let text = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| Self::failed(GenerationFailure::EmptyResponse))?;

        debug!("Generated summary ({} chars)", text.len());

        Ok(Summary::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_invalid_argument() {
        let error = OpenAIError::InvalidArgument("bad".to_string());
        assert_eq!(classify_error(&error).tag(), "other");
    }

    #[test]
    fn test_model_name_from_config() {
        let settings = crate::config::SummarizerSettings::default();
        let config = SummarizerConfig::with_key(&settings, "test-key");
        let summarizer = OpenAiSummarizer::new(&config).unwrap();
        assert_eq!(summarizer.model(), "gemini-2.0-flash");
    }
}
