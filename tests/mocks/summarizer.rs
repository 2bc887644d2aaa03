use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use ytnotes::error::{GenerationFailure, NotesError};
use ytnotes::summary::{Summarizer, Summary, SummaryPrompt};
use ytnotes::transcript::Transcript;

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<GenerationFailure>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(cause: GenerationFailure) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(cause),
        }
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn summarize(
        &self,
        transcript: &Transcript,
        prompt: &SummaryPrompt,
    ) -> ytnotes::Result<Summary> {
        self.calls.lock().unwrap().push(prompt.payload(transcript));
        if let Some(cause) = &self.fail_with {
            return Err(NotesError::GenerationFailed {
                cause: cause.clone(),
            });
        }
        Ok(Summary::new(self.summary.clone()))
    }
}
