use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use ytnotes::error::{NotesError, TranscriptFailure};
use ytnotes::source::VideoReference;
use ytnotes::transcript::{Transcript, TranscriptFetcher};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub fragments: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<TranscriptFailure>,
}

impl MockTranscriptFetcher {
    pub fn new(fragments: &[&str]) -> Self {
        Self {
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(cause: TranscriptFailure) -> Self {
        Self {
            fragments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(cause),
        }
    }
}

#[async_trait]
impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch(&self, video: &VideoReference) -> ytnotes::Result<Transcript> {
        self.calls.lock().unwrap().push(video.to_string());
        if let Some(cause) = &self.fail_with {
            return Err(NotesError::TranscriptUnavailable {
                video_id: video.to_string(),
                cause: cause.clone(),
            });
        }
        Ok(Transcript::from_fragments(video.clone(), &self.fragments))
    }
}
