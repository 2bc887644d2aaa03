//! YouTube caption fetcher backed by yt-transcript-rs.

use super::{Transcript, TranscriptFetcher};
use crate::config::TranscriptSettings;
use crate::error::{NotesError, Result, TranscriptFailure};
use crate::source::VideoReference;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use yt_transcript_rs::YouTubeTranscriptApi;

/// Fetches captions from YouTube.
pub struct YoutubeTranscriptFetcher {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscriptFetcher {
    pub fn new(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            NotesError::Config(format!("Failed to initialize transcript client: {}", e))
        })?;

        let languages = if settings.languages.is_empty() {
            vec!["en".to_string()]
        } else {
            settings.languages.clone()
        };

        Ok(Self {
            api,
            languages,
            preserve_formatting: settings.preserve_formatting,
        })
    }

    fn unavailable(video: &VideoReference, cause: TranscriptFailure) -> NotesError {
        warn!(cause = cause.tag(), "Transcript unavailable for {}: {}", video, cause.detail());
        NotesError::TranscriptUnavailable {
            video_id: video.to_string(),
            cause,
        }
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    #[instrument(skip(self), fields(video = %video))]
    async fn fetch(&self, video: &VideoReference) -> Result<Transcript> {
        info!("Fetching captions ({})", self.languages.join(", "));

        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video.as_str(), &languages, self.preserve_formatting)
            .await
            .map_err(|e| Self::unavailable(video, TranscriptFailure::classify(&e.to_string())))?;

        let transcript = Transcript::from_fragments(
            video.clone(),
            fetched.snippets.iter().map(|snippet| snippet.text.as_str()),
        );

        if transcript.is_empty() {
            return Err(Self::unavailable(
                video,
                TranscriptFailure::NotFound("caption track has no fragments".to_string()),
            ));
        }

        debug!(
            "Fetched {} fragments ({} chars)",
            transcript.fragment_count(),
            transcript.text().len()
        );

        Ok(transcript)
    }
}
