//! Pipeline coordination for ytnotes.
//!
//! Runs transcript retrieval and summary generation in sequence, stopping at
//! the first failure.

use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::source::VideoReference;
use crate::summary::{OpenAiSummarizer, Summarizer, SummarizerConfig, Summary, SummaryPrompt, WordCount};
use crate::transcript::{TranscriptFetcher, YoutubeTranscriptFetcher};
use std::sync::Arc;
use tracing::{info, instrument};

/// Lifecycle of a single request, from URL entry to rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    UrlEntered,
    ThumbnailShown,
    TriggerPressed,
    Fetching,
    Summarizing,
    ResultShown,
    ErrorShown,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::UrlEntered => "url entered",
            Stage::ThumbnailShown => "thumbnail shown",
            Stage::TriggerPressed => "trigger pressed",
            Stage::Fetching => "fetching transcript",
            Stage::Summarizing => "summarizing",
            Stage::ResultShown => "result shown",
            Stage::ErrorShown => "error shown",
        };
        f.write_str(name)
    }
}

/// Output of a successful run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub video: VideoReference,
    pub word_count: WordCount,
    pub transcript_chars: usize,
    pub summary: Summary,
}

/// The transcript → summary pipeline.
pub struct Pipeline {
    prompts: Prompts,
    fetcher: Arc<dyn TranscriptFetcher>,
    summarizer: Arc<dyn Summarizer>,
}

impl Pipeline {
    /// Create a pipeline with the YouTube fetcher and the configured model.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let fetcher = Arc::new(YoutubeTranscriptFetcher::new(&settings.transcript)?);

        let config = SummarizerConfig::from_settings(&settings.summarizer)?;
        info!("Using {} at {}", config.model, config.api_base);
        let summarizer = Arc::new(OpenAiSummarizer::new(&config)?);

        Ok(Self::with_components(prompts, fetcher, summarizer))
    }

    /// Create a pipeline with custom components.
    pub fn with_components(
        prompts: Prompts,
        fetcher: Arc<dyn TranscriptFetcher>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            prompts,
            fetcher,
            summarizer,
        }
    }

    /// Model used for summaries.
    pub fn model(&self) -> &str {
        self.summarizer.model()
    }

    /// Fetch the transcript and summarize it.
    ///
    /// `on_stage` is called with [`Stage::Fetching`] and [`Stage::Summarizing`]
    /// as each external call starts. The summarizer is not called when the
    /// transcript cannot be fetched.
    #[instrument(skip(self, on_stage), fields(video = %video, words = %word_count))]
    pub async fn run<F>(
        &self,
        video: &VideoReference,
        word_count: WordCount,
        mut on_stage: F,
    ) -> Result<PipelineOutput>
    where
        F: FnMut(Stage),
    {
        on_stage(Stage::Fetching);
        let transcript = self.fetcher.fetch(video).await?;
        info!(
            "Transcript ready: {} fragments, {} chars",
            transcript.fragment_count(),
            transcript.text().len()
        );

        on_stage(Stage::Summarizing);
        let prompt = SummaryPrompt::new(&self.prompts, word_count);
        let summary = self.summarizer.summarize(&transcript, &prompt).await?;
        info!("Summary ready: {} chars", summary.as_str().len());

        Ok(PipelineOutput {
            video: video.clone(),
            word_count,
            transcript_chars: transcript.text().len(),
            summary,
        })
    }
}
