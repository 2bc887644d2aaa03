//! Form-style request session.
//!
//! Holds the values a user has entered (URL, word count) and walks the
//! request lifecycle described by [`Stage`]. Only the resolved video is kept
//! between triggers; transcripts and summaries belong to a single run.

use crate::error::{NotesError, Result};
use crate::pipeline::{Pipeline, PipelineOutput, Stage};
use crate::source::{resolve, VideoReference};
use crate::summary::WordCount;
use tracing::debug;

#[derive(Debug)]
pub struct Session {
    stage: Stage,
    video: Option<VideoReference>,
    word_count: WordCount,
}

impl Session {
    pub fn new(word_count: WordCount) -> Self {
        Self {
            stage: Stage::Idle,
            video: None,
            word_count,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn video(&self) -> Option<&VideoReference> {
        self.video.as_ref()
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Thumbnail to display, if the current URL resolved.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.video.as_ref().map(VideoReference::thumbnail_url)
    }

    fn transition(&mut self, stage: Stage) {
        debug!("Session: {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    /// Record a new URL. An empty URL clears the form back to idle.
    pub fn enter_url(&mut self, input: &str) -> Result<&VideoReference> {
        if input.trim().is_empty() {
            self.video = None;
            self.transition(Stage::Idle);
            return Err(NotesError::MissingUrl);
        }

        self.transition(Stage::UrlEntered);
        match resolve(input) {
            Ok(video) => {
                self.transition(Stage::ThumbnailShown);
                Ok(self.video.insert(video))
            }
            Err(e) => {
                self.video = None;
                self.transition(Stage::ErrorShown);
                Err(e)
            }
        }
    }

    /// Update the requested word count. Keeps the previous value on error.
    pub fn set_word_count(&mut self, value: u32) -> Result<WordCount> {
        self.word_count = WordCount::new(value)?;
        Ok(self.word_count)
    }

    /// Run the pipeline for the current URL ("Get Detailed Notes").
    ///
    /// Without a resolved URL this reports [`NotesError::MissingUrl`] and
    /// nothing is fetched.
    pub async fn trigger<F>(&mut self, pipeline: &Pipeline, mut on_stage: F) -> Result<PipelineOutput>
    where
        F: FnMut(Stage),
    {
        self.transition(Stage::TriggerPressed);
        on_stage(Stage::TriggerPressed);

        let Some(video) = self.video.clone() else {
            self.transition(Stage::ErrorShown);
            on_stage(Stage::ErrorShown);
            return Err(NotesError::MissingUrl);
        };

        let mut reached = Stage::TriggerPressed;
        let result = pipeline
            .run(&video, self.word_count, |stage| {
                reached = stage;
                on_stage(stage);
            })
            .await;
        self.transition(reached);

        let end = if result.is_ok() {
            Stage::ResultShown
        } else {
            Stage::ErrorShown
        };
        self.transition(end);
        on_stage(end);

        result
    }

    /// Return to idle after a result or error has been shown.
    pub fn finish(&mut self) {
        self.transition(Stage::Idle);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(WordCount::default())
    }
}
