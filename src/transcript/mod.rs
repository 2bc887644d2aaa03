//! Transcript retrieval for ytnotes.
//!
//! Provides a trait-based interface over caption services so the pipeline can
//! be exercised without network access.

mod youtube;

pub use youtube::YoutubeTranscriptFetcher;

use crate::error::Result;
use crate::source::VideoReference;
use async_trait::async_trait;

/// Caption text for one video, joined into a single string.
///
/// Timing information is dropped when the fragments are joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    video: VideoReference,
    text: String,
    fragment_count: usize,
}

impl Transcript {
    /// Join caption fragments, in order, with single spaces.
    ///
    /// Fragments are used as-is: no trimming, deduplication or
    /// punctuation cleanup.
    pub fn from_fragments<I, S>(video: VideoReference, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut fragment_count = 0;

        for fragment in fragments {
            if fragment_count > 0 {
                text.push(' ');
            }
            text.push_str(fragment.as_ref());
            fragment_count += 1;
        }

        Self {
            video,
            text,
            fragment_count,
        }
    }

    pub fn video(&self) -> &VideoReference {
        &self.video
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of caption fragments that were joined.
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    pub fn is_empty(&self) -> bool {
        self.fragment_count == 0
    }
}

/// Trait for caption providers.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the transcript of a video.
    ///
    /// Every failure is reported as `NotesError::TranscriptUnavailable`.
    async fn fetch(&self, video: &VideoReference) -> Result<Transcript>;
}
