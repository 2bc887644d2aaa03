//! Video source handling for ytnotes.
//!
//! Turns free-form user input into a validated [`VideoReference`].

mod youtube;

pub use youtube::{resolve, YoutubeResolver};

use serde::Serialize;

/// Length of a YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

/// A validated 11-character YouTube video identifier.
///
/// Only [`YoutubeResolver`] can construct one, so holding a `VideoReference`
/// means the identifier has the right shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoReference(String);

impl VideoReference {
    pub(crate) fn new_unchecked(id: &str) -> Self {
        debug_assert_eq!(id.len(), VIDEO_ID_LEN);
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Thumbnail image address for this video.
    pub fn thumbnail_url(&self) -> String {
        format!("http://img.youtube.com/vi/{}/0.jpg", self.0)
    }

    /// Canonical watch page address.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
