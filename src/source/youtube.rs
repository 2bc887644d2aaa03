//! YouTube URL resolution.

use super::VideoReference;
use crate::error::{NotesError, Result};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Extracts video identifiers from YouTube URLs and bare IDs.
pub struct YoutubeResolver {
    video_id_regex: Regex,
}

impl YoutubeResolver {
    pub fn new() -> Self {
        // First match wins. The trailing group rejects tokens longer than 11.
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                v= | youtu\.be/ | embed/ | v/ | watch\?v= | shorts/ | e/ | ^
            )
            ([A-Za-z0-9_-]{11})
            (?:[^A-Za-z0-9_-]|$)
        ",
        )
        .expect("Invalid regex");

        Self { video_id_regex }
    }

    /// Extract a video reference from a YouTube URL or bare ID.
    pub fn resolve(&self, input: &str) -> Result<VideoReference> {
        let trimmed = input.trim();

        let id = self
            .video_id_regex
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| NotesError::InvalidUrl(trimmed.to_string()))?;

        debug!("Resolved {} to video {}", trimmed, id);
        Ok(VideoReference::new_unchecked(id))
    }
}

impl Default for YoutubeResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve input with a shared resolver.
pub fn resolve(input: &str) -> Result<VideoReference> {
    static RESOLVER: OnceLock<YoutubeResolver> = OnceLock::new();
    RESOLVER.get_or_init(YoutubeResolver::new).resolve(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(input: &str) -> Option<String> {
        resolve(input).ok().map(|v| v.as_str().to_string())
    }

    #[test]
    fn test_resolve_url_shapes() {
        let expected = Some("dQw4w9WgXcQ".to_string());

        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://youtube.com/embed/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/shorts/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/v/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/e/dQw4w9WgXcQ"), expected);
        assert_eq!(id("youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("dQw4w9WgXcQ"), expected);
        assert_eq!(id("  dQw4w9WgXcQ \n"), expected);
    }

    #[test]
    fn test_query_suffix_is_ignored() {
        let expected = Some("dQw4w9WgXcQ".to_string());

        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ?t=30"), expected);
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123&index=2"),
            expected
        );
        assert_eq!(
            id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            expected
        );
    }

    #[test]
    fn test_identifiers_with_dash_and_underscore() {
        assert_eq!(id("https://youtu.be/a-b_c-d_e-f"), Some("a-b_c-d_e-f".to_string()));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(id("not a url"), None);
        assert_eq!(id(""), None);
        assert_eq!(id("not-a-video-id"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQX"), None);
        assert_eq!(id("https://example.com/page"), None);
    }

    #[test]
    fn test_invalid_url_error_carries_input() {
        match resolve("not a url") {
            Err(NotesError::InvalidUrl(input)) => assert_eq!(input, "not a url"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }
}
