//! Error types for ytnotes.

use thiserror::Error;

/// Underlying reason a transcript could not be retrieved.
///
/// Users only ever see the generic [`NotesError::TranscriptUnavailable`]
/// message; the cause is kept for logs and `-v` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptFailure {
    NotFound(String),
    Disabled(String),
    RateLimited(String),
    Network(String),
    Other(String),
}

impl TranscriptFailure {
    /// Tag a raw transcript-service error message with a cause.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let message = message.to_string();

        if lower.contains("disabled") {
            TranscriptFailure::Disabled(message)
        } else if lower.contains("too many requests")
            || lower.contains("429")
            || lower.contains("ip blocked")
            || lower.contains("request blocked")
        {
            TranscriptFailure::RateLimited(message)
        } else if lower.contains("no transcript")
            || lower.contains("not found")
            || lower.contains("unavailable")
        {
            TranscriptFailure::NotFound(message)
        } else if lower.contains("connect")
            || lower.contains("timed out")
            || lower.contains("dns")
            || lower.contains("network")
        {
            TranscriptFailure::Network(message)
        } else {
            TranscriptFailure::Other(message)
        }
    }

    /// Short tag for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            TranscriptFailure::NotFound(_) => "not_found",
            TranscriptFailure::Disabled(_) => "disabled",
            TranscriptFailure::RateLimited(_) => "rate_limited",
            TranscriptFailure::Network(_) => "network",
            TranscriptFailure::Other(_) => "other",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            TranscriptFailure::NotFound(d)
            | TranscriptFailure::Disabled(d)
            | TranscriptFailure::RateLimited(d)
            | TranscriptFailure::Network(d)
            | TranscriptFailure::Other(d) => d,
        }
    }
}

impl std::fmt::Display for TranscriptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tag(), self.detail())
    }
}

/// Underlying reason the language model produced no summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    Quota(String),
    Auth(String),
    Network(String),
    EmptyResponse,
    Other(String),
}

impl GenerationFailure {
    /// Tag an API error message with a cause.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let message = message.to_string();

        if lower.contains("quota")
            || lower.contains("resource_exhausted")
            || lower.contains("rate limit")
        {
            GenerationFailure::Quota(message)
        } else if lower.contains("api key")
            || lower.contains("api_key")
            || lower.contains("unauthorized")
            || lower.contains("permission_denied")
        {
            GenerationFailure::Auth(message)
        } else {
            GenerationFailure::Other(message)
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            GenerationFailure::Quota(_) => "quota",
            GenerationFailure::Auth(_) => "auth",
            GenerationFailure::Network(_) => "network",
            GenerationFailure::EmptyResponse => "empty_response",
            GenerationFailure::Other(_) => "other",
        }
    }
}

impl std::fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationFailure::EmptyResponse => write!(f, "empty_response"),
            GenerationFailure::Quota(d)
            | GenerationFailure::Auth(d)
            | GenerationFailure::Network(d)
            | GenerationFailure::Other(d) => write!(f, "{}: {}", self.tag(), d),
        }
    }
}

/// Library-level error type for ytnotes operations.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Invalid YouTube URL. Please enter a valid link: {0}")]
    InvalidUrl(String),

    #[error("Enter a valid YouTube URL first.")]
    MissingUrl,

    #[error("Invalid word count: {0}")]
    InvalidWordCount(String),

    #[error("Error fetching transcript for video {video_id}. Captions may be missing or disabled.")]
    TranscriptUnavailable {
        video_id: String,
        cause: TranscriptFailure,
    },

    #[error("Failed to generate summary. Please try again.")]
    GenerationFailed { cause: GenerationFailure },

    #[error("Cannot encode {character:?} (position {position}) for the PDF export")]
    Encoding { character: char, position: usize },

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for ytnotes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_transcript_failures() {
        assert_eq!(
            TranscriptFailure::classify("Subtitles are disabled for this video").tag(),
            "disabled"
        );
        assert_eq!(
            TranscriptFailure::classify("No transcript found for languages [en]").tag(),
            "not_found"
        );
        assert_eq!(
            TranscriptFailure::classify("Too Many Requests").tag(),
            "rate_limited"
        );
        assert_eq!(
            TranscriptFailure::classify("error trying to connect: dns error").tag(),
            "network"
        );
        assert_eq!(TranscriptFailure::classify("boom").tag(), "other");
    }

    #[test]
    fn test_classify_generation_failures() {
        assert_eq!(
            GenerationFailure::classify("You exceeded your current quota").tag(),
            "quota"
        );
        assert_eq!(
            GenerationFailure::classify("API key not valid. Please pass a valid API key.").tag(),
            "auth"
        );
        assert_eq!(GenerationFailure::classify("internal").tag(), "other");
    }

    #[test]
    fn test_user_message_hides_cause() {
        let err = NotesError::GenerationFailed {
            cause: GenerationFailure::Quota("429 RESOURCE_EXHAUSTED".to_string()),
        };
        assert_eq!(err.to_string(), "Failed to generate summary. Please try again.");

        let err = NotesError::TranscriptUnavailable {
            video_id: "dQw4w9WgXcQ".to_string(),
            cause: TranscriptFailure::Disabled("disabled".to_string()),
        };
        assert!(err.to_string().contains("dQw4w9WgXcQ"));
    }
}
