//! Configuration settings for ytnotes.

use crate::summary::WordCount;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub transcript: TranscriptSettings,
    pub summarizer: SummarizerSettings,
    pub export: ExportSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory where summary.txt and summary.pdf are written.
    pub output_dir: String,
    /// Word count used when none is given on the command line.
    pub default_word_count: u32,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            default_word_count: WordCount::DEFAULT,
        }
    }
}

/// Caption retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Caption languages in order of preference.
    pub languages: Vec<String>,
    /// Keep HTML formatting tags in caption text.
    pub preserve_formatting: bool,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            preserve_formatting: false,
        }
    }
}

/// Language model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    /// Base URL of an OpenAI-compatible chat completions API.
    pub api_base: String,
    /// Model name sent with each request.
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Request timeout. None leaves the HTTP client default in place.
    pub timeout_seconds: Option<u64>,
    /// Sampling temperature. None uses the provider default.
    pub temperature: Option<f32>,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            timeout_seconds: None,
            temperature: None,
        }
    }
}

/// What to do with characters the PDF font cannot encode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedCharPolicy {
    /// Fail the PDF export.
    #[default]
    Strict,
    /// Substitute `?`.
    Replace,
}

impl std::str::FromStr for UnsupportedCharPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "fail" => Ok(UnsupportedCharPolicy::Strict),
            "replace" => Ok(UnsupportedCharPolicy::Replace),
            _ => Err(format!("Unknown policy: {}. Use strict or replace.", s)),
        }
    }
}

impl std::fmt::Display for UnsupportedCharPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedCharPolicy::Strict => write!(f, "strict"),
            UnsupportedCharPolicy::Replace => write!(f, "replace"),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ExportSettings {
    pub unsupported_chars: UnsupportedCharPolicy,
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory containing a summary.toml that overrides the default prompt.
    pub custom_dir: Option<String>,
    /// Custom variables available in the prompt as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::NotesError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ytnotes")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded output directory path.
    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.output_dir)
    }

    /// The configured default word count, validated.
    pub fn default_word_count(&self) -> crate::error::Result<WordCount> {
        WordCount::new(self.general.default_word_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let settings = Settings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();

        assert_eq!(parsed.general.default_word_count, 1000);
        assert_eq!(parsed.transcript.languages, vec!["en".to_string()]);
        assert_eq!(parsed.summarizer.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(parsed.export.unsupported_chars, UnsupportedCharPolicy::Strict);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: Settings = toml::from_str(
            r#"
            [summarizer]
            model = "gpt-4o-mini"
            api_base = "https://api.openai.com/v1"
            api_key_env = "OPENAI_API_KEY"

            [export]
            unsupported_chars = "replace"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.summarizer.model, "gpt-4o-mini");
        assert_eq!(parsed.summarizer.timeout_seconds, None);
        assert_eq!(parsed.export.unsupported_chars, UnsupportedCharPolicy::Replace);
        assert_eq!(parsed.general.output_dir, ".");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.general.default_word_count, 1000);
    }

    #[test]
    fn test_out_of_range_default_word_count_is_rejected() {
        let mut settings = Settings::default();
        settings.general.default_word_count = 5000;
        assert!(settings.default_word_count().is_err());
    }
}
