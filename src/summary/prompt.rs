//! Word-count bounds and summary prompt construction.

use crate::config::Prompts;
use crate::error::{NotesError, Result};
use crate::transcript::Transcript;
use std::collections::HashMap;

/// Requested summary length in words.
///
/// Always within [`WordCount::MIN`]..=[`WordCount::MAX`] and a multiple of
/// [`WordCount::STEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount(u32);

impl WordCount {
    pub const MIN: u32 = 100;
    pub const MAX: u32 = 2000;
    pub const STEP: u32 = 50;
    pub const DEFAULT: u32 = 1000;

    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(NotesError::InvalidWordCount(format!(
                "{} is outside {}..={}",
                value,
                Self::MIN,
                Self::MAX
            )));
        }
        if value % Self::STEP != 0 {
            return Err(NotesError::InvalidWordCount(format!(
                "{} is not a multiple of {}",
                value,
                Self::STEP
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::str::FromStr for WordCount {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a whole number", s.trim()))?;
        WordCount::new(value).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instruction text sent ahead of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPrompt {
    text: String,
    word_count: WordCount,
}

impl SummaryPrompt {
    /// Render the configured summary template for a word count.
    pub fn new(prompts: &Prompts, word_count: WordCount) -> Self {
        let mut vars = HashMap::new();
        vars.insert("word_count".to_string(), word_count.to_string());

        Self {
            text: prompts.render_with_custom(&prompts.summary.template, &vars),
            word_count,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// The model request payload: prompt immediately followed by the transcript.
    pub fn payload(&self, transcript: &Transcript) -> String {
        let mut payload = String::with_capacity(self.text.len() + transcript.text().len());
        payload.push_str(&self.text);
        payload.push_str(transcript.text());
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::resolve;

    #[test]
    fn test_word_count_bounds() {
        assert!(WordCount::new(100).is_ok());
        assert!(WordCount::new(2000).is_ok());
        assert!(WordCount::new(1050).is_ok());
        assert!(WordCount::new(50).is_err());
        assert!(WordCount::new(2050).is_err());
        assert!(WordCount::new(0).is_err());
        assert!(WordCount::new(125).is_err());
    }

    #[test]
    fn test_word_count_from_str() {
        assert_eq!("750".parse::<WordCount>().unwrap().get(), 750);
        assert_eq!(" 1000 ".parse::<WordCount>().unwrap().get(), 1000);
        assert!("abc".parse::<WordCount>().is_err());
        assert!("-100".parse::<WordCount>().is_err());
        assert!("99".parse::<WordCount>().is_err());
        assert_eq!(WordCount::default().get(), 1000);
    }

    #[test]
    fn test_default_prompt_text() {
        let prompt = SummaryPrompt::new(&Prompts::default(), WordCount::new(1000).unwrap());
        assert_eq!(
            prompt.text(),
            "\nYou are a YouTube video summarizer. You will take the transcript text and summarize \nthe entire video. Please provide the summary of the text given here:\n in 1000 words:"
        );
    }

    #[test]
    fn test_payload_is_prompt_then_transcript() {
        let prompts = Prompts {
            summary: crate::config::SummaryPrompts {
                template: "Summarize in {{word_count}} words:".to_string(),
            },
            ..Default::default()
        };
        let prompt = SummaryPrompt::new(&prompts, WordCount::new(300).unwrap());
        let transcript =
            Transcript::from_fragments(resolve("dQw4w9WgXcQ").unwrap(), ["hello", "world"]);

        assert_eq!(
            prompt.payload(&transcript),
            "Summarize in 300 words:hello world"
        );
    }
}
