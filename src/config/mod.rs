//! Configuration module for ytnotes.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, SummaryPrompts};
pub use settings::{
    ExportSettings, GeneralSettings, PromptSettings, Settings, SummarizerSettings,
    TranscriptSettings, UnsupportedCharPolicy,
};
