//! Pre-flight checks before network calls.
//!
//! Validates that the model credential is available before fetching a
//! transcript that could not be summarized anyway.

use crate::config::Settings;
use crate::error::Result;
use crate::summary::SummarizerConfig;

/// Check that a summary can be requested with the current settings.
pub fn check(settings: &Settings) -> Result<()> {
    SummarizerConfig::from_settings(&settings.summarizer)?;
    Ok(())
}
