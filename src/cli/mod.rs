//! CLI module for ytnotes.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use crate::summary::WordCount;
use clap::{Parser, Subcommand};

/// ytnotes - YouTube Summarizer
///
/// Fetches a video's captions, asks a language model for detailed notes, and
/// saves them as TXT and PDF.
#[derive(Parser, Debug)]
#[command(name = "ytnotes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a video and save the notes
    Summarize {
        /// YouTube URL or video ID
        url: String,

        /// Desired summary size in words (100-2000, steps of 50)
        #[arg(short, long)]
        words: Option<WordCount>,

        /// Directory for summary.txt and summary.pdf
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Print the summary without writing any files
        #[arg(long)]
        no_export: bool,
    },

    /// Interactive session: enter a link, pick a size, get notes
    Interactive,

    /// Show the video ID and thumbnail for a URL
    Resolve {
        /// YouTube URL or video ID
        url: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check configuration and credentials
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the default configuration file if none exists
    Init,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
