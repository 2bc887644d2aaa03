//! ytnotes - YouTube Summarizer
//!
//! Turns a YouTube video into detailed notes: the video's captions are sent,
//! behind an instruction prompt, to a generative language model, and the
//! result is printed and saved as `summary.txt` and `summary.pdf`.
//!
//! # Architecture
//!
//! Each step is a thin adapter over an external service, run in sequence:
//!
//! - `source` - URL resolution to a validated video reference
//! - `transcript` - Caption retrieval
//! - `summary` - Prompt construction and language model calls
//! - `export` - Plain text and PDF rendering
//! - `pipeline` - Fetch-then-summarize coordination
//! - `session` - Form-style request lifecycle used by the interactive shell
//! - `config` - Configuration management
//!
//! # Example
//!
//! ```rust,no_run
//! use ytnotes::config::Settings;
//! use ytnotes::pipeline::Pipeline;
//! use ytnotes::source::resolve;
//! use ytnotes::summary::WordCount;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(&settings)?;
//!
//!     let video = resolve("https://youtu.be/dQw4w9WgXcQ")?;
//!     let output = pipeline.run(&video, WordCount::new(500)?, |_| {}).await?;
//!     println!("{}", output.summary);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod openai;
pub mod pipeline;
pub mod session;
pub mod source;
pub mod summary;
pub mod transcript;

pub use error::{NotesError, Result};
