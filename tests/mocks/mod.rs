pub mod summarizer;
pub mod transcript_fetcher;
