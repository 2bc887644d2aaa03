//! Resolve command implementation.

use crate::cli::Output;
use crate::source::resolve;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ResolvedVideo {
    video_id: String,
    watch_url: String,
    thumbnail_url: String,
}

/// Run the resolve command.
pub fn run_resolve(url: &str, json: bool) -> Result<()> {
    let video = match resolve(url) {
        Ok(video) => video,
        Err(e) => {
            Output::error(&e.to_string());
            return Err(e.into());
        }
    };

    let resolved = ResolvedVideo {
        video_id: video.to_string(),
        watch_url: video.watch_url(),
        thumbnail_url: video.thumbnail_url(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        Output::kv("Video ID", &resolved.video_id);
        Output::kv("Watch", &resolved.watch_url);
        Output::thumbnail(&resolved.thumbnail_url);
    }

    Ok(())
}
