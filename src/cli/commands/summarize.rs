//! Summarize command implementation.

use crate::cli::preflight;
use crate::cli::Output;
use crate::config::{Settings, UnsupportedCharPolicy};
use crate::export::ExportArtifact;
use crate::pipeline::{Pipeline, PipelineOutput, Stage};
use crate::source::resolve;
use crate::summary::WordCount;
use anyhow::Result;
use indicatif::ProgressBar;
use std::path::Path;

/// Run the summarize command.
pub async fn run_summarize(
    url: &str,
    words: Option<WordCount>,
    output_dir: Option<String>,
    no_export: bool,
    settings: Settings,
) -> Result<()> {
    let video = match resolve(url) {
        Ok(video) => video,
        Err(e) => {
            Output::error(&e.to_string());
            return Err(e.into());
        }
    };

    Output::kv("Video", video.as_str());
    Output::thumbnail(&video.thumbnail_url());

    if let Err(e) = preflight::check(&settings) {
        Output::error(&e.to_string());
        Output::info("Run 'ytnotes doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let word_count = match words {
        Some(w) => w,
        None => settings.default_word_count()?,
    };

    let pipeline = Pipeline::new(&settings)?;

    let spinner = Output::spinner("Fetching transcript...");
    let result = pipeline
        .run(&video, word_count, |stage| {
            update_spinner(&spinner, stage, word_count, pipeline.model())
        })
        .await;
    spinner.finish_and_clear();

    let export_dir = if no_export {
        None
    } else {
        Some(match output_dir {
            Some(dir) => Settings::expand_path(&dir),
            None => settings.output_dir(),
        })
    };

    finish_run(
        result,
        export_dir.as_deref(),
        settings.export.unsupported_chars,
    )
}

/// Report the outcome of a run. Exports are only written for a summary.
pub(crate) fn finish_run(
    result: crate::error::Result<PipelineOutput>,
    export_dir: Option<&Path>,
    policy: UnsupportedCharPolicy,
) -> Result<()> {
    let output = match result {
        Ok(output) => output,
        Err(e) => {
            Output::error(&e.to_string());
            return Err(e.into());
        }
    };

    if !show_result(&output, export_dir, policy) {
        anyhow::bail!("Some exports could not be written");
    }

    Ok(())
}

/// Reflect pipeline progress in the spinner message.
pub(crate) fn update_spinner(spinner: &ProgressBar, stage: Stage, word_count: WordCount, model: &str) {
    match stage {
        Stage::Fetching => spinner.set_message("Fetching transcript..."),
        Stage::Summarizing => spinner.set_message(format!(
            "Generating ~{}-word summary with {}...",
            word_count, model
        )),
        _ => {}
    }
}

/// Print the summary and write the export files.
///
/// Returns false when any export failed. Exports are written in order, so
/// a PDF encoding failure still leaves summary.txt in place.
pub(crate) fn show_result(
    output: &PipelineOutput,
    export_dir: Option<&Path>,
    policy: UnsupportedCharPolicy,
) -> bool {
    Output::kv(
        "Transcript",
        &format!("{} chars, {} words requested", output.transcript_chars, output.word_count),
    );
    Output::summary(output.summary.as_str());

    let Some(dir) = export_dir else {
        return true;
    };

    let mut all_written = true;
    for artifact in ExportArtifact::ALL {
        match artifact.write_to(&output.summary, dir, policy) {
            Ok(path) => Output::success(&format!(
                "Saved {} ({}): {}",
                artifact.label(),
                artifact.mime_type(),
                path.display()
            )),
            Err(e) => {
                all_written = false;
                Output::error(&format!("{} export failed: {}", artifact.label(), e));
                if matches!(e, crate::error::NotesError::Encoding { .. }) {
                    Output::info(
                        "Set [export] unsupported_chars = \"replace\" to substitute unsupported characters.",
                    );
                }
            }
        }
    }

    all_written
}
