//! Interactive command - the form-style session.

use super::summarize::{show_result, update_spinner};
use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Pipeline;
use crate::session::Session;
use anyhow::Result;
use console::{style, Term};
use std::io::BufRead;

/// Run an interactive session until the user enters an empty link.
pub async fn run_interactive(settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(&settings) {
        Output::error(&e.to_string());
        Output::info("Run 'ytnotes doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let pipeline = Pipeline::new(&settings)?;
    let mut session = Session::new(settings.default_word_count()?);
    let export_dir = settings.output_dir();
    let term = Term::stdout();

    Output::header("YouTube Summarizer");
    println!("Leave the link empty to quit.\n");

    loop {
        let link = prompt(&term, "Enter YouTube Video Link", None)?;
        if link.trim().is_empty() {
            break;
        }

        match session.enter_url(&link) {
            Ok(video) => Output::thumbnail(&video.thumbnail_url()),
            Err(e) => Output::error(&e.to_string()),
        }

        loop {
            let current = session.word_count().to_string();
            let answer = prompt(
                &term,
                "Enter the desired summary size in words",
                Some(&current),
            )?;
            if answer.trim().is_empty() {
                break;
            }
            match answer.trim().parse::<u32>() {
                Ok(value) => match session.set_word_count(value) {
                    Ok(_) => break,
                    Err(e) => Output::error(&e.to_string()),
                },
                Err(_) => Output::error(&format!("'{}' is not a whole number", answer.trim())),
            }
        }

        if !confirm(&term, "Get Detailed Notes?")? {
            session.finish();
            println!();
            continue;
        }

        let spinner = Output::spinner("Fetching transcript...");
        let word_count = session.word_count();
        let result = session
            .trigger(&pipeline, |stage| {
                update_spinner(&spinner, stage, word_count, pipeline.model())
            })
            .await;
        spinner.finish_and_clear();

        match result {
            Ok(output) => {
                show_result(&output, Some(&export_dir), settings.export.unsupported_chars);
            }
            Err(e) => Output::error(&e.to_string()),
        }

        session.finish();
        println!();
    }

    Ok(())
}

fn prompt(term: &Term, label: &str, default: Option<&str>) -> std::io::Result<String> {
    match default {
        Some(value) => term.write_str(&format!(
            "{} {} {} ",
            style("?").cyan(),
            label,
            style(format!("[{}]", value)).dim()
        ))?,
        None => term.write_str(&format!("{} {}: ", style("?").cyan(), label))?,
    }
    read_line(term)
}

fn confirm(term: &Term, label: &str) -> std::io::Result<bool> {
    term.write_str(&format!(
        "{} {} {} ",
        style("?").cyan(),
        label,
        style("[Y/n]").dim()
    ))?;
    let answer = read_line(term)?.trim().to_lowercase();
    Ok(answer.is_empty() || answer == "y" || answer == "yes")
}

/// Read one answer. `Term::read_line` yields nothing without a terminal, so
/// piped input is read from stdin directly.
fn read_line(term: &Term) -> std::io::Result<String> {
    if term.is_term() {
        term.read_line()
    } else {
        read_piped_line(&mut std::io::stdin().lock())
    }
}

fn read_piped_line<R: BufRead>(reader: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_piped_answers_are_read_in_order() {
        let mut input = Cursor::new("https://youtu.be/dQw4w9WgXcQ\r\n500\ny\n");

        assert_eq!(read_piped_line(&mut input).unwrap(), "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(read_piped_line(&mut input).unwrap(), "500");
        assert_eq!(read_piped_line(&mut input).unwrap(), "y");
        assert_eq!(read_piped_line(&mut input).unwrap(), "");
    }
}
