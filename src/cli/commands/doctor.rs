//! Doctor command - verify configuration and credentials.

use crate::cli::Output;
use crate::config::{Prompts, Settings};
use console::style;
use std::path::Path;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings, config_path: &Path) -> anyhow::Result<()> {
    Output::header("ytnotes Doctor");
    println!();
    println!("Checking configuration and credentials...\n");

    let mut checks = Vec::new();

    println!("{}", style("Language Model").bold());
    let model_checks = vec![
        check_api_key(&settings.summarizer.api_key_env, std::env::var(&settings.summarizer.api_key_env).ok()),
        CheckResult::ok("Endpoint", &settings.summarizer.api_base),
        CheckResult::ok("Model", &settings.summarizer.model),
    ];
    for check in &model_checks {
        check.print();
    }
    checks.extend(model_checks);

    println!();

    println!("{}", style("Export").bold());
    let output_check = check_output_dir(&settings.output_dir());
    output_check.print();
    checks.push(output_check);
    CheckResult::ok(
        "Unsupported PDF characters",
        &settings.export.unsupported_chars.to_string(),
    )
    .print();

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file(config_path);
    config_check.print();
    checks.push(config_check);

    let prompts_check = check_prompts(settings);
    prompts_check.print();
    checks.push(prompts_check);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using ytnotes.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! ytnotes is ready to use.");
    }

    Ok(())
}

/// Check the configured API key variable.
fn check_api_key(var: &str, value: Option<String>) -> CheckResult {
    let hint = format!("Set with: export {}='...' (or add it to .env)", var);
    match value {
        Some(key) if key.trim().is_empty() => CheckResult::error(var, "empty", &hint),
        Some(key) if key.chars().count() > 12 => {
            let chars: Vec<char> = key.chars().collect();
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            let masked = format!("{}...{}", head, tail);
            CheckResult::ok(var, &format!("configured ({})", masked))
        }
        Some(_) => CheckResult::warning(
            var,
            "set but looks too short",
            "Double-check the key with your provider",
        ),
        None => CheckResult::error(var, "not set", &hint),
    }
}

/// Check that exports can be written.
fn check_output_dir(dir: &Path) -> CheckResult {
    if !dir.exists() {
        return CheckResult::warning(
            "Output directory",
            &format!("{} (will be created)", dir.display()),
            "Directory will be created on first export",
        );
    }

    match std::fs::metadata(dir) {
        Ok(meta) if meta.permissions().readonly() => CheckResult::error(
            "Output directory",
            &format!("{} is read-only", dir.display()),
            "Choose another directory with --output-dir or [general] output_dir",
        ),
        Ok(_) => CheckResult::ok("Output directory", &format!("{}", dir.display())),
        Err(e) => CheckResult::error(
            "Output directory",
            &format!("{}: {}", dir.display(), e),
            "Choose another directory with --output-dir or [general] output_dir",
        ),
    }
}

/// Check if config file exists.
fn check_config_file(config_path: &Path) -> CheckResult {
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: ytnotes config init",
        )
    }
}

/// Check that custom prompts (if any) load.
fn check_prompts(settings: &Settings) -> CheckResult {
    let Some(dir) = settings.prompts.custom_dir.as_deref() else {
        return CheckResult::ok("Prompt", "built-in");
    };

    match Prompts::load(Some(dir), None) {
        Ok(prompts) if prompts.summary.template.contains("{{word_count}}") => {
            CheckResult::ok("Prompt", &format!("custom ({})", dir))
        }
        Ok(_) => CheckResult::warning(
            "Prompt",
            "custom template has no {{word_count}} placeholder",
            "The requested word count will not reach the model",
        ),
        Err(e) => CheckResult::error(
            "Prompt",
            &format!("failed to load: {}", e),
            "Fix summary.toml in the custom prompts directory",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_ok() {
        let result = CheckResult::ok("test", "passed");
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.hint.is_none());
    }

    #[test]
    fn test_check_result_error() {
        let result = CheckResult::error("test", "failed", "fix it");
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.hint, Some("fix it".to_string()));
    }

    #[test]
    fn test_api_key_is_masked() {
        let result = check_api_key("GOOGLE_API_KEY", Some("AIzaSyExampleKey1234".to_string()));
        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.message, "configured (AIza...1234)");
    }

    #[test]
    fn test_missing_and_empty_key() {
        assert_eq!(check_api_key("K", None).status, CheckStatus::Error);
        assert_eq!(check_api_key("K", Some(" ".to_string())).status, CheckStatus::Error);
        assert_eq!(check_api_key("K", Some("short".to_string())).status, CheckStatus::Warning);
    }

    #[test]
    fn test_missing_config_file_is_warning() {
        let dir = tempfile::tempdir().unwrap();
        let result = check_config_file(&dir.path().join("config.toml"));
        assert_eq!(result.status, CheckStatus::Warning);
    }
}
