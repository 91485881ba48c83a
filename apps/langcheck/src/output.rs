//! Output rendering for the full run and for single checks.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! per-stage results and a top-level summary.

use crate::config::OutputMode;
use crate::models::{CheckOutcome, Report, Stage, Summary, Warning};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: OutputMode) -> bool {
    output != OutputMode::Json && utils::use_colors()
}

fn print_json(value: &JsonVal) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
    }
}

fn error_line(color: bool, subject: &str, stage: Stage, message: &str) {
    if color {
        println!(
            "{} {} {} ❲{}❳ — {}",
            "✖".red(),
            "⟦error⟧".red().bold(),
            subject.bold(),
            stage.as_str(),
            message
        );
    } else {
        println!("✖ ⟦error⟧ {} ❲{}❳ — {}", subject, stage.as_str(), message);
    }
}

fn warn_line(color: bool, stage: Stage, w: &Warning) {
    if color {
        println!(
            "{} {} {} ❲{}❳ — {}",
            "▲".yellow(),
            "⟦warn⟧".yellow().bold(),
            w.language().bold(),
            stage.as_str(),
            w
        );
    } else {
        println!("▲ ⟦warn⟧ {} ❲{}❳ — {}", w.language(), stage.as_str(), w);
    }
}

fn human_names(color: bool, invalid: &[String]) {
    for name in invalid {
        error_line(color, name, Stage::Names, "Invalid language folder");
    }
}

fn human_outcome(color: bool, stage: Stage, outcome: &CheckOutcome) {
    for w in &outcome.warnings {
        warn_line(color, stage, w);
    }
    for (lang, message) in outcome.issues.iter() {
        error_line(color, lang, stage, message);
    }
}

/// Final verdict line.
pub fn summary_text(summary: &Summary) -> String {
    match (summary.halted_at, summary.warnings) {
        (Some(stage), _) => format!("Validation failed at {}", stage),
        (None, 0) => "Validation passed!".to_string(),
        (None, n) => format!("Validation passed with {} warning(s)", n),
    }
}

/// Print a full validation report in the requested format.
pub fn print_report(report: &Report, output: OutputMode) {
    match output {
        OutputMode::Json => print_json(&compose_report_json(report)),
        OutputMode::Human => {
            let color = use_colors(output);
            human_names(color, &report.invalid_folders);
            if let Some(structure) = &report.structure {
                human_outcome(color, Stage::Structure, structure);
            }
            if let Some(keys) = &report.keys {
                human_outcome(color, Stage::Keys, keys);
            }
            let line = summary_text(&report.summary);
            if !color {
                println!("{}", line);
            } else if report.summary.passed {
                println!("{}", line.green().bold());
            } else {
                println!("{}", line.red().bold());
            }
        }
    }
}

/// Print the folder-name check on its own.
pub fn print_names(invalid: &[String], output: OutputMode) {
    match output {
        OutputMode::Json => print_json(&compose_names_json(invalid)),
        OutputMode::Human => {
            let color = use_colors(output);
            human_names(color, invalid);
            if invalid.is_empty() {
                println!("All language folder names are valid");
            }
        }
    }
}

/// Print the structure or key check on its own.
pub fn print_outcome(stage: Stage, outcome: &CheckOutcome, output: OutputMode) {
    match output {
        OutputMode::Json => print_json(&compose_outcome_json(stage, outcome)),
        OutputMode::Human => {
            let color = use_colors(output);
            human_outcome(color, stage, outcome);
            let line = format!(
                "— {} — issues={} warnings={}",
                stage,
                outcome.issues.len(),
                outcome.warning_count()
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    serde_json::to_value(report).unwrap_or_default()
}

/// Compose folder-name JSON object (pure) for testing/snapshot purposes.
pub fn compose_names_json(invalid: &[String]) -> JsonVal {
    json!({
        "stage": Stage::Names,
        "invalid_folders": invalid,
        "passed": invalid.is_empty(),
    })
}

/// Compose single-check JSON object (pure) for testing/snapshot purposes.
pub fn compose_outcome_json(stage: Stage, outcome: &CheckOutcome) -> JsonVal {
    json!({
        "stage": stage,
        "issues": outcome.issues,
        "warnings": outcome.warnings,
        "passed": !outcome.has_issues(),
    })
}
