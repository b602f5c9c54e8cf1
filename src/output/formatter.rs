use std::io::IsTerminal;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::scoring::{Rule, ScoringConfig, ScoringResult, CONTAMINANTS};

/// A scoring result together with the sheet metadata it was computed from.
/// This is also the shape the JSON output emits.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub location: Option<&'a str>,
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub result: &'a ScoringResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Star glyph string for a rating, e.g. 4 -> "★★★★☆"
pub fn format_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Color a pre-padded score string by how good the score is.
fn colorize_score(text: String, score: f64, use_colors: bool) -> String {
    if !use_colors {
        return text;
    }
    if score >= 90.0 {
        text.green().to_string()
    } else if score >= 60.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Format a summary as a multi-line report: headline, index, rating,
/// limiting factor, then the per-contaminant breakdown table.
pub fn format_summary(summary: &Summary, use_colors: bool) -> String {
    let result = summary.result;
    let mut lines = Vec::new();

    let title = match (summary.location, summary.date) {
        (Some(location), Some(date)) => format!("Water quality for {} on {}", location, date),
        (Some(location), None) => format!("Water quality for {}", location),
        (None, Some(date)) => format!("Water quality on {}", date),
        (None, None) => "Water quality summary".to_string(),
    };
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title);
    }

    let index_str = colorize_score(format!("{:.1}", result.index), result.index, use_colors);
    lines.push(format!("Index:  {} / 100", index_str));
    lines.push(format!("Rating: {} ({}/5)", format_stars(result.rating), result.rating));
    lines.push(format!("Limiting factor: {}", result.limiting_factor));

    lines.push(String::new());
    lines.push(format!(
        "{:<12} {:>7} {:>7} {:>13}",
        "Contaminant", "Score", "Share", "Contribution"
    ));
    for entry in &result.subscores {
        // Pad before coloring so ANSI codes don't break the alignment
        let score_str = colorize_score(format!("{:>7.1}", entry.score), entry.score, use_colors);
        lines.push(format!(
            "{:<12} {} {:>6.1}% {:>13.2}",
            entry.contaminant,
            score_str,
            entry.share * 100.0,
            entry.contribution
        ));
    }

    lines.join("\n")
}

/// Format a summary as pretty-printed JSON.
pub fn format_summary_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Render the reference table with effective weights (for `limits`).
pub fn format_limits(config: &ScoringConfig) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{:<12} {:<26} {:>7}", "Contaminant", "Rule", "Weight"));
    for contaminant in CONTAMINANTS {
        let rule = match contaminant.rule {
            Rule::LowerIsBetter { limit } => format!("at most {}", limit),
            Rule::TargetBand { low, high, slope } => {
                format!("{} to {} (slope {})", low, high, slope)
            }
            Rule::BinarySafe => "no violation".to_string(),
        };
        lines.push(format!(
            "{:<12} {:<26} {:>7.2}",
            contaminant.id,
            rule,
            config.weight_for(contaminant)
        ));
    }
    lines.join("\n")
}
