use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::catalog::{self, ThemeDescriptor, Variant};
use crate::cli::OutputFormat;
use crate::wire::{GenerationResult, ScenarioCard};

#[derive(Serialize)]
struct ThemeListing<'a> {
    themes: &'a [ThemeDescriptor],
    card_counts: &'a [u32],
}

pub fn render_themes(format: OutputFormat) -> anyhow::Result<String> {
    let listing = ThemeListing { themes: catalog::themes(), card_counts: catalog::card_counts() };
    Ok(match format {
        OutputFormat::Text => themes_text(&listing),
        OutputFormat::Json => serde_json::to_string_pretty(&listing)?,
        OutputFormat::Yaml => serde_yaml::to_string(&listing)?,
    })
}

fn themes_text(listing: &ThemeListing<'_>) -> String {
    let mut out = String::from("\n=== THEMES ===\n");
    for t in listing.themes {
        let tag = match (t.variant, t.fixed_count) {
            (Variant::Complex, Some(n)) => format!("  (complex, always {n} card)"),
            (Variant::Complex, None) => "  (complex)".to_string(),
            _ => String::new(),
        };
        out.push_str(&format!("{} {:<24} {}{}\n", t.icon, t.name.bold(), t.key.dimmed(), tag.cyan()));
    }
    let counts: Vec<String> = listing.card_counts.iter().map(u32::to_string).collect();
    out.push_str(&format!("\nCard counts: {}\n", counts.join(", ")));
    out
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Stand-in for the key entry modal. Returns the trimmed key, or `None` when
/// the user just pressed enter.
pub fn prompt_credential() -> Option<String> {
    println!("{}", "An API key is required to generate scenarios.".yellow());
    print!("Enter your Gemini API key (blank to cancel): ");
    let _ = io::stdout().flush();
    let mut s = String::new();
    match io::stdin().lock().read_line(&mut s) {
        Ok(_) => {
            let key = s.trim();
            if key.is_empty() { None } else { Some(key.to_string()) }
        }
        Err(_) => None,
    }
}

pub fn render(result: &GenerationResult, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Yaml => serde_yaml::to_string(result)?,
    })
}

fn render_text(result: &GenerationResult) -> String {
    let mut out = format!("\n=== {} ===\n", result.theme.bold());
    if result.is_empty() {
        out.push_str("\n(the provider returned no scenarios)\n");
        return out;
    }
    for (i, card) in result.cards.iter().enumerate() {
        match card {
            ScenarioCard::Simple(c) => {
                out.push_str(&format!("\n{} {}\n", format!("#{}", i + 1).green().bold(), c.text));
            }
            ScenarioCard::Complex(c) => {
                out.push_str(&format!("\n{} {}\n", format!("#{}", i + 1).magenta().bold(), c.setup));
                for (label, opt) in ['A', 'B', 'C'].iter().zip(c.options.iter()) {
                    out.push_str(&format!("   {} {}\n", format!("{label})").cyan(), opt));
                }
            }
        }
    }
    out
}
