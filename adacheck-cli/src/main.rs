//! adacheck CLI
//!
//! Checks a single HTML document for accessibility issues and prints the
//! findings as JSON or as a readable report.

mod output;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use adacheck_checker::check_html;
use adacheck_checker::rules::RuleEngine;
use adacheck_common::warning::{clear_warnings, warn_once};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::output::{render_json, render_rule_list, render_text};

/// Accessibility checker for HTML documents
#[derive(Parser)]
#[command(name = "adacheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// HTML file to check (stdin when omitted)
    file: Option<PathBuf>,

    /// Check this HTML string instead of a file
    #[arg(long, conflicts_with = "file")]
    html: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Report parser recoveries on stderr
    #[arg(long, short)]
    verbose: bool,

    /// List the rules in execution order and exit
    #[arg(long)]
    list_rules: bool,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `{"issues": [...]}`, pretty-printed
    Json,
    /// Human-readable report, colored when stdout is a terminal
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_rules {
        print!("{}", render_rule_list(RuleEngine::new().rules()));
        return Ok(());
    }

    let html = read_input(&cli)?;
    let report = check_html(&html)?;

    if cli.verbose {
        clear_warnings();
        for error in &report.parse_errors {
            warn_once("html", error);
        }
    }

    match cli.format {
        Format::Json => println!("{}", render_json(&report)?),
        Format::Text => print!("{}", render_text(&report, io::stdout().is_terminal())),
    }

    Ok(())
}

/// Read the document from `--html`, the file argument, or stdin.
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }
    match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => io::read_to_string(io::stdin()).context("failed to read HTML from stdin"),
    }
}
