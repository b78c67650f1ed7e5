//! Rendering of check reports for the terminal.

use adacheck_checker::CheckReport;
use adacheck_checker::rules::RegisteredRule;
use owo_colors::OwoColorize;

/// Pretty-printed `{"issues": [...]}`.
pub fn render_json(report: &CheckReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// One block per finding followed by a summary line.
pub fn render_text(report: &CheckReport, color: bool) -> String {
    let mut out = String::new();

    for issue in &report.issues {
        let label = format!("[{}]", issue.rule_id.label());
        let element = format!("<{}>", issue.element);
        if color {
            out.push_str(&format!("{} {}\n", label.bold().red(), element.cyan()));
        } else {
            out.push_str(&format!("{label} {element}\n"));
        }
        out.push_str(&format!("  {}\n", issue.message));
        out.push_str(&format!("  selector: {}\n", issue.selector));
        out.push_str(&format!("  {}\n\n", issue.code_snippet));
    }

    let summary = match report.issues.len() {
        0 => "No accessibility issues found.".to_string(),
        1 => "1 accessibility issue found.".to_string(),
        n => format!("{n} accessibility issues found."),
    };
    if color && report.is_clean() {
        out.push_str(&format!("{}\n", summary.green()));
    } else if color {
        out.push_str(&format!("{}\n", summary.yellow()));
    } else {
        out.push_str(&summary);
        out.push('\n');
    }
    out
}

/// Registered rules, one per line, in execution order.
pub fn render_rule_list(rules: &[RegisteredRule]) -> String {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {:<10} {}\n", i + 1, rule.name, rule.description))
        .collect()
}
