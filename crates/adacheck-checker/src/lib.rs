//! High-level checking API for adacheck.
//!
//! # Scope
//!
//! This crate provides:
//! - **Validation** - blank documents are rejected up front
//! - **Parsing** - HTML text to [`DomTree`] via [`adacheck_html`]
//! - **Rule evaluation** - every rule in [`adacheck_rules`], in order
//! - **Reporting** - a [`CheckReport`] that serializes as `{"issues": [...]}`
//!
//! Each call is independent: nothing is cached or shared between documents,
//! so callers may check documents on as many threads as they like.

pub use adacheck_dom as dom;
pub use adacheck_html as html;
pub use adacheck_rules as rules;

use adacheck_dom::DomTree;
use adacheck_html::{ParseError, parse_document};
use adacheck_rules::{Finding, RuleId, run_rules};
use serde::Serialize;
use thiserror::Error;

/// Error type for checking a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The document could not be accepted for parsing.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The result of checking one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Findings in rule-group order, then document order.
    pub issues: Vec<Finding>,

    /// Recoverable parser errors, for diagnostics only.
    #[serde(skip)]
    pub parse_errors: Vec<String>,
}

impl CheckReport {
    /// Whether the document passed every rule.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of findings reported by `rule_id`.
    #[must_use]
    pub fn count(&self, rule_id: RuleId) -> usize {
        self.issues.iter().filter(|f| f.rule_id == rule_id).count()
    }
}

/// Check an HTML document.
///
/// # Errors
///
/// Returns [`CheckError::Parse`] when `html` is empty or whitespace only.
pub fn check_html(html: &str) -> Result<CheckReport, CheckError> {
    let parsed = parse_document(html)?;
    Ok(CheckReport {
        issues: check_tree(&parsed.dom),
        parse_errors: parsed.parse_errors,
    })
}

/// Run every rule against a tree that has already been parsed.
#[must_use]
pub fn check_tree(tree: &DomTree) -> Vec<Finding> {
    run_rules(tree)
}
