//! Findings reported by the rules.

use adacheck_dom::{DomTree, NodeId};
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::selector::build_selector;
use crate::snippet::extract_snippet;

/// Identifier of the rule that produced a finding.
///
/// The wire form (`Display`, `FromStr`, serde) is the `SCREAMING_SNAKE_CASE`
/// code, e.g. `IMG_ALT_MISSING`. These eight codes are the only ones the
/// engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    /// `<html>` is missing or has a blank `lang` attribute.
    DocLangMissing,
    /// No `<title>`, or its text is blank.
    DocTitleMissing,
    /// `<img>` without a non-blank `alt`.
    ImgAltMissing,
    /// `<img>` whose `alt` exceeds the length limit.
    ImgAltLength,
    /// `<a>` whose text is a generic phrase such as "click here".
    LinkGenericText,
    /// An `<h1>` after the first one.
    HeadingMultipleH1,
    /// A heading that skips one or more levels.
    HeadingOrder,
    /// Text whose inline colors fall below the WCAG contrast minimum.
    ColorContrast,
}

impl RuleId {
    /// Every rule identifier, in the order the engine reports them.
    pub const ALL: [Self; 8] = [
        Self::DocLangMissing,
        Self::DocTitleMissing,
        Self::ImgAltMissing,
        Self::ImgAltLength,
        Self::LinkGenericText,
        Self::HeadingMultipleH1,
        Self::HeadingOrder,
        Self::ColorContrast,
    ];

    /// Short label for display next to a finding.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DocLangMissing => "Language",
            Self::DocTitleMissing => "Title",
            Self::ImgAltMissing => "Alt Missing",
            Self::ImgAltLength => "Alt Too Long",
            Self::LinkGenericText => "Generic Link",
            Self::HeadingMultipleH1 => "Multiple H1",
            Self::HeadingOrder => "Heading Order",
            Self::ColorContrast => "Low Contrast",
        }
    }
}

/// One reported compliance issue.
///
/// Serializes with the field names `ruleId`, `message`, `element`,
/// `selector` and `codeSnippet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Rule that produced this finding.
    pub rule_id: RuleId,
    /// Human-readable description.
    pub message: String,
    /// Tag name of the element the finding is attached to.
    pub element: String,
    /// Path-style locator, see [`build_selector`].
    pub selector: String,
    /// Single-line markup of the element, see [`extract_snippet`].
    pub code_snippet: String,
}

impl Finding {
    /// Create a finding located at `node`, deriving the element name,
    /// selector and snippet from the tree.
    #[must_use]
    pub fn at(tree: &DomTree, node: NodeId, rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            message: message.into(),
            element: tree.tag_name(node).unwrap_or_default().to_string(),
            selector: build_selector(tree, node),
            code_snippet: extract_snippet(tree, node),
        }
    }
}
