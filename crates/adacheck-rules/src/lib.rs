//! Accessibility rule engine for adacheck.
//!
//! # Scope
//!
//! This crate implements:
//! - **DOM utilities** - selector construction, snippet extraction and
//!   inline `style` attribute parsing over an [`adacheck_dom::DomTree`]
//! - **Color math** ([WCAG 2.x](https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio))
//!   - Named, hex and `rgb()` color parsing
//!   - Relative luminance and contrast ratio
//!   - Large-text classification
//! - **Rules** - document language and title, image alt text, generic link
//!   text, heading structure, inline color contrast
//! - **Engine** - runs every rule in a fixed order and concatenates findings
//!
//! Every function here is total: unrecognized colors, malformed style
//! declarations and odd font metrics fall back to defined defaults instead
//! of failing.
//!
//! # Not Yet Implemented
//!
//! - Stylesheet (`<style>`, `<link>`) resolution; only inline styles count
//! - `hsl()`, `rgba()` alpha blending and the extended named-color table

/// RGB colors, WCAG luminance and contrast ratio.
pub mod color;
/// Findings and their rule identifiers.
pub mod finding;
/// Individual rules and the engine that runs them.
pub mod rules;
/// Path-style selectors locating a node in the tree.
pub mod selector;
/// Whitespace-collapsed markup snippets.
pub mod snippet;
/// Inline `style` attribute parsing and font metrics.
pub mod style;

pub use color::{Rgb, contrast_ratio, parse_color, relative_luminance};
pub use finding::{Finding, RuleId};
pub use rules::{RegisteredRule, Rule, RuleEngine, run_rules};
pub use selector::build_selector;
pub use snippet::{MAX_SNIPPET_LEN, extract_snippet, extract_snippet_with_limit};
pub use style::{StyleMap, is_large_text, parse_inline_style};
