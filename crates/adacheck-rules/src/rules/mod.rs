//! Rules and the engine that runs them.
//!
//! Each rule is a plain function from a tree to the findings it reports, in
//! document order. The engine holds the rules in a fixed order and
//! concatenates their output without deduplication.

/// Color contrast of text using inline styles.
pub mod contrast;
/// Document language and title.
pub mod doc;
/// Heading multiplicity and hierarchy.
pub mod headings;
/// Image alternative text.
pub mod images;
/// Generic link text.
pub mod links;

use adacheck_dom::DomTree;

use crate::finding::Finding;

/// Shape shared by every rule.
pub type Rule = fn(&DomTree) -> Vec<Finding>;

/// A rule together with its stable name.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredRule {
    /// Stable, kebab-case name of the rule.
    pub name: &'static str,
    /// One-line description of what the rule checks.
    pub description: &'static str,
    /// The rule itself.
    pub check: Rule,
}

/// Every rule, in execution order: document, images, links, headings,
/// contrast.
const DEFAULT_RULES: [RegisteredRule; 6] = [
    RegisteredRule {
        name: "doc-lang",
        description: "<html> declares a non-blank lang attribute",
        check: doc::check_doc_lang,
    },
    RegisteredRule {
        name: "doc-title",
        description: "the document has a non-empty <title>",
        check: doc::check_doc_title,
    },
    RegisteredRule {
        name: "images",
        description: "<img> alt text is present and concise",
        check: images::check_images,
    },
    RegisteredRule {
        name: "links",
        description: "link text is not a generic phrase",
        check: links::check_links,
    },
    RegisteredRule {
        name: "headings",
        description: "a single <h1> and no skipped heading levels",
        check: headings::check_headings,
    },
    RegisteredRule {
        name: "contrast",
        description: "inline text colors meet the WCAG AA contrast minimum",
        check: contrast::check_contrast,
    },
];

/// Runs the registered rules against a tree.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<RegisteredRule>,
}

impl RuleEngine {
    /// Create an engine with every rule in the standard order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    /// The registered rules, in execution order.
    #[must_use]
    pub fn rules(&self) -> &[RegisteredRule] {
        &self.rules
    }

    /// Run every rule and concatenate the findings, preserving rule order
    /// and each rule's internal order.
    #[must_use]
    pub fn run(&self, tree: &DomTree) -> Vec<Finding> {
        self.rules
            .iter()
            .flat_map(|rule| (rule.check)(tree))
            .collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every rule against `tree` with a default [`RuleEngine`].
#[must_use]
pub fn run_rules(tree: &DomTree) -> Vec<Finding> {
    RuleEngine::new().run(tree)
}
