//! HTML parsing boundary for the adacheck accessibility checker.
//!
//! # Scope
//!
//! This crate turns raw HTML text into an [`adacheck_dom::DomTree`]:
//! - **Input validation** - blank input is rejected before parsing
//! - **Tree construction** - delegated to `scraper` (html5ever), which follows
//!   the [WHATWG parsing algorithm](https://html.spec.whatwg.org/multipage/parsing.html)
//!   and synthesizes implied `html`, `head` and `body` elements
//! - **Conversion** - the parser's tree is copied into the arena tree in
//!   document order; doctypes and processing instructions are dropped
//!
//! Parse errors are recoverable by definition and are reported alongside the
//! tree, never as a failure.

use adacheck_dom::{Attributes, DomTree, NodeId, NodeType};
use scraper::Html;
use thiserror::Error;

/// Error type for the parsing boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("html must be a non-empty string")]
    EmptyInput,
}

/// A parsed document together with the parser's recoverable errors.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The converted document tree.
    pub dom: DomTree,
    /// Messages for each point where the parser had to recover.
    pub parse_errors: Vec<String>,
}

/// Parse an HTML document.
///
/// The input is trimmed first; blank input yields [`ParseError::EmptyInput`].
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] when `html` contains no
/// non-whitespace characters.
pub fn parse_document(html: &str) -> Result<ParsedDocument, ParseError> {
    let html = html.trim();
    if html.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let document = Html::parse_document(html);
    let dom = convert(&document);
    let parse_errors = document.errors.iter().map(ToString::to_string).collect();

    Ok(ParsedDocument { dom, parse_errors })
}

/// Copy the parser's tree into a [`DomTree`].
///
/// Walks with an explicit stack so deeply nested input cannot exhaust the
/// call stack. Children are pushed in reverse so nodes are appended in
/// document order.
fn convert(document: &Html) -> DomTree {
    let mut tree = DomTree::new();
    let mut stack = vec![(document.tree.root(), NodeId::ROOT)];

    while let Some((node, parent)) = stack.pop() {
        let attach_to = match node.value() {
            scraper::Node::Document | scraper::Node::Fragment => parent,
            scraper::Node::Element(element) => {
                let attrs: Attributes = element.attrs().collect();
                tree.append_element(parent, element.name(), attrs)
            }
            scraper::Node::Text(text) => {
                let _ = tree.append_text(parent, &**text);
                continue;
            }
            scraper::Node::Comment(comment) => {
                let id = tree.alloc(NodeType::Comment(String::from(&**comment)));
                tree.append_child(parent, id);
                continue;
            }
            _ => continue,
        };

        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev().map(|child| (child, attach_to)));
    }

    tree
}
