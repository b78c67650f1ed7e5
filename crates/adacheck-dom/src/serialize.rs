//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! Outer-HTML serialization used for code snippets. The output favors
//! readability over byte-exact round trips: void elements are written
//! self-closing (`<img src="x.jpg"/>`) and only the minimal set of
//! characters is escaped.

use crate::{DomTree, NodeId, NodeType};

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text children are written verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Whether `tag` is a void element (no end tag, no children).
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Serialize `id` and its subtree to markup.
///
/// The Document node serializes as the concatenation of its children.
#[must_use]
pub fn outer_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Open { id, raw_text: false }];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open { id, raw_text } => open_node(tree, id, raw_text, &mut out, &mut stack),
            Step::Close(tag) => {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    out
}

/// Pending serialization work. Nesting depth lives on the heap, not the
/// call stack.
enum Step<'a> {
    /// Write a node, then schedule its children.
    Open { id: NodeId, raw_text: bool },
    /// Write the end tag once all children are written.
    Close(&'a str),
}

fn open_node<'a>(
    tree: &'a DomTree,
    id: NodeId,
    raw_text: bool,
    out: &mut String,
    stack: &mut Vec<Step<'a>>,
) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => {
            stack.extend(node.children.iter().rev().map(|&child| Step::Open {
                id: child,
                raw_text: false,
            }));
        }
        NodeType::Element(data) => {
            out.push('<');
            out.push_str(&data.tag_name);
            for (name, value) in data.attrs.iter() {
                out.push(' ');
                out.push_str(name);
                out.push('=');
                write_attribute_value(value, out);
            }
            if is_void_element(&data.tag_name) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            let raw = RAW_TEXT_ELEMENTS.contains(&data.tag_name.as_str());
            stack.push(Step::Close(&data.tag_name));
            stack.extend(node.children.iter().rev().map(|&child| Step::Open {
                id: child,
                raw_text: raw,
            }));
        }
        NodeType::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                escape_into(text, out);
            }
        }
        NodeType::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

/// Escape `&`, `<` and `>`.
fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Quote an attribute value. Double quotes are preferred; a value holding
/// only double quotes switches to single quotes, and a value holding both
/// gets `&quot;` escapes.
fn write_attribute_value(value: &str, out: &mut String) {
    let quote = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };
    out.push(quote);
    for c in value.chars() {
        match c {
            '"' if quote == '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out.push(quote);
}
