//! Tree printers: an indented debug form, deterministic JSON snapshots,
//! and HTML serialization.

use core::fmt;

use super::{Document, NodeKind};
use indextree::NodeId;
use serde_json::{Map, Value, json};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Attribute pairs sorted by name for deterministic output.
fn sorted_attrs(doc: &Document, id: NodeId) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = doc
        .node(id)
        .map(|node| node.attrs.iter().cloned().collect())
        .unwrap_or_default();
    pairs.sort_by(|left, right| left.0.cmp(&right.0));
    pairs
}

fn escape_debug_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(character),
        }
    }
    out
}

fn escape_html_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(character),
        }
    }
    out
}

fn escape_attr_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(character),
        }
    }
    out
}

fn node_to_json(doc: &Document, id: NodeId) -> Value {
    let children = || -> Vec<Value> {
        doc.children(id)
            .map(|child| node_to_json(doc, child))
            .collect()
    };
    match doc.kind(id) {
        None => Value::Null,
        Some(NodeKind::Document) => json!({ "type": "document", "children": children() }),
        Some(NodeKind::Element { tag }) => {
            let mut attrs = Map::new();
            for (name, value) in sorted_attrs(doc, id) {
                attrs.insert(name, Value::String(value));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs),
                "children": children(),
            })
        }
        Some(NodeKind::Text { text }) => json!({ "type": "text", "text": text }),
    }
}

fn write_html(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        None => {}
        Some(NodeKind::Document) => {
            for child in doc.children(id) {
                write_html(doc, child, out);
            }
        }
        Some(NodeKind::Text { text }) => out.push_str(&escape_html_text(text)),
        Some(NodeKind::Element { tag }) => {
            out.push('<');
            out.push_str(tag);
            if let Some(node) = doc.node(id) {
                for (name, value) in &node.attrs {
                    out.push(' ');
                    out.push_str(name);
                    // Empty values print as bare boolean attributes.
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr_value(value));
                        out.push('"');
                    }
                }
            }
            out.push('>');
            if is_void(tag) {
                return;
            }
            for child in doc.children(id) {
                write_html(doc, child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn fmt_node(
    doc: &Document,
    id: NodeId,
    formatter: &mut fmt::Formatter<'_>,
    depth: usize,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match doc.kind(id) {
        None => Ok(()),
        Some(NodeKind::Document) => {
            writeln!(formatter, "{indent}#document")?;
            for child in doc.children(id) {
                fmt_node(doc, child, formatter, depth.saturating_add(1))?;
            }
            Ok(())
        }
        Some(NodeKind::Element { tag }) => {
            write!(formatter, "{indent}<{tag}")?;
            for (name, value) in sorted_attrs(doc, id) {
                write!(formatter, " {name}=\"{}\"", escape_debug_text(&value))?;
            }
            writeln!(formatter, ">")?;
            for child in doc.children(id) {
                fmt_node(doc, child, formatter, depth.saturating_add(1))?;
            }
            writeln!(formatter, "{indent}</{tag}>")
        }
        Some(NodeKind::Text { text }) => {
            // Skip pure-whitespace text nodes in the printer for cleaner output
            if text.chars().all(char::is_whitespace) {
                return Ok(());
            }
            writeln!(formatter, "{indent}\"{}\"", escape_debug_text(text))
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, self.root, formatter, 0)
    }
}

impl Document {
    /// Build a deterministic JSON representation of the subtree at `id`.
    /// Schema:
    /// - Document: { "type":"document", "children":[ ... ] }
    /// - Element: { "type":"element", "tag":"div", "attrs":{..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." }
    pub fn to_json_value(&self, id: NodeId) -> Value {
        node_to_json(self, id)
    }

    /// Pretty JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self, id: NodeId) -> String {
        serde_json::to_string_pretty(&self.to_json_value(id))
            .unwrap_or_else(|_| String::from("{}"))
    }

    /// Serialize the subtree at `id` as HTML markup. Void elements are
    /// not closed; text and attribute values are escaped.
    pub fn to_html_string(&self, id: NodeId) -> String {
        let mut out = String::new();
        write_html(self, id, &mut out);
        out
    }
}
