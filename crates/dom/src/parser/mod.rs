//! HTML template parsing into the document tree, via html5ever.
//!
//! Recoverable markup problems are handled the way browsers handle them;
//! whatever html5ever recovers to is what the tree gets. Doctypes,
//! comments, and processing instructions are dropped: the node model has
//! no kind for them and nothing downstream reads them.

use crate::dom::Document;
use anyhow::Error;
use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, QualName, local_name, namespace_url, ns};
use indextree::NodeId;
use log::debug;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Parse a complete HTML document into a new tree.
pub fn parse_document(html: &str) -> Result<Document, Error> {
    let rc_dom: RcDom = html5ever::parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;
    log_recoveries(&rc_dom);

    let mut doc = Document::new();
    let root = doc.root();
    convert_children(&mut doc, &rc_dom.document, root)?;
    Ok(doc)
}

/// Parse an HTML fragment and append its nodes under `parent`, returning
/// the ids of the appended top-level nodes. This is element `innerHTML`
/// semantics with a `body` context element.
pub fn parse_fragment_into(
    doc: &mut Document,
    parent: NodeId,
    html: &str,
) -> Result<Vec<NodeId>, Error> {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let rc_dom: RcDom = html5ever::parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        context,
        Vec::new(),
    )
    .from_utf8()
    .read_from(&mut html.as_bytes())?;
    log_recoveries(&rc_dom);

    // The fragment algorithm nests the parsed nodes under a synthetic
    // <html> element child of the document.
    let document_children = rc_dom.document.children.borrow();
    let Some(fragment_root) = document_children
        .iter()
        .find(|child| matches!(child.data, RcNodeData::Element { .. }))
    else {
        return Ok(Vec::new());
    };

    let mut appended = Vec::new();
    for child in fragment_root.children.borrow().iter() {
        if let Some(node) = convert_node(doc, child, parent)? {
            appended.push(node);
        }
    }
    Ok(appended)
}

fn log_recoveries(rc_dom: &RcDom) {
    for error in rc_dom.errors.iter() {
        debug!("html parse recovered: {error}");
    }
}

/// Convert one html5ever node into the tree under `parent`. Returns the
/// created node id, or `None` for node kinds the tree does not keep.
fn convert_node(doc: &mut Document, rc_node: &Handle, parent: NodeId) -> Result<Option<NodeId>, Error> {
    match &rc_node.data {
        RcNodeData::Document => {
            convert_children(doc, rc_node, parent)?;
            Ok(None)
        }

        RcNodeData::Doctype { .. }
        | RcNodeData::Comment { .. }
        | RcNodeData::ProcessingInstruction { .. } => Ok(None),

        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            // Skip whitespace-only text nodes from template indentation.
            if text.trim().is_empty() {
                return Ok(None);
            }
            let node = doc.create_text(&text);
            doc.append_child(parent, node)?;
            Ok(Some(node))
        }

        RcNodeData::Element { name, attrs, .. } => {
            let node = doc.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                doc.set_attr(node, &attr.name.local, &attr.value)?;
            }
            doc.append_child(parent, node)?;
            for child in rc_node.children.borrow().iter() {
                convert_node(doc, child, node)?;
            }
            Ok(Some(node))
        }
    }
}

fn convert_children(doc: &mut Document, rc_node: &Handle, parent: NodeId) -> Result<(), Error> {
    for child in rc_node.children.borrow().iter() {
        convert_node(doc, child, parent)?;
    }
    Ok(())
}
