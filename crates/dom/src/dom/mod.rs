//! Document tree structure and node operations.

use anyhow::{Error, bail};
use indextree::{Arena, NodeId};
use smallvec::SmallVec;

mod printing;
mod query;

/// Kind of a node in the document tree.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    /// The tree root. Exactly one per document, created with it.
    #[default]
    Document,
    /// An element with an ASCII-lowercase tag name.
    Element { tag: String },
    /// A text node.
    Text { text: String },
}

/// Data stored for each node: its kind plus attribute pairs.
/// Attribute names are unique per node and ASCII-lowercase.
#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
}

/// An arena-backed document tree. Nodes are addressed by [`NodeId`]
/// handles; handles from another document, or detached-and-removed
/// handles, are contract violations surfaced as errors.
#[derive(Clone)]
pub struct Document {
    arena: Arena<DomNode>,
    root: NodeId,
}

impl Document {
    /// Create an empty document holding only the root node.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(DomNode::default()),
            arena,
        }
    }

    /// The root node of the tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(DomNode {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            attrs: SmallVec::new(),
        })
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(DomNode {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            attrs: SmallVec::new(),
        })
    }

    /// Append `child` as the last child of `parent`. Fails on handles
    /// that would make the tree cyclic or that are no longer part of it.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        parent.checked_append(child, &mut self.arena)?;
        Ok(())
    }

    /// Remove every child of `parent`, dropping the subtrees.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children: Vec<NodeId> = parent.children(&self.arena).collect();
        for child in children {
            child.remove_subtree(&mut self.arena);
        }
    }

    /// Detach `id` from its parent, keeping its subtree alive.
    pub fn detach(&mut self, id: NodeId) {
        id.detach(&mut self.arena);
    }

    /// Whether `id` refers to a live node of this document.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Data for a node, if it is live.
    pub fn node(&self, id: NodeId) -> Option<&DomNode> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(|node| node.get())
    }

    /// Kind of a node, if it is live.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|node| &node.kind)
    }

    /// Tag name for element nodes, `None` otherwise.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }

    /// Whether `id` is a live element node.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.tag(id).is_some()
    }

    /// Parent node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .and_then(|node| node.parent())
    }

    /// Previous sibling node of any kind, if any.
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .and_then(|node| node.previous_sibling())
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        id.children(&self.arena)
    }

    /// `id` and all its descendants, in document order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        id.descendants(&self.arena)
    }

    /// Attribute value, if the node carries the attribute.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the node carries the attribute, regardless of value.
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Set an attribute on an element, replacing any previous value.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), Error> {
        let name = name.to_ascii_lowercase();
        let element = self.element_mut(id)?;
        if let Some(pair) = element.attrs.iter_mut().find(|pair| pair.0 == name) {
            pair.1 = value.to_owned();
        } else {
            element.attrs.push((name, value.to_owned()));
        }
        Ok(())
    }

    /// Remove an attribute from an element if present.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Result<(), Error> {
        let element = self.element_mut(id)?;
        element.attrs.retain(|pair| pair.0 != name);
        Ok(())
    }

    /// Whether the element's `class` attribute contains the given token.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|token| token == class))
    }

    /// Add a class token. The `class` attribute is kept normalized:
    /// single spaces, no duplicates.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<(), Error> {
        let mut tokens: Vec<String> = self
            .attr(id, "class")
            .map(|value| value.split_ascii_whitespace().map(str::to_owned).collect())
            .unwrap_or_default();
        if tokens.iter().any(|token| token == class) {
            return Ok(());
        }
        tokens.push(class.to_owned());
        self.set_attr(id, "class", &tokens.join(" "))
    }

    /// Remove a class token; removing the last one drops the attribute.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<(), Error> {
        let Some(value) = self.attr(id, "class") else {
            return Ok(());
        };
        let remaining: Vec<&str> = value
            .split_ascii_whitespace()
            .filter(|token| *token != class)
            .collect();
        let joined = remaining.join(" ");
        if joined.is_empty() {
            self.remove_attr(id, "class")
        } else {
            self.set_attr(id, "class", &joined)
        }
    }

    /// Drive a class token to the requested state.
    pub fn set_class_enabled(&mut self, id: NodeId, class: &str, enabled: bool) -> Result<(), Error> {
        if enabled {
            self.add_class(id, class)
        } else {
            self.remove_class(id, class)
        }
    }

    /// Concatenated text of `id` and its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for descendant in id.descendants(&self.arena) {
            if let Some(NodeKind::Text { text }) = self.kind(descendant) {
                out.push_str(text);
            }
        }
        out
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut DomNode, Error> {
        let Some(node) = self.arena.get_mut(id).filter(|node| !node.is_removed()) else {
            bail!("node {id:?} is not part of this document");
        };
        let data = node.get_mut();
        if matches!(data.kind, NodeKind::Element { .. }) {
            Ok(data)
        } else {
            bail!("node {id:?} is not an element");
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
