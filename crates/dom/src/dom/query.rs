//! Selector queries over the document tree.

use super::{Document, NodeKind};
use indextree::NodeId;
use selectors::{ElementAdapter, matches_selector_list, parse_selector_list};

impl ElementAdapter for Document {
    type Handle = NodeId;

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        Document::parent(self, element)
    }

    fn previous_sibling_element(&self, element: NodeId) -> Option<NodeId> {
        let mut current = self.previous_sibling(element);
        while let Some(candidate) = current {
            if self.is_element(candidate) {
                return Some(candidate);
            }
            current = self.previous_sibling(candidate);
        }
        None
    }

    fn tag_name(&self, element: NodeId) -> &str {
        self.tag(element).unwrap_or("")
    }

    fn element_id(&self, element: NodeId) -> Option<&str> {
        self.attr(element, "id")
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        Document::has_class(self, element, class)
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        Document::attr(self, element, name)
    }
}

impl Document {
    /// All element descendants of `root` (excluding `root` itself)
    /// matching the selector, in document order.
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let list = parse_selector_list(selector);
        self.descendants(root)
            .skip(1)
            .filter(|id| matches!(self.kind(*id), Some(NodeKind::Element { .. })))
            .filter(|id| matches_selector_list(self, *id, &list))
            .collect()
    }

    /// First element descendant of `root` matching the selector, in
    /// document order.
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        self.query_selector_all(root, selector).into_iter().next()
    }
}
