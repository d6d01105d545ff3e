//! Toolkit-independent document tree: structural nodes carrying a tag or
//! text payload, class flags, attribute pairs, and ordered children, plus
//! template parsing, selector queries, and printers over that tree.

#![allow(
    clippy::missing_errors_doc,
    reason = "Failure modes are contract violations on stale or mistyped node handles"
)]

pub mod dom;
pub mod parser;

pub use dom::{Document, DomNode, NodeKind};
pub use indextree::NodeId;
