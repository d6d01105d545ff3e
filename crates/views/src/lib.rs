//! Todo-list views: pure, synchronous transformations from application
//! state onto a structural document tree.
//!
//! Each render call fully re-derives the container's content or markers
//! from the state it is given; nothing is retained between calls. The
//! caller owns the [`dom::Document`] and the container node, and gets the
//! container handle back for chaining and inspection.

#![allow(
    clippy::missing_errors_doc,
    reason = "Render entry points fail only on container contract violations"
)]

use anyhow::{Error, bail};
use dom::{Document, NodeId};

pub mod filters;
pub mod state;
pub mod todos;

/// Containers must be live element nodes of the rendered document;
/// anything else is a caller bug surfaced before any mutation happens.
fn ensure_container(doc: &Document, container: NodeId) -> Result<(), Error> {
    if !doc.is_element(container) {
        bail!("render container {container:?} is not an element of this document");
    }
    Ok(())
}
