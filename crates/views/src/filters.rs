//! Filter bar view: moves the `selected` marker to the anchor whose text
//! matches the current filter.

use crate::state::FiltersState;
use anyhow::Error;
use dom::{Document, NodeId};
use log::{debug, warn};

/// Marker class carried by the active filter anchor.
const SELECTED: &str = "selected";

/// Annotate the pre-existing filter template under `container`: after
/// this call the anchor whose text equals `state.current_filter` carries
/// the `selected` class and every other anchor does not. Returns the
/// container handle.
///
/// The filter template is expected to hold one anchor per label. If
/// duplicate labels match, only the first anchor in document order is
/// marked and a warning is logged; if nothing matches, nothing is marked.
pub fn render(doc: &mut Document, container: NodeId, state: &FiltersState) -> Result<NodeId, Error> {
    crate::ensure_container(doc, container)?;

    let anchors = doc.query_selector_all(container, "a");
    for anchor in &anchors {
        doc.remove_class(*anchor, SELECTED)?;
    }

    let matches: Vec<NodeId> = anchors
        .into_iter()
        .filter(|anchor| doc.text_content(*anchor) == state.current_filter)
        .collect();
    match matches.as_slice() {
        [] => debug!("no filter anchor matches {:?}", state.current_filter),
        [only] => doc.add_class(*only, SELECTED)?,
        [first, ..] => {
            warn!(
                "{} anchors share the filter label {:?}, marking the first",
                matches.len(),
                state.current_filter
            );
            doc.add_class(*first, SELECTED)?;
        }
    }
    Ok(container)
}
