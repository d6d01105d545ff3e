#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use core::error::Error;
use dom::{Document, NodeId, parser};
use views::filters;
use views::state::FiltersState;

const FILTERS_TEMPLATE: &str = r##"<ul class="filters">
    <li>
        <a href="#/">All</a>
    </li>
    <li>
        <a href="#/active">Active</a>
    </li>
    <li>
        <a href="#/completed">Completed</a>
    </li>
</ul>"##;

const DUPLICATE_TEMPLATE: &str = r##"<ul class="filters">
    <li><a href="#/">All</a></li>
    <li><a href="#/active">Active</a></li>
    <li><a href="#/active-too">Active</a></li>
</ul>"##;

fn template_container(doc: &mut Document, template: &str) -> Result<NodeId, Box<dyn Error>> {
    let root = doc.root();
    let nodes = parser::parse_fragment_into(doc, root, template)?;
    let container = nodes.first().ok_or("template produced no nodes")?;
    Ok(*container)
}

fn filter(label: &str) -> FiltersState {
    FiltersState {
        current_filter: label.to_owned(),
    }
}

#[test]
fn marks_the_anchor_matching_the_current_filter() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let container = template_container(&mut doc, FILTERS_TEMPLATE)?;

    let rendered = filters::render(&mut doc, container, &filter("Active"))?;

    assert_eq!(rendered, container, "the container itself is returned");
    let selected = doc
        .query_selector(rendered, "li a.selected")
        .ok_or("no anchor was marked")?;
    assert_eq!(doc.text_content(selected), "Active");
    Ok(())
}

#[test]
fn marks_exactly_one_anchor() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let container = template_container(&mut doc, FILTERS_TEMPLATE)?;

    filters::render(&mut doc, container, &filter("Completed"))?;

    assert_eq!(doc.query_selector_all(container, "a.selected").len(), 1);
    Ok(())
}

#[test]
fn rerender_moves_the_marker() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let container = template_container(&mut doc, FILTERS_TEMPLATE)?;

    filters::render(&mut doc, container, &filter("Active"))?;
    filters::render(&mut doc, container, &filter("Completed"))?;

    let selected = doc.query_selector_all(container, "a.selected");
    assert_eq!(selected.len(), 1);
    let anchor = *selected.first().ok_or("no anchor was marked")?;
    assert_eq!(doc.text_content(anchor), "Completed");
    Ok(())
}

#[test]
fn rerender_with_the_same_filter_is_idempotent() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let container = template_container(&mut doc, FILTERS_TEMPLATE)?;

    filters::render(&mut doc, container, &filter("Active"))?;
    let first_pass = doc.to_json_value(container);
    filters::render(&mut doc, container, &filter("Active"))?;

    assert_eq!(doc.to_json_value(container), first_pass);
    Ok(())
}

#[test]
fn unknown_filter_marks_nothing() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let container = template_container(&mut doc, FILTERS_TEMPLATE)?;

    filters::render(&mut doc, container, &filter("Active"))?;
    filters::render(&mut doc, container, &filter("Archived"))?;

    assert!(doc.query_selector_all(container, "a.selected").is_empty());
    Ok(())
}

#[test]
fn matching_is_case_sensitive() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let container = template_container(&mut doc, FILTERS_TEMPLATE)?;

    filters::render(&mut doc, container, &filter("active"))?;

    assert!(doc.query_selector_all(container, "a.selected").is_empty());
    Ok(())
}

#[test]
fn duplicate_labels_mark_only_the_first_match() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let container = template_container(&mut doc, DUPLICATE_TEMPLATE)?;

    filters::render(&mut doc, container, &filter("Active"))?;

    let selected = doc.query_selector_all(container, "a.selected");
    assert_eq!(selected.len(), 1);
    let anchors = doc.query_selector_all(container, "a");
    assert_eq!(selected.first(), anchors.get(1), "first Active anchor wins");
    Ok(())
}

#[test]
fn rejects_a_non_element_container() {
    let mut doc = Document::new();
    let text = doc.create_text("not a container");
    let result = filters::render(&mut doc, text, &filter("All"));
    assert!(result.is_err());
}
