#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use core::error::Error;
use dom::{Document, NodeId};
use views::state::{Todo, TodosState};
use views::todos;

fn fresh_list(doc: &mut Document) -> Result<NodeId, Box<dyn Error>> {
    let list = doc.create_element("ul");
    let root = doc.root();
    doc.append_child(root, list)?;
    Ok(list)
}

fn state_of(entries: &[(&str, bool)]) -> TodosState {
    TodosState {
        todos: entries
            .iter()
            .map(|(text, completed)| Todo::new(*text, *completed))
            .collect(),
    }
}

#[test]
fn creates_one_list_item_per_todo() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let list = fresh_list(&mut doc)?;
    let state = state_of(&[("First", true), ("Second", false), ("Third", false)]);

    let rendered = todos::render(&mut doc, list, &state)?;

    assert_eq!(rendered, list, "the container itself is returned");
    assert_eq!(doc.query_selector_all(rendered, "li").len(), 3);
    Ok(())
}

#[test]
fn sets_item_attributes_from_the_todo_state() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let list = fresh_list(&mut doc)?;
    let state = state_of(&[("First", true), ("Second", false)]);

    let rendered = todos::render(&mut doc, list, &state)?;
    let items = doc.query_selector_all(rendered, "li");
    let first = *items.first().ok_or("missing first item")?;
    let second = *items.get(1).ok_or("missing second item")?;

    assert!(doc.has_class(first, "completed"));
    let toggle = doc.query_selector(first, ".toggle").ok_or("missing toggle")?;
    assert!(doc.has_attr(toggle, "checked"));
    let label = doc.query_selector(first, "label").ok_or("missing label")?;
    assert_eq!(doc.text_content(label), "First");
    let edit = doc.query_selector(first, ".edit").ok_or("missing edit field")?;
    assert_eq!(doc.attr(edit, "value"), Some("First"));

    assert!(!doc.has_class(second, "completed"));
    let toggle = doc.query_selector(second, ".toggle").ok_or("missing toggle")?;
    assert!(!doc.has_attr(toggle, "checked"));
    let label = doc.query_selector(second, "label").ok_or("missing label")?;
    assert_eq!(doc.text_content(label), "Second");
    let edit = doc.query_selector(second, ".edit").ok_or("missing edit field")?;
    assert_eq!(doc.attr(edit, "value"), Some("Second"));
    Ok(())
}

#[test]
fn preserves_todo_order() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let list = fresh_list(&mut doc)?;
    let state = state_of(&[("First", true), ("Second", false), ("Third", false)]);

    let rendered = todos::render(&mut doc, list, &state)?;
    let labels: Vec<String> = doc
        .query_selector_all(rendered, "label")
        .iter()
        .map(|label| doc.text_content(*label))
        .collect();

    assert_eq!(labels, ["First", "Second", "Third"]);
    Ok(())
}

#[test]
fn empty_state_renders_zero_items() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let list = fresh_list(&mut doc)?;

    let rendered = todos::render(&mut doc, list, &TodosState::default())?;

    assert!(doc.query_selector_all(rendered, "li").is_empty());
    Ok(())
}

#[test]
fn rerender_replaces_previous_content() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let list = fresh_list(&mut doc)?;

    todos::render(&mut doc, list, &state_of(&[("First", true), ("Second", false)]))?;
    todos::render(&mut doc, list, &state_of(&[("Third", false)]))?;

    let labels: Vec<String> = doc
        .query_selector_all(list, "label")
        .iter()
        .map(|label| doc.text_content(*label))
        .collect();
    assert_eq!(labels, ["Third"]);

    todos::render(&mut doc, list, &TodosState::default())?;
    assert!(doc.query_selector_all(list, "li").is_empty());
    Ok(())
}

#[test]
fn rendering_the_same_state_is_structurally_stable() -> Result<(), Box<dyn Error>> {
    let state = state_of(&[("First", true), ("Second", false)]);

    let mut doc = Document::new();
    let once = fresh_list(&mut doc)?;
    todos::render(&mut doc, once, &state)?;
    let twice = fresh_list(&mut doc)?;
    todos::render(&mut doc, twice, &state)?;

    assert_eq!(doc.to_json_value(once), doc.to_json_value(twice));
    Ok(())
}

#[test]
fn rejects_a_non_element_container() {
    let mut doc = Document::new();
    let text = doc.create_text("not a container");
    let result = todos::render(&mut doc, text, &TodosState::default());
    assert!(result.is_err());
}
