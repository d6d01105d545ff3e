//! Todo list view: stamps one list item per todo into the container.

use crate::state::{Todo, TodosState};
use anyhow::Error;
use dom::{Document, NodeId};
use log::debug;

/// Render the todo list into `container`, replacing whatever content it
/// held. One `<li>` is appended per todo, in input order; an empty state
/// leaves the container with no items. Returns the container handle.
pub fn render(doc: &mut Document, container: NodeId, state: &TodosState) -> Result<NodeId, Error> {
    crate::ensure_container(doc, container)?;

    doc.clear_children(container);
    for todo in &state.todos {
        let item = todo_item(doc, todo)?;
        doc.append_child(container, item)?;
    }
    debug!("rendered {} todo items", state.todos.len());
    Ok(container)
}

/// Build one detached `<li>` for a todo:
///
/// ```text
/// <li class="completed"?>
///   <div class="view">
///     <input class="toggle" type="checkbox" checked?>
///     <label>{text}</label>
///     <button class="destroy">
///   </div>
///   <input class="edit" value="{text}">
/// </li>
/// ```
///
/// The completion flag drives both the item class and the checkbox; the
/// todo text appears verbatim as the label and as the edit-field value.
pub fn todo_item(doc: &mut Document, todo: &Todo) -> Result<NodeId, Error> {
    let item = doc.create_element("li");
    doc.set_class_enabled(item, "completed", todo.completed)?;

    let view = doc.create_element("div");
    doc.add_class(view, "view")?;
    doc.append_child(item, view)?;

    let toggle = doc.create_element("input");
    doc.add_class(toggle, "toggle")?;
    doc.set_attr(toggle, "type", "checkbox")?;
    if todo.completed {
        doc.set_attr(toggle, "checked", "")?;
    }
    doc.append_child(view, toggle)?;

    let label = doc.create_element("label");
    let text = doc.create_text(&todo.text);
    doc.append_child(label, text)?;
    doc.append_child(view, label)?;

    let destroy = doc.create_element("button");
    doc.add_class(destroy, "destroy")?;
    doc.append_child(view, destroy)?;

    let edit = doc.create_element("input");
    doc.add_class(edit, "edit")?;
    doc.set_attr(edit, "value", &todo.text)?;
    doc.append_child(item, edit)?;

    Ok(item)
}
