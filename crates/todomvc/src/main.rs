//! Demo binary: builds the TodoMVC page shell from a template, renders
//! sample state through both views, and prints the resulting markup.
//! Event wiring, routing, and persistence are out of scope; this is the
//! render pass only.

#![allow(
    clippy::print_stdout,
    reason = "Printing the rendered tree is this binary's output"
)]

use anyhow::{Error, anyhow};
use dom::{Document, parser};
use log::info;
use views::state::{FiltersState, Todo, TodosState};

const PAGE_TEMPLATE: &str = r##"
<section class="todoapp">
    <header class="header">
        <h1>todos</h1>
        <input class="new-todo" placeholder="What needs to be done?" autofocus>
    </header>
    <section class="main">
        <ul class="todo-list"></ul>
    </section>
    <footer class="footer">
        <ul class="filters">
            <li><a href="#/">All</a></li>
            <li><a href="#/active">Active</a></li>
            <li><a href="#/completed">Completed</a></li>
        </ul>
    </footer>
</section>
"##;

fn sample_state() -> (TodosState, FiltersState) {
    let todos = TodosState {
        todos: vec![
            Todo::new("Read the chapter", true),
            Todo::new("Build the view layer", false),
            Todo::new("Wire up events", false),
        ],
    };
    let filter = FiltersState {
        current_filter: "Active".to_owned(),
    };
    (todos, filter)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut doc = Document::new();
    let root = doc.root();
    parser::parse_fragment_into(&mut doc, root, PAGE_TEMPLATE)?;

    let (todos, filter) = sample_state();

    let list = doc
        .query_selector(root, "ul.todo-list")
        .ok_or_else(|| anyhow!("page template is missing the todo list"))?;
    views::todos::render(&mut doc, list, &todos)?;

    let filter_bar = doc
        .query_selector(root, "ul.filters")
        .ok_or_else(|| anyhow!("page template is missing the filter bar"))?;
    views::filters::render(&mut doc, filter_bar, &filter)?;

    info!(
        "rendered {} todos with filter {:?}",
        todos.todos.len(),
        filter.current_filter
    );
    println!("{}", doc.to_html_string(root));
    Ok(())
}
