//! Application state consumed by the views. The views never mutate it.

/// One task record: display text plus completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Display label, also used as the initial edit-field value.
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Self {
            text: text.into(),
            completed,
        }
    }
}

/// State for the todo-list view: the full ordered todo sequence.
#[derive(Debug, Clone, Default)]
pub struct TodosState {
    pub todos: Vec<Todo>,
}

/// State for the filters view. Filter labels ("All", "Active",
/// "Completed") are matched against anchor text, case-sensitively; they
/// are plain strings, not variants.
#[derive(Debug, Clone, Default)]
pub struct FiltersState {
    pub current_filter: String,
}
