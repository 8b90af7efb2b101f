use super::task::{Task, TaskId};

/// Which subset of the task collection the list pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Whether a task belongs to this filter's subset
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    /// Display label for the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// The next mode when cycling with a single key
    pub fn next(&self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    /// All modes in filter-bar order
    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::All, FilterMode::Active, FilterMode::Completed]
    }
}

/// What the next form submit will do.
///
/// Starts `Idle` (submit creates a task); entering edit on a task moves to
/// `Editing(id)` (submit updates that task). A successful create or update,
/// or abandoning the form, resets to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(TaskId),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Keyboard focus is in the task form
    Form,
    /// A delete is pending explicit confirmation
    ConfirmDelete,
}
