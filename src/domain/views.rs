use super::enums::FilterMode;
use super::task::Task;
use chrono::{DateTime, NaiveDateTime};

/// Select the subsequence of `tasks` visible under `mode`.
///
/// Relative order is preserved and the input is never mutated.
pub fn visible<'a>(tasks: &'a [Task], mode: FilterMode) -> Vec<&'a Task> {
    tasks.iter().filter(|t| mode.matches(t)).collect()
}

/// Counts over the full, unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Compute stats from the whole collection, independent of the filter mode
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total,
        active: total - completed,
        completed,
    }
}

/// Checkbox glyph for a task row
pub fn checkbox(task: &Task) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Human-readable creation date for a task, if the server provided one.
///
/// The server emits ISO-8601 timestamps, with or without a zone offset.
/// An unparseable value falls back to the raw string rather than hiding it.
pub fn created_label(task: &Task) -> Option<String> {
    let raw = task.created_at.as_deref()?;
    let formatted = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.format("%b %d, %Y").to_string())
        })
        .unwrap_or_else(|_| raw.to_string());
    Some(formatted)
}
