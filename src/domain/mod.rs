pub mod collection;
pub mod enums;
pub mod task;
pub mod views;

pub use collection::TaskCollection;
pub use enums::{EditSession, FilterMode, UiMode};
pub use task::{Task, TaskId};
pub use views::{checkbox, compute_stats, created_label, visible, TaskStats};
