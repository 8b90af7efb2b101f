use super::task::{Task, TaskId};

/// In-memory mirror of the server's task list.
///
/// The collection is the single source of truth for rendering. Its order is
/// append/replace order as returned by the server; the client never re-sorts
/// it. Mutations are only applied after the corresponding remote call has
/// succeeded, so the collection always reflects server-confirmed state.
#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents with a fresh server listing
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a newly created task.
    ///
    /// If the id is somehow already present, the existing entry is replaced
    /// in place so that no two entries ever share an id.
    pub fn insert(&mut self, task: Task) {
        match self.position(&task.id) {
            Some(idx) => self.tasks[idx] = task,
            None => self.tasks.push(task),
        }
    }

    /// Replace an existing entry with the server's updated record, keeping
    /// its position in the list. Returns false if the id is not present.
    pub fn replace(&mut self, task: Task) -> bool {
        match self.position(&task.id) {
            Some(idx) => {
                self.tasks[idx] = task;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id. Returns false if absent.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.position(id).map(|idx| &self.tasks[idx])
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}
