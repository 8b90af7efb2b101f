use crate::domain::{
    compute_stats, visible, EditSession, FilterMode, Task, TaskCollection, TaskId, TaskStats,
    UiMode,
};
use crate::notify::Notifier;
use crate::remote::StoreClient;

/// Draft fields for the task form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub editing_field: usize, // 0 = title, 1 = description
}

impl FormState {
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.editing_field = 0;
    }

    /// Toggle between title and description fields
    pub fn toggle_field(&mut self) {
        self.editing_field = (self.editing_field + 1) % 2;
    }

    pub fn add_char(&mut self, c: char) {
        match self.editing_field {
            0 => self.title.push(c),
            _ => self.description.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.editing_field {
            0 => {
                self.title.pop();
            }
            _ => {
                self.description.pop();
            }
        }
    }
}

/// Main application state.
///
/// Owns the task collection, the filter, the edit session, and the remote
/// store client. The collection is mutated only after a remote call has
/// succeeded; a failed action leaves everything untouched and posts an
/// error notice instead.
pub struct AppState {
    pub collection: TaskCollection,
    pub filter: FilterMode,
    pub session: EditSession,
    pub form: FormState,
    pub notifier: Notifier,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub pending_delete: Option<TaskId>,
    store: StoreClient,
}

impl AppState {
    pub fn new(store: StoreClient) -> Self {
        Self {
            collection: TaskCollection::new(),
            filter: FilterMode::All,
            session: EditSession::Idle,
            form: FormState::default(),
            notifier: Notifier::new(),
            ui_mode: UiMode::Normal,
            selected_index: 0,
            pending_delete: None,
            store,
        }
    }

    /// The subset of the collection visible under the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible(self.collection.tasks(), self.filter)
    }

    /// Stats over the full, unfiltered collection
    pub fn stats(&self) -> TaskStats {
        compute_stats(self.collection.tasks())
    }

    /// The currently selected visible task
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_tasks().len() {
            self.selected_index += 1;
        }
    }

    /// Switch the list filter; the selection is re-clamped to the new subset
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        self.clamp_selection();
    }

    /// Cycle All -> Active -> Completed -> All
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Fetch the full list from the server and replace local state with it.
    /// Returns whether the listing succeeded.
    pub async fn load_tasks(&mut self) -> bool {
        match self.store.list_tasks().await {
            Ok(tasks) => {
                self.collection.replace_all(tasks);
                self.clamp_selection();
                true
            }
            Err(err) => {
                self.notifier.error(format!("Error loading tasks: {}", err));
                false
            }
        }
    }

    /// Manual refresh; same as the initial load plus a confirmation notice
    pub async fn refresh(&mut self) {
        if self.load_tasks().await {
            self.notifier.info("Task list refreshed");
        }
    }

    /// Open the form for a new task
    pub fn start_add(&mut self) {
        self.form.clear();
        self.session = EditSession::Idle;
        self.ui_mode = UiMode::Form;
    }

    /// Open the form pre-filled with the selected task for editing
    pub fn start_edit_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        self.form.title = task.title;
        self.form.description = task.description;
        self.form.editing_field = 0;
        self.session = EditSession::Editing(task.id);
        self.ui_mode = UiMode::Form;
    }

    /// Abandon the form; a pending edit session resets to Idle
    pub fn cancel_form(&mut self) {
        self.form.clear();
        self.session = EditSession::Idle;
        self.ui_mode = UiMode::Normal;
    }

    /// Submit the form: create when Idle, update when Editing.
    ///
    /// An empty title (after trimming) is rejected here, before any network
    /// call. On failure the draft stays in the form fields and the session
    /// is left as it was.
    pub async fn submit_form(&mut self) {
        let title = self.form.title.trim().to_string();
        if title.is_empty() {
            self.notifier.error("Please enter a task title");
            return;
        }
        let description = self.form.description.trim().to_string();

        match self.session.clone() {
            EditSession::Editing(id) => {
                // The edit form never alters completion state
                let Some(completed) = self.collection.get(&id).map(|t| t.completed) else {
                    self.notifier.error("Task no longer exists");
                    self.cancel_form();
                    return;
                };
                match self
                    .store
                    .update_task(&id, &title, &description, completed)
                    .await
                {
                    Ok(task) => {
                        self.collection.replace(task);
                        self.finish_submit();
                        self.notifier.success("Task updated successfully!");
                    }
                    Err(err) => self.notifier.error(format!("Error updating task: {}", err)),
                }
            }
            EditSession::Idle => match self.store.create_task(&title, &description).await {
                Ok(task) => {
                    self.collection.insert(task);
                    self.finish_submit();
                    self.notifier.success("Task added successfully!");
                }
                Err(err) => self.notifier.error(format!("Error adding task: {}", err)),
            },
        }
    }

    fn finish_submit(&mut self) {
        self.form.clear();
        self.session = EditSession::Idle;
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Flip the completed flag of the selected task server-side.
    ///
    /// The checkbox only changes once the server confirms; a failed call
    /// leaves the entry exactly as it was.
    pub async fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(current) = self.collection.get(&id).cloned() else {
            return;
        };

        match self
            .store
            .update_task(
                &id,
                &current.title,
                &current.description,
                !current.completed,
            )
            .await
        {
            Ok(task) => {
                self.collection.replace(task);
                self.clamp_selection();
            }
            Err(err) => self.notifier.error(format!("Error updating task: {}", err)),
        }
    }

    /// Ask for confirmation before deleting the selected task
    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.pending_delete = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    /// Confirmed: perform the delete and drop the entry on success
    pub async fn confirm_pending_delete(&mut self) {
        self.ui_mode = UiMode::Normal;
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        match self.store.delete_task(&id).await {
            Ok(()) => {
                self.collection.remove(&id);
                self.clamp_selection();
                self.notifier.success("Task deleted successfully!");
            }
            Err(err) => self.notifier.error(format!("Error deleting task: {}", err)),
        }
    }

    /// Declined: keep the task, close the dialog
    pub fn cancel_pending_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Periodic upkeep between events
    pub fn tick(&mut self) {
        self.notifier.tick();
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }
}
