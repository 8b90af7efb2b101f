use crate::app::AppState;
use crate::domain::{FilterMode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
///
/// Mutating actions await their network round-trip here, so the event loop
/// suspends for the duration and at most one request is ever in flight.
pub async fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key).await,
        UiMode::Form => handle_form_mode(app, key).await,
        UiMode::ConfirmDelete => handle_confirm_mode(app, key).await,
    }
}

/// Handle keys in normal mode
async fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Filter positions
        KeyCode::Char('1') => {
            app.set_filter(FilterMode::All);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_filter(FilterMode::Active);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_filter(FilterMode::Completed);
            Ok(false)
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.cycle_filter();
            Ok(false)
        }

        // Toggle completion of the selected task
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected().await;
            Ok(false)
        }

        // Add task (opens the form)
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add();
            Ok(false)
        }

        // Edit selected task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_selected();
            Ok(false)
        }

        // Delete selected task (asks for confirmation first)
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.request_delete_selected();
            Ok(false)
        }

        // Re-fetch the list from the server
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh().await;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        // Dismiss the current toast early
        KeyCode::Esc => {
            app.notifier.clear();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while the task form has focus
async fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form (create or update depending on the edit session)
        KeyCode::Enter => {
            app.submit_form().await;
            Ok(false)
        }

        // Abandon the form
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }

        // Switch between title and description
        KeyCode::Tab => {
            app.form.toggle_field();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form.backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.form.add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the delete confirmation dialog
async fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_pending_delete().await;
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_pending_delete();
            Ok(false)
        }
        _ => Ok(false),
    }
}
