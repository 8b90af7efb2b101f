pub mod filter_bar;
pub mod form_pane;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod stats_pane;
pub mod styles;
pub mod toast;

use crate::app::AppState;
use filter_bar::render_filter_bar;
use form_pane::render_form_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_confirm_delete;
use ratatui::Frame;
use stats_pane::render_stats_pane;
use toast::render_toast;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_form_pane(f, app, layout.form_area);
    render_filter_bar(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_stats_pane(f, app, layout.stats_area);

    // Render confirmation dialog if a delete is pending
    render_confirm_delete(f, app, size);

    // Toast overlay goes on top of everything
    render_toast(f, app, size);
}
