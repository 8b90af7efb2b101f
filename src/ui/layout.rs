use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub form_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub stats_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Form pane: title + description fields (fixed height)
/// - Filter bar: one row of filter tabs
/// - List pane: fills the remaining space
/// - Stats line: bottom row
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(7), // Form pane
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // List pane
            Constraint::Length(1), // Stats line
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        form_area: chunks[1],
        filter_area: chunks[2],
        list_area: chunks[3],
        stats_area: chunks[4],
    }
}

/// Create centered modal area (for the delete confirmation dialog)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Top-right overlay area for a toast notification.
///
/// Height zero means the frame is too short to fit the toast; the caller
/// skips rendering in that case.
pub fn create_toast_area(area: Rect, message_width: u16) -> Rect {
    // Message plus border and padding, clamped to the frame
    let width = (message_width + 4).min(area.width);
    let height = 3.min(area.height.saturating_sub(1));
    let x = area.x + area.width.saturating_sub(width);
    let y = area.y + 1;
    Rect::new(x, y, width, height)
}
