use crate::app::AppState;
use crate::ui::{layout::create_toast_area, styles::toast_style};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the transient toast notification, if one is active
pub fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(notice) = app.notifier.current() else {
        return;
    };

    let width = notice.message.chars().count() as u16;
    let toast_area = create_toast_area(area, width);
    if toast_area.height == 0 {
        return;
    }

    // Clear the area behind the toast
    f.render_widget(Clear, toast_area);

    let style = toast_style(notice.kind, notice.is_fading());
    let paragraph = Paragraph::new(notice.message.clone())
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, toast_area);
}
