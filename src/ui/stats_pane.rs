use crate::app::AppState;
use crate::ui::styles::{default_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the stats line: counts over the full collection, not the filter
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("Total: {}", stats.total), default_style()),
        Span::styled("  ·  ", hint_style()),
        Span::styled(format!("Active: {}", stats.active), default_style()),
        Span::styled("  ·  ", hint_style()),
        Span::styled(format!("Completed: {}", stats.completed), default_style()),
    ]);

    f.render_widget(Paragraph::new(line).style(hint_style()), area);
}
