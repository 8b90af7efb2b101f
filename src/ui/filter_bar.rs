use crate::app::AppState;
use crate::domain::FilterMode;
use crate::ui::styles::{filter_active_style, filter_inactive_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the filter tabs: three mutually exclusive positions
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (idx, mode) in FilterMode::all().iter().enumerate() {
        let style = if *mode == app.filter {
            filter_active_style()
        } else {
            filter_inactive_style()
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", idx + 1, mode.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
