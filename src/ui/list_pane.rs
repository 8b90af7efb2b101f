use crate::app::AppState;
use crate::domain::{checkbox, created_label, Task};
use crate::ui::styles::{
    border_style, completed_style, default_style, description_style, empty_style, meta_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list pane from the filtered subset
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_tasks();
    let pane_title = format!(" Tasks — {} ", app.filter.label());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(pane_title, title_style()));

    if visible.is_empty() {
        // Empty-state placeholder instead of items
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  Nothing here yet.", empty_style()),
            Line::styled("  Press [a] to add a task.", empty_style()),
        ])
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let lines = create_task_lines(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(lines).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Lines for a single task row
/// Format: [x] Title
///             Description
///             Created: Aug 30, 2026
fn create_task_lines(task: &Task) -> Vec<Line<'static>> {
    let title_span = if task.completed {
        Span::styled(task.title.clone(), completed_style())
    } else {
        Span::raw(task.title.clone())
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", checkbox(task))),
        title_span,
    ])];

    if task.has_description() {
        lines.push(Line::from(Span::styled(
            format!("    {}", task.description),
            description_style(),
        )));
    }

    if let Some(label) = created_label(task) {
        lines.push(Line::from(Span::styled(
            format!("    Created: {}", label),
            meta_style(),
        )));
    }

    lines
}
