use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the task form pane.
///
/// The form is always on screen; typing only lands in it while it has focus.
/// The pane title says what submit will do, mirroring the edit session.
pub fn render_form_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::Form;
    let form = &app.form;

    let pane_title = if app.session.is_editing() {
        " ✓ Update Task "
    } else {
        " + Add Task "
    };

    let mut lines = Vec::new();

    let title_label = if focused && form.editing_field == 0 {
        "Title: (editing)"
    } else {
        "Title:"
    };
    lines.push(Line::raw(title_label));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(form.title.clone(), modal_title_style()),
        if focused && form.editing_field == 0 {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));

    let description_label = if focused && form.editing_field == 1 {
        "Description: (editing)"
    } else {
        "Description:"
    };
    lines.push(Line::raw(description_label));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(form.description.clone(), modal_title_style()),
        if focused && form.editing_field == 1 {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));

    let hint = if focused {
        "Tab switch field  ·  Enter submit  ·  Esc cancel"
    } else {
        "Press [a] to add a task, [e] to edit the selected one"
    };
    lines.push(Line::styled(hint, hint_style()));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(pane_title, title_style())),
    );

    f.render_widget(paragraph, area);
}
