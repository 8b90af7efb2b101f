use crate::notify::NoticeKind;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Completed task title style
pub fn completed_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Task description style
pub fn description_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Created-date label style
pub fn meta_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Active filter tab style
pub fn filter_active_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Inactive filter tab style
pub fn filter_inactive_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Empty-state placeholder style
pub fn empty_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Toast style for a notice kind, dimmed while fading out
pub fn toast_style(kind: NoticeKind, fading: bool) -> Style {
    let style = match kind {
        NoticeKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
        NoticeKind::Error => Style::default().fg(Color::White).bg(Color::Red),
        NoticeKind::Info => Style::default().fg(Color::White).bg(Color::Blue),
    };
    if fading {
        style.add_modifier(Modifier::DIM)
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}
