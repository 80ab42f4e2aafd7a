use crate::domain::TaskStatus;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected card highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Card being dragged
pub fn dragging_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC | Modifier::DIM)
}

/// Card whose text is being edited
pub fn editing_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Accent colour per column
pub fn column_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Blue,
        TaskStatus::InProgress => Color::Magenta,
        TaskStatus::Done => Color::Green,
    }
}

/// Title style for columns
pub fn title_style(status: TaskStatus) -> Style {
    Style::default()
        .fg(column_color(status))
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border of the column holding the selection
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border of the column highlighted as drop target
pub fn drop_target_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Input field style
pub fn input_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style, also used for empty-column hints
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Header clock
pub fn clock_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}
