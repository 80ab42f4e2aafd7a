use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current mode
pub fn hints_for(mode: UiMode) -> &'static [&'static str] {
    match mode {
        UiMode::Normal => &[
            " ←/→ column   ",
            "↑/↓ select   ",
            "a add   ",
            "e edit   ",
            "space drag   ",
            "x delete   ",
            "q quit",
        ],
        UiMode::AddingTask => &[" Enter add   ", "Esc close"],
        UiMode::EditingTask => &[" Enter save   ", "Esc save & leave"],
        UiMode::Dragging => &[" ←/→ target   ", "Enter drop   ", "Esc cancel"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = Line::from(hints_for(mode).iter().map(|h| Span::raw(*h)).collect::<Vec<_>>());
    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
