use crate::app::AppState;
use crate::ui::styles::{border_style, focused_border_style, hint_style, input_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the new-task input bar above the board
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match &app.input_form {
        Some(form) => Line::from(vec![
            Span::raw("> "),
            Span::styled(form.text.clone(), input_style()),
            Span::styled("█", input_style()), // Cursor
        ]),
        None => Line::from(Span::styled("Press 'a' to add a task", hint_style())),
    };

    let border = if app.input_form.is_some() {
        focused_border_style()
    } else {
        border_style()
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" New Task "),
    );

    f.render_widget(paragraph, area);
}
