use crate::app::AppState;
use crate::domain::{Bucket, CardView, UiMode};
use crate::ui::styles::{
    border_style, default_style, dragging_style, drop_target_style, editing_style,
    focused_border_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Replace control characters so card text can't move the cursor or break rows
fn terminal_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Create the line for one card
fn create_card_line(app: &AppState, bucket: &Bucket, row: usize, card: &CardView) -> Line<'static> {
    if let Some(edit) = app.editing.as_ref().filter(|e| e.task_id == card.id) {
        return Line::from(vec![
            Span::styled(format!("✎ {}", terminal_safe(&edit.buffer)), editing_style()),
            Span::styled("█", editing_style()), // Cursor
        ]);
    }

    if app.drag.task_id() == Some(card.id) {
        return Line::from(Span::styled(
            format!("⠿ {}", terminal_safe(&card.text)),
            dragging_style(),
        ));
    }

    let is_selected = app.ui_mode == UiMode::Normal
        && app.selected_column == bucket.status
        && app.selected_row == row;
    let style: Style = if is_selected { selected_style() } else { default_style() };

    Line::from(vec![
        Span::styled(format!("• {}", terminal_safe(&card.text)), style),
    ])
}

/// Render one column; always rebuilt from the bucket, never patched.
/// `state` scrolls the list so the selected card stays visible.
fn render_column(
    f: &mut Frame,
    app: &AppState,
    bucket: &Bucket,
    area: Rect,
    state: &mut ListState,
) {
    let items: Vec<ListItem> = match bucket.hint() {
        Some(hint) => vec![ListItem::new(Line::from(Span::styled(hint, hint_style())))],
        None => bucket
            .cards
            .iter()
            .enumerate()
            .map(|(row, card)| ListItem::new(create_card_line(app, bucket, row, card)))
            .collect(),
    };

    let border = if app.drag.drop_target() == Some(bucket.status) {
        drop_target_style()
    } else if app.selected_column == bucket.status {
        focused_border_style()
    } else {
        border_style()
    };

    let title = format!(" {} ({}) ", bucket.status.title(), bucket.count());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style(bucket.status))),
    );

    f.render_stateful_widget(list, area, state);
}

/// Render the three columns and remember where they are for mouse hit tests
pub fn render_board(f: &mut Frame, app: &mut AppState, areas: [Rect; 3]) {
    app.column_areas = areas;
    let mut states = std::mem::take(&mut app.column_states);

    for bucket in &app.view.buckets {
        let index = bucket.status.index();
        let focused = app.selected_column == bucket.status && !bucket.is_empty();
        states[index].select(focused.then_some(app.selected_row));
        render_column(f, app, bucket, areas[index], &mut states[index]);
    }

    app.column_states = states;
}
