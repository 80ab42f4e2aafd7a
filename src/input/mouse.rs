use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Handle mouse events for card selection and drag-and-drop
pub fn handle_mouse(app: &mut AppState, event: MouseEvent) {
    let (x, y) = (event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.ui_mode == UiMode::AddingTask {
                return;
            }
            match app.card_at(x, y) {
                Some((column, row)) => {
                    app.select_card(column, row);
                    if let Some(id) = app.selected_task_id() {
                        app.begin_drag(id, Some(column));
                    }
                }
                // Clicking away from the editor is a blur
                None => app.commit_edit(),
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.is_dragging() {
                let column = app.column_at(x, y);
                app.drag_over(column);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.drag.is_dragging() {
                // Released outside every column: the drop has no target and cancels
                let column = app.column_at(x, y);
                app.drag_over(column);
                app.drop_drag();
            }
        }
        _ => {}
    }
}
