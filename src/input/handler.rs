use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::EditingTask => handle_edit_mode(app, key),
        UiMode::Dragging => handle_drag_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_column_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_column_right(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Focus the new-task input
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') => app.start_add_task(),

        // Edit in place
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit_selected(),

        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected()
        }

        // Pick up the selected card
        KeyCode::Char(' ') => app.begin_drag_selected(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the new-task input has focus
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while a card's text is being edited.
/// Enter and Esc both leave the editor, which commits it.
fn handle_edit_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.commit_edit(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(c) => app.edit_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while carrying a card
fn handle_drag_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.drag_target_left(),
        KeyCode::Right | KeyCode::Char('l') => app.drag_target_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.drop_drag(),
        KeyCode::Esc => app.cancel_drag(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.cancel_drag();
            return true;
        }
        _ => {}
    }
    false
}
