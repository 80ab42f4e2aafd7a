pub mod board_pane;
pub mod clock;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod styles;

use crate::app::AppState;
use board_pane::render_board;
use chrono::Local;
use clock::{clock_width, render_clock};
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::{create_layout, split_header};
use ratatui::Frame;

/// Main render function - draws the entire UI from the current view
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    let now = Local::now();
    let width = clock_width(&now, &app.settings);
    let (hints_area, clock_area) = split_header(layout.header_area, width);
    render_keybindings(f, app.ui_mode, hints_area);
    render_clock(f, &now, &app.settings, clock_area);

    render_input_form(f, app, layout.input_area);
    render_board(f, app, layout.column_areas);
}
