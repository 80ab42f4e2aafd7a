use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    /// Todo, in progress, done (left to right)
    pub column_areas: [Rect; 3],
}

/// Create the main layout
/// - Top bar: keybindings and clock (1 row)
/// - Input bar: new-task field (3 rows)
/// - Board: three equal columns
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Board
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(main_chunks[2]);

    MainLayout {
        header_area: main_chunks[0],
        input_area: main_chunks[1],
        column_areas: [columns[0], columns[1], columns[2]],
    }
}

/// Split the header row into hints (left) and clock (right)
pub fn split_header(area: Rect, clock_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(clock_width)])
        .split(area);
    (chunks[0], chunks[1])
}
