use crate::config::Settings;
use crate::ui::styles::{clock_style, hint_style};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::fmt::Write;

/// Format a timestamp with a user-supplied chrono pattern.
/// An invalid pattern falls back to `fallback` instead of panicking.
fn format_with(time: &DateTime<Local>, pattern: &str, fallback: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        out.clear();
        // Fallback patterns are known-good
        let _ = write!(out, "{}", time.format(fallback));
    }
    out
}

/// Date and time for the header, e.g. ("Monday, 14 October 2026", "09:30:05")
pub fn clock_text(time: &DateTime<Local>, settings: &Settings) -> (String, String) {
    let date = format_with(time, &settings.date_format, "%Y-%m-%d");
    let clock = format_with(time, &settings.clock_format, "%H:%M:%S");
    (date, clock)
}

/// Columns the clock widget needs
pub fn clock_width(time: &DateTime<Local>, settings: &Settings) -> u16 {
    let (date, clock) = clock_text(time, settings);
    (date.chars().count() + clock.chars().count() + 4) as u16
}

/// Render the live date and clock
pub fn render_clock(f: &mut Frame, time: &DateTime<Local>, settings: &Settings, area: Rect) {
    let (date, clock) = clock_text(time, settings);
    let line = Line::from(vec![
        Span::styled(date, hint_style()),
        Span::raw("  "),
        Span::styled(clock, clock_style()),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
