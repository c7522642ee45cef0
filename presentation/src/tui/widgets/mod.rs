//! TUI widgets: ratatui components for the form layout
//!
//! Layout:
//! ┌── Header (3) ─────────────────────────────────────┐
//! ├── Form (flex) ───────────────┬── Options (35%) ───┤
//! ├── Result (4) ────────────────┴────────────────────┤
//! └── StatusBar (1) ──────────────────────────────────┘

pub mod form;
pub mod header;
pub mod options;
pub mod result;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the form layout regions from a terminal area
pub struct FormLayout {
    pub header: Rect,
    pub form: Rect,
    pub options: Rect,
    pub result: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[1]);

        Self {
            header: rows[0],
            form: columns[0],
            options: columns[1],
            result: rows[2],
            status_bar: rows[3],
        }
    }
}
