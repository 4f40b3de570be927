//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for the main view
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Zero-height when the pipeline is idle
    pub stage_bar: Rect,
    pub editor: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// Split the terminal into header / stage bar / editor+results / footer.
///
/// `stage_lines` is 0 while idle, 1 for the stage chips, 2 when an error
/// line is shown beneath them.
pub fn create(area: Rect, stage_lines: u16) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(stage_lines),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    ScreenAreas {
        header: rows[0],
        stage_bar: rows[1],
        editor: body[0],
        results: body[1],
        footer: rows[3],
    }
}
