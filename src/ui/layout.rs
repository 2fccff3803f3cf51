use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub quote_panel: Rect,
    pub notice_bar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with topic tabs
            Constraint::Min(5),    // Quote panel
            Constraint::Length(1), // Notice bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        quote_panel: chunks[1],
        notice_bar: chunks[2],
        status_bar: chunks[3],
    }
}
