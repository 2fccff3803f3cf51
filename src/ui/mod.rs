mod header;
mod layout;
mod notice_bar;
mod quote_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    quote_panel::render(frame, app_layout.quote_panel, state);
    notice_bar::render(frame, app_layout.notice_bar, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
