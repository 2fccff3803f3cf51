use crate::app::state::AppState;
use crate::quotes::Topic;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const CAPTION: &str = "Instant inspiration for developers. Fresh quotes, one click.";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" 💡 Dev Quote ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans: Vec<Span> = Vec::new();
    for (i, topic) in Topic::ALL.into_iter().enumerate() {
        let label = format!(" {} {} ", i + 1, topic.label());
        let style = if topic == state.topic {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    // Caption on the right when there is room for it
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let total = inner.width as usize;
    if used + CAPTION.len() + 1 <= total {
        spans.push(Span::raw(" ".repeat(total - used - CAPTION.len())));
        spans.push(Span::styled(CAPTION, Theme::caption()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
