use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Selected topic badge
    parts.push(Span::styled(
        format!(" [{}] ", state.topic.label()),
        Theme::status_badge(),
    ));

    let has_quote = state.has_quote();
    push_hint(&mut parts, "r", "refresh", true);
    push_hint(&mut parts, "c", "copy", has_quote);
    push_hint(&mut parts, "t", "tweet", has_quote);
    push_hint(&mut parts, "s", "save", has_quote);
    push_hint(&mut parts, "Tab", "topic", true);
    push_hint(&mut parts, "q", "quit", true);

    // Pad to fill remaining space, version on the right
    let version = format!(" v{} ", env!("CARGO_PKG_VERSION"));
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + version.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        version,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

fn push_hint(parts: &mut Vec<Span<'static>>, key: &'static str, label: &'static str, enabled: bool) {
    if enabled {
        parts.push(Span::styled(format!(" {} ", key), Theme::hint_key()));
        parts.push(Span::styled(format!("{} ", label), Theme::hint_label()));
    } else {
        parts.push(Span::styled(format!(" {} ", key), Theme::hint_disabled()));
        parts.push(Span::styled(format!("{} ", label), Theme::hint_disabled()));
    }
}
