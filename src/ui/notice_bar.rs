use crate::app::state::{AppState, NoticeKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref notice) = state.notice else {
        return;
    };

    let (marker, style) = match notice.kind {
        NoticeKind::Info => ("• ", Theme::notice_info()),
        NoticeKind::Error => ("✘ ", Theme::notice_error()),
    };

    let line = Line::from(vec![
        Span::styled(format!(" [{}] ", notice.timestamp), Theme::timestamp()),
        Span::styled(marker, style),
        Span::styled(notice.text.clone(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
