use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Long quotes read badly at full terminal width.
const MAX_TEXT_WIDTH: usize = 72;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Quote ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref quote) = state.current_quote else {
        render_placeholder(frame, inner);
        return;
    };

    if inner.width < 4 || inner.height < 3 {
        return;
    }

    let text_width = (inner.width as usize - 2).min(MAX_TEXT_WIDTH);
    let text = format!("\u{201c}{}\u{201d}", quote.text);
    let lines = wrap_quote(&text, text_width);
    let author = format!("— {}", quote.author);

    let block_w = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(author.width()) as u16;
    let total_h = lines.len() as u16 + 2;
    let start_y = inner.y + inner.height.saturating_sub(total_h) / 2;
    let block_x = inner.x + inner.width.saturating_sub(block_w) / 2;

    // Text lines centered individually
    for (i, line) in lines.iter().enumerate() {
        let y = start_y + i as u16;
        if y >= inner.y + inner.height {
            return;
        }
        let w = line.width() as u16;
        let x = inner.x + inner.width.saturating_sub(w) / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(line.clone(), Theme::quote_text())),
            Rect::new(x, y, w.min(inner.width), 1),
        );
    }

    // Attribution flush with the right edge of the text block
    let author_y = start_y + lines.len() as u16 + 1;
    if author_y < inner.y + inner.height {
        let w = author.width() as u16;
        let x = (block_x + block_w).saturating_sub(w).max(inner.x);
        frame.render_widget(
            Paragraph::new(Span::styled(author, Theme::quote_author())),
            Rect::new(x, author_y, w.min(inner.width), 1),
        );
    }
}

fn render_placeholder(frame: &mut Frame, inner: Rect) {
    if inner.height == 0 || inner.width == 0 {
        return;
    }
    let text = "No quote yet. Press r to fetch one.";
    let w = text.len() as u16;
    let x = inner.x + inner.width.saturating_sub(w) / 2;
    let y = inner.y + inner.height.saturating_sub(1) / 2;
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        )),
        Rect::new(x, y, w.min(inner.width), 1),
    );
}

/// Greedy word wrap by display width. Words wider than `width` are broken
/// mid-word so every returned line fits.
fn wrap_quote(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in text.split_whitespace() {
        let word_w = word.width();
        if current_w > 0 {
            if current_w + 1 + word_w <= width {
                current.push(' ');
                current.push_str(word);
                current_w += 1 + word_w;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if word_w <= width {
            current.push_str(word);
            current_w = word_w;
        } else {
            break_word(word, width, &mut lines, &mut current, &mut current_w);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn break_word(
    word: &str,
    width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_w: &mut usize,
) {
    for ch in word.chars() {
        let ch_w = ch.width().unwrap_or(0);
        if *current_w + ch_w > width && *current_w > 0 {
            lines.push(std::mem::take(current));
            *current_w = 0;
        }
        current.push(ch);
        *current_w += ch_w;
    }
}
