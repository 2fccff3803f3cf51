use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_ELEVATED: Color = Color::Rgb(30, 32, 40);
    pub const BORDER_DIM: Color = Color::Rgb(60, 64, 76);
    pub const TEXT_PRIMARY: Color = Color::Rgb(235, 235, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(170, 175, 185);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 115, 125);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_ROSE: Color = Color::Rgb(235, 110, 120);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn quote_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn quote_author() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn notice_info() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn notice_error() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn caption() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_badge() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn hint_disabled() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }
}
