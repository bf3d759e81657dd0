use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(15, 17, 23);
    pub const BG_ELEVATED: Color = Color::Rgb(26, 30, 40);
    pub const BORDER_DIM: Color = Color::Rgb(58, 64, 80);
    pub const TEXT_PRIMARY: Color = Color::Rgb(221, 224, 230);
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 155, 170);
    pub const TEXT_MUTED: Color = Color::Rgb(95, 101, 116);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_RED: Color = Color::Rgb(235, 110, 110);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(175, 140, 220);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }

    pub fn system_message() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn submitted_message() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn confirmed_message() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn event_active() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn event_reported() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn event_disputed() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn event_dao_vote() -> Style {
        Style::default().fg(Self::ACCENT_LAVENDER)
    }

    pub fn event_finalized() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }
}
