use crate::app::state::{AppState, FocusPanel};
use crate::chain::types::short_address;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Connected wallet badge
    if let Some(addr) = &state.chain.user.address {
        parts.push(Span::styled(
            format!(" [{}] ", short_address(addr)),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ));
    }

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Input => "COMMAND",
        FocusPanel::EventList => "EVENTS",
        FocusPanel::Activity => "ACTIVITY",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
