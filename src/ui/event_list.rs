use crate::app::state::{AppState, FocusPanel};
use crate::chain::types::EventStatus;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn status_marker(status: EventStatus) -> (&'static str, Style) {
    match status {
        EventStatus::Active => ("◆", Theme::event_active()),
        EventStatus::Reported => ("◇", Theme::event_reported()),
        EventStatus::Disputed => ("◈", Theme::event_disputed()),
        EventStatus::DaoVote => ("❖", Theme::event_dao_vote()),
        EventStatus::Finalized => ("■", Theme::event_finalized()),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        s.to_string()
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::EventList;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let title = if state.chain.events.is_empty() {
        " Oracle Events ".to_string()
    } else {
        format!(" Oracle Events ({}) ", state.chain.events.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let question_width = (area.width as usize).saturating_sub(16).max(8);

    let mut items: Vec<ListItem> = Vec::new();
    for (i, event) in state.chain.events.iter().enumerate() {
        let (indicator, style) = status_marker(event.status);
        let selected = i == state.selected_event;
        let row_style = if selected {
            style.add_modifier(Modifier::BOLD).bg(Theme::BG_ELEVATED)
        } else {
            style
        };

        let short_id = event.id.trim_start_matches("evt-");
        let mut spans = vec![
            Span::styled(format!(" {} ", indicator), style),
            Span::styled(short_id.to_string(), row_style),
            Span::styled(" ", row_style),
            Span::styled(
                truncate(&event.question, question_width),
                if selected {
                    row_style
                } else {
                    Style::default().fg(Theme::TEXT_SECONDARY)
                },
            ),
        ];

        // Challenge badge
        if event.challenge_count > 0 && event.status != EventStatus::Finalized {
            spans.push(Span::styled(
                format!(" {}", event.challenge_count),
                Style::default()
                    .fg(Theme::BG_DARK)
                    .bg(Theme::ACCENT_AMBER)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        items.push(ListItem::new(Line::from(spans)));
    }

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No events yet — /create one",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
