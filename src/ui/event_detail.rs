use crate::app::state::AppState;
use crate::chain::types::{fmt_amount, short_address};
use crate::ui::event_list::status_marker;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const VOTE_BAR_WIDTH: usize = 24;

fn vote_bar(votes_for: f64, votes_against: f64) -> Line<'static> {
    let total = votes_for + votes_against;
    let for_cells = if total > 0.0 {
        ((votes_for / total) * VOTE_BAR_WIDTH as f64).round() as usize
    } else {
        VOTE_BAR_WIDTH / 2
    };
    let against_cells = VOTE_BAR_WIDTH - for_cells.min(VOTE_BAR_WIDTH);
    Line::from(vec![
        Span::styled(" votes   ", Style::default().fg(Theme::TEXT_MUTED)),
        Span::styled(
            "█".repeat(for_cells.min(VOTE_BAR_WIDTH)),
            Style::default().fg(Theme::ACCENT_GREEN),
        ),
        Span::styled("█".repeat(against_cells), Style::default().fg(Theme::ACCENT_RED)),
        Span::styled(
            format!(
                "  {} for / {} against",
                fmt_amount(votes_for),
                fmt_amount(votes_against)
            ),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Event Detail ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let Some(event) = state.current_event() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            " Select an event with /events, or post one with /create.",
            Style::default().fg(Theme::TEXT_MUTED),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let (indicator, status_style) = status_marker(event.status);
    let muted = Style::default().fg(Theme::TEXT_MUTED);
    let secondary = Style::default().fg(Theme::TEXT_SECONDARY);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", event.question),
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", indicator), status_style),
        Span::styled(event.status.to_string(), status_style),
        Span::styled(" │ ", muted),
        Span::styled(event.id.clone(), secondary),
        Span::styled(" │ ", muted),
        Span::styled(event.category.as_str(), secondary),
        Span::styled(" │ by ", muted),
        Span::styled(short_address(&event.creator), secondary),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" bond    ", muted),
        Span::styled(
            format!("{} HNCH", fmt_amount(event.bond)),
            Style::default().fg(Theme::ACCENT_AMBER),
        ),
        Span::styled("   challenges ", muted),
        Span::styled(
            event.challenge_count.to_string(),
            Style::default().fg(Theme::TEXT_PRIMARY),
        ),
        Span::styled("   staked ", muted),
        Span::styled(
            format!("{} HNCH", fmt_amount(event.total_staked)),
            Style::default().fg(Theme::TEXT_PRIMARY),
        ),
    ]));
    match &event.reported_outcome {
        Some(outcome) => lines.push(Line::from(vec![
            Span::styled(" outcome ", muted),
            Span::styled(
                outcome.clone(),
                Style::default().fg(Theme::ACCENT_TEAL).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (options: {})", event.outcomes.join(" / ")),
                muted,
            ),
        ])),
        None => lines.push(Line::from(vec![
            Span::styled(" outcome ", muted),
            Span::styled("none reported", muted),
            Span::styled(
                format!("  (options: {})", event.outcomes.join(" / ")),
                muted,
            ),
        ])),
    }
    lines.push(vote_bar(event.votes_for, event.votes_against));
    lines.push(Line::from(vec![
        Span::styled(" source  ", muted),
        Span::styled(event.source.clone(), secondary),
        Span::styled("   created ", muted),
        Span::styled(
            event
                .created_at
                .with_timezone(&Local)
                .format("%m-%d %H:%M")
                .to_string(),
            secondary,
        ),
        Span::styled("   updated ", muted),
        Span::styled(
            event
                .status_updated_at
                .with_timezone(&Local)
                .format("%m-%d %H:%M")
                .to_string(),
            secondary,
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
