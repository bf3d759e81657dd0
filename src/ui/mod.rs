mod activity;
mod event_detail;
mod event_list;
mod input_box;
mod layout;
mod portfolio;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};
use theme::Theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    event_list::render(frame, app_layout.event_list, state);
    portfolio::render(frame, app_layout.portfolio, state);
    render_pending_panel(frame, app_layout.pending_panel, state);
    event_detail::render(frame, app_layout.event_detail, state);
    activity::render(frame, app_layout.activity, state);
    input_box::render(frame, app_layout.input_box, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_pending_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Pending ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let mut items: Vec<ListItem> = Vec::new();

    if state.pending_txs.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No pending transactions",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    } else {
        let spin = SPINNER[(state.tick_count as usize) % SPINNER.len()];
        for tx in &state.pending_txs {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", spin),
                    Style::default().fg(Theme::ACCENT_AMBER),
                ),
                Span::styled(
                    format!("[{}] {}", tx.id, tx.label),
                    Style::default().fg(Theme::ACCENT_AMBER),
                ),
                Span::styled(
                    format!(" ({})", tx.submitted_at),
                    Style::default().fg(Theme::TEXT_MUTED),
                ),
            ])));
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
