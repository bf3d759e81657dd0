use crate::app::state::AppState;
use crate::chain::types::{fmt_amount, short_address};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

fn kv(label: &str, value: String, value_style: Style) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!(" {:<9}", label),
            Style::default().fg(Theme::TEXT_MUTED),
        ),
        Span::styled(value, value_style),
    ]))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Portfolio ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let user = &state.chain.user;
    let primary = Style::default().fg(Theme::TEXT_PRIMARY);

    let mut items: Vec<ListItem> = Vec::new();
    match &user.address {
        Some(addr) => {
            items.push(kv(
                "Wallet",
                short_address(addr),
                Style::default().fg(Theme::ACCENT_GREEN),
            ));
            items.push(kv(
                "Balance",
                format!("{} HNCH", fmt_amount(user.hnch_balance)),
                primary,
            ));
            items.push(kv(
                "Staked",
                format!("{} HNCH", fmt_amount(user.staked_balance)),
                primary,
            ));
            items.push(kv(
                "Rewards",
                format!("{} HNCH", fmt_amount(user.pending_rewards)),
                if user.pending_rewards > 0.0 {
                    Style::default().fg(Theme::ACCENT_AMBER)
                } else {
                    primary
                },
            ));
            items.push(kv(
                "Delegate",
                user.delegated_to
                    .as_deref()
                    .map(short_address)
                    .unwrap_or_else(|| "—".to_string()),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ));
        }
        None => {
            items.push(kv(
                "Wallet",
                "not connected".to_string(),
                Style::default().fg(Theme::TEXT_MUTED),
            ));
        }
    }
    items.push(kv(
        "Revenue",
        format!("{} HNCH", fmt_amount(state.chain.protocol_revenue)),
        Style::default().fg(Theme::ACCENT_LAVENDER),
    ));

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
