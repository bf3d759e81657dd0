use crate::app::state::{ActivityKind, AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

const LOGO: [&str; 5] = [
    r" _   _                  _     ",
    r"| | | |_   _ _ __   ___| |__  ",
    r"| |_| | | | | '_ \ / __| '_ \ ",
    r"|  _  | |_| | | | | (__| | | |",
    r"|_| |_|\__,_|_| |_|\___|_| |_|",
];

fn wave_color(col: u16, tick: u64) -> Color {
    let gradient: [(f64, f64, f64); 6] = [
        (80.0, 200.0, 210.0),  // teal
        (100.0, 170.0, 230.0), // blue
        (175.0, 140.0, 220.0), // lavender
        (220.0, 150.0, 180.0), // pink
        (230.0, 180.0, 80.0),  // amber
        (90.0, 210.0, 130.0),  // green
    ];
    let len = gradient.len() as f64;
    let phase = (col as f64 * 0.15 - tick as f64 * 0.12).rem_euclid(len);
    let idx = phase.floor() as usize;
    let frac = phase - phase.floor();
    let (r1, g1, b1) = gradient[idx % gradient.len()];
    let (r2, g2, b2) = gradient[(idx + 1) % gradient.len()];
    Color::Rgb(
        (r1 + (r2 - r1) * frac) as u8,
        (g1 + (g2 - g1) * frac) as u8,
        (b1 + (b2 - b1) * frac) as u8,
    )
}

fn render_welcome(frame: &mut Frame, area: Rect, state: &AppState) {
    let tick = state.tick_count;
    let logo_h = LOGO.len() as u16;
    let logo_w = LOGO.iter().map(|l| l.len()).max().unwrap_or(0) as u16;

    let hints: [(&str, &str); 4] = [
        ("  /connect ", "open a demo wallet with seeded HNCH"),
        ("  /create  ", "post an oracle event"),
        ("  /help    ", "all commands"),
        ("  Tab      ", "cycle panel focus"),
    ];

    let total_h = logo_h + 2 + hints.len() as u16;
    let start_y = area.y + area.height.saturating_sub(total_h) / 3;

    // Animated logo
    for (i, line) in LOGO.iter().enumerate() {
        let y = start_y + i as u16;
        if y >= area.bottom() {
            break;
        }
        let x = area.x + area.width.saturating_sub(logo_w) / 2;
        let spans: Vec<Span> = line
            .chars()
            .enumerate()
            .map(|(col, c)| {
                Span::styled(
                    c.to_string(),
                    Style::default().fg(wave_color(col as u16, tick)),
                )
            })
            .collect();
        frame.render_widget(
            ratatui::widgets::Paragraph::new(Line::from(spans)),
            Rect::new(x, y, logo_w.min(area.width), 1),
        );
    }

    // Key hints under the logo
    let hint_x = area.x + area.width.saturating_sub(logo_w) / 2;
    for (i, (key, desc)) in hints.iter().enumerate() {
        let y = start_y + logo_h + 2 + i as u16;
        if y >= area.bottom() {
            break;
        }
        let line = Line::from(vec![
            Span::styled(
                *key,
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(Theme::TEXT_SECONDARY)),
        ]);
        frame.render_widget(
            ratatui::widgets::Paragraph::new(line),
            Rect::new(hint_x, y, area.width.saturating_sub(hint_x - area.x), 1),
        );
    }
}

fn kind_marker(kind: &ActivityKind) -> (&'static str, Style) {
    match kind {
        ActivityKind::System => ("·", Theme::system_message()),
        ActivityKind::Submitted => ("→", Theme::submitted_message()),
        ActivityKind::Confirmed => ("✓", Theme::confirmed_message()),
        ActivityKind::Error => ("✗", Theme::error_message()),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Activity;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Activity ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Welcome screen until the session has anything beyond startup chrome
    let untouched = state.chain.user.address.is_none()
        && state.chain.events.is_empty()
        && state
            .activity
            .iter()
            .all(|e| e.kind == ActivityKind::System);
    if untouched {
        render_welcome(frame, inner, state);
        return;
    }

    let height = inner.height as usize;
    let total = state.activity.len();
    let scroll = state.activity_scroll.min(total.saturating_sub(height));
    let end = total - scroll;
    let start = end.saturating_sub(height);

    let items: Vec<ListItem> = state.activity[start..end]
        .iter()
        .map(|entry| {
            let (marker, style) = kind_marker(&entry.kind);
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", entry.timestamp), Theme::timestamp()),
                Span::styled(format!("{} ", marker), style),
                Span::styled(entry.text.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items);
    frame.render_widget(list, inner);

    if total > height {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(height))
            .position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            inner,
            &mut scrollbar_state,
        );
    }
}
