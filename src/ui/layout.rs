use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub event_list: Rect,
    pub portfolio: Rect,
    pub pending_panel: Rect,
    pub event_detail: Rect,
    pub activity: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: left panel | gap | right content
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(34), // Left panel
            Constraint::Min(40),    // Right content
        ])
        .split(content);

    let left_panel = h_chunks[0];
    let right_panel = h_chunks[1];

    // Left panel: event list | portfolio | pending txs
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Event list
            Constraint::Length(9),      // Portfolio
            Constraint::Min(4),         // Pending txs
        ])
        .split(left_panel);

    let event_list = left_chunks[0];
    let portfolio = left_chunks[1];
    let pending_panel = left_chunks[2];

    // Right panel: event detail | activity | input
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Event detail
            Constraint::Min(5),     // Activity feed
            Constraint::Length(3),  // Input box
        ])
        .split(right_panel);

    let event_detail = right_chunks[0];
    let activity = right_chunks[1];
    let input_box = right_chunks[2];

    AppLayout {
        event_list,
        portfolio,
        pending_panel,
        event_detail,
        activity,
        input_box,
        status_bar,
    }
}
