use crate::app::event::TxId;
use crate::chain::store::ChainStore;
use crate::chain::types::{short_address, EventStatus, OracleEvent};
use crate::config::AppConfig;
use chrono::Local;

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityKind {
    System,
    Submitted,
    Confirmed,
    Error,
}

/// One line in the activity feed (and, when enabled, the on-disk ledger).
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub kind: ActivityKind,
    pub text: String,
}

/// A transaction sitting in its confirmation delay.
#[derive(Debug, Clone)]
pub struct PendingTx {
    pub id: TxId,
    pub label: String,
    pub submitted_at: String,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        let text = self.text.clone();
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    EventList,
    Activity,
    Input,
}

pub struct AppState {
    pub config: AppConfig,
    pub chain: ChainStore,
    pub pending_txs: Vec<PendingTx>,
    pub activity: Vec<ActivityEntry>,
    /// Entries not yet drained into the on-disk ledger.
    pub new_entries: Vec<ActivityEntry>,
    pub activity_scroll: usize,
    pub selected_event: usize,
    pub input: InputState,
    pub focus: FocusPanel,
    pub next_tx_id: TxId,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        let chain = ChainStore::new(config.sim.params());
        Self {
            config,
            chain,
            pending_txs: Vec::new(),
            activity: Vec::new(),
            new_entries: Vec::new(),
            activity_scroll: 0,
            selected_event: 0,
            input: InputState::new(),
            focus: FocusPanel::Input,
            next_tx_id: 1,
            should_quit: false,
            dirty: true,
            tick_count: 0,
            timestamp_format,
        }
    }

    pub fn allocate_tx_id(&mut self) -> TxId {
        let id = self.next_tx_id;
        self.next_tx_id += 1;
        id
    }

    pub fn add_pending_tx(&mut self, id: TxId, label: String) {
        let submitted_at = Local::now().format(&self.timestamp_format).to_string();
        self.pending_txs.push(PendingTx {
            id,
            label,
            submitted_at,
        });
        self.dirty = true;
    }

    pub fn take_pending_tx(&mut self, id: TxId) -> Option<PendingTx> {
        let idx = self.pending_txs.iter().position(|t| t.id == id)?;
        self.dirty = true;
        Some(self.pending_txs.remove(idx))
    }

    fn push_entry(&mut self, kind: ActivityKind, text: String) {
        let entry = ActivityEntry {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            kind,
            text,
        };
        self.activity.push(entry.clone());
        self.new_entries.push(entry);
        let max = self.config.ui.max_activity;
        if self.activity.len() > max {
            self.activity.remove(0);
            if self.activity_scroll > 0 {
                self.activity_scroll = self.activity_scroll.saturating_sub(1);
            }
        }
        self.dirty = true;
    }

    pub fn system_message(&mut self, text: String) {
        self.push_entry(ActivityKind::System, text);
    }

    pub fn submitted_message(&mut self, text: String) {
        self.push_entry(ActivityKind::Submitted, text);
    }

    pub fn confirmed_message(&mut self, text: String) {
        self.push_entry(ActivityKind::Confirmed, text);
    }

    pub fn error_message(&mut self, text: String) {
        self.push_entry(ActivityKind::Error, text);
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::EventList,
            FocusPanel::EventList => FocusPanel::Activity,
            FocusPanel::Activity => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn current_event(&self) -> Option<&OracleEvent> {
        self.chain.events.get(self.selected_event)
    }

    pub fn select_next_event(&mut self) {
        if !self.chain.events.is_empty() {
            self.selected_event = (self.selected_event + 1).min(self.chain.events.len() - 1);
            self.dirty = true;
        }
    }

    pub fn select_prev_event(&mut self) {
        self.selected_event = self.selected_event.saturating_sub(1);
        self.dirty = true;
    }

    /// Resolve user input to a full event id: exact match, or a unique
    /// prefix. The store itself only accepts exact ids.
    pub fn resolve_event_id(&self, input: &str) -> Option<String> {
        if self.chain.events.iter().any(|e| e.id == input) {
            return Some(input.to_string());
        }
        let mut matches = self
            .chain
            .events
            .iter()
            .filter(|e| e.id.starts_with(input) || e.id.trim_start_matches("evt-").starts_with(input));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.id.clone())
    }

    pub fn status_line(&self) -> String {
        let wallet = match &self.chain.user.address {
            Some(addr) => short_address(addr),
            None => "disconnected".to_string(),
        };
        let open = self
            .chain
            .events
            .iter()
            .filter(|e| e.status != EventStatus::Finalized)
            .count();
        let mut s = format!(
            "Wallet: {} | Events: {} open / {} total",
            wallet,
            open,
            self.chain.events.len()
        );
        if !self.pending_txs.is_empty() {
            s.push_str(&format!(" | Pending: {}", self.pending_txs.len()));
        }
        s
    }
}
