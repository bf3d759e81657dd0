//! Simulated confirmation latency.
//!
//! Submitting an action records a pending transaction and spawns a timer
//! task; when the configured delay elapses, a [`AppEvent::TxConfirmed`]
//! re-enters the main event loop and the action is applied against the
//! latest store state. Nothing mutates the store from inside the timer, so
//! a submission can never commit from a balance it captured before other
//! transactions landed. Pending transactions cannot be cancelled.

use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::chain::types::ChainAction;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct ChainManager {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    confirm_delay: Duration,
}

impl ChainManager {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, confirm_delay: Duration) -> Self {
        Self {
            event_tx,
            confirm_delay,
        }
    }

    /// Queue an action for delayed confirmation.
    pub fn submit(&self, state: &mut AppState, action: ChainAction) {
        let tx_id = state.allocate_tx_id();
        let label = action.label();
        state.add_pending_tx(tx_id, label.clone());
        state.submitted_message(format!("[tx {}] {} — awaiting confirmation", tx_id, label));
        tracing::debug!(tx_id, %label, "transaction submitted");

        let event_tx = self.event_tx.clone();
        let delay = self.confirm_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(AppEvent::TxConfirmed { tx_id, action });
        });
    }
}
