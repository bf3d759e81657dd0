use crate::chain::types::ChainAction;
use crossterm::event::Event as CrosstermEvent;

pub type TxId = usize;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A submitted transaction finished its confirmation delay
    TxConfirmed { tx_id: TxId, action: ChainAction },

    /// Tick for UI refresh
    Tick,
}
