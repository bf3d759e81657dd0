use crate::chain::types::ChainAction;

/// Work the main loop performs on behalf of the handler. The handler itself
/// never does I/O; it mutates state and returns these.
#[derive(Debug)]
pub enum Action {
    /// Submit a chain action through the confirmation queue
    Submit { action: ChainAction },
    /// Write the current store snapshot to disk
    SaveState,
    Quit,
}
