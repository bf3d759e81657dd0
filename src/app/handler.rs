use crate::app::action::Action;
use crate::app::commands::{self, ParsedCommand};
use crate::app::event::{AppEvent, TxId};
use crate::app::state::{AppState, FocusPanel};
use crate::chain::types::{fmt_amount, short_address, ChainAction};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::TxConfirmed { tx_id, action } => handle_confirmed(state, tx_id, action),
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Keep the pending-panel spinner and the welcome logo moving
            let animating = !state.pending_txs.is_empty()
                || (state.chain.user.address.is_none() && state.chain.events.is_empty());
            if animating {
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// Apply a confirmed transaction against the latest store state. This is the
/// single commit point: whatever balances or statuses exist *now* decide
/// whether the action lands, not whatever existed at submission time.
fn handle_confirmed(state: &mut AppState, tx_id: TxId, action: ChainAction) -> Vec<Action> {
    let label = state
        .take_pending_tx(tx_id)
        .map(|t| t.label)
        .unwrap_or_else(|| action.label());

    // Captured before apply; claiming zeroes it.
    let claimed = match &action {
        ChainAction::ClaimRewards => state.chain.user.pending_rewards,
        _ => 0.0,
    };

    match state.chain.apply(&action) {
        Ok(()) => {
            let text = confirmation_text(state, &action, claimed);
            state.confirmed_message(format!("[tx {}] {}", tx_id, text));
            tracing::info!(tx_id, %label, "transaction confirmed");
            vec![Action::SaveState]
        }
        Err(e) => {
            state.error_message(format!("[tx {}] {} rejected: {}", tx_id, label, e));
            tracing::warn!(tx_id, %label, error = %e, "transaction rejected");
            vec![]
        }
    }
}

fn confirmation_text(state: &AppState, action: &ChainAction, claimed: f64) -> String {
    let user = &state.chain.user;
    match action {
        ChainAction::ConnectWallet => format!(
            "Wallet connected: {} ({} HNCH)",
            user.address.as_deref().map(short_address).unwrap_or_default(),
            fmt_amount(user.hnch_balance)
        ),
        ChainAction::DisconnectWallet => "Wallet disconnected.".to_string(),
        ChainAction::Faucet => format!(
            "Faucet dripped {} HNCH (balance {})",
            fmt_amount(state.config.sim.faucet_amount),
            fmt_amount(user.hnch_balance)
        ),
        ChainAction::Stake { amount } => format!(
            "Staked {} HNCH (staked total {})",
            fmt_amount(*amount),
            fmt_amount(user.staked_balance)
        ),
        ChainAction::Unstake { amount } => format!(
            "Unstaked {} HNCH (balance {})",
            fmt_amount(*amount),
            fmt_amount(user.hnch_balance)
        ),
        ChainAction::Delegate { address } => {
            format!("Delegated voting power to {}", short_address(address))
        }
        ChainAction::ClaimRewards => {
            format!("Claimed {} HNCH of pending rewards", fmt_amount(claimed))
        }
        ChainAction::CreateEvent { question, .. } => {
            let id = state
                .chain
                .events
                .first()
                .map(|e| e.id.as_str())
                .unwrap_or("?");
            format!("Event {} posted: {}", id, question)
        }
        ChainAction::ReportOutcome { event_id, outcome } => {
            format!("Reported '{}' on {}", outcome, event_id)
        }
        ChainAction::ChallengeOutcome { event_id } => state
            .chain
            .find_event(event_id)
            .map(|e| {
                format!(
                    "Challenge #{} on {} — bond {} HNCH, status {}",
                    e.challenge_count,
                    event_id,
                    fmt_amount(e.bond),
                    e.status
                )
            })
            .unwrap_or_else(|| format!("Challenged {}", event_id)),
        ChainAction::FinalizeEvent { event_id } => format!(
            "Event {} finalized — {} HNCH reward pending",
            event_id,
            fmt_amount(state.config.sim.finalize_reward)
        ),
        ChainAction::Vote { event_id, .. } => state
            .chain
            .find_event(event_id)
            .map(|e| {
                format!(
                    "Vote recorded on {}: {} for / {} against",
                    event_id,
                    fmt_amount(e.votes_for),
                    fmt_amount(e.votes_against)
                )
            })
            .unwrap_or_else(|| format!("Voted on {}", event_id)),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Esc => {
            state.focus = FocusPanel::Input;
            state.dirty = true;
            vec![]
        }
        _ => match state.focus {
            FocusPanel::Input => handle_input_key(state, key),
            FocusPanel::EventList => handle_event_list_key(state, key),
            FocusPanel::Activity => handle_activity_key(state, key),
        },
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => submit_input(state),
        KeyCode::Char(c) => {
            state.input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_event_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev_event(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next_event(),
        KeyCode::Enter => {
            state.focus = FocusPanel::Input;
        }
        _ => {}
    }
    vec![]
}

fn handle_activity_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let max = state.activity.len();
    match key.code {
        KeyCode::Up => state.activity_scroll = (state.activity_scroll + 1).min(max),
        KeyCode::Down => state.activity_scroll = state.activity_scroll.saturating_sub(1),
        KeyCode::PageUp => state.activity_scroll = (state.activity_scroll + 10).min(max),
        KeyCode::PageDown => state.activity_scroll = state.activity_scroll.saturating_sub(10),
        KeyCode::End => state.activity_scroll = 0,
        _ => {}
    }
    state.dirty = true;
    vec![]
}

fn submit_input(state: &mut AppState) -> Vec<Action> {
    let text = state.input.take_text();
    let trimmed = text.trim().to_string();
    if trimmed.is_empty() {
        return vec![];
    }
    match commands::parse_command(&trimmed) {
        Some(cmd) => execute_command(state, cmd),
        None => {
            if trimmed.starts_with('/') {
                state.error_message(format!(
                    "Unknown or malformed command: {} — /help lists commands",
                    trimmed
                ));
            } else {
                state.error_message("Commands start with '/'. Try /help.".to_string());
            }
            vec![]
        }
    }
}

fn execute_command(state: &mut AppState, cmd: ParsedCommand) -> Vec<Action> {
    match cmd {
        ParsedCommand::Connect => submit(ChainAction::ConnectWallet),
        ParsedCommand::Disconnect => {
            // Synchronous by contract: clears identity without a delay.
            state.chain.disconnect_wallet();
            state.system_message("Wallet disconnected.".to_string());
            vec![Action::SaveState]
        }
        ParsedCommand::Faucet => {
            if !wallet_connected(state) {
                return vec![];
            }
            submit(ChainAction::Faucet)
        }
        ParsedCommand::Stake { amount } => {
            if !wallet_connected(state) {
                return vec![];
            }
            submit(ChainAction::Stake { amount })
        }
        ParsedCommand::Unstake { amount } => {
            if !wallet_connected(state) {
                return vec![];
            }
            submit(ChainAction::Unstake { amount })
        }
        ParsedCommand::Delegate { address } => {
            if !wallet_connected(state) {
                return vec![];
            }
            submit(ChainAction::Delegate { address })
        }
        ParsedCommand::Claim => {
            if !wallet_connected(state) {
                return vec![];
            }
            submit(ChainAction::ClaimRewards)
        }
        ParsedCommand::Create {
            bond,
            category,
            question,
        } => {
            if !wallet_connected(state) {
                return vec![];
            }
            submit(ChainAction::CreateEvent {
                question,
                bond,
                category,
                outcomes: vec!["Yes".to_string(), "No".to_string()],
                source: "manual".to_string(),
                resolution_time: None,
            })
        }
        ParsedCommand::Report { event_id, outcome } => match resolve_id(state, &event_id) {
            Some(event_id) => submit(ChainAction::ReportOutcome { event_id, outcome }),
            None => vec![],
        },
        ParsedCommand::Challenge { event_id } => match resolve_id(state, &event_id) {
            Some(event_id) => submit(ChainAction::ChallengeOutcome { event_id }),
            None => vec![],
        },
        ParsedCommand::Finalize { event_id } => match resolve_id(state, &event_id) {
            Some(event_id) => submit(ChainAction::FinalizeEvent { event_id }),
            None => vec![],
        },
        ParsedCommand::Vote {
            event_id,
            support,
            amount,
        } => match resolve_id(state, &event_id) {
            Some(event_id) => submit(ChainAction::Vote {
                event_id,
                support,
                amount,
            }),
            None => vec![],
        },
        ParsedCommand::Events => {
            state.focus = FocusPanel::EventList;
            state.dirty = true;
            vec![]
        }
        ParsedCommand::Help => {
            show_help(state);
            vec![]
        }
        ParsedCommand::Quit => vec![Action::Quit],
    }
}

fn submit(action: ChainAction) -> Vec<Action> {
    vec![Action::Submit { action }]
}

fn wallet_connected(state: &mut AppState) -> bool {
    if state.chain.user.address.is_some() {
        true
    } else {
        state.error_message("No wallet connected — /connect first.".to_string());
        false
    }
}

fn resolve_id(state: &mut AppState, input: &str) -> Option<String> {
    match state.resolve_event_id(input) {
        Some(id) => Some(id),
        None => {
            state.error_message(format!("Unknown or ambiguous event id: {}", input));
            None
        }
    }
}

fn show_help(state: &mut AppState) {
    let lines = [
        "Commands:",
        "  /connect | /disconnect          demo wallet session",
        "  /faucet                         top up the demo balance",
        "  /stake <amt> | /unstake <amt>   move HNCH in and out of staking",
        "  /delegate <address>             delegate voting power",
        "  /claim                          collect pending rewards",
        "  /create <bond> <category> <question>",
        "                                  post an event (crypto|sports|news|tech)",
        "  /report <id> <outcome>          report an outcome",
        "  /challenge <id>                 dispute a report (doubles the bond)",
        "  /finalize <id>                  settle an event",
        "  /vote <id> <for|against> <amt>  quadratic DAO vote",
        "  /events                         focus the event list",
        "  /quit                           exit",
        "Event ids may be abbreviated to a unique prefix.",
    ];
    for line in lines {
        state.system_message(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ActivityKind;
    use crate::config::AppConfig;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press_enter_with(state: &mut AppState, text: &str) -> Vec<Action> {
        state.input.text = text.to_string();
        state.input.cursor = state.input.text.len();
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Enter,
                KeyModifiers::NONE,
            ))),
        )
    }

    #[test]
    fn test_confirmed_stake_applies_and_saves() {
        let mut state = test_state();
        state.chain.connect_wallet();
        let tx_id = state.allocate_tx_id();
        state.add_pending_tx(tx_id, "stake 100 HNCH".to_string());

        let actions = handle_event(
            &mut state,
            AppEvent::TxConfirmed {
                tx_id,
                action: ChainAction::Stake { amount: 100.0 },
            },
        );

        assert_eq!(state.chain.user.staked_balance, 100.0);
        assert!(state.pending_txs.is_empty());
        assert!(matches!(actions.as_slice(), [Action::SaveState]));
        assert_eq!(
            state.activity.last().map(|e| e.kind.clone()),
            Some(ActivityKind::Confirmed)
        );
    }

    #[test]
    fn test_rejected_action_reports_error_without_save() {
        let mut state = test_state();
        // No wallet: the commit-time check rejects the action.
        let tx_id = state.allocate_tx_id();
        state.add_pending_tx(tx_id, "stake 100 HNCH".to_string());

        let actions = handle_event(
            &mut state,
            AppEvent::TxConfirmed {
                tx_id,
                action: ChainAction::Stake { amount: 100.0 },
            },
        );

        assert!(actions.is_empty());
        assert_eq!(state.chain.user.staked_balance, 0.0);
        assert_eq!(
            state.activity.last().map(|e| e.kind.clone()),
            Some(ActivityKind::Error)
        );
    }

    #[test]
    fn test_stake_command_submits_chain_action() {
        let mut state = test_state();
        state.chain.connect_wallet();
        let actions = press_enter_with(&mut state, "/stake 100");
        assert!(matches!(
            actions.as_slice(),
            [Action::Submit {
                action: ChainAction::Stake { .. }
            }]
        ));
    }

    #[test]
    fn test_commands_needing_wallet_fail_fast_when_disconnected() {
        let mut state = test_state();
        let actions = press_enter_with(&mut state, "/stake 100");
        assert!(actions.is_empty());
        assert_eq!(
            state.activity.last().map(|e| e.kind.clone()),
            Some(ActivityKind::Error)
        );
    }

    #[test]
    fn test_disconnect_is_synchronous() {
        let mut state = test_state();
        state.chain.connect_wallet();
        let actions = press_enter_with(&mut state, "/disconnect");
        assert!(state.chain.user.address.is_none());
        assert!(matches!(actions.as_slice(), [Action::SaveState]));
    }

    #[test]
    fn test_event_id_prefix_resolution() {
        let mut state = test_state();
        state.chain.connect_wallet();
        let id = state
            .chain
            .create_event(
                "q",
                100.0,
                crate::chain::types::Category::Tech,
                vec!["Yes".to_string(), "No".to_string()],
                "manual",
                None,
            )
            .unwrap();
        let prefix = &id[..7];
        let actions = press_enter_with(&mut state, &format!("/challenge {}", prefix));
        match actions.as_slice() {
            [Action::Submit {
                action: ChainAction::ChallengeOutcome { event_id },
            }] => assert_eq!(*event_id, id),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_quit_command() {
        let mut state = test_state();
        let actions = press_enter_with(&mut state, "/quit");
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let mut state = test_state();
        let actions = press_enter_with(&mut state, "/warp 9");
        assert!(actions.is_empty());
        assert_eq!(
            state.activity.last().map(|e| e.kind.clone()),
            Some(ActivityKind::Error)
        );
    }
}
