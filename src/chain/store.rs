//! The event store: single source of truth for the demo wallet, the oracle
//! event collection, and protocol revenue.
//!
//! The store is a plain state object owned by the application event loop.
//! Every mutation goes through [`ChainStore::apply`], which runs on the loop
//! thread against the latest state, so concurrent submissions serialize into
//! one update queue and cannot commit from a stale balance snapshot.
//!
//! Precondition failures return a typed [`ChainError`] and leave the store
//! unchanged. By default status transitions are permissive (report and
//! finalize are accepted from any status); the `guarded_transitions`
//! parameter opts into strict lifecycle order.

use crate::chain::address;
use crate::chain::types::{
    Category, ChainAction, EventStatus, OracleEvent, SimParams, UserState,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChainError {
    #[error("wallet not connected")]
    WalletNotConnected,
    #[error("insufficient balance: need {needed} HNCH, have {available}")]
    InsufficientBalance { needed: f64, available: f64 },
    #[error("insufficient staked balance: need {needed} HNCH, have {available}")]
    InsufficientStake { needed: f64, available: f64 },
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("unknown event: {0}")]
    EventNotFound(String),
    #[error("cannot {action} an event in status {status}")]
    InvalidTransition {
        action: &'static str,
        status: EventStatus,
    },
}

/// The persisted shape: everything durable, nothing derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    #[serde(default)]
    pub protocol_revenue: f64,
    #[serde(default)]
    pub user: UserState,
    #[serde(default)]
    pub events: Vec<OracleEvent>,
}

#[derive(Debug)]
pub struct ChainStore {
    pub user: UserState,
    pub events: Vec<OracleEvent>,
    pub protocol_revenue: f64,
    params: SimParams,
}

impl ChainStore {
    pub fn new(params: SimParams) -> Self {
        Self {
            user: UserState::default(),
            events: Vec::new(),
            protocol_revenue: 0.0,
            params,
        }
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            protocol_revenue: self.protocol_revenue,
            user: self.user.clone(),
            events: self.events.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: ChainSnapshot) {
        self.user = snapshot.user;
        self.events = snapshot.events;
        self.protocol_revenue = snapshot.protocol_revenue;
    }

    pub fn find_event(&self, id: &str) -> Option<&OracleEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    fn find_event_mut(&mut self, id: &str) -> Result<&mut OracleEvent, ChainError> {
        self.events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ChainError::EventNotFound(id.to_string()))
    }

    fn connected_address(&self) -> Result<String, ChainError> {
        self.user
            .address
            .clone()
            .ok_or(ChainError::WalletNotConnected)
    }

    fn require_connected(&self) -> Result<(), ChainError> {
        self.connected_address().map(|_| ())
    }

    fn check_amount(amount: f64) -> Result<(), ChainError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ChainError::InvalidAmount);
        }
        Ok(())
    }

    /// Issue a fresh demo address and reset the user to the seeded balance.
    /// Always succeeds; reconnecting never preserves the previous identity.
    pub fn connect_wallet(&mut self) -> String {
        let addr = address::demo_address();
        self.user = UserState {
            address: Some(addr.clone()),
            hnch_balance: self.params.seed_balance,
            ..UserState::default()
        };
        addr
    }

    /// Clear identity and balances. Synchronous, no confirmation delay.
    pub fn disconnect_wallet(&mut self) {
        self.user = UserState::default();
    }

    pub fn faucet(&mut self) -> Result<(), ChainError> {
        self.require_connected()?;
        self.user.hnch_balance += self.params.faucet_amount;
        Ok(())
    }

    pub fn stake(&mut self, amount: f64) -> Result<(), ChainError> {
        self.require_connected()?;
        Self::check_amount(amount)?;
        if amount > self.user.hnch_balance {
            return Err(ChainError::InsufficientBalance {
                needed: amount,
                available: self.user.hnch_balance,
            });
        }
        self.user.hnch_balance -= amount;
        self.user.staked_balance += amount;
        Ok(())
    }

    pub fn unstake(&mut self, amount: f64) -> Result<(), ChainError> {
        self.require_connected()?;
        Self::check_amount(amount)?;
        if amount > self.user.staked_balance {
            return Err(ChainError::InsufficientStake {
                needed: amount,
                available: self.user.staked_balance,
            });
        }
        self.user.staked_balance -= amount;
        self.user.hnch_balance += amount;
        Ok(())
    }

    /// Record a delegation target. The address is free-form, as in the demo.
    pub fn delegate(&mut self, address: &str) -> Result<(), ChainError> {
        self.require_connected()?;
        self.user.delegated_to = Some(address.to_string());
        Ok(())
    }

    pub fn claim_rewards(&mut self) -> Result<(), ChainError> {
        self.require_connected()?;
        self.user.hnch_balance += self.user.pending_rewards;
        self.user.pending_rewards = 0.0;
        Ok(())
    }

    /// Post a new oracle event. Debits the bond from the creator's balance
    /// and credits the flat creation fee to protocol revenue. The new event
    /// is prepended so the collection stays newest-first.
    pub fn create_event(
        &mut self,
        question: &str,
        bond: f64,
        category: Category,
        outcomes: Vec<String>,
        source: &str,
        resolution_time: Option<DateTime<Utc>>,
    ) -> Result<String, ChainError> {
        let creator = self.connected_address()?;
        Self::check_amount(bond)?;
        if bond > self.user.hnch_balance {
            return Err(ChainError::InsufficientBalance {
                needed: bond,
                available: self.user.hnch_balance,
            });
        }
        self.user.hnch_balance -= bond;
        self.protocol_revenue += self.params.creation_fee;

        let now = Utc::now();
        let event = OracleEvent {
            id: address::event_id(),
            question: question.to_string(),
            category,
            outcomes,
            source: source.to_string(),
            resolution_time,
            bond,
            status: EventStatus::Active,
            reported_outcome: None,
            challenge_count: 0,
            total_staked: 0.0,
            votes_for: 0.0,
            votes_against: 0.0,
            creator,
            created_at: now,
            status_updated_at: now,
        };
        let id = event.id.clone();
        self.events.insert(0, event);
        Ok(id)
    }

    /// Record a proposed outcome and move the event to `Reported`.
    pub fn report_outcome(&mut self, event_id: &str, outcome: &str) -> Result<(), ChainError> {
        self.require_connected()?;
        let guarded = self.params.guarded_transitions;
        let event = self.find_event_mut(event_id)?;
        if guarded && event.status != EventStatus::Active {
            return Err(ChainError::InvalidTransition {
                action: "report",
                status: event.status,
            });
        }
        event.status = EventStatus::Reported;
        event.reported_outcome = Some(outcome.to_string());
        event.status_updated_at = Utc::now();
        Ok(())
    }

    /// Dispute the reported outcome. Doubles the bond on every call and
    /// escalates to a DAO vote once the challenge count reaches the
    /// threshold; below it the event sits in `Disputed`.
    pub fn challenge_outcome(&mut self, event_id: &str) -> Result<(), ChainError> {
        self.require_connected()?;
        let guarded = self.params.guarded_transitions;
        let threshold = self.params.dao_vote_threshold;
        let event = self.find_event_mut(event_id)?;
        if guarded
            && event.status != EventStatus::Reported
            && event.status != EventStatus::Disputed
        {
            return Err(ChainError::InvalidTransition {
                action: "challenge",
                status: event.status,
            });
        }
        event.challenge_count += 1;
        event.bond *= 2.0;
        event.status = if event.challenge_count >= threshold {
            EventStatus::DaoVote
        } else {
            EventStatus::Disputed
        };
        event.status_updated_at = Utc::now();
        Ok(())
    }

    /// Settle an event and pay the flat reward from protocol revenue into
    /// the caller's pending rewards. Permissive mode pays again on every
    /// repeat call; guarded mode rejects re-finalizing.
    pub fn finalize_event(&mut self, event_id: &str) -> Result<(), ChainError> {
        self.require_connected()?;
        let guarded = self.params.guarded_transitions;
        let reward = self.params.finalize_reward;
        let event = self.find_event_mut(event_id)?;
        if guarded && event.status == EventStatus::Finalized {
            return Err(ChainError::InvalidTransition {
                action: "finalize",
                status: event.status,
            });
        }
        event.status = EventStatus::Finalized;
        event.status_updated_at = Utc::now();
        self.protocol_revenue -= reward;
        self.user.pending_rewards += reward;
        Ok(())
    }

    /// Cast a quadratically weighted vote: the tally moves by √amount while
    /// `total_staked` accumulates the raw amount. No balance is deducted.
    pub fn vote(&mut self, event_id: &str, support: bool, amount: f64) -> Result<(), ChainError> {
        self.require_connected()?;
        Self::check_amount(amount)?;
        let guarded = self.params.guarded_transitions;
        let event = self.find_event_mut(event_id)?;
        if guarded && event.status != EventStatus::DaoVote {
            return Err(ChainError::InvalidTransition {
                action: "vote on",
                status: event.status,
            });
        }
        let weight = amount.sqrt();
        if support {
            event.votes_for += weight;
        } else {
            event.votes_against += weight;
        }
        event.total_staked += amount;
        Ok(())
    }

    /// Dispatch a queued action against the current state.
    pub fn apply(&mut self, action: &ChainAction) -> Result<(), ChainError> {
        match action {
            ChainAction::ConnectWallet => {
                self.connect_wallet();
                Ok(())
            }
            ChainAction::DisconnectWallet => {
                self.disconnect_wallet();
                Ok(())
            }
            ChainAction::Faucet => self.faucet(),
            ChainAction::Stake { amount } => self.stake(*amount),
            ChainAction::Unstake { amount } => self.unstake(*amount),
            ChainAction::Delegate { address } => self.delegate(address),
            ChainAction::ClaimRewards => self.claim_rewards(),
            ChainAction::CreateEvent {
                question,
                bond,
                category,
                outcomes,
                source,
                resolution_time,
            } => self
                .create_event(
                    question,
                    *bond,
                    *category,
                    outcomes.clone(),
                    source,
                    *resolution_time,
                )
                .map(|_| ()),
            ChainAction::ReportOutcome { event_id, outcome } => {
                self.report_outcome(event_id, outcome)
            }
            ChainAction::ChallengeOutcome { event_id } => self.challenge_outcome(event_id),
            ChainAction::FinalizeEvent { event_id } => self.finalize_event(event_id),
            ChainAction::Vote {
                event_id,
                support,
                amount,
            } => self.vote(event_id, *support, *amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_store() -> ChainStore {
        let mut store = ChainStore::new(SimParams::default());
        store.connect_wallet();
        store
    }

    fn guarded_store() -> ChainStore {
        let mut store = ChainStore::new(SimParams {
            guarded_transitions: true,
            ..SimParams::default()
        });
        store.connect_wallet();
        store
    }

    fn post_event(store: &mut ChainStore) -> String {
        store
            .create_event(
                "Will BTC close above $100k this year?",
                500.0,
                Category::Crypto,
                vec!["Yes".to_string(), "No".to_string()],
                "manual",
                None,
            )
            .unwrap()
    }

    #[test]
    fn test_connect_seeds_balance() {
        let store = connected_store();
        assert!(store.user.address.is_some());
        assert_eq!(store.user.hnch_balance, 1000.0);
        assert_eq!(store.user.staked_balance, 0.0);
    }

    #[test]
    fn test_reconnect_issues_fresh_identity() {
        let mut store = connected_store();
        let first = store.user.address.clone().unwrap();
        store.stake(200.0).unwrap();
        let second = store.connect_wallet();
        assert_ne!(first, second);
        assert_eq!(store.user.hnch_balance, 1000.0);
        assert_eq!(store.user.staked_balance, 0.0);
    }

    #[test]
    fn test_disconnect_clears_user() {
        let mut store = connected_store();
        store.disconnect_wallet();
        assert_eq!(store.user, UserState::default());
    }

    #[test]
    fn test_operations_require_connection() {
        let mut store = ChainStore::new(SimParams::default());
        assert_eq!(store.faucet(), Err(ChainError::WalletNotConnected));
        assert_eq!(store.stake(10.0), Err(ChainError::WalletNotConnected));
        assert_eq!(
            store.vote("evt-00000000", true, 10.0),
            Err(ChainError::WalletNotConnected)
        );
    }

    #[test]
    fn test_faucet_credits_fixed_amount() {
        let mut store = connected_store();
        store.faucet().unwrap();
        assert_eq!(store.user.hnch_balance, 1500.0);
    }

    #[test]
    fn test_stake_moves_balance() {
        let mut store = connected_store();
        store.stake(300.0).unwrap();
        assert_eq!(store.user.hnch_balance, 700.0);
        assert_eq!(store.user.staked_balance, 300.0);
    }

    #[test]
    fn test_overdrawn_stake_leaves_balances_unchanged() {
        let mut store = connected_store();
        let err = store.stake(1000.5).unwrap_err();
        assert!(matches!(err, ChainError::InsufficientBalance { .. }));
        assert_eq!(store.user.hnch_balance, 1000.0);
        assert_eq!(store.user.staked_balance, 0.0);
    }

    #[test]
    fn test_overdrawn_unstake_leaves_balances_unchanged() {
        let mut store = connected_store();
        store.stake(100.0).unwrap();
        let err = store.unstake(100.5).unwrap_err();
        assert!(matches!(err, ChainError::InsufficientStake { .. }));
        assert_eq!(store.user.hnch_balance, 900.0);
        assert_eq!(store.user.staked_balance, 100.0);
    }

    #[test]
    fn test_stake_unstake_round_trip() {
        let mut store = connected_store();
        store.stake(250.0).unwrap();
        store.unstake(250.0).unwrap();
        assert_eq!(store.user.hnch_balance, 1000.0);
        assert_eq!(store.user.staked_balance, 0.0);
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let mut store = connected_store();
        assert_eq!(store.stake(0.0), Err(ChainError::InvalidAmount));
        assert_eq!(store.stake(-5.0), Err(ChainError::InvalidAmount));
        assert_eq!(store.stake(f64::NAN), Err(ChainError::InvalidAmount));
        assert_eq!(store.user.hnch_balance, 1000.0);
    }

    #[test]
    fn test_delegate_records_target() {
        let mut store = connected_store();
        store.delegate("0xfeedbeef").unwrap();
        assert_eq!(store.user.delegated_to.as_deref(), Some("0xfeedbeef"));
    }

    #[test]
    fn test_claim_rewards_zeroes_pending() {
        let mut store = connected_store();
        store.user.pending_rewards = 75.0;
        store.claim_rewards().unwrap();
        assert_eq!(store.user.hnch_balance, 1075.0);
        assert_eq!(store.user.pending_rewards, 0.0);
    }

    #[test]
    fn test_create_event_debits_bond_and_credits_fee() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        assert_eq!(store.user.hnch_balance, 500.0);
        assert_eq!(store.protocol_revenue, 10.0);
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.status, EventStatus::Active);
        assert_eq!(event.challenge_count, 0);
        assert_eq!(event.bond, 500.0);
        assert_eq!(event.creator, store.user.address.clone().unwrap());
        // Newest-first ordering.
        assert_eq!(store.events[0].id, id);
    }

    #[test]
    fn test_create_event_insufficient_bond_changes_nothing() {
        let mut store = connected_store();
        let err = store
            .create_event(
                "q",
                5000.0,
                Category::News,
                vec!["Yes".to_string(), "No".to_string()],
                "manual",
                None,
            )
            .unwrap_err();
        assert!(matches!(err, ChainError::InsufficientBalance { .. }));
        assert_eq!(store.user.hnch_balance, 1000.0);
        assert_eq!(store.protocol_revenue, 0.0);
        assert!(store.events.is_empty());
    }

    #[test]
    fn test_report_records_outcome() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.report_outcome(&id, "Yes").unwrap();
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.status, EventStatus::Reported);
        assert_eq!(event.reported_outcome.as_deref(), Some("Yes"));
    }

    #[test]
    fn test_report_unknown_event() {
        let mut store = connected_store();
        assert_eq!(
            store.report_outcome("evt-ffffffff", "Yes"),
            Err(ChainError::EventNotFound("evt-ffffffff".to_string()))
        );
    }

    #[test]
    fn test_challenge_escalates_at_threshold() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.report_outcome(&id, "Yes").unwrap();

        store.challenge_outcome(&id).unwrap();
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.challenge_count, 1);
        assert_eq!(event.status, EventStatus::Disputed);
        assert_eq!(event.bond, 1000.0);

        store.challenge_outcome(&id).unwrap();
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.challenge_count, 2);
        assert_eq!(event.status, EventStatus::Disputed);
        assert_eq!(event.bond, 2000.0);

        // Third challenge crosses the threshold exactly.
        store.challenge_outcome(&id).unwrap();
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.challenge_count, 3);
        assert_eq!(event.status, EventStatus::DaoVote);
        assert_eq!(event.bond, 4000.0);
    }

    #[test]
    fn test_bond_doubles_past_threshold() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.report_outcome(&id, "No").unwrap();
        for _ in 0..4 {
            store.challenge_outcome(&id).unwrap();
        }
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.challenge_count, 4);
        assert_eq!(event.status, EventStatus::DaoVote);
        assert_eq!(event.bond, 8000.0);
    }

    #[test]
    fn test_vote_is_quadratically_weighted() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.vote(&id, true, 100.0).unwrap();
        store.vote(&id, false, 49.0).unwrap();
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.votes_for, 10.0);
        assert_eq!(event.votes_against, 7.0);
        assert_eq!(event.total_staked, 149.0);
        // No balance deduction in the mock.
        assert_eq!(store.user.hnch_balance, 500.0);
    }

    #[test]
    fn test_finalize_pays_reward_from_revenue() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.finalize_event(&id).unwrap();
        let event = store.find_event(&id).unwrap();
        assert_eq!(event.status, EventStatus::Finalized);
        assert_eq!(store.user.pending_rewards, 25.0);
        assert_eq!(store.protocol_revenue, 10.0 - 25.0);
    }

    #[test]
    fn test_repeated_finalize_stays_terminal_but_pays_again() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.finalize_event(&id).unwrap();
        store.finalize_event(&id).unwrap();
        assert_eq!(
            store.find_event(&id).unwrap().status,
            EventStatus::Finalized
        );
        assert_eq!(store.user.pending_rewards, 50.0);
    }

    #[test]
    fn test_guarded_rejects_refinalize() {
        let mut store = guarded_store();
        let id = post_event(&mut store);
        store.report_outcome(&id, "Yes").unwrap();
        store.finalize_event(&id).unwrap();
        let err = store.finalize_event(&id).unwrap_err();
        assert_eq!(
            err,
            ChainError::InvalidTransition {
                action: "finalize",
                status: EventStatus::Finalized,
            }
        );
        assert_eq!(store.user.pending_rewards, 25.0);
    }

    #[test]
    fn test_guarded_report_only_from_active() {
        let mut store = guarded_store();
        let id = post_event(&mut store);
        store.report_outcome(&id, "Yes").unwrap();
        let err = store.report_outcome(&id, "No").unwrap_err();
        assert_eq!(
            err,
            ChainError::InvalidTransition {
                action: "report",
                status: EventStatus::Reported,
            }
        );
        // The first report sticks.
        assert_eq!(
            store.find_event(&id).unwrap().reported_outcome.as_deref(),
            Some("Yes")
        );
    }

    #[test]
    fn test_guarded_challenge_requires_report() {
        let mut store = guarded_store();
        let id = post_event(&mut store);
        let err = store.challenge_outcome(&id).unwrap_err();
        assert_eq!(
            err,
            ChainError::InvalidTransition {
                action: "challenge",
                status: EventStatus::Active,
            }
        );
    }

    #[test]
    fn test_guarded_vote_requires_dao_vote() {
        let mut store = guarded_store();
        let id = post_event(&mut store);
        assert!(matches!(
            store.vote(&id, true, 100.0),
            Err(ChainError::InvalidTransition { .. })
        ));
        store.report_outcome(&id, "Yes").unwrap();
        for _ in 0..3 {
            store.challenge_outcome(&id).unwrap();
        }
        store.vote(&id, true, 100.0).unwrap();
        assert_eq!(store.find_event(&id).unwrap().votes_for, 10.0);
    }

    #[test]
    fn test_permissive_allows_report_after_finalize() {
        // Permissive mode imposes no lifecycle guard; the gap stays
        // observable instead of being silently corrected.
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.finalize_event(&id).unwrap();
        store.report_outcome(&id, "Yes").unwrap();
        assert_eq!(store.find_event(&id).unwrap().status, EventStatus::Reported);
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut store = connected_store();
        let id = post_event(&mut store);
        store.stake(100.0).unwrap();
        store.report_outcome(&id, "Yes").unwrap();
        let snapshot = store.snapshot();

        let mut fresh = ChainStore::new(SimParams::default());
        fresh.restore(snapshot.clone());
        assert_eq!(fresh.snapshot(), snapshot);
        assert_eq!(fresh.user.staked_balance, 100.0);
        assert_eq!(fresh.events.len(), 1);
    }

    #[test]
    fn test_apply_dispatches_to_methods() {
        let mut store = ChainStore::new(SimParams::default());
        store.apply(&ChainAction::ConnectWallet).unwrap();
        store.apply(&ChainAction::Stake { amount: 400.0 }).unwrap();
        assert_eq!(store.user.hnch_balance, 600.0);
        assert_eq!(store.user.staked_balance, 400.0);
        let err = store
            .apply(&ChainAction::ChallengeOutcome {
                event_id: "evt-00000000".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ChainError::EventNotFound(_)));
    }
}
