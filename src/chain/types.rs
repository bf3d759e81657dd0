use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Oracle event category. Fixed set, mirrored in the `/create` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Crypto,
    Sports,
    News,
    Tech,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Crypto => "Crypto",
            Category::Sports => "Sports",
            Category::News => "News",
            Category::Tech => "Tech",
        }
    }

    /// Case-insensitive parse, used by the command layer.
    pub fn parse(s: &str) -> Option<Category> {
        match s.to_lowercase().as_str() {
            "crypto" => Some(Category::Crypto),
            "sports" => Some(Category::Sports),
            "news" => Some(Category::News),
            "tech" => Some(Category::Tech),
            _ => None,
        }
    }
}

/// Lifecycle status of an oracle event.
///
/// `Active` is the initial state, `Finalized` the terminal one. In the
/// default permissive mode the store accepts `report` and `finalize` from
/// any status; the guarded mode restricts transitions to report → challenge
/// → vote order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Active,
    Reported,
    Disputed,
    DaoVote,
    Finalized,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventStatus::Active => "Active",
            EventStatus::Reported => "Reported",
            EventStatus::Disputed => "Disputed",
            EventStatus::DaoVote => "DAO Vote",
            EventStatus::Finalized => "Finalized",
        };
        f.write_str(s)
    }
}

/// The connected demo wallet. `address == None` means disconnected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hnch_balance: f64,
    #[serde(default)]
    pub staked_balance: f64,
    #[serde(default)]
    pub pending_rewards: f64,
    #[serde(default)]
    pub delegated_to: Option<String>,
}

/// A question posted to the oracle, carried through the dispute lifecycle.
///
/// Events are created `Active`, mutated only through [`super::store::ChainStore`]
/// methods, and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleEvent {
    pub id: String,
    pub question: String,
    pub category: Category,
    pub outcomes: Vec<String>,
    pub source: String,
    #[serde(default)]
    pub resolution_time: Option<DateTime<Utc>>,
    pub bond: f64,
    pub status: EventStatus,
    #[serde(default)]
    pub reported_outcome: Option<String>,
    pub challenge_count: u32,
    pub total_staked: f64,
    pub votes_for: f64,
    pub votes_against: f64,
    pub creator: String,
    pub created_at: DateTime<Utc>,
    pub status_updated_at: DateTime<Utc>,
}

/// Simulation parameters, sourced from `[sim]` in the config file.
#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    pub seed_balance: f64,
    pub faucet_amount: f64,
    pub creation_fee: f64,
    pub finalize_reward: f64,
    pub dao_vote_threshold: u32,
    pub guarded_transitions: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            seed_balance: 1000.0,
            faucet_amount: 500.0,
            creation_fee: 10.0,
            finalize_reward: 25.0,
            dao_vote_threshold: 3,
            guarded_transitions: false,
        }
    }
}

/// A store mutation. Submitted through the confirmation queue and applied
/// against the latest state once its delay elapses.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainAction {
    ConnectWallet,
    DisconnectWallet,
    Faucet,
    Stake { amount: f64 },
    Unstake { amount: f64 },
    Delegate { address: String },
    ClaimRewards,
    CreateEvent {
        question: String,
        bond: f64,
        category: Category,
        outcomes: Vec<String>,
        source: String,
        resolution_time: Option<DateTime<Utc>>,
    },
    ReportOutcome { event_id: String, outcome: String },
    ChallengeOutcome { event_id: String },
    FinalizeEvent { event_id: String },
    Vote { event_id: String, support: bool, amount: f64 },
}

impl ChainAction {
    /// Short label for pending-transaction rows and ledger lines.
    pub fn label(&self) -> String {
        match self {
            ChainAction::ConnectWallet => "connect wallet".to_string(),
            ChainAction::DisconnectWallet => "disconnect wallet".to_string(),
            ChainAction::Faucet => "faucet request".to_string(),
            ChainAction::Stake { amount } => format!("stake {} HNCH", fmt_amount(*amount)),
            ChainAction::Unstake { amount } => format!("unstake {} HNCH", fmt_amount(*amount)),
            ChainAction::Delegate { address } => format!("delegate to {}", short_address(address)),
            ChainAction::ClaimRewards => "claim rewards".to_string(),
            ChainAction::CreateEvent { bond, category, .. } => {
                format!("create {} event (bond {})", category.as_str(), fmt_amount(*bond))
            }
            ChainAction::ReportOutcome { event_id, .. } => format!("report {}", event_id),
            ChainAction::ChallengeOutcome { event_id } => format!("challenge {}", event_id),
            ChainAction::FinalizeEvent { event_id } => format!("finalize {}", event_id),
            ChainAction::Vote { event_id, support, amount } => format!(
                "vote {} {} on {}",
                fmt_amount(*amount),
                if *support { "for" } else { "against" },
                event_id
            ),
        }
    }
}

/// Format a token amount: whole numbers without decimals, otherwise two.
pub fn fmt_amount(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}

/// Shorten a wallet address for display (`0x1234…cdef`). Delegation targets
/// are free-form text, so this has to be safe on arbitrary input.
pub fn short_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    } else {
        addr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("crypto"), Some(Category::Crypto));
        assert_eq!(Category::parse("TECH"), Some(Category::Tech));
        assert_eq!(Category::parse("weather"), None);
    }

    #[test]
    fn test_fmt_amount() {
        assert_eq!(fmt_amount(1000.0), "1000");
        assert_eq!(fmt_amount(12.5), "12.50");
    }

    #[test]
    fn test_short_address() {
        let addr = "0x0123456789abcdef0123456789abcdef01234567";
        assert_eq!(short_address(addr), "0x0123…4567");
        assert_eq!(short_address("0xabc"), "0xabc");
    }
}
