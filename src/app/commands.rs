//! User slash-command parser.
//!
//! Parses `/command arg1 arg2 ...` input lines into typed [`ParsedCommand`]
//! values that the event handler can act on.

use crate::chain::types::Category;

/// A parsed user command. Each variant corresponds to a `/command`.
#[derive(Debug, PartialEq)]
pub enum ParsedCommand {
    Connect,
    Disconnect,
    Faucet,
    Stake { amount: f64 },
    Unstake { amount: f64 },
    Delegate { address: String },
    Claim,
    Create { bond: f64, category: Category, question: String },
    Report { event_id: String, outcome: String },
    Challenge { event_id: String },
    Finalize { event_id: String },
    Vote { event_id: String, support: bool, amount: f64 },
    Events,
    Help,
    Quit,
}

/// Parse a slash-command string into a [`ParsedCommand`].
///
/// Returns `None` if the input does not start with `/` or is not a recognized
/// command. Commands are case-insensitive.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let input = input.trim();
    if !input.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = input[1..].splitn(2, ' ').collect();
    let cmd = parts.first()?.to_lowercase();

    match cmd.as_str() {
        "connect" => Some(ParsedCommand::Connect),
        "disconnect" => Some(ParsedCommand::Disconnect),
        "faucet" => Some(ParsedCommand::Faucet),
        "stake" => {
            let amount = parts.get(1)?.trim().parse().ok()?;
            Some(ParsedCommand::Stake { amount })
        }
        "unstake" => {
            let amount = parts.get(1)?.trim().parse().ok()?;
            Some(ParsedCommand::Unstake { amount })
        }
        "delegate" => {
            let address = parts.get(1)?.trim().to_string();
            if address.is_empty() {
                return None;
            }
            Some(ParsedCommand::Delegate { address })
        }
        "claim" => Some(ParsedCommand::Claim),
        "create" => {
            // /create <bond> <category> <question...>
            let rest = parts.get(1)?;
            let args: Vec<&str> = rest.splitn(3, ' ').collect();
            let bond = args.first()?.parse().ok()?;
            let category = Category::parse(args.get(1)?)?;
            let question = args.get(2)?.trim().to_string();
            if question.is_empty() {
                return None;
            }
            Some(ParsedCommand::Create { bond, category, question })
        }
        "report" => {
            // /report <id> <outcome...>
            let rest = parts.get(1)?;
            let args: Vec<&str> = rest.splitn(2, ' ').collect();
            let event_id = args.first()?.to_string();
            let outcome = args.get(1)?.trim().to_string();
            if outcome.is_empty() {
                return None;
            }
            Some(ParsedCommand::Report { event_id, outcome })
        }
        "challenge" => {
            let event_id = parts.get(1)?.trim().to_string();
            if event_id.is_empty() {
                return None;
            }
            Some(ParsedCommand::Challenge { event_id })
        }
        "finalize" => {
            let event_id = parts.get(1)?.trim().to_string();
            if event_id.is_empty() {
                return None;
            }
            Some(ParsedCommand::Finalize { event_id })
        }
        "vote" => {
            // /vote <id> <for|against> <amount>
            let rest = parts.get(1)?;
            let args: Vec<&str> = rest.split_whitespace().collect();
            if args.len() != 3 {
                return None;
            }
            let event_id = args[0].to_string();
            let support = match args[1].to_lowercase().as_str() {
                "for" | "yes" | "y" => true,
                "against" | "no" | "n" => false,
                _ => return None,
            };
            let amount = args[2].parse().ok()?;
            Some(ParsedCommand::Vote { event_id, support, amount })
        }
        "events" => Some(ParsedCommand::Events),
        "help" | "h" => Some(ParsedCommand::Help),
        "quit" | "exit" => Some(ParsedCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("/connect"), Some(ParsedCommand::Connect));
        assert_eq!(parse_command("/FAUCET"), Some(ParsedCommand::Faucet));
        assert_eq!(parse_command("/claim"), Some(ParsedCommand::Claim));
        assert_eq!(parse_command("/quit"), Some(ParsedCommand::Quit));
    }

    #[test]
    fn test_parse_stake() {
        assert_eq!(
            parse_command("/stake 100"),
            Some(ParsedCommand::Stake { amount: 100.0 })
        );
        assert_eq!(
            parse_command("/unstake 12.5"),
            Some(ParsedCommand::Unstake { amount: 12.5 })
        );
        assert_eq!(parse_command("/stake"), None);
        assert_eq!(parse_command("/stake lots"), None);
    }

    #[test]
    fn test_parse_create() {
        assert_eq!(
            parse_command("/create 500 crypto Will BTC close above $100k?"),
            Some(ParsedCommand::Create {
                bond: 500.0,
                category: Category::Crypto,
                question: "Will BTC close above $100k?".to_string(),
            })
        );
        assert_eq!(parse_command("/create 500 weather Will it rain?"), None);
        assert_eq!(parse_command("/create 500 crypto"), None);
    }

    #[test]
    fn test_parse_report() {
        assert_eq!(
            parse_command("/report evt-a1b2c3d4 Yes"),
            Some(ParsedCommand::Report {
                event_id: "evt-a1b2c3d4".to_string(),
                outcome: "Yes".to_string(),
            })
        );
        assert_eq!(parse_command("/report evt-a1b2c3d4"), None);
    }

    #[test]
    fn test_parse_vote() {
        assert_eq!(
            parse_command("/vote evt-a1b2c3d4 for 100"),
            Some(ParsedCommand::Vote {
                event_id: "evt-a1b2c3d4".to_string(),
                support: true,
                amount: 100.0,
            })
        );
        assert_eq!(
            parse_command("/vote evt-a1b2c3d4 no 25"),
            Some(ParsedCommand::Vote {
                event_id: "evt-a1b2c3d4".to_string(),
                support: false,
                amount: 25.0,
            })
        );
        assert_eq!(parse_command("/vote evt-a1b2c3d4 maybe 25"), None);
    }

    #[test]
    fn test_rejects_non_commands() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command("/teleport home"), None);
        assert_eq!(parse_command(""), None);
    }
}
