//! Demo identifier generation.
//!
//! Produces throwaway wallet addresses (`0x` + 40 hex chars) and opaque
//! event ids (`evt-` + 8 hex chars). Nothing here is cryptographic; the
//! simulator only needs identifiers that look the part and do not collide
//! within a session.

use rand::RngExt;

const HEX: &[u8] = b"0123456789abcdef";

fn hex_string(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect()
}

/// Generate a demo wallet address like `0x3f9a…` (42 chars total).
pub fn demo_address() -> String {
    format!("0x{}", hex_string(40))
}

/// Generate an opaque oracle event id like `evt-a41b9c0d`.
pub fn event_id() -> String {
    format!("evt-{}", hex_string(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_address_format() {
        let addr = demo_address();
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);
        assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_event_id_format() {
        let id = event_id();
        assert!(id.starts_with("evt-"));
        assert_eq!(id.len(), 12);
        assert_ne!(event_id(), event_id());
    }
}
