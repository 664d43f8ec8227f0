//! Holder Records
//!
//! An account holding a non-zero balance of a token. Balances arrive from
//! the mirror node as numeric strings and can exceed u64, so they are kept
//! as arbitrary-precision integers for the lifetime of a query.

use num_bigint::BigUint;

/// One account's balance of a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderBalance {
    /// Account entity id, e.g. "0.0.1234"
    pub account: String,
    pub balance: BigUint,
}

impl HolderBalance {
    pub fn new(account: impl Into<String>, balance: BigUint) -> Self {
        Self {
            account: account.into(),
            balance,
        }
    }

    /// Build a holder from the provider's string-encoded balance.
    /// A malformed balance is treated as zero rather than aborting the
    /// whole multi-page aggregation; zero ranks last.
    pub fn from_raw(account: impl Into<String>, raw_balance: &str) -> Self {
        Self {
            account: account.into(),
            balance: parse_balance(raw_balance),
        }
    }
}

/// Parse a decimal balance string into an arbitrary-precision integer.
/// Returns zero for anything that is not a plain run of digits.
pub fn parse_balance(raw: &str) -> BigUint {
    BigUint::parse_bytes(raw.as_bytes(), 10).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balance_small() {
        assert_eq!(parse_balance("12345"), BigUint::from(12345u64));
    }

    #[test]
    fn test_parse_balance_beyond_u64() {
        // 2^64 = 18446744073709551616
        let parsed = parse_balance("18446744073709551616");
        assert_eq!(parsed, BigUint::from(u64::MAX) + 1u32);
    }

    #[test]
    fn test_parse_balance_malformed_is_zero() {
        for bad in ["", "-5", "1.5", "1e9", "0x10", " 42"] {
            assert_eq!(parse_balance(bad), BigUint::default(), "input '{}'", bad);
        }
    }

    #[test]
    fn test_from_raw() {
        let h = HolderBalance::from_raw("0.0.42", "1000");
        assert_eq!(h.account, "0.0.42");
        assert_eq!(h.balance, BigUint::from(1000u32));
    }
}
