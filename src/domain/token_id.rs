//! HTS Token Identifiers
//!
//! Canonical `shard.realm.num` entity ids, plus classification of the
//! EVM-style hex addresses the mirror node also accepts for token lookups.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a token id
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenIdError {
    #[error("Invalid token ID format '{0}'. Expected format: 0.0.XXXXXXX")]
    InvalidFormat(String),
}

/// Canonical HTS entity id: three dot-separated non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId {
    shard: u64,
    realm: u64,
    num: u64,
}

impl TokenId {
    /// Create a token id from its three components
    pub fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Check whether a string is a well-formed `shard.realm.num` id
    pub fn is_canonical(s: &str) -> bool {
        s.parse::<TokenId>().is_ok()
    }
}

impl FromStr for TokenId {
    type Err = TokenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TokenIdError::InvalidFormat(s.to_string());

        let mut parts = s.split('.');
        let next_num = |parts: &mut std::str::Split<'_, char>| -> Result<u64, TokenIdError> {
            let part = parts.next().ok_or_else(invalid)?;
            // u64::from_str tolerates a leading '+'; the canonical form is digits only
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let shard = next_num(&mut parts)?;
        let realm = next_num(&mut parts)?;
        let num = next_num(&mut parts)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { shard, realm, num })
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

/// Check whether a string is an EVM-style token address: `0x` followed by
/// exactly 40 hex digits, case-insensitive.
pub fn is_evm_address(s: &str) -> bool {
    let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
