//! Mirror Node API Types
//!
//! Serde models for the three consumed mirror-node endpoints:
//! token metadata, paged token balances, and token search by symbol.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer};

use crate::domain::parse_balance;

/// Token type string for plain fungible tokens
pub const FUNGIBLE_COMMON: &str = "FUNGIBLE_COMMON";

/// `GET /api/v1/tokens/{id}` response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    pub token_id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// String on the token endpoint, number in list entries
    #[serde(default, deserialize_with = "de_decimals")]
    pub decimals: Option<u32>,
    #[serde(default, deserialize_with = "de_numeric_string")]
    pub total_supply: Option<String>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl TokenInfo {
    pub fn decimals(&self) -> u32 {
        self.decimals.unwrap_or(0)
    }

    /// Total supply as an arbitrary-precision integer (zero when absent)
    pub fn total_supply(&self) -> BigUint {
        parse_balance(self.total_supply.as_deref().unwrap_or("0"))
    }
}

/// One row of `GET /api/v1/tokens/{id}/balances`
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceEntry {
    pub account: String,
    #[serde(deserialize_with = "de_required_numeric_string")]
    pub balance: String,
}

/// `GET /api/v1/tokens/{id}/balances` response page
#[derive(Debug, Clone, Deserialize)]
pub struct BalancesPage {
    #[serde(default)]
    pub balances: Vec<BalanceEntry>,
    #[serde(default)]
    pub links: Links,
}

/// `GET /api/v1/tokens?symbol=...` response
#[derive(Debug, Clone, Deserialize)]
pub struct TokensPage {
    #[serde(default)]
    pub tokens: Vec<TokenInfo>,
    #[serde(default)]
    pub links: Links,
}

/// Pagination block; `next` is a root-relative continuation path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    pub next: Option<String>,
}

/// Mirror nodes encode big numerics as JSON strings on some endpoints and
/// as numbers on others; normalize both to a decimal string.
fn de_numeric_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    }))
}

fn de_required_numeric_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    de_numeric_string(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("missing numeric value"))
}

fn de_decimals<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.parse().ok(),
        None => None,
    })
}
