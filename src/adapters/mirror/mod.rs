//! Mirror Node Adapter
//!
//! Client for the Hedera mirror-node REST API with automatic failover
//! across the redundant nodes configured per network.

pub mod client;
pub mod types;

pub use client::{MirrorClient, MirrorError, Network};
pub use types::{BalanceEntry, BalancesPage, Links, TokenInfo, TokensPage, FUNGIBLE_COMMON};
