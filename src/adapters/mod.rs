//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Mirror: Hedera mirror-node REST client with automatic failover
//! - CoinGecko: market-data provider client
//! - CLI: command definitions and terminal presentation
//! - HTTP: reqwest-backed transport shared by both API clients

pub mod cli;
pub mod coingecko;
pub mod http;
pub mod mirror;

pub use cli::CliApp;
pub use coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use http::HttpTransport;
pub use mirror::{MirrorClient, MirrorError, Network};
