//! CoinGecko Adapter
//!
//! Market-data provider client: ecosystem market list for the top-tokens
//! strip and per-coin detail records for identifier resolution.

pub mod client;
pub mod types;

pub use client::{CoinGeckoClient, CoinGeckoConfig, MarketError};
pub use types::{CoinDetail, CoinMarket, Sparkline, HEDERA_PLATFORM};
