//! CoinGecko API Client
//!
//! REST client for the two consumed CoinGecko endpoints: the
//! hedera-ecosystem market list and per-coin detail records. Uses the
//! demo tier; an optional API key is passed as the `x_cg_demo_api_key`
//! query parameter for higher rate limits.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::transport::{Transport, TransportError};

use super::types::{CoinDetail, CoinMarket};

/// Market-list query, mirroring what the explorer shows: top 10
/// hedera-ecosystem coins by 24h volume with 7-day sparklines
const MARKETS_QUERY: &str = "/coins/markets?vs_currency=usd&category=hedera-ecosystem\
&order=volume_desc&per_page=10&page=1&sparkline=true&price_change_percentage=24h";

/// Detail query with every optional payload disabled; only `platforms`
/// is of interest
const DETAIL_QUERY: &str =
    "?localization=false&tickers=false&market_data=false&community_data=false&developer_data=false";

/// CoinGecko client errors
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Rate limited — try again shortly")]
    RateLimited,

    #[error("CoinGecko API {0}")]
    Api(u16),

    #[error("network error: {0}")]
    Transport(#[from] TransportError),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("No token data returned")]
    NoData,
}

/// CoinGecko client configuration
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL, e.g. https://api.coingecko.com/api/v3
    pub api_url: String,
    /// Optional demo API key for higher rate limits
    pub api_key: Option<String>,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.coingecko.com/api/v3".to_string(),
            api_key: None,
        }
    }
}

/// CoinGecko REST client
pub struct CoinGeckoClient {
    transport: Arc<dyn Transport>,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    pub fn new(transport: Arc<dyn Transport>, config: CoinGeckoConfig) -> Self {
        Self { transport, config }
    }

    /// Top hedera-ecosystem coins by 24h volume
    pub async fn hedera_markets(&self) -> Result<Vec<CoinMarket>, MarketError> {
        let url = self.url(MARKETS_QUERY);
        let response = self.transport.get(&url).await?;

        if response.status == 429 {
            return Err(MarketError::RateLimited);
        }
        if !response.is_ok() {
            return Err(MarketError::Api(response.status));
        }

        let coins: Vec<CoinMarket> = response
            .json()
            .map_err(|e| MarketError::Decode(e.to_string()))?;

        if coins.is_empty() {
            return Err(MarketError::NoData);
        }
        Ok(coins)
    }

    /// Detail record for one coin id
    pub async fn coin_detail(&self, coin_id: &str) -> Result<CoinDetail, MarketError> {
        let url = self.url(&format!("/coins/{}{}", coin_id, DETAIL_QUERY));
        let response = self.transport.get(&url).await?;

        if response.status == 429 {
            return Err(MarketError::RateLimited);
        }
        if !response.is_ok() {
            return Err(MarketError::Api(response.status));
        }

        response
            .json()
            .map_err(|e| MarketError::Decode(e.to_string()))
    }

    fn url(&self, path_and_query: &str) -> String {
        let mut url = format!("{}{}", self.config.api_url, path_and_query);
        if let Some(ref key) = self.config.api_key {
            if !key.is_empty() {
                let sep = if path_and_query.contains('?') { '&' } else { '?' };
                url.push(sep);
                url.push_str("x_cg_demo_api_key=");
                url.push_str(key);
            }
        }
        url
    }
}
