//! CoinGecko API Types

use std::collections::HashMap;

use serde::Deserialize;

/// Platform key CoinGecko uses for Hedera-native token addresses
pub const HEDERA_PLATFORM: &str = "hedera-hashgraph";

/// One entry of `GET /coins/markets`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub total_volume: Option<f64>,
    pub sparkline_in_7d: Option<Sparkline>,
}

impl CoinMarket {
    /// 7-day hourly price samples, empty when CoinGecko omits them
    pub fn sparkline_prices(&self) -> &[f64] {
        self.sparkline_in_7d
            .as_ref()
            .map(|s| s.price.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

/// `GET /coins/{id}` detail record, reduced to the fields the resolver needs
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    /// Chain → contract/entity address; values are frequently absent,
    /// empty or stale
    #[serde(default)]
    pub platforms: HashMap<String, Option<String>>,
}

impl CoinDetail {
    /// Non-empty address for a platform key, if present
    pub fn platform_address(&self, platform: &str) -> Option<&str> {
        self.platforms
            .get(platform)
            .and_then(|v| v.as_deref())
            .filter(|addr| !addr.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_market_decode() {
        let coin: CoinMarket = serde_json::from_str(
            r#"{
                "id": "hedera-hashgraph",
                "symbol": "hbar",
                "name": "Hedera",
                "current_price": 0.0721,
                "price_change_percentage_24h": -2.1,
                "total_volume": 55000000.0,
                "sparkline_in_7d": {"price": [0.07, 0.071, 0.072]}
            }"#,
        )
        .unwrap();

        assert_eq!(coin.id, "hedera-hashgraph");
        assert_eq!(coin.sparkline_prices().len(), 3);
    }

    #[test]
    fn test_coin_market_missing_optionals() {
        let coin: CoinMarket =
            serde_json::from_str(r#"{"id": "x", "symbol": "x", "name": "X"}"#).unwrap();
        assert!(coin.current_price.is_none());
        assert!(coin.sparkline_prices().is_empty());
    }

    #[test]
    fn test_platform_address() {
        let detail: CoinDetail = serde_json::from_str(
            r#"{
                "id": "saucerswap",
                "platforms": {
                    "hedera-hashgraph": "0.0.731861",
                    "ethereum": "",
                    "polygon-pos": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(detail.platform_address(HEDERA_PLATFORM), Some("0.0.731861"));
        // empty and null values are treated as absent
        assert_eq!(detail.platform_address("ethereum"), None);
        assert_eq!(detail.platform_address("polygon-pos"), None);
        assert_eq!(detail.platform_address("solana"), None);
    }

    #[test]
    fn test_detail_without_platforms_block() {
        let detail: CoinDetail = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        assert_eq!(detail.platform_address(HEDERA_PLATFORM), None);
    }
}
