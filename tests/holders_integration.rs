//! Holder Explorer Integration Tests
//!
//! End-to-end tests over the public API:
//! 1. MirrorClient failover in the middle of a paginated aggregation
//! 2. TokenResolver -> HolderAggregator feedback path
//! 3. Big-integer ranking through the full pipeline
//!
//! All tests are deterministic (no real network calls) and use a scripted
//! transport.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use hbarscope::adapters::coingecko::{CoinGeckoClient, CoinGeckoConfig};
use hbarscope::adapters::mirror::{MirrorClient, Network};
use hbarscope::application::{AggregatorConfig, HolderAggregator, TokenResolver};
use hbarscope::domain::TokenId;
use hbarscope::ports::mocks::MockTransport;

const NODE_A: &str = "https://node-a.test";
const NODE_B: &str = "https://node-b.test";
const GECKO: &str = "https://gecko.test/api/v3";

// ============================================================================
// Test Fixtures
// ============================================================================

fn token_id() -> TokenId {
    "0.0.731861".parse().unwrap()
}

fn mirror_client(transport: Arc<MockTransport>) -> Arc<MirrorClient> {
    let mut nodes = HashMap::new();
    nodes.insert(
        Network::Mainnet,
        vec![NODE_A.to_string(), NODE_B.to_string()],
    );
    Arc::new(MirrorClient::new(transport, nodes))
}

fn coingecko_client(transport: Arc<MockTransport>) -> Arc<CoinGeckoClient> {
    Arc::new(CoinGeckoClient::new(
        transport,
        CoinGeckoConfig {
            api_url: GECKO.to_string(),
            api_key: None,
        },
    ))
}

fn token_info_json() -> serde_json::Value {
    json!({
        "token_id": "0.0.731861",
        "name": "SAUCE",
        "symbol": "SAUCE",
        "decimals": "6",
        "total_supply": "1000000000000000",
        "type": "FUNGIBLE_COMMON"
    })
}

fn balances_json(entries: &[(&str, &str)], next: Option<&str>) -> serde_json::Value {
    json!({
        "balances": entries
            .iter()
            .map(|(account, balance)| json!({"account": account, "balance": balance}))
            .collect::<Vec<_>>(),
        "links": {"next": next}
    })
}

fn detail_url(coin_id: &str) -> String {
    format!(
        "{}/coins/{}?localization=false&tickers=false&market_data=false&community_data=false&developer_data=false",
        GECKO, coin_id
    )
}

// ============================================================================
// Failover during aggregation
// ============================================================================

#[tokio::test]
async fn test_failover_mid_pagination_completes_the_walk() {
    // Node A serves metadata and the first page, then starts failing;
    // the continuation page must come from node B without restarting.
    let transport = Arc::new(
        MockTransport::new()
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861", NODE_A),
                200,
                token_info_json(),
            )
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861/balances?limit=100", NODE_A),
                200,
                balances_json(&[("0.0.1", "100"), ("0.0.2", "50")], Some("/page2")),
            )
            .with_reply(&format!("{}/page2", NODE_A), 503, "")
            .with_json(
                &format!("{}/page2", NODE_B),
                200,
                balances_json(&[("0.0.3", "75")], None),
            ),
    );
    let mirror = mirror_client(transport.clone());
    let aggregator = HolderAggregator::new(mirror.clone(), AggregatorConfig::default());

    let report = aggregator
        .aggregate(Network::Mainnet, &token_id())
        .await
        .unwrap();

    let accounts: Vec<&str> = report
        .ranking
        .top
        .iter()
        .map(|h| h.account.as_str())
        .collect();
    assert_eq!(accounts, vec!["0.0.1", "0.0.3", "0.0.2"]);
    assert_eq!(report.ranking.total_holders, 3);
    assert!(!report.truncated);

    // Node B answered last, so it is the sticky node now
    assert_eq!(mirror.sticky_index(Network::Mainnet), 1);
}

#[tokio::test]
async fn test_dead_primary_probed_only_once_across_pages() {
    // Node A is down for the whole run; after the first fallback every
    // subsequent page goes straight to node B.
    let transport = Arc::new(
        MockTransport::new()
            .with_refused(&format!("{}/api/v1/tokens/0.0.731861", NODE_A))
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861", NODE_B),
                200,
                token_info_json(),
            )
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861/balances?limit=100", NODE_B),
                200,
                balances_json(&[("0.0.1", "10")], Some("/page2")),
            )
            .with_json(
                &format!("{}/page2", NODE_B),
                200,
                balances_json(&[("0.0.2", "20")], None),
            ),
    );
    let mirror = mirror_client(transport.clone());
    let aggregator = HolderAggregator::new(mirror, AggregatorConfig::default());

    aggregator
        .aggregate(Network::Mainnet, &token_id())
        .await
        .unwrap();

    let node_a_hits = transport
        .calls()
        .iter()
        .filter(|url| url.starts_with(NODE_A))
        .count();
    assert_eq!(node_a_hits, 1, "dead primary should only be probed once");
}

// ============================================================================
// Resolution feeding back into aggregation
// ============================================================================

#[tokio::test]
async fn test_resolve_then_aggregate_feedback_path() {
    let transport = Arc::new(
        MockTransport::new()
            .with_json(
                &detail_url("saucerswap"),
                200,
                json!({"id": "saucerswap", "platforms": {"hedera-hashgraph": "0.0.731861"}}),
            )
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861", NODE_A),
                200,
                token_info_json(),
            )
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861/balances?limit=100", NODE_A),
                200,
                balances_json(&[("0.0.7", "900")], None),
            ),
    );
    let mirror = mirror_client(transport.clone());
    let resolver = TokenResolver::new(coingecko_client(transport.clone()), mirror.clone());

    let resolved = resolver
        .resolve(Network::Mainnet, "saucerswap", Some("SAUCE"))
        .await
        .unwrap();
    assert_eq!(resolved, token_id());

    // The resolved id drives the exact same aggregation entry point
    let aggregator = HolderAggregator::new(mirror, AggregatorConfig::default());
    let report = aggregator
        .aggregate(Network::Mainnet, &resolved)
        .await
        .unwrap();

    assert_eq!(report.ranking.top[0].account, "0.0.7");
    assert_eq!(report.token.symbol.as_deref(), Some("SAUCE"));

    // Resolving again afterwards is a pure cache hit
    let calls_before = transport.call_count();
    resolver
        .resolve(Network::Mainnet, "saucerswap", Some("SAUCE"))
        .await
        .unwrap();
    assert_eq!(transport.call_count(), calls_before);
}

// ============================================================================
// Arbitrary-precision ranking through the full pipeline
// ============================================================================

#[tokio::test]
async fn test_ranking_is_exact_beyond_f64_precision() {
    // Two balances that are equal as f64 but differ as integers must
    // come out in the right order.
    let transport = Arc::new(
        MockTransport::new()
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861", NODE_A),
                200,
                token_info_json(),
            )
            .with_json(
                &format!("{}/api/v1/tokens/0.0.731861/balances?limit=100", NODE_A),
                200,
                balances_json(
                    &[
                        ("0.0.100", "9007199254740992"),
                        ("0.0.200", "9007199254740993"),
                    ],
                    None,
                ),
            ),
    );
    let aggregator = HolderAggregator::new(
        mirror_client(transport),
        AggregatorConfig::default(),
    );

    let report = aggregator
        .aggregate(Network::Mainnet, &token_id())
        .await
        .unwrap();

    assert_eq!(report.ranking.top[0].account, "0.0.200");
    assert_eq!(report.ranking.top[1].account, "0.0.100");
}
