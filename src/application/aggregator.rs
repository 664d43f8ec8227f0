//! Holder Aggregator
//!
//! Drives the mirror client across the paginated balance collection for
//! one token, accumulates every page, then ranks holders by balance.
//!
//! The mirror node orders the collection by account id and offers no
//! server-side sort by balance, so every page must be collected before
//! ranking. A page cap bounds the walk for tokens with very large holder
//! sets; hitting it with a continuation still pending marks the result
//! truncated.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::mirror::{BalancesPage, MirrorClient, MirrorError, Network, TokenInfo};
use crate::domain::{rank_top, HolderBalance, Ranking, TokenId};

/// Errors that abort an aggregation
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Token {token_id} not found on {network}.")]
    TokenNotFound { token_id: TokenId, network: Network },

    #[error("Mirror node error {status} while fetching {context}.")]
    Provider { status: u16, context: &'static str },

    #[error(transparent)]
    Mirror(#[from] MirrorError),

    #[error("failed to decode mirror response: {0}")]
    Decode(String),
}

/// Aggregation tunables
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Holders per page; 100 is the provider's documented maximum
    pub page_size: usize,
    /// Safety cap on pages walked per query (200 × 100 = 20 000 holders)
    pub page_cap: usize,
    /// Entries kept in the final ranking
    pub top_n: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            page_cap: 200,
            top_n: 50,
        }
    }
}

/// Result of one aggregation: token metadata plus the ranked holder set
#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub token: TokenInfo,
    pub ranking: Ranking,
    /// True when the page cap cut the walk short of the full holder set
    pub truncated: bool,
}

/// Aggregates and ranks token holders via the mirror client
pub struct HolderAggregator {
    mirror: Arc<MirrorClient>,
    config: AggregatorConfig,
}

impl HolderAggregator {
    pub fn new(mirror: Arc<MirrorClient>, config: AggregatorConfig) -> Self {
        Self { mirror, config }
    }

    /// Fetch metadata and the full holder set for a token, ranked.
    ///
    /// Any page failure aborts the whole aggregation; pages already
    /// fetched are discarded rather than surfaced as a partial success.
    pub async fn aggregate(
        &self,
        network: Network,
        token_id: &TokenId,
    ) -> Result<AggregateReport, AggregateError> {
        let token = self.fetch_token_info(network, token_id).await?;

        let mut holders: Vec<HolderBalance> = Vec::new();
        let mut next_path = Some(format!(
            "/api/v1/tokens/{}/balances?limit={}",
            token_id, self.config.page_size
        ));
        let mut pages_fetched = 0usize;
        let mut truncated = false;

        while let Some(path) = next_path.take() {
            pages_fetched += 1;
            tracing::info!(
                "fetching holders page {} ({} collected)",
                pages_fetched,
                holders.len()
            );

            let response = self.mirror.fetch(network, &path).await?;
            if !response.is_ok() {
                return Err(AggregateError::Provider {
                    status: response.status,
                    context: "balances",
                });
            }

            let page: BalancesPage = response
                .json()
                .map_err(|e| AggregateError::Decode(e.to_string()))?;

            holders.extend(
                page.balances
                    .iter()
                    .map(|entry| HolderBalance::from_raw(&entry.account, &entry.balance)),
            );

            // links.next is already a root-relative path; use it directly
            next_path = page.links.next;

            if pages_fetched >= self.config.page_cap && next_path.is_some() {
                truncated = true;
                next_path = None;
            }
        }

        let ranking = rank_top(holders, self.config.top_n);
        tracing::info!(
            "ranked top {} of {} holders for {}",
            ranking.top.len(),
            ranking.total_holders,
            token_id
        );

        Ok(AggregateReport {
            token,
            ranking,
            truncated,
        })
    }

    async fn fetch_token_info(
        &self,
        network: Network,
        token_id: &TokenId,
    ) -> Result<TokenInfo, AggregateError> {
        let response = self
            .mirror
            .fetch(network, &format!("/api/v1/tokens/{}", token_id))
            .await?;

        if response.status == 404 {
            return Err(AggregateError::TokenNotFound {
                token_id: token_id.clone(),
                network,
            });
        }
        if !response.is_ok() {
            return Err(AggregateError::Provider {
                status: response.status,
                context: "token info",
            });
        }

        response
            .json()
            .map_err(|e| AggregateError::Decode(e.to_string()))
    }
}
