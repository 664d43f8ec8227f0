//! Token Identifier Resolver
//!
//! Maps a market-data coin id to the HTS token id the mirror node knows,
//! trying strategies in order:
//!
//! 1. memoized result from an earlier resolution,
//! 2. CoinGecko platform metadata (native id directly, or an EVM address
//!    resolved through a mirror token lookup),
//! 3. mirror symbol search, preferring the largest total supply when
//!    several tokens share the symbol.
//!
//! CoinGecko's platform data is frequently absent or stale, so every
//! intermediate failure is a soft miss; only exhausting all strategies
//! fails the resolution.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::adapters::coingecko::{CoinGeckoClient, HEDERA_PLATFORM};
use crate::adapters::mirror::{MirrorClient, Network, TokenInfo, TokensPage, FUNGIBLE_COMMON};
use crate::domain::{is_evm_address, TokenId};

/// Terminal resolution failure
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Could not find a Hedera token ID for {0}.")]
    Unresolvable(String),
}

/// Resolver with a session-scoped success cache
pub struct TokenResolver {
    coingecko: Arc<CoinGeckoClient>,
    mirror: Arc<MirrorClient>,
    cache: Mutex<HashMap<String, TokenId>>,
}

impl TokenResolver {
    pub fn new(coingecko: Arc<CoinGeckoClient>, mirror: Arc<MirrorClient>) -> Self {
        Self {
            coingecko,
            mirror,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Cached resolution for a coin id, if any. Only successful
    /// resolutions are ever cached.
    pub fn cached(&self, coin_id: &str) -> Option<TokenId> {
        self.cache.lock().unwrap().get(coin_id).cloned()
    }

    /// Drop all memoized resolutions (test isolation)
    pub fn reset_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    /// Resolve a coin id to an HTS token id
    pub async fn resolve(
        &self,
        network: Network,
        coin_id: &str,
        symbol_hint: Option<&str>,
    ) -> Result<TokenId, ResolveError> {
        if let Some(hit) = self.cached(coin_id) {
            tracing::debug!("resolution cache hit: {} -> {}", coin_id, hit);
            return Ok(hit);
        }

        let mut candidate: Option<String> = None;

        // Step 1: CoinGecko platform data; any failure is a soft miss
        match self.coingecko.coin_detail(coin_id).await {
            Ok(detail) => {
                if let Some(addr) = detail.platform_address(HEDERA_PLATFORM) {
                    if is_evm_address(addr) {
                        candidate = self.lookup_evm_token(network, addr).await;
                    } else if TokenId::is_canonical(addr) {
                        candidate = Some(addr.to_string());
                    }
                }
            }
            Err(e) => {
                tracing::debug!("coin detail lookup failed for {}: {}", coin_id, e);
            }
        }

        // Step 2: mirror symbol search when platform data was unusable
        if candidate.is_none() {
            if let Some(symbol) = symbol_hint.filter(|s| !s.is_empty()) {
                candidate = self.search_by_symbol(network, symbol).await;
            }
        }

        match candidate.and_then(|c| c.parse::<TokenId>().ok()) {
            Some(resolved) => {
                self.cache
                    .lock()
                    .unwrap()
                    .insert(coin_id.to_string(), resolved.clone());
                tracing::info!("resolved {} -> {}", coin_id, resolved);
                Ok(resolved)
            }
            None => Err(ResolveError::Unresolvable(coin_id.to_string())),
        }
    }

    /// Resolve an EVM hex address to the native id via a mirror lookup
    async fn lookup_evm_token(&self, network: Network, address: &str) -> Option<String> {
        let response = self
            .mirror
            .fetch(network, &format!("/api/v1/tokens/{}", address))
            .await
            .ok()?;
        if !response.is_ok() {
            tracing::debug!(
                "mirror lookup of {} returned {}",
                address,
                response.status
            );
            return None;
        }
        let info: TokenInfo = response.json().ok()?;
        info.token_id
    }

    /// Search fungible, non-deleted tokens by symbol; multiple matches
    /// tie-break on largest total supply as the most likely canonical
    /// token for the symbol.
    async fn search_by_symbol(&self, network: Network, symbol: &str) -> Option<String> {
        let encoded: String =
            url::form_urlencoded::byte_serialize(symbol.to_uppercase().as_bytes()).collect();
        let response = self
            .mirror
            .fetch(network, &format!("/api/v1/tokens?symbol={}&limit=25", encoded))
            .await
            .ok()?;
        if !response.is_ok() {
            return None;
        }

        let page: TokensPage = response.json().ok()?;
        page.tokens
            .into_iter()
            .filter(|t| t.token_type.as_deref() == Some(FUNGIBLE_COMMON) && !t.deleted)
            .max_by_key(|t| t.total_supply())
            .and_then(|t| t.token_id)
    }
}
