//! Mirror Node Client with Automatic Failover
//!
//! Cycles through the configured mirror nodes for a network, starting at
//! the sticky last-known-good index. A node that answers, including an
//! authoritative 404, becomes sticky so subsequent calls skip known-bad
//! nodes. Transport failures, 429s and 5xx responses rotate to the next
//! node; exhausting the list is the only fatal outcome.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::ports::transport::{Transport, TransportResponse};

/// Logical Hedera network, selecting one ordered mirror-node list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!(
                "unknown network '{}', expected 'mainnet' or 'testnet'",
                other
            )),
        }
    }
}

/// Errors surfaced by the failover loop
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("All mirror nodes failed for {network}. Please try again later.")]
    AllNodesUnavailable { network: Network },

    #[error("no mirror nodes configured for {network}")]
    NoNodesConfigured { network: Network },
}

/// Outcome of probing one node, decided purely from the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeDecision {
    /// Authoritative negative result (404): the resource genuinely does
    /// not exist; no point asking another node
    AcceptAuthoritative,
    /// A usable answer from this node (2xx, 3xx, non-404 4xx)
    Accept,
    /// Transient node trouble (429, 5xx): rotate to the next node
    TryNext,
}

pub(crate) fn classify_status(status: u16) -> ProbeDecision {
    match status {
        404 => ProbeDecision::AcceptAuthoritative,
        429 => ProbeDecision::TryNext,
        s if s >= 500 => ProbeDecision::TryNext,
        _ => ProbeDecision::Accept,
    }
}

/// Mirror-node client holding the per-network endpoint lists and sticky
/// cursors for one session. Instance state, not globals, so independent
/// sessions and tests cannot cross-contaminate.
pub struct MirrorClient {
    transport: Arc<dyn Transport>,
    nodes: HashMap<Network, Vec<String>>,
    sticky: Mutex<HashMap<Network, usize>>,
}

impl MirrorClient {
    pub fn new(transport: Arc<dyn Transport>, nodes: HashMap<Network, Vec<String>>) -> Self {
        Self {
            transport,
            nodes,
            sticky: Mutex::new(HashMap::new()),
        }
    }

    /// Current sticky offset for a network (0 before any fetch)
    pub fn sticky_index(&self, network: Network) -> usize {
        *self.sticky.lock().unwrap().get(&network).unwrap_or(&0)
    }

    /// Forget all sticky offsets (test isolation)
    pub fn reset(&self) {
        self.sticky.lock().unwrap().clear();
    }

    /// Fetch a provider-relative path with failover.
    ///
    /// Returns the first response from a node that answers, including 404.
    /// The path may carry query parameters or be a server-supplied
    /// continuation path; it is appended to the node base URL verbatim.
    pub async fn fetch(
        &self,
        network: Network,
        path: &str,
    ) -> Result<TransportResponse, MirrorError> {
        let nodes = self
            .nodes
            .get(&network)
            .filter(|nodes| !nodes.is_empty())
            .ok_or(MirrorError::NoNodesConfigured { network })?;

        let start = self.sticky_index(network) % nodes.len();

        for offset in 0..nodes.len() {
            let idx = (start + offset) % nodes.len();
            let url = format!("{}{}", nodes[idx], path);

            let response = match self.transport.get(&url).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!("mirror node {} unreachable: {}", nodes[idx], e);
                    continue;
                }
            };

            match classify_status(response.status) {
                ProbeDecision::TryNext => {
                    tracing::debug!(
                        "mirror node {} returned {} for {}, trying next node",
                        nodes[idx],
                        response.status,
                        network
                    );
                    continue;
                }
                ProbeDecision::Accept | ProbeDecision::AcceptAuthoritative => {
                    self.sticky.lock().unwrap().insert(network, idx);
                    if offset > 0 {
                        tracing::info!(
                            "fell back to mirror node {} ({}) for {}",
                            idx,
                            nodes[idx],
                            network
                        );
                    }
                    return Ok(response);
                }
            }
        }

        Err(MirrorError::AllNodesUnavailable { network })
    }
}
