//! HTTP Transport
//!
//! reqwest-backed implementation of the transport port, shared by the
//! mirror-node and CoinGecko clients. Timeouts are the transport's
//! responsibility; callers impose no per-request deadline of their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::transport::{Transport, TransportError, TransportResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Production transport over a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Create a transport with the default 30 second timeout
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout(e.to_string())
                } else {
                    TransportError::Connect(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
