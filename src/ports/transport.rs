//! Transport Port
//!
//! The single HTTP seam the rest of the system talks through. A transport
//! performs one GET and reports either a status/body pair (any status, the
//! caller decides what it means) or a transport-level failure (no response
//! was obtained at all).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failures where no HTTP response was obtained
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),
}

/// A completed HTTP exchange: status code plus raw body
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx check, mirroring `Response::ok`
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Awaitable HTTP GET
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}
