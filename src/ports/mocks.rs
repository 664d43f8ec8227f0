use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::transport::{Transport, TransportError, TransportResponse};

/// One scripted outcome for a URL
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Deliver an HTTP response with this status and body
    Reply { status: u16, body: String },
    /// Simulate a transport-level failure (connection refused)
    Refused,
}

/// Mock transport that records calls and plays back scripted responses.
///
/// Each URL carries a queue of outcomes. Calls consume the queue front;
/// the final outcome is sticky and keeps being returned, so a single
/// scripted reply serves any number of calls. URLs with no script behave
/// like an unreachable host.
#[derive(Debug, Default)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<String>>>,
    routes: Arc<Mutex<HashMap<String, VecDeque<MockOutcome>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enqueue a response for a URL
    pub fn with_reply(self, url: &str, status: u16, body: &str) -> Self {
        self.push(url, MockOutcome::Reply {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Builder method to enqueue a JSON response for a URL
    pub fn with_json(self, url: &str, status: u16, body: serde_json::Value) -> Self {
        self.push(url, MockOutcome::Reply {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Builder method to enqueue a connection failure for a URL
    pub fn with_refused(self, url: &str) -> Self {
        self.push(url, MockOutcome::Refused);
        self
    }

    fn push(&self, url: &str, outcome: MockOutcome) {
        self.routes
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(outcome);
    }

    /// Get all recorded request URLs, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());

        let outcome = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(url) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match outcome {
            Some(MockOutcome::Reply { status, body }) => Ok(TransportResponse::new(status, body)),
            Some(MockOutcome::Refused) => Err(TransportError::Connect(format!(
                "connection refused: {}",
                url
            ))),
            None => Err(TransportError::Connect(format!(
                "no route scripted for {}",
                url
            ))),
        }
    }
}
