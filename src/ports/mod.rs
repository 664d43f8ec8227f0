//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - HTTP transport (the one GET seam every provider call goes through)
//!
//! `mocks` provides a scripted transport for deterministic tests.

pub mod mocks;
pub mod transport;

pub use mocks::{MockOutcome, MockTransport};
pub use transport::{Transport, TransportError, TransportResponse};
