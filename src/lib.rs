//! hbarscope - Hedera HTS Top-Holder Explorer Library
//!
//! Ranks the top holders of a Hedera token by walking the mirror-node
//! balance collection with automatic node failover, and resolves CoinGecko
//! coin ids to HTS token ids.
//!
//! # Modules
//!
//! - `domain`: Core logic (token ids, holder records, ranking, formatting)
//! - `ports`: Trait abstractions (Transport) and test mocks
//! - `adapters`: External implementations (mirror node, CoinGecko, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Aggregation and resolution use cases

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
