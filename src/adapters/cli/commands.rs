//! CLI Command Definitions
//!
//! clap derive structs for the hbarscope commands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapters::mirror::Network;

/// hbarscope - Top-holder explorer for Hedera HTS tokens
#[derive(Parser, Debug)]
#[command(
    name = "hbarscope",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Top-holder explorer for Hedera HTS tokens",
    long_about = "hbarscope ranks the top holders of a Hedera token by walking the \
                  mirror-node balance collection with automatic node failover, and \
                  resolves CoinGecko coin ids to HTS token ids."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank the top holders of a token
    Holders(HoldersCmd),

    /// List top hedera-ecosystem tokens by 24h volume
    Top(TopCmd),

    /// Resolve a CoinGecko coin id to an HTS token id
    Resolve(ResolveCmd),
}

/// Rank top holders
#[derive(Parser, Debug)]
pub struct HoldersCmd {
    /// Token ID, e.g. 0.0.731861
    #[arg(value_name = "TOKEN_ID")]
    pub token_id: String,

    /// Hedera network to query
    #[arg(short, long, value_name = "NETWORK", default_value = "mainnet")]
    pub network: Network,

    /// Override the number of ranked entries shown
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// List top ecosystem tokens
#[derive(Parser, Debug)]
pub struct TopCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Resolve a coin id
#[derive(Parser, Debug)]
pub struct ResolveCmd {
    /// CoinGecko coin id, e.g. saucerswap
    #[arg(value_name = "COIN_ID")]
    pub coin_id: String,

    /// Symbol hint for the mirror-node search fallback
    #[arg(short, long, value_name = "SYMBOL")]
    pub symbol: Option<String>,

    /// Run a holders query on the resolved token id
    #[arg(long)]
    pub holders: bool,

    /// Hedera network to query
    #[arg(short, long, value_name = "NETWORK", default_value = "mainnet")]
    pub network: Network,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
