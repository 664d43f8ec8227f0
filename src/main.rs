//! hbarscope - Hedera HTS Top-Holder Explorer
//!
//! Ranks the top holders of a Hedera token via mirror-node aggregation
//! with automatic node failover.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hbarscope::adapters::cli::{display, CliApp, Command, HoldersCmd, ResolveCmd, TopCmd};
use hbarscope::adapters::coingecko::{CoinGeckoClient, CoinGeckoConfig};
use hbarscope::adapters::http::HttpTransport;
use hbarscope::adapters::mirror::MirrorClient;
use hbarscope::application::{AggregatorConfig, HolderAggregator, TokenResolver};
use hbarscope::config::{load_config, Config};
use hbarscope::domain::TokenId;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if it exists (COINGECKO_API_KEY goes here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    let config = resolve_config(config_path(&app.command))?;
    init_logging(app.verbose, app.debug, &config.logging.level)?;

    match app.command {
        Command::Holders(cmd) => holders_command(cmd, config).await,
        Command::Top(cmd) => top_command(cmd, config).await,
        Command::Resolve(cmd) => resolve_command(cmd, config).await,
    }
}

fn config_path(command: &Command) -> Option<&PathBuf> {
    match command {
        Command::Holders(cmd) => cmd.config.as_ref(),
        Command::Top(cmd) => cmd.config.as_ref(),
        Command::Resolve(cmd) => cmd.config.as_ref(),
    }
}

/// Load the config file when one was given, else run on defaults
fn resolve_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            // handles ~ for home directory
            let expanded = shellexpand::tilde(&path.to_string_lossy()).to_string();
            load_config(&expanded).context("Failed to load configuration")
        }
        None => Ok(Config::default()),
    }
}

fn init_logging(verbose: bool, debug: bool, config_level: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config_level.to_string()))
    };

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

fn build_transport() -> Result<Arc<HttpTransport>> {
    Ok(Arc::new(
        HttpTransport::new().context("Failed to create HTTP client")?,
    ))
}

fn build_mirror(transport: Arc<HttpTransport>, config: &Config) -> Arc<MirrorClient> {
    Arc::new(MirrorClient::new(transport, config.mirror.nodes()))
}

fn build_coingecko(transport: Arc<HttpTransport>, config: &Config) -> Arc<CoinGeckoClient> {
    Arc::new(CoinGeckoClient::new(
        transport,
        CoinGeckoConfig {
            api_url: config.coingecko.api_url.clone(),
            api_key: config.coingecko.get_api_key(),
        },
    ))
}

fn aggregator_config(config: &Config, top_override: Option<usize>) -> AggregatorConfig {
    AggregatorConfig {
        page_size: config.query.page_size,
        page_cap: config.query.page_cap,
        top_n: top_override.unwrap_or(config.query.top_n),
    }
}

async fn holders_command(cmd: HoldersCmd, config: Config) -> Result<()> {
    let token_id: TokenId = cmd.token_id.parse()?;

    let transport = build_transport()?;
    let mirror = build_mirror(transport, &config);
    let aggregator = HolderAggregator::new(mirror, aggregator_config(&config, cmd.top));

    tracing::info!("fetching token info for {} on {}", token_id, cmd.network);
    let report = aggregator.aggregate(cmd.network, &token_id).await?;
    display::print_report(&report, cmd.network, &token_id);

    Ok(())
}

async fn top_command(_cmd: TopCmd, config: Config) -> Result<()> {
    let transport = build_transport()?;
    let coingecko = build_coingecko(transport, &config);

    let coins = coingecko.hedera_markets().await?;
    display::print_market_strip(&coins);

    Ok(())
}

async fn resolve_command(cmd: ResolveCmd, config: Config) -> Result<()> {
    let transport = build_transport()?;
    let mirror = build_mirror(transport.clone(), &config);
    let coingecko = build_coingecko(transport, &config);
    let resolver = TokenResolver::new(coingecko, mirror.clone());

    let resolved = resolver
        .resolve(cmd.network, &cmd.coin_id, cmd.symbol.as_deref())
        .await?;
    println!("{} -> {}", cmd.coin_id, resolved);

    if cmd.holders {
        // Feed the resolved id back into the same query path `holders` uses
        let aggregator = HolderAggregator::new(mirror, aggregator_config(&config, None));
        let report = aggregator.aggregate(cmd.network, &resolved).await?;
        display::print_report(&report, cmd.network, &resolved);
    }

    Ok(())
}
