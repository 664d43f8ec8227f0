//! Terminal Presentation
//!
//! Renders the core's outputs: the token metadata card, the ranked holder
//! table with percent-of-supply bars, and the top-tokens market strip with
//! Unicode sparklines. No decision logic lives here.

use crate::adapters::coingecko::CoinMarket;
use crate::adapters::mirror::Network;
use crate::application::AggregateReport;
use crate::domain::format::{format_pct, format_token_amount, format_usd, percent_of_supply};
use crate::domain::TokenId;

const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Columns the sparkline renders; CoinGecko sends ~168 hourly points
const SPARK_WIDTH: usize = 24;
const SHARE_BAR_WIDTH: usize = 12;

fn hashscan_base(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "https://hashscan.io/mainnet",
        Network::Testnet => "https://hashscan.io/testnet",
    }
}

/// Print the token card and ranked holder table for one aggregation
pub fn print_report(report: &AggregateReport, network: Network, token_id: &TokenId) {
    let token = &report.token;
    let decimals = token.decimals();
    let supply = token.total_supply();

    println!();
    println!("  Name:         {}", token.name.as_deref().unwrap_or("—"));
    println!("  Symbol:       {}", token.symbol.as_deref().unwrap_or("—"));
    println!(
        "  Token ID:     {}",
        token.token_id.clone().unwrap_or_else(|| token_id.to_string())
    );
    println!("  Decimals:     {}", decimals);
    println!("  Total Supply: {}", format_token_amount(&supply, decimals));
    println!("  Type:         {}", token.token_type.as_deref().unwrap_or("—"));
    println!("  Explorer:     {}/token/{}", hashscan_base(network), token_id);
    println!();

    if report.ranking.top.is_empty() {
        println!("Token found, but no balance data available.");
        return;
    }

    let account_width = report
        .ranking
        .top
        .iter()
        .map(|h| h.account.len())
        .max()
        .unwrap_or(14)
        .max("Wallet Address".len());

    println!(
        "  {:>4}  {:<width$}  {:>24}  {}",
        "#",
        "Wallet Address",
        "Balance",
        "% of Supply",
        width = account_width
    );
    for holder in &report.ranking.top {
        let pct = percent_of_supply(&holder.balance, &supply);
        println!(
            "  {:>4}  {:<width$}  {:>24}  {:>9}  {}",
            holder.rank,
            holder.account,
            format_token_amount(&holder.balance, decimals),
            pct.map(|p| format!("{:.4}%", p)).unwrap_or_else(|| "—".to_string()),
            share_bar(pct),
            width = account_width
        );
    }

    println!();
    let capped_note = if report.truncated {
        " (sampled first holders only — token has more)"
    } else {
        ""
    };
    println!(
        "Top {} of {} total holders for {} ({}){}",
        report.ranking.top.len(),
        report.ranking.total_holders,
        token.name.as_deref().unwrap_or("token"),
        token.symbol.as_deref().unwrap_or(""),
        capped_note
    );
    println!("Accounts: {}/account/<id>", hashscan_base(network));
}

/// Print the top-tokens-by-volume market strip
pub fn print_market_strip(coins: &[CoinMarket]) {
    println!();
    for (i, coin) in coins.iter().enumerate() {
        println!(
            "  #{:<2} {:<8} {:<24} {}  {:>10}  {:>10}  {} vol",
            i + 1,
            coin.symbol.to_uppercase(),
            coin.name,
            sparkline(coin.sparkline_prices()),
            format_usd(coin.current_price),
            format_pct(coin.price_change_percentage_24h),
            format_usd(coin.total_volume),
        );
    }
    println!();
    println!("Resolve one with: hbarscope resolve <coin-id> --symbol <SYMBOL> --holders");
}

/// Render price samples as a fixed-width Unicode sparkline.
/// Subsamples the hourly series down to the display width first.
fn sparkline(prices: &[f64]) -> String {
    if prices.len() < 2 {
        return " ".repeat(SPARK_WIDTH);
    }

    let step = (prices.len() / SPARK_WIDTH).max(1);
    let sampled: Vec<f64> = prices.iter().step_by(step).copied().collect();

    let min = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    let mut line: String = sampled
        .iter()
        .map(|p| {
            let level = ((p - min) / range * (SPARK_CHARS.len() - 1) as f64).round() as usize;
            SPARK_CHARS[level.min(SPARK_CHARS.len() - 1)]
        })
        .collect();
    // pad to a stable column width
    while line.chars().count() < SPARK_WIDTH {
        line.push(' ');
    }
    line
}

fn share_bar(pct: Option<f64>) -> String {
    let Some(pct) = pct.filter(|p| p.is_finite()) else {
        return String::new();
    };
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * SHARE_BAR_WIDTH as f64).round() as usize;
    let mut bar = String::with_capacity(SHARE_BAR_WIDTH);
    for i in 0..SHARE_BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_shape() {
        let rising: Vec<f64> = (0..168).map(|i| i as f64).collect();
        let line = sparkline(&rising);

        assert_eq!(line.chars().count(), SPARK_WIDTH);
        assert_eq!(line.chars().next(), Some('▁'));
        assert_eq!(line.trim_end().chars().last(), Some('█'));
    }

    #[test]
    fn test_sparkline_flat_series() {
        let flat = [1.0; 30];
        let line = sparkline(&flat);
        // flat series maps every sample to the bottom glyph
        assert!(line.trim_end().chars().all(|c| c == '▁'));
    }

    #[test]
    fn test_sparkline_too_few_points() {
        assert_eq!(sparkline(&[]).trim_end(), "");
        assert_eq!(sparkline(&[1.0]).trim_end(), "");
    }

    #[test]
    fn test_share_bar() {
        assert_eq!(share_bar(Some(100.0)), "████████████");
        assert_eq!(share_bar(Some(50.0)), "██████░░░░░░");
        assert_eq!(share_bar(Some(0.0)), "░░░░░░░░░░░░");
        // out-of-range values are clamped, absent ones render nothing
        assert_eq!(share_bar(Some(250.0)), "████████████");
        assert_eq!(share_bar(None), "");
    }
}
