//! Display Formatting
//!
//! Presentation-only conversions of big-integer amounts into human-readable
//! strings. This is the single place where floating point is allowed to
//! touch balances, and only after the arbitrary-precision arithmetic is
//! already done.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Format a raw token amount using the token's decimal precision,
/// with thousands grouping and trailing fractional zeros trimmed.
pub fn format_token_amount(raw: &BigUint, decimals: u32) -> String {
    if decimals == 0 {
        return group_thousands(&raw.to_string());
    }

    let divisor = BigUint::from(10u32).pow(decimals);
    let whole = raw / &divisor;
    let frac = raw % &divisor;

    let frac_str = format!("{:0width$}", frac, width = decimals as usize);
    let frac_trimmed = frac_str.trim_end_matches('0');

    if frac_trimmed.is_empty() {
        group_thousands(&whole.to_string())
    } else {
        format!("{}.{}", group_thousands(&whole.to_string()), frac_trimmed)
    }
}

/// Percentage of total supply held by a balance.
///
/// The ratio numerator is computed in big-integer space (scaled by 10^6)
/// so precision is only surrendered at the final f64 conversion.
/// Returns `None` when the supply is zero.
pub fn percent_of_supply(balance: &BigUint, supply: &BigUint) -> Option<f64> {
    if supply.is_zero() {
        return None;
    }
    let scaled = balance * 1_000_000u32 / supply;
    Some(scaled.to_f64().unwrap_or(f64::INFINITY) / 10_000.0)
}

/// Compact USD notation: $1.23B / $4.56M / $7.8K, two decimals above $1,
/// four significant digits below.
pub fn format_usd(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "—".to_string();
    };
    if v >= 1e9 {
        format!("${:.2}B", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.2}M", v / 1e6)
    } else if v >= 1e3 {
        format!("${:.1}K", v / 1e3)
    } else if v >= 1.0 {
        format!("${:.2}", v)
    } else if v > 0.0 {
        let digits = (3 - v.log10().floor() as i32).max(0) as usize;
        format!("${:.*}", digits, v)
    } else {
        "$0.00".to_string()
    }
}

/// Signed percent-change notation: "▲ +2.34%" / "▼ 1.20%"
pub fn format_pct(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "—".to_string();
    };
    if v >= 0.0 {
        format!("▲ +{:.2}%", v)
    } else {
        format!("▼ {:.2}%", v.abs())
    }
}

/// Insert thousands separators into a plain run of digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            out.push(',');
        }
        out.push(c);
    }
    out
}
