//! Holder Ranking
//!
//! The mirror node orders the balance collection by account id, not by
//! balance, so it carries no usable rank. Ranking happens here: sort the
//! full accumulated collection by balance descending using big-integer
//! comparison and slice the top N.
//!
//! Floating point is never used for ordering. HTS balances routinely
//! exceed 2^53, where f64 comparison would collapse distinct values.

use num_bigint::BigUint;

use super::holder::HolderBalance;

/// One row of the final ranking, 1-based rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedHolder {
    pub rank: usize,
    pub account: String,
    pub balance: BigUint,
}

/// Result of ranking an accumulated holder collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// Top entries, at most the requested N
    pub top: Vec<RankedHolder>,
    /// Size of the full collection before slicing
    pub total_holders: usize,
}

/// Sort holders by balance descending and keep the first `top_n`.
///
/// Equal balances tie-break by account id ascending so the ranking is
/// deterministic regardless of accumulation order.
pub fn rank_top(mut holders: Vec<HolderBalance>, top_n: usize) -> Ranking {
    holders.sort_unstable_by(|a, b| {
        b.balance
            .cmp(&a.balance)
            .then_with(|| a.account.cmp(&b.account))
    });

    let total_holders = holders.len();
    let top = holders
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, h)| RankedHolder {
            rank: i + 1,
            account: h.account,
            balance: h.balance,
        })
        .collect();

    Ranking { top, total_holders }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(account: &str, balance: &str) -> HolderBalance {
        HolderBalance::from_raw(account, balance)
    }

    #[test]
    fn test_rank_descending_by_balance() {
        let ranking = rank_top(
            vec![
                holder("0.0.1", "100"),
                holder("0.0.2", "50"),
                holder("0.0.3", "75"),
            ],
            50,
        );

        let accounts: Vec<&str> = ranking.top.iter().map(|h| h.account.as_str()).collect();
        assert_eq!(accounts, vec!["0.0.1", "0.0.3", "0.0.2"]);
        assert_eq!(ranking.total_holders, 3);
        assert_eq!(ranking.top[0].rank, 1);
        assert_eq!(ranking.top[2].rank, 3);
    }

    #[test]
    fn test_rank_orders_correctly_beyond_f64_precision() {
        // Adjacent integers above 2^53: indistinguishable as f64,
        // distinguishable as big integers.
        let ranking = rank_top(
            vec![
                holder("0.0.8", "9007199254740992"),
                holder("0.0.9", "9007199254740993"),
            ],
            50,
        );

        assert_eq!(ranking.top[0].account, "0.0.9");
        assert_eq!(ranking.top[1].account, "0.0.8");
    }

    #[test]
    fn test_rank_tie_break_by_account_ascending() {
        let ranking = rank_top(
            vec![
                holder("0.0.30", "500"),
                holder("0.0.10", "500"),
                holder("0.0.20", "500"),
            ],
            50,
        );

        let accounts: Vec<&str> = ranking.top.iter().map(|h| h.account.as_str()).collect();
        assert_eq!(accounts, vec!["0.0.10", "0.0.20", "0.0.30"]);
    }

    #[test]
    fn test_rank_slices_top_n_but_reports_full_count() {
        let holders: Vec<HolderBalance> = (0..120)
            .map(|i| holder(&format!("0.0.{}", i), &format!("{}", 1000 + i)))
            .collect();

        let ranking = rank_top(holders, 50);

        assert_eq!(ranking.top.len(), 50);
        assert_eq!(ranking.total_holders, 120);
        // Largest balance first
        assert_eq!(ranking.top[0].account, "0.0.119");
    }

    #[test]
    fn test_rank_empty_collection() {
        let ranking = rank_top(Vec::new(), 50);
        assert!(ranking.top.is_empty());
        assert_eq!(ranking.total_holders, 0);
    }
}
