//! # Exact Streak Model
//!
//! Closed-form counterpart to the Monte Carlo simulator. A dynamic programme
//! over `(current run, wins so far)` gives exact probabilities for seasons
//! whose win runs never exceed a cap, and from those the exact distribution
//! of the longest win streak.
//!
//! The "Math Model" series of the comparison chart is this model at a flat
//! 50% win rate with a cap of two wins in a row: 6.20% of seasons end on
//! exactly 7 wins and 2.49% on 8 or more.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreakError};

/// Longest season the exact model accepts. The longest-streak distribution
/// runs one DP per cap, so its cost grows with the fourth power of this.
pub const MAX_EXACT_MATCHES: u32 = 100;

fn check_match_count(match_count: u32) -> Result<()> {
    if match_count > MAX_EXACT_MATCHES {
        return Err(StreakError::invalid(format!(
            "match_count must be at most {} for the exact model, got {}",
            MAX_EXACT_MATCHES, match_count
        )));
    }
    Ok(())
}

/// Probability of finishing with exactly `k` wins (index `k`) while never
/// winning more than `max_run` matches in a row.
///
/// The entries sum to the probability that the cap is respected, not to 1.
pub fn capped_win_distribution(win_probability: f64, match_count: u32, max_run: u32) -> Result<Vec<f64>> {
    if !win_probability.is_finite() || !(0.0..=1.0).contains(&win_probability) {
        return Err(StreakError::invalid(format!(
            "win_probability must be within [0, 1], got {}",
            win_probability
        )));
    }
    check_match_count(match_count)?;
    let n = match_count as usize;
    let cap = (max_run as usize).min(n);
    let q = 1.0 - win_probability;

    // dp[run][wins]
    let mut dp = vec![vec![0.0f64; n + 1]; cap + 1];
    dp[0][0] = 1.0;

    for _ in 0..n {
        let mut next = vec![vec![0.0f64; n + 1]; cap + 1];
        for run in 0..=cap {
            for wins in 0..=n {
                let p = dp[run][wins];
                if p == 0.0 {
                    continue;
                }
                next[0][wins] += p * q;
                if run < cap && wins < n {
                    next[run + 1][wins + 1] += p * win_probability;
                }
            }
        }
        dp = next;
    }

    let mut by_wins = vec![0.0f64; n + 1];
    for row in &dp {
        for (wins, p) in row.iter().enumerate() {
            by_wins[wins] += p;
        }
    }
    Ok(by_wins)
}

/// Exact distribution of the longest win streak (index = streak length).
pub fn longest_streak_distribution(win_probability: f64, match_count: u32) -> Result<Vec<f64>> {
    check_match_count(match_count)?;
    let mut cumulative = Vec::with_capacity(match_count as usize + 1);
    for cap in 0..=match_count {
        let within_cap: f64 = capped_win_distribution(win_probability, match_count, cap)?.iter().sum();
        cumulative.push(within_cap);
    }

    let mut dist = Vec::with_capacity(cumulative.len());
    let mut prev = 0.0;
    for f in cumulative {
        dist.push((f - prev).max(0.0));
        prev = f;
    }
    Ok(dist)
}

/// Qualification odds for a season played under a streak cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CappedQualification {
    pub win_probability: f64,
    pub max_run: u32,
    pub target_wins: u32,
    /// Percent of seasons ending on exactly `target_wins` wins
    pub exact_pct: f64,
    /// Percent of seasons ending on more than `target_wins` wins
    pub above_pct: f64,
}

impl CappedQualification {
    pub fn compute(win_probability: f64, match_count: u32, max_run: u32, target_wins: u32) -> Result<Self> {
        if target_wins > match_count {
            return Err(StreakError::invalid(format!(
                "target_wins ({}) exceeds match_count ({})",
                target_wins, match_count
            )));
        }
        let dist = capped_win_distribution(win_probability, match_count, max_run)?;
        let target = target_wins as usize;
        let exact = dist.get(target).copied().unwrap_or(0.0);
        let above: f64 = dist.iter().skip(target + 1).sum();
        Ok(Self {
            win_probability,
            max_run,
            target_wins,
            exact_pct: exact * 100.0,
            above_pct: above * 100.0,
        })
    }

    pub fn at_least_pct(&self) -> f64 {
        self.exact_pct + self.above_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_math_model_figures() {
        let q = CappedQualification::compute(0.5, 14, 2, 7).unwrap();
        // 1016 of 2^14 sequences
        assert!(close(q.exact_pct, 6.2012, 1e-3), "exact {}", q.exact_pct);
        // 357 + 50 + 1 of 2^14 sequences
        assert!(close(q.above_pct, 2.4902, 1e-3), "above {}", q.above_pct);
    }

    #[test]
    fn test_uncapped_is_binomial() {
        let dist = capped_win_distribution(0.5, 4, 4).unwrap();
        let expected = [1.0, 4.0, 6.0, 4.0, 1.0].map(|c| c / 16.0);
        for (a, b) in dist.iter().zip(expected.iter()) {
            assert!(close(*a, *b, 1e-12));
        }
    }

    #[test]
    fn test_cap_zero_means_no_wins() {
        let dist = capped_win_distribution(0.3, 5, 0).unwrap();
        assert!(close(dist[0], 0.7f64.powi(5), 1e-12));
        assert!(dist.iter().skip(1).all(|&p| p == 0.0));
    }

    #[test]
    fn test_longest_streak_distribution_fair_season() {
        let dist = longest_streak_distribution(0.5, 14).unwrap();
        assert_eq!(dist.len(), 15);
        assert!(close(dist.iter().sum::<f64>(), 1.0, 1e-9));
        assert!(close(dist[3], 0.29925537109375, 1e-9));
        assert!(close(dist[14], 1.0 / 16384.0, 1e-12));
        let at_least_three: f64 = dist.iter().skip(3).sum();
        assert!(close(at_least_three, 0.64794921875, 1e-9));
    }

    #[test]
    fn test_longest_streak_extremes() {
        let never = longest_streak_distribution(0.0, 14).unwrap();
        assert!(close(never[0], 1.0, 1e-12));
        let always = longest_streak_distribution(1.0, 14).unwrap();
        assert!(close(always[14], 1.0, 1e-12));
        let empty = longest_streak_distribution(0.5, 0).unwrap();
        assert_eq!(empty, vec![1.0]);
    }

    #[test]
    fn test_rejects_bad_probability() {
        assert!(capped_win_distribution(1.2, 14, 2).is_err());
        assert!(longest_streak_distribution(f64::INFINITY, 14).is_err());
    }

    #[test]
    fn test_rejects_unreachable_target() {
        let err = CappedQualification::compute(0.5, 14, 2, 15).unwrap_err();
        assert!(matches!(err, StreakError::InvalidArgument(_)));
        assert!(CappedQualification::compute(0.5, 14, 2, u32::MAX).is_err());
        let all_wins = CappedQualification::compute(0.5, 14, 14, 14).unwrap();
        assert!(close(all_wins.exact_pct, 100.0 / 16384.0, 1e-9));
        assert_eq!(all_wins.above_pct, 0.0);
    }

    #[test]
    fn test_rejects_oversized_season() {
        assert!(capped_win_distribution(0.5, MAX_EXACT_MATCHES, 2).is_ok());
        let err = capped_win_distribution(0.5, MAX_EXACT_MATCHES + 1, 2).unwrap_err();
        assert!(matches!(err, StreakError::InvalidArgument(_)));
        assert!(longest_streak_distribution(0.5, 100_000).is_err());
        assert!(CappedQualification::compute(0.5, u32::MAX, 2, 7).is_err());
    }
}
