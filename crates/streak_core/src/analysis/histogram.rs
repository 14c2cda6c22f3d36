//! # Streak Histogram
//!
//! Bins simulation results by longest-streak length. Every observed length
//! has a bucket, so the bucket counts always add up to the number of
//! simulated seasons. Chart views (e.g. lengths 1..=10) are slices of that.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Streak lengths shown on the frequency chart.
pub const CHART_BINS: RangeInclusive<u32> = 1..=10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakHistogram {
    /// `counts[n]` = seasons whose longest streak was exactly `n`
    counts: Vec<usize>,
    total: usize,
}

impl StreakHistogram {
    pub fn from_streaks(streaks: &[u32]) -> Self {
        let max = streaks.iter().copied().max().unwrap_or(0) as usize;
        let mut counts = vec![0usize; if streaks.is_empty() { 0 } else { max + 1 }];
        for &s in streaks {
            counts[s as usize] += 1;
        }
        Self { counts, total: streaks.len() }
    }

    pub fn count(&self, streak_len: u32) -> usize {
        self.counts.get(streak_len as usize).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Longest streak observed in any season.
    pub fn max_streak(&self) -> Option<u32> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u32)
    }

    /// `(length, count)` pairs for the given range, zero-filled.
    pub fn bins(&self, range: RangeInclusive<u32>) -> Vec<(u32, usize)> {
        range.map(|len| (len, self.count(len))).collect()
    }

    pub fn chart_bins(&self) -> Vec<(u32, usize)> {
        self.bins(CHART_BINS)
    }

    /// Most common streak length; ties go to the shorter length.
    pub fn mode(&self) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        let mut best = 0usize;
        for (len, &c) in self.counts.iter().enumerate() {
            if c > self.counts[best] {
                best = len;
            }
        }
        Some(best as u32)
    }

    /// Fraction of seasons whose longest streak is at least `min_len`.
    pub fn share_at_least(&self, min_len: u32) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let hits: usize = self.counts.iter().skip(min_len as usize).sum();
        hits as f64 / self.total as f64
    }

    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: usize = self.counts.iter().enumerate().map(|(len, &c)| len * c).sum();
        Some(sum as f64 / self.total as f64)
    }
}
