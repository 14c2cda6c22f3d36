//! # Analysis Module
//!
//! - `histogram` - binning of simulated longest streaks
//! - `math_model` - exact streak-capped probabilities

pub mod histogram;
pub mod math_model;

pub use histogram::{StreakHistogram, CHART_BINS};
pub use math_model::{
    capped_win_distribution, longest_streak_distribution, CappedQualification, MAX_EXACT_MATCHES,
};
