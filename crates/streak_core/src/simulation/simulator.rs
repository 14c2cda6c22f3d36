//! Monte Carlo streak simulator.
//!
//! Each trial plays one synthetic season and keeps only its longest run of
//! consecutive wins. The random source is always injected: callers pass any
//! `rand::Rng`, and the convenience constructors use `ChaCha8Rng` so a seed
//! reproduces a run exactly.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, StreakError};
use crate::qualification::LEAGUE_MATCHES;
use crate::season::MatchOutcome;

/// Default number of simulated seasons.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Per-match outcome distribution.
///
/// Every match consumes exactly one uniform draw `u` in `[0, 1)`:
/// - `u < win_probability` is a win
/// - `u < win_probability + no_result_probability` is a no-result
/// - anything else is a loss
///
/// Keeping the draw count fixed means that, for the same draw sequence,
/// raising `win_probability` only turns non-wins into wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeModel {
    pub win_probability: f64,
    #[serde(default)]
    pub no_result_probability: f64,
}

impl OutcomeModel {
    /// Two-outcome model: win or not-win.
    pub fn win_only(win_probability: f64) -> Self {
        Self { win_probability, no_result_probability: 0.0 }
    }

    pub fn with_no_result(win_probability: f64, no_result_probability: f64) -> Self {
        Self { win_probability, no_result_probability }
    }

    pub fn validate(&self) -> Result<()> {
        check_probability("win_probability", self.win_probability)?;
        check_probability("no_result_probability", self.no_result_probability)?;
        if self.win_probability + self.no_result_probability > 1.0 + f64::EPSILON {
            return Err(StreakError::invalid(format!(
                "win_probability + no_result_probability must not exceed 1 (got {} + {})",
                self.win_probability, self.no_result_probability
            )));
        }
        Ok(())
    }

    pub fn loss_probability(&self) -> f64 {
        (1.0 - self.win_probability - self.no_result_probability).max(0.0)
    }

    #[inline]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchOutcome {
        let u: f64 = rng.gen();
        if u < self.win_probability {
            MatchOutcome::Win
        } else if u < self.win_probability + self.no_result_probability {
            MatchOutcome::NoResult
        } else {
            MatchOutcome::Loss
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(StreakError::invalid(format!("{} must be within [0, 1], got {}", name, value)));
    }
    Ok(())
}

/// Play one season and return its longest win streak.
#[inline]
pub fn season_max_streak<R: Rng + ?Sized>(model: &OutcomeModel, match_count: u32, rng: &mut R) -> u32 {
    let mut streak = 0u32;
    let mut max_streak = 0u32;
    for _ in 0..match_count {
        if model.draw(&mut *rng).is_win() {
            streak += 1;
            max_streak = max_streak.max(streak);
        } else {
            streak = 0;
        }
    }
    max_streak
}

/// Longest win streak of `simulation_count` independent seasons.
///
/// Fails fast on a probability outside `[0, 1]` or a zero simulation count.
/// `match_count = 0` is allowed and yields an all-zero result.
pub fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    win_probability: f64,
    simulation_count: usize,
    match_count: u32,
) -> Result<Vec<u32>> {
    StreakSimulator::new(OutcomeModel::win_only(win_probability), simulation_count, match_count)
        .run(rng)
}

/// Configured simulator. Validates its parameters on every run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakSimulator {
    pub model: OutcomeModel,
    pub simulation_count: usize,
    pub match_count: u32,
}

impl Default for StreakSimulator {
    fn default() -> Self {
        Self::new(OutcomeModel::win_only(0.5), DEFAULT_SIMULATIONS, LEAGUE_MATCHES)
    }
}

impl StreakSimulator {
    pub fn new(model: OutcomeModel, simulation_count: usize, match_count: u32) -> Self {
        Self { model, simulation_count, match_count }
    }

    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;
        if self.simulation_count == 0 {
            return Err(StreakError::invalid("simulation_count must be positive"));
        }
        Ok(())
    }

    /// Run all trials sequentially against the given random source.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<u32>> {
        self.validate()?;
        debug!(
            win_probability = self.model.win_probability,
            no_result_probability = self.model.no_result_probability,
            simulations = self.simulation_count,
            matches = self.match_count,
            "Running streak simulation"
        );

        let mut streak_lengths = Vec::with_capacity(self.simulation_count);
        for _ in 0..self.simulation_count {
            streak_lengths.push(season_max_streak(&self.model, self.match_count, &mut *rng));
        }

        info!(simulations = streak_lengths.len(), "Streak simulation complete");
        Ok(streak_lengths)
    }

    /// Reproducible run from a seed.
    pub fn run_seeded(&self, seed: u64) -> Result<Vec<u32>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run(&mut rng)
    }

    /// Non-reproducible run seeded from OS entropy.
    pub fn run_with_entropy(&self) -> Result<Vec<u32>> {
        let mut rng = ChaCha8Rng::from_entropy();
        self.run(&mut rng)
    }
}
