//! Rayon-backed variant of the streak simulator.
//!
//! Trials are independent, so each one gets its own ChaCha stream derived
//! from `(seed, trial index)`. The output is identical for any pool size.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

use super::simulator::{season_max_streak, StreakSimulator};
use crate::error::Result;

/// Below this many trials the sequential path is used.
const PARALLEL_THRESHOLD: usize = 2_048;

impl StreakSimulator {
    /// Seeded run spread across the rayon pool.
    pub fn run_parallel(&self, seed: u64) -> Result<Vec<u32>> {
        self.validate()?;

        let trial = |index: usize| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(index as u64);
            season_max_streak(&self.model, self.match_count, &mut rng)
        };

        let streak_lengths: Vec<u32> = if self.simulation_count > PARALLEL_THRESHOLD {
            (0..self.simulation_count).into_par_iter().map(trial).collect()
        } else {
            (0..self.simulation_count).map(trial).collect()
        };

        info!(
            simulations = streak_lengths.len(),
            threads = rayon::current_num_threads(),
            "Parallel streak simulation complete"
        );
        Ok(streak_lengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::OutcomeModel;

    #[test]
    fn test_parallel_is_deterministic() {
        let sim = StreakSimulator::new(OutcomeModel::win_only(0.5), 5_000, 14);
        let a = sim.run_parallel(7).unwrap();
        let b = sim.run_parallel(7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5_000);
    }

    #[test]
    fn test_parallel_matches_across_pool_sizes() {
        let sim = StreakSimulator::new(OutcomeModel::win_only(0.55), 4_096, 14);
        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| sim.run_parallel(11).unwrap());
        let many = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap()
            .install(|| sim.run_parallel(11).unwrap());
        assert_eq!(single, many);
    }

    #[test]
    fn test_parallel_small_batch_uses_same_streams() {
        // Below and above the threshold the per-trial seeding is the same,
        // so a prefix of a larger run equals a smaller run.
        let small = StreakSimulator::new(OutcomeModel::win_only(0.5), 100, 14).run_parallel(3).unwrap();
        let large = StreakSimulator::new(OutcomeModel::win_only(0.5), 3_000, 14).run_parallel(3).unwrap();
        assert_eq!(small[..], large[..100]);
    }

    #[test]
    fn test_parallel_validates() {
        let sim = StreakSimulator::new(OutcomeModel::win_only(2.0), 10, 14);
        assert!(sim.run_parallel(0).is_err());
    }

    #[test]
    fn test_parallel_extremes() {
        let all = StreakSimulator::new(OutcomeModel::win_only(1.0), 3_000, 14).run_parallel(5).unwrap();
        assert!(all.iter().all(|&s| s == 14));
        let none = StreakSimulator::new(OutcomeModel::win_only(0.0), 3_000, 14).run_parallel(5).unwrap();
        assert!(none.iter().all(|&s| s == 0));
    }
}
