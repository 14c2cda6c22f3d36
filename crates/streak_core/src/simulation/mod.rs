//! # Simulation Module
//!
//! - `simulator` - sequential Monte Carlo season simulation with an injected RNG
//! - `parallel` - deterministic rayon variant, one ChaCha stream per trial

pub mod parallel;
pub mod simulator;

pub use simulator::{
    season_max_streak, simulate, OutcomeModel, StreakSimulator, DEFAULT_SIMULATIONS,
};
