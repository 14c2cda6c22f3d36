//! # streak_core - Win-Streak Simulation for Playoff Qualification
//!
//! Monte Carlo and exact models of how often a league team strings wins
//! together, plus the data model behind the playoff-streak dashboard.
//!
//! ## Features
//! - Injectable random source (same seed = same result)
//! - Optional no-result outcome alongside win / loss
//! - Deterministic rayon-parallel simulation
//! - Exact streak-capped probabilities for cross-checking simulations
//! - Dashboard assembly with Markdown and JSON output

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod qualification;
pub mod season;
pub mod simulation;

pub use analysis::{CappedQualification, StreakHistogram};
pub use config::{SimulationConfig, TeamStrength};
pub use dashboard::{Chart, Dashboard, SectionId};
pub use error::{Result, StreakError};
pub use qualification::{PointSystem, LEAGUE_MATCHES, QUALIFICATION_POINTS};
pub use season::{longest_win_streak, MatchOutcome, Season};
pub use simulation::{simulate, OutcomeModel, StreakSimulator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
