//! # Simulation Configuration
//!
//! Tunables for a dashboard run. Every field has a default, so a YAML file
//! only needs the values it changes:
//!
//! ```yaml
//! win_probability: 0.6
//! simulations: 50000
//! seed: 42
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::qualification::{PointSystem, LEAGUE_MATCHES};
use crate::simulation::{OutcomeModel, StreakSimulator, DEFAULT_SIMULATIONS};

/// Per-match win probability presets used by the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStrength {
    Weak,
    Average,
    Strong,
}

impl TeamStrength {
    pub const ALL: [TeamStrength; 3] = [TeamStrength::Weak, TeamStrength::Average, TeamStrength::Strong];

    pub fn win_probability(&self) -> f64 {
        match self {
            TeamStrength::Weak => 0.4,
            TeamStrength::Average => 0.5,
            TeamStrength::Strong => 0.6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamStrength::Weak => "Weak (40%)",
            TeamStrength::Average => "Average (50%)",
            TeamStrength::Strong => "Strong (60%)",
        }
    }
}

impl fmt::Display for TeamStrength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub win_probability: f64,
    /// 0.0 keeps the simulation to win / not-win
    pub no_result_probability: f64,
    pub simulations: usize,
    pub match_count: u32,
    /// `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub parallel: bool,
    pub points: PointSystem,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            win_probability: 0.5,
            no_result_probability: 0.0,
            simulations: DEFAULT_SIMULATIONS,
            match_count: LEAGUE_MATCHES,
            seed: None,
            parallel: false,
            points: PointSystem::default(),
        }
    }
}

impl SimulationConfig {
    pub fn for_strength(strength: TeamStrength) -> Self {
        Self { win_probability: strength.win_probability(), ..Self::default() }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: SimulationConfig = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn outcome_model(&self) -> OutcomeModel {
        OutcomeModel::with_no_result(self.win_probability, self.no_result_probability)
    }

    pub fn simulator(&self) -> StreakSimulator {
        StreakSimulator::new(self.outcome_model(), self.simulations, self.match_count)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulator().validate()
    }

    /// Run the configured simulation, seeded or from entropy.
    pub fn run(&self) -> Result<Vec<u32>> {
        let sim = self.simulator();
        match (self.seed, self.parallel) {
            (Some(seed), true) => sim.run_parallel(seed),
            (Some(seed), false) => sim.run_seeded(seed),
            (None, true) => sim.run_parallel(rand::random()),
            (None, false) => sim.run_with_entropy(),
        }
    }
}
