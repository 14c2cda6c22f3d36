//! Chart payloads handed to the presentation layer.
//!
//! These carry data and styling only; drawing them is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::analysis::{CappedQualification, StreakHistogram};
use crate::config::{SimulationConfig, TeamStrength};
use crate::error::Result;
use crate::fixtures::{
    SimulatedQualification, TeamPath, COMPARISON_STREAK_CAP, COMPARISON_TARGET_WINS, SIMULATED_QUALIFICATION,
};
use crate::qualification::{PointSystem, LEAGUE_MATCHES};

/// Math-model win rate. The model ignores team strength.
pub const MATH_MODEL_WIN_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Bar(BarChart),
    GroupedBar(GroupedBarChart),
    Line(LineChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::GroupedBar(c) => &c.title,
            Chart::Line(c) => &c.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub x: Vec<u32>,
    pub y: Vec<u64>,
    pub color: String,
    pub bar_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub x: Vec<u32>,
    pub y: Vec<u32>,
    pub line_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub y: u32,
    pub label: String,
    pub color: String,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Vec<LineSeries>,
    pub reference_lines: Vec<ReferenceLine>,
    pub height: u32,
}

/// `10000` -> `"10,000"`
pub(crate) fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn streak_frequency_chart(histogram: &StreakHistogram, cfg: &SimulationConfig) -> BarChart {
    let bins = histogram.chart_bins();
    BarChart {
        title: format!(
            "Simulation: Max Win Streaks in {} Matches ({:.0}% Win Rate)",
            cfg.match_count,
            cfg.win_probability * 100.0
        ),
        x_title: "Longest Win Streak in a Season".to_string(),
        y_title: format!("Frequency (out of {})", thousands(histogram.total())),
        x: bins.iter().map(|(len, _)| *len).collect(),
        y: bins.iter().map(|(_, count)| *count as u64).collect(),
        color: "indianred".to_string(),
        bar_gap: 0.2,
    }
}

/// One value per strength preset, in `TeamStrength::ALL` order.
fn simulated_series(pick: fn(&SimulatedQualification) -> f64) -> Vec<f64> {
    TeamStrength::ALL
        .iter()
        .map(|s| {
            SIMULATED_QUALIFICATION
                .iter()
                .find(|q| q.strength == *s)
                .map(pick)
                .unwrap_or(0.0)
        })
        .collect()
}

/// Math model against the simulated study, both at a 14-match season with
/// at most `COMPARISON_STREAK_CAP` wins in a row. The simulated figures are
/// fixed data, so the comparison does not follow the configured season.
pub fn qualification_comparison_chart() -> Result<GroupedBarChart> {
    let math = CappedQualification::compute(
        MATH_MODEL_WIN_PROBABILITY,
        LEAGUE_MATCHES,
        COMPARISON_STREAK_CAP,
        COMPARISON_TARGET_WINS,
    )?;
    let strengths = TeamStrength::ALL;
    let flat = |v: f64| vec![v; strengths.len()];

    let exact = COMPARISON_TARGET_WINS;
    let above = COMPARISON_TARGET_WINS + 1;
    Ok(GroupedBarChart {
        title: format!(
            "Playoff Qualification: Math vs Simulated Outcomes (Max {} Wins in a Row)",
            COMPARISON_STREAK_CAP
        ),
        x_title: "Team Strength".to_string(),
        y_title: "Qualification Probability (%)".to_string(),
        categories: strengths.iter().map(|s| s.label().to_string()).collect(),
        series: vec![
            BarSeries {
                name: format!("{} Wins Only (Math Model)", exact),
                color: "#7eb6ff".to_string(),
                values: flat(math.exact_pct),
            },
            BarSeries {
                name: format!("{}+ Wins (Math Model)", above),
                color: "#007acc".to_string(),
                values: flat(math.above_pct),
            },
            BarSeries {
                name: format!("{} Wins Only (Simulated)", exact),
                color: "#ffd78f".to_string(),
                values: simulated_series(|q| q.seven_wins_pct),
            },
            BarSeries {
                name: format!("{}+ Wins (Simulated)", above),
                color: "#ff8c00".to_string(),
                values: simulated_series(|q| q.eight_plus_pct),
            },
        ],
        height: 600,
    })
}

pub fn momentum_chart(paths: &[TeamPath], points: &PointSystem) -> LineChart {
    let series = paths
        .iter()
        .map(|path| {
            let y = points.cumulative_points(&path.outcomes);
            LineSeries {
                name: path.label.to_string(),
                color: path.color.to_string(),
                x: (0..y.len() as u32).collect(),
                y,
                line_width: 3,
            }
        })
        .collect();

    LineChart {
        title: "Cumulative Points per Match: Real Team Paths (IPL 2020–2024)".to_string(),
        x_title: "Match Number".to_string(),
        y_title: "Total Points".to_string(),
        series,
        reference_lines: vec![ReferenceLine {
            y: points.qualification_threshold,
            label: format!("{}-Point Cutoff", points.qualification_threshold),
            color: "gray".to_string(),
            dashed: true,
        }],
        height: 600,
    }
}
