//! # Dashboard Module
//!
//! Assembles the playoff-streak dashboard: narrative sections and chart
//! payloads in a fixed top-to-bottom order. The result is plain data. It
//! can be rendered to Markdown (`render`) or serialised to JSON for an
//! external charting front end.
//!
//! ## Usage
//! ```rust
//! use streak_core::config::SimulationConfig;
//! use streak_core::dashboard::Dashboard;
//!
//! let cfg = SimulationConfig { simulations: 1_000, seed: Some(7), ..Default::default() };
//! let dashboard = Dashboard::build(&cfg).unwrap();
//! assert_eq!(dashboard.sections.len(), 7);
//! ```

pub mod charts;
pub mod render;
pub mod sections;

pub use charts::{
    momentum_chart, qualification_comparison_chart, streak_frequency_chart, BarChart, BarSeries,
    Chart, GroupedBarChart, LineChart, LineSeries, ReferenceLine,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::StreakHistogram;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::fixtures::TEAM_PATHS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    PointSystem,
    StreakLogic,
    Simulation,
    ModelComparison,
    CaseStudy,
    Momentum,
    Takeaways,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Markdown shown above the chart
    pub body: String,
    pub chart: Option<Chart>,
    /// Markdown shown below the chart
    pub footer: Option<String>,
}

impl Section {
    fn text(id: SectionId, body: impl Into<String>) -> Self {
        Self { id, body: body.into(), chart: None, footer: None }
    }

    fn with_chart(mut self, chart: Chart) -> Self {
        self.chart = Some(chart);
        self
    }

    fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub config: SimulationConfig,
    pub histogram: StreakHistogram,
    pub sections: Vec<Section>,
}

impl Dashboard {
    /// Run the configured simulation and assemble every section.
    pub fn build(cfg: &SimulationConfig) -> Result<Self> {
        cfg.validate()?;
        let streaks = cfg.run()?;
        Self::from_streaks(cfg, &streaks)
    }

    /// Assemble the dashboard around an existing simulation result set.
    pub fn from_streaks(cfg: &SimulationConfig, streaks: &[u32]) -> Result<Self> {
        let histogram = StreakHistogram::from_streaks(streaks);
        debug!(seasons = histogram.total(), mode = ?histogram.mode(), "Building dashboard");

        let ordered = vec![
            Section::text(SectionId::PointSystem, sections::point_system(cfg)),
            Section::text(SectionId::StreakLogic, sections::STREAK_LOGIC),
            Section::text(SectionId::Simulation, sections::simulation_intro(cfg))
                .with_chart(Chart::Bar(streak_frequency_chart(&histogram, cfg)))
                .with_footer(sections::simulation_insight(&histogram)),
            Section::text(SectionId::ModelComparison, sections::model_comparison())
                .with_chart(Chart::GroupedBar(qualification_comparison_chart()?)),
            Section::text(SectionId::CaseStudy, sections::rcb_case_study()),
            Section::text(SectionId::Momentum, sections::MOMENTUM)
                .with_chart(Chart::Line(momentum_chart(&TEAM_PATHS, &cfg.points))),
            Section::text(SectionId::Takeaways, sections::TAKEAWAYS),
        ];

        Ok(Self { title: sections::TITLE.to_string(), config: cfg.clone(), histogram, sections: ordered })
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.sections.iter().filter_map(|s| s.chart.as_ref())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_markdown(&self) -> String {
        render::render_markdown(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> SimulationConfig {
        SimulationConfig { simulations: 2_000, seed: Some(42), ..SimulationConfig::default() }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let dashboard = Dashboard::build(&seeded_config()).unwrap();
        let order: Vec<SectionId> = dashboard.sections.iter().map(|s| s.id).collect();
        assert_eq!(
            order,
            vec![
                SectionId::PointSystem,
                SectionId::StreakLogic,
                SectionId::Simulation,
                SectionId::ModelComparison,
                SectionId::CaseStudy,
                SectionId::Momentum,
                SectionId::Takeaways,
            ]
        );
        let kinds: Vec<&str> = dashboard
            .charts()
            .map(|c| match c {
                Chart::Bar(_) => "bar",
                Chart::GroupedBar(_) => "grouped_bar",
                Chart::Line(_) => "line",
            })
            .collect();
        assert_eq!(kinds, vec!["bar", "grouped_bar", "line"]);
    }

    #[test]
    fn test_seeded_dashboard_is_reproducible() {
        let a = Dashboard::build(&seeded_config()).unwrap();
        let b = Dashboard::build(&seeded_config()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.histogram.total(), 2_000);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = SimulationConfig { simulations: 0, ..SimulationConfig::default() };
        assert!(Dashboard::build(&cfg).is_err());
    }

    #[test]
    fn test_short_seasons_build() {
        for match_count in [0, 5] {
            let cfg = SimulationConfig { match_count, ..seeded_config() };
            let dashboard = Dashboard::build(&cfg).unwrap();
            assert_eq!(dashboard.histogram.total(), 2_000);
            assert!(dashboard.histogram.max_streak().unwrap_or(0) <= match_count);
            let comparison = dashboard.section(SectionId::ModelComparison).unwrap();
            match comparison.chart.as_ref() {
                Some(Chart::GroupedBar(chart)) => assert_eq!(chart.series[0].name, "7 Wins Only (Math Model)"),
                other => panic!("expected grouped bar chart, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_json_round_trip() {
        let dashboard = Dashboard::from_streaks(&SimulationConfig::default(), &[1, 2, 3]).unwrap();
        let json = dashboard.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["sections"][2]["id"], "simulation");
        assert_eq!(parsed["sections"][2]["chart"]["kind"], "bar");
        let back: Dashboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dashboard);
    }

    #[test]
    fn test_section_lookup() {
        let dashboard = Dashboard::from_streaks(&SimulationConfig::default(), &[3, 3]).unwrap();
        let sim = dashboard.section(SectionId::Simulation).unwrap();
        assert!(sim.footer.as_deref().unwrap_or("").contains("About 100%"));
        assert!(dashboard.section(SectionId::CaseStudy).unwrap().chart.is_none());
    }
}
