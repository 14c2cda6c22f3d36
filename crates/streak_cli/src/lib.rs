//! Streak Dashboard CLI library
//!
//! Each subcommand is a function that returns the text to print, so the
//! binary only parses arguments and writes to stdout.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use streak_core::analysis::{longest_streak_distribution, CappedQualification};
use streak_core::dashboard::render::render_chart;
use streak_core::dashboard::{momentum_chart, Chart};
use streak_core::fixtures::TEAM_PATHS;
use streak_core::{Dashboard, PointSystem, SimulationConfig, StreakHistogram};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Flag values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub win_probability: Option<f64>,
    pub no_result_probability: Option<f64>,
    pub simulations: Option<usize>,
    pub match_count: Option<u32>,
    pub seed: Option<u64>,
    pub parallel: bool,
}

/// Load the config file (if any), then apply flag overrides and validate.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<SimulationConfig> {
    let mut cfg = match path {
        Some(p) => SimulationConfig::load(p)
            .with_context(|| format!("Failed to load config: {}", p.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(p) = overrides.win_probability {
        cfg.win_probability = p;
    }
    if let Some(p) = overrides.no_result_probability {
        cfg.no_result_probability = p;
    }
    if let Some(n) = overrides.simulations {
        cfg.simulations = n;
    }
    if let Some(n) = overrides.match_count {
        cfg.match_count = n;
    }
    if overrides.seed.is_some() {
        cfg.seed = overrides.seed;
    }
    cfg.parallel |= overrides.parallel;

    cfg.validate().context("Invalid simulation parameters")?;
    Ok(cfg)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn dashboard(cfg: &SimulationConfig, format: OutputFormat) -> Result<String> {
    let dashboard = Dashboard::build(cfg)?;
    info!(sections = dashboard.sections.len(), "Dashboard built");
    match format {
        OutputFormat::Markdown => Ok(dashboard.to_markdown()),
        OutputFormat::Json => Ok(dashboard.to_json()?),
    }
}

#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    config: &'a SimulationConfig,
    histogram: Vec<(u32, usize)>,
    mode: Option<u32>,
    mean: Option<f64>,
    share_three_plus: f64,
}

pub fn simulate(cfg: &SimulationConfig, format: OutputFormat) -> Result<String> {
    let streaks = cfg.run()?;
    let histogram = StreakHistogram::from_streaks(&streaks);
    let all_bins = histogram.bins(0..=cfg.match_count);

    match format {
        OutputFormat::Json => to_json(&SimulationReport {
            config: cfg,
            histogram: all_bins,
            mode: histogram.mode(),
            mean: histogram.mean(),
            share_three_plus: histogram.share_at_least(3),
        }),
        OutputFormat::Markdown => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "Simulated {} seasons of {} matches at {:.0}% win probability\n",
                histogram.total(),
                cfg.match_count,
                cfg.win_probability * 100.0
            );
            out.push_str("| Longest Win Streak in a Season | Frequency |\n|---:|---:|\n");
            for (len, count) in all_bins {
                let _ = writeln!(out, "| {} | {} |", len, count);
            }
            let _ = writeln!(
                out,
                "\nMode: {}  Mean: {:.2}  3+ streak: {:.1}%",
                histogram.mode().map(|m| m.to_string()).unwrap_or_else(|| "-".into()),
                histogram.mean().unwrap_or(0.0),
                histogram.share_at_least(3) * 100.0
            );
            Ok(out)
        }
    }
}

#[derive(Debug, Serialize)]
struct MathModelReport {
    qualification: CappedQualification,
    longest_streak: Vec<f64>,
}

pub fn math_model(
    win_probability: f64,
    match_count: u32,
    max_run: u32,
    target_wins: u32,
    format: OutputFormat,
) -> Result<String> {
    let qualification = CappedQualification::compute(win_probability, match_count, max_run, target_wins)?;
    let longest_streak = longest_streak_distribution(win_probability, match_count)?;

    match format {
        OutputFormat::Json => to_json(&MathModelReport { qualification, longest_streak }),
        OutputFormat::Markdown => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "Exact model: {} matches, {:.0}% win probability, max {} wins in a row\n",
                match_count,
                win_probability * 100.0,
                max_run
            );
            let _ = writeln!(out, "- Exactly {} wins: {:.2}%", target_wins, qualification.exact_pct);
            let _ = writeln!(out, "- {}+ wins: {:.2}%\n", target_wins + 1, qualification.above_pct);
            out.push_str("| Longest Win Streak | Probability |\n|---:|---:|\n");
            for (len, p) in longest_streak.iter().enumerate() {
                let _ = writeln!(out, "| {} | {:.4} |", len, p);
            }
            Ok(out)
        }
    }
}

pub fn momentum(points: &PointSystem, format: OutputFormat) -> Result<String> {
    let chart = Chart::Line(momentum_chart(&TEAM_PATHS, points));
    match format {
        OutputFormat::Json => to_json(&chart),
        OutputFormat::Markdown => Ok(render_chart(&chart)),
    }
}
