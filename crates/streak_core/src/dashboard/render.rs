//! Markdown rendering. Charts become tables so the page stays readable
//! without a plotting front end.

use std::fmt::Write;

use super::charts::{BarChart, Chart, GroupedBarChart, LineChart};
use super::Dashboard;

const SECTION_RULE: &str = "---";

pub fn render_markdown(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", dashboard.title);

    for (i, section) in dashboard.sections.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "{}\n", SECTION_RULE);
        }
        out.push_str(section.body.trim_end());
        out.push_str("\n\n");
        if let Some(chart) = &section.chart {
            out.push_str(&render_chart(chart));
            out.push('\n');
        }
        if let Some(footer) = &section.footer {
            out.push_str(footer.trim_end());
            out.push_str("\n\n");
        }
    }
    out
}

pub fn render_chart(chart: &Chart) -> String {
    match chart {
        Chart::Bar(c) => render_bar(c),
        Chart::GroupedBar(c) => render_grouped_bar(c),
        Chart::Line(c) => render_line(c),
    }
}

fn render_bar(chart: &BarChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "**{}**\n", chart.title);
    let _ = writeln!(out, "| {} | {} |", chart.x_title, chart.y_title);
    out.push_str("|---:|---:|\n");
    for (x, y) in chart.x.iter().zip(chart.y.iter()) {
        let _ = writeln!(out, "| {} | {} |", x, y);
    }
    out
}

fn render_grouped_bar(chart: &GroupedBarChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "**{}**\n", chart.title);
    let _ = write!(out, "| {} |", chart.x_title);
    for series in &chart.series {
        let _ = write!(out, " {} |", series.name);
    }
    out.push('\n');
    out.push_str("|---|");
    out.push_str(&"---:|".repeat(chart.series.len()));
    out.push('\n');
    for (i, category) in chart.categories.iter().enumerate() {
        let _ = write!(out, "| {} |", category);
        for series in &chart.series {
            match series.values.get(i) {
                Some(v) => {
                    let _ = write!(out, " {:.2} |", v);
                }
                None => out.push_str(" - |"),
            }
        }
        out.push('\n');
    }
    let _ = writeln!(out, "\n_{}_", chart.y_title);
    out
}

fn render_line(chart: &LineChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "**{}**\n", chart.title);
    let _ = write!(out, "| {} |", chart.x_title);
    for series in &chart.series {
        let _ = write!(out, " {} |", series.name);
    }
    out.push('\n');
    out.push_str("|---:|");
    out.push_str(&"---:|".repeat(chart.series.len()));
    out.push('\n');

    let rows = chart.series.iter().map(|s| s.x.len()).max().unwrap_or(0);
    for row in 0..rows {
        let x = chart.series.iter().find_map(|s| s.x.get(row)).copied().unwrap_or(row as u32);
        let _ = write!(out, "| {} |", x);
        for series in &chart.series {
            match series.y.get(row) {
                Some(y) => {
                    let _ = write!(out, " {} |", y);
                }
                None => out.push_str(" - |"),
            }
        }
        out.push('\n');
    }
    for line in &chart.reference_lines {
        let _ = writeln!(out, "\n_{}: {} = {}_", line.label, chart.y_title, line.y);
    }
    out
}
