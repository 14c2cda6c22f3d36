//! Narrative text of the dashboard, in display order.

use crate::analysis::StreakHistogram;
use crate::config::{SimulationConfig, TeamStrength};
use crate::dashboard::charts::{thousands, MATH_MODEL_WIN_PROBABILITY};
use crate::fixtures::{COMPARISON_STREAK_CAP, RCB_CASE_MATCHING_SEQUENCES, RCB_CASE_TOTAL_SEQUENCES};

pub const TITLE: &str = "🏏 IPL Playoff Analysis: Streaks, Qualification & Team Momentum";

pub fn point_system(cfg: &SimulationConfig) -> String {
    let ps = &cfg.points;
    format!(
        "## 🧮 IPL Match Point System\n\
         Each IPL team plays {matches} league matches. The point system is as follows:\n\
         - ✅ **Win**: {win} points\n\
         - ❌ **Loss**: {loss} points\n\
         - ⛅ **No Result**: {nr} point\n\n\
         Typically, teams require **{threshold} or more points** (usually {wins}+ wins) to qualify for the playoffs.\n",
        matches = cfg.match_count,
        win = ps.win,
        loss = ps.loss,
        nr = ps.no_result,
        threshold = ps.qualification_threshold,
        wins = ps.wins_needed(),
    )
}

pub const STREAK_LOGIC: &str = "## 🔁 What is a Win Streak? Why Does It Matter?\n\n\
A **win streak** is the number of consecutive matches a team wins without interruption.\n\n\
- ✅ **Example of a valid streak**: `['L', 'W', 'W', 'W', 'L']` → 3-match streak → momentum builder\n\
- ❌ **Example of poor momentum**: `['W', 'W', 'L', 'W', 'L', 'W', 'L']` → only 2-match streaks\n\n\
Teams that reach playoffs and win tournaments almost always have **at least one 3-match win streak** during the group stage.\n";

pub fn simulation_intro(cfg: &SimulationConfig) -> String {
    format!(
        "## 🧪 Simulation: How Often Do 3+ Match Win Streaks Happen?\n\n\
         We simulate **{} seasons** assuming a {:.0}% win probability per match.\n\
         We record the **longest win streak** in each simulated season.\n",
        thousands(cfg.simulations),
        cfg.win_probability * 100.0
    )
}

pub fn simulation_insight(histogram: &StreakHistogram) -> String {
    let share = histogram.share_at_least(3) * 100.0;
    format!(
        "📌 **Insight**: About {:.0}% of simulated teams achieve a 3+ win streak, \
         so roughly {:.0}% never string three wins together by chance alone.\n\
         Strong teams build that momentum far more reliably.\n",
        share,
        100.0 - share
    )
}

pub fn model_comparison() -> String {
    format!(
        "## 🤖 Math Model vs Simulation Model\n\n\
         ### Math Model\n\
         - Every match is a **{math:.0}% chance**\n\
         - Assumes all outcomes equally likely\n\
         - No consideration of team strength\n\n\
         ### Simulation Model\n\
         - Reflects realistic win probabilities:\n  \
         - **Weak team**: {weak:.0}%\n  \
         - **Average**: {average:.0}%\n  \
         - **Strong**: {strong:.0}%\n\
         - Stronger teams are more likely to qualify even under constraints\n\n\
         🧠 This plot shows how **team strength impacts qualification under the {cap}-win-streak constraint**.\n",
        math = MATH_MODEL_WIN_PROBABILITY * 100.0,
        weak = TeamStrength::Weak.win_probability() * 100.0,
        average = TeamStrength::Average.win_probability() * 100.0,
        strong = TeamStrength::Strong.win_probability() * 100.0,
        cap = COMPARISON_STREAK_CAP,
    )
}

pub fn rcb_case_study() -> String {
    let pct = RCB_CASE_MATCHING_SEQUENCES as f64 / RCB_CASE_TOTAL_SEQUENCES as f64 * 100.0;
    format!(
        "## 📘 Real Campaign Spotlight: RCB in IPL 2023\n\n\
         - 🎯 Final Record: 7 Wins, 7 Losses\n\
         - ❌ Missed Playoffs on Net Run Rate\n\
         - 🔁 Never more than two wins in a row\n\n\
         🧪 In {} simulated sequences with max {}-win streaks,\n\
         only **{}** matched RCB's exact 7-win path → **~{:.1}%**\n\n\
         📌 Even teams with 7 wins struggle to qualify without streaks — **NRR and momentum matter**!\n",
        thousands(RCB_CASE_TOTAL_SEQUENCES as usize),
        COMPARISON_STREAK_CAP,
        thousands(RCB_CASE_MATCHING_SEQUENCES as usize),
        pct
    )
}

pub const MOMENTUM: &str = "## 📈 Momentum Paths: Real Campaign Comparisons (2020–2024)\n\n\
This line chart shows match-by-match **cumulative points** of top teams.\n\
Streak-building teams rise sharply.\n\
🔴 **RCB 2023** shows a flat, inconsistent path.\n";

pub const TAKEAWAYS: &str = "## ✅ Final Insights\n\n\
- Math models **underestimate** playoff qualification challenges\n\
- Simulation shows **strong teams overcome streak constraints** better\n\
- Real teams that win the IPL almost always achieve **3+ match win streaks**\n\
- Without streaks, teams need favorable NRR and luck\n\n\
💡 To qualify — build streaks, not just wins.\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_system_text() {
        let text = point_system(&SimulationConfig::default());
        assert!(text.contains("plays 14 league matches"));
        assert!(text.contains("**Win**: 2 points"));
        assert!(text.contains("**14 or more points** (usually 7+ wins)"));
    }

    #[test]
    fn test_rcb_case_study_percentage() {
        let text = rcb_case_study();
        assert!(text.contains("**25,154**"));
        assert!(text.contains("~25.2%"));
    }

    #[test]
    fn test_model_comparison_text() {
        let text = model_comparison();
        assert!(text.contains("**50% chance**"));
        assert!(text.contains("**Weak team**: 40%"));
        assert!(text.contains("**Strong**: 60%"));
        assert!(text.contains("under the 2-win-streak constraint"));
    }

    #[test]
    fn test_simulation_insight_from_histogram() {
        let h = StreakHistogram::from_streaks(&[1, 2, 3, 4]);
        let text = simulation_insight(&h);
        assert!(text.contains("About 50%"));
    }
}
