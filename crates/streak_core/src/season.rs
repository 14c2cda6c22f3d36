//! Match outcomes and season sequences.
//!
//! A season is an ordered list of outcomes for one team. Outcomes are
//! written with the short codes used in scorecards: `W`, `L` and `NR`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreakError};
use crate::qualification::PointSystem;

/// Result of a single league match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "NR")]
    NoResult,
}

impl MatchOutcome {
    pub fn code(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "W",
            MatchOutcome::Loss => "L",
            MatchOutcome::NoResult => "NR",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, MatchOutcome::Win)
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MatchOutcome {
    type Err = StreakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "W" => Ok(MatchOutcome::Win),
            "L" => Ok(MatchOutcome::Loss),
            "NR" => Ok(MatchOutcome::NoResult),
            _ => Err(StreakError::UnknownOutcome { code: s.to_string() }),
        }
    }
}

/// Parse a list of outcome codes such as `["L", "W", "NR"]`.
pub fn parse_outcomes<S: AsRef<str>>(codes: &[S]) -> Result<Vec<MatchOutcome>> {
    codes.iter().map(|c| c.as_ref().parse()).collect()
}

/// Longest run of consecutive wins. Losses and no-results both break a run.
pub fn longest_win_streak(outcomes: &[MatchOutcome]) -> u32 {
    let mut current = 0u32;
    let mut best = 0u32;
    for outcome in outcomes {
        if outcome.is_win() {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// A labelled season, e.g. one team's league campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub label: String,
    pub outcomes: Vec<MatchOutcome>,
}

impl Season {
    pub fn new(label: impl Into<String>, outcomes: Vec<MatchOutcome>) -> Self {
        Self { label: label.into(), outcomes }
    }

    pub fn from_codes<S: AsRef<str>>(label: impl Into<String>, codes: &[S]) -> Result<Self> {
        Ok(Self::new(label, parse_outcomes(codes)?))
    }

    pub fn match_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn wins(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_win()).count()
    }

    pub fn longest_win_streak(&self) -> u32 {
        longest_win_streak(&self.outcomes)
    }

    /// Cumulative points after each match, starting from 0 before match 1.
    pub fn points_path(&self, points: &PointSystem) -> Vec<u32> {
        points.cumulative_points(&self.outcomes)
    }

    /// Count of runs of at least `min_len` consecutive wins.
    pub fn streaks_of_at_least(&self, min_len: u32) -> usize {
        let mut count = 0;
        let mut current = 0u32;
        for outcome in &self.outcomes {
            if outcome.is_win() {
                current += 1;
                if current == min_len {
                    count += 1;
                }
            } else {
                current = 0;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MatchOutcome::*;

    #[test]
    fn test_parse_codes() {
        let parsed = parse_outcomes(&["W", "l", " NR "]).unwrap();
        assert_eq!(parsed, vec![Win, Loss, NoResult]);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = parse_outcomes(&["W", "D"]).unwrap_err();
        assert!(matches!(err, StreakError::UnknownOutcome { ref code } if code == "D"));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_valid_streak_example() {
        // L W W W L -> 3-match streak
        assert_eq!(longest_win_streak(&[Loss, Win, Win, Win, Loss]), 3);
    }

    #[test]
    fn test_poor_momentum_example() {
        // W W L W L W L -> only 2-match streaks
        assert_eq!(longest_win_streak(&[Win, Win, Loss, Win, Loss, Win, Loss]), 2);
    }

    #[test]
    fn test_no_result_breaks_streak() {
        assert_eq!(longest_win_streak(&[Win, Win, NoResult, Win, Win]), 2);
    }

    #[test]
    fn test_empty_season() {
        assert_eq!(longest_win_streak(&[]), 0);
        let season = Season::new("empty", Vec::new());
        assert_eq!(season.wins(), 0);
        assert_eq!(season.streaks_of_at_least(1), 0);
    }

    #[test]
    fn test_streaks_of_at_least() {
        let season = Season::from_codes(
            "RCB 2023",
            &["L", "W", "L", "W", "W", "L", "W", "L", "L", "W", "L", "W", "W", "L"],
        )
        .unwrap();
        assert_eq!(season.wins(), 7);
        assert_eq!(season.longest_win_streak(), 2);
        assert_eq!(season.streaks_of_at_least(2), 2);
        assert_eq!(season.streaks_of_at_least(3), 0);
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&vec![Win, NoResult]).unwrap();
        assert_eq!(json, r#"["W","NR"]"#);
        let back: Vec<MatchOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Win, NoResult]);
    }
}
