//! League point system and the playoff qualification threshold.

use serde::{Deserialize, Serialize};

use crate::season::MatchOutcome;

/// League matches per team.
pub const LEAGUE_MATCHES: u32 = 14;

/// Points total at or above which a team is presumed to reach the playoffs.
pub const QUALIFICATION_POINTS: u32 = 14;

/// Points awarded per match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSystem {
    pub win: u32,
    pub loss: u32,
    pub no_result: u32,
    pub qualification_threshold: u32,
}

impl Default for PointSystem {
    fn default() -> Self {
        Self { win: 2, loss: 0, no_result: 1, qualification_threshold: QUALIFICATION_POINTS }
    }
}

impl PointSystem {
    pub fn points_for(&self, outcome: MatchOutcome) -> u32 {
        match outcome {
            MatchOutcome::Win => self.win,
            MatchOutcome::Loss => self.loss,
            MatchOutcome::NoResult => self.no_result,
        }
    }

    pub fn total_points(&self, outcomes: &[MatchOutcome]) -> u32 {
        outcomes.iter().map(|&o| self.points_for(o)).sum()
    }

    /// Running tally, one entry per match plus the leading zero.
    pub fn cumulative_points(&self, outcomes: &[MatchOutcome]) -> Vec<u32> {
        let mut path = Vec::with_capacity(outcomes.len() + 1);
        let mut tally = 0;
        path.push(tally);
        for &outcome in outcomes {
            tally += self.points_for(outcome);
            path.push(tally);
        }
        path
    }

    pub fn qualifies(&self, points: u32) -> bool {
        points >= self.qualification_threshold
    }

    /// Wins needed to reach the threshold with no no-results.
    pub fn wins_needed(&self) -> u32 {
        if self.win == 0 {
            return u32::MAX;
        }
        self.qualification_threshold.div_ceil(self.win)
    }

    /// Match index (1-based) at which the running tally first reaches the
    /// threshold, if it ever does.
    pub fn qualifying_match(&self, outcomes: &[MatchOutcome]) -> Option<usize> {
        self.cumulative_points(outcomes)
            .iter()
            .position(|&p| self.qualifies(p))
            .filter(|&idx| idx > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MatchOutcome::*;

    #[test]
    fn test_default_points() {
        let ps = PointSystem::default();
        assert_eq!(ps.points_for(Win), 2);
        assert_eq!(ps.points_for(Loss), 0);
        assert_eq!(ps.points_for(NoResult), 1);
        assert_eq!(ps.wins_needed(), 7);
    }

    #[test]
    fn test_cumulative_points_counts_no_result() {
        let ps = PointSystem::default();
        let path = ps.cumulative_points(&[Win, NoResult, Loss, Win]);
        assert_eq!(path, vec![0, 2, 3, 3, 5]);
    }

    #[test]
    fn test_qualification_threshold() {
        let ps = PointSystem::default();
        assert!(!ps.qualifies(13));
        assert!(ps.qualifies(14));
        assert_eq!(ps.total_points(&[Win; 7]), 14);
    }

    #[test]
    fn test_qualifying_match() {
        let ps = PointSystem::default();
        let mut outcomes = vec![Win; 7];
        outcomes.insert(0, Loss);
        assert_eq!(ps.qualifying_match(&outcomes), Some(8));
        assert_eq!(ps.qualifying_match(&[Win, Loss]), None);
    }
}
