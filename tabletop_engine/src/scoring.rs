//! Tabletop Engine: Scoring Primitives
//!
//! Integer score arithmetic, the fixed per-choice ceiling, and the
//! percentage/grade bands used by the debrief.

use thiserror::Error;

use crate::domain::{Grade, Quality};

/// Points credited per choice when computing the debrief ceiling.
pub const MAX_POINTS_PER_CHOICE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("score overflow: {0} + {1} overflows i64")]
pub struct ScoreOverflow(pub i64, pub i64);

/// Score delta per quality label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScale {
    pub good: i64,
    pub neutral: i64,
    pub bad: i64,
}

impl ScoringScale {
    /// Good = 10, neutral = 7 (lands on a C), bad = −5.
    pub const STANDARD: ScoringScale = ScoringScale { good: 10, neutral: 7, bad: -5 };

    /// Symmetric scale of the generic profile.
    pub const LEGACY: ScoringScale = ScoringScale { good: 10, neutral: 0, bad: -10 };

    pub fn delta(&self, quality: Quality) -> i64 {
        match quality {
            Quality::Good => self.good,
            Quality::Neutral => self.neutral,
            Quality::Bad => self.bad,
        }
    }
}

impl Default for ScoringScale {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Checked score accumulation.
pub fn checked_add(score: i64, delta: i64) -> Result<i64, ScoreOverflow> {
    score.checked_add(delta).ok_or(ScoreOverflow(score, delta))
}

/// `choices × 10`, independent of the deltas actually awarded.
pub fn max_score(choices: usize) -> i64 {
    i64::try_from(choices)
        .unwrap_or(i64::MAX)
        .saturating_mul(MAX_POINTS_PER_CHOICE)
}

/// `final / max × 100`. Unclamped, so it goes negative with bad choices.
/// An empty history (max = 0) reports 0.
pub fn percentage(final_score: i64, max_score: i64) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    final_score as f64 / max_score as f64 * 100.0
}

pub fn grade_for(percentage: f64) -> Grade {
    if percentage >= 90.0 {
        Grade::APlus
    } else if percentage >= 80.0 {
        Grade::A
    } else if percentage >= 70.0 {
        Grade::B
    } else if percentage >= 60.0 {
        Grade::C
    } else if percentage >= 50.0 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Band selecting the debrief summary narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryBand {
    Strong,
    Mixed,
    Weak,
}

pub fn summary_band(percentage: f64) -> SummaryBand {
    if percentage >= 70.0 {
        SummaryBand::Strong
    } else if percentage >= 40.0 {
        SummaryBand::Mixed
    } else {
        SummaryBand::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales() {
        assert_eq!(ScoringScale::STANDARD.delta(Quality::Good), 10);
        assert_eq!(ScoringScale::STANDARD.delta(Quality::Neutral), 7);
        assert_eq!(ScoringScale::STANDARD.delta(Quality::Bad), -5);
        assert_eq!(ScoringScale::LEGACY.delta(Quality::Neutral), 0);
        assert_eq!(ScoringScale::LEGACY.delta(Quality::Bad), -10);
    }

    #[test]
    fn test_checked_add_ok() {
        assert_eq!(checked_add(3, 4), Ok(7));
        assert_eq!(checked_add(-10, 5), Ok(-5));
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(checked_add(i64::MAX, 1), Err(ScoreOverflow(i64::MAX, 1)));
    }

    #[test]
    fn test_percentage_guards_empty_history() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(50, max_score(5)), 100.0);
        assert_eq!(percentage(-25, max_score(5)), -50.0);
    }

    #[test]
    fn test_grade_thresholds_are_inclusive() {
        assert_eq!(grade_for(100.0), Grade::APlus);
        assert_eq!(grade_for(90.0), Grade::APlus);
        assert_eq!(grade_for(89.9), Grade::A);
        assert_eq!(grade_for(80.0), Grade::A);
        assert_eq!(grade_for(70.0), Grade::B);
        assert_eq!(grade_for(60.0), Grade::C);
        assert_eq!(grade_for(50.0), Grade::D);
        assert_eq!(grade_for(49.9), Grade::F);
        assert_eq!(grade_for(-50.0), Grade::F);
    }

    #[test]
    fn test_summary_bands() {
        assert_eq!(summary_band(70.0), SummaryBand::Strong);
        assert_eq!(summary_band(69.0), SummaryBand::Mixed);
        assert_eq!(summary_band(40.0), SummaryBand::Mixed);
        assert_eq!(summary_band(39.9), SummaryBand::Weak);
    }
}
