//! Tabletop Engine: Invariant Checks
//!
//! Non-panicking validation of scenarios (including ones produced by
//! external content sources) and of session state. Returns the first
//! violation found.

use thiserror::Error;

use crate::domain::{Quality, Scenario};
use crate::state::SessionState;

/// Smallest stage count accepted from any source (generic profile floor).
pub const MIN_STAGES: usize = 4;
/// Largest stage count accepted from any source.
pub const MAX_STAGES: usize = 8;
pub const CHOICES_PER_STAGE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("scenario has {0} stages, expected 4..=8")]
    StageCount(usize),

    #[error("stage at position {position} is numbered {found}")]
    StageNumbering { position: usize, found: u32 },

    #[error("stage {stage} has {found} choices, expected 3")]
    ChoiceCount { stage: u32, found: usize },

    #[error("stage {stage} does not offer exactly one {quality} choice")]
    QualityMix { stage: u32, quality: Quality },

    #[error("stage {stage} has an empty choice text")]
    EmptyChoice { stage: u32 },

    #[error("scenario title is empty")]
    EmptyTitle,

    #[error("stage pointer {current} exceeds stage count {total}")]
    StagePointer { current: usize, total: usize },

    #[error("history has {history} entries but stage pointer is {current}")]
    HistoryLength { history: usize, current: usize },

    #[error("history entry {position} records stage {found}")]
    HistoryOrder { position: usize, found: usize },

    #[error("score {score} does not match history total {expected}")]
    ScoreMismatch { score: i64, expected: i64 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), InvariantViolation> {
    if scenario.title.trim().is_empty() {
        return Err(InvariantViolation::EmptyTitle);
    }
    let count = scenario.stages.len();
    if !(MIN_STAGES..=MAX_STAGES).contains(&count) {
        return Err(InvariantViolation::StageCount(count));
    }
    for (position, stage) in scenario.stages.iter().enumerate() {
        if stage.stage_number as usize != position + 1 {
            return Err(InvariantViolation::StageNumbering {
                position,
                found: stage.stage_number,
            });
        }
        if stage.choices.len() != CHOICES_PER_STAGE {
            return Err(InvariantViolation::ChoiceCount {
                stage: stage.stage_number,
                found: stage.choices.len(),
            });
        }
        for quality in Quality::ALL {
            if stage.choices.iter().filter(|c| c.quality == quality).count() != 1 {
                return Err(InvariantViolation::QualityMix {
                    stage: stage.stage_number,
                    quality,
                });
            }
        }
        if stage.choices.iter().any(|c| c.text.trim().is_empty()) {
            return Err(InvariantViolation::EmptyChoice {
                stage: stage.stage_number,
            });
        }
    }
    Ok(())
}

pub fn validate_session(state: &SessionState) -> Result<(), InvariantViolation> {
    let total = state.total_stages();
    if state.current_stage > total {
        return Err(InvariantViolation::StagePointer {
            current: state.current_stage,
            total,
        });
    }
    if state.history.len() != state.current_stage {
        return Err(InvariantViolation::HistoryLength {
            history: state.history.len(),
            current: state.current_stage,
        });
    }
    if let Some((position, entry)) = state
        .history
        .iter()
        .enumerate()
        .find(|(i, e)| e.stage_index != *i)
    {
        return Err(InvariantViolation::HistoryOrder {
            position,
            found: entry.stage_index,
        });
    }
    let expected = state
        .history
        .iter()
        .fold(0i64, |acc, e| acc.saturating_add(e.evaluation.score_change));
    if expected != state.score {
        return Err(InvariantViolation::ScoreMismatch {
            score: state.score,
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Profile;
    use crate::generator::{generate, ScenarioRequest};
    use crate::state::create_initial_state;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generated() -> Scenario {
        generate(Profile::Narrative, &ScenarioRequest::default(), &mut StdRng::seed_from_u64(17))
    }

    #[test]
    fn test_generated_scenarios_pass() {
        for profile in Profile::ALL {
            for seed in 0..16 {
                let s = generate(profile, &ScenarioRequest::default(), &mut StdRng::seed_from_u64(seed));
                assert_eq!(validate_scenario(&s), Ok(()));
            }
        }
    }

    #[test]
    fn test_too_few_stages() {
        let mut s = generated();
        s.stages.truncate(3);
        assert_eq!(validate_scenario(&s), Err(InvariantViolation::StageCount(3)));
    }

    #[test]
    fn test_duplicate_quality() {
        let mut s = generated();
        s.stages[0].choices[0].quality = s.stages[0].choices[1].quality;
        assert!(matches!(
            validate_scenario(&s),
            Err(InvariantViolation::QualityMix { stage: 1, .. })
        ));
    }

    #[test]
    fn test_misnumbered_stage() {
        let mut s = generated();
        s.stages[1].stage_number = 7;
        assert_eq!(
            validate_scenario(&s),
            Err(InvariantViolation::StageNumbering { position: 1, found: 7 })
        );
    }

    #[test]
    fn test_fresh_session_is_valid() {
        assert_eq!(validate_session(&create_initial_state("s", generated())), Ok(()));
    }

    #[test]
    fn test_score_drift_detected() {
        let mut state = create_initial_state("s", generated());
        state.score = 3;
        assert_eq!(
            validate_session(&state),
            Err(InvariantViolation::ScoreMismatch { score: 3, expected: 0 })
        );
    }
}
