//! Tabletop Engine: Session Transitions
//!
//! The only place a session advances. The input state is never mutated:
//! a clone is taken, updated, and returned, so a caller that fails
//! between evaluation and commit still holds the untouched original.

use thiserror::Error;

use crate::domain::{Choice, Evaluation, HistoryEntry};
use crate::scoring::{checked_add, ScoreOverflow};
use crate::state::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("session {0:?} is already complete")]
    Complete(String),

    #[error("choice index {index} is out of range: stage {stage} offers {available} choices")]
    ChoiceOutOfRange {
        index: usize,
        stage: usize,
        available: usize,
    },

    #[error(transparent)]
    Overflow(#[from] ScoreOverflow),
}

/// Where the session stands after an accepted choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Points at the next stage to present.
    Advanced { next_stage: usize },
    /// The last stage was answered; the session is terminal.
    Completed,
}

/// The choice at `choice_index` of the stage awaiting an answer.
pub fn resolve_choice(state: &SessionState, choice_index: usize) -> Result<&Choice, TransitionError> {
    let stage = state
        .current()
        .ok_or_else(|| TransitionError::Complete(state.session_id.clone()))?;
    stage
        .choices
        .get(choice_index)
        .ok_or(TransitionError::ChoiceOutOfRange {
            index: choice_index,
            stage: state.current_stage,
            available: stage.choices.len(),
        })
}

/// Append the evaluated choice, accumulate the score, advance one stage.
pub fn apply_choice(
    state: &SessionState,
    choice_index: usize,
    evaluation: Evaluation,
) -> Result<(SessionState, TransitionOutcome), TransitionError> {
    let choice = resolve_choice(state, choice_index)?.clone();
    let score = checked_add(state.score, evaluation.score_change)?;

    let mut next = state.clone();
    next.history.push(HistoryEntry {
        stage_index: state.current_stage,
        choice_index,
        choice,
        evaluation,
    });
    next.score = score;
    next.current_stage += 1;

    let outcome = if next.is_complete() {
        TransitionOutcome::Completed
    } else {
        TransitionOutcome::Advanced {
            next_stage: next.current_stage,
        }
    };
    Ok((next, outcome))
}
