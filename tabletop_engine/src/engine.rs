//! Tabletop Engine: Engine
//!
//! Top-level orchestrator over the pure layers. Owns a profile and a
//! random source; generation, evaluation and debriefs all draw from it.
//! Session mutation is delegated to transitions and checked by
//! invariants.

use rand::Rng;
use thiserror::Error;

use crate::catalog::Profile;
use crate::debrief;
use crate::domain::{Choice, Debrief, Evaluation, HistoryEntry, Scenario};
use crate::evaluator;
use crate::generator::{self, ScenarioRequest};
use crate::invariants::{validate_scenario, validate_session, InvariantViolation};
use crate::state::{create_initial_state, SessionState};
use crate::transitions::{apply_choice, resolve_choice, TransitionError, TransitionOutcome};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Result of one accepted choice.
#[derive(Debug, Clone)]
pub struct ChoiceResult {
    pub state: SessionState,
    pub evaluation: Evaluation,
    /// Present only when the choice completed the session.
    pub debrief: Option<Debrief>,
}

pub struct TabletopEngine<R> {
    profile: Profile,
    rng: R,
}

impl<R: Rng> TabletopEngine<R> {
    pub fn new(profile: Profile, rng: R) -> Self {
        Self { profile, rng }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn generate_scenario(&mut self, request: &ScenarioRequest) -> Scenario {
        generator::generate(self.profile, request, &mut self.rng)
    }

    pub fn evaluate_choice(&mut self, choice: &Choice) -> Evaluation {
        evaluator::evaluate(self.profile.scoring(), choice, &mut self.rng)
    }

    pub fn generate_debrief(
        &mut self,
        scenario: &Scenario,
        history: &[HistoryEntry],
        final_score: i64,
    ) -> Debrief {
        debrief::summarize(self.profile, scenario, history, final_score, &mut self.rng)
    }

    /// Generate a scenario and wrap it in a fresh session.
    pub fn start(
        &mut self,
        session_id: impl Into<String>,
        request: &ScenarioRequest,
    ) -> Result<SessionState, EngineError> {
        let scenario = self.generate_scenario(request);
        validate_scenario(&scenario)?;
        Ok(create_initial_state(session_id, scenario))
    }

    /// Evaluate and apply a choice against `state`, returning the successor.
    /// `state` itself is never modified.
    pub fn choose(&mut self, state: &SessionState, choice_index: usize) -> Result<ChoiceResult, EngineError> {
        let choice = resolve_choice(state, choice_index)?.clone();
        let evaluation = self.evaluate_choice(&choice);
        let (next, outcome) = apply_choice(state, choice_index, evaluation.clone())?;
        validate_session(&next)?;

        let debrief = match outcome {
            TransitionOutcome::Completed => {
                Some(self.generate_debrief(&next.scenario, &next.history, next.score))
            }
            TransitionOutcome::Advanced { .. } => None,
        };
        Ok(ChoiceResult {
            state: next,
            evaluation,
            debrief,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grade, Quality};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine(seed: u64) -> TabletopEngine<StdRng> {
        TabletopEngine::new(Profile::Narrative, StdRng::seed_from_u64(seed))
    }

    fn index_of(state: &SessionState, quality: Quality) -> usize {
        state
            .current()
            .and_then(|s| s.choices.iter().position(|c| c.quality == quality))
            .unwrap()
    }

    #[test]
    fn test_full_run_all_good() {
        let mut eng = engine(21);
        let mut state = eng.start("s1", &ScenarioRequest::default()).unwrap();
        let stages = state.total_stages();
        let mut last = None;
        for _ in 0..stages {
            let idx = index_of(&state, Quality::Good);
            let result = eng.choose(&state, idx).unwrap();
            state = result.state;
            last = result.debrief;
        }
        let debrief = last.expect("debrief after final stage");
        assert_eq!(debrief.final_score, 10 * stages as i64);
        assert_eq!(debrief.max_score, 10 * stages as i64);
        assert_eq!(debrief.grade, Grade::APlus);
    }

    #[test]
    fn test_debrief_only_on_final_choice() {
        let mut eng = engine(4);
        let state = eng.start("s1", &ScenarioRequest::default()).unwrap();
        let result = eng.choose(&state, 0).unwrap();
        assert!(result.debrief.is_none());
        assert_eq!(result.state.current_stage, 1);
        assert_eq!(result.state.history.len(), 1);
    }

    #[test]
    fn test_choose_after_completion_fails() {
        let mut eng = engine(8);
        let mut state = eng.start("s1", &ScenarioRequest::default()).unwrap();
        while !state.is_complete() {
            state = eng.choose(&state, 1).unwrap().state;
        }
        assert!(matches!(
            eng.choose(&state, 0),
            Err(EngineError::Transition(TransitionError::Complete(_)))
        ));
    }

    #[test]
    fn test_generic_profile_uses_legacy_scale() {
        let mut eng = TabletopEngine::new(Profile::Generic, StdRng::seed_from_u64(2));
        let state = eng.start("g", &ScenarioRequest::default()).unwrap();
        let idx = index_of(&state, Quality::Bad);
        assert_eq!(eng.choose(&state, idx).unwrap().evaluation.score_change, -10);
    }
}
