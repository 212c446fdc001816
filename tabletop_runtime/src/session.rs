//! Session manager: start, choose and status over a store and a content
//! source.
//!
//! Evaluate-then-commit order for a choice:
//!   1. resolve the choice against the stored session
//!   2. await the content source (evaluation, and the debrief on the last stage)
//!   3. apply the transition to a clone and check invariants
//!   4. write the successor to the store, only if 1-3 succeeded
//!
//! Mutations on one session id are serialized by a per-id async mutex.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use tabletop_engine::domain::{Debrief, Evaluation, Scenario, Stage};
use tabletop_engine::hashing::canonical_hash;
use tabletop_engine::invariants::{validate_scenario, validate_session};
use tabletop_engine::state::create_initial_state;
use tabletop_engine::transitions::{apply_choice, resolve_choice, TransitionOutcome};
use tabletop_engine::{ScenarioRequest, SessionState, SessionStatus};

use crate::content_source::ContentSource;
use crate::error::SessionError;
use crate::store::SessionStore;

/// A freshly started session.
#[derive(Debug, Clone)]
pub struct Started {
    pub scenario: Scenario,
    pub first_stage: Stage,
    pub fingerprint: String,
}

/// Result of an accepted choice.
#[derive(Debug, Clone)]
pub enum ChoiceOutcome {
    Advanced {
        evaluation: Evaluation,
        next_stage: Stage,
        current_score: i64,
    },
    Completed {
        evaluation: Evaluation,
        debrief: Debrief,
    },
}

pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    source: Arc<dyn ContentSource>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, source: Arc<dyn ContentSource>) -> Self {
        Self {
            store,
            source,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    async fn lock_for(&self, session_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drops the map entry once no other request holds it, so the map only
    /// tracks ids with a request in flight.
    async fn release(&self, session_id: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        let idle = locks
            .get(session_id)
            .is_some_and(|held| Arc::ptr_eq(held, &lock) && Arc::strong_count(&lock) == 2);
        if idle {
            locks.remove(session_id);
        }
    }

    /// Generate a scenario and create (or overwrite) the session at stage 0.
    pub async fn start(&self, session_id: &str, request: &ScenarioRequest) -> Result<Started, SessionError> {
        let session_id = require_session_id(session_id)?;
        let lock = self.lock_for(session_id).await;
        let result = {
            let _guard = lock.lock().await;
            self.start_locked(session_id, request).await
        };
        self.release(session_id, lock).await;
        result
    }

    async fn start_locked(&self, session_id: &str, request: &ScenarioRequest) -> Result<Started, SessionError> {
        let scenario = self.source.generate_scenario(request).await?;
        validate_scenario(&scenario)?;
        let first_stage = scenario
            .stages
            .first()
            .cloned()
            .ok_or_else(|| SessionError::Internal("scenario has no stages".to_string()))?;
        let fingerprint = canonical_hash(&scenario);

        self.store
            .put(create_initial_state(session_id, scenario.clone()))
            .await?;

        info!(
            session_id,
            source = self.source.name(),
            profile = %self.source.profile(),
            stages = scenario.total_stages(),
            fingerprint = %fingerprint,
            "session started"
        );
        Ok(Started {
            scenario,
            first_stage,
            fingerprint,
        })
    }

    /// Evaluate and apply a choice. A failure at any step leaves the stored
    /// session untouched.
    pub async fn choose(&self, session_id: &str, choice_index: usize) -> Result<ChoiceOutcome, SessionError> {
        let session_id = require_session_id(session_id)?;
        // Unknown ids never reach the lock map.
        self.load(session_id).await?;

        let lock = self.lock_for(session_id).await;
        let result = {
            let _guard = lock.lock().await;
            self.choose_locked(session_id, choice_index).await
        };
        self.release(session_id, lock).await;
        result
    }

    async fn choose_locked(&self, session_id: &str, choice_index: usize) -> Result<ChoiceOutcome, SessionError> {
        let state = self.load(session_id).await?;
        if state.is_complete() {
            return Err(SessionError::Complete(session_id.to_string()));
        }
        let choice = resolve_choice(&state, choice_index)?.clone();

        let evaluation = self
            .source
            .evaluate_choice(&state.scenario, state.current_stage, &choice, &state.history)
            .await?;
        let (next, outcome) = apply_choice(&state, choice_index, evaluation.clone())?;
        validate_session(&next)?;

        let result = match outcome {
            TransitionOutcome::Advanced { next_stage } => {
                let stage = next
                    .scenario
                    .stages
                    .get(next_stage)
                    .cloned()
                    .ok_or_else(|| SessionError::Internal(format!("stage {} missing", next_stage)))?;
                ChoiceOutcome::Advanced {
                    evaluation: evaluation.clone(),
                    next_stage: stage,
                    current_score: next.score,
                }
            }
            TransitionOutcome::Completed => {
                let debrief = self
                    .source
                    .generate_debrief(&next.scenario, &next.history, next.score)
                    .await?;
                ChoiceOutcome::Completed {
                    evaluation: evaluation.clone(),
                    debrief,
                }
            }
        };

        info!(
            session_id,
            stage = state.current_stage,
            choice = choice_index,
            quality = %choice.quality,
            delta = evaluation.score_change,
            score = next.score,
            complete = next.is_complete(),
            "choice applied"
        );
        self.store.put(next).await?;
        Ok(result)
    }

    /// Read-only progress. Never mutates the store.
    pub async fn status(&self, session_id: &str) -> Result<SessionStatus, SessionError> {
        let session_id = require_session_id(session_id)?;
        Ok(self.load(session_id).await?.status())
    }

    async fn load(&self, session_id: &str) -> Result<SessionState, SessionError> {
        self.store
            .get(session_id)
            .await?
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }
}

/// Ids are opaque: blank ones are rejected, all others are used verbatim.
fn require_session_id(session_id: &str) -> Result<&str, SessionError> {
    if session_id.trim().is_empty() {
        return Err(SessionError::Validation("Session ID required".to_string()));
    }
    Ok(session_id)
}
