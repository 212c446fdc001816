//! Tabletop Engine: Session State
//!
//! `current_stage` starts at 0 and equals the stage count once the
//! session is complete.

use serde::{Deserialize, Serialize};

use crate::domain::{HistoryEntry, Scenario, Stage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub session_id: String,
    pub scenario: Scenario,
    pub current_stage: usize,
    pub score: i64,
    pub history: Vec<HistoryEntry>,
}

/// Read-only progress snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub current_stage: usize,
    pub total_stages: usize,
    pub score: i64,
}

impl SessionState {
    pub fn total_stages(&self) -> usize {
        self.scenario.total_stages()
    }

    pub fn is_complete(&self) -> bool {
        self.current_stage >= self.total_stages()
    }

    /// The stage awaiting a choice, `None` once complete.
    pub fn current(&self) -> Option<&Stage> {
        self.scenario.stages.get(self.current_stage)
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            current_stage: self.current_stage,
            total_stages: self.total_stages(),
            score: self.score,
        }
    }
}

/// Fresh session at stage 0 with no score and no history.
pub fn create_initial_state(session_id: impl Into<String>, scenario: Scenario) -> SessionState {
    SessionState {
        session_id: session_id.into(),
        scenario,
        current_stage: 0,
        score: 0,
        history: Vec::new(),
    }
}
