//! Wire types for the HTTP API. Field names are camelCase.

use serde::{Deserialize, Serialize};

use tabletop_engine::domain::{Debrief, Evaluation, Scenario, Stage, TeamRole};
use tabletop_engine::{IncidentKind, ScenarioRequest};

use crate::session::{ChoiceOutcome, Started};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewScenarioRequest {
    pub session_id: Option<String>,
    #[serde(alias = "prompt")]
    pub hint: Option<String>,
    pub difficulty: Option<String>,
    pub org_context: Option<String>,
    pub team_size: Option<u32>,
}

impl NewScenarioRequest {
    pub fn to_scenario_request(&self) -> ScenarioRequest {
        ScenarioRequest {
            hint: self.hint.clone(),
            team_size: self.team_size,
            difficulty: self.difficulty.clone(),
            org_context: self.org_context.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceRequest {
    pub session_id: Option<String>,
    pub choice_index: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<IncidentKind>,
    pub title: String,
    pub description: String,
    pub context: String,
    pub total_stages: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<TeamRole>,
    pub fingerprint: String,
}

impl ScenarioSummary {
    fn new(scenario: &Scenario, fingerprint: String) -> Self {
        Self {
            incident_type: scenario.incident,
            title: scenario.title.clone(),
            description: scenario.description.clone(),
            context: scenario.context.clone(),
            total_stages: scenario.total_stages(),
            roles: scenario.roles.clone(),
            fingerprint,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScenarioResponse {
    pub success: bool,
    pub scenario: ScenarioSummary,
    pub stage: Stage,
}

impl From<Started> for NewScenarioResponse {
    fn from(started: Started) -> Self {
        Self {
            success: true,
            scenario: ScenarioSummary::new(&started.scenario, started.fingerprint),
            stage: started.first_stage,
        }
    }
}

/// `complete: false` carries evaluation, next stage and score;
/// `complete: true` carries only the debrief.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceResponse {
    pub success: bool,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debrief: Option<Debrief>,
}

impl From<ChoiceOutcome> for ChoiceResponse {
    fn from(outcome: ChoiceOutcome) -> Self {
        match outcome {
            ChoiceOutcome::Advanced {
                evaluation,
                next_stage,
                current_score,
            } => Self {
                success: true,
                complete: false,
                evaluation: Some(evaluation),
                next_stage: Some(next_stage),
                current_score: Some(current_score),
                debrief: None,
            },
            ChoiceOutcome::Completed { debrief, .. } => Self {
                success: true,
                complete: true,
                evaluation: None,
                next_stage: None,
                current_score: None,
                debrief: Some(debrief),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_alias_maps_to_hint() {
        let req: NewScenarioRequest =
            serde_json::from_str(r#"{"sessionId":"s1","prompt":"ransomware at a clinic","teamSize":3}"#).unwrap();
        assert_eq!(req.session_id.as_deref(), Some("s1"));
        assert_eq!(req.hint.as_deref(), Some("ransomware at a clinic"));
        assert_eq!(req.to_scenario_request().team_size, Some(3));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let req: ChoiceRequest = serde_json::from_str("{}").unwrap();
        assert!(req.session_id.is_none());
        assert!(req.choice_index.is_none());
    }
}
