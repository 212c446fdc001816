//! Content sources produce scenarios, choice evaluations and debriefs.
//!
//! The session manager only talks to the [`ContentSource`] trait; the
//! procedural source wraps the engine, the LLM source lives in
//! [`crate::llm_source`].

use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tabletop_engine::domain::{Choice, Debrief, Evaluation, HistoryEntry, Scenario};
use tabletop_engine::{Profile, ScenarioRequest, TabletopEngine};

use crate::error::ContentError;

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn profile(&self) -> Profile;

    async fn generate_scenario(&self, request: &ScenarioRequest) -> Result<Scenario, ContentError>;

    async fn evaluate_choice(
        &self,
        scenario: &Scenario,
        stage_index: usize,
        choice: &Choice,
        history: &[HistoryEntry],
    ) -> Result<Evaluation, ContentError>;

    async fn generate_debrief(
        &self,
        scenario: &Scenario,
        history: &[HistoryEntry],
        final_score: i64,
    ) -> Result<Debrief, ContentError>;
}

/// Catalog-driven source with no external dependency.
pub struct ProceduralSource {
    engine: Mutex<TabletopEngine<SmallRng>>,
}

impl ProceduralSource {
    /// A seeded source replays the same sequence of scenarios.
    pub fn new(profile: Profile, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            engine: Mutex::new(TabletopEngine::new(profile, rng)),
        }
    }

    fn with_engine<T>(&self, f: impl FnOnce(&mut TabletopEngine<SmallRng>) -> T) -> Result<T, ContentError> {
        let mut engine = self
            .engine
            .lock()
            .map_err(|e| ContentError::Internal(e.to_string()))?;
        Ok(f(&mut engine))
    }
}

#[async_trait]
impl ContentSource for ProceduralSource {
    fn name(&self) -> &'static str {
        "procedural"
    }

    fn profile(&self) -> Profile {
        self.with_engine(|e| e.profile()).unwrap_or_default()
    }

    async fn generate_scenario(&self, request: &ScenarioRequest) -> Result<Scenario, ContentError> {
        self.with_engine(|e| e.generate_scenario(request))
    }

    async fn evaluate_choice(
        &self,
        _scenario: &Scenario,
        _stage_index: usize,
        choice: &Choice,
        _history: &[HistoryEntry],
    ) -> Result<Evaluation, ContentError> {
        self.with_engine(|e| e.evaluate_choice(choice))
    }

    async fn generate_debrief(
        &self,
        scenario: &Scenario,
        history: &[HistoryEntry],
        final_score: i64,
    ) -> Result<Debrief, ContentError> {
        self.with_engine(|e| e.generate_debrief(scenario, history, final_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_engine::domain::Quality;
    use tabletop_engine::hashing::canonical_hash;

    #[tokio::test]
    async fn test_seeded_sources_agree() {
        let a = ProceduralSource::new(Profile::Narrative, Some(11));
        let b = ProceduralSource::new(Profile::Narrative, Some(11));
        let request = ScenarioRequest::default();
        let sa = a.generate_scenario(&request).await.unwrap();
        let sb = b.generate_scenario(&request).await.unwrap();
        assert_eq!(canonical_hash(&sa), canonical_hash(&sb));
    }

    #[tokio::test]
    async fn test_profile_scale_applies() {
        let source = ProceduralSource::new(Profile::Generic, Some(1));
        assert_eq!(source.profile(), Profile::Generic);
        let scenario = source.generate_scenario(&ScenarioRequest::default()).await.unwrap();
        let neutral = scenario.stages[0]
            .choices
            .iter()
            .find(|c| c.quality == Quality::Neutral)
            .unwrap();
        let eval = source.evaluate_choice(&scenario, 0, neutral, &[]).await.unwrap();
        assert_eq!(eval.score_change, 0);
    }
}
