//! Session lifecycle through the manager with the procedural source.

use std::sync::Arc;

use async_trait::async_trait;

use tabletop_engine::domain::{Choice, Debrief, Evaluation, HistoryEntry, Quality, Scenario};
use tabletop_engine::{IncidentKind, Profile, ScenarioRequest};
use tabletop_runtime::error::ContentError;
use tabletop_runtime::{
    ChoiceOutcome, ContentSource, ErrorCode, InMemorySessionStore, ProceduralSource, SessionError, SessionManager,
    SessionStore,
};

fn setup(profile: Profile, seed: u64) -> (Arc<SessionManager>, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    let source = Arc::new(ProceduralSource::new(profile, Some(seed)));
    (Arc::new(SessionManager::new(store.clone(), source)), store)
}

async fn index_of(store: &InMemorySessionStore, id: &str, quality: Quality) -> usize {
    let state = store.get(id).await.unwrap().unwrap();
    state
        .current()
        .and_then(|s| s.choices.iter().position(|c| c.quality == quality))
        .unwrap()
}

#[tokio::test]
async fn choose_on_unknown_session_creates_nothing() {
    let (mgr, store) = setup(Profile::Narrative, 1);
    let err = mgr.choose("ghost", 0).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)));
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(store.get("ghost").await.unwrap().is_none());
    assert!(store.is_empty());

    assert!(matches!(mgr.status("ghost").await, Err(SessionError::NotFound(_))));
}

#[tokio::test]
async fn status_is_idempotent() {
    let (mgr, _) = setup(Profile::Narrative, 2);
    mgr.start("s1", &ScenarioRequest::default()).await.unwrap();
    mgr.choose("s1", 1).await.unwrap();

    let a = mgr.status("s1").await.unwrap();
    let b = mgr.status("s1").await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.current_stage, 1);
}

#[tokio::test]
async fn full_session_advances_and_completes() {
    let (mgr, store) = setup(Profile::Narrative, 3);
    let started = mgr.start("s1", &ScenarioRequest::default()).await.unwrap();
    let total = started.scenario.total_stages();
    assert_eq!(started.first_stage.stage_number, 1);
    assert_eq!(started.fingerprint.len(), 64);

    let mut debrief = None;
    for step in 0..total {
        let before = store.get("s1").await.unwrap().unwrap();
        assert_eq!(before.current_stage, step);
        assert_eq!(before.history.len(), step);

        match mgr.choose("s1", step % 3).await.unwrap() {
            ChoiceOutcome::Advanced {
                next_stage,
                current_score,
                ..
            } => {
                assert!(step + 1 < total);
                assert_eq!(next_stage.stage_number as usize, step + 2);
                assert_eq!(current_score, store.get("s1").await.unwrap().unwrap().score);
            }
            ChoiceOutcome::Completed { debrief: d, .. } => {
                assert_eq!(step + 1, total);
                debrief = Some(d);
            }
        }
    }

    let debrief = debrief.unwrap();
    let state = store.get("s1").await.unwrap().unwrap();
    assert!(state.is_complete());
    assert_eq!(debrief.max_score, state.history.len() as i64 * 10);
    assert_eq!(debrief.final_score, state.score);
    assert_eq!(debrief.timeline.len(), total);
}

#[tokio::test]
async fn completed_session_rejects_choices() {
    let (mgr, store) = setup(Profile::Generic, 4);
    let started = mgr.start("s1", &ScenarioRequest::default()).await.unwrap();
    for _ in 0..started.scenario.total_stages() {
        mgr.choose("s1", 0).await.unwrap();
    }
    let done = store.get("s1").await.unwrap();

    let err = mgr.choose("s1", 0).await.unwrap_err();
    assert!(matches!(err, SessionError::Complete(_)));
    assert_eq!(err.code().http_status(), 404);
    assert_eq!(store.get("s1").await.unwrap(), done);
}

#[tokio::test]
async fn good_choices_score_full_marks() {
    let (mgr, store) = setup(Profile::Narrative, 5);
    let started = mgr.start("s1", &ScenarioRequest::default()).await.unwrap();
    let total = started.scenario.total_stages() as i64;

    let mut last = None;
    loop {
        let idx = index_of(&store, "s1", Quality::Good).await;
        match mgr.choose("s1", idx).await.unwrap() {
            ChoiceOutcome::Advanced { .. } => {}
            ChoiceOutcome::Completed { debrief, .. } => {
                last = Some(debrief);
                break;
            }
        }
    }
    let d = last.unwrap();
    assert_eq!(d.final_score, total * 10);
    assert_eq!(d.percentage, 100.0);
    assert_eq!(d.grade.as_str(), "A+");
}

#[tokio::test]
async fn ransomware_hint_routes_to_archetype() {
    let (mgr, _) = setup(Profile::Narrative, 6);
    let started = mgr.start("s1", &ScenarioRequest::with_hint("ransomware")).await.unwrap();
    assert_eq!(started.scenario.incident, Some(IncidentKind::Ransomware));
}

#[tokio::test]
async fn concurrent_choices_each_advance_once() {
    let (mgr, store) = setup(Profile::Narrative, 7);
    mgr.start("s1", &ScenarioRequest::default()).await.unwrap();

    let a = tokio::spawn({
        let mgr = mgr.clone();
        async move { mgr.choose("s1", 0).await }
    });
    let b = tokio::spawn({
        let mgr = mgr.clone();
        async move { mgr.choose("s1", 1).await }
    });
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    let state = store.get("s1").await.unwrap().unwrap();
    assert_eq!(state.current_stage, 2);
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history[0].stage_index, 0);
    assert_eq!(state.history[1].stage_index, 1);
}

/// Generates procedurally but fails every evaluation.
struct BrokenEvaluator(ProceduralSource);

#[async_trait]
impl ContentSource for BrokenEvaluator {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn profile(&self) -> Profile {
        self.0.profile()
    }

    async fn generate_scenario(&self, request: &ScenarioRequest) -> Result<Scenario, ContentError> {
        self.0.generate_scenario(request).await
    }

    async fn evaluate_choice(
        &self,
        _scenario: &Scenario,
        _stage_index: usize,
        _choice: &Choice,
        _history: &[HistoryEntry],
    ) -> Result<Evaluation, ContentError> {
        Err(ContentError::Internal("evaluator offline".into()))
    }

    async fn generate_debrief(
        &self,
        scenario: &Scenario,
        history: &[HistoryEntry],
        final_score: i64,
    ) -> Result<Debrief, ContentError> {
        self.0.generate_debrief(scenario, history, final_score).await
    }
}

#[tokio::test]
async fn failed_evaluation_leaves_session_untouched() {
    let store = Arc::new(InMemorySessionStore::new());
    let source = Arc::new(BrokenEvaluator(ProceduralSource::new(Profile::Narrative, Some(8))));
    let mgr = SessionManager::new(store.clone(), source);

    mgr.start("s1", &ScenarioRequest::default()).await.unwrap();
    let before = store.get("s1").await.unwrap();

    let err = mgr.choose("s1", 0).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Generator);
    assert_eq!(store.get("s1").await.unwrap(), before);
}
