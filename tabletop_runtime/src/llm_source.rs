//! Content source backed by a language model.
//!
//! Scenario generation has no local substitute, so its failures
//! propagate. Evaluation and debrief narrative fall back to fixed local
//! content and log a warning instead.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use tabletop_engine::catalog::{IncidentKind, StageKind};
use tabletop_engine::debrief::{build_debrief, DebriefNarrative};
use tabletop_engine::domain::{Choice, Debrief, Evaluation, HistoryEntry, Scenario, Stage};
use tabletop_engine::generator::assign_roles;
use tabletop_engine::invariants::validate_scenario;
use tabletop_engine::scoring::MAX_POINTS_PER_CHOICE;
use tabletop_engine::{Profile, ScenarioRequest};

use crate::content_source::ContentSource;
use crate::error::ContentError;
use crate::llm::{extract_json, truncate_for_log, LlmClient, LlmRequest};

const MAX_PROMPT_LOG_CHARS: usize = 4_000;
const MAX_LLM_OUTPUT_LOG_CHARS: usize = 8_000;

pub const DEFAULT_SCENARIO_PROMPT: &str = "A ransomware attack on a K-12 school district";

pub const FALLBACK_CONSEQUENCE: &str = "The situation continues to evolve.";
pub const FALLBACK_SUMMARY: &str = "Exercise completed. Review your decisions and consider how they align with incident response best practices.";
pub const FALLBACK_LESSONS: [&str; 3] = [
    "Communication is critical during incidents",
    "Documentation helps with post-incident analysis",
    "Balance speed with thorough investigation",
];
pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Review your incident response plan",
    "Conduct regular tabletop exercises",
    "Ensure team roles are clearly defined",
];

#[derive(Debug, Clone)]
pub struct LlmSourceConfig {
    pub model: String,
    pub temperature: f32,
}

impl Default for LlmSourceConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash-exp".to_string(),
            temperature: 0.7,
        }
    }
}

pub struct LlmContentSource<C: LlmClient> {
    client: C,
    config: LlmSourceConfig,
    profile: Profile,
}

// Model output shapes. Unknown fields are ignored.

#[derive(Debug, Deserialize)]
struct ScenarioPayload {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    context: String,
    stages: Vec<StagePayload>,
}

#[derive(Debug, Deserialize)]
struct StagePayload {
    title: String,
    narrative: String,
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationPayload {
    score_change: f64,
    feedback: String,
    consequence: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DebriefPayload {
    summary: String,
    #[serde(default)]
    key_lessons: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
}

impl<C: LlmClient> LlmContentSource<C> {
    pub fn new(client: C, config: LlmSourceConfig, profile: Profile) -> Self {
        Self {
            client,
            config,
            profile,
        }
    }

    async fn complete_json(&self, operation: &'static str, system: String, user: String) -> Result<String, ContentError> {
        info!(
            model = %self.config.model,
            temperature = self.config.temperature,
            operation,
            prompt_len = user.len(),
            "llm request prepared"
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                operation,
                system_prompt = %truncate_for_log(&system, MAX_PROMPT_LOG_CHARS),
                user_prompt = %truncate_for_log(&user, MAX_PROMPT_LOG_CHARS),
                "llm prompts"
            );
        }

        let output = self
            .client
            .complete(LlmRequest {
                system,
                user,
                model: self.config.model.clone(),
                temperature: self.config.temperature,
            })
            .await?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                operation,
                llm_output = %truncate_for_log(&output, MAX_LLM_OUTPUT_LOG_CHARS),
                "llm raw output"
            );
        }

        extract_json(&output)
            .ok_or_else(|| ContentError::Malformed("LLM output did not contain JSON".to_string()))
    }

    async fn try_evaluate(
        &self,
        scenario: &Scenario,
        stage_index: usize,
        choice: &Choice,
        history: &[HistoryEntry],
    ) -> Result<Evaluation, ContentError> {
        let user = evaluation_prompt(scenario, stage_index, choice, history)?;
        let json = self.complete_json("evaluate_choice", EVALUATION_SYSTEM_PROMPT.to_string(), user).await?;
        let payload: EvaluationPayload =
            serde_json::from_str(&json).map_err(|e| ContentError::Malformed(format!("Invalid evaluation JSON: {}", e)))?;
        let bound = MAX_POINTS_PER_CHOICE as f64;
        Ok(Evaluation {
            score_change: payload.score_change.round().clamp(-bound, bound) as i64,
            feedback: payload.feedback,
            consequence: payload.consequence,
        })
    }

    async fn try_narrative(
        &self,
        scenario: &Scenario,
        history: &[HistoryEntry],
        final_score: i64,
    ) -> Result<DebriefNarrative, ContentError> {
        let user = debrief_prompt(scenario, history, final_score);
        let json = self.complete_json("generate_debrief", DEBRIEF_SYSTEM_PROMPT.to_string(), user).await?;
        let payload: DebriefPayload =
            serde_json::from_str(&json).map_err(|e| ContentError::Malformed(format!("Invalid debrief JSON: {}", e)))?;
        if payload.summary.trim().is_empty() {
            return Err(ContentError::Malformed("debrief summary is empty".to_string()));
        }
        Ok(DebriefNarrative {
            summary: payload.summary,
            key_lessons: payload.key_lessons,
            recommendations: payload.recommendations,
        })
    }
}

#[async_trait]
impl<C: LlmClient> ContentSource for LlmContentSource<C> {
    fn name(&self) -> &'static str {
        "llm"
    }

    fn profile(&self) -> Profile {
        self.profile
    }

    async fn generate_scenario(&self, request: &ScenarioRequest) -> Result<Scenario, ContentError> {
        let system = scenario_system_prompt(self.profile);
        let user = scenario_prompt(request);
        let json = self.complete_json("generate_scenario", system, user).await?;
        let payload: ScenarioPayload =
            serde_json::from_str(&json).map_err(|e| ContentError::Malformed(format!("Invalid scenario JSON: {}", e)))?;

        let scenario = into_scenario(payload, self.profile, request);
        validate_scenario(&scenario).map_err(|e| ContentError::Malformed(e.to_string()))?;
        let range = self.profile.stage_count_range();
        if !range.contains(&scenario.total_stages()) {
            return Err(ContentError::Malformed(format!(
                "{} stages is outside {}..={} for the {} profile",
                scenario.total_stages(),
                range.start(),
                range.end(),
                self.profile
            )));
        }
        info!(
            model = %self.config.model,
            stages = scenario.total_stages(),
            title = %scenario.title,
            "llm scenario accepted"
        );
        Ok(scenario)
    }

    async fn evaluate_choice(
        &self,
        scenario: &Scenario,
        stage_index: usize,
        choice: &Choice,
        history: &[HistoryEntry],
    ) -> Result<Evaluation, ContentError> {
        match self.try_evaluate(scenario, stage_index, choice, history).await {
            Ok(evaluation) => Ok(evaluation),
            Err(e) => {
                warn!(error = %e, stage = stage_index, "llm evaluation failed, using fallback");
                Ok(fallback_evaluation(self.profile, choice))
            }
        }
    }

    async fn generate_debrief(
        &self,
        scenario: &Scenario,
        history: &[HistoryEntry],
        final_score: i64,
    ) -> Result<Debrief, ContentError> {
        let narrative = match self.try_narrative(scenario, history, final_score).await {
            Ok(narrative) => narrative,
            Err(e) => {
                warn!(error = %e, score = final_score, "llm debrief failed, using fallback");
                fallback_narrative()
            }
        };
        Ok(build_debrief(self.profile, scenario, history, final_score, narrative))
    }
}

/// Stage numbers, decision makers, urgency and roles are assigned locally
/// regardless of what the model returned.
fn into_scenario(payload: ScenarioPayload, profile: Profile, request: &ScenarioRequest) -> Scenario {
    let stages = payload
        .stages
        .into_iter()
        .enumerate()
        .map(|(i, stage)| {
            let stage_number = i as u32 + 1;
            Stage {
                stage_number,
                title: stage.title,
                narrative: stage.narrative,
                choices: stage.choices,
                decision_maker: profile
                    .decision_maker(StageKind::for_stage_number(stage_number))
                    .map(str::to_string),
                urgency: profile.urgency(stage_number),
            }
        })
        .collect();

    let context = match request.org_context.as_deref().map(str::trim) {
        Some(ctx) if !ctx.is_empty() => ctx.to_string(),
        _ => payload.context,
    };

    Scenario {
        incident: request.hint.as_deref().and_then(IncidentKind::from_hint),
        title: payload.title,
        description: payload.description,
        context,
        stages,
        roles: assign_roles(profile, request.team_size),
    }
}

pub fn fallback_evaluation(profile: Profile, choice: &Choice) -> Evaluation {
    Evaluation {
        score_change: profile.scoring().delta(choice.quality),
        feedback: format!("This was a {} choice for incident response.", choice.quality),
        consequence: FALLBACK_CONSEQUENCE.to_string(),
    }
}

pub fn fallback_narrative() -> DebriefNarrative {
    DebriefNarrative {
        summary: FALLBACK_SUMMARY.to_string(),
        key_lessons: FALLBACK_LESSONS.iter().map(|s| s.to_string()).collect(),
        recommendations: FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    }
}

// ── Prompts ────────────────────────────────────────────────────────

const EVALUATION_SYSTEM_PROMPT: &str = r#"You are evaluating an incident response decision. Provide:
1. Score change (-10 to +10 based on quality)
2. Brief feedback explaining why this choice is good/neutral/bad
3. A realistic consequence that will affect the next stage

Return ONLY valid JSON:
{
  "scoreChange": <number>,
  "feedback": "<explanation>",
  "consequence": "<what happens next>"
}"#;

const DEBRIEF_SYSTEM_PROMPT: &str = r#"You are conducting a debrief after an incident response tabletop exercise. Provide:
1. A summary of performance
2. 3-5 key lessons learned
3. 3-5 actionable recommendations

Return ONLY valid JSON:
{
  "finalScore": <number>,
  "summary": "<overall performance summary>",
  "keyLessons": ["<lesson 1>", "<lesson 2>", ...],
  "recommendations": ["<recommendation 1>", "<recommendation 2>", ...]
}"#;

fn scenario_system_prompt(profile: Profile) -> String {
    let range = profile.stage_count_range();
    let mut system = String::new();
    system.push_str(
        "You are an expert in incident response and cybersecurity training. \
         Generate a realistic incident response tabletop scenario for training purposes.\n\n",
    );
    system.push_str("The scenario should have:\n");
    system.push_str("- A clear title and description\n");
    system.push_str("- Context about the organization (K-12, healthcare, etc.)\n");
    system.push_str(&format!(
        "- Between {} and {} stages that escalate in complexity\n",
        range.start(),
        range.end()
    ));
    system.push_str("- Each stage has a narrative inject (what's happening) and exactly 3 choices\n");
    system.push_str(
        "- Each choice is labeled \"good\", \"neutral\", or \"bad\" based on IR best practices, one of each per stage\n\n",
    );
    system.push_str("Return ONLY valid JSON with this structure:\n");
    system.push_str(
        r#"{"title":"Scenario title","description":"Brief overview","context":"Organization context","stages":[{"stageNumber":1,"title":"Stage title","narrative":"What is happening at this stage","choices":[{"text":"Choice description","quality":"good"},{"text":"Choice description","quality":"neutral"},{"text":"Choice description","quality":"bad"}]}]}"#,
    );
    system.push('\n');
    system
}

fn scenario_prompt(request: &ScenarioRequest) -> String {
    let hint = request
        .hint
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or(DEFAULT_SCENARIO_PROMPT);
    let mut user = format!("User request: Generate a tabletop scenario: {}\n", hint);
    if let Some(difficulty) = request.difficulty.as_deref().filter(|d| !d.trim().is_empty()) {
        user.push_str(&format!("Difficulty: {}\n", difficulty));
    }
    if let Some(ctx) = request.org_context.as_deref().filter(|c| !c.trim().is_empty()) {
        user.push_str(&format!("Organization context: {}\n", ctx));
    }
    user
}

fn evaluation_prompt(
    scenario: &Scenario,
    stage_index: usize,
    choice: &Choice,
    history: &[HistoryEntry],
) -> Result<String, ContentError> {
    let stage = scenario
        .stages
        .get(stage_index)
        .ok_or_else(|| ContentError::Internal(format!("stage {} out of range", stage_index)))?;
    let previous = if history.is_empty() {
        "None".to_string()
    } else {
        let texts: Vec<&str> = history.iter().map(|h| h.choice.text.as_str()).collect();
        serde_json::to_string(&texts).map_err(|e| ContentError::Internal(e.to_string()))?
    };
    Ok(format!(
        "Scenario: {}\nStage {}: {}\nNarrative: {}\nPlayer chose: \"{}\"\nChoice quality: {}\n\nPrevious decisions: {}\n\nEvaluate this choice.",
        scenario.title,
        stage_index + 1,
        stage.title,
        stage.narrative,
        choice.text,
        choice.quality,
        previous
    ))
}

fn debrief_prompt(scenario: &Scenario, history: &[HistoryEntry], final_score: i64) -> String {
    let decisions: Vec<String> = history
        .iter()
        .enumerate()
        .map(|(i, h)| format!("Stage {}: {} ({})", i + 1, h.choice.text, h.evaluation.feedback))
        .collect();
    format!(
        "Scenario: {}\nFinal Score: {}\n\nDecisions made:\n{}\n\nGenerate a comprehensive debrief.",
        scenario.title,
        final_score,
        decisions.join("\n")
    )
}
