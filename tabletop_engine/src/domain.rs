//! Tabletop Engine: Core Domain Types
//!
//! Pure data. Only small label accessors live here; generation,
//! scoring and transition logic live in their own modules.
//! Field names serialize in camelCase to match the exercise wire format.

use serde::{Deserialize, Serialize};

use crate::catalog::IncidentKind;

// ── Choices ────────────────────────────────────────────────────────

/// Quality label fixed to a choice at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Good,
    Neutral,
    Bad,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Good, Quality::Neutral, Quality::Bad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Good => "good",
            Quality::Neutral => "neutral",
            Quality::Bad => "bad",
        }
    }

    /// Marker used in the debrief action summary.
    pub fn icon(&self) -> &'static str {
        match self {
            Quality::Good => "✓",
            Quality::Neutral => "○",
            Quality::Bad => "✗",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three options offered at a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub quality: Quality,
}

// ── Stages & scenarios ─────────────────────────────────────────────

/// Pressure tag derived from a stage's ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Elevated,
    Routine,
}

impl Urgency {
    /// Stage 1 is critical, 2–3 high, 4–5 elevated, later stages routine.
    pub fn from_stage_number(stage_number: u32) -> Self {
        match stage_number {
            0 | 1 => Urgency::Critical,
            2 | 3 => Urgency::High,
            4 | 5 => Urgency::Elevated,
            _ => Urgency::Routine,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Elevated => "elevated",
            Urgency::Routine => "routine",
        }
    }
}

/// A single decision point in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub stage_number: u32,
    pub title: String,
    pub narrative: String,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_maker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
}

/// A role assigned to a participant for the exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRole {
    pub title: String,
    pub priority: u32,
    pub description: String,
}

/// A complete, immutable exercise script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// `None` when the scenario came from an external content source.
    #[serde(default, rename = "incidentType", skip_serializing_if = "Option::is_none")]
    pub incident: Option<IncidentKind>,
    pub title: String,
    pub description: String,
    pub context: String,
    pub stages: Vec<Stage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<TeamRole>,
}

impl Scenario {
    pub fn total_stages(&self) -> usize {
        self.stages.len()
    }
}

// ── Evaluation & history ───────────────────────────────────────────

/// Outcome of evaluating one choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub score_change: i64,
    pub feedback: String,
    pub consequence: String,
}

/// One accepted choice in a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub stage_index: usize,
    pub choice_index: usize,
    pub choice: Choice,
    pub evaluation: Evaluation,
}

// ── Debrief ────────────────────────────────────────────────────────

/// Letter grade banded on percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Display color for the grade badge.
    pub fn color(&self) -> &'static str {
        match self {
            Grade::APlus | Grade::A => "#34a853",
            Grade::B => "#4a90e2",
            Grade::C => "#fbbc04",
            Grade::D => "#ff9800",
            Grade::F => "#ea4335",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-choice row of the debrief timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub stage_number: u32,
    pub stage_title: String,
    pub choice_text: String,
    pub quality: Quality,
    pub feedback: String,
    pub consequence: String,
    pub score_change: i64,
}

/// End-of-session scored report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debrief {
    pub final_score: i64,
    pub max_score: i64,
    pub percentage: f64,
    pub grade: Grade,
    pub grade_color: String,
    pub summary: String,
    pub actions_summary: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub key_lessons: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_analysis: Option<ComplianceAnalysis>,
}

// ── Compliance ─────────────────────────────────────────────────────

/// Overall regulatory exposure. Ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRequirement {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties: Option<String>,
    pub triggered: bool,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAnalysis {
    pub title: String,
    pub requirements: Vec<ComplianceRequirement>,
    pub recommendations: Vec<String>,
    pub ethical_considerations: Vec<String>,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_serializes_lowercase() {
        let json = serde_json::to_string(&Quality::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }

    #[test]
    fn test_grade_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::F).unwrap(), "\"F\"");
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_urgency_bands() {
        assert_eq!(Urgency::from_stage_number(1), Urgency::Critical);
        assert_eq!(Urgency::from_stage_number(3), Urgency::High);
        assert_eq!(Urgency::from_stage_number(5), Urgency::Elevated);
        assert_eq!(Urgency::from_stage_number(8), Urgency::Routine);
    }

    #[test]
    fn test_stage_omits_absent_optional_fields() {
        let stage = Stage {
            stage_number: 1,
            title: "Detection".to_string(),
            narrative: "Alerts".to_string(),
            choices: Vec::new(),
            decision_maker: None,
            urgency: None,
        };
        let v = serde_json::to_value(&stage).unwrap();
        assert!(v.get("decisionMaker").is_none());
        assert!(v.get("urgency").is_none());
        assert_eq!(v["stageNumber"], 1);
    }
}
