//! Content Catalog: static tables behind every generated exercise.
//!
//! Nothing here is mutated at runtime. A [`Profile`] selects which
//! variant of the tables (stage counts, scoring scale, narrative depth,
//! roles, compliance overlay) a generator draws from.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Quality, TeamRole, Urgency};
use crate::scoring::ScoringScale;

pub(crate) mod debrief_pools;
pub(crate) mod incidents;
pub(crate) mod narratives;
pub(crate) mod outcomes;
pub(crate) mod roles;
pub(crate) mod stages;

// ── Incident archetypes ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Ransomware,
    Phishing,
    DataBreach,
    Insider,
    Ddos,
    Bec,
    Malware,
}

impl IncidentKind {
    pub const ALL: [IncidentKind; 7] = [
        IncidentKind::Ransomware,
        IncidentKind::Phishing,
        IncidentKind::DataBreach,
        IncidentKind::Insider,
        IncidentKind::Ddos,
        IncidentKind::Bec,
        IncidentKind::Malware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentKind::Ransomware => "ransomware",
            IncidentKind::Phishing => "phishing",
            IncidentKind::DataBreach => "data_breach",
            IncidentKind::Insider => "insider",
            IncidentKind::Ddos => "ddos",
            IncidentKind::Bec => "bec",
            IncidentKind::Malware => "malware",
        }
    }

    /// Human label used by the compliance analyzer.
    pub fn label(&self) -> &'static str {
        match self {
            IncidentKind::DataBreach => "data breach",
            other => other.as_str(),
        }
    }

    /// Case-insensitive keyword routing. `None` for empty or unmatched hints.
    pub fn from_hint(hint: &str) -> Option<Self> {
        let lower = hint.to_lowercase();
        if lower.trim().is_empty() {
            return None;
        }
        incidents::HINT_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(kind, _)| *kind)
    }

    pub fn archetype(&self) -> &'static IncidentArchetype {
        match self {
            IncidentKind::Ransomware => &incidents::RANSOMWARE,
            IncidentKind::Phishing => &incidents::PHISHING,
            IncidentKind::DataBreach => &incidents::DATA_BREACH,
            IncidentKind::Insider => &incidents::INSIDER,
            IncidentKind::Ddos => &incidents::DDOS,
            IncidentKind::Bec => &incidents::BEC,
            IncidentKind::Malware => &incidents::MALWARE,
        }
    }
}

/// Immutable incident template.
#[derive(Debug)]
pub struct IncidentArchetype {
    pub kind: IncidentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub context: &'static str,
    pub initial_indicators: &'static [&'static str],
}

// ── Stage archetypes ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Detection,
    Containment,
    Eradication,
    Recovery,
    PostIncident,
}

impl StageKind {
    /// Incident-response phase order; longer scenarios wrap around.
    pub const SEQUENCE: [StageKind; 5] = [
        StageKind::Detection,
        StageKind::Containment,
        StageKind::Eradication,
        StageKind::Recovery,
        StageKind::PostIncident,
    ];

    /// Archetype for a 1-based stage number: `(n - 1) mod 5`.
    pub fn for_stage_number(stage_number: u32) -> Self {
        let idx = (stage_number.max(1) - 1) as usize % Self::SEQUENCE.len();
        Self::SEQUENCE[idx]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Detection => "detection",
            StageKind::Containment => "containment",
            StageKind::Eradication => "eradication",
            StageKind::Recovery => "recovery",
            StageKind::PostIncident => "post_incident",
        }
    }

    pub fn phase_label(&self) -> &'static str {
        match self {
            StageKind::PostIncident => "post-incident",
            other => other.as_str(),
        }
    }

    fn index(&self) -> usize {
        match self {
            StageKind::Detection => 0,
            StageKind::Containment => 1,
            StageKind::Eradication => 2,
            StageKind::Recovery => 3,
            StageKind::PostIncident => 4,
        }
    }
}

/// Immutable stage template with one action pool per quality.
#[derive(Debug)]
pub struct StageArchetype {
    pub kind: StageKind,
    pub title: &'static str,
    pub good: &'static [&'static str],
    pub neutral: &'static [&'static str],
    pub bad: &'static [&'static str],
}

impl StageArchetype {
    pub fn pool(&self, quality: Quality) -> &'static [&'static str] {
        match quality {
            Quality::Good => self.good,
            Quality::Neutral => self.neutral,
            Quality::Bad => self.bad,
        }
    }
}

/// Catalog entry for a team role.
#[derive(Debug)]
pub struct RoleTemplate {
    pub title: &'static str,
    pub priority: u32,
    pub description: &'static str,
}

impl RoleTemplate {
    pub fn to_team_role(&self) -> TeamRole {
        TeamRole {
            title: self.title.to_string(),
            priority: self.priority,
            description: self.description.to_string(),
        }
    }
}

// ── Profiles ───────────────────────────────────────────────────────

/// Industry vertical selecting one variant of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Legacy generic IR: 4–5 stages, 10/0/−10 scoring, generic injects.
    Generic,
    /// Rich narrative IR: 5–8 stages, 10/7/−5 scoring.
    #[default]
    Narrative,
    /// Narrative rules with law-practice framing and compliance overlay.
    LawFirm,
}

#[derive(Debug, Error)]
#[error("unknown profile {0:?}: expected generic, narrative, or law_firm")]
pub struct UnknownProfile(pub String);

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Generic, Profile::Narrative, Profile::LawFirm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Generic => "generic",
            Profile::Narrative => "narrative",
            Profile::LawFirm => "law_firm",
        }
    }

    pub fn stage_count_range(&self) -> RangeInclusive<usize> {
        match self {
            Profile::Generic => 4..=5,
            Profile::Narrative | Profile::LawFirm => 5..=8,
        }
    }

    pub fn scoring(&self) -> ScoringScale {
        match self {
            Profile::Generic => ScoringScale::LEGACY,
            Profile::Narrative | Profile::LawFirm => ScoringScale::STANDARD,
        }
    }

    pub fn stage_archetype(&self, kind: StageKind) -> &'static StageArchetype {
        match self {
            Profile::LawFirm => &stages::LAW_FIRM_STAGES[kind.index()],
            Profile::Generic | Profile::Narrative => &stages::STANDARD_STAGES[kind.index()],
        }
    }

    /// Hand-written injects; the generic profile always uses fallbacks.
    pub fn narrative_pool(
        &self,
        incident: IncidentKind,
        kind: StageKind,
    ) -> Option<&'static [&'static str]> {
        match self {
            Profile::Generic => None,
            Profile::Narrative | Profile::LawFirm => narratives::rich_pool(incident, kind),
        }
    }

    pub fn decision_maker(&self, kind: StageKind) -> Option<&'static str> {
        match self {
            Profile::Generic => None,
            Profile::Narrative => Some(roles::incident_response_decision_maker(kind)),
            Profile::LawFirm => Some(roles::law_firm_decision_maker(kind)),
        }
    }

    pub fn urgency(&self, stage_number: u32) -> Option<Urgency> {
        match self {
            Profile::Generic => None,
            Profile::Narrative | Profile::LawFirm => Some(Urgency::from_stage_number(stage_number)),
        }
    }

    pub fn role_catalog(&self) -> &'static [RoleTemplate] {
        match self {
            Profile::LawFirm => &roles::LAW_FIRM_ROLES,
            Profile::Generic | Profile::Narrative => &roles::INCIDENT_RESPONSE_ROLES,
        }
    }

    pub fn solo_role(&self) -> &'static RoleTemplate {
        &roles::SOLO_ROLE
    }

    /// Organizational context shown with the scenario.
    pub fn context_for(&self, incident: IncidentKind) -> &'static str {
        match self {
            Profile::LawFirm => incidents::law_firm_context(incident),
            Profile::Generic | Profile::Narrative => incident.archetype().context,
        }
    }

    pub fn includes_compliance(&self) -> bool {
        matches!(self, Profile::LawFirm)
    }
}

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "generic" | "legacy" => Ok(Profile::Generic),
            "narrative" | "rich" => Ok(Profile::Narrative),
            "law_firm" | "lawfirm" | "legal" => Ok(Profile::LawFirm),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
