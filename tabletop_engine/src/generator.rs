//! Tabletop Engine: Scenario Generator
//!
//! Builds a complete scenario from the catalog. Every random decision
//! (incident pick, stage count, narrative pick, choice texts, choice
//! order) is drawn from the caller's `Rng`, so a seeded generator
//! reproduces the same scenario.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::narratives::fallback_narrative;
use crate::catalog::{IncidentKind, Profile, StageKind};
use crate::domain::{Choice, Quality, Scenario, Stage, TeamRole};

/// Options accepted when starting an exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    /// Free text routed to an incident archetype by keyword.
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
    /// Forwarded to external content sources only.
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Replaces the archetype's organizational context when non-empty.
    #[serde(default)]
    pub org_context: Option<String>,
}

impl ScenarioRequest {
    pub fn with_hint(hint: impl Into<String>) -> Self {
        Self {
            hint: Some(hint.into()),
            ..Default::default()
        }
    }
}

/// Keyword match on the hint, else a uniform pick across all archetypes.
pub fn select_incident<R: Rng>(hint: Option<&str>, rng: &mut R) -> IncidentKind {
    if let Some(kind) = hint.and_then(IncidentKind::from_hint) {
        return kind;
    }
    IncidentKind::ALL[rng.random_range(0..IncidentKind::ALL.len())]
}

pub fn generate<R: Rng>(profile: Profile, request: &ScenarioRequest, rng: &mut R) -> Scenario {
    let incident = select_incident(request.hint.as_deref(), rng);
    let archetype = incident.archetype();
    let stage_count = rng.random_range(profile.stage_count_range());

    let stages = (1..=stage_count as u32)
        .map(|n| build_stage(profile, incident, n, rng))
        .collect();

    let context = match request.org_context.as_deref().map(str::trim) {
        Some(ctx) if !ctx.is_empty() => ctx.to_string(),
        _ => profile.context_for(incident).to_string(),
    };

    Scenario {
        incident: Some(incident),
        title: archetype.title.to_string(),
        description: archetype.description.to_string(),
        context,
        stages,
        roles: assign_roles(profile, request.team_size),
    }
}

fn build_stage<R: Rng>(profile: Profile, incident: IncidentKind, stage_number: u32, rng: &mut R) -> Stage {
    let kind = StageKind::for_stage_number(stage_number);
    let template = profile.stage_archetype(kind);

    let mut choices: Vec<Choice> = Quality::ALL
        .iter()
        .map(|&quality| Choice {
            text: pick(template.pool(quality), rng).to_string(),
            quality,
        })
        .collect();
    choices.shuffle(rng);

    let narrative = match profile.narrative_pool(incident, kind) {
        Some(pool) => pick(pool, rng).to_string(),
        None => fallback_narrative(incident.archetype(), kind, stage_number),
    };

    Stage {
        stage_number,
        title: template.title.to_string(),
        narrative,
        choices,
        decision_maker: profile.decision_maker(kind).map(str::to_string),
        urgency: profile.urgency(stage_number),
    }
}

/// Prefix of the role catalog by priority; a team of one gets the solo role.
pub fn assign_roles(profile: Profile, team_size: Option<u32>) -> Vec<TeamRole> {
    match team_size {
        None | Some(0) => Vec::new(),
        Some(1) => vec![profile.solo_role().to_team_role()],
        Some(n) => profile
            .role_catalog()
            .iter()
            .take(n as usize)
            .map(|r| r.to_team_role())
            .collect(),
    }
}

fn pick<R: Rng>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_shape_holds_for_every_profile() {
        for profile in Profile::ALL {
            for seed in 0..64 {
                let s = generate(profile, &ScenarioRequest::default(), &mut rng(seed));
                assert!(profile.stage_count_range().contains(&s.total_stages()));
                for (i, stage) in s.stages.iter().enumerate() {
                    assert_eq!(stage.stage_number as usize, i + 1);
                    assert_eq!(stage.choices.len(), 3);
                    for q in Quality::ALL {
                        assert_eq!(stage.choices.iter().filter(|c| c.quality == q).count(), 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_hint_selects_archetype() {
        let s = generate(Profile::Narrative, &ScenarioRequest::with_hint("ransomware"), &mut rng(7));
        assert_eq!(s.incident, Some(IncidentKind::Ransomware));
        assert_eq!(s.title, IncidentKind::Ransomware.archetype().title);
    }

    #[test]
    fn test_stage_titles_cycle_through_phases() {
        let s = generate(Profile::Narrative, &ScenarioRequest::default(), &mut rng(3));
        for stage in &s.stages {
            let kind = StageKind::for_stage_number(stage.stage_number);
            assert_eq!(stage.title, Profile::Narrative.stage_archetype(kind).title);
        }
    }

    #[test]
    fn test_fallback_stage_one_uses_indicators() {
        let s = generate(Profile::Generic, &ScenarioRequest::with_hint("ddos"), &mut rng(11));
        let first = IncidentKind::Ddos.archetype().initial_indicators[0];
        assert!(s.stages[0].narrative.starts_with(first));
    }

    #[test]
    fn test_generic_profile_has_no_rich_metadata() {
        let s = generate(Profile::Generic, &ScenarioRequest::default(), &mut rng(5));
        assert!(s.stages.iter().all(|st| st.decision_maker.is_none() && st.urgency.is_none()));
    }

    #[test]
    fn test_narrative_profile_tags_stages() {
        let s = generate(Profile::Narrative, &ScenarioRequest::default(), &mut rng(5));
        assert!(s.stages.iter().all(|st| st.decision_maker.is_some() && st.urgency.is_some()));
    }

    #[test]
    fn test_team_roles() {
        assert!(assign_roles(Profile::Narrative, None).is_empty());
        assert!(assign_roles(Profile::Narrative, Some(0)).is_empty());

        let solo = assign_roles(Profile::Narrative, Some(1));
        assert_eq!(solo.len(), 1);
        assert_eq!(solo[0].title, "Solo Practitioner");

        let three = assign_roles(Profile::LawFirm, Some(3));
        assert_eq!(
            three.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            ["Managing Partner", "Senior Partner", "Office Administrator"]
        );

        let capped = assign_roles(Profile::Narrative, Some(50));
        assert_eq!(capped.len(), Profile::Narrative.role_catalog().len());
    }

    #[test]
    fn test_org_context_overrides_catalog_context() {
        let request = ScenarioRequest {
            org_context: Some("Regional credit union, 40 staff".to_string()),
            ..Default::default()
        };
        let s = generate(Profile::LawFirm, &request, &mut rng(2));
        assert_eq!(s.context, "Regional credit union, 40 staff");

        let blank = ScenarioRequest {
            hint: Some("bec".to_string()),
            org_context: Some("   ".to_string()),
            ..Default::default()
        };
        let s = generate(Profile::LawFirm, &blank, &mut rng(2));
        assert_eq!(s.context, Profile::LawFirm.context_for(IncidentKind::Bec));
    }

    #[test]
    fn test_same_seed_same_scenario() {
        let a = generate(Profile::Narrative, &ScenarioRequest::default(), &mut rng(42));
        let b = generate(Profile::Narrative, &ScenarioRequest::default(), &mut rng(42));
        assert_eq!(a, b);
    }
}
