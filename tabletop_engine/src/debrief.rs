//! Tabletop Engine: Debrief Generator
//!
//! Split in two: the scored report (score, ceiling, grade, action lines,
//! timeline, compliance overlay) is always computed here, while the
//! narrative part (summary, lessons, recommendations) can come from the
//! curated pools or from an external content source.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::debrief_pools::{LESSONS, RECOMMENDATIONS, SUMMARY_MIXED, SUMMARY_STRONG, SUMMARY_WEAK};
use crate::catalog::{IncidentKind, Profile};
use crate::compliance::{self, ScenarioDetails};
use crate::domain::{Choice, Debrief, HistoryEntry, Scenario, TimelineEntry};
use crate::scoring::{self, SummaryBand};

/// Choice texts are cut to this many characters in the actions summary.
pub const ACTION_TEXT_LIMIT: usize = 80;

/// Narrative half of a debrief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebriefNarrative {
    pub summary: String,
    pub key_lessons: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Full procedural debrief.
pub fn summarize<R: Rng>(
    profile: Profile,
    scenario: &Scenario,
    history: &[HistoryEntry],
    final_score: i64,
    rng: &mut R,
) -> Debrief {
    let pct = scoring::percentage(final_score, scoring::max_score(history.len()));
    let narrative = curated_narrative(pct, rng);
    build_debrief(profile, scenario, history, final_score, narrative)
}

/// Summary banded on percentage; 3–5 lessons and 3–5 recommendations
/// sampled without replacement.
pub fn curated_narrative<R: Rng>(percentage: f64, rng: &mut R) -> DebriefNarrative {
    let summary = match scoring::summary_band(percentage) {
        SummaryBand::Strong => SUMMARY_STRONG,
        SummaryBand::Mixed => SUMMARY_MIXED,
        SummaryBand::Weak => SUMMARY_WEAK,
    };
    DebriefNarrative {
        summary: summary.to_string(),
        key_lessons: sample(&LESSONS, rng),
        recommendations: sample(&RECOMMENDATIONS, rng),
    }
}

/// Assembles the scored report around a narrative from any source.
pub fn build_debrief(
    profile: Profile,
    scenario: &Scenario,
    history: &[HistoryEntry],
    final_score: i64,
    narrative: DebriefNarrative,
) -> Debrief {
    let max_score = scoring::max_score(history.len());
    let percentage = scoring::percentage(final_score, max_score);
    let grade = scoring::grade_for(percentage);

    let actions_summary = history
        .iter()
        .map(|entry| {
            format!(
                "{} {}: {}...",
                entry.choice.quality.icon(),
                stage_title(scenario, entry.stage_index),
                truncate_chars(&entry.choice.text, ACTION_TEXT_LIMIT)
            )
        })
        .collect();

    let timeline = history
        .iter()
        .map(|entry| TimelineEntry {
            stage_number: entry.stage_index as u32 + 1,
            stage_title: stage_title(scenario, entry.stage_index),
            choice_text: entry.choice.text.clone(),
            quality: entry.choice.quality,
            feedback: entry.evaluation.feedback.clone(),
            consequence: entry.evaluation.consequence.clone(),
            score_change: entry.evaluation.score_change,
        })
        .collect();

    let compliance_analysis = profile.includes_compliance().then(|| {
        let choices: Vec<Choice> = history.iter().map(|e| e.choice.clone()).collect();
        compliance::analyze(
            incident_label(scenario),
            ScenarioDetails {
                description: &scenario.description,
                context: &scenario.context,
            },
            &choices,
        )
    });

    Debrief {
        final_score,
        max_score,
        percentage,
        grade,
        grade_color: grade.color().to_string(),
        summary: narrative.summary,
        actions_summary,
        timeline,
        key_lessons: narrative.key_lessons,
        recommendations: narrative.recommendations,
        compliance_analysis,
    }
}

fn sample<R: Rng>(pool: &[&str], rng: &mut R) -> Vec<String> {
    let count = rng.random_range(3..=5).min(pool.len());
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().take(count).map(str::to_string).collect()
}

fn stage_title(scenario: &Scenario, stage_index: usize) -> String {
    scenario
        .stages
        .get(stage_index)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| format!("Stage {}", stage_index + 1))
}

/// Externally sourced scenarios carry no archetype; route their title instead.
fn incident_label(scenario: &Scenario) -> &'static str {
    scenario
        .incident
        .or_else(|| IncidentKind::from_hint(&scenario.title))
        .map(|k| k.label())
        .unwrap_or("")
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Evaluation, Grade, Quality, Stage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario(stages: usize) -> Scenario {
        Scenario {
            incident: Some(IncidentKind::Phishing),
            title: "Credential Harvesting Campaign".to_string(),
            description: "Staff credentials phished".to_string(),
            context: "District office".to_string(),
            stages: (1..=stages as u32)
                .map(|n| Stage {
                    stage_number: n,
                    title: format!("Phase {n}"),
                    narrative: String::new(),
                    choices: Vec::new(),
                    decision_maker: None,
                    urgency: None,
                })
                .collect(),
            roles: Vec::new(),
        }
    }

    fn entry(stage_index: usize, quality: Quality, text: &str, delta: i64) -> HistoryEntry {
        HistoryEntry {
            stage_index,
            choice_index: 0,
            choice: Choice {
                text: text.to_string(),
                quality,
            },
            evaluation: Evaluation {
                score_change: delta,
                feedback: "fb".to_string(),
                consequence: "cq".to_string(),
            },
        }
    }

    #[test]
    fn test_all_good_is_a_plus() {
        let history: Vec<_> = (0..5).map(|i| entry(i, Quality::Good, "ok", 10)).collect();
        let d = summarize(Profile::Narrative, &scenario(5), &history, 50, &mut StdRng::seed_from_u64(1));
        assert_eq!(d.final_score, 50);
        assert_eq!(d.max_score, 50);
        assert_eq!(d.percentage, 100.0);
        assert_eq!(d.grade, Grade::APlus);
        assert_eq!(d.grade_color, "#34a853");
        assert_eq!(d.summary, SUMMARY_STRONG);
        assert!(d.compliance_analysis.is_none());
    }

    #[test]
    fn test_all_bad_goes_negative() {
        let history: Vec<_> = (0..5).map(|i| entry(i, Quality::Bad, "no", -5)).collect();
        let d = summarize(Profile::Narrative, &scenario(5), &history, -25, &mut StdRng::seed_from_u64(1));
        assert_eq!(d.max_score, 50);
        assert_eq!(d.percentage, -50.0);
        assert_eq!(d.grade, Grade::F);
        assert_eq!(d.summary, SUMMARY_WEAK);
    }

    #[test]
    fn test_empty_history_reports_zero_percent() {
        let d = summarize(Profile::Narrative, &scenario(5), &[], 0, &mut StdRng::seed_from_u64(1));
        assert_eq!(d.max_score, 0);
        assert_eq!(d.percentage, 0.0);
        assert!(d.percentage.is_finite());
        assert!(d.timeline.is_empty());
    }

    #[test]
    fn test_action_lines_truncate_at_80_chars() {
        let long = "x".repeat(120);
        let history = vec![entry(0, Quality::Neutral, &long, 7), entry(1, Quality::Good, "short", 10)];
        let d = summarize(Profile::Narrative, &scenario(5), &history, 17, &mut StdRng::seed_from_u64(2));
        assert_eq!(d.actions_summary[0], format!("○ Phase 1: {}...", "x".repeat(80)));
        assert_eq!(d.actions_summary[1], "✓ Phase 2: short...");
    }

    #[test]
    fn test_timeline_follows_history() {
        let history = vec![entry(0, Quality::Good, "a", 10), entry(1, Quality::Bad, "b", -5)];
        let d = summarize(Profile::Narrative, &scenario(5), &history, 5, &mut StdRng::seed_from_u64(3));
        assert_eq!(d.timeline.len(), 2);
        assert_eq!(d.timeline[1].stage_number, 2);
        assert_eq!(d.timeline[1].stage_title, "Phase 2");
        assert_eq!(d.timeline[1].quality, Quality::Bad);
        assert_eq!(d.timeline[1].score_change, -5);
    }

    #[test]
    fn test_lessons_sampled_without_replacement() {
        for seed in 0..32 {
            let n = curated_narrative(50.0, &mut StdRng::seed_from_u64(seed));
            assert!((3..=5).contains(&n.key_lessons.len()));
            assert!((3..=5).contains(&n.recommendations.len()));
            let mut dedup = n.key_lessons.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), n.key_lessons.len());
            assert!(n.key_lessons.iter().all(|l| LESSONS.contains(&l.as_str())));
        }
    }

    #[test]
    fn test_law_firm_profile_layers_compliance() {
        let history = vec![entry(0, Quality::Bad, "ignore it", -5)];
        let d = summarize(Profile::LawFirm, &scenario(5), &history, -5, &mut StdRng::seed_from_u64(4));
        let analysis = d.compliance_analysis.expect("law firm debrief carries compliance");
        // phishing label pulls in the personal information requirement
        assert!(analysis.requirements.iter().any(|r| r.name.contains("501.171")));
    }
}
