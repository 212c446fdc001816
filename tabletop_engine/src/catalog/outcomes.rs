//! Feedback and consequence text keyed by choice quality.

use crate::domain::Quality;

pub(crate) fn feedback_pool(quality: Quality) -> &'static [&'static str] {
    match quality {
        Quality::Good => FEEDBACK_GOOD,
        Quality::Neutral => FEEDBACK_NEUTRAL,
        Quality::Bad => FEEDBACK_BAD,
    }
}

pub(crate) fn consequence_pool(quality: Quality) -> &'static [&'static str] {
    match quality {
        Quality::Good => CONSEQUENCES_GOOD,
        Quality::Neutral => CONSEQUENCES_NEUTRAL,
        Quality::Bad => CONSEQUENCES_BAD,
    }
}

static FEEDBACK_GOOD: &[&str] = &[
    "Exemplary decision-making. Aligns with NIST incident response framework best practices.",
    "Strategic choice demonstrating mature security operations mindset. Business continuity preserved.",
    "Professional response. This approach reflects enterprise-grade security thinking.",
    "Sound tactical decision considering both immediate containment and long-term organizational impact.",
    "Excellent judgment. Optimal balance between urgency and methodical execution.",
];

static FEEDBACK_NEUTRAL: &[&str] = &[
    "Acceptable response within operational constraints. More optimal alternatives exist.",
    "Decision addresses immediate concerns but may introduce downstream complications.",
    "Reasonable judgment under pressure. Not optimal from strategic perspective.",
    "Tactical objective met. Strategic implications require additional consideration.",
    "Fair assessment. This approach may create operational challenges in subsequent phases.",
];

static FEEDBACK_BAD: &[&str] = &[
    "This decision significantly compromises incident response effectiveness.",
    "Problematic choice. Fundamental deviation from incident response principles.",
    "This approach will likely escalate incident severity and organizational impact.",
    "Concerning decision with potential legal, compliance, and reputational ramifications.",
    "Critical judgment error. This provides adversary with tactical advantage.",
    "Severe mistake. This decision will require significant remediation and damage control.",
];

static CONSEQUENCES_GOOD: &[&str] = &[
    "Decisive action has effectively limited incident scope. Team demonstrates strong situational awareness.",
    "Executive leadership acknowledges transparent communication. Stakeholder confidence maintained.",
    "Evidence preservation protocols properly executed. Forensic analysis and legal proceedings supported.",
    "Systematic approach yielding comprehensive visibility into incident parameters and threat landscape.",
    "Proactive measures successfully prevented lateral movement. Incident contained within acceptable parameters.",
];

static CONSEQUENCES_NEUTRAL: &[&str] = &[
    "Situation partially stabilized. Several critical gaps require immediate attention.",
    "Approach demonstrates reasonable judgment but overlooks key strategic considerations.",
    "Team managing incident within acceptable parameters. Enhanced coordination recommended.",
    "Progress documented. Alternative approaches may have yielded superior outcomes.",
    "Stakeholder groups requesting clarification on response strategy and decision rationale.",
];

static CONSEQUENCES_BAD: &[&str] = &[
    "Incident scope expanding. Additional infrastructure now compromised. Threat actor demonstrating persistence.",
    "Critical forensic evidence destroyed or contaminated. Investigation significantly impaired.",
    "Stakeholder confusion and concern escalating. Communication breakdown evident.",
    "Threat actor exploiting response delays to establish additional footholds.",
    "Legal and compliance teams identifying potential regulatory violations and liability exposure.",
    "Recovery timeline extended 48-72 hours. Business impact assessment being revised upward.",
];
