//! Tabletop Engine: Compliance Analyzer
//!
//! Regulatory and ethical overlay for the law-firm profile. Keyword
//! checks are case-insensitive substring matches.

use crate::domain::{Choice, ComplianceAnalysis, ComplianceRequirement, Quality, RiskLevel};

const ANALYSIS_TITLE: &str = "Legal Practice Compliance & Ethics Analysis";

/// Incident labels that pull in breach notification duties.
const BREACH_CLASS_LABELS: &[&str] = &["breach", "ransomware", "phishing"];

const PERSONAL_INFORMATION_KEYWORDS: &[&str] = &[
    "client data",
    "personal information",
    "ssn",
    "financial",
    "breach",
    "exfiltration",
];

const HEALTH_INFORMATION_KEYWORDS: &[&str] =
    &["medical", "health", "hipaa", "phi", "injury", "disability"];

/// Phrases showing the response engaged firm leadership on confidentiality.
const CONFIDENTIALITY_PHRASES: &[&str] = &[
    "senior partner",
    "managing partner",
    "privilege",
    "client notification",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Implement formal incident response plan compliant with Florida Bar cybersecurity guidelines",
    "Conduct regular security assessments and penetration testing to meet duty of reasonable care",
    "Maintain cyber liability insurance with appropriate coverage limits for law firm operations",
    "Establish clear procedures for preserving attorney-client privilege during incident investigations",
];

const BREACH_ETHICS: [&str; 4] = [
    "Designate senior partner to oversee incident response to maintain attorney-client privilege",
    "Document all response actions with privilege considerations in mind",
    "Consider engaging outside cybersecurity counsel if investigation requires privilege protection",
    "Ensure response efforts demonstrate reasonable care in protecting client information",
];

const CONFIDENTIALITY_GAPS: [&str; 2] = [
    "Response did not adequately address attorney confidentiality obligations",
    "Failed to involve senior firm leadership in privilege protection decisions",
];

/// Scenario text the keyword checks run against.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioDetails<'a> {
    pub description: &'a str,
    pub context: &'a str,
}

pub fn analyze(incident_label: &str, details: ScenarioDetails<'_>, choices: &[Choice]) -> ComplianceAnalysis {
    let label = incident_label.to_lowercase();
    let text = format!("{} {}", details.description, details.context).to_lowercase();
    let breach_class = contains_any(&label, BREACH_CLASS_LABELS);

    let mut requirements = vec![confidentiality_duty()];
    if breach_class {
        requirements.push(personal_information_breach(contains_any(&text, PERSONAL_INFORMATION_KEYWORDS)));
    }
    requirements.push(client_notification_duty());
    if contains_any(&text, HEALTH_INFORMATION_KEYWORDS) {
        requirements.push(health_information_breach());
    }
    requirements.push(cyber_insurance_notice());

    let mut ethical_considerations: Vec<String> = Vec::new();
    if breach_class {
        ethical_considerations.extend(BREACH_ETHICS.iter().map(|s| s.to_string()));
    }
    let addressed_confidentiality = choices
        .iter()
        .any(|c| contains_any(&c.text.to_lowercase(), CONFIDENTIALITY_PHRASES));
    if !addressed_confidentiality {
        ethical_considerations.extend(CONFIDENTIALITY_GAPS.iter().map(|s| s.to_string()));
    }

    let risk_level = determine_risk_level(&requirements, choices);

    ComplianceAnalysis {
        title: ANALYSIS_TITLE.to_string(),
        requirements,
        recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        ethical_considerations,
        risk_level,
    }
}

/// First match wins over T = triggered requirement count.
pub fn determine_risk_level(requirements: &[ComplianceRequirement], choices: &[Choice]) -> RiskLevel {
    let triggered = requirements.iter().filter(|r| r.triggered).count();
    let any_good = choices.iter().any(|c| c.quality == Quality::Good);
    let any_bad = choices.iter().any(|c| c.quality == Quality::Bad);

    if triggered >= 3 && any_bad {
        RiskLevel::Critical
    } else if triggered >= 2 && !any_good {
        RiskLevel::High
    } else if triggered >= 2 || any_bad {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn requirement(
    name: &str,
    description: &str,
    timeframe: Option<&str>,
    penalties: Option<&str>,
    triggered: bool,
    details: &[&str],
) -> ComplianceRequirement {
    ComplianceRequirement {
        name: name.to_string(),
        description: description.to_string(),
        timeframe: timeframe.map(str::to_string),
        penalties: penalties.map(str::to_string),
        triggered,
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

fn confidentiality_duty() -> ComplianceRequirement {
    requirement(
        "Florida Rules of Professional Conduct Rule 4-1.6 (Confidentiality)",
        "Lawyers must make reasonable efforts to prevent unauthorized disclosure of client information",
        None,
        None,
        true,
        &[
            "Attorney has duty to protect all client confidences and privileged information",
            "Must implement reasonable safeguards for electronic data and communications",
            "Failure to protect client information can result in disciplinary action or malpractice claims",
        ],
    )
}

fn personal_information_breach(triggered: bool) -> ComplianceRequirement {
    requirement(
        "Florida Statute 501.171 (Florida Information Protection Act)",
        "Notification requirements for personal information breaches",
        Some("30 days after confirmation of breach"),
        Some("Up to $500,000 for violations"),
        triggered,
        &[
            "Must notify affected individuals without unreasonable delay, no later than 30 days",
            "If 500+ Floridians affected, must notify FL Dept. of Legal Affairs within 30 days",
            "Notice must include breach description, types of information compromised, remedial actions",
        ],
    )
}

fn client_notification_duty() -> ComplianceRequirement {
    requirement(
        "ABA Model Rule 1.4 / Client Communication Duties",
        "Duty to notify clients when their confidential information may be compromised",
        Some("Prompt notification required"),
        None,
        true,
        &[
            "ABA Formal Opinion 483 requires notification of current clients about material data breaches",
            "Clients must be kept reasonably informed about matters affecting their representation",
            "Failure to notify can violate ethical duties and lead to malpractice liability",
        ],
    )
}

fn health_information_breach() -> ComplianceRequirement {
    requirement(
        "HIPAA Breach Notification Rule (Business Associate)",
        "Notification requirements when handling protected health information (PHI)",
        Some("60 days after breach discovery"),
        Some("HHS investigations and potential fines"),
        true,
        &[
            "As business associate, must notify covered entity within 60 days of breach discovery",
            "Covered entity must then notify affected patients within 60 days",
            "Applies to medical records in personal injury or VA disability cases",
        ],
    )
}

fn cyber_insurance_notice() -> ComplianceRequirement {
    requirement(
        "Cyber Liability Insurance Notification",
        "Many cyber policies require immediate incident notification",
        Some("Immediate or within 24-72 hours"),
        None,
        true,
        &[
            "Review policy terms for specific notification requirements",
            "Early notification preserves coverage and provides access to incident response resources",
            "Insurance carrier may provide legal counsel and forensic support",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: ScenarioDetails<'static> = ScenarioDetails {
        description: "Systems encrypted overnight",
        context: "Regional office",
    };

    fn choice(text: &str, quality: Quality) -> Choice {
        Choice {
            text: text.to_string(),
            quality,
        }
    }

    fn names(a: &ComplianceAnalysis) -> Vec<&str> {
        a.requirements.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_non_breach_incident_gets_baseline_duties() {
        let a = analyze("ddos", PLAIN, &[]);
        assert_eq!(a.requirements.len(), 3);
        assert!(a.requirements.iter().all(|r| r.triggered));
        assert!(names(&a)[0].contains("Confidentiality"));
        assert_eq!(a.recommendations.len(), 4);
        // No breach-class ethics, only the confidentiality gap entries.
        assert_eq!(a.ethical_considerations, CONFIDENTIALITY_GAPS.to_vec());
    }

    #[test]
    fn test_breach_label_adds_personal_information_requirement() {
        let a = analyze("ransomware", PLAIN, &[]);
        let fipa = a
            .requirements
            .iter()
            .find(|r| r.name.contains("501.171"))
            .expect("FIPA requirement present");
        assert!(!fipa.triggered);

        let leaky = ScenarioDetails {
            description: "Client data copied to an external host",
            context: "",
        };
        let a = analyze("data breach", leaky, &[]);
        assert!(a.requirements.iter().any(|r| r.name.contains("501.171") && r.triggered));
        assert_eq!(a.ethical_considerations.len(), BREACH_ETHICS.len() + CONFIDENTIALITY_GAPS.len());
    }

    #[test]
    fn test_health_keywords_add_hipaa() {
        let details = ScenarioDetails {
            description: "Medical records for personal injury matters",
            context: "",
        };
        let a = analyze("insider", details, &[]);
        assert!(names(&a).iter().any(|n| n.starts_with("HIPAA")));
    }

    #[test]
    fn test_confidentiality_phrases_are_case_insensitive() {
        let handled = [choice("Brief the Managing Partner on privilege", Quality::Good)];
        let a = analyze("malware", PLAIN, &handled);
        assert!(a.ethical_considerations.is_empty());
    }

    #[test]
    fn test_risk_table() {
        let one = [confidentiality_duty()];
        let two = [confidentiality_duty(), cyber_insurance_notice()];
        let three = [confidentiality_duty(), client_notification_duty(), cyber_insurance_notice()];
        let good = choice("a", Quality::Good);
        let neutral = choice("b", Quality::Neutral);
        let bad = choice("c", Quality::Bad);

        assert_eq!(determine_risk_level(&three, &[good.clone(), bad.clone()]), RiskLevel::Critical);
        assert_eq!(determine_risk_level(&three, &[good.clone()]), RiskLevel::Medium);
        assert_eq!(determine_risk_level(&two, &[neutral.clone()]), RiskLevel::High);
        assert_eq!(determine_risk_level(&two, &[good.clone()]), RiskLevel::Medium);
        assert_eq!(determine_risk_level(&one, &[bad]), RiskLevel::Medium);
        assert_eq!(determine_risk_level(&one, &[good, neutral]), RiskLevel::Low);
    }

    #[test]
    fn test_adding_bad_choice_never_lowers_risk() {
        let labels = ["ransomware", "phishing", "data breach", "insider", "ddos", "bec", "malware"];
        let bases: Vec<Vec<Choice>> = vec![
            vec![],
            vec![choice("x", Quality::Good)],
            vec![choice("x", Quality::Neutral)],
            vec![choice("x", Quality::Good), choice("y", Quality::Neutral)],
            vec![choice("x", Quality::Bad)],
        ];
        for label in labels {
            for base in &bases {
                let before = analyze(label, PLAIN, base).risk_level;
                let mut with_bad = base.clone();
                with_bad.push(choice("z", Quality::Bad));
                let after = analyze(label, PLAIN, &with_bad).risk_level;
                assert!(after >= before, "{label}: {before:?} -> {after:?}");
            }
        }
    }
}
