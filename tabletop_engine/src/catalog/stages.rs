//! Stage archetypes and their good/neutral/bad action pools.

use super::{StageArchetype, StageKind};

// ── Standard incident-response pools ───────────────────────────────

pub(crate) static STANDARD_STAGES: [StageArchetype; 5] = [
    StageArchetype {
        kind: StageKind::Detection,
        title: "Detection & Initial Assessment",
        good: &[
            "Activate incident response protocol - assemble cross-functional IR team immediately",
            "Implement evidence preservation procedures - capture logs, memory dumps, and forensic artifacts",
            "Execute controlled isolation of affected systems while maintaining forensic integrity",
        ],
        neutral: &[
            "Continue monitoring for additional data points before escalation",
            "Email IT department requesting investigation without formal escalation",
            "Perform system restart to determine if issue self-resolves",
        ],
        bad: &[
            "Dismiss alerts as false positive - continue normal operations",
            "Delete suspicious artifacts to clear disk space",
            "Defer response until standard business hours",
        ],
    },
    StageArchetype {
        kind: StageKind::Containment,
        title: "Containment & Threat Isolation",
        good: &[
            "Implement network segmentation to isolate compromised systems while preserving business continuity",
            "Execute credential rotation across all administrative accounts - enforce MFA enterprise-wide",
            "Coordinate with legal counsel and communications team on stakeholder notification strategy",
        ],
        neutral: &[
            "Execute complete network shutdown as precautionary measure",
            "Reset credentials for identified compromised accounts only",
            "Issue generic \"technical difficulties\" statement to stakeholders",
        ],
        bad: &[
            "Maintain normal operations to avoid service disruption",
            "Authorize ransom payment for immediate service restoration",
            "Suppress incident details from executive leadership",
        ],
    },
    StageArchetype {
        kind: StageKind::Eradication,
        title: "Eradication & Root Cause Analysis",
        good: &[
            "Conduct comprehensive forensic analysis - identify attack vectors, scope, and threat actor TTPs",
            "Eliminate threat actor persistence mechanisms and remediate identified vulnerabilities",
            "Develop evidence-based recovery strategy with input from all stakeholder groups",
        ],
        neutral: &[
            "Restore from backup without conducting root cause analysis",
            "Deploy security patches while bypassing forensic investigation",
            "Prioritize rapid service restoration over thorough remediation",
        ],
        bad: &[
            "Restore systems immediately without removing attacker foothold",
            "Eliminate forensic analysis to reduce incident costs",
            "Attribute responsibility to third-party vendors without corrective action",
        ],
    },
    StageArchetype {
        kind: StageKind::Recovery,
        title: "Recovery & Service Restoration",
        good: &[
            "Execute phased restoration with validation checkpoints at each stage",
            "Deploy enhanced monitoring, detection, and response capabilities",
            "Maintain continuous coordination with stakeholders throughout restoration process",
        ],
        neutral: &[
            "Restore all systems simultaneously to minimize downtime",
            "Resume normal operations without implementing additional safeguards",
            "Initiate services before completing comprehensive security validation",
        ],
        bad: &[
            "Restore from potentially compromised backups without integrity verification",
            "Bypass testing protocols for restored infrastructure",
            "Declare full operational capability while critical vulnerabilities remain unaddressed",
        ],
    },
    StageArchetype {
        kind: StageKind::PostIncident,
        title: "Post-Incident Analysis & Enhancement",
        good: &[
            "Facilitate comprehensive after-action review with all stakeholder groups",
            "Update incident response procedures based on lessons learned",
            "Implement preventive controls addressing identified root causes and systemic weaknesses",
        ],
        neutral: &[
            "Distribute incident summary via email to IT staff",
            "Schedule security posture review for future date TBD",
            "Implement tactical improvements while deferring strategic lessons learned",
        ],
        bad: &[
            "Close incident without formal documentation or review",
            "Avoid documentation to minimize organizational liability",
            "Focus on individual accountability rather than systemic improvement",
        ],
    },
];

// ── Law practice pools ─────────────────────────────────────────────

pub(crate) static LAW_FIRM_STAGES: [StageArchetype; 5] = [
    StageArchetype {
        kind: StageKind::Detection,
        title: "Detection & Initial Assessment",
        good: &[
            "Escalate to the managing partner and activate the firm's incident response plan immediately",
            "Preserve logs and affected devices under the direction of outside counsel to protect privilege",
            "Isolate affected workstations while the IT coordinator captures forensic images",
        ],
        neutral: &[
            "Ask the IT vendor to look into the alerts during the next scheduled visit",
            "Continue monitoring the document management system before escalating",
            "Restart the file server to see whether access returns",
        ],
        bad: &[
            "Treat the alerts as a vendor glitch and keep billing as usual",
            "Delete the suspicious files so associates can keep working",
            "Wait until after the filing deadline to look at the problem",
        ],
    },
    StageArchetype {
        kind: StageKind::Containment,
        title: "Containment & Client Protection",
        good: &[
            "Have the senior partner coordinate client notification strategy with outside breach counsel",
            "Rotate all firm credentials, enforce MFA, and freeze trust account transfers pending verification",
            "Segment the network to protect the document management system and trust accounting software",
        ],
        neutral: &[
            "Shut down every firm system, including e-filing access, as a precaution",
            "Reset passwords only for the accounts known to be compromised",
            "Tell callers the firm is experiencing technical difficulties",
        ],
        bad: &[
            "Keep the client portal online to avoid missing deadlines",
            "Pay the ransom from the operating account to restore files quickly",
            "Keep the incident from the partners until the scope is clear",
        ],
    },
    StageArchetype {
        kind: StageKind::Eradication,
        title: "Eradication & Privileged Investigation",
        good: &[
            "Engage a forensic firm through counsel so findings remain protected by privilege",
            "Remove attacker persistence and patch the exploited vulnerabilities across firm systems",
            "Map exactly which client matters and files were accessed to scope notification duties",
        ],
        neutral: &[
            "Restore case files from backup without determining how the attacker got in",
            "Apply vendor patches without preserving forensic evidence",
            "Focus on getting attorneys back to billable work before finishing cleanup",
        ],
        bad: &[
            "Restore systems immediately while the attacker may still have access",
            "Skip forensic analysis to keep incident costs down",
            "Blame the IT vendor and take no corrective action",
        ],
    },
    StageArchetype {
        kind: StageKind::Recovery,
        title: "Recovery & Client Communication",
        good: &[
            "Restore systems in phases, validating trust accounting and case management first",
            "Send client notification letters reviewed by breach counsel within statutory deadlines",
            "Deploy enhanced monitoring and keep the cyber insurance carrier updated throughout recovery",
        ],
        neutral: &[
            "Bring every system back online at once to minimize downtime",
            "Resume normal operations without additional safeguards",
            "Notify only the clients who ask about the outage",
        ],
        bad: &[
            "Restore from backups that have not been checked for compromise",
            "Skip testing the trust accounting system before reopening",
            "Announce full recovery while known vulnerabilities remain open",
        ],
    },
    StageArchetype {
        kind: StageKind::PostIncident,
        title: "Post-Incident Review & Ethics Compliance",
        good: &[
            "Conduct a privileged after-action review led by the managing partner",
            "Update the firm's written information security program and staff training",
            "Document reasonable-care measures to satisfy Bar and insurer expectations",
        ],
        neutral: &[
            "Circulate a short incident summary to firm staff by email",
            "Schedule a security review for sometime next year",
            "Make quick technical fixes and defer policy changes",
        ],
        bad: &[
            "Close the matter without documentation or review",
            "Avoid written records to limit malpractice exposure",
            "Discipline the employee who clicked the link and move on",
        ],
    },
];
