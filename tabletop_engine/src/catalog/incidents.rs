//! Incident archetypes and hint keyword routing.

use super::{IncidentArchetype, IncidentKind};

pub(crate) static RANSOMWARE: IncidentArchetype = IncidentArchetype {
    kind: IncidentKind::Ransomware,
    title: "Enterprise Ransomware Attack",
    description: "Advanced persistent threat group has deployed ransomware across critical infrastructure.",
    context: "District-wide security incident affecting 15,000 students and 2,000 staff members. Monday, 06:30 hours.",
    initial_indicators: &[
        "Multiple servers encrypted - file systems compromised",
        "Ransom demand: $500,000 Bitcoin within 72 hours",
        "Student Information System offline - no data access",
        "Email infrastructure unavailable",
    ],
};

pub(crate) static PHISHING: IncidentArchetype = IncidentArchetype {
    kind: IncidentKind::Phishing,
    title: "Targeted Credential Harvesting Campaign",
    description: "Sophisticated phishing operation targeting organizational credentials and sensitive access.",
    context: "Security operations center has detected coordinated phishing attempts. Multiple authentication compromises confirmed.",
    initial_indicators: &[
        "HR escalation: 12+ reports of suspicious communications",
        "Credential harvesting confirmed - 8 successful compromises",
        "Anomalous authentication attempts from hostile nation-state IPs",
        "Active account takeover attempts in progress",
    ],
};

pub(crate) static DATA_BREACH: IncidentArchetype = IncidentArchetype {
    kind: IncidentKind::DataBreach,
    title: "Unauthorized Data Exfiltration",
    description: "Unauthorized access to protected student records and personally identifiable information detected.",
    context: "Enterprise database containing FERPA-protected records, SSNs, and medical data shows signs of compromise.",
    initial_indicators: &[
        "Database audit logs: unauthorized query patterns detected",
        "Mass data export executed at 02:00 hours - 50GB transferred",
        "Access origin: international IP address with no business justification",
        "Protected student records database integrity compromised",
    ],
};

pub(crate) static INSIDER: IncidentArchetype = IncidentArchetype {
    kind: IncidentKind::Insider,
    title: "Insider Threat - Privilege Abuse",
    description: "Former privileged user attempting unauthorized access to critical systems post-termination.",
    context: "Recently separated system administrator exhibiting suspicious activity patterns suggesting retained access.",
    initial_indicators: &[
        "Terminated employee credentials still active - deprovisioning failure",
        "After-hours system access from unusual location",
        "Privilege escalation attempts flagged by security monitoring",
        "Sensitive files copied to unauthorized external storage",
    ],
};

pub(crate) static DDOS: IncidentArchetype = IncidentArchetype {
    kind: IncidentKind::Ddos,
    title: "Distributed Denial of Service Attack",
    description: "Large-scale DDoS attack disrupting public-facing services during critical enrollment period.",
    context: "Mission-critical enrollment window. Online services experiencing complete service degradation.",
    initial_indicators: &[
        "Website performance degraded to inoperability",
        "Traffic analysis: 10Gbps+ volumetric attack from botnet",
        "Legitimate user access completely blocked",
        "Enrollment deadline: T-minus 6 hours",
    ],
};

pub(crate) static BEC: IncidentArchetype = IncidentArchetype {
    kind: IncidentKind::Bec,
    title: "Business Email Compromise (BEC)",
    description: "Sophisticated email fraud targeting financial transactions and wire transfers.",
    context: "Finance department flagged suspicious wire transfer requests. Attackers impersonating executives.",
    initial_indicators: &[
        "CFO received fraudulent wire transfer request appearing to come from Superintendent",
        "Email header analysis reveals external origin with display name spoofing",
        "Three wire transfer requests totaling $487,000 pending approval",
        "Similar phishing attempts detected targeting accounts payable staff",
    ],
};

pub(crate) static MALWARE: IncidentArchetype = IncidentArchetype {
    kind: IncidentKind::Malware,
    title: "Malware / Spyware Infection",
    description: "Advanced malware deployment with potential data exfiltration and system compromise.",
    context: "Endpoint detection systems flagged suspicious process behavior. Unknown binary executing across systems.",
    initial_indicators: &[
        "EDR alerts: unknown malware detected on 23 endpoints",
        "Network traffic analysis shows data exfiltration to command-and-control servers",
        "Keylogger functionality detected - credential theft suspected",
        "Lateral movement indicators - malware spreading via shared drives",
    ],
};

/// Ordered keyword groups; the first group with a match wins.
pub(crate) const HINT_KEYWORDS: &[(IncidentKind, &[&str])] = &[
    (IncidentKind::Ransomware, &["ransomware", "ransom"]),
    (IncidentKind::Phishing, &["phish"]),
    (IncidentKind::DataBreach, &["breach", "data"]),
    (IncidentKind::Insider, &["insider"]),
    (IncidentKind::Ddos, &["ddos", "dos", "denial"]),
    (IncidentKind::Bec, &["bec", "business email", "wire transfer"]),
    (IncidentKind::Malware, &["malware", "spyware", "virus"]),
];

/// Law-practice framing of each incident, used in place of the
/// archetype's organizational context.
pub(crate) fn law_firm_context(kind: IncidentKind) -> &'static str {
    match kind {
        IncidentKind::Ransomware => "Client contract files, case documents, and trust account records encrypted. Firm operations severely impacted during critical filing periods.",
        IncidentKind::Phishing => "Targeted attack on firm personnel with sophisticated emails appearing to be from courts, opposing counsel, or clients.",
        IncidentKind::DataBreach => "Unauthorized access to client files containing confidential legal documents, personal information, and privileged communications.",
        IncidentKind::Insider => "Current or former employee misusing access to client information, potentially violating confidentiality agreements and ethical rules.",
        IncidentKind::Ddos => "Law firm website and client portal overwhelmed during crucial court filing deadlines, impacting service delivery.",
        IncidentKind::Bec => "Email account compromise targeting client payments, trust account transfers, or settlement fund diversions.",
        IncidentKind::Malware => "Malicious software detected on systems handling sensitive client data, with potential for credential theft and data exfiltration.",
    }
}
