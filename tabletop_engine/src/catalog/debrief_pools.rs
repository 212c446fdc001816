//! Summary templates, lessons and recommendations for the debrief.

pub(crate) const SUMMARY_STRONG: &str = "Your incident response team demonstrated enterprise-grade capabilities, adhering to NIST framework best practices throughout all phases. Strategic decision-making, clear stakeholder communication, and systematic approach to detection, containment, eradication, and recovery minimized organizational impact and positioned the organization for rapid restoration.";

pub(crate) const SUMMARY_MIXED: &str = "The response team managed critical aspects effectively while identifying areas for procedural enhancement. Several decisions introduced operational complexity, but core incident response objectives were achieved. This exercise validates baseline capabilities while highlighting opportunities for protocol refinement.";

pub(crate) const SUMMARY_WEAK: &str = "The incident response encountered significant operational challenges. Multiple critical judgment errors complicated containment and extended recovery timelines. This scenario underscores the importance of formalized IR procedures, regular training, and adherence to established security frameworks.";

pub(crate) static LESSONS: [&str; 12] = [
    "Rapid detection and immediate response activation directly correlate with reduced organizational impact",
    "Forensic evidence preservation is mission-critical for investigation, attribution, and legal proceedings",
    "Stakeholder communication requires coordinated strategy with legal counsel and executive leadership",
    "Network segmentation architecture limits threat actor lateral movement and reduces blast radius",
    "Validated backup procedures and tested recovery capabilities are fundamental resilience requirements",
    "Incident response playbooks must be documented, exercised regularly, and continuously improved",
    "Multi-factor authentication implementation significantly reduces credential-based attack surface",
    "Security awareness programs reduce human vulnerability to social engineering and phishing campaigns",
    "Ransom payment funds criminal enterprises and provides no guarantee of data recovery or decryption",
    "After-action reviews transform incident response into organizational learning and capability enhancement",
    "Legal and compliance integration early in incident lifecycle prevents regulatory exposure",
    "Root cause analysis through forensics prevents incident recurrence and identifies systemic weaknesses",
];

pub(crate) static RECOMMENDATIONS: [&str; 12] = [
    "Institute quarterly tabletop exercises simulating various threat scenarios and testing IR procedures",
    "Conduct comprehensive IR plan review - update procedures based on exercise findings and gaps identified",
    "Deploy enhanced monitoring, detection, and response (MDR) capabilities across critical infrastructure",
    "Execute organization-wide security awareness training focusing on phishing, social engineering, and threat recognition",
    "Establish formal escalation matrix with 24/7 contact procedures for IR team activation",
    "Validate backup integrity and recovery procedures - conduct restoration testing quarterly",
    "Document clear roles, responsibilities, and decision authority for all incident response personnel",
    "Implement endpoint detection and response (EDR) platform for real-time threat visibility",
    "Establish pre-incident relationships with external forensics firms, legal counsel, and cyber insurance carriers",
    "Architect network segmentation following zero-trust principles to limit adversary movement",
    "Develop communication playbooks for stakeholder groups: executives, board, employees, customers, regulators",
    "Commission third-party security architecture assessment focusing on defense-in-depth strategy",
];
