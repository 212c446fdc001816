//! Team role catalogs and stage decision-maker assignments.

use super::{RoleTemplate, StageKind};

pub(crate) static SOLO_ROLE: RoleTemplate = RoleTemplate {
    title: "Solo Practitioner",
    priority: 1,
    description: "Owns every response responsibility: coordination, technical containment, communications, and compliance",
};

pub(crate) static INCIDENT_RESPONSE_ROLES: [RoleTemplate; 7] = [
    RoleTemplate {
        title: "Incident Commander",
        priority: 1,
        description: "Overall incident coordination, decision authority, and executive briefings",
    },
    RoleTemplate {
        title: "Technical Lead",
        priority: 2,
        description: "Technical assessment, containment actions, and system restoration",
    },
    RoleTemplate {
        title: "Communications Lead",
        priority: 3,
        description: "Stakeholder messaging, media inquiries, and internal updates",
    },
    RoleTemplate {
        title: "Legal & Compliance Liaison",
        priority: 4,
        description: "Regulatory notification obligations, counsel coordination, and evidence handling",
    },
    RoleTemplate {
        title: "Forensics Analyst",
        priority: 5,
        description: "Evidence collection, root cause analysis, and threat actor attribution",
    },
    RoleTemplate {
        title: "Executive Sponsor",
        priority: 6,
        description: "Budget approval, risk acceptance, and board-level reporting",
    },
    RoleTemplate {
        title: "Scribe",
        priority: 7,
        description: "Timeline documentation, decision log, and action item tracking",
    },
];

pub(crate) static LAW_FIRM_ROLES: [RoleTemplate; 7] = [
    RoleTemplate {
        title: "Managing Partner",
        priority: 1,
        description: "Overall incident coordination, firm leadership, and strategic decisions",
    },
    RoleTemplate {
        title: "Senior Partner",
        priority: 2,
        description: "Client relations, risk assessment, and regulatory compliance oversight",
    },
    RoleTemplate {
        title: "Office Administrator",
        priority: 3,
        description: "Operational coordination, vendor management, and staff communications",
    },
    RoleTemplate {
        title: "IT Coordinator",
        priority: 4,
        description: "Technical assessment, system isolation, and forensic evidence preservation",
    },
    RoleTemplate {
        title: "Trust Account Administrator",
        priority: 5,
        description: "Financial security, trust account protection, and audit compliance",
    },
    RoleTemplate {
        title: "Senior Associate",
        priority: 6,
        description: "Case impact assessment and client communication support",
    },
    RoleTemplate {
        title: "Office Manager",
        priority: 7,
        description: "Staff coordination, document security, and operational continuity",
    },
];

pub(crate) fn incident_response_decision_maker(stage: StageKind) -> &'static str {
    match stage {
        StageKind::Detection => "Incident Commander",
        StageKind::Containment => "Technical Lead",
        StageKind::Eradication => "Forensics Analyst",
        StageKind::Recovery => "Technical Lead",
        StageKind::PostIncident => "Executive Sponsor",
    }
}

pub(crate) fn law_firm_decision_maker(stage: StageKind) -> &'static str {
    match stage {
        StageKind::Detection => "IT Coordinator",
        StageKind::Containment => "Managing Partner",
        StageKind::Eradication => "IT Coordinator",
        StageKind::Recovery => "Office Administrator",
        StageKind::PostIncident => "Senior Partner",
    }
}
