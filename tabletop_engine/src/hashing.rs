//! Tabletop Engine: Scenario Fingerprint
//!
//! Canonical serialization + SHA-256 of a scenario, so runs with the
//! same seed can be compared across processes.
//!
//! Rules:
//!   - `catalog_version` is the first field
//!   - fixed field order at every level, absent optionals omitted
//!   - stages in ordinal order, choices in presented order
//!   - roles sorted by (priority, title)
//!   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::{Scenario, Stage, TeamRole};
use crate::CATALOG_VERSION;

/// Canonical UTF-8 JSON bytes of a scenario.
pub fn canonical_serialize(scenario: &Scenario) -> Vec<u8> {
    build_canonical_value(scenario).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization, lowercase hex.
pub fn canonical_hash(scenario: &Scenario) -> String {
    let digest = Sha256::digest(canonical_serialize(scenario));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn build_canonical_value(scenario: &Scenario) -> Value {
    let mut root = Map::new();
    root.insert("catalog_version".to_string(), Value::from(CATALOG_VERSION));
    if let Some(kind) = scenario.incident {
        root.insert("incident".to_string(), Value::from(kind.as_str()));
    }
    root.insert("title".to_string(), Value::from(scenario.title.as_str()));
    root.insert("description".to_string(), Value::from(scenario.description.as_str()));
    root.insert("context".to_string(), Value::from(scenario.context.as_str()));
    root.insert(
        "stages".to_string(),
        Value::Array(scenario.stages.iter().map(stage_value).collect()),
    );

    let mut roles: Vec<&TeamRole> = scenario.roles.iter().collect();
    roles.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.title.cmp(&b.title)));
    let roles = roles
        .into_iter()
        .map(|r| {
            let mut m = Map::new();
            m.insert("title".to_string(), Value::from(r.title.as_str()));
            m.insert("priority".to_string(), Value::from(r.priority));
            m.insert("description".to_string(), Value::from(r.description.as_str()));
            Value::Object(m)
        })
        .collect();
    root.insert("roles".to_string(), Value::Array(roles));

    Value::Object(root)
}

fn stage_value(stage: &Stage) -> Value {
    let mut m = Map::new();
    m.insert("stage_number".to_string(), Value::from(stage.stage_number));
    m.insert("title".to_string(), Value::from(stage.title.as_str()));
    m.insert("narrative".to_string(), Value::from(stage.narrative.as_str()));
    if let Some(dm) = &stage.decision_maker {
        m.insert("decision_maker".to_string(), Value::from(dm.as_str()));
    }
    if let Some(urgency) = stage.urgency {
        m.insert("urgency".to_string(), Value::from(urgency.as_str()));
    }
    let choices = stage
        .choices
        .iter()
        .map(|c| {
            let mut cm = Map::new();
            cm.insert("text".to_string(), Value::from(c.text.as_str()));
            cm.insert("quality".to_string(), Value::from(c.quality.as_str()));
            Value::Object(cm)
        })
        .collect();
    m.insert("choices".to_string(), Value::Array(choices));
    Value::Object(m)
}
