//! Patient registry rows.
//!
//! One row per patient with the primary caregiver, the overall link state and a freshly
//! computed integrity report.

use crate::integrity::{evaluate, IntegrityReport};
use memoraid_types::{filled, Level, LinkedEntity, RecordId, User};
use serde::Serialize;

const PLACEHOLDER: &str = "—";

/// Aggregate approval state of a patient's care links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkState {
    NoLinks,
    Connected,
    Pending,
}

impl LinkState {
    pub fn label(self) -> &'static str {
        match self {
            LinkState::NoLinks => "No Links",
            LinkState::Connected => "Connected",
            LinkState::Pending => "Pending",
        }
    }
}

/// First linked entity at the primary level, if any.
pub fn primary_caregiver(user: &User) -> Option<&LinkedEntity> {
    user.links_at(Level::Primary).next()
}

pub fn link_state(user: &User) -> LinkState {
    let links = &user.linked_entities_list;
    if links.is_empty() {
        LinkState::NoLinks
    } else if links.iter().all(|l| l.is_approved) {
        LinkState::Connected
    } else {
        LinkState::Pending
    }
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_condition(condition: &Option<String>) -> String {
    match filled(condition) {
        None => PLACEHOLDER.to_string(),
        Some("alzheimers") => "Alzheimer's".to_string(),
        Some(other) => capitalise(other),
    }
}

pub fn format_stage(stage: &Option<String>) -> String {
    filled(stage).map_or_else(|| PLACEHOLDER.to_string(), capitalise)
}

/// One line of the patient registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistryRow {
    pub patient_id: RecordId,
    pub unique_id: String,
    pub full_name: String,
    pub email: String,
    pub condition: String,
    pub stage: String,
    pub primary_caregiver: Option<String>,
    pub primary_caregiver_unique_id: Option<String>,
    pub link_state: LinkState,
    pub integrity: IntegrityReport,
}

impl RegistryRow {
    pub fn from_user(user: &User) -> Self {
        let profile = user.patient_profile.as_ref();
        let primary = primary_caregiver(user);

        Self {
            patient_id: user.id,
            unique_id: filled(&user.unique_id).unwrap_or(PLACEHOLDER).to_string(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            condition: format_condition(&profile.and_then(|p| p.condition.clone())),
            stage: format_stage(&profile.and_then(|p| p.stage.clone())),
            primary_caregiver: primary.map(|p| p.name.clone().unwrap_or_default()),
            primary_caregiver_unique_id: primary.and_then(|p| p.unique_id.clone()),
            link_state: link_state(user),
            integrity: evaluate(user),
        }
    }
}
