//! SOS and missed-routine escalations raised for patients.

use crate::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Sos,
    MissedTask,
    #[serde(other)]
    Other,
}

impl AlertKind {
    /// Headline shown to operators for this kind of escalation.
    pub fn headline(self) -> &'static str {
        match self {
            AlertKind::Sos => "SOS EMERGENCY",
            _ => "MISSED ROUTINE ESCALATION",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Handled,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub status: AlertStatus,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub handled_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }

    /// Severity label: active SOS alerts are critical, other active alerts high priority.
    pub fn severity(&self) -> &'static str {
        match (self.status, self.kind) {
            (AlertStatus::Active, AlertKind::Sos) => "Critical",
            (AlertStatus::Active, _) => "High Priority",
            _ => "Resolved",
        }
    }
}
