//! Support tickets submitted by caregivers.

use crate::{ParseVariantError, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    Open,
    InProgress,
    Resolved,
}

impl InquiryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryStatus::Open => "open",
            InquiryStatus::InProgress => "in_progress",
            InquiryStatus::Resolved => "resolved",
        }
    }

    /// Human label, e.g. "In Progress".
    pub fn label(self) -> &'static str {
        match self {
            InquiryStatus::Open => "Open",
            InquiryStatus::InProgress => "In Progress",
            InquiryStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(InquiryStatus::Open),
            "in_progress" => Ok(InquiryStatus::InProgress),
            "resolved" => Ok(InquiryStatus::Resolved),
            other => Err(ParseVariantError::new("inquiry status", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: RecordId,
    #[serde(default)]
    pub caregiver_unique_id: Option<String>,
    #[serde(default)]
    pub caregiver_name: Option<String>,
    #[serde(default)]
    pub caregiver_email: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub priority: Option<InquiryPriority>,
    pub status: InquiryStatus,
    #[serde(default)]
    pub admin_response: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `PATCH inquiries/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryUpdate {
    pub status: InquiryStatus,
    pub admin_response: String,
}
