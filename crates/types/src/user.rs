//! Platform accounts and the care relationships embedded in them.

use crate::{ParseVariantError, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Caregiver,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Caregiver => "caregiver",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "caregiver" => Ok(Role::Caregiver),
            "admin" => Ok(Role::Admin),
            other => Err(ParseVariantError::new("role", other)),
        }
    }
}

/// Account lifecycle status.
///
/// New accounts start `pending`, become `verified` once onboarding completes, and are then
/// activated by an administrator. Active accounts can be disabled and re-enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Verified,
    Pending,
    Disabled,
}

impl AccountStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Verified => "verified",
            AccountStatus::Pending => "pending",
            AccountStatus::Disabled => "disabled",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            "verified" => Ok(AccountStatus::Verified),
            "pending" => Ok(AccountStatus::Pending),
            "disabled" => Ok(AccountStatus::Disabled),
            other => Err(ParseVariantError::new("account status", other)),
        }
    }
}

/// Caregiver authority tier.
///
/// Values the backend may add later decode to [`Level::Other`] instead of failing the whole
/// user list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Primary,
    Secondary,
    #[serde(other)]
    Other,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Primary => "primary",
            Level::Secondary => "secondary",
            Level::Other => "other",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Level::Primary),
            "secondary" => Ok(Level::Secondary),
            other => Err(ParseVariantError::new("level", other)),
        }
    }
}

/// Denormalised view of one care relationship, embedded in a [`User`].
///
/// For a patient each entry is a caregiver; for a caregiver each entry is a patient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedEntity {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub status: Option<String>,
}

/// Clinical and contact configuration of a patient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub familiar_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub primary_caregiver_email: Option<String>,
    /// Only presence and length are meaningful to the console.
    #[serde(default)]
    pub identity_anchors: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub consulting_doctor: Option<String>,
    #[serde(default)]
    pub consulting_doctor_hospital: Option<String>,
    #[serde(default)]
    pub consulting_doctor_contact: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub emergency_contact_relation: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaregiverProfile {
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
}

/// A platform account as returned by `admin/users/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    #[serde(default)]
    pub care_level: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub linked_entities_list: Vec<LinkedEntity>,
    #[serde(default)]
    pub patient_profile: Option<PatientProfile>,
    #[serde(default)]
    pub caregiver_profile: Option<CaregiverProfile>,
}

impl User {
    /// Minimal user with no profile and no links.
    pub fn new(id: RecordId, role: Role, status: AccountStatus) -> Self {
        Self {
            id,
            unique_id: None,
            full_name: String::new(),
            email: String::new(),
            role,
            status,
            care_level: None,
            age: None,
            linked_entities_list: Vec::new(),
            patient_profile: None,
            caregiver_profile: None,
        }
    }

    pub fn is_patient(&self) -> bool {
        self.role == Role::Patient
    }

    /// Linked entities at the given level, in list order.
    pub fn links_at(&self, level: Level) -> impl Iterator<Item = &LinkedEntity> {
        self.linked_entities_list
            .iter()
            .filter(move |l| l.level == Some(level))
    }
}
