//! Caregiver to patient link requests awaiting or past administrator approval.

use crate::{CaregiverProfile, Level, ParseVariantError, PatientProfile, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval lifecycle of a link request.
///
/// Transitions happen only through an explicit administrator action sent to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Revoked,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Revoked => "revoked",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            "revoked" => Ok(ApprovalStatus::Revoked),
            other => Err(ParseVariantError::new("approval status", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivingArrangement {
    SameHousehold,
    Remote,
    Facility,
    #[serde(other)]
    Other,
}

/// Reference to a user embedded in a link request.
///
/// Carries whichever profile matches the side of the link it sits on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: RecordId,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub patient_profile: Option<PatientProfile>,
    #[serde(default)]
    pub caregiver_profile: Option<CaregiverProfile>,
}

/// A proposed caregiver to patient relationship.
///
/// An approved request at [`Level::Primary`] names the authoritative primary caregiver for the
/// patient. Uniqueness of that primary is enforced by the backend, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkRequest {
    pub id: RecordId,
    pub patient: UserRef,
    pub caregiver: UserRef,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub living_arrangement: Option<LivingArrangement>,
    #[serde(default)]
    pub care_context: Option<String>,
    #[serde(default)]
    pub consent_basis: Option<String>,
    #[serde(default)]
    pub risk_lives_alone: bool,
    #[serde(default)]
    pub risk_wandering: bool,
    #[serde(default)]
    pub notes: Option<String>,
    /// Absent or `null` means the request has not been processed yet.
    #[serde(default)]
    pub approval_status: Option<ApprovalStatus>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LinkRequest {
    /// A bare request between two users with no status and no details filled in.
    pub fn new(id: RecordId, patient: UserRef, caregiver: UserRef) -> Self {
        Self {
            id,
            patient,
            caregiver,
            relationship: None,
            level: None,
            living_arrangement: None,
            care_context: None,
            consent_basis: None,
            risk_lives_alone: false,
            risk_wandering: false,
            notes: None,
            approval_status: None,
            approved_by: None,
            approved_at: None,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pending_request_with_null_status() {
        let json = r#"{
            "id": 42,
            "patient": {"id": 7, "unique_id": "PT-0007", "full_name": "Mary Jones", "email": "mary@example.com"},
            "caregiver": {"id": 9, "full_name": "Sam Jones", "email": "sam@example.com",
                          "caregiver_profile": {"relationship": "son", "level": "primary", "phone_number": "0711"}},
            "relationship": "son",
            "level": "primary",
            "living_arrangement": "same_household",
            "risk_wandering": true,
            "approval_status": null,
            "created_at": "2025-01-14T09:30:00Z"
        }"#;

        let req: LinkRequest = serde_json::from_str(json).expect("decode link request");
        assert_eq!(req.approval_status, None);
        assert_eq!(req.level, Some(Level::Primary));
        assert_eq!(req.living_arrangement, Some(LivingArrangement::SameHousehold));
        assert!(req.risk_wandering);
        assert!(!req.risk_lives_alone);
        assert_eq!(
            req.caregiver
                .caregiver_profile
                .as_ref()
                .and_then(|p| p.relationship.as_deref()),
            Some("son")
        );
        assert!(req.created_at.is_some());
    }

    #[test]
    fn decodes_processed_request_with_offset_timestamp() {
        let json = r#"{
            "id": 5,
            "patient": {"id": 1},
            "caregiver": {"id": 2},
            "approval_status": "revoked",
            "approved_by": "admin@example.com",
            "approved_at": "2025-02-01T10:00:00.123456+05:30"
        }"#;

        let req: LinkRequest = serde_json::from_str(json).expect("decode link request");
        assert_eq!(req.approval_status, Some(ApprovalStatus::Revoked));
        let approved_at = req.approved_at.expect("approved_at");
        assert_eq!(approved_at.to_rfc3339(), "2025-02-01T04:30:00.123456+00:00");
    }
}
