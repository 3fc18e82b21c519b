//! Profile Integrity Evaluator.
//!
//! Flags patient records whose care configuration is incomplete. The evaluator is a pure
//! function of one user snapshot and must be re-run for every fresh snapshot, because care
//! relationships change between refreshes.
//!
//! Two passes run over the same snapshot:
//! - the **count** pass adds one issue when the emergency contact phone is missing *or* the
//!   emergency contact is the consulting doctor;
//! - the **reasons** pass lists each of those two conditions independently.
//!
//! So a patient matching both conditions shows one issue in the count but two reasons. This
//! mirrors long-standing console behaviour and is kept as-is.

use crate::constants::{
    REASON_DOCTOR_AS_EMERGENCY, REASON_NO_EMERGENCY_CONTACT, REASON_NO_IDENTITY_ANCHORS,
    REASON_NO_PATIENT_PHONE, REASON_NO_PRIMARY, REASON_NO_SECONDARY,
};
use memoraid_types::{filled, Level, PatientProfile, User};
use serde::Serialize;

/// Outcome of [`evaluate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub issue_count: usize,
    pub reasons: Vec<String>,
}

impl IntegrityReport {
    pub fn is_healthy(&self) -> bool {
        self.issue_count == 0
    }

    /// Short badge shown next to a patient in the registry.
    pub fn badge(&self) -> String {
        if self.is_healthy() {
            "✔ healthy".to_string()
        } else {
            format!("⚠ {} issues", self.issue_count)
        }
    }
}

/// Facts about one snapshot that both passes read.
struct Findings {
    has_primary: bool,
    has_secondary: bool,
    has_emergency_phone: bool,
    doctor_is_emergency_contact: bool,
    has_patient_phone: bool,
    has_identity_anchors: bool,
}

impl Findings {
    fn gather(patient: &User) -> Self {
        let empty = PatientProfile::default();
        let profile = patient.patient_profile.as_ref().unwrap_or(&empty);

        let doctor_is_emergency_contact = match filled(&profile.emergency_contact_name) {
            Some(name) => profile.consulting_doctor.as_deref() == Some(name),
            None => false,
        };

        Self {
            has_primary: patient.links_at(Level::Primary).next().is_some(),
            has_secondary: patient.links_at(Level::Secondary).next().is_some(),
            has_emergency_phone: filled(&profile.emergency_contact_phone).is_some(),
            doctor_is_emergency_contact,
            has_patient_phone: filled(&profile.phone_number).is_some(),
            has_identity_anchors: profile
                .identity_anchors
                .as_ref()
                .is_some_and(|anchors| !anchors.is_empty()),
        }
    }

    fn issue_count(&self) -> usize {
        [
            !self.has_primary,
            !self.has_secondary,
            !self.has_emergency_phone || self.doctor_is_emergency_contact,
            !self.has_patient_phone,
            !self.has_identity_anchors,
        ]
        .into_iter()
        .filter(|issue| *issue)
        .count()
    }

    fn reasons(&self) -> Vec<String> {
        let checks = [
            (!self.has_primary, REASON_NO_PRIMARY),
            (!self.has_secondary, REASON_NO_SECONDARY),
            (!self.has_emergency_phone, REASON_NO_EMERGENCY_CONTACT),
            (self.doctor_is_emergency_contact, REASON_DOCTOR_AS_EMERGENCY),
            (!self.has_patient_phone, REASON_NO_PATIENT_PHONE),
            (!self.has_identity_anchors, REASON_NO_IDENTITY_ANCHORS),
        ];

        checks
            .into_iter()
            .filter(|(failed, _)| *failed)
            .map(|(_, reason)| reason.to_string())
            .collect()
    }
}

/// Evaluate the profile integrity of a patient snapshot.
///
/// Reasons are listed in fixed rule order. A missing `patient_profile` is evaluated as an
/// empty profile.
pub fn evaluate(patient: &User) -> IntegrityReport {
    let findings = Findings::gather(patient);
    let report = IntegrityReport {
        issue_count: findings.issue_count(),
        reasons: findings.reasons(),
    };

    tracing::trace!(
        patient_id = patient.id,
        issues = report.issue_count,
        "evaluated profile integrity"
    );
    report
}
