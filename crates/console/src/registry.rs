//! Patient registry.
//!
//! Rows and integrity reports are derived from the latest user snapshot on every call and are
//! never cached between fetches.

use crate::error::{ConsoleError, ConsoleResult};
use memoraid_client::AdminApi;
use memoraid_core::{evaluate, IntegrityReport, RegistryRow};
use memoraid_types::{RecordId, User};
use std::sync::Arc;

pub struct RegistryView<A> {
    api: Arc<A>,
    patients: Vec<User>,
    loading: bool,
}

impl<A: AdminApi> RegistryView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            patients: Vec::new(),
            loading: true,
        }
    }

    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let result = self.api.list_users().await;
        self.loading = false;
        match result {
            Ok(users) => {
                self.patients = users.into_iter().filter(User::is_patient).collect();
                tracing::debug!(patients = self.patients.len(), "registry refreshed");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching patient registry");
                Err(err.into())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn patients(&self) -> &[User] {
        &self.patients
    }

    pub fn patient(&self, id: RecordId) -> Option<&User> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn rows(&self) -> Vec<RegistryRow> {
        self.patients.iter().map(RegistryRow::from_user).collect()
    }

    pub fn integrity(&self, id: RecordId) -> ConsoleResult<IntegrityReport> {
        self.patient(id)
            .map(evaluate)
            .ok_or(ConsoleError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use memoraid_types::{AccountStatus, Level, LinkedEntity, PatientProfile, Role};

    fn patient(id: RecordId) -> User {
        let mut user = User::new(id, Role::Patient, AccountStatus::Active);
        user.full_name = format!("Patient {id}");
        user
    }

    #[tokio::test]
    async fn only_patients_are_listed() {
        let api = FakeApi::default();
        *api.users.lock().unwrap() = vec![
            patient(1),
            User::new(2, Role::Caregiver, AccountStatus::Active),
            patient(3),
        ];
        let mut view = RegistryView::new(Arc::new(api));
        view.refresh().await.expect("load");

        let ids: Vec<_> = view.rows().iter().map(|r| r.patient_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(matches!(view.integrity(2), Err(ConsoleError::NotFound(2))));
    }

    #[tokio::test]
    async fn integrity_tracks_latest_snapshot() {
        let api = Arc::new(FakeApi::default());
        *api.users.lock().unwrap() = vec![patient(1)];
        let mut view = RegistryView::new(api.clone());
        view.refresh().await.expect("load");
        let before = view.integrity(1).expect("patient listed");
        assert!(!before.is_healthy());

        {
            let mut users = api.users.lock().unwrap();
            users[0].linked_entities_list = vec![
                LinkedEntity {
                    id: 5,
                    level: Some(Level::Primary),
                    is_approved: true,
                    ..Default::default()
                },
                LinkedEntity {
                    id: 6,
                    level: Some(Level::Secondary),
                    is_approved: true,
                    ..Default::default()
                },
            ];
            users[0].patient_profile = Some(PatientProfile {
                emergency_contact_name: Some("Jo".into()),
                emergency_contact_phone: Some("555-0101".into()),
                emergency_contact_relation: Some("daughter".into()),
                phone_number: Some("555-0100".into()),
                identity_anchors: Some(vec![serde_json::json!({"kind": "photo"})]),
                ..Default::default()
            });
        }

        // Backend changes only show up after the next fetch.
        assert_eq!(view.integrity(1).expect("patient listed"), before);
        view.refresh().await.expect("reload");
        assert!(view.integrity(1).expect("patient listed").is_healthy());
    }
}
