//! In-memory backend used by the view tests.

use async_trait::async_trait;
use memoraid_client::{AdminApi, ClientError, ClientResult};
use memoraid_core::ApprovalAction;
use memoraid_types::{
    AccountStatus, AdminStats, Alert, AlertKind, AlertStatus, ApprovalStatus, Inquiry,
    InquiryUpdate, LinkRequest, RecordId, User, UserRef,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct FakeApi {
    pub stats: Mutex<AdminStats>,
    pub users: Mutex<Vec<User>>,
    pub requests: Mutex<Vec<LinkRequest>>,
    pub alerts: Mutex<Vec<Alert>>,
    pub inquiries: Mutex<Vec<Inquiry>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: Mutex<HashSet<&'static str>>,
    held: Mutex<HashSet<&'static str>>,
}

impl FakeApi {
    /// Number of times `op` has been called.
    pub fn calls(&self, op: &'static str) -> usize {
        self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
    }

    /// Make every later call to `op` fail with a 503.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
    }

    /// Make every later call to `op` wait forever.
    pub fn hold(&self, op: &'static str) {
        self.held.lock().unwrap().insert(op);
    }

    pub fn release(&self, op: &'static str) {
        self.held.lock().unwrap().remove(op);
    }

    async fn enter(&self, op: &'static str) -> ClientResult<()> {
        *self.calls.lock().unwrap().entry(op).or_default() += 1;
        let held = self.held.lock().unwrap().contains(op);
        if held {
            std::future::pending::<()>().await;
        }
        if self.failing.lock().unwrap().contains(op) {
            return Err(ClientError::Status {
                path: op.to_string(),
                status: 503,
                message: "backend unavailable".into(),
            });
        }
        Ok(())
    }

    fn set_status(&self, id: RecordId, status: AccountStatus) -> ClientResult<()> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.status = status;
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }
}

fn not_found(id: RecordId) -> ClientError {
    ClientError::Status {
        path: id.to_string(),
        status: 404,
        message: "not found".into(),
    }
}

pub(crate) fn link_request(id: RecordId, status: Option<ApprovalStatus>) -> LinkRequest {
    let mut request = LinkRequest::new(
        id,
        UserRef {
            id: id * 10,
            full_name: format!("Patient {id}"),
            ..Default::default()
        },
        UserRef {
            id: id * 10 + 1,
            full_name: format!("Carer {id}"),
            ..Default::default()
        },
    );
    request.approval_status = status;
    request
}

pub(crate) fn alert(id: RecordId, status: AlertStatus) -> Alert {
    Alert {
        id,
        kind: AlertKind::Sos,
        status,
        patient_name: Some(format!("Patient {id}")),
        message: None,
        handled_by_name: None,
        created_at: None,
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn stats(&self) -> ClientResult<AdminStats> {
        self.enter("stats").await?;
        Ok(self.stats.lock().unwrap().clone())
    }

    async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.enter("list_users").await?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn activate_user(&self, id: RecordId) -> ClientResult<()> {
        self.enter("activate_user").await?;
        self.set_status(id, AccountStatus::Active)
    }

    async fn set_user_status(&self, id: RecordId, status: AccountStatus) -> ClientResult<()> {
        self.enter("set_user_status").await?;
        self.set_status(id, status)
    }

    async fn list_pending_approvals(&self) -> ClientResult<Vec<LinkRequest>> {
        self.enter("list_pending_approvals").await?;
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| matches!(r.approval_status, None | Some(ApprovalStatus::Pending)))
            .cloned()
            .collect())
    }

    async fn list_approval_history(&self) -> ClientResult<Vec<LinkRequest>> {
        self.enter("list_approval_history").await?;
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| !matches!(r.approval_status, None | Some(ApprovalStatus::Pending)))
            .cloned()
            .collect())
    }

    async fn process_approval(&self, id: RecordId, action: ApprovalAction) -> ClientResult<()> {
        self.enter("process_approval").await?;
        let mut requests = self.requests.lock().unwrap();
        match requests.iter_mut().find(|r| r.id == id) {
            Some(request) => {
                request.approval_status = Some(action.resulting_status());
                request.approved_by = Some("admin@example.com".into());
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    async fn list_alerts(&self) -> ClientResult<Vec<Alert>> {
        self.enter("list_alerts").await?;
        Ok(self.alerts.lock().unwrap().clone())
    }

    async fn mark_alert_handled(&self, id: RecordId) -> ClientResult<()> {
        self.enter("mark_alert_handled").await?;
        let mut alerts = self.alerts.lock().unwrap();
        match alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.status = AlertStatus::Handled;
                alert.handled_by_name = Some("Admin".into());
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    async fn list_inquiries(&self) -> ClientResult<Vec<Inquiry>> {
        self.enter("list_inquiries").await?;
        Ok(self.inquiries.lock().unwrap().clone())
    }

    async fn update_inquiry(&self, id: RecordId, update: &InquiryUpdate) -> ClientResult<()> {
        self.enter("update_inquiry").await?;
        let mut inquiries = self.inquiries.lock().unwrap();
        match inquiries.iter_mut().find(|i| i.id == id) {
            Some(inquiry) => {
                inquiry.status = update.status;
                inquiry.admin_response = Some(update.admin_response.clone());
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }
}
