use crate::ClientResult;
use async_trait::async_trait;
use memoraid_core::{ApprovalAction, StatusChange};
use memoraid_types::{
    AccountStatus, AdminStats, Alert, Inquiry, InquiryUpdate, LinkRequest, RecordId, User,
};

/// Operations the console performs against the backend.
///
/// Every list call returns a full snapshot; there is no incremental fetching. Mutations return
/// nothing on success, callers refetch whatever they display.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET admin/stats/`
    async fn stats(&self) -> ClientResult<AdminStats>;

    /// `GET admin/users/`
    async fn list_users(&self) -> ClientResult<Vec<User>>;

    /// `POST admin/users/{id}/activate/`
    async fn activate_user(&self, id: RecordId) -> ClientResult<()>;

    /// `POST admin/users/{id}/status/` with `{"status": ...}`
    async fn set_user_status(&self, id: RecordId, status: AccountStatus) -> ClientResult<()>;

    /// `GET admin/approvals/`
    async fn list_pending_approvals(&self) -> ClientResult<Vec<LinkRequest>>;

    /// `GET admin/approval-history/`
    async fn list_approval_history(&self) -> ClientResult<Vec<LinkRequest>>;

    /// `POST admin/approvals/{id}/` with `{"action": ...}`
    async fn process_approval(&self, id: RecordId, action: ApprovalAction) -> ClientResult<()>;

    /// `GET caregiver/alerts/`
    async fn list_alerts(&self) -> ClientResult<Vec<Alert>>;

    /// `PATCH caregiver/alerts/{id}/` with `{"status": "handled"}`
    async fn mark_alert_handled(&self, id: RecordId) -> ClientResult<()>;

    /// `GET inquiries/`
    async fn list_inquiries(&self) -> ClientResult<Vec<Inquiry>>;

    /// `PATCH inquiries/{id}/` with `{"status": ..., "admin_response": ...}`
    async fn update_inquiry(&self, id: RecordId, update: &InquiryUpdate) -> ClientResult<()>;

    /// Send the mutation planned by [`memoraid_core::plan_toggle`].
    async fn apply_status_change(&self, id: RecordId, change: StatusChange) -> ClientResult<()> {
        match change {
            StatusChange::Activate => self.activate_user(id).await,
            StatusChange::Set(status) => self.set_user_status(id, status).await,
        }
    }
}
