//! Endpoint paths, relative to `<api base>/users/`.

use memoraid_types::RecordId;

pub const STATS: &str = "admin/stats/";
pub const USERS: &str = "admin/users/";
pub const PENDING_APPROVALS: &str = "admin/approvals/";
pub const APPROVAL_HISTORY: &str = "admin/approval-history/";
pub const ALERTS: &str = "caregiver/alerts/";
pub const INQUIRIES: &str = "inquiries/";

pub fn activate_user(id: RecordId) -> String {
    format!("admin/users/{id}/activate/")
}

pub fn user_status(id: RecordId) -> String {
    format!("admin/users/{id}/status/")
}

pub fn approval(id: RecordId) -> String {
    format!("admin/approvals/{id}/")
}

pub fn alert(id: RecordId) -> String {
    format!("caregiver/alerts/{id}/")
}

pub fn inquiry(id: RecordId) -> String {
    format!("inquiries/{id}/")
}
