//! Constants shared by the console crates.

use std::time::Duration;

pub const ENV_API_BASE_URL: &str = "MEMORAID_API_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "MEMORAID_ACCESS_TOKEN";
pub const ENV_ALERT_POLL_SECS: &str = "MEMORAID_ALERT_POLL_SECS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "MEMORAID_HTTP_TIMEOUT_SECS";

/// Default backend API root.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";

/// Path segment under the API root that hosts every console endpoint.
pub const USERS_BASE_PATH: &str = "users/";

/// How often the alerts view re-fetches while mounted.
pub const DEFAULT_ALERT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Per-request timeout for backend calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const REASON_NO_PRIMARY: &str = "Primary caregiver not assigned";
pub const REASON_NO_SECONDARY: &str = "Secondary caregivers not assigned";
pub const REASON_NO_EMERGENCY_CONTACT: &str = "Emergency contact details not configured";
pub const REASON_DOCTOR_AS_EMERGENCY: &str =
    "Doctor assigned as emergency contact (Manual Check Required)";
pub const REASON_NO_PATIENT_PHONE: &str = "Patient phone number missing";
pub const REASON_NO_IDENTITY_ANCHORS: &str = "Identity anchors missing";

pub const NOTICE_APPROVAL_FAILED: &str = "Failed to process request";
pub const NOTICE_STATUS_FAILED: &str = "Failed to update user status";
pub const NOTICE_ACK_FAILED: &str = "Failed to acknowledge alert";
pub const NOTICE_INQUIRY_UPDATED: &str = "Inquiry updated successfully";
pub const NOTICE_INQUIRY_FAILED: &str = "Failed to update inquiry";
pub const NOTICE_REFRESH_FAILED: &str =
    "Action recorded but the lists could not be refreshed; reload before acting again";
