//! Account status toggle.
//!
//! `pending -> verified -> active <-> disabled`. Only the last three states expose an operator
//! action here; pending accounts are advanced by onboarding, not by the console.

use crate::{CoreError, CoreResult};
use memoraid_types::AccountStatus;

/// The single backend mutation that realises a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusChange {
    /// `POST admin/users/{id}/activate/`, verified to active.
    Activate,
    /// `POST admin/users/{id}/status/` with the new status.
    Set(AccountStatus),
}

impl StatusChange {
    /// Status the account holds once the backend accepts the change.
    pub fn target(self) -> AccountStatus {
        match self {
            StatusChange::Activate => AccountStatus::Active,
            StatusChange::Set(status) => status,
        }
    }
}

/// Plan the toggle action for an account currently in `current`.
pub fn plan_toggle(current: AccountStatus) -> CoreResult<StatusChange> {
    match current {
        AccountStatus::Verified => Ok(StatusChange::Activate),
        AccountStatus::Active => Ok(StatusChange::Set(AccountStatus::Disabled)),
        AccountStatus::Disabled => Ok(StatusChange::Set(AccountStatus::Active)),
        AccountStatus::Pending => Err(CoreError::NoToggle(current)),
    }
}

/// Button label for the toggle.
pub fn toggle_label(current: AccountStatus) -> &'static str {
    match current {
        AccountStatus::Active => "Deactivate",
        _ => "Activate",
    }
}
