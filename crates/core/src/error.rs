use memoraid_types::{AccountStatus, ApprovalStatus};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("account status {0} has no toggle action")]
    NoToggle(AccountStatus),
    #[error("action {action} is not available for a {state} request")]
    ActionNotAvailable {
        action: crate::ApprovalAction,
        state: ApprovalStatus,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
