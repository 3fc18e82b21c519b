//! Approval Resolver.
//!
//! Determines the lifecycle state of a caregiver to patient link request and which operator
//! actions the console offers in that state. The resolver only reads the snapshot; mutations
//! are sent to the backend by the approvals view.
//!
//! | state      | actions                   |
//! |------------|---------------------------|
//! | `pending`  | approve, reject, inspect  |
//! | `approved` | revoke, view              |
//! | `rejected` | revoke, view              |
//! | `revoked`  | view                      |

use crate::{CoreError, CoreResult};
use memoraid_types::{ApprovalStatus, LinkRequest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything an operator can do with a link request row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorAction {
    Approve,
    Reject,
    Inspect,
    Revoke,
    View,
}

impl OperatorAction {
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorAction::Approve => "approve",
            OperatorAction::Reject => "reject",
            OperatorAction::Inspect => "inspect",
            OperatorAction::Revoke => "revoke",
            OperatorAction::View => "view",
        }
    }
}

impl fmt::Display for OperatorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutating subset of [`OperatorAction`], sent to the backend as `{"action": ...}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Approve,
    Reject,
    Revoke,
}

impl ApprovalAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalAction::Approve => "approve",
            ApprovalAction::Reject => "reject",
            ApprovalAction::Revoke => "revoke",
        }
    }

    /// Status the backend records once it accepts this action.
    pub fn resulting_status(self) -> ApprovalStatus {
        match self {
            ApprovalAction::Approve => ApprovalStatus::Approved,
            ApprovalAction::Reject => ApprovalStatus::Rejected,
            ApprovalAction::Revoke => ApprovalStatus::Revoked,
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalAction {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "approve" => Ok(ApprovalAction::Approve),
            "reject" => Ok(ApprovalAction::Reject),
            "revoke" => Ok(ApprovalAction::Revoke),
            other => Err(CoreError::InvalidInput(format!(
                "unknown approval action: {other}"
            ))),
        }
    }
}

impl From<ApprovalAction> for OperatorAction {
    fn from(action: ApprovalAction) -> Self {
        match action {
            ApprovalAction::Approve => OperatorAction::Approve,
            ApprovalAction::Reject => OperatorAction::Reject,
            ApprovalAction::Revoke => OperatorAction::Revoke,
        }
    }
}

const PENDING_ACTIONS: &[OperatorAction] = &[
    OperatorAction::Approve,
    OperatorAction::Reject,
    OperatorAction::Inspect,
];
// Rejected requests share the approved affordances.
const PROCESSED_ACTIONS: &[OperatorAction] = &[OperatorAction::Revoke, OperatorAction::View];
const TERMINAL_ACTIONS: &[OperatorAction] = &[OperatorAction::View];

/// Result of [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub state: ApprovalStatus,
    pub available_actions: &'static [OperatorAction],
}

impl Classification {
    pub fn offers(&self, action: OperatorAction) -> bool {
        self.available_actions.contains(&action)
    }

    /// Whether the mutating `action` is offered in this state.
    pub fn allows(&self, action: ApprovalAction) -> bool {
        self.offers(action.into())
    }

    /// Like [`Classification::allows`], but as an error suitable for returning to the operator.
    pub fn ensure_allows(&self, action: ApprovalAction) -> CoreResult<()> {
        if self.allows(action) {
            Ok(())
        } else {
            Err(CoreError::ActionNotAvailable {
                action,
                state: self.state,
            })
        }
    }

    pub fn is_processed(&self) -> bool {
        self.state != ApprovalStatus::Pending
    }
}

/// Classify a link request snapshot.
pub fn classify(request: &LinkRequest) -> Classification {
    let state = request.approval_status.unwrap_or(ApprovalStatus::Pending);
    let available_actions = match state {
        ApprovalStatus::Pending => PENDING_ACTIONS,
        ApprovalStatus::Approved | ApprovalStatus::Rejected => PROCESSED_ACTIONS,
        ApprovalStatus::Revoked => TERMINAL_ACTIONS,
    };

    Classification {
        state,
        available_actions,
    }
}
