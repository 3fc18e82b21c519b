//! # Memoraid Core
//!
//! Pure administrative judgments over backend snapshots:
//! - Approval Resolver: lifecycle state and operator actions for a link request
//! - Profile Integrity Evaluator: missing-configuration reasons for a patient
//! - Account status toggle planning
//! - Patient registry rows, user directory filters, alert tabs
//! - Runtime configuration resolved once at startup
//!
//! **No API concerns**: HTTP transport lives in `memoraid-client`, view state in
//! `memoraid-console`. Nothing here performs I/O or caches results between calls.

pub mod account;
pub mod alerts;
pub mod approval;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod integrity;
pub mod registry;

pub use account::{plan_toggle, toggle_label, StatusChange};
pub use alerts::AlertTab;
pub use approval::{classify, ApprovalAction, Classification, OperatorAction};
pub use config::ConsoleConfig;
pub use directory::UserFilter;
pub use error::{CoreError, CoreResult};
pub use integrity::{evaluate, IntegrityReport};
pub use registry::{LinkState, RegistryRow};

pub use memoraid_types as types;
