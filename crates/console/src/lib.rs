//! # Memoraid Console
//!
//! State for each administrative view. Every view owns its snapshot, talks to the backend
//! through an [`AdminApi`](memoraid_client::AdminApi) and follows the same shape:
//! fetch, act, refetch.
//!
//! - Snapshots are always replaced whole, never patched locally.
//! - Fetch failures are logged and returned; the previous snapshot stays in place.
//! - Mutation failures set the view's [`Notice`] and are returned. Nothing is retried.

pub mod alerts;
pub mod approvals;
pub mod dashboard;
pub mod error;
pub mod in_flight;
pub mod inquiries;
pub mod notice;
pub mod registry;
pub mod users;

#[cfg(test)]
pub(crate) mod fake;

pub use alerts::{AlertsSnapshot, AlertsView};
pub use approvals::ApprovalsView;
pub use dashboard::DashboardView;
pub use error::{ConsoleError, ConsoleResult};
pub use in_flight::InFlight;
pub use inquiries::InquiriesView;
pub use notice::{Notice, NoticeKind};
pub use registry::RegistryView;
pub use users::UsersView;
