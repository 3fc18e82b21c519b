//! # Memoraid Types
//!
//! Wire records exchanged with the Memoraid backend.
//!
//! Every record here is a read-only snapshot of server-side state. The console never persists
//! anything itself; it only decodes these records and derives judgments from them in
//! `memoraid-core`.
//!
//! Fields the console treats as "maybe missing" are modelled as `Option<T>` with
//! `#[serde(default)]` so that absent keys, `null` and missing nested objects all decode.

pub mod alert;
pub mod inquiry;
pub mod link_request;
pub mod stats;
pub mod user;

pub use alert::{Alert, AlertKind, AlertStatus};
pub use inquiry::{Inquiry, InquiryPriority, InquiryStatus, InquiryUpdate};
pub use link_request::{ApprovalStatus, LinkRequest, LivingArrangement, UserRef};
pub use stats::AdminStats;
pub use user::{
    AccountStatus, CaregiverProfile, Level, LinkedEntity, PatientProfile, Role, User,
};

/// Primary key of a backend record.
pub type RecordId = i64;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Error returned when parsing one of the wire enumerations from operator input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction. Used for
/// configuration values such as the API base URL where a blank value is always a mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText`, rejecting input that is empty after trimming.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Returns the text when it is present and non-empty.
///
/// Mirrors how the console has always judged optional text: a missing value and an empty
/// string are both "not configured". Whitespace-only text still counts as present.
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
