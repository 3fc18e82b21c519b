//! Console runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the client and the
//! views. Helpers here take raw values (typically from environment variables) as arguments and
//! never read the process environment themselves.

use crate::constants::{
    DEFAULT_ALERT_POLL_INTERVAL, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT,
};
use crate::{CoreError, CoreResult};
use memoraid_types::NonEmptyText;
use std::time::Duration;

/// Console configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    api_base_url: String,
    access_token: Option<NonEmptyText>,
    alert_poll_interval: Duration,
    request_timeout: Duration,
}

impl ConsoleConfig {
    /// Create a new `ConsoleConfig`.
    ///
    /// The base URL must be an `http` or `https` URL; a trailing `/` is added when missing so
    /// endpoint paths can be appended directly. Zero durations are rejected.
    pub fn new(
        api_base_url: &str,
        access_token: Option<&str>,
        alert_poll_interval: Duration,
        request_timeout: Duration,
    ) -> CoreResult<Self> {
        let trimmed = api_base_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(CoreError::InvalidConfig(format!(
                "api base url must start with http:// or https://, got {trimmed:?}"
            )));
        }
        let normalised = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };

        if alert_poll_interval.is_zero() {
            return Err(CoreError::InvalidConfig(
                "alert poll interval must be greater than zero".into(),
            ));
        }
        if request_timeout.is_zero() {
            return Err(CoreError::InvalidConfig(
                "request timeout must be greater than zero".into(),
            ));
        }

        let access_token = access_token.and_then(|t| NonEmptyText::new(t).ok());

        Ok(Self {
            api_base_url: normalised,
            access_token,
            alert_poll_interval,
            request_timeout,
        })
    }

    /// Resolve configuration from raw optional values, applying defaults for anything unset.
    ///
    /// Blank values are treated as unset.
    pub fn from_values(
        api_base_url: Option<String>,
        access_token: Option<String>,
        alert_poll_secs: Option<String>,
        request_timeout_secs: Option<String>,
    ) -> CoreResult<Self> {
        let base = non_blank(api_base_url).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let poll = seconds_from_value("alert poll interval", alert_poll_secs)?
            .unwrap_or(DEFAULT_ALERT_POLL_INTERVAL);
        let timeout = seconds_from_value("request timeout", request_timeout_secs)?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self::new(&base, access_token.as_deref(), poll, timeout)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(NonEmptyText::as_str)
    }

    pub fn alert_poll_interval(&self) -> Duration {
        self.alert_poll_interval
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            alert_poll_interval: DEFAULT_ALERT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse a whole number of seconds from an optional string value.
///
/// Returns `Ok(None)` when `value` is `None` or blank.
pub fn seconds_from_value(name: &str, value: Option<String>) -> CoreResult<Option<Duration>> {
    non_blank(value)
        .map(|v| {
            v.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                CoreError::InvalidConfig(format!("{name} must be a whole number of seconds, got {v:?}"))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ConsoleConfig::from_values(None, None, None, Some("  ".into()))
            .expect("defaults are valid");
        assert_eq!(cfg.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.access_token(), None);
        assert_eq!(cfg.alert_poll_interval(), Duration::from_secs(30));
        assert_eq!(cfg.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let cfg = ConsoleConfig::from_values(
            Some(" https://care.example.org/api ".into()),
            Some("tok".into()),
            Some("5".into()),
            None,
        )
        .expect("valid config");
        assert_eq!(cfg.api_base_url(), "https://care.example.org/api/");
        assert_eq!(cfg.access_token(), Some("tok"));
        assert_eq!(cfg.alert_poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn blank_token_is_no_token() {
        let cfg = ConsoleConfig::from_values(None, Some("   ".into()), None, None)
            .expect("valid config");
        assert_eq!(cfg.access_token(), None);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = ConsoleConfig::from_values(Some("ftp://host/".into()), None, None, None)
            .expect_err("ftp is not allowed");
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_bad_and_zero_intervals() {
        assert!(ConsoleConfig::from_values(None, None, Some("soon".into()), None).is_err());
        assert!(ConsoleConfig::from_values(None, None, Some("0".into()), None).is_err());
        assert!(ConsoleConfig::from_values(None, None, None, Some("0".into())).is_err());
    }

    #[test]
    fn default_matches_unset_values() {
        let cfg = ConsoleConfig::default();
        assert_eq!(cfg.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.alert_poll_interval(), DEFAULT_ALERT_POLL_INTERVAL);
    }
}
