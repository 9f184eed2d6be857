//! Workflow endpoint configuration: webhook URL and request timeout.

use std::fmt;
use std::time::Duration;

/// Environment variable holding the workflow webhook URL.
pub const WORKFLOW_URL_ENV: &str = "RETOOL_WORKFLOW_URL";

/// Upper bound on a single workflow round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the external workflow.
///
/// The webhook URL usually embeds the workflow API key, so `Debug` never
/// prints it.
#[derive(Clone)]
pub struct WorkflowConfig {
    /// Webhook URL. `None` means "not configured"; requests will be rejected
    /// with a configuration error instead of crashing the process.
    pub url: Option<String>,
    pub timeout: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl WorkflowConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Read the webhook URL from `RETOOL_WORKFLOW_URL`. Blank values count
    /// as unset.
    pub fn from_env() -> Self {
        Self::from_optional(std::env::var(WORKFLOW_URL_ENV).ok())
    }

    /// Build from a possibly-missing URL, treating blank strings as missing.
    pub fn from_optional(url: Option<String>) -> Self {
        Self {
            url: url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

impl fmt::Debug for WorkflowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_unconfigured() {
        assert!(!WorkflowConfig::from_optional(None).is_configured());
        assert!(!WorkflowConfig::from_optional(Some("   ".to_string())).is_configured());
        assert!(WorkflowConfig::from_optional(Some("https://example.com/hook".to_string()))
            .is_configured());
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        assert_eq!(WorkflowConfig::default().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_debug_redacts_url() {
        let config = WorkflowConfig::new("https://api.retool.com/v1/workflows/x?workflowApiKey=secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
