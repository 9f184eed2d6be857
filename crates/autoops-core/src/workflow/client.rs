//! Workflow Client - calls the external coverage workflow over HTTPS.
//!
//! A single POST per invocation, no retries. Every outcome, including
//! transport failures, comes back as a `CoverageResult`; failures carry
//! `error: true` and one reasoning line describing what went wrong.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use super::config::{WorkflowConfig, WORKFLOW_URL_ENV};
use crate::error::ServerError;
use crate::models::{clamp_confidence, CoverageResult};

/// Why a workflow call failed. `Display` is the reasoning line returned to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("Workflow timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("Workflow failed with status {0}")]
    HttpStatus(u16),

    #[error("Workflow error: {0}")]
    Other(String),
}

impl From<WorkflowError> for CoverageResult {
    fn from(err: WorkflowError) -> Self {
        CoverageResult::failure(err.to_string())
    }
}

/// Raw body returned by the workflow. Only the listed fields are read;
/// anything else is ignored.
#[derive(Debug, Deserialize)]
struct WorkflowResponse {
    #[serde(default)]
    replacement_employee_id: Option<String>,
    #[serde(default)]
    replacement_employee_name: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    reasoning: Option<Vec<String>>,
    #[serde(default)]
    error: Option<bool>,
    #[serde(default)]
    shift_details: Option<serde_json::Value>,
    #[serde(default)]
    all_candidates: Option<serde_json::Value>,
}

impl WorkflowResponse {
    fn into_result(self) -> CoverageResult {
        let raw_confidence = self.confidence.unwrap_or(0.0);
        let confidence = clamp_confidence(raw_confidence);
        if confidence != raw_confidence {
            tracing::warn!(
                "Workflow returned out-of-range confidence {}, using {}",
                raw_confidence,
                confidence
            );
        }

        CoverageResult {
            replacement_employee_id: self.replacement_employee_id,
            replacement_employee_name: self.replacement_employee_name,
            confidence,
            reasoning: self.reasoning.unwrap_or_default(),
            error: self.error.filter(|failed| *failed),
            shift_details: self.shift_details,
            all_candidates: self.all_candidates,
        }
    }
}

/// HTTP client for the coverage workflow webhook.
///
/// Holds one pooled `reqwest::Client`, shared across requests through the
/// gateway that owns it.
pub struct WorkflowClient {
    client: reqwest::Client,
    url: reqwest::Url,
    timeout: Duration,
}

impl WorkflowClient {
    /// Build a client from configuration.
    ///
    /// A missing or unparseable URL is a `Configuration` error; failing to
    /// build the HTTP stack is `Internal`.
    pub fn new(config: &WorkflowConfig) -> Result<Self, ServerError> {
        let raw_url = config.url.as_deref().ok_or_else(|| {
            ServerError::Configuration(format!(
                "{} environment variable not set. Please add your workflow webhook URL to the .env file.",
                WORKFLOW_URL_ENV
            ))
        })?;

        let url = reqwest::Url::parse(raw_url).map_err(|e| {
            ServerError::Configuration(format!("{} is not a valid URL: {}", WORKFLOW_URL_ENV, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServerError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url,
            timeout: config.timeout,
        })
    }

    /// Host of the configured endpoint, safe to log (no path or query).
    pub fn endpoint_host(&self) -> &str {
        self.url.host_str().unwrap_or("<unknown>")
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the workflow for a replacement. Never fails: errors are folded
    /// into a `CoverageResult` with `error: true`.
    pub async fn invoke(&self, shift_id: &str, missing_employee_id: &str) -> CoverageResult {
        tracing::info!(
            "Calling workflow for shift_id={}, missing_employee={}",
            shift_id,
            missing_employee_id
        );

        match self.try_invoke(shift_id, missing_employee_id).await {
            Ok(result) => {
                tracing::info!(
                    "Workflow succeeded: replacement={:?}",
                    result.replacement_employee_id
                );
                result
            }
            Err(err) => {
                tracing::error!("Workflow call failed: {}", err);
                err.into()
            }
        }
    }

    async fn try_invoke(
        &self,
        shift_id: &str,
        missing_employee_id: &str,
    ) -> Result<CoverageResult, WorkflowError> {
        let payload = serde_json::json!({
            "shift_id": shift_id,
            "missing_employee_id": missing_employee_id,
        });

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Workflow HTTP error: {} - {}", status.as_u16(), body);
            return Err(WorkflowError::HttpStatus(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| self.classify(e))?;

        // Derived struct deserialization also accepts sequences positionally.
        if !body.is_object() {
            return Err(WorkflowError::Other(
                "malformed response body: expected a JSON object".to_string(),
            ));
        }

        let parsed: WorkflowResponse = serde_json::from_value(body)
            .map_err(|e| WorkflowError::Other(format!("malformed response body: {}", e)))?;

        Ok(parsed.into_result())
    }

    /// Sort a transport error into timeout or everything else. The URL is
    /// stripped so the webhook key never reaches a response body.
    fn classify(&self, err: reqwest::Error) -> WorkflowError {
        if err.is_timeout() {
            return WorkflowError::Timeout(self.timeout);
        }
        WorkflowError::Other(error_chain(&err.without_url()))
    }
}

/// Render an error and its sources as `outer: inner: innermost`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
