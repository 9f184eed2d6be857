//! Core error type for the AutoOps platform.
//!
//! `ServerError` is what the coverage gateway hands back to its callers.
//! When the `axum` feature is enabled, it also implements `IntoResponse`
//! so it can be used directly as an axum handler error type.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The workflow endpoint is missing or unusable. Fixable by the operator,
    /// so it is reported as a 400 rather than a downstream failure.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The workflow client produced an `error: true` result.
    #[error("Workflow failed: {}", .reasoning.join("; "))]
    Workflow { reasoning: Vec<String> },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Status code the error maps to at the HTTP boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::Configuration(_) | ServerError::Validation(_) => 400,
            ServerError::Workflow { .. } | ServerError::Internal(_) => 500,
        }
    }

    /// JSON body sent to the caller. Internal errors carry no detail.
    pub fn body(&self) -> serde_json::Value {
        match self {
            ServerError::Configuration(msg) => serde_json::json!({
                "error": "Configuration error",
                "message": msg,
            }),
            ServerError::Validation(msg) => serde_json::json!({
                "error": "Invalid request",
                "message": msg,
            }),
            ServerError::Workflow { reasoning } => serde_json::json!({
                "error": "Agent failed to process event",
                "reasoning": reasoning,
            }),
            ServerError::Internal(_) => serde_json::json!({
                "error": "Internal server error",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// axum integration (opt-in via feature flag)
// ---------------------------------------------------------------------------

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match &self {
            ServerError::Internal(msg) => tracing::error!("Unexpected error: {}", msg),
            ServerError::Workflow { reasoning } => {
                tracing::error!("Agent returned error: {:?}", reasoning)
            }
            other => tracing::warn!("Rejected request: {}", other),
        }

        (status, axum::Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_faults_map_to_400() {
        assert_eq!(ServerError::Configuration("x".into()).status_code(), 400);
        assert_eq!(ServerError::Validation("x".into()).status_code(), 400);
    }

    #[test]
    fn test_workflow_error_carries_reasoning() {
        let err = ServerError::Workflow {
            reasoning: vec!["Workflow failed with status 503".to_string()],
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.body()["reasoning"][0],
            "Workflow failed with status 503"
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ServerError::Internal("db password leaked in message".into());
        let body = err.body();
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("message").is_none());
        assert!(!body.to_string().contains("password"));
    }
}
