use serde::{Deserialize, Serialize};

/// Normalized outcome of a coverage request.
///
/// Every field the caller relies on is always present: `confidence` falls
/// back to `0.0` and `reasoning` to an empty list. `error` is only set by
/// failure paths (or when the workflow itself reports failure).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageResult {
    pub replacement_employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_employee_name: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    /// Opaque payload forwarded verbatim from the workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_details: Option<serde_json::Value>,
    /// Opaque payload forwarded verbatim from the workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_candidates: Option<serde_json::Value>,
}

impl CoverageResult {
    /// A failed outcome with a single human-readable reason.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            replacement_employee_id: None,
            replacement_employee_name: None,
            confidence: 0.0,
            reasoning: vec![reason.into()],
            error: Some(true),
            shift_details: None,
            all_candidates: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error == Some(true)
    }
}

/// Force a confidence score into `[0, 1]`. Non-finite values become `0.0`.
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_shape() {
        let result = CoverageResult::failure("Workflow timed out after 30 seconds");
        assert!(result.is_error());
        assert_eq!(result.replacement_employee_id, None);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reasoning, vec!["Workflow timed out after 30 seconds"]);
    }

    #[test]
    fn test_serialization_keeps_required_fields() {
        let json = serde_json::to_value(CoverageResult::failure("boom")).unwrap();
        assert!(json["replacement_employee_id"].is_null());
        assert_eq!(json["confidence"], 0.0);
        assert_eq!(json["reasoning"][0], "boom");
        assert_eq!(json["error"], true);
        assert!(json.get("shift_details").is_none());
        assert!(json.get("all_candidates").is_none());
        assert!(json.get("replacement_employee_name").is_none());
    }

    #[test]
    fn test_clamp_confidence() {
        assert_eq!(clamp_confidence(0.84), 0.84);
        assert_eq!(clamp_confidence(1.7), 1.0);
        assert_eq!(clamp_confidence(-0.2), 0.0);
        assert_eq!(clamp_confidence(f64::NAN), 0.0);
        assert_eq!(clamp_confidence(f64::INFINITY), 0.0);
    }
}
