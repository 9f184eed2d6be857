use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// The only event type this service understands.
pub const SHIFT_MISSING: &str = "shift_missing";

/// Inbound event: a shift lost its assigned employee and needs a replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftMissingEvent {
    #[serde(default = "default_event_type")]
    pub event_type: String,
    pub shift_id: String,
    pub missing_employee_id: String,
}

fn default_event_type() -> String {
    SHIFT_MISSING.to_string()
}

impl ShiftMissingEvent {
    pub fn new(shift_id: impl Into<String>, missing_employee_id: impl Into<String>) -> Self {
        Self {
            event_type: default_event_type(),
            shift_id: shift_id.into(),
            missing_employee_id: missing_employee_id.into(),
        }
    }

    /// Parse an inbound JSON body. Only objects are accepted; derived
    /// deserialization would otherwise fill the fields from an array.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ServerError> {
        if !value.is_object() {
            return Err(ServerError::Validation(
                "Request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| ServerError::Validation(e.to_string()))
    }

    /// Check the parts of the shape that serde cannot express.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.event_type != SHIFT_MISSING {
            return Err(ServerError::Validation(format!(
                "Unsupported event_type '{}', expected '{}'",
                self.event_type, SHIFT_MISSING
            )));
        }
        if self.shift_id.trim().is_empty() {
            return Err(ServerError::Validation(
                "shift_id must be a non-empty string".to_string(),
            ));
        }
        if self.missing_employee_id.trim().is_empty() {
            return Err(ServerError::Validation(
                "missing_employee_id must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}
