//! `autoops invoke` - Call the coverage workflow directly, bypassing the server.

use autoops_core::{CoverageResult, ShiftMissingEvent, WorkflowClient, WorkflowConfig};

use super::print_json;

pub async fn run(
    shift_id: &str,
    missing_employee_id: &str,
    workflow_url: Option<String>,
) -> Result<(), String> {
    let result = invoke(shift_id, missing_employee_id, workflow_url).await?;

    let json = serde_json::to_value(&result)
        .map_err(|e| format!("Failed to serialize result: {}", e))?;
    print_json(&json);

    if result.is_error() {
        return Err(format!(
            "Workflow reported failure: {}",
            result.reasoning.join("; ")
        ));
    }
    Ok(())
}

/// Validate the identifiers and run one workflow round trip.
pub async fn invoke(
    shift_id: &str,
    missing_employee_id: &str,
    workflow_url: Option<String>,
) -> Result<CoverageResult, String> {
    ShiftMissingEvent::new(shift_id, missing_employee_id)
        .validate()
        .map_err(|e| e.to_string())?;

    let config = WorkflowConfig::from_optional(workflow_url);
    tracing::debug!("Invoking workflow directly with {:?}", config);
    let client = WorkflowClient::new(&config).map_err(|e| e.to_string())?;

    Ok(client.invoke(shift_id, missing_employee_id).await)
}
