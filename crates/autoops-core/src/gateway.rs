//! Coverage gateway - the inbound half of the coverage flow.
//!
//! Validates a `ShiftMissingEvent`, hands it to the workflow client and
//! turns the normalized result into either a success or a `ServerError`
//! that the HTTP layer maps onto a status code.

use tracing::Instrument;

use crate::error::ServerError;
use crate::models::{CoverageResult, ShiftMissingEvent};
use crate::workflow::{WorkflowClient, WorkflowConfig};

pub struct CoverageGateway {
    /// `Err` holds the configuration problem reported on every request.
    workflow: Result<WorkflowClient, String>,
}

impl CoverageGateway {
    /// Build the gateway and its workflow client.
    ///
    /// A missing or invalid webhook URL does not fail construction; it is
    /// reported per request as `ServerError::Configuration`. Only faults in
    /// building the HTTP stack itself are returned here.
    pub fn new(config: &WorkflowConfig) -> Result<Self, ServerError> {
        let workflow = match WorkflowClient::new(config) {
            Ok(client) => {
                tracing::info!(
                    "Workflow client ready (host: {}, timeout: {}s)",
                    client.endpoint_host(),
                    client.timeout().as_secs()
                );
                Ok(client)
            }
            Err(ServerError::Configuration(msg)) => {
                tracing::warn!("Workflow not configured: {}", msg);
                Err(msg)
            }
            Err(other) => return Err(other),
        };
        Ok(Self { workflow })
    }

    pub fn with_client(client: WorkflowClient) -> Self {
        Self {
            workflow: Ok(client),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.workflow.is_ok()
    }

    /// Submit a coverage request and return the workflow's decision.
    ///
    /// Validation runs first, then the configuration check, so neither
    /// path touches the network. A result flagged `error: true` becomes
    /// `ServerError::Workflow` with the reasoning attached.
    pub async fn submit(&self, event: &ShiftMissingEvent) -> Result<CoverageResult, ServerError> {
        let span = tracing::info_span!(
            "shift_missing",
            request_id = %uuid::Uuid::new_v4(),
            shift_id = %event.shift_id,
            missing_employee_id = %event.missing_employee_id
        );

        async move {
            tracing::info!(
                "Received shift_missing event: shift_id={}, missing_employee={}",
                event.shift_id,
                event.missing_employee_id
            );

            event.validate()?;

            let workflow = self
                .workflow
                .as_ref()
                .map_err(|msg| ServerError::Configuration(msg.clone()))?;

            let result = workflow
                .invoke(&event.shift_id, &event.missing_employee_id)
                .await;

            tracing::info!(
                "Agent decision: replacement={:?}, confidence={}",
                result.replacement_employee_id,
                result.confidence
            );

            if result.is_error() {
                return Err(ServerError::Workflow {
                    reasoning: result.reasoning,
                });
            }

            Ok(result)
        }
        .instrument(span)
        .await
    }
}
