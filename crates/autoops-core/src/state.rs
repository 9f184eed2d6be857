//! Shared application state for the axum server.

use std::sync::Arc;

use crate::error::ServerError;
use crate::gateway::CoverageGateway;
use crate::workflow::WorkflowConfig;

/// Shared state accessible by all API handlers.
pub struct AppStateInner {
    pub gateway: CoverageGateway,
}

pub type AppState = Arc<AppStateInner>;

impl AppStateInner {
    pub fn new(gateway: CoverageGateway) -> Self {
        Self { gateway }
    }

    pub fn from_config(config: &WorkflowConfig) -> Result<Self, ServerError> {
        Ok(Self::new(CoverageGateway::new(config)?))
    }
}
