//! Workflow integration - the outbound half of the coverage flow.
//!
//! Candidate lookup, ranking and LLM reasoning all happen in an external
//! workflow engine reached through a webhook. This module only knows how to
//! call it and how to read its answer.
//!
//! ```text
//! CoverageGateway ──► WorkflowClient ──POST──► workflow webhook
//!        ▲                  │
//!        └── CoverageResult ┘  (success, or error: true with a reason)
//! ```

pub mod client;
pub mod config;

pub use client::{WorkflowClient, WorkflowError};
pub use config::{WorkflowConfig, DEFAULT_TIMEOUT, WORKFLOW_URL_ENV};
