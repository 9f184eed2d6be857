//! AutoOps Core - Transport-agnostic domain logic for shift coverage.
//!
//! A missing shift is reported as a `ShiftMissingEvent`. The coverage
//! gateway validates it and asks an external workflow engine to pick a
//! replacement; the answer comes back as a normalized `CoverageResult`.
//! Nothing is stored locally.
//!
//! This crate has **no HTTP framework dependency** by default, so the same
//! gateway backs the HTTP server (`autoops-server`) and the CLI.
//!
//! # Feature Flags
//!
//! - `axum` - Enables `IntoResponse` impl on `ServerError` for use in axum handlers.

pub mod error;
pub mod gateway;
pub mod models;
pub mod state;
pub mod workflow;

// Convenience re-exports
pub use error::ServerError;
pub use gateway::CoverageGateway;
pub use models::{CoverageResult, ShiftMissingEvent};
pub use state::{AppState, AppStateInner};
pub use workflow::{WorkflowClient, WorkflowConfig, WorkflowError};
