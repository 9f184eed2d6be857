//! Argument definitions and command implementations for the `autoops` binary.

pub mod commands;

use clap::{Parser, Subcommand};

/// AutoOps CLI - Shift coverage service
#[derive(Debug, Parser)]
#[command(name = "autoops", version, about = "AutoOps CLI - Shift coverage service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the AutoOps HTTP backend server
    Server {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(long, env = "API_PORT", default_value_t = 8000)]
        port: u16,
        /// Workflow webhook URL (includes the workflow API key)
        #[arg(long, env = "RETOOL_WORKFLOW_URL", hide_env_values = true)]
        workflow_url: Option<String>,
    },

    /// Call the coverage workflow once and print the normalized result
    Invoke {
        /// ID of the shift that needs coverage
        #[arg(long)]
        shift_id: String,
        /// ID of the employee who is unavailable
        #[arg(long)]
        missing_employee_id: String,
        /// Workflow webhook URL (includes the workflow API key)
        #[arg(long, env = "RETOOL_WORKFLOW_URL", hide_env_values = true)]
        workflow_url: Option<String>,
    },

    /// Smoke-test a running server: health check, then one coverage request
    Check {
        /// Base URL of the running API
        #[arg(long, default_value = "http://localhost:8000")]
        base_url: String,
        /// ID of the shift that needs coverage
        #[arg(long, default_value = "shift_123")]
        shift_id: String,
        /// ID of the employee who is unavailable
        #[arg(long, default_value = "emp_001")]
        missing_employee_id: String,
    },
}
