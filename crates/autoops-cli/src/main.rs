//! AutoOps CLI - command-line entry point for the shift coverage service.
//!
//! Reuses the same coverage gateway (autoops-core) and server bootstrap
//! (autoops-server) as the deployed HTTP API.

use autoops_cli::{commands, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "autoops_core=info,autoops_server=info,autoops_cli=info,tower_http=info".into()
            }),
        )
        .init();

    let result = match cli.command {
        Commands::Server {
            host,
            port,
            workflow_url,
        } => commands::server::run(host, port, workflow_url).await,

        Commands::Invoke {
            shift_id,
            missing_employee_id,
            workflow_url,
        } => commands::invoke::run(&shift_id, &missing_employee_id, workflow_url).await,

        Commands::Check {
            base_url,
            shift_id,
            missing_employee_id,
        } => commands::check::run(&base_url, &shift_id, &missing_employee_id).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
