//! `autoops server` - Start the AutoOps HTTP backend server.

use autoops_core::workflow::WORKFLOW_URL_ENV;
use autoops_core::WorkflowConfig;

pub async fn run(host: String, port: u16, workflow_url: Option<String>) -> Result<(), String> {
    let config = autoops_server::ServerConfig {
        host: host.clone(),
        port,
        workflow: WorkflowConfig::from_optional(workflow_url),
    };

    if !config.workflow.is_configured() {
        println!(
            "Warning: {} is not set; coverage requests will be rejected until it is configured.",
            WORKFLOW_URL_ENV
        );
    }

    println!("Starting AutoOps server on {}:{}...", host, port);

    let addr = autoops_server::start_server(config).await?;
    println!("AutoOps server listening on http://{}", addr);

    // Keep the process running until interrupted
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for Ctrl+C: {}", e))?;

    println!("\nShutting down...");
    Ok(())
}
