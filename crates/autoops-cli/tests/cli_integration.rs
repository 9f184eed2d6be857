//! Integration tests for the autoops-cli commands.
//!
//! These tests exercise the same code paths as the binary: argument
//! parsing, a direct workflow call, and the smoke check against a live
//! in-process server.

use autoops_cli::commands;
use autoops_cli::{Cli, Commands};
use autoops_core::WorkflowConfig;
use autoops_server::{create_app_state, start_server_with_state, ServerConfig};
use clap::Parser;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_workflow(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Start a real server on an ephemeral port, backed by the given workflow.
async fn running_server(workflow: &MockServer) -> String {
    let workflow_config = WorkflowConfig::new(format!("{}/workflow", workflow.uri()));
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        workflow: workflow_config.clone(),
    };
    let state = create_app_state(&workflow_config).expect("Failed to build state");
    let addr = start_server_with_state(config, state)
        .await
        .expect("Failed to start server");
    format!("http://{}", addr)
}

#[test]
fn test_parse_server_defaults() {
    let cli = Cli::try_parse_from(["autoops", "server", "--workflow-url", "https://example.com/hook"])
        .unwrap();
    match cli.command {
        Commands::Server {
            host,
            workflow_url,
            ..
        } => {
            assert_eq!(host, "0.0.0.0");
            assert_eq!(workflow_url.as_deref(), Some("https://example.com/hook"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_check_defaults() {
    let cli = Cli::try_parse_from(["autoops", "check"]).unwrap();
    match cli.command {
        Commands::Check {
            base_url,
            shift_id,
            missing_employee_id,
        } => {
            assert_eq!(base_url, "http://localhost:8000");
            assert_eq!(shift_id, "shift_123");
            assert_eq!(missing_employee_id, "emp_001");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_invoke_requires_ids() {
    assert!(Cli::try_parse_from(["autoops", "invoke", "--shift-id", "shift_123"]).is_err());
}

#[tokio::test]
async fn test_invoke_returns_normalized_result() {
    let workflow = mock_workflow(
        200,
        json!({"replacement_employee_id": "emp_002", "confidence": 0.84, "reasoning": ["a"]}),
    )
    .await;

    let result = commands::invoke::invoke(
        "shift_123",
        "emp_001",
        Some(format!("{}/workflow", workflow.uri())),
    )
    .await
    .unwrap();

    assert_eq!(result.replacement_employee_id.as_deref(), Some("emp_002"));
    assert_eq!(result.confidence, 0.84);
}

#[tokio::test]
async fn test_invoke_without_url_fails() {
    let err = commands::invoke::invoke("shift_123", "emp_001", None)
        .await
        .unwrap_err();
    assert!(err.contains("RETOOL_WORKFLOW_URL"));
}

#[tokio::test]
async fn test_invoke_run_fails_on_workflow_error() {
    let workflow = mock_workflow(503, json!({})).await;
    let err = commands::invoke::run(
        "shift_123",
        "emp_001",
        Some(format!("{}/workflow", workflow.uri())),
    )
    .await
    .unwrap_err();
    assert!(err.contains("503"));
}

#[tokio::test]
async fn test_check_against_running_server() {
    let workflow = mock_workflow(
        200,
        json!({
            "replacement_employee_id": "emp_002",
            "confidence": 0.84,
            "reasoning": ["available", "reliable", "fewer recent shifts"]
        }),
    )
    .await;
    let base_url = running_server(&workflow).await;

    let decision = commands::check::fetch_decision(&base_url, "shift_123", "emp_001")
        .await
        .unwrap();

    assert_eq!(decision.replacement_employee_id.as_deref(), Some("emp_002"));
    assert_eq!(decision.reasoning.len(), 3);
    assert!(commands::check::run(&base_url, "shift_123", "emp_001").await.is_ok());
}

#[tokio::test]
async fn test_check_reports_server_failure() {
    let workflow = mock_workflow(500, json!({"message": "boom"})).await;
    let base_url = running_server(&workflow).await;

    let err = commands::check::fetch_decision(&base_url, "shift_123", "emp_001")
        .await
        .unwrap_err();
    assert!(err.contains("500"));
}
