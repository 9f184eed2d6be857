//! `autoops check` - Smoke-test a running AutoOps server.
//!
//! Hits `/health`, then submits one shift_missing event and prints the
//! decision. Any non-200 answer fails the command.

use std::time::Duration;

use autoops_core::CoverageResult;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn run(base_url: &str, shift_id: &str, missing_employee_id: &str) -> Result<(), String> {
    println!("{}", "=".repeat(60));
    println!("AutoOps API Check - Shift Coverage");
    println!("{}", "=".repeat(60));
    println!();

    let decision = fetch_decision(base_url, shift_id, missing_employee_id).await?;
    print_decision(&decision);
    Ok(())
}

/// Run the health check and the coverage request, returning the decision.
pub async fn fetch_decision(
    base_url: &str,
    shift_id: &str,
    missing_employee_id: &str,
) -> Result<CoverageResult, String> {
    let base_url = base_url.trim_end_matches('/');
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    println!("1. Testing health endpoint...");
    let response = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .map_err(|e| {
            format!(
                "Failed to connect to API: {} (make sure the server is running at {})",
                e, base_url
            )
        })?;
    if !response.status().is_success() {
        return Err(format!("Health check failed: {}", response.status()));
    }
    let health: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Health check returned invalid JSON: {}", e))?;
    println!("   Health check passed: {}", health);
    println!();

    println!("2. Testing shift_missing endpoint...");
    println!("   Shift ID: {}", shift_id);
    println!("   Missing Employee: {}", missing_employee_id);

    let response = client
        .post(format!("{}/event/shift-missing", base_url))
        .json(&serde_json::json!({
            "event_type": "shift_missing",
            "shift_id": shift_id,
            "missing_employee_id": missing_employee_id,
        }))
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                format!(
                    "Request timed out (took more than {} seconds); the agent may be taking too long to process",
                    REQUEST_TIMEOUT.as_secs()
                )
            } else {
                format!("Request failed: {}", e)
            }
        })?;

    let status = response.status();
    println!("   Status Code: {}", status.as_u16());
    println!();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!(
            "Request failed with status code {}: {}",
            status.as_u16(),
            body
        ));
    }

    response
        .json::<CoverageResult>()
        .await
        .map_err(|e| format!("Coverage response was not a valid result: {}", e))
}

fn print_decision(decision: &CoverageResult) {
    println!("{}", "=".repeat(60));
    println!("AGENT DECISION");
    println!("{}", "=".repeat(60));
    println!();
    println!(
        "Replacement Employee ID: {}",
        decision.replacement_employee_id.as_deref().unwrap_or("(none)")
    );
    if let Some(name) = &decision.replacement_employee_name {
        println!("Replacement Employee: {}", name);
    }
    println!("Confidence: {:.0}%", decision.confidence * 100.0);
    println!();
    println!("Reasoning:");
    for (i, reason) in decision.reasoning.iter().enumerate() {
        println!("  {}. {}", i + 1, reason);
    }
    println!();
    println!("{}", "=".repeat(60));
}
