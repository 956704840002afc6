//! Endpoint sweep tests against a WireMock backend

use home_controller_rust::verify::{verify_endpoints, VerifyOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

mod common;
use common::{test_client, unused_local_url, MockHomeBackend};

#[tokio::test]
async fn test_status_only_sweep_sends_no_actions() {
    let backend = MockHomeBackend::start().await;
    let client = test_client(backend.url());

    let report = verify_endpoints(&client, VerifyOptions::default()).await;

    let checks: Vec<(&str, &str)> = report
        .checks
        .iter()
        .map(|c| (c.method, c.path.as_str()))
        .collect();
    assert_eq!(checks, vec![("GET", "/light/modes"), ("GET", "/ac/status")]);
    assert!(report.all_passed());
    assert_eq!(report.base_url, backend.url());

    let requests = backend.server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
}

#[tokio::test]
async fn test_full_sweep_covers_every_endpoint() {
    let backend = MockHomeBackend::start().await;
    let client = test_client(backend.url());

    let report = verify_endpoints(
        &client,
        VerifyOptions {
            include_actions: true,
        },
    )
    .await;

    assert_eq!(report.checks.len(), 16);
    assert_eq!(report.passed(), 16);
    assert_eq!(report.checks[0].path, "/light/modes");
    assert_eq!(report.checks[1].path, "/light/all-bright");
    assert_eq!(report.checks[6].path, "/ac/status");
    assert_eq!(report.checks[7].path, "/ac/aircon/on");
    assert_eq!(report.checks[15].path, "/ac/timer/down");
    assert_eq!(backend.request_count().await, 16);
}

#[tokio::test]
async fn test_failures_are_counted_and_reported() {
    let backend = MockHomeBackend::start().await;
    backend
        .mock_error_detail("/light/bright", 404, "IR code file not found: light_bright.txt")
        .await;
    backend
        .mock_json("GET", "/ac/status", 200, json!({ "available_modes": [] }))
        .await;
    let client = test_client(backend.url());

    let report = verify_endpoints(
        &client,
        VerifyOptions {
            include_actions: true,
        },
    )
    .await;

    assert_eq!(report.failed(), 2);
    assert!(!report.all_passed());

    let failed: Vec<&str> = report
        .checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.path.as_str())
        .collect();
    assert_eq!(failed, vec!["/light/bright", "/ac/status"]);
    assert_eq!(
        report.checks[2].detail,
        "IR code file not found: light_bright.txt"
    );
    assert!(report.checks[6].detail.starts_with("Decoding error"));
}

#[tokio::test]
async fn test_unreachable_backend_fails_every_check() {
    let client = test_client(&unused_local_url());

    let report = verify_endpoints(&client, VerifyOptions::default()).await;

    assert_eq!(report.checks.len(), 2);
    assert_eq!(report.failed(), 2);
    assert!(report
        .checks
        .iter()
        .all(|c| c.detail.starts_with("Network error")));
}

#[tokio::test]
async fn test_report_serializes_for_json_output() {
    let backend = MockHomeBackend::start().await;
    let client = test_client(backend.url());

    let report = verify_endpoints(&client, VerifyOptions::default()).await;
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["checks"][0]["method"], "GET");
    assert_eq!(value["checks"][0]["passed"], true);
    assert_eq!(value["checks"][0]["detail"], "all_bright, bright, dark, off, on");
    assert_eq!(
        value["checks"][1]["detail"],
        "3 modes, 3 temperature controls, 3 timer controls"
    );
}
