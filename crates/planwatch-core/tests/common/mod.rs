#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use planwatch_core::{api::EXECUTIONS_ENDPOINT, api::PLANS_ENDPOINT, MonitorConfig};
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";

/// Helper function to create a config pointed at a mock server
pub fn test_config(server: &ServerGuard) -> MonitorConfig {
    MonitorConfig {
        base_url: Some(server.url()),
        api_token: Some(TEST_TOKEN.to_string()),
        timeout_secs: 5,
        max_retries: 2,
        retry_backoff_ms: 1,
        ..Default::default()
    }
}

/// A catalog item as the platform returns it
pub fn plan_item(plan_id: &str, name: &str, env: &str) -> Value {
    json!({
        "executable": plan_id,
        "name": name,
        "workspace": {
            "id": format!("ws-{plan_id}"),
            "name": "Personal",
            "environment": {"id": format!("env-{env}"), "name": env}
        }
    })
}

/// An execution history item as the platform returns it
pub fn execution_item(plan_id: &str, status: &str, finish: Option<&str>) -> Value {
    json!({
        "executionId": format!("exec-{plan_id}-{}", finish.unwrap_or("running")),
        "planId": plan_id,
        "status": status,
        "startTimestamp": "2024-01-01T09:00:00Z",
        "finishTimestamp": finish
    })
}

pub fn envelope(items: Vec<Value>) -> String {
    json!({"items": items, "limit": 100, "offset": 0}).to_string()
}

/// Mocks the catalog endpoint with a successful response
pub async fn mock_catalog(server: &mut ServerGuard, items: Vec<Value>) -> Mock {
    server
        .mock("GET", PLANS_ENDPOINT)
        .match_query(Matcher::Any)
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(items))
        .create_async()
        .await
}

/// Mocks one page of the execution history, expected exactly once
pub async fn mock_execution_page(
    server: &mut ServerGuard,
    offset: u64,
    items: Vec<Value>,
) -> Mock {
    server
        .mock("GET", EXECUTIONS_ENDPOINT)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "100".into()),
            Matcher::UrlEncoded("offset".into(), offset.to_string()),
            Matcher::UrlEncoded("lastDays".into(), "7".into()),
        ]))
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(items))
        .expect(1)
        .create_async()
        .await
}

/// Mocks the whole execution history as a single page followed by an empty one
pub async fn mock_executions(server: &mut ServerGuard, items: Vec<Value>) -> (Mock, Mock) {
    let first = mock_execution_page(server, 0, items).await;
    let last = mock_execution_page(server, 100, vec![]).await;
    (first, last)
}

/// `count` well-formed execution items spread over ten plans
pub fn execution_items(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            execution_item(
                &format!("P{}", i % 10),
                "execution_successful",
                Some(&format!("2024-01-01T{:02}:{:02}:00Z", (i / 60) % 24, i % 60)),
            )
        })
        .collect()
}
