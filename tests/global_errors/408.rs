//! tests/global_errors/408.rs
//! Ensures that a handler outliving the configured timeout results in a 408.

use crate::common;

use axum::{routing::get, Router};
use echo_inference_api::{AppState, EnvironmentVariables};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "too late"
}

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let routes: Router<AppState> = Router::new().route("/slow", get(slow_handler));
    let base_url: String = common::spawn_routes_with(routes, EnvironmentVariables {
        default_timeout_seconds: 1,
        ..EnvironmentVariables::default()
    });

    // Client-side timeout well above the server's
    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5),
        reqwest::Client::new()
            .get(format!("{}/slow", base_url))
            .send(),
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
    assert_eq!(json["messages"][0], "Request timed out");
}
