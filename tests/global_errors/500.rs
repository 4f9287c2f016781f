//! tests/global_errors/500.rs
//! Ensures that an internal handler error maps to a 500 without leaking the cause.

use crate::common;

use axum::{routing::get, Router};
use echo_inference_api::{utils::error_handler::internal_error, utils::response_handler::HandlerResponse};
use echo_inference_api::{AppState, EnvironmentVariables};
use reqwest::StatusCode;
use serde_json::Value;

async fn failing_handler() -> Result<&'static str, HandlerResponse> {
    let cause: anyhow::Error = anyhow::anyhow!("disk quota exceeded on /var/lib/secret-volume");

    Err(internal_error(
        "resource_list_failed",
        "An error occurred while retrieving resources",
        cause,
    ))
}

#[tokio::test]
async fn returns_500_on_internal_error() {
    let routes: Router<AppState> = Router::new().route("/failing", get(failing_handler));
    let base_url: String = common::spawn_routes_with(routes, EnvironmentVariables::default());

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/failing", base_url))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: String = resp.text().await.unwrap();
    assert!(!body.contains("secret-volume"));

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "INTERNAL_SERVER_ERROR");
    assert_eq!(json["code"], 500);
    assert_eq!(json["data"]["error"], "resource_list_failed");
    assert_eq!(json["messages"][0], "An error occurred while retrieving resources");
}
