//! tests/global_errors/405.rs
//! A known route with the wrong method is wrapped like any other error.

use crate::common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_405_for_wrong_method() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/infer", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["code"], 405);
}
