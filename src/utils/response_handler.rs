// Unified error envelope for every non-success response.
// Successful bodies are left untouched so the endpoint contracts stay exact.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        response::Parts,
        HeaderValue, Request, Response, StatusCode,
    },
    Json,
    middleware::Next,
    response::IntoResponse,
};
use chrono::Utc;
use http_body_util::BodyExt;
use tracing::{error, warn};
use std::convert::Infallible;
use serde_json::{json, Value};
use serde::{Serialize, Deserialize};
use crate::utils::formatting::{status_label, to_two_space_indented_json};

/// JSON envelope used for error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "NOT_FOUND")
    pub code: u16,               // HTTP status code
    pub data: serde_json::Value, // Optional error payload
    pub messages: Vec<String>,   // Human-readable messages
    pub date: String,            // ISO timestamp
}

/// Builder handlers use to report a status with data and messages
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: serde_json::Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: serde_json::Value::Null,
            messages: Vec::new(),
        }
    }

    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(json!({
            "data": self.data,
            "messages": self.messages
        })).into_response();

        *response.status_mut() = self.status_code;

        // Picked up again by `error_wrapper`
        response.extensions_mut().insert(self);
        response
    }
}

/// Pulls data and messages out of a response, preferring a `HandlerResponse` extension
/// and falling back to the plain-text body produced by extractor rejections.
async fn extract_response_components(response: Response<Body>) -> (Parts, Vec<String>, Value) {
    let structured: Option<HandlerResponse> = response.extensions().get::<HandlerResponse>().cloned();
    let (parts, body) = response.into_parts();

    if let Some(r) = structured {
        return (parts, r.messages, r.data);
    }

    let messages: Vec<String> = match body.collect().await {
        Ok(collected) => {
            let text: String = String::from_utf8_lossy(&collected.to_bytes()).trim().to_string();
            if text.is_empty() { Vec::new() } else { vec![text] }
        }
        Err(err) => {
            warn!("Failed to read error body: {}", err);
            Vec::new()
        }
    };

    (parts, messages, Value::Null)
}

fn log_formatted_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => warn!("\nError response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

fn build_final_response(mut parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(wrapped).unwrap_or_else(|_| b"{}".to_vec());

    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(parts, Body::from(json_body))
}

/// Middleware that wraps every non-2xx response in `ResponseFormat`
pub async fn error_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let response: Response<Body> = next.run(req).await;

    if response.status().is_success() {
        return Ok(response);
    }

    let (parts, messages, data) = extract_response_components(response).await;

    let reason: &str = parts.status.canonical_reason().unwrap_or("UNKNOWN STATUS");

    let wrapped: ResponseFormat = ResponseFormat {
        status: status_label(reason),
        code: parts.status.as_u16(),
        data,
        messages,
        date: Utc::now().to_rfc3339(),
    };

    log_formatted_response(&wrapped);

    Ok(build_final_response(parts, &wrapped))
}
