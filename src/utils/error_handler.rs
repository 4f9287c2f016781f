// Global error handling for the middleware stack

use axum::{
    BoxError,
    http::StatusCode,
};
use std::error::Error;
use tower::timeout::error::Elapsed;
use http_body_util::LengthLimitError;
use serde_json::json;
use tracing::error;

use crate::utils::response_handler::HandlerResponse;

/// Maps errors raised by tower layers to HTTP responses
pub async fn handle_global_error(err: BoxError) -> HandlerResponse {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&*err).is_some() {
        return HandlerResponse::new(StatusCode::PAYLOAD_TOO_LARGE)
            .message("Request body too large");
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return HandlerResponse::new(StatusCode::REQUEST_TIMEOUT)
            .message("Request timed out");
    }

    error!("Unhandled internal error: {}", err);

    HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
        .message("Unhandled internal error")
}

/// Logs `err` and builds a 500 that carries only `error_code` and a generic message
pub fn internal_error(error_code: &str, message: &str, err: anyhow::Error) -> HandlerResponse {
    error!(error_code, "{:#}", err);

    HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
        .data(json!({ "error": error_code }))
        .message(message)
}

/// Responds to any route that does not exist
pub async fn fallback_handler() -> HandlerResponse {
    HandlerResponse::new(StatusCode::NOT_FOUND)
        .message("The requested route does not exist")
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
