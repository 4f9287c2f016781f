// Placeholder inference endpoint: echoes the input inside a fixed sentence.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
pub struct InferenceRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InferenceResponse {
    pub result: String,
}

/// No model is consulted; the input is embedded verbatim.
pub fn summarize(text: &str) -> String {
    format!("AI result: '{text}' summarized!")
}

/// Missing or non-string `text` is rejected by the `Json` extractor before this runs
#[instrument(name = "infer", skip(request), fields(text_len = request.text.len()))]
pub async fn infer_handler(
    Json(request): Json<InferenceRequest>,
) -> Json<InferenceResponse> {
    info!("Inference requested");

    Json(InferenceResponse {
        result: summarize(&request.text),
    })
}
