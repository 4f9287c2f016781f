use axum::{routing::post, Router};

use crate::config::state::AppState;
use super::handler;

pub fn infer_routes() -> Router<AppState> {
    Router::new()
        .route("/api/infer", post(handler::infer_handler))
}
