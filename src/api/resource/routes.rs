// Resource route definitions

use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Registers the group with and without the trailing slash
pub fn resource_routes() -> Router<AppState> {
    let collection: MethodRouter<AppState> = get(handler::list_resources_handler)
        .post(handler::create_resource_handler);

    Router::new()
        .route("/api/resource/", collection.clone())
        .route("/api/resource", collection)
}
