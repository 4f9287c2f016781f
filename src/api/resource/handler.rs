// Resource route group: the scaffold new CRUD endpoints are copied from.
// Nothing is persisted yet; `fetch_resources` and `create_resource` are the
// seams where storage plugs in.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::utils::{error_handler::internal_error, response_handler::HandlerResponse};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceModel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Lists every resource visible to the caller
#[instrument(name = "list_resources")]
pub async fn list_resources_handler() -> Result<Json<Vec<Value>>, HandlerResponse> {
    info!("Listing resources");

    match fetch_resources().await {
        Ok(resources) => {
            info!("Retrieved {} resources", resources.len());
            Ok(Json(resources))
        }
        Err(e) => Err(internal_error(
            "resource_list_failed",
            "An error occurred while retrieving resources",
            e,
        )),
    }
}

/// Creates a resource from an arbitrary JSON object
#[instrument(name = "create_resource", skip(payload), fields(keys = payload.len()))]
pub async fn create_resource_handler(
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<ResourceModel>, HandlerResponse> {
    info!("Creating resource");

    match create_resource(&payload).await {
        Ok(resource) => {
            info!("Created resource {}", resource.id);
            Ok(Json(resource))
        }
        Err(e) => Err(internal_error(
            "resource_creation_failed",
            "An error occurred while creating the resource",
            e,
        )),
    }
}

async fn fetch_resources() -> anyhow::Result<Vec<Value>> {
    Ok(Vec::new())
}

// The payload is accepted but not yet read
async fn create_resource(_payload: &Map<String, Value>) -> anyhow::Result<ResourceModel> {
    Ok(ResourceModel {
        id: "1".to_string(),
        name: "New Resource".to_string(),
        description: None,
    })
}
