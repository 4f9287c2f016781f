// Small helpers shared by the response and error modules.

use serde::Serialize;
use anyhow::Result;

// Convert any `Serialize` type into a two-space-indented JSON string.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let json_value: serde_json::Value = serde_json::to_value(value)?;
    let pretty_json: String = serde_json::to_string_pretty(&json_value)?;
    Ok(pretty_json)
}

/// Turns a status reason phrase into the envelope form, e.g. "Not Found" -> "NOT_FOUND"
pub fn status_label(reason: &str) -> String {
    reason.to_uppercase().replace(' ', "_")
}
