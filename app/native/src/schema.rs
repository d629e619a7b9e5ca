//! JSON Schema generation for the tilegrid configuration file.

use crate::config::TileGridConfig;

/// Identifier embedded in the generated schema.
const SCHEMA_ID: &str = "https://tilegrid.dev/tilegrid.schema.json";

/// Generates a JSON Schema for the tilegrid configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(TileGridConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(SCHEMA_ID));
    }

    schema
}

/// Returns the schema as a pretty-printed JSON string.
#[must_use]
pub fn print_schema() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}
