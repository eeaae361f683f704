use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static HEADER_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/header_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid header schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile header schema")
});

static INSPECTION_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/inspection_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid inspection schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile inspection schema")
});

static BUILDING_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/building_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid building schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile building schema")
});

/// Validate the header line rendition: `{"line": "<B> <numToInspect>"}`
pub fn validate_header_line(header: &Value) -> Result<()> {
    check(&HEADER_SCHEMA, header, "Header line")
}

/// Validate the inspection line rendition: `{"ids": ["<id>", ..]}`
pub fn validate_inspection_line(inspection: &Value) -> Result<()> {
    check(&INSPECTION_SCHEMA, inspection, "Inspection line")
}

/// Validate a building line rendition: `{"id": "<id>", "count": "<n>", "neighbors": [..]}`
pub fn validate_building_line(building: &Value) -> Result<()> {
    check(&BUILDING_SCHEMA, building, "Building line")
}

fn check(schema: &JSONSchema, value: &Value, what: &str) -> Result<()> {
    match schema.validate(value) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!("{what} validation failed:\n{}", error_list.join("\n")))
        }
    }
}
