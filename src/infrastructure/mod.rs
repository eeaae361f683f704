// Infrastructure layer: traversal adapters, text I/O, schemas, eventing
pub mod event_ndjson;
pub mod schema_validator;
pub mod sector_scan;
pub mod text_input;
