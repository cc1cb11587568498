//! # Shredder - JSON Schema to PostgreSQL DDL
//!
//! A library for shredding nested API resource schemas into normalized
//! relational table definitions and rendering them as PostgreSQL DDL.
//!
//! The input is an API schema document: a `projectSchema` containing
//! `resourceSchemas`, each with the resource's `identityJsonPaths` and its
//! nested `jsonSchemaForInsert`. The output is one script with a
//! `CREATE SCHEMA`, a `CREATE TABLE` per resource and per nested array,
//! and a natural-key `CREATE INDEX` per table.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! # fn main() -> Result<(), shredder::ShredError> {
//! let document = json!({
//!     "projectSchema": {
//!         "projectEndpointName": "ed-fi",
//!         "resourceSchemas": {
//!             "students": {
//!                 "identityJsonPaths": ["$.studentUniqueId"],
//!                 "jsonSchemaForInsert": {
//!                     "properties": {
//!                         "studentUniqueId": {"type": "string", "maxLength": 32},
//!                         "birthDate": {"type": "string", "format": "date"}
//!                     },
//!                     "required": ["studentUniqueId"]
//!                 }
//!             }
//!         }
//!     }
//! });
//!
//! let script = shredder::generate_ddl(&document)?;
//! assert!(script.contains("CREATE TABLE edfi.students"));
//! assert!(script.contains("CREATE INDEX nk_students"));
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

pub mod shred;

// Re-export commonly used types for convenience
pub use shred::{
    ColumnDefinition, IndexDefinition, SchemaShredder, ShredConfig, ShredError, TableDefinition,
};

/// Main entry point: shred an API schema document with the default
/// configuration.
pub fn generate_ddl(document: &Value) -> Result<String, ShredError> {
    SchemaShredder::new(ShredConfig::default()).generate_ddl_script(document)
}
