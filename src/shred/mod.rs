//! JSON Schema shredding - derive relational DDL from nested API schemas
//!
//! This module decomposes the nested `jsonSchemaForInsert` of each API
//! resource into a normalized set of PostgreSQL tables: one main table per
//! resource, one child table per array-of-objects (recursively), plus a
//! natural-key lookup index per table.
//!
//! The pipeline is translator -> expander -> indexer -> emitter, driven by
//! [`SchemaShredder`]; all intermediate definitions are plain value
//! records built in a single synchronous pass.

pub mod emitter;
pub mod expander;
pub mod indexer;
pub mod naming;
pub mod schema;
pub mod shredder;
pub mod translator;
pub mod types;

pub use shredder::SchemaShredder;
pub use types::{ColumnDefinition, IndexDefinition, ShredConfig, ShredError, TableDefinition};
