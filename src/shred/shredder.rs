//! Top-level driver: one API schema document in, one DDL script out.

use crate::shred::types::{ColumnDefinition, ShredConfig, ShredError};
use crate::shred::{emitter, expander, indexer, naming, schema, translator};
use serde_json::Value;

/// Resources with this suffix are enumerated-value lookups and are not
/// shredded into tables.
const DESCRIPTOR_SUFFIX: &str = "descriptors";

/// Translates an API schema document into a PostgreSQL DDL script.
///
/// The whole translation is a single synchronous pass over the in-memory
/// document; reading the schema file and executing the script belong to
/// the caller.
#[derive(Debug, Clone, Default)]
pub struct SchemaShredder {
    config: ShredConfig,
}

impl SchemaShredder {
    pub fn new(config: ShredConfig) -> Self {
        SchemaShredder { config }
    }

    /// Generate the script for every non-descriptor resource in the
    /// document.
    ///
    /// Fails when `projectSchema`, `projectEndpointName`, or
    /// `resourceSchemas` is absent, and when array nesting exceeds the
    /// configured depth; no partial script is returned in either case.
    /// Resources lacking `jsonSchemaForInsert` or `identityJsonPaths` are
    /// skipped silently.
    pub fn generate_ddl_script(&self, document: &Value) -> Result<String, ShredError> {
        let project_schema = document
            .get("projectSchema")
            .ok_or(ShredError::MissingRequiredField("projectSchema"))?;
        let endpoint_name = project_schema
            .get("projectEndpointName")
            .and_then(Value::as_str)
            .ok_or(ShredError::MissingRequiredField("projectEndpointName"))?;
        let resource_schemas = project_schema
            .get("resourceSchemas")
            .and_then(Value::as_object)
            .ok_or(ShredError::MissingRequiredField("resourceSchemas"))?;

        let mut tables = Vec::new();
        let mut indexes = Vec::new();

        for (resource_name, resource) in resource_schemas {
            if resource_name.to_lowercase().ends_with(DESCRIPTOR_SUFFIX) {
                continue;
            }
            let Some(json_schema) = resource.get("jsonSchemaForInsert") else {
                continue;
            };
            let Some(identity_paths) = resource.get("identityJsonPaths") else {
                continue;
            };

            let short_name = naming::shorten(resource_name);
            let main_table = translator::translate_schema_to_table(
                endpoint_name,
                resource_name,
                &short_name,
                json_schema,
                None,
            );

            // The resource's natural-key columns double as the foreign
            // keys propagated into every child table.
            let natural_keys: Vec<ColumnDefinition> =
                indexer::natural_key_columns(identity_paths, &main_table)
                    .into_iter()
                    .cloned()
                    .collect();

            if let Some(index) = indexer::main_table_index(resource_name, identity_paths, &main_table)
            {
                indexes.push(index);
            }

            tables.push(main_table);

            if let Some(props) = schema::properties(json_schema) {
                expander::expand_array_tables(
                    endpoint_name,
                    resource_name,
                    props,
                    &natural_keys,
                    &mut tables,
                    &mut indexes,
                    0,
                    &self.config,
                )?;
            }
        }

        Ok(emitter::emit_ddl(endpoint_name, &tables, &indexes))
    }
}
