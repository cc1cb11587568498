//! Schema Table Translator
//!
//! Turns one object-typed JSON Schema fragment into a table definition:
//! surrogate primary key first, inherited parent foreign-key columns next,
//! then the schema's own scalar and flattened nested-object properties.
//! Array-typed properties are not columns; the expander turns each into a
//! child table.

use crate::shred::naming;
use crate::shred::schema::{properties, required_properties, PropertyKind};
use crate::shred::types::{ColumnDefinition, TableDefinition};
use serde_json::Value;

/// Translate an object schema into a table.
///
/// `parent_columns` is `Some` when this call produces a child table for a
/// nested array; every non-primary-key parent column is copied in as a
/// required foreign-key column under its capitalized name. The reference
/// is by convention only; no `REFERENCES` constraint is emitted.
pub fn translate_schema_to_table(
    schema_prefix: &str,
    full_name: &str,
    short_name: &str,
    json_schema: &Value,
    parent_columns: Option<&[ColumnDefinition]>,
) -> TableDefinition {
    let mut table = TableDefinition::new(
        format!("{schema_prefix}.{full_name}"),
        format!("{}.{}", naming::shorten(schema_prefix), short_name),
    );

    if let Some(parents) = parent_columns {
        for parent in parents.iter().filter(|c| !c.is_primary_key) {
            table.push_column(ColumnDefinition::new(
                naming::capitalize(&parent.name),
                parent.data_type.clone(),
                false,
            ));
        }
    }

    let required = required_properties(json_schema);

    if let Some(props) = properties(json_schema) {
        for (name, value) in props {
            let is_required = required.contains(name.as_str());

            match PropertyKind::of(value) {
                PropertyKind::Array { .. } => {
                    // becomes a separate table, see expander
                }
                PropertyKind::Object {
                    properties: nested_props,
                    required: nested_required,
                } => {
                    // Flatten one level: each scalar member lands directly
                    // on this table under its own (unprefixed) name.
                    let Some(nested_props) = nested_props else {
                        continue;
                    };

                    for (nested_name, nested_value) in nested_props {
                        if let Some(data_type) = scalar_data_type(&PropertyKind::of(nested_value)) {
                            let nullable = !nested_required.contains(nested_name.as_str());
                            table.push_column(ColumnDefinition::new(
                                nested_name.clone(),
                                data_type,
                                nullable,
                            ));
                        }
                    }
                }
                kind => {
                    if let Some(data_type) = scalar_data_type(&kind) {
                        table.push_column(ColumnDefinition::new(name.clone(), data_type, !is_required));
                    }
                }
            }
        }
    }

    table
}

/// Map a scalar property to its PostgreSQL data type. Non-scalar kinds and
/// properties with no usable type yield `None` and are skipped.
pub(crate) fn scalar_data_type(kind: &PropertyKind) -> Option<String> {
    match kind {
        PropertyKind::String {
            format: Some("date"), ..
        } => Some("DATE".to_string()),
        PropertyKind::String {
            format: Some("time"), ..
        } => Some("TIME".to_string()),
        PropertyKind::String {
            max_length: Some(n), ..
        } => Some(format!("VARCHAR({n})")),
        PropertyKind::String { .. } => Some("TEXT".to_string()),
        PropertyKind::Integer => Some("INTEGER".to_string()),
        PropertyKind::Boolean => Some("BOOLEAN".to_string()),
        // bare "number" carries no length or precision to map from; skipped
        // like the untyped case
        PropertyKind::Number => None,
        PropertyKind::Array { .. } | PropertyKind::Object { .. } | PropertyKind::Skip => None,
    }
}
