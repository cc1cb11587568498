//! Natural-Key Indexer
//!
//! Derives one non-unique lookup index per table. Main tables get theirs
//! from the resource's declared `identityJsonPaths`; child tables from the
//! foreign-key columns inherited from the parent plus the child schema's
//! required fields. The index is a lookup aid only, never a uniqueness
//! constraint, and duplicate column names inside one index are accepted.

use crate::shred::naming;
use crate::shred::schema::{properties, PropertyKind};
use crate::shred::translator::scalar_data_type;
use crate::shred::types::{ColumnDefinition, IndexDefinition, TableDefinition};
use serde_json::Value;

/// Resolve `identityJsonPaths` against a table's columns.
///
/// The last segment of each path (after the final `.`) is matched
/// case-insensitively against the column names; matches are returned in
/// path order. Paths that match nothing are dropped.
pub fn natural_key_columns<'a>(
    identity_json_paths: &Value,
    table: &'a TableDefinition,
) -> Vec<&'a ColumnDefinition> {
    let Some(paths) = identity_json_paths.as_array() else {
        return Vec::new();
    };

    paths
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|path| {
            let candidate = path.rsplit('.').next()?;
            table
                .columns
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(candidate))
        })
        .collect()
}

/// Lookup index for a resource's main table, `None` when no identity path
/// resolves to a column.
pub fn main_table_index(
    resource_name: &str,
    identity_json_paths: &Value,
    table: &TableDefinition,
) -> Option<IndexDefinition> {
    let columns: Vec<String> = natural_key_columns(identity_json_paths, table)
        .into_iter()
        .map(|c| c.name.clone())
        .collect();

    if columns.is_empty() {
        return None;
    }

    Some(IndexDefinition {
        name: format!("nk_{resource_name}"),
        table_name: table.shortened_name.clone(),
        columns,
    })
}

/// Lookup index for a child (array) table.
///
/// The key is the inherited foreign-key columns (capitalized parent
/// natural-key names) followed by the child's `required` fields in
/// declaration order. A required field ending in "Reference" is expanded
/// into the scalar property names nested one level inside that reference
/// object, mirroring the columns the translator flattens out of it; when
/// the reference object cannot be resolved the field name itself is used.
pub fn child_table_index(
    parent_table_name: &str,
    property_name: &str,
    parent_key_columns: &[ColumnDefinition],
    items: &Value,
    table: &TableDefinition,
) -> Option<IndexDefinition> {
    let mut columns: Vec<String> = parent_key_columns
        .iter()
        .filter(|c| !c.is_primary_key)
        .map(|c| naming::capitalize(&c.name))
        .collect();

    let required = items
        .get("required")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for name in required.iter().filter_map(Value::as_str) {
        let reference_members = if name.ends_with("Reference") {
            properties(items)
                .and_then(|props| props.get(name))
                .and_then(properties)
        } else {
            None
        };

        match reference_members {
            // only members that flatten into columns can be indexed
            Some(members) => columns.extend(
                members
                    .iter()
                    .filter(|(_, value)| scalar_data_type(&PropertyKind::of(value)).is_some())
                    .map(|(member_name, _)| member_name.clone()),
            ),
            None => columns.push(naming::capitalize(name)),
        }
    }

    if columns.is_empty() {
        return None;
    }

    Some(IndexDefinition {
        name: format!("nk_{parent_table_name}{property_name}"),
        table_name: table.shortened_name.clone(),
        columns,
    })
}
