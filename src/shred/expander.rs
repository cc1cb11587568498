//! Nested Array Expander
//!
//! Walks a schema's properties for arrays-of-objects, producing one child
//! table per array and recursing into grandchildren. Each child inherits
//! the parent's natural-key columns as foreign keys; each level deeper
//! uses the child's own non-primary-key columns as the keys to propagate.

use crate::shred::indexer;
use crate::shred::naming;
use crate::shred::schema::{properties, PropertyKind};
use crate::shred::translator::translate_schema_to_table;
use crate::shred::types::{ColumnDefinition, IndexDefinition, ShredConfig, ShredError, TableDefinition};
use serde_json::{Map, Value};

/// Expand every array-typed property under `props` into child tables and
/// their lookup indexes. Tables are appended depth-first: each child is
/// immediately followed by its own descendants.
///
/// Input nesting is the only bound on recursion, so a cyclic or
/// pathological document is cut off at `config.max_depth` with a fatal
/// error rather than overflowing the stack.
#[allow(clippy::too_many_arguments)]
pub fn expand_array_tables(
    schema_prefix: &str,
    parent_name: &str,
    props: &Map<String, Value>,
    parent_key_columns: &[ColumnDefinition],
    tables: &mut Vec<TableDefinition>,
    indexes: &mut Vec<IndexDefinition>,
    depth: usize,
    config: &ShredConfig,
) -> Result<(), ShredError> {
    for (property_name, value) in props {
        // arrays without an items schema are benign omissions
        let PropertyKind::Array { items: Some(items) } = PropertyKind::of(value) else {
            continue;
        };

        if depth >= config.max_depth {
            return Err(ShredError::SchemaTooDeep {
                resource: parent_name.to_string(),
                max_depth: config.max_depth,
            });
        }

        let child_full_name = format!(
            "{}{}",
            naming::normalize(parent_name),
            naming::normalize(property_name)
        );
        let child_short_name = naming::shorten(&child_full_name);

        let child = translate_schema_to_table(
            schema_prefix,
            &child_full_name,
            &child_short_name,
            items,
            Some(parent_key_columns),
        );

        if let Some(index) =
            indexer::child_table_index(parent_name, property_name, parent_key_columns, items, &child)
        {
            indexes.push(index);
        }

        let child_key_columns: Vec<ColumnDefinition> = child.non_key_columns().cloned().collect();
        let grandchild_props = properties(items);
        tables.push(child);

        if let Some(grandchild_props) = grandchild_props {
            expand_array_tables(
                schema_prefix,
                &child_short_name,
                grandchild_props,
                &child_key_columns,
                tables,
                indexes,
                depth + 1,
                config,
            )?;
        }
    }

    Ok(())
}
