use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One column of a shredded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name as derived from the schema (pre-truncation)
    pub name: String,

    /// PostgreSQL data type, e.g. "TEXT", "VARCHAR(50)", "INTEGER"
    pub data_type: String,

    pub is_nullable: bool,
    pub is_primary_key: bool,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, is_nullable: bool) -> Self {
        ColumnDefinition {
            name: name.into(),
            data_type: data_type.into(),
            is_nullable,
            is_primary_key: false,
        }
    }

    /// The surrogate primary key every shredded table starts with.
    pub fn primary_key() -> Self {
        ColumnDefinition {
            name: "id".to_string(),
            data_type: "BIGSERIAL".to_string(),
            is_nullable: false,
            is_primary_key: true,
        }
    }
}

/// A table derived from a resource schema or one of its nested arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Semantic, human-meaningful name; may exceed the identifier limit
    pub full_name: String,

    /// Length-bounded name actually used in emitted DDL
    pub shortened_name: String,

    /// Columns in emission order; the first is always the primary key
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    /// Create a table seeded with its `id BIGSERIAL` primary key.
    pub fn new(full_name: impl Into<String>, shortened_name: impl Into<String>) -> Self {
        TableDefinition {
            full_name: full_name.into(),
            shortened_name: shortened_name.into(),
            columns: vec![ColumnDefinition::primary_key()],
        }
    }

    /// Add a column unless one with the same name (case-insensitive)
    /// already exists. First occurrence wins; later duplicates are dropped
    /// without error.
    pub fn push_column(&mut self, column: ColumnDefinition) {
        let exists = self
            .columns
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&column.name));

        if !exists {
            self.columns.push(column);
        }
    }

    /// Columns other than the surrogate primary key.
    pub fn non_key_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.iter().filter(|c| !c.is_primary_key)
    }
}

/// A non-unique lookup index over a table's natural-key columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDefinition {
    pub name: String,

    /// Shortened, schema-qualified table name
    pub table_name: String,

    pub columns: Vec<String>,
}

/// Configuration for one shredding pass.
#[derive(Debug, Clone)]
pub struct ShredConfig {
    /// Maximum nesting depth for arrays-of-objects before the run is
    /// aborted as cyclic or pathological input
    pub max_depth: usize,
}

impl Default for ShredConfig {
    fn default() -> Self {
        ShredConfig { max_depth: 32 }
    }
}

/// Fatal failures of a shredding pass. Malformed properties (missing
/// `type`, missing `items`) are benign skips, never errors.
#[derive(Debug, Error)]
pub enum ShredError {
    #[error("missing required field: '{0}'")]
    MissingRequiredField(&'static str),

    #[error("array nesting under '{resource}' exceeds the maximum depth of {max_depth}")]
    SchemaTooDeep { resource: String, max_depth: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_has_only_the_primary_key() {
        let table = TableDefinition::new("students", "students");

        assert_eq!(table.columns.len(), 1);
        let pk = &table.columns[0];
        assert_eq!(pk.name, "id");
        assert_eq!(pk.data_type, "BIGSERIAL");
        assert!(pk.is_primary_key);
        assert!(!pk.is_nullable);
    }

    #[test]
    fn test_push_column_keeps_first_duplicate() {
        let mut table = TableDefinition::new("students", "students");
        table.push_column(ColumnDefinition::new("name", "TEXT", false));
        table.push_column(ColumnDefinition::new("Name", "INTEGER", true));

        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[1].data_type, "TEXT");
    }

    #[test]
    fn test_push_column_never_displaces_the_primary_key() {
        let mut table = TableDefinition::new("students", "students");
        table.push_column(ColumnDefinition::new("id", "INTEGER", true));

        assert_eq!(table.columns.len(), 1);
        assert!(table.columns[0].is_primary_key);
    }

    #[test]
    fn test_non_key_columns_excludes_the_primary_key() {
        let mut table = TableDefinition::new("students", "students");
        table.push_column(ColumnDefinition::new("name", "TEXT", false));

        let names: Vec<_> = table.non_key_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["name"]);
    }
}
