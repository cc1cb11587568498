//! DDL Emitter
//!
//! Renders the collected table and index definitions as a single
//! PostgreSQL script. Every identifier passes through [`naming::shorten`]
//! at this point, so names that grew past the identifier limit during
//! translation are truncated consistently wherever they appear.

use crate::shred::naming;
use crate::shred::types::{IndexDefinition, TableDefinition};
use std::fmt::Write;

/// Render the full script: schema creation, tables in discovery order,
/// then indexes in discovery order.
pub fn emit_ddl(schema_name: &str, tables: &[TableDefinition], indexes: &[IndexDefinition]) -> String {
    let schema = naming::shorten(schema_name);
    let mut script = String::new();

    let _ = writeln!(script, "-- PostgreSQL script for schema: {schema}");
    let _ = writeln!(script, "CREATE SCHEMA IF NOT EXISTS {schema};");
    let _ = writeln!(script);

    for table in tables {
        let _ = writeln!(script, "{}", create_table_statement(table));
        let _ = writeln!(script);
    }

    for index in indexes {
        let _ = writeln!(script, "{}", create_index_statement(index));
    }

    script
}

fn create_table_statement(table: &TableDefinition) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|column| {
            let nullability = if column.is_nullable { "NULL" } else { "NOT NULL" };
            let primary_key = if column.is_primary_key { " PRIMARY KEY" } else { "" };
            format!(
                "  {} {} {}{}",
                naming::shorten(&column.name),
                column.data_type,
                nullability,
                primary_key
            )
        })
        .collect();

    format!(
        "CREATE TABLE {} (\n{}\n);",
        table.shortened_name,
        columns.join(",\n")
    )
}

fn create_index_statement(index: &IndexDefinition) -> String {
    let columns: Vec<String> = index.columns.iter().map(|c| naming::shorten(c)).collect();

    format!(
        "CREATE INDEX {} ON {} ({});",
        naming::shorten(&index.name),
        index.table_name,
        columns.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shred::types::ColumnDefinition;

    fn sample_table() -> TableDefinition {
        let mut table = TableDefinition::new("edfi.students", "edfi.students");
        table.push_column(ColumnDefinition::new("studentUniqueId", "VARCHAR(32)", false));
        table.push_column(ColumnDefinition::new("nickname", "TEXT", true));
        table
    }

    #[test]
    fn test_create_table_statement_layout() {
        let statement = create_table_statement(&sample_table());

        assert_eq!(
            statement,
            "CREATE TABLE edfi.students (\n  id BIGSERIAL NOT NULL PRIMARY KEY,\n  studentUniqueId VARCHAR(32) NOT NULL,\n  nickname TEXT NULL\n);"
        );
    }

    #[test]
    fn test_create_index_statement() {
        let index = IndexDefinition {
            name: "nk_students".to_string(),
            table_name: "edfi.students".to_string(),
            columns: vec!["studentUniqueId".to_string()],
        };

        assert_eq!(
            create_index_statement(&index),
            "CREATE INDEX nk_students ON edfi.students (studentUniqueId);"
        );
    }

    #[test]
    fn test_long_identifiers_are_shortened_at_emission() {
        let long_column = "c".repeat(70);
        let mut table = TableDefinition::new("edfi.t", "edfi.t");
        table.push_column(ColumnDefinition::new(long_column.clone(), "TEXT", true));

        let statement = create_table_statement(&table);

        assert!(!statement.contains(&long_column));
        assert!(statement.contains(&naming::shorten(&long_column)));
    }

    #[test]
    fn test_script_order_schema_then_tables_then_indexes() {
        let table = sample_table();
        let index = IndexDefinition {
            name: "nk_students".to_string(),
            table_name: "edfi.students".to_string(),
            columns: vec!["studentUniqueId".to_string()],
        };

        let script = emit_ddl("ed-fi", &[table], &[index]);

        let schema_pos = script.find("CREATE SCHEMA IF NOT EXISTS edfi;").unwrap();
        let table_pos = script.find("CREATE TABLE").unwrap();
        let index_pos = script.find("CREATE INDEX").unwrap();
        assert!(schema_pos < table_pos && table_pos < index_pos);
        assert!(script.starts_with("-- PostgreSQL script for schema: edfi\n"));
    }
}
