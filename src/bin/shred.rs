//! shred: Generate PostgreSQL DDL from an API schema document
//!
//! Usage:
//!   # Write the script next to the input file (schema.sql)
//!   shred schema.json
//!
//!   # Choose the output path
//!   shred schema.json -o ddl/edfi.sql
//!
//!   # Read from stdin, output to stdout
//!   cat schema.json | shred

// Use MiMalloc allocator for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use shredder::{SchemaShredder, ShredConfig};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "shred")]
#[command(about = "Generate PostgreSQL DDL from an API schema document", long_about = None)]
struct Args {
    /// Input schema file; "-" or omitted reads stdin
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output file; defaults to the input path with a .sql extension,
    /// or stdout when reading from stdin
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// Maximum array nesting depth before the run is aborted (default: 32)
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let content = match input_file(&args) {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let document: Value =
        serde_json::from_str(&content).context("Failed to parse schema document as JSON")?;

    let mut config = ShredConfig::default();
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }

    let script = SchemaShredder::new(config)
        .generate_ddl_script(&document)
        .context("Failed to generate DDL script")?;

    match output_path(&args) {
        Some(path) => {
            std::fs::write(&path, &script)
                .with_context(|| format!("Failed to write script to {}", path.display()))?;
            eprintln!("PostgreSQL script generated successfully: {}", path.display());
        }
        None => print!("{script}"),
    }

    Ok(())
}

/// The input file to read, with "-" standing for stdin.
fn input_file(args: &Args) -> Option<&str> {
    args.input.as_deref().filter(|path| *path != "-")
}

/// Explicit -o wins; a file input defaults to its own path with a .sql
/// extension; stdin input ("-" or omitted) goes to stdout.
fn output_path(args: &Args) -> Option<PathBuf> {
    if let Some(output) = &args.output {
        return Some(PathBuf::from(output));
    }

    input_file(args).map(|input| Path::new(input).with_extension("sql"))
}
