//! typeorm-dbml: A fast Rust generator of DBML schemas from TypeORM entities
//!
//! This library extracts a relational schema from decorated entity classes
//! and emits it as a DBML document for schema-visualization tools.

pub mod dbml;
pub mod error;
pub mod model;
pub mod parser;
pub mod sources;
pub mod util;

use std::path::PathBuf;

use anyhow::Result;

pub use error::DbmlGenError;

/// Options for generating a DBML schema
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Glob pattern, directory, or file containing the entity sources
    pub source_pattern: String,
    /// Output path for the DBML file
    pub output_path: Option<PathBuf>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Result summary of a generator run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Path the schema was written to
    pub output_path: PathBuf,
    /// Number of source files processed
    pub files_processed: usize,
}

/// Generate a DBML schema from entity source files
pub fn generate_dbml(options: GenerateOptions) -> Result<GenerateReport> {
    let output_path = options
        .output_path
        .unwrap_or_else(|| PathBuf::from("schema.dbml"));

    // An output path ending in .ts almost always means an unquoted glob:
    // the shell expanded it and the second matched entity file would be
    // overwritten here
    if output_path.extension().is_some_and(|ext| ext == "ts") {
        return Err(DbmlGenError::OutputLooksLikeSource { path: output_path }.into());
    }

    // Step 1: Discover the entity source files
    let source_set = sources::discover_sources(&options.source_pattern)?;

    if options.verbose {
        println!("Found {} source files", source_set.files.len());
    }

    // Step 2: Parse all class declarations
    let classes = parser::parse_entity_files(&source_set.files)?;

    if options.verbose {
        println!("Parsed {} class declarations", classes.len());
    }

    // Step 3: Build the schema model (two-pass)
    let schema = model::build_schema(&classes)?;

    if options.verbose {
        println!(
            "Modeled {} entities and {} relationships",
            schema.tables.len(),
            schema.refs.len()
        );
    }

    // Step 4: Render and write the document
    let document = dbml::render_document(&schema);
    std::fs::write(&output_path, document).map_err(|e| DbmlGenError::OutputWriteError {
        path: output_path.clone(),
        source: e,
    })?;

    let output_path = output_path.canonicalize().unwrap_or(output_path);

    if options.verbose {
        println!("Wrote schema: {}", output_path.display());
    }

    Ok(GenerateReport {
        output_path,
        files_processed: source_set.files.len(),
    })
}
