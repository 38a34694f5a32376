//! Error types for typeorm-dbml

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during schema generation
#[derive(Error, Debug)]
pub enum DbmlGenError {
    #[error("Invalid source pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No files found matching pattern: {pattern}")]
    NoSourcesFound { pattern: String },

    #[error("Failed to read source file: {path}")]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No entity classes found in the supplied source files")]
    NoEntitiesFound,

    #[error(
        "Output path '{path}' looks like a TypeScript file. \
         Did you forget to quote your glob pattern? (e.g. \"src/**/*.ts\")"
    )]
    OutputLooksLikeSource { path: PathBuf },

    #[error("Failed to write schema to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
