//! Entity source-file discovery
//!
//! The CLI accepts a glob pattern, a directory, or a single file. Whatever
//! the form, discovery produces a sorted, deduplicated list of `.ts` files so
//! that repeated runs over an unchanged tree emit byte-identical schemas.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::DbmlGenError;

/// The resolved set of entity source files for one generator run
#[derive(Debug, Clone)]
pub struct SourceSet {
    /// The pattern the set was discovered from
    pub pattern: String,
    /// Matched TypeScript files, sorted
    pub files: Vec<PathBuf>,
}

/// Discover entity source files from a glob pattern, directory, or file path.
///
/// Declaration files (`.d.ts`) never contain decorated class bodies and are
/// skipped, as is anything under `node_modules` when walking a directory.
pub fn discover_sources(pattern: &str) -> Result<SourceSet> {
    let path = Path::new(pattern);

    let mut files = if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
        expand_glob(pattern)?
    } else if path.is_dir() {
        walk_directory(path)
    } else if path.is_file() && is_entity_source(path) {
        vec![path.to_path_buf()]
    } else {
        Vec::new()
    };

    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(DbmlGenError::NoSourcesFound {
            pattern: pattern.to_string(),
        }
        .into());
    }

    Ok(SourceSet {
        pattern: pattern.to_string(),
        files,
    })
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| DbmlGenError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    Ok(paths
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file() && is_entity_source(p))
        .collect())
}

fn walk_directory(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != "node_modules")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_entity_source(p))
        .collect()
}

/// A `.ts` file that is not a declaration file
fn is_entity_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".ts") && !name.ends_with(".d.ts")
}
