//! Schema document discovery and loading.
//!
//! Locates SDL documents by glob pattern under a search root, reads them and
//! hands them to a [`SchemaBuilder`]. Glob matches that are not regular files
//! (directories named `*.graphql`, for instance) are skipped.

use crate::builder::SchemaBuilder;
use crate::error::{ParseError, SchemaError};
use crate::types::Schema;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};

/// Expands glob patterns relative to `search_dir` into a list of document paths.
///
/// Paths are returned in pattern order, alphabetically within one pattern,
/// without duplicates.
///
/// # Errors
/// Returns `ParseError` if a pattern is invalid or a match cannot be inspected.
pub fn discover_documents<S: AsRef<str>>(
    search_dir: &Path,
    patterns: &[S],
) -> Result<Vec<PathBuf>, ParseError> {
    let root = glob::Pattern::escape(&search_dir.to_string_lossy());
    let mut found = IndexSet::new();

    for pattern in patterns {
        let pattern = pattern.as_ref().trim_start_matches("./");
        // An empty root means the current directory; `/` stays the filesystem root.
        let full_pattern = if root.is_empty() {
            pattern.to_string()
        } else if root.ends_with('/') {
            format!("{root}{pattern}")
        } else {
            format!("{root}/{pattern}")
        };

        for entry in glob::glob(&full_pattern)? {
            let path = entry.map_err(std::io::Error::from)?;
            if path.is_file() {
                found.insert(path);
            } else {
                tracing::debug!("skipping non-file match {}", path.display());
            }
        }
    }

    Ok(found.into_iter().collect())
}

/// Reads the given documents and merges them into one schema.
///
/// # Errors
/// Returns `SchemaError` if a document cannot be read, does not parse,
/// conflicts with another document or fails validation.
pub fn load_documents(paths: &[PathBuf]) -> Result<Schema, SchemaError> {
    let mut builder = SchemaBuilder::new();

    for path in paths {
        let sdl = std::fs::read_to_string(path).map_err(|source| ParseError::ReadFile {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("loading schema document {}", path.display());
        let source = path.to_string_lossy();
        builder.add_document(&sdl, Some(source.as_ref()))?;
    }

    builder.build()
}

/// Locates, reads, merges and builds a schema from documents under `search_dir`.
///
/// # Arguments
/// * `search_dir` - Directory the patterns are relative to
/// * `patterns` - Glob patterns such as `**/*.graphql`
///
/// # Errors
/// Returns `SchemaError` if discovery, reading, merging or validation fails.
pub fn load_schema<S: AsRef<str>>(
    search_dir: &Path,
    patterns: &[S],
) -> Result<Schema, SchemaError> {
    let paths = discover_documents(search_dir, patterns)?;
    if paths.is_empty() {
        tracing::warn!("no schema documents matched under {}", search_dir.display());
    }
    load_documents(&paths)
}
