//! Scalar alias generation.

use super::doc_comment;
use crate::options::FALLBACK_SCALAR_TYPE;
use gqlts_schema::ScalarDef;
use indexmap::IndexMap;

/// Generator for scalar type aliases.
pub struct ScalarGenerator<'a> {
    scalars: &'a IndexMap<String, String>,
}

impl<'a> ScalarGenerator<'a> {
    /// Creates a new scalar generator over a resolved scalar table.
    #[must_use]
    pub fn new(scalars: &'a IndexMap<String, String>) -> Self {
        Self { scalars }
    }

    /// Returns the TypeScript expression a scalar maps to.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &'a str {
        self.scalars
            .get(name)
            .map_or(FALLBACK_SCALAR_TYPE, String::as_str)
    }

    /// Generates the alias of one scalar.
    #[must_use]
    pub fn generate(&self, def: &ScalarDef) -> String {
        if !self.scalars.contains_key(&def.name) {
            tracing::trace!("scalar {} has no mapping, using {}", def.name, FALLBACK_SCALAR_TYPE);
        }
        self.alias(&def.name, def.description.as_deref())
    }

    /// Generates an alias for a scalar name.
    #[must_use]
    pub fn alias(&self, name: &str, description: Option<&str>) -> String {
        format!(
            "{}export type {} = {}",
            doc_comment(description),
            name,
            self.resolve(name)
        )
    }
}
