//! Union alias generation.

use super::doc_comment;
use gqlts_schema::UnionDef;

/// Generator for union type aliases.
pub struct UnionGenerator;

impl UnionGenerator {
    /// Creates a new union generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the alias of one union.
    #[must_use]
    pub fn generate(&self, def: &UnionDef) -> String {
        format!(
            "{}export type {} = {}",
            doc_comment(def.description.as_deref()),
            def.name,
            def.members.join(" | ")
        )
    }
}

impl Default for UnionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
