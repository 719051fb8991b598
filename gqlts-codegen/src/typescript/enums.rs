//! Enum declaration generation.

use super::{doc_comment, indent_continuation};
use crate::options::EnumStyle;
use gqlts_schema::EnumDef;

/// Generator for enum declarations.
pub struct EnumGenerator {
    style: EnumStyle,
}

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub const fn new(style: EnumStyle) -> Self {
        Self { style }
    }

    /// Generates the declaration of one enum.
    #[must_use]
    pub fn generate(&self, def: &EnumDef) -> String {
        match self.style {
            EnumStyle::Type => self.generate_literal_union(def),
            EnumStyle::Enum => self.generate_const_enum(def),
        }
    }

    /// `export type Color = 'RED' | 'GREEN'`
    fn generate_literal_union(&self, def: &EnumDef) -> String {
        let literals: Vec<String> = def
            .values
            .iter()
            .map(|value| format!("'{}'", value.name))
            .collect();

        format!(
            "{}export type {} = {}",
            doc_comment(def.description.as_deref()),
            def.name,
            literals.join(" | ")
        )
    }

    /// `export const enum Color { RED = 'RED' }`, one member per line.
    fn generate_const_enum(&self, def: &EnumDef) -> String {
        let members: Vec<String> = def
            .values
            .iter()
            .map(|value| {
                indent_continuation(&format!(
                    "{}{} = '{}'",
                    doc_comment(value.description.as_deref()),
                    value.name,
                    value.name
                ))
            })
            .collect();

        format!(
            "{}export const enum {} {{\n\t{}\n}}",
            doc_comment(def.description.as_deref()),
            def.name,
            members.join(",\n\t")
        )
    }
}
