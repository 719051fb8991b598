//! # gqlts Schema
//!
//! GraphQL SDL parsing, schema assembly and type definitions.
//!
//! This crate provides:
//! - SDL document parsing into schema types
//! - Structural merging of several documents into one schema
//! - Glob-based discovery and loading of schema files
//! - Reference validation of the assembled schema

pub mod builder;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;
pub mod validation;

pub use builder::SchemaBuilder;
pub use error::{ParseError, SchemaError};
pub use loader::{discover_documents, load_documents, load_schema};
pub use parser::parse_document;
pub use types::{
    ArgumentDef, BUILTIN_SCALARS, EnumDef, EnumValue, FieldDef, ObjectDef, RESERVED_ROOT_TYPES,
    RootTypes, ScalarDef, Schema, SourceOrigin, TypeDef, TypeRef, UnionDef,
};
pub use validation::validate_schema;

/// Parses and builds a schema from a single SDL document.
///
/// # Errors
/// Returns `SchemaError` if the document does not parse or fails validation.
pub fn parse_schema(sdl: &str) -> Result<Schema, SchemaError> {
    let mut builder = SchemaBuilder::new();
    builder.add_document(sdl, None)?;
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schema_single_document() {
        let schema = parse_schema("type Query { greet(name: String!): String }")
            .expect("Failed to parse");
        assert!(schema.has_type("Query"));
        assert!(schema.has_type("String"));
    }

    #[test]
    fn test_parse_schema_unknown_reference() {
        let result = parse_schema("type Query { user: User }");
        assert!(matches!(result, Err(SchemaError::TypeNotFound { .. })));
    }
}
