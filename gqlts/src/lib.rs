//! # gqlts
//!
//! TypeScript type declarations from GraphQL SDL schemas.
//!
//! gqlts reads one or more GraphQL schema documents, merges them into a single
//! schema and emits a namespaced block of TypeScript declarations describing
//! every type in it.
//!
//! ## Features
//!
//! - **Multi-document schemas** - Glob discovery, type extensions and merging
//! - **Callable fields** - Fields with arguments become `GQLFunction<Args, Return>`
//! - **Configurable output** - Enum and object styles, namespace visibility,
//!   custom scalar mappings and per-category nullable rendering
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqlts::prelude::*;
//!
//! let options = GenerateOptions::default()
//!     .with_namespace("api")
//!     .with_scalar("DateTime", "string");
//! let declarations = generate_from_sdl("type Query { now: DateTime! }", &options)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - SDL parsing, schema assembly and validation
//! - [`codegen`] - TypeScript declaration generation

pub mod prelude;

/// Schema parsing, assembly and validation.
pub mod schema {
    pub use gqlts_schema::*;
}

/// TypeScript declaration generation.
pub mod codegen {
    pub use gqlts_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gqlts_codegen::{GenerateOptions, generate_from_file, generate_from_glob, generate_from_sdl};
pub use gqlts_schema::{Schema, SchemaBuilder, parse_schema};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_end_to_end() {
        let mut builder = SchemaBuilder::new();
        builder
            .add_document("type Query { me: User }", Some("query.graphql"))
            .expect("Failed to add query");
        builder
            .add_document("type User { id: ID! }", Some("user.graphql"))
            .expect("Failed to add user");
        let schema = builder.build().expect("Failed to build");

        let options = GenerateOptions::default().with_visibility(OutputVisibility::Export);
        let output = Generator::new(&schema, &options).generate();
        assert!(output.starts_with("export namespace gql {"));
        assert!(output.contains("me: User | null | undefined"));
    }
}
