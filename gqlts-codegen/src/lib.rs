//! # gqlts Codegen
//!
//! TypeScript declaration generation from GraphQL schemas.
//!
//! This crate provides:
//! - Conversion of GraphQL type references into TypeScript type expressions
//! - Enum, scalar, union, object, interface and input declarations
//! - Callable fields for fields with arguments
//! - A single namespaced declaration block per schema
//!
//! ```ignore
//! use gqlts_codegen::{GenerateOptions, generate_from_sdl};
//!
//! let ts = generate_from_sdl(
//!     "type Query { greet(name: String!): String }",
//!     &GenerateOptions::default(),
//! )?;
//! assert!(ts.contains("greet: GQLFunction<IGreetOnQueryArguments, String | null | undefined>"));
//! ```

pub mod error;
pub mod generator;
pub mod options;
pub mod typescript;

pub use error::CodegenError;
pub use generator::Generator;
pub use options::{
    EnumStyle, GenerateOptions, NullableRenderer, NullableRenderers, ObjectStyle,
    OutputVisibility, TypeCategory,
};

use std::path::Path;

/// Generates TypeScript declarations from an SDL schema string.
///
/// # Arguments
/// * `sdl` - GraphQL SDL content
/// * `options` - Generation options
///
/// # Returns
/// Generated declarations as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_sdl(sdl: &str, options: &GenerateOptions) -> Result<String, CodegenError> {
    let schema = gqlts_schema::parse_schema(sdl)?;
    Ok(Generator::new(&schema, options).generate())
}

/// Generates TypeScript declarations from an SDL schema file.
///
/// # Arguments
/// * `path` - Path to the SDL file
/// * `options` - Generation options
///
/// # Returns
/// Generated declarations as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn generate_from_file(path: &Path, options: &GenerateOptions) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    let source = path.to_string_lossy();
    let mut builder = gqlts_schema::SchemaBuilder::new();
    builder.add_document(&sdl, Some(source.as_ref()))?;
    let schema = builder.build()?;
    Ok(Generator::new(&schema, options).generate())
}

/// Generates TypeScript declarations from every SDL document matching
/// `patterns` under `search_dir`.
///
/// # Errors
/// Returns `CodegenError` if discovery, reading, merging or validation fails.
pub fn generate_from_glob<S: AsRef<str>>(
    search_dir: &Path,
    patterns: &[S],
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    let schema = gqlts_schema::load_schema(search_dir, patterns)?;
    Ok(Generator::new(&schema, options).generate())
}
