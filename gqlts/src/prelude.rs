//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use gqlts::prelude::*;
//! ```

// Schema types
pub use gqlts_schema::{
    ParseError, Schema, SchemaBuilder, SchemaError, TypeDef, TypeRef, load_schema, parse_schema,
};

// Generation types
pub use gqlts_codegen::{
    CodegenError, EnumStyle, GenerateOptions, Generator, NullableRenderer, ObjectStyle,
    OutputVisibility, TypeCategory, generate_from_file, generate_from_glob, generate_from_sdl,
};
