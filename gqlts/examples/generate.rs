//! Example generating TypeScript declarations from SDL documents.
//!
//! Run with: `cargo run --example generate -- <schema-dir> [options.json]`
//!
//! Every `*.graphql` and `*.gql` document under `<schema-dir>` is merged into
//! one schema. Set `RUST_LOG=debug` to see which documents were loaded.

use gqlts::prelude::*;
use std::path::PathBuf;

const SAMPLE_SCHEMA: &str = r#"
"Something with a stable identifier"
interface Node {
    id: ID!
}

enum Role {
    ADMIN
    MEMBER
}

type User implements Node {
    id: ID!
    name: String
    role: Role!
}

input UserFilter {
    role: Role
    nameContains: String
}

type Query {
    "Look a user up by id"
    user(id: ID!): User
    users(filter: UserFilter, first: Int): [User!]!
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let search_dir = args.next().map(PathBuf::from);
    let options = match args.next() {
        Some(path) => GenerateOptions::from_json_file(&PathBuf::from(path))?,
        None => GenerateOptions::default(),
    };

    let output = match search_dir {
        Some(dir) => generate_from_glob(&dir, &["**/*.graphql", "**/*.gql"], &options)?,
        None => {
            eprintln!("No schema directory given, using the built-in sample schema");
            generate_from_sdl(SAMPLE_SCHEMA, &options)?
        }
    };

    println!("{output}");
    Ok(())
}
