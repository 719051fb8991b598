//! Top-level declaration generator.
//!
//! Walks the schema's type map in insertion order and emits one namespace
//! block: the built-in scalar aliases and the callable-field construct first,
//! then the declarations of every type declared in source. Root operation
//! types (the reserved `Query` and `Mutation`, plus any named by a
//! `schema { ... }` definition) are emitted even when they were only
//! materialized by the schema assembler.

use crate::options::{GenerateOptions, TypeCategory};
use crate::typescript::{
    CALLABLE_TYPE_NAME, EnumGenerator, ObjectGenerator, ScalarGenerator, UnionGenerator,
};
use gqlts_schema::{BUILTIN_SCALARS, Schema, TypeDef};
use indexmap::IndexMap;

/// Generator for a complete TypeScript declaration block.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: &'a GenerateOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(schema: &'a Schema, options: &'a GenerateOptions) -> Self {
        Self { schema, options }
    }

    /// Generates the namespace block for the whole schema.
    #[must_use]
    pub fn generate(&self) -> String {
        let scalars = self.options.resolved_scalars();
        let mut fragments = self.generate_preamble(&scalars);
        let preamble_len = fragments.len();
        let mut skipped = 0usize;

        for type_def in self.schema.types() {
            if !type_def.has_origin() && !self.schema.is_root_type(type_def) {
                skipped += 1;
                continue;
            }
            self.generate_type(type_def, &scalars, &mut fragments);
        }

        tracing::debug!(
            root_types = ?self.schema.root_types,
            "generated {} declarations, skipped {} types without origin",
            fragments.len() - preamble_len,
            skipped
        );

        self.wrap_namespace(&fragments)
    }

    /// Generates the declarations of a single type.
    fn generate_type(
        &self,
        type_def: &TypeDef,
        scalars: &IndexMap<String, String>,
        fragments: &mut Vec<String>,
    ) {
        let objects = ObjectGenerator::new(self.options);

        match type_def {
            TypeDef::Enum(def) => {
                fragments.push(EnumGenerator::new(self.options.enum_style).generate(def));
            }
            TypeDef::Input(def) => fragments.extend(objects.generate(def, TypeCategory::Input)),
            TypeDef::Interface(def) => {
                fragments.extend(objects.generate(def, TypeCategory::Interface));
            }
            TypeDef::Object(def) => fragments.extend(objects.generate(def, TypeCategory::Object)),
            TypeDef::Scalar(def) => fragments.push(ScalarGenerator::new(scalars).generate(def)),
            TypeDef::Union(def) => fragments.push(UnionGenerator::new().generate(def)),
        }
    }

    /// Built-in scalar aliases followed by the callable-field construct.
    fn generate_preamble(&self, scalars: &IndexMap<String, String>) -> Vec<String> {
        let scalar_generator = ScalarGenerator::new(scalars);
        let mut preamble: Vec<String> = BUILTIN_SCALARS
            .iter()
            .map(|name| scalar_generator.alias(name, None))
            .collect();

        preamble.push(format!(
            "interface {CALLABLE_TYPE_NAME}<P, R> {{\n\t(a: P): R\n\targs: P\n}}"
        ));
        preamble
    }

    /// Joins fragments with blank lines, indents them and wraps them in the namespace.
    fn wrap_namespace(&self, fragments: &[String]) -> String {
        let body = fragments.join("\n\n");
        let indented: Vec<String> = body
            .lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("\t{line}")
                }
            })
            .collect();

        format!(
            "{}namespace {} {{\n\n{}\n\n}}",
            self.options.visibility.prefix(),
            self.options.namespace_name,
            indented.join("\n")
        )
    }
}
