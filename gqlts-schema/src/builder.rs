//! Schema assembly from one or more SDL documents.
//!
//! Documents are merged structurally: definitions sharing a name and kind are
//! folded together (fields, enum values and union members are unioned in
//! first-seen order), and `extend` definitions fold into their base type. An
//! extension whose base type never shows up still produces a type, but one
//! without a syntactic origin.

use crate::error::{ParseError, SchemaError};
use crate::parser::{Definition, parse_document};
use crate::types::{
    BUILTIN_SCALARS, EnumDef, ObjectDef, RootTypes, ScalarDef, Schema, SourceOrigin, TypeDef,
    UnionDef,
};
use crate::validation::validate_schema;

/// Incrementally merges SDL documents into a [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
    documents: usize,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an SDL document and merges it into the schema under construction.
    ///
    /// # Arguments
    /// * `sdl` - SDL source text
    /// * `source` - Document name used in origins and error messages
    ///
    /// # Errors
    /// Returns `ParseError` if the document does not parse or conflicts with
    /// what was merged before.
    pub fn add_document(
        &mut self,
        sdl: &str,
        source: Option<&str>,
    ) -> Result<&mut Self, ParseError> {
        let parsed = parse_document(sdl, source)?;
        self.merge_root_types(parsed.root_types);
        for definition in parsed.definitions {
            self.merge_definition(definition)?;
        }
        self.documents += 1;
        tracing::trace!(
            "merged document {} ({} types so far)",
            source.unwrap_or("<sdl>"),
            self.schema.len()
        );
        Ok(self)
    }

    /// Finishes the schema: adds the built-in scalars and validates references.
    ///
    /// # Errors
    /// Returns `SchemaError` if validation fails.
    pub fn build(mut self) -> Result<Schema, SchemaError> {
        for name in BUILTIN_SCALARS {
            if !self.schema.has_type(name) {
                self.schema.add_type(TypeDef::Scalar(ScalarDef::new(name)));
            }
        }
        validate_schema(&self.schema)?;
        tracing::debug!(
            "built schema from {} document(s) with {} types",
            self.documents,
            self.schema.len()
        );
        Ok(self.schema)
    }

    fn merge_root_types(&mut self, incoming: RootTypes) {
        let roots = &mut self.schema.root_types;
        if incoming.query.is_some() {
            roots.query = incoming.query;
        }
        if incoming.mutation.is_some() {
            roots.mutation = incoming.mutation;
        }
        if incoming.subscription.is_some() {
            roots.subscription = incoming.subscription;
        }
    }

    fn merge_definition(&mut self, definition: Definition) -> Result<(), ParseError> {
        let Definition {
            extend,
            mut type_def,
        } = definition;
        // Built-in scalars are provided by the preamble, never by a declaration.
        if extend || (type_def.is_scalar() && BUILTIN_SCALARS.contains(&type_def.name())) {
            type_def.clear_origin();
        }

        match self.schema.get_type_mut(type_def.name()) {
            Some(existing) => merge_type(existing, type_def),
            None => {
                self.schema.add_type(type_def);
                Ok(())
            }
        }
    }
}

fn merge_type(existing: &mut TypeDef, incoming: TypeDef) -> Result<(), ParseError> {
    match (existing, incoming) {
        (TypeDef::Object(current), TypeDef::Object(other))
        | (TypeDef::Interface(current), TypeDef::Interface(other))
        | (TypeDef::Input(current), TypeDef::Input(other)) => merge_object(current, other),
        (TypeDef::Enum(current), TypeDef::Enum(other)) => {
            merge_enum(current, other);
            Ok(())
        }
        (TypeDef::Union(current), TypeDef::Union(other)) => {
            merge_union(current, other);
            Ok(())
        }
        (TypeDef::Scalar(current), TypeDef::Scalar(other)) => {
            merge_header(
                &mut current.description,
                &mut current.origin,
                other.description,
                other.origin,
            );
            Ok(())
        }
        (current, other) => Err(ParseError::duplicate(
            current.name(),
            current.kind_name(),
            other.kind_name(),
        )),
    }
}

/// First non-empty description and first origin win.
fn merge_header(
    description: &mut Option<String>,
    origin: &mut Option<SourceOrigin>,
    incoming_description: Option<String>,
    incoming_origin: Option<SourceOrigin>,
) {
    if description.as_deref().is_none_or(str::is_empty) {
        if let Some(text) = incoming_description {
            *description = Some(text);
        }
    }
    if origin.is_none() {
        *origin = incoming_origin;
    }
}

fn merge_object(current: &mut ObjectDef, other: ObjectDef) -> Result<(), ParseError> {
    merge_header(
        &mut current.description,
        &mut current.origin,
        other.description,
        other.origin,
    );

    for interface in other.implements {
        if !current.implements.contains(&interface) {
            current.implements.push(interface);
        }
    }

    for (name, field) in other.fields {
        match current.fields.get_mut(&name) {
            Some(existing) if existing.ty != field.ty => {
                return Err(ParseError::conflicting_field(
                    &current.name,
                    name,
                    existing.ty.to_string(),
                    field.ty.to_string(),
                ));
            }
            Some(existing) => {
                if existing.description.is_none() {
                    existing.description = field.description;
                }
            }
            None => {
                current.fields.insert(name, field);
            }
        }
    }

    Ok(())
}

fn merge_enum(current: &mut EnumDef, other: EnumDef) {
    merge_header(
        &mut current.description,
        &mut current.origin,
        other.description,
        other.origin,
    );
    for value in other.values {
        if current.get_value(&value.name).is_none() {
            current.add_value(value);
        }
    }
}

fn merge_union(current: &mut UnionDef, other: UnionDef) {
    merge_header(
        &mut current.description,
        &mut current.origin,
        other.description,
        other.origin,
    );
    for member in other.members {
        if !current.members.contains(&member) {
            current.members.push(member);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(documents: &[&str]) -> Result<Schema, SchemaError> {
        let mut builder = SchemaBuilder::new();
        for (i, sdl) in documents.iter().enumerate() {
            let source = format!("doc{i}.graphql");
            builder.add_document(sdl, Some(source.as_str()))?;
        }
        builder.build()
    }

    #[test]
    fn test_build_adds_builtin_scalars_without_origin() {
        let schema = build(&["type Query { hello: String }"]).expect("Failed to build");

        for name in BUILTIN_SCALARS {
            let scalar = schema.get_type(name).expect("builtin scalar");
            assert!(scalar.is_scalar());
            assert!(!scalar.has_origin());
        }
        assert!(schema.get_type("Query").is_some_and(TypeDef::has_origin));
    }

    #[test]
    fn test_merge_object_fields_across_documents() {
        let schema = build(&[
            "type Query { users: [User] }\ntype User { id: ID! }",
            "type User { name: String }\ntype Query { me: User }",
        ])
        .expect("Failed to build");

        let Some(TypeDef::Object(user)) = schema.get_type("User") else {
            panic!("expected object");
        };
        let fields: Vec<&str> = user.fields.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["id", "name"]);

        let Some(TypeDef::Object(query)) = schema.get_type("Query") else {
            panic!("expected object");
        };
        assert_eq!(query.fields.len(), 2);
        assert_eq!(
            query.origin.as_ref().and_then(|o| o.source.as_deref()),
            Some("doc0.graphql")
        );
    }

    #[test]
    fn test_merge_preserves_first_seen_type_order() {
        let schema =
            build(&["enum B { X }", "enum A { Y }\nenum B { Z }"]).expect("Failed to build");

        let names: Vec<&str> = schema.types().take(2).map(TypeDef::name).collect();
        assert_eq!(names, vec!["B", "A"]);

        let Some(TypeDef::Enum(b)) = schema.get_type("B") else {
            panic!("expected enum");
        };
        let values: Vec<&str> = b.values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(values, vec!["X", "Z"]);
    }

    #[test]
    fn test_merge_union_members() {
        let schema = build(&[
            "type A { id: ID }\ntype B { id: ID }\nunion U = A",
            "union U = A | B",
        ])
        .expect("Failed to build");

        let Some(TypeDef::Union(u)) = schema.get_type("U") else {
            panic!("expected union");
        };
        assert_eq!(u.members, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_extension_merges_into_base() {
        let schema = build(&["type Query { a: Int }\nextend type Query { b: Int }"])
            .expect("Failed to build");

        let Some(TypeDef::Object(query)) = schema.get_type("Query") else {
            panic!("expected object");
        };
        assert!(query.origin.is_some());
        assert_eq!(query.fields.len(), 2);
    }

    #[test]
    fn test_extension_only_type_has_no_origin() {
        let schema = build(&["extend type Mutation { ping: Boolean }"]).expect("Failed to build");

        let mutation = schema.get_type("Mutation").expect("mutation type");
        assert!(!mutation.has_origin());
    }

    #[test]
    fn test_extension_before_base_takes_base_origin() {
        let schema = build(&[
            "extend type Query { b: Int }",
            "\"Root\"\ntype Query { a: Int }",
        ])
        .expect("Failed to build");

        let query = schema.get_type("Query").expect("query type");
        assert!(query.has_origin());
        assert_eq!(query.description(), Some("Root"));
    }

    #[test]
    fn test_duplicate_definition_with_other_kind() {
        let result = build(&["type Color { id: ID }", "enum Color { RED }"]);
        assert!(matches!(
            result,
            Err(SchemaError::Parse(ParseError::DuplicateDefinition { .. }))
        ));
    }

    #[test]
    fn test_conflicting_field_types() {
        let result = build(&["type User { id: ID! }", "type User { id: String }"]);
        assert!(matches!(
            result,
            Err(SchemaError::Parse(ParseError::ConflictingField { .. }))
        ));
    }

    #[test]
    fn test_schema_definition_root_types() {
        let schema = build(&["schema { query: Root }\ntype Root { ok: Boolean }"])
            .expect("Failed to build");
        assert_eq!(schema.root_types.query.as_deref(), Some("Root"));
    }

    #[test]
    fn test_declared_builtin_scalar_has_no_origin() {
        let schema = build(&[
            "\"Text\"\nscalar String",
            "scalar Date\ntype Query { a: String b: Date }",
        ])
        .expect("Failed to build");

        let string = schema.get_type("String").expect("String scalar");
        assert!(!string.has_origin());
        assert_eq!(string.description(), Some("Text"));
        assert!(schema.get_type("Date").is_some_and(TypeDef::has_origin));
    }

    #[test]
    fn test_chained_add_document() {
        let mut builder = SchemaBuilder::new();
        builder
            .add_document("type Query { a: Int }", None)
            .and_then(|b| b.add_document("type Query { b: Int }", None))
            .expect("Failed to merge");

        let schema = builder.build().expect("Failed to build");
        let Some(TypeDef::Object(query)) = schema.get_type("Query") else {
            panic!("expected object");
        };
        assert_eq!(query.fields.len(), 2);
    }
}
