//! GraphQL SDL document parser.
//!
//! This module parses a single SDL document with `async-graphql-parser` and
//! lowers its type system definitions into the crate's own schema types.
//! Merging several documents into one schema is the job of
//! [`SchemaBuilder`](crate::builder::SchemaBuilder).

use crate::error::ParseError;
use crate::types::{
    ArgumentDef, EnumDef, EnumValue, FieldDef, ObjectDef, RootTypes, ScalarDef, SourceOrigin,
    TypeDef, TypeRef, UnionDef,
};
use async_graphql_parser::Positioned;
use async_graphql_parser::types as ast;

/// Type system definitions of one parsed document.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Type definitions and extensions, in document order.
    pub definitions: Vec<Definition>,
    /// Root operation types from `schema { ... }` definitions.
    pub root_types: RootTypes,
}

/// One type definition or type extension.
#[derive(Debug, Clone)]
pub struct Definition {
    /// True for `extend type ...` and friends.
    pub extend: bool,
    /// The lowered type.
    pub type_def: TypeDef,
}

/// Parses one SDL document.
///
/// # Arguments
/// * `sdl` - SDL source text
/// * `source` - Document name used in origins and error messages
///
/// # Errors
/// Returns `ParseError::Syntax` if the document is not valid SDL.
pub fn parse_document(sdl: &str, source: Option<&str>) -> Result<ParsedDocument, ParseError> {
    let document = async_graphql_parser::parse_schema(sdl)
        .map_err(|e| ParseError::syntax(source, e.to_string()))?;

    let mut parsed = ParsedDocument::default();
    for definition in document.definitions {
        match definition {
            ast::TypeSystemDefinition::Type(type_definition) => {
                parsed
                    .definitions
                    .push(lower_type_definition(type_definition, source));
            }
            ast::TypeSystemDefinition::Schema(schema) => {
                let schema = schema.node;
                if let Some(query) = schema.query {
                    parsed.root_types.query = Some(query.node.to_string());
                }
                if let Some(mutation) = schema.mutation {
                    parsed.root_types.mutation = Some(mutation.node.to_string());
                }
                if let Some(subscription) = schema.subscription {
                    parsed.root_types.subscription = Some(subscription.node.to_string());
                }
            }
            ast::TypeSystemDefinition::Directive(_) => {}
        }
    }

    Ok(parsed)
}

fn lower_type_definition(
    definition: Positioned<ast::TypeDefinition>,
    source: Option<&str>,
) -> Definition {
    let origin = Some(SourceOrigin::new(
        source,
        definition.pos.line,
        definition.pos.column,
    ));
    let definition = definition.node;
    let name = definition.name.node.to_string();
    let description = definition.description.map(|d| d.node);

    let type_def = match definition.kind {
        ast::TypeKind::Scalar => TypeDef::Scalar(ScalarDef {
            name,
            description,
            origin,
        }),
        ast::TypeKind::Object(object) => {
            let implements = object.implements.into_iter().map(|i| i.node.to_string());
            let mut def = lower_object_header(name, description, origin, implements);
            for field in object.fields {
                def.add_field(lower_field(field.node));
            }
            TypeDef::Object(def)
        }
        ast::TypeKind::Interface(interface) => {
            let implements = interface.implements.into_iter().map(|i| i.node.to_string());
            let mut def = lower_object_header(name, description, origin, implements);
            for field in interface.fields {
                def.add_field(lower_field(field.node));
            }
            TypeDef::Interface(def)
        }
        ast::TypeKind::InputObject(input) => {
            let mut def = lower_object_header(name, description, origin, Vec::new());
            for field in input.fields {
                let field = field.node;
                def.add_field(FieldDef {
                    name: field.name.node.to_string(),
                    ty: lower_type(&field.ty.node),
                    description: field.description.map(|d| d.node),
                    arguments: Vec::new(),
                });
            }
            TypeDef::Input(def)
        }
        ast::TypeKind::Enum(enum_type) => TypeDef::Enum(EnumDef {
            name,
            description,
            origin,
            values: enum_type
                .values
                .into_iter()
                .map(|value| EnumValue {
                    name: value.node.value.node.to_string(),
                    description: value.node.description.map(|d| d.node),
                })
                .collect(),
        }),
        ast::TypeKind::Union(union) => TypeDef::Union(UnionDef {
            name,
            description,
            origin,
            members: union
                .members
                .into_iter()
                .map(|member| member.node.to_string())
                .collect(),
        }),
    };

    Definition {
        extend: definition.extend,
        type_def,
    }
}

fn lower_object_header(
    name: String,
    description: Option<String>,
    origin: Option<SourceOrigin>,
    implements: impl IntoIterator<Item = String>,
) -> ObjectDef {
    let mut def = ObjectDef::new(name);
    def.description = description;
    def.origin = origin;
    def.implements = implements.into_iter().collect();
    def
}

fn lower_field(field: ast::FieldDefinition) -> FieldDef {
    FieldDef {
        name: field.name.node.to_string(),
        ty: lower_type(&field.ty.node),
        description: field.description.map(|d| d.node),
        arguments: field
            .arguments
            .into_iter()
            .map(|arg| lower_argument(arg.node))
            .collect(),
    }
}

fn lower_argument(arg: ast::InputValueDefinition) -> ArgumentDef {
    ArgumentDef {
        name: arg.name.node.to_string(),
        ty: lower_type(&arg.ty.node),
        description: arg.description.map(|d| d.node),
    }
}

/// Converts a parsed type into a [`TypeRef`].
fn lower_type(ty: &ast::Type) -> TypeRef {
    let base = match &ty.base {
        ast::BaseType::Named(name) => TypeRef::named(name.as_str()),
        ast::BaseType::List(inner) => TypeRef::list(lower_type(inner)),
    };
    if ty.nullable {
        base
    } else {
        TypeRef::non_null(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_with_arguments() {
        let sdl = r#"
            "Root query"
            type Query {
                "Says hello"
                greet(name: String!, times: Int = 1): String
            }
        "#;

        let parsed = parse_document(sdl, Some("query.graphql")).expect("Failed to parse");
        assert_eq!(parsed.definitions.len(), 1);

        let definition = &parsed.definitions[0];
        assert!(!definition.extend);
        let TypeDef::Object(query) = &definition.type_def else {
            panic!("expected object");
        };
        assert_eq!(query.description.as_deref(), Some("Root query"));
        assert_eq!(
            query.origin.as_ref().and_then(|o| o.source.as_deref()),
            Some("query.graphql")
        );

        let greet = query.get_field("greet").expect("greet field");
        assert_eq!(greet.description.as_deref(), Some("Says hello"));
        assert_eq!(greet.ty, TypeRef::named("String"));
        assert_eq!(greet.arguments.len(), 2);
        assert_eq!(greet.arguments[0].ty.to_string(), "String!");
        assert_eq!(greet.arguments[1].name, "times");
    }

    #[test]
    fn test_parse_nested_list_types() {
        let sdl = "type Matrix { rows: [[Int!]]! }";
        let parsed = parse_document(sdl, None).expect("Failed to parse");

        let TypeDef::Object(matrix) = &parsed.definitions[0].type_def else {
            panic!("expected object");
        };
        let rows = matrix.get_field("rows").expect("rows field");
        assert_eq!(rows.ty.to_string(), "[[Int!]]!");
    }

    #[test]
    fn test_parse_all_kinds() {
        let sdl = r#"
            scalar Date
            enum Color { RED GREEN }
            interface Node { id: ID! }
            type User implements Node { id: ID! }
            union Entity = User
            input Filter { color: Color }
        "#;

        let parsed = parse_document(sdl, None).expect("Failed to parse");
        let kinds: Vec<&str> = parsed
            .definitions
            .iter()
            .map(|d| d.type_def.kind_name())
            .collect();
        assert_eq!(kinds, vec!["scalar", "enum", "interface", "type", "union", "input"]);

        let TypeDef::Object(user) = &parsed.definitions[3].type_def else {
            panic!("expected object");
        };
        assert_eq!(user.implements, vec!["Node".to_string()]);
    }

    #[test]
    fn test_parse_extension_and_schema_definition() {
        let sdl = r#"
            schema { query: Query mutation: Mutation }
            extend type Query { me: String }
        "#;

        let parsed = parse_document(sdl, None).expect("Failed to parse");
        assert!(parsed.definitions[0].extend);
        assert_eq!(parsed.root_types.query.as_deref(), Some("Query"));
        assert_eq!(parsed.root_types.mutation.as_deref(), Some("Mutation"));
        assert!(parsed.root_types.subscription.is_none());
    }

    #[test]
    fn test_parse_enum_value_descriptions() {
        let sdl = r#"
            enum Color {
                "Warm"
                RED
                GREEN
            }
        "#;

        let parsed = parse_document(sdl, None).expect("Failed to parse");
        let TypeDef::Enum(color) = &parsed.definitions[0].type_def else {
            panic!("expected enum");
        };
        assert_eq!(color.values[0].description.as_deref(), Some("Warm"));
        assert!(color.values[1].description.is_none());
    }

    #[test]
    fn test_parse_syntax_error() {
        let result = parse_document("type Query {", Some("broken.graphql"));
        assert!(matches!(
            result,
            Err(ParseError::Syntax { ref document, .. }) if document == "broken.graphql"
        ));
    }
}
