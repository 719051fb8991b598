//! Object, interface and input declaration generation.
//!
//! Fields with arguments become callable fields typed as
//! `GQLFunction<Args, Return>`. `Args` is either a named argument group
//! declared next to the container (`IGreetOnQueryArguments`) or an inline
//! record, depending on [`GenerateOptions::argument_grouping`].

use super::{CALLABLE_TYPE_NAME, doc_comment, indent_continuation, resolve_type_ref, upper_first};
use crate::options::{GenerateOptions, NullableRenderer, ObjectStyle, TypeCategory};
use gqlts_schema::{FieldDef, ObjectDef};

/// Generator for object-like declarations.
pub struct ObjectGenerator<'a> {
    options: &'a GenerateOptions,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator.
    #[must_use]
    pub fn new(options: &'a GenerateOptions) -> Self {
        Self { options }
    }

    /// Generates the declarations for one type.
    ///
    /// Argument groups come first, followed by the container declaration.
    #[must_use]
    pub fn generate(&self, def: &ObjectDef, category: TypeCategory) -> Vec<String> {
        let renderer = self.options.nullable.for_category(category);
        let mut declarations = Vec::new();
        let mut members = Vec::with_capacity(def.fields.len());

        for field in def.fields.values() {
            let member = if field.is_callable() {
                self.generate_callable(def, field, renderer, &mut declarations)
            } else {
                format!("{}: {}", field.name, resolve_type_ref(&field.ty, renderer, false))
            };
            members.push(indent_continuation(&format!(
                "{}{}",
                doc_comment(field.description.as_deref()),
                member
            )));
        }

        declarations.push(self.generate_container(def, &members));
        declarations
    }

    /// Generates a callable field, pushing its argument group if grouping is enabled.
    fn generate_callable(
        &self,
        owner: &ObjectDef,
        field: &FieldDef,
        renderer: &NullableRenderer,
        declarations: &mut Vec<String>,
    ) -> String {
        let return_type = resolve_type_ref(&field.ty, renderer, false);

        let argument_type = if self.options.argument_grouping {
            let group_name = argument_group_name(&field.name, &owner.name);
            declarations.push(generate_argument_group(&group_name, field, renderer));
            group_name
        } else {
            let arguments: Vec<String> = field
                .arguments
                .iter()
                .map(|arg| {
                    format!("{}: {}", arg.name, resolve_type_ref(&arg.ty, renderer, false))
                })
                .collect();
            format!("{{ {} }}", arguments.join(", "))
        };

        format!(
            "{}: {}<{}, {}>",
            field.name, CALLABLE_TYPE_NAME, argument_type, return_type
        )
    }

    fn generate_container(&self, def: &ObjectDef, members: &[String]) -> String {
        let doc = doc_comment(def.description.as_deref());

        match (self.options.object_style, members.is_empty()) {
            (ObjectStyle::Interface, true) => format!("{doc}export interface {} {{}}", def.name),
            (ObjectStyle::Interface, false) => format!(
                "{doc}export interface {} {{\n\t{}\n}}",
                def.name,
                members.join("\n\t")
            ),
            (ObjectStyle::Type, true) => format!("{doc}export type {} = {{}}", def.name),
            (ObjectStyle::Type, false) => format!(
                "{doc}export type {} = {{\n\t{}\n}}",
                def.name,
                members.join(",\n\t")
            ),
        }
    }
}

/// Name of the argument group of `field` on `owner`: `I{Field}On{Owner}Arguments`.
#[must_use]
pub fn argument_group_name(field: &str, owner: &str) -> String {
    format!("I{}On{}Arguments", upper_first(field), upper_first(owner))
}

fn generate_argument_group(name: &str, field: &FieldDef, renderer: &NullableRenderer) -> String {
    let arguments: Vec<String> = field
        .arguments
        .iter()
        .map(|arg| {
            indent_continuation(&format!(
                "{}{}: {}",
                doc_comment(arg.description.as_deref()),
                arg.name,
                resolve_type_ref(&arg.ty, renderer, false)
            ))
        })
        .collect();

    format!("interface {name} {{\n\t{}\n}}", arguments.join("\n\t"))
}
