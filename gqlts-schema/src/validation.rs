//! Schema validation utilities.
//!
//! This module checks that an assembled schema is internally consistent:
//! every referenced type exists, enums have unique values and unions have
//! members. It does not check GraphQL's full set of validation rules.

use crate::error::SchemaError;
use crate::types::{EnumDef, ObjectDef, Schema, TypeDef, TypeRef, UnionDef};
use std::collections::HashSet;

/// Validates a built schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    for type_def in schema.types() {
        match type_def {
            TypeDef::Object(object) | TypeDef::Interface(object) | TypeDef::Input(object) => {
                validate_object(schema, object)?;
            }
            TypeDef::Enum(enum_def) => validate_enum(enum_def)?,
            TypeDef::Union(union_def) => validate_union(schema, union_def)?,
            TypeDef::Scalar(_) => {}
        }
    }
    Ok(())
}

/// Validates the field and argument references of an object-like type.
fn validate_object(schema: &Schema, object: &ObjectDef) -> Result<(), SchemaError> {
    for interface in &object.implements {
        if !schema.has_type(interface) {
            return Err(SchemaError::type_not_found(interface, &object.name));
        }
    }

    for field in object.fields.values() {
        let location = format!("{}.{}", object.name, field.name);
        validate_reference(schema, &field.ty, &location)?;

        for arg in &field.arguments {
            let location = format!("{}.{}({})", object.name, field.name, arg.name);
            validate_reference(schema, &arg.ty, &location)?;
        }
    }

    Ok(())
}

fn validate_reference(schema: &Schema, ty: &TypeRef, location: &str) -> Result<(), SchemaError> {
    let name = ty.base_name();
    if schema.has_type(name) {
        Ok(())
    } else {
        Err(SchemaError::type_not_found(name, location))
    }
}

/// Validates an enum type definition.
fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    if enum_def.values.is_empty() {
        return Err(SchemaError::validation(format!(
            "Enum '{}' must define at least one value",
            enum_def.name
        )));
    }

    let mut seen_names = HashSet::new();
    for value in &enum_def.values {
        if !seen_names.insert(value.name.as_str()) {
            return Err(SchemaError::InvalidEnumValue {
                enum_name: enum_def.name.clone(),
                value: value.name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a union type definition.
fn validate_union(schema: &Schema, union_def: &UnionDef) -> Result<(), SchemaError> {
    if union_def.members.is_empty() {
        return Err(SchemaError::validation(format!(
            "Union '{}' must have at least one member",
            union_def.name
        )));
    }

    for member in &union_def.members {
        if !schema.has_type(member) {
            return Err(SchemaError::type_not_found(member, &union_def.name));
        }
    }

    Ok(())
}
