//! Type reference conversion.

use crate::options::NullableRenderer;
use gqlts_schema::TypeRef;

/// Converts a GraphQL type reference into a TypeScript type expression.
///
/// `is_not_null` tells whether the reference is directly wrapped by a
/// `NonNull`. A `NonNull` only affects its immediate child: the elements of a
/// non-null list are still nullable unless they carry their own `NonNull`.
#[must_use]
pub fn resolve_type_ref(ty: &TypeRef, renderer: &NullableRenderer, is_not_null: bool) -> String {
    match ty {
        TypeRef::List(inner) => {
            let expr = format!("Array<{}>", resolve_type_ref(inner, renderer, false));
            decorate(expr, renderer, is_not_null)
        }
        TypeRef::NonNull(inner) => resolve_type_ref(inner, renderer, true),
        TypeRef::Named(name) => decorate(name.clone(), renderer, is_not_null),
    }
}

fn decorate(expr: String, renderer: &NullableRenderer, is_not_null: bool) -> String {
    if is_not_null {
        expr
    } else {
        renderer.render(&expr)
    }
}
