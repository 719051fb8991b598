//! Schema type definitions.
//!
//! This module contains the data structures representing a resolved GraphQL
//! schema: the ordered type map, the six kinds of type definitions, fields,
//! arguments and the recursive type reference grammar.

use indexmap::IndexMap;
use std::fmt;

/// Names of the scalars every GraphQL schema provides.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Boolean", "Int", "Float", "ID"];

/// Root type names that are always emitted, even without a syntactic origin.
pub const RESERVED_ROOT_TYPES: [&str; 2] = ["Query", "Mutation"];

/// Complete resolved schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Root operation type names from a `schema { ... }` definition.
    pub root_types: RootTypes,
    /// Type map in insertion order.
    types: IndexMap<String, TypeDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type definition, replacing any previous definition with the same name.
    pub fn add_type(&mut self, type_def: TypeDef) -> Option<TypeDef> {
        self.types.insert(type_def.name().to_string(), type_def)
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Looks up a type by name for modification.
    pub fn get_type_mut(&mut self, name: &str) -> Option<&mut TypeDef> {
        self.types.get_mut(name)
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterates over the type definitions in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    /// Returns true if the type is a reserved root or is named by `schema { ... }`.
    #[must_use]
    pub fn is_root_type(&self, type_def: &TypeDef) -> bool {
        type_def.is_reserved_root() || self.root_types.contains(type_def.name())
    }

    /// Number of types in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the schema holds no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Root operation type names declared by a `schema { ... }` definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootTypes {
    /// Query root type.
    pub query: Option<String>,
    /// Mutation root type.
    pub mutation: Option<String>,
    /// Subscription root type.
    pub subscription: Option<String>,
}

impl RootTypes {
    /// Returns true if `name` is one of the declared root operation types.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .any(|root| root.as_deref() == Some(name))
    }
}

/// Position of the definition a type was declared by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOrigin {
    /// Document name (usually a file path), if known.
    pub source: Option<String>,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

impl SourceOrigin {
    /// Creates a new origin.
    #[must_use]
    pub fn new(source: Option<&str>, line: usize, column: usize) -> Self {
        Self {
            source: source.map(str::to_string),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source.as_deref().unwrap_or("<sdl>"),
            self.line,
            self.column
        )
    }
}

/// Type definition variants.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    /// Enum type.
    Enum(EnumDef),
    /// Object type.
    Object(ObjectDef),
    /// Interface type.
    Interface(ObjectDef),
    /// Input object type.
    Input(ObjectDef),
    /// Scalar type.
    Scalar(ScalarDef),
    /// Union type.
    Union(UnionDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(e) => &e.name,
            Self::Object(o) | Self::Interface(o) | Self::Input(o) => &o.name,
            Self::Scalar(s) => &s.name,
            Self::Union(u) => &u.name,
        }
    }

    /// Returns the description of the type.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => e.description.as_deref(),
            Self::Object(o) | Self::Interface(o) | Self::Input(o) => o.description.as_deref(),
            Self::Scalar(s) => s.description.as_deref(),
            Self::Union(u) => u.description.as_deref(),
        }
    }

    /// Returns where the type was declared, if it was declared in source.
    #[must_use]
    pub fn origin(&self) -> Option<&SourceOrigin> {
        match self {
            Self::Enum(e) => e.origin.as_ref(),
            Self::Object(o) | Self::Interface(o) | Self::Input(o) => o.origin.as_ref(),
            Self::Scalar(s) => s.origin.as_ref(),
            Self::Union(u) => u.origin.as_ref(),
        }
    }

    /// Removes the syntactic origin, marking the type as materialized.
    pub fn clear_origin(&mut self) {
        match self {
            Self::Enum(e) => e.origin = None,
            Self::Object(o) | Self::Interface(o) | Self::Input(o) => o.origin = None,
            Self::Scalar(s) => s.origin = None,
            Self::Union(u) => u.origin = None,
        }
    }

    /// Returns the SDL keyword of the kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::Object(_) => "type",
            Self::Interface(_) => "interface",
            Self::Input(_) => "input",
            Self::Scalar(_) => "scalar",
            Self::Union(_) => "union",
        }
    }

    /// Returns true if the type was declared in source.
    #[must_use]
    pub fn has_origin(&self) -> bool {
        self.origin().is_some()
    }

    /// Returns true if the type is one of the reserved root types.
    #[must_use]
    pub fn is_reserved_root(&self) -> bool {
        RESERVED_ROOT_TYPES.contains(&self.name())
    }

    /// Returns true if this is a scalar type.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

/// Object, interface or input object definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declaring definition.
    pub origin: Option<SourceOrigin>,
    /// Implemented interfaces (objects and interfaces only).
    pub implements: Vec<String>,
    /// Fields in declaration order.
    pub fields: IndexMap<String, FieldDef>,
}

impl ObjectDef {
    /// Creates a new object definition without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            origin: None,
            implements: Vec::new(),
            fields: IndexMap::new(),
        }
    }

    /// Adds a field, replacing any field of the same name.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.insert(field.name.clone(), field);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }
}

/// Field of an object, interface or input object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Description.
    pub description: Option<String>,
    /// Arguments in declaration order.
    pub arguments: Vec<ArgumentDef>,
}

impl FieldDef {
    /// Creates a new field without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            arguments: Vec::new(),
        }
    }

    /// Returns true if the field takes arguments.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Field argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDef {
    /// Argument name.
    pub name: String,
    /// Argument type.
    pub ty: TypeRef,
    /// Description.
    pub description: Option<String>,
}

impl ArgumentDef {
    /// Creates a new argument.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declaring definition.
    pub origin: Option<SourceOrigin>,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    /// Creates a new enum definition without values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            origin: None,
            values: Vec::new(),
        }
    }

    /// Adds a value to the enum.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Scalar type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declaring definition.
    pub origin: Option<SourceOrigin>,
}

impl ScalarDef {
    /// Creates a new scalar definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            origin: None,
        }
    }
}

/// Union type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declaring definition.
    pub origin: Option<SourceOrigin>,
    /// Member type names in declaration order.
    pub members: Vec<String>,
}

impl UnionDef {
    /// Creates a new union definition without members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            origin: None,
            members: Vec::new(),
        }
    }
}

/// Reference to a type from a field or argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Named type.
    Named(String),
    /// List of the inner type.
    List(Box<TypeRef>),
    /// Non-null wrapper. Never wraps another `NonNull`.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a list type reference.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a reference in `NonNull`; already non-null references are returned unchanged.
    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Returns true if the outermost wrapper is `NonNull`.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
