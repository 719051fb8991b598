//! Generation options.
//!
//! Options are built from [`GenerateOptions::default`] and the chained
//! `with_*` methods, or read from a JSON document with camelCase keys:
//!
//! ```json
//! {
//!   "enumType": "enum",
//!   "objectType": "type",
//!   "namespaceName": "api",
//!   "outputType": "export",
//!   "argumentGrouping": false,
//!   "customScalarTypes": { "JSON": "Record<string, unknown>" },
//!   "nullableType": { "input": "{} | undefined" }
//! }
//! ```
//!
//! `argument2interface` and `customscalarTypes` are accepted as aliases of
//! `argumentGrouping` and `customScalarTypes`.

use crate::error::CodegenError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Default namespace name.
pub const DEFAULT_NAMESPACE: &str = "gql";

/// Type expression used for scalars without a mapping.
pub const FALLBACK_SCALAR_TYPE: &str = "any";

/// Placeholder replaced by the type expression in nullable templates.
pub const TEMPLATE_PLACEHOLDER: &str = "{}";

/// Default TypeScript expressions for the built-in scalars.
const BUILTIN_SCALAR_DEFAULTS: [(&str, &str); 5] = [
    ("String", "string"),
    ("Boolean", "boolean"),
    ("Int", "number"),
    ("Float", "number"),
    ("ID", "string | number"),
];

/// How enum types are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumStyle {
    /// `export const enum E { A = 'A' }`.
    Enum,
    /// `export type E = 'A' | 'B'`.
    #[default]
    Type,
}

/// How objects, interfaces and inputs are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectStyle {
    /// `export interface T { ... }`.
    #[default]
    Interface,
    /// `export type T = { ... }`.
    Type,
}

/// Prefix applied to the namespace block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputVisibility {
    /// `export namespace`.
    Export,
    /// `declare namespace`.
    #[default]
    Declare,
    /// Bare `namespace`.
    None,
}

impl OutputVisibility {
    /// Returns the text placed before `namespace`, including the trailing space.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Export => "export ",
            Self::Declare => "declare ",
            Self::None => "",
        }
    }
}

/// Structural category a field belongs to, selecting its nullable renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// Input object fields.
    Input,
    /// Interface fields and arguments.
    Interface,
    /// Object fields and arguments.
    Object,
}

/// Custom nullable rendering function.
pub type NullableFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Renders a nullable type expression.
#[derive(Clone, Default, Deserialize)]
#[serde(from = "String")]
pub enum NullableRenderer {
    /// `T | null | undefined`.
    #[default]
    Default,
    /// Template in which `{}` is replaced by the type expression.
    Template(String),
    /// Arbitrary function.
    Custom(NullableFn),
}

impl NullableRenderer {
    /// Creates a renderer from a closure.
    pub fn custom(render: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(render))
    }

    /// Creates a template renderer.
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    /// Decorates a type expression as nullable.
    #[must_use]
    pub fn render(&self, expr: &str) -> String {
        match self {
            Self::Default => format!("{expr} | null | undefined"),
            Self::Template(template) => template.replace(TEMPLATE_PLACEHOLDER, expr),
            Self::Custom(render) => render(expr),
        }
    }
}

impl From<String> for NullableRenderer {
    fn from(template: String) -> Self {
        Self::Template(template)
    }
}

impl fmt::Debug for NullableRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Nullable renderers per structural category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NullableRenderers {
    /// Renderer for input object fields.
    pub input: NullableRenderer,
    /// Renderer for interface fields.
    pub interface: NullableRenderer,
    /// Renderer for object fields.
    pub object: NullableRenderer,
}

impl NullableRenderers {
    /// Returns the renderer used for the given category.
    #[must_use]
    pub fn for_category(&self, category: TypeCategory) -> &NullableRenderer {
        match category {
            TypeCategory::Input => &self.input,
            TypeCategory::Interface => &self.interface,
            TypeCategory::Object => &self.object,
        }
    }
}

/// Options controlling declaration generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Enum emission strategy.
    #[serde(rename = "enumType")]
    pub enum_style: EnumStyle,
    /// Container emission strategy.
    #[serde(rename = "objectType")]
    pub object_style: ObjectStyle,
    /// Name of the wrapping namespace.
    pub namespace_name: String,
    /// Prefix applied to the namespace.
    #[serde(rename = "outputType")]
    pub visibility: OutputVisibility,
    /// Emit named argument groups instead of inline argument records.
    #[serde(alias = "argument2interface")]
    pub argument_grouping: bool,
    /// Scalar name to TypeScript expression overrides.
    #[serde(rename = "customScalarTypes", alias = "customscalarTypes")]
    pub custom_scalars: IndexMap<String, String>,
    /// Nullable renderers per category.
    #[serde(rename = "nullableType")]
    pub nullable: NullableRenderers,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            enum_style: EnumStyle::default(),
            object_style: ObjectStyle::default(),
            namespace_name: DEFAULT_NAMESPACE.to_string(),
            visibility: OutputVisibility::default(),
            argument_grouping: true,
            custom_scalars: IndexMap::new(),
            nullable: NullableRenderers::default(),
        }
    }
}

impl GenerateOptions {
    /// Creates options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads options from a JSON file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be read or decoded.
    pub fn from_json_file(path: &Path) -> Result<Self, CodegenError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&json)?)
    }

    /// Sets the enum style.
    #[must_use]
    pub fn with_enum_style(mut self, style: EnumStyle) -> Self {
        self.enum_style = style;
        self
    }

    /// Sets the object style.
    #[must_use]
    pub fn with_object_style(mut self, style: ObjectStyle) -> Self {
        self.object_style = style;
        self
    }

    /// Sets the namespace name.
    #[must_use]
    pub fn with_namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace_name = name.into();
        self
    }

    /// Sets the namespace prefix.
    #[must_use]
    pub fn with_visibility(mut self, visibility: OutputVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Enables or disables named argument groups.
    #[must_use]
    pub fn with_argument_grouping(mut self, enabled: bool) -> Self {
        self.argument_grouping = enabled;
        self
    }

    /// Maps a scalar to a TypeScript expression.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.custom_scalars.insert(name.into(), expr.into());
        self
    }

    /// Sets the nullable renderer of one category.
    #[must_use]
    pub fn with_nullable(mut self, category: TypeCategory, renderer: NullableRenderer) -> Self {
        match category {
            TypeCategory::Input => self.nullable.input = renderer,
            TypeCategory::Interface => self.nullable.interface = renderer,
            TypeCategory::Object => self.nullable.object = renderer,
        }
        self
    }

    /// Returns the scalar table: built-in defaults overlaid by the custom entries.
    #[must_use]
    pub fn resolved_scalars(&self) -> IndexMap<String, String> {
        let mut scalars: IndexMap<String, String> = BUILTIN_SCALAR_DEFAULTS
            .iter()
            .map(|(name, expr)| ((*name).to_string(), (*expr).to_string()))
            .collect();
        for (name, expr) in &self.custom_scalars {
            scalars.insert(name.clone(), expr.clone());
        }
        scalars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.enum_style, EnumStyle::Type);
        assert_eq!(options.object_style, ObjectStyle::Interface);
        assert_eq!(options.namespace_name, "gql");
        assert_eq!(options.visibility, OutputVisibility::Declare);
        assert!(options.argument_grouping);
        assert!(options.custom_scalars.is_empty());
    }

    #[test]
    fn test_visibility_prefix() {
        assert_eq!(OutputVisibility::Export.prefix(), "export ");
        assert_eq!(OutputVisibility::Declare.prefix(), "declare ");
        assert_eq!(OutputVisibility::None.prefix(), "");
    }

    #[test]
    fn test_nullable_renderers() {
        assert_eq!(NullableRenderer::Default.render("String"), "String | null | undefined");
        assert_eq!(NullableRenderer::template("{} | null").render("Int"), "Int | null");
        assert_eq!(
            NullableRenderer::custom(|expr| format!("Maybe<{expr}>")).render("User"),
            "Maybe<User>"
        );
    }

    #[test]
    fn test_resolved_scalars_is_pure_merge() {
        let options = GenerateOptions::default()
            .with_scalar("ID", "string")
            .with_scalar("JSON", "Record<string, unknown>");

        let scalars = options.resolved_scalars();
        assert_eq!(scalars.get("String").map(String::as_str), Some("string"));
        assert_eq!(scalars.get("ID").map(String::as_str), Some("string"));
        assert_eq!(
            scalars.get("JSON").map(String::as_str),
            Some("Record<string, unknown>")
        );
        assert_eq!(options.custom_scalars.len(), 2);
        assert!(!options.custom_scalars.contains_key("String"));
    }

    #[test]
    fn test_from_json_str() {
        let options = GenerateOptions::from_json_str(
            r#"{
                "enumType": "enum",
                "objectType": "type",
                "namespaceName": "api",
                "outputType": "none",
                "argumentGrouping": false,
                "customScalarTypes": { "Date": "string" },
                "nullableType": { "input": "{} | undefined" }
            }"#,
        )
        .expect("Failed to parse options");

        assert_eq!(options.enum_style, EnumStyle::Enum);
        assert_eq!(options.object_style, ObjectStyle::Type);
        assert_eq!(options.namespace_name, "api");
        assert_eq!(options.visibility, OutputVisibility::None);
        assert!(!options.argument_grouping);
        assert_eq!(options.custom_scalars.get("Date").map(String::as_str), Some("string"));
        assert_eq!(options.nullable.input.render("Int"), "Int | undefined");
        assert_eq!(
            options.nullable.object.render("Int"),
            "Int | null | undefined"
        );
    }

    #[test]
    fn test_from_json_str_accepts_legacy_keys() {
        let options = GenerateOptions::from_json_str(
            r#"{
                "argument2interface": false,
                "customscalarTypes": { "Date": "string" }
            }"#,
        )
        .expect("Failed to parse options");

        assert!(!options.argument_grouping);
        assert_eq!(options.custom_scalars.get("Date").map(String::as_str), Some("string"));
    }

    #[test]
    fn test_from_json_str_empty_object_uses_defaults() {
        let options = GenerateOptions::from_json_str("{}").expect("Failed to parse options");
        assert_eq!(options.namespace_name, DEFAULT_NAMESPACE);
        assert!(options.argument_grouping);
    }

    #[test]
    fn test_from_json_str_rejects_unknown_style() {
        let result = GenerateOptions::from_json_str(r#"{ "enumType": "bitflags" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("gqlts.json");
        std::fs::write(&path, r#"{ "namespaceName": "schema" }"#).expect("Failed to write");

        let options = GenerateOptions::from_json_file(&path).expect("Failed to read options");
        assert_eq!(options.namespace_name, "schema");
    }

    #[test]
    fn test_with_nullable_per_category() {
        let options = GenerateOptions::default()
            .with_nullable(TypeCategory::Interface, NullableRenderer::template("{} | null"));

        assert_eq!(
            options.nullable.for_category(TypeCategory::Interface).render("A"),
            "A | null"
        );
        assert_eq!(
            options.nullable.for_category(TypeCategory::Object).render("A"),
            "A | null | undefined"
        );
    }
}
