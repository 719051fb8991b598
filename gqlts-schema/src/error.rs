//! Error types for schema parsing and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for schema parsing and assembly operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// SDL syntax error.
    #[error("syntax error in {document}: {message}")]
    Syntax {
        /// Document name.
        document: String,
        /// Parser message.
        message: String,
    },

    /// The same name is defined with two different kinds.
    #[error(
        "duplicate definition of '{name}': already defined as {existing}, redefined as {incoming}"
    )]
    DuplicateDefinition {
        /// Type name.
        name: String,
        /// Kind of the first definition.
        existing: String,
        /// Kind of the conflicting definition.
        incoming: String,
    },

    /// A field is declared twice with different types.
    #[error("conflicting field '{type_name}.{field}': {existing} vs {incoming}")]
    ConflictingField {
        /// Owning type name.
        type_name: String,
        /// Field name.
        field: String,
        /// Type of the first declaration.
        existing: String,
        /// Type of the conflicting declaration.
        incoming: String,
    },

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Schema document could not be read.
    #[error("failed to read '{path}': {source}", path = .path.display())]
    ReadFile {
        /// Document path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Referenced type not found.
    #[error("type '{name}' referenced by '{referenced_by}' not found")]
    TypeNotFound {
        /// Type name.
        name: String,
        /// Location of the reference (`Type.field`, `Type.field(arg)` or union name).
        referenced_by: String,
    },

    /// Invalid enum value.
    #[error("invalid enum value '{value}' for enum '{enum_name}'")]
    InvalidEnumValue {
        /// Enum name.
        enum_name: String,
        /// Invalid value.
        value: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a syntax error.
    pub fn syntax(document: Option<&str>, message: impl Into<String>) -> Self {
        Self::Syntax {
            document: document.unwrap_or("<sdl>").to_string(),
            message: message.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(
        name: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::DuplicateDefinition {
            name: name.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    /// Creates a conflicting field error.
    pub fn conflicting_field(
        type_name: impl Into<String>,
        field: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::ConflictingField {
            type_name: type_name.into(),
            field: field.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }
}

impl SchemaError {
    /// Creates a type-not-found error.
    pub fn type_not_found(name: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::TypeNotFound {
            name: name.into(),
            referenced_by: referenced_by.into(),
        }
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::duplicate("Color", "enum", "type");
        assert_eq!(
            err.to_string(),
            "duplicate definition of 'Color': already defined as enum, redefined as type"
        );

        let err = ParseError::syntax(None, "expected name");
        assert_eq!(err.to_string(), "syntax error in <sdl>: expected name");
    }

    #[test]
    fn test_schema_error_from_parse_error() {
        let err: SchemaError = ParseError::conflicting_field("User", "id", "ID!", "String").into();
        assert!(matches!(err, SchemaError::Parse(_)));
        assert!(err.to_string().contains("User.id"));
    }

    #[test]
    fn test_type_not_found_display() {
        let err = SchemaError::type_not_found("Post", "User.posts");
        assert_eq!(err.to_string(), "type 'Post' referenced by 'User.posts' not found");
    }
}
