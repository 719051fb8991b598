//! TypeScript declaration generation modules.

pub mod enums;
pub mod objects;
pub mod scalars;
pub mod type_ref;
pub mod unions;

pub use enums::EnumGenerator;
pub use objects::ObjectGenerator;
pub use scalars::ScalarGenerator;
pub use type_ref::resolve_type_ref;
pub use unions::UnionGenerator;

/// Name of the callable-field construct declared in the preamble.
pub const CALLABLE_TYPE_NAME: &str = "GQLFunction";

/// Renders a description as a doc comment placed on the line above a declaration.
///
/// Returns an empty string when there is no description.
#[must_use]
pub fn doc_comment(description: Option<&str>) -> String {
    let Some(text) = description.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };
    let text = text.replace("*/", "*\\/");

    if text.contains('\n') {
        let mut output = String::from("/**\n");
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                output.push_str(" *\n");
            } else {
                output.push_str(&format!(" * {line}\n"));
            }
        }
        output.push_str(" */\n");
        output
    } else {
        format!("/** {text} */\n")
    }
}

/// Indents every line after the first by one tab, for members nested in a block.
#[must_use]
pub fn indent_continuation(text: &str) -> String {
    text.replace('\n', "\n\t")
}

/// Uppercases the first character of a name.
#[must_use]
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_comment_single_line() {
        assert_eq!(doc_comment(Some("A user")), "/** A user */\n");
        assert_eq!(doc_comment(None), "");
        assert_eq!(doc_comment(Some("   ")), "");
    }

    #[test]
    fn test_doc_comment_multi_line() {
        assert_eq!(
            doc_comment(Some("First line\n\nSecond line")),
            "/**\n * First line\n *\n * Second line\n */\n"
        );
    }

    #[test]
    fn test_doc_comment_escapes_terminator() {
        assert_eq!(doc_comment(Some("ends */ early")), "/** ends *\\/ early */\n");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("greet"), "Greet");
        assert_eq!(upper_first("Query"), "Query");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_indent_continuation() {
        assert_eq!(indent_continuation("/** doc */\nname: String"), "/** doc */\n\tname: String");
    }
}
