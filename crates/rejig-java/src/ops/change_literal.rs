//! Transform literal values within an expression scope.

use rejig_java_cst::nodes::{Literal, LiteralValue, NodeId};
use rejig_java_cst::types::PrimitiveTag;
use rejig_java_cst::visitor::RefactorCtx;
use rejig_java_cst::JavaRefactorVisitor;

/// Applies a pure value transform to every literal inside a scope anchor,
/// recursively - a scope anchored on a string concatenation transforms the
/// string literals participating in the concatenation.
///
/// The source form is recomputed from the literal's type tag, so numeric
/// suffixes (`L`, `d`, `f`) are reattached and char/string escaping follows
/// Java rules.
pub struct ChangeLiteral {
    scope: NodeId,
    transform: Box<dyn Fn(&LiteralValue) -> LiteralValue>,
}

impl ChangeLiteral {
    /// `scope` is the id of an expression containing the literals to
    /// transform; `transform` maps each literal value to its replacement.
    pub fn new(
        scope: NodeId,
        transform: impl Fn(&LiteralValue) -> LiteralValue + 'static,
    ) -> Self {
        ChangeLiteral {
            scope,
            transform: Box::new(transform),
        }
    }
}

impl JavaRefactorVisitor for ChangeLiteral {
    fn visit_literal(&mut self, node: Literal, ctx: &mut RefactorCtx) -> Literal {
        if !ctx.is_scope_in_cursor_path(self.scope) {
            return node;
        }
        let transformed = (self.transform)(&node.value);
        if transformed == node.value {
            return node;
        }
        let source = transformed_source(&transformed, node.type_tag);
        node.with_value(transformed, source)
    }
}

/// Render a transformed value in the source form its type tag dictates.
fn transformed_source(value: &LiteralValue, tag: PrimitiveTag) -> String {
    match tag {
        PrimitiveTag::Boolean
        | PrimitiveTag::Byte
        | PrimitiveTag::Int
        | PrimitiveTag::Short
        | PrimitiveTag::Void => value.to_string(),
        PrimitiveTag::Char => escape_char_literal(&value.to_string()),
        PrimitiveTag::Double => format!("{value}d"),
        PrimitiveTag::Float => format!("{value}f"),
        PrimitiveTag::Long => format!("{value}L"),
        PrimitiveTag::String => format!("\"{}\"", escape_java(&value.to_string())),
        PrimitiveTag::Wildcard => "*".to_string(),
        PrimitiveTag::Null => "null".to_string(),
        PrimitiveTag::None => String::new(),
    }
}

/// Single-quote a char value with Java escaping. Two characters escape
/// differently in a char context than in a string: `"` prints as `'"'` and
/// `/` prints as `'/'`.
fn escape_char_literal(text: &str) -> String {
    let escaped: String = text.chars().map(|c| match c {
        '"' => "\"".to_string(),
        '/' => "/".to_string(),
        '\'' => "\\'".to_string(),
        c => escape_common(c),
    }).collect();
    format!("'{escaped}'")
}

/// Escape a string value per Java string rules.
fn escape_java(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '"' => "\\\"".to_string(),
            c => escape_common(c),
        })
        .collect()
}

fn escape_common(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        '\u{0008}' => "\\b".to_string(),
        '\u{000c}' => "\\f".to_string(),
        c if (c as u32) < 0x20 || (c as u32) > 0x7e => format!("\\u{:04X}", c as u32),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rendering_tests {
        use super::*;

        #[test]
        fn long_suffix_is_reattached() {
            let source = transformed_source(&LiteralValue::Long(7), PrimitiveTag::Long);
            assert_eq!(source, "7L");
        }

        #[test]
        fn float_and_double_suffixes() {
            assert_eq!(
                transformed_source(&LiteralValue::Double(2.5), PrimitiveTag::Double),
                "2.5d"
            );
            assert_eq!(
                transformed_source(&LiteralValue::Float(2.5), PrimitiveTag::Float),
                "2.5f"
            );
        }

        #[test]
        fn strings_are_quoted_and_escaped() {
            assert_eq!(
                transformed_source(
                    &LiteralValue::String("a\"b\\c\n".to_string()),
                    PrimitiveTag::String
                ),
                "\"a\\\"b\\\\c\\n\""
            );
        }

        #[test]
        fn char_quote_and_slash_stay_plain() {
            assert_eq!(
                transformed_source(&LiteralValue::Char('"'), PrimitiveTag::Char),
                "'\"'"
            );
            assert_eq!(
                transformed_source(&LiteralValue::Char('/'), PrimitiveTag::Char),
                "'/'"
            );
            assert_eq!(
                transformed_source(&LiteralValue::Char('\''), PrimitiveTag::Char),
                "'\\''"
            );
            assert_eq!(
                transformed_source(&LiteralValue::Char('\n'), PrimitiveTag::Char),
                "'\\n'"
            );
        }

        #[test]
        fn non_ascii_chars_use_unicode_escapes() {
            assert_eq!(
                transformed_source(&LiteralValue::Char('\u{00e9}'), PrimitiveTag::Char),
                "'\\u00E9'"
            );
        }

        #[test]
        fn null_and_wildcard_forms() {
            assert_eq!(
                transformed_source(&LiteralValue::Null, PrimitiveTag::Null),
                "null"
            );
            assert_eq!(
                transformed_source(&LiteralValue::Int(0), PrimitiveTag::Wildcard),
                "*"
            );
            assert_eq!(
                transformed_source(&LiteralValue::Int(0), PrimitiveTag::None),
                ""
            );
        }
    }
}
