//! AspectJ-style method signature matching.
//!
//! A signature names a declaring type pattern, a method name pattern, and an
//! argument pattern:
//!
//! ```text
//! signature   := typePattern WS namePattern '(' argPatterns? ')'
//! typePattern := dotSeg ('.' dotSeg)*
//! dotSeg      := '*' | '..' | identChars   -- '*' one segment, '..' any depth
//! namePattern := identChars                -- may contain '*' glob
//! argPatterns := argPattern (',' WS? argPattern)*
//! argPattern  := typePattern ('[]')* | '..' | typePattern '...'
//! ```
//!
//! Examples:
//!
//! ```text
//! Object equals(Object)          -- matches on any subtype of Object
//! java.util.* add(..)            -- any single class in java.util
//! a..B foo(String, int)          -- B anywhere below package a
//! A format(String, Object...)    -- trailing varargs
//! ```
//!
//! Compilation yields three anchored regexes; matching an invocation checks
//! the declaring type (against the whole supertype/interface closure), the
//! simple name, and the comma-joined fully qualified argument types. Missing
//! type resolution on either side makes `matches` return `false`, never an
//! error; an invalid signature is a construction-time error.

use regex::Regex;
use thiserror::Error;
use winnow::ascii::{multispace0, multispace1};
use winnow::combinator::separated;
use winnow::prelude::*;
use winnow::token::take_while;
use winnow::ModalResult;

use rejig_java_cst::nodes::MethodInvocation;
use rejig_java_cst::types::ClassType;

/// Error type for signature compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature text does not conform to the grammar.
    #[error("invalid signature at offset {position}: unexpected '{token}'")]
    InvalidSignature { token: String, position: usize },
}

impl SignatureError {
    fn at(signature: &str, token: impl Into<String>) -> Self {
        let token = token.into();
        let position = signature.find(&token).unwrap_or(0);
        SignatureError::InvalidSignature { token, position }
    }
}

// ============================================================================
// Signature AST
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum TypeSeg {
    /// `*`: exactly one name segment.
    Any,
    /// `..`: zero or more name segments.
    AnyDepth,
    /// A concrete segment, possibly containing a `*` glob.
    Ident(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgPattern {
    /// `..`: zero or more comma-separated argument types.
    AnyList,
    /// A type pattern with array dimensions and an optional varargs marker.
    Type {
        segments: Vec<TypeSeg>,
        array_dims: usize,
        varargs: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SignatureAst {
    target_type: Vec<TypeSeg>,
    name: String,
    args: Vec<ArgPattern>,
}

// ============================================================================
// Grammar
// ============================================================================

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '*'
}

fn is_type_char(c: char) -> bool {
    is_name_char(c) || c == '.'
}

fn is_arg_char(c: char) -> bool {
    is_type_char(c) || c == '[' || c == ']'
}

/// Raw token structure: type token, name token, argument tokens.
fn signature_tokens<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str, Vec<&'a str>)> {
    let _ = multispace0.parse_next(input)?;
    let type_token = take_while(1.., is_type_char).parse_next(input)?;
    let _ = multispace1.parse_next(input)?;
    let name_token = take_while(1.., is_name_char).parse_next(input)?;
    let _ = (multispace0, '(').parse_next(input)?;
    let args: Vec<&str> = separated(
        0..,
        (multispace0, take_while(1.., is_arg_char)).map(|(_, arg)| arg),
        ',',
    )
    .parse_next(input)?;
    let _ = (multispace0, ')', multispace0).parse_next(input)?;
    Ok((type_token, name_token, args))
}

/// Split a dotted type pattern into segments; a run of consecutive dots is
/// the `..` any-depth marker.
fn parse_segments(signature: &str, token: &str) -> Result<Vec<TypeSeg>, SignatureError> {
    let mut segments = Vec::new();
    for piece in token.split('.') {
        if piece.is_empty() {
            if segments.last() != Some(&TypeSeg::AnyDepth) {
                segments.push(TypeSeg::AnyDepth);
            }
        } else if piece == "*" {
            segments.push(TypeSeg::Any);
        } else {
            segments.push(TypeSeg::Ident(piece.to_string()));
        }
    }
    if segments.is_empty() {
        return Err(SignatureError::at(signature, token));
    }
    Ok(segments)
}

fn parse_arg(signature: &str, token: &str) -> Result<ArgPattern, SignatureError> {
    if token == ".." {
        return Ok(ArgPattern::AnyList);
    }

    let mut rest = token;
    let varargs = rest.len() > 3 && rest.ends_with("...");
    if varargs {
        rest = &rest[..rest.len() - 3];
    }

    let mut array_dims = 0;
    while let Some(stripped) = rest.strip_suffix("[]") {
        rest = stripped;
        array_dims += 1;
    }

    if rest.is_empty() || rest.contains('[') || rest.contains(']') {
        return Err(SignatureError::at(signature, token));
    }

    Ok(ArgPattern::Type {
        segments: parse_segments(signature, rest)?,
        array_dims,
        varargs,
    })
}

fn parse_signature(signature: &str) -> Result<SignatureAst, SignatureError> {
    let (type_token, name_token, arg_tokens) =
        signature_tokens.parse(signature).map_err(|err| {
            let position = err.offset().min(signature.len());
            let token = signature[position..]
                .chars()
                .next()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "end of input".to_string());
            SignatureError::InvalidSignature { token, position }
        })?;

    let args = arg_tokens
        .iter()
        .map(|token| parse_arg(signature, token))
        .collect::<Result<Vec<_>, _>>()?;

    // A varargs pattern binds the tail of the list; anywhere else it is
    // ill-formed.
    for (i, arg) in args.iter().enumerate() {
        if let ArgPattern::Type { varargs: true, .. } = arg {
            if i + 1 != args.len() {
                return Err(SignatureError::at(signature, arg_tokens[i]));
            }
        }
    }

    Ok(SignatureAst {
        target_type: parse_segments(signature, type_token)?,
        name: name_token.to_string(),
        args,
    })
}

// ============================================================================
// Regex translation
// ============================================================================

/// One concrete segment: `*` alone is one whole segment, an embedded glob
/// matches within the segment.
fn segment_regex(segment: &TypeSeg) -> String {
    match segment {
        TypeSeg::Any => "[^.]+".to_string(),
        TypeSeg::AnyDepth => unreachable!("any-depth handled by the joiner"),
        TypeSeg::Ident(text) => regex::escape(text).replace(r"\*", "[^.]*"),
    }
}

/// Join segments into a dotted pattern. `..` expands to `(\.[^.]+)*` after a
/// concrete segment and `([^.]+\.)*` at the start, so the separating dots
/// stay anchored around it.
fn type_pattern_regex(segments: &[TypeSeg]) -> String {
    let mut out = String::new();
    let mut need_dot = false;
    for segment in segments {
        match segment {
            TypeSeg::AnyDepth => {
                if need_dot {
                    out.push_str(r"(\.[^.]+)*");
                } else {
                    out.push_str(r"([^.]+\.)*");
                }
            }
            concrete => {
                if need_dot {
                    out.push_str(r"\.");
                }
                out.push_str(&segment_regex(concrete));
                need_dot = true;
            }
        }
    }
    out
}

/// The regex for one type pattern in an argument or target position. A bare
/// identifier also matches its `java.lang` qualification, so `String`
/// covers `java.lang.String` and `Object` covers `java.lang.Object`.
fn arg_type_regex(segments: &[TypeSeg]) -> String {
    let unqualified_ident = matches!(segments, [TypeSeg::Ident(_)]);
    let base = type_pattern_regex(segments);
    if unqualified_ident {
        format!(r"(?:java\.lang\.)?{base}")
    } else {
        base
    }
}

fn argument_pattern_regex(args: &[ArgPattern]) -> String {
    let mut out = String::new();
    let mut need_comma = false;
    for (i, arg) in args.iter().enumerate() {
        match arg {
            ArgPattern::AnyList => {
                let last = i + 1 == args.len();
                if need_comma {
                    out.push_str("(,[^,]+)*");
                } else if last {
                    // A sole `..` admits the empty argument list too.
                    out.push_str(".*");
                } else {
                    out.push_str("([^,]+,)*");
                }
            }
            ArgPattern::Type {
                segments,
                array_dims,
                varargs,
            } => {
                if need_comma {
                    out.push(',');
                }
                let mut element = arg_type_regex(segments);
                for _ in 0..*array_dims {
                    element.push_str(r"\[\]");
                }
                if *varargs {
                    // Either the array form or a trailing run of elements.
                    out.push_str(&format!(r"(?:{element}\[\]|{element}(?:,{element})*)"));
                } else {
                    out.push_str(&element);
                }
                need_comma = true;
            }
        }
    }
    out
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

// ============================================================================
// MethodMatcher
// ============================================================================

/// A compiled method signature.
///
/// Compiling the same signature twice yields equal patterns, and matching is
/// a pure function of the matcher and the invocation.
///
/// # Example
///
/// ```
/// use rejig_java::matcher::MethodMatcher;
/// use rejig_java_cst::types::ClassType;
///
/// let matcher = MethodMatcher::new("Object equals(Object)").unwrap();
/// let string = ClassType::with_hierarchy(
///     "java.lang.String",
///     Some(ClassType::build("java.lang.Object")),
///     vec![],
///     vec![],
/// );
/// assert!(matcher.matches_target_type(&string));
/// ```
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    target_type_pattern: Regex,
    method_name_pattern: Regex,
    argument_pattern: Regex,
}

impl MethodMatcher {
    /// Compile a signature. Reports the offending token and position when
    /// the text does not conform to the grammar.
    pub fn new(signature: &str) -> Result<MethodMatcher, SignatureError> {
        let ast = parse_signature(signature)?;

        let name_pattern = regex::escape(&ast.name).replace(r"\*", ".*");
        let compile = |pattern: &str| {
            anchored(pattern).map_err(|_| SignatureError::at(signature, pattern.to_string()))
        };

        Ok(MethodMatcher {
            target_type_pattern: compile(&arg_type_regex(&ast.target_type))?,
            method_name_pattern: compile(&name_pattern)?,
            argument_pattern: compile(&argument_pattern_regex(&ast.args))?,
        })
    }

    /// The compiled declaring-type pattern.
    pub fn target_type_pattern(&self) -> &str {
        self.target_type_pattern.as_str()
    }

    /// The compiled method-name pattern.
    pub fn method_name_pattern(&self) -> &str {
        self.method_name_pattern.as_str()
    }

    /// The compiled argument-list pattern.
    pub fn argument_pattern(&self) -> &str {
        self.argument_pattern.as_str()
    }

    /// True when the type pattern accepts `candidate` or any class in its
    /// supertype/interface closure. This is how `Object equals(Object)`
    /// matches an invocation on `String`.
    pub fn matches_target_type(&self, candidate: &std::sync::Arc<ClassType>) -> bool {
        candidate
            .hierarchy()
            .iter()
            .any(|class| self.target_type_pattern.is_match(class.fully_qualified_name()))
    }

    /// True when the method name pattern accepts `name`.
    pub fn matches_method_name(&self, name: &str) -> bool {
        self.method_name_pattern.is_match(name)
    }

    /// True when the argument pattern accepts the comma-joined type list.
    pub fn matches_argument_types(&self, joined: &str) -> bool {
        self.argument_pattern.is_match(joined)
    }

    /// Match a resolved invocation: declaring type (with subtype closure),
    /// simple name, and fully qualified argument types. Returns `false` when
    /// type resolution is missing on either side.
    pub fn matches(&self, invocation: &MethodInvocation) -> bool {
        let Some(declaring) = invocation.declaring_type() else {
            return false;
        };
        if !self.matches_target_type(declaring) {
            return false;
        }
        if !self.matches_method_name(invocation.simple_name()) {
            return false;
        }

        let Some(method_type) = &invocation.method_type else {
            return false;
        };
        let mut arg_types = Vec::with_capacity(method_type.resolved_signature.param_types.len());
        for param in &method_type.resolved_signature.param_types {
            match param.to_type_string() {
                Some(rendered) => arg_types.push(rendered),
                None => return false,
            }
        }
        self.matches_argument_types(&arg_types.join(","))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn string_class() -> Arc<ClassType> {
        ClassType::with_hierarchy(
            "java.lang.String",
            Some(ClassType::build("java.lang.Object")),
            vec![],
            vec![],
        )
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn simple_signature() {
            let ast = parse_signature("a.A foo(String, int)").unwrap();
            assert_eq!(
                ast.target_type,
                vec![
                    TypeSeg::Ident("a".to_string()),
                    TypeSeg::Ident("A".to_string())
                ]
            );
            assert_eq!(ast.name, "foo");
            assert_eq!(ast.args.len(), 2);
        }

        #[test]
        fn any_depth_segments_collapse() {
            let ast = parse_signature("a..B foo()").unwrap();
            assert_eq!(
                ast.target_type,
                vec![
                    TypeSeg::Ident("a".to_string()),
                    TypeSeg::AnyDepth,
                    TypeSeg::Ident("B".to_string())
                ]
            );
        }

        #[test]
        fn missing_parens_is_invalid() {
            let err = MethodMatcher::new("a.A foo").unwrap_err();
            assert!(matches!(err, SignatureError::InvalidSignature { .. }));
        }

        #[test]
        fn missing_name_is_invalid() {
            assert!(MethodMatcher::new("a.A ()").is_err());
        }

        #[test]
        fn varargs_must_be_last() {
            assert!(MethodMatcher::new("A foo(int..., String)").is_err());
            assert!(MethodMatcher::new("A foo(String, int...)").is_ok());
        }

        #[test]
        fn stray_bracket_is_invalid() {
            let err = MethodMatcher::new("A foo(int[)").unwrap_err();
            match err {
                SignatureError::InvalidSignature { token, .. } => {
                    assert_eq!(token, "int[");
                }
            }
        }
    }

    mod target_type_tests {
        use super::*;

        #[test]
        fn exact_type() {
            let matcher = MethodMatcher::new("a.A foo()").unwrap();
            assert!(matcher.matches_target_type(&ClassType::build("a.A")));
            assert!(!matcher.matches_target_type(&ClassType::build("a.B")));
        }

        #[test]
        fn star_matches_one_segment() {
            let matcher = MethodMatcher::new("java.util.* add(..)").unwrap();
            assert!(matcher.matches_target_type(&ClassType::build("java.util.List")));
            assert!(!matcher.matches_target_type(&ClassType::build("java.util.concurrent.Queue")));
        }

        #[test]
        fn dotdot_matches_any_depth() {
            let matcher = MethodMatcher::new("a..B foo()").unwrap();
            assert!(matcher.matches_target_type(&ClassType::build("a.B")));
            assert!(matcher.matches_target_type(&ClassType::build("a.x.y.B")));
            assert!(!matcher.matches_target_type(&ClassType::build("b.B")));
        }

        #[test]
        fn subtypes_are_accepted_through_the_closure() {
            // Every class reaches java.lang.Object through the implicit
            // supertype, so an Object pattern accepts any resolved class.
            let matcher = MethodMatcher::new("Object equals(Object)").unwrap();
            assert!(matcher.matches_target_type(&string_class()));
            assert!(matcher.matches_target_type(&ClassType::build("java.lang.String")));

            let qualified = MethodMatcher::new("java.lang.Object equals(Object)").unwrap();
            assert!(qualified.matches_target_type(&string_class()));
        }

        #[test]
        fn supertype_does_not_match_a_subtype_pattern() {
            let matcher = MethodMatcher::new("java.lang.String equals(String)").unwrap();
            assert!(!matcher.matches_target_type(&ClassType::build("java.lang.Object")));
        }
    }

    mod argument_tests {
        use super::*;

        fn accepts(signature: &str, joined: &str) -> bool {
            MethodMatcher::new(signature)
                .unwrap()
                .matches_argument_types(joined)
        }

        #[test]
        fn empty_list() {
            assert!(accepts("A foo()", ""));
            assert!(!accepts("A foo()", "int"));
        }

        #[test]
        fn exact_types() {
            assert!(accepts("A foo(java.lang.String, int)", "java.lang.String,int"));
            assert!(!accepts("A foo(java.lang.String, int)", "int,java.lang.String"));
        }

        #[test]
        fn unqualified_java_lang() {
            assert!(accepts("A foo(String)", "java.lang.String"));
            assert!(accepts("A foo(String)", "String"));
            assert!(!accepts("A foo(String)", "other.String"));
        }

        #[test]
        fn leading_any_list_requires_the_trailing_arg() {
            assert!(accepts("A foo(.., int)", "int"));
            assert!(accepts("A foo(.., int)", "int,int"));
            assert!(accepts("A foo(.., int)", "java.lang.String,int"));
            assert!(!accepts("A foo(.., int)", ""));
        }

        #[test]
        fn sole_any_list_matches_everything() {
            assert!(accepts("A foo(..)", ""));
            assert!(accepts("A foo(..)", "int"));
            assert!(accepts("A foo(..)", "int,java.lang.String"));
        }

        #[test]
        fn trailing_any_list() {
            assert!(accepts("A foo(int, ..)", "int"));
            assert!(accepts("A foo(int, ..)", "int,java.lang.String,long"));
            assert!(!accepts("A foo(int, ..)", ""));
        }

        #[test]
        fn middle_any_list() {
            assert!(accepts("A foo(int, .., long)", "int,long"));
            assert!(accepts("A foo(int, .., long)", "int,x.Y,long"));
            assert!(!accepts("A foo(int, .., long)", "int"));
        }

        #[test]
        fn array_suffix_is_literal() {
            assert!(accepts("A foo(int[])", "int[]"));
            assert!(!accepts("A foo(int[])", "int"));
            assert!(accepts("A foo(a.A1[][])", "a.A1[][]"));
        }

        #[test]
        fn varargs_matches_array_or_trailing_run() {
            assert!(accepts("A foo(String...)", "java.lang.String[]"));
            assert!(accepts("A foo(String...)", "java.lang.String"));
            assert!(accepts(
                "A foo(String...)",
                "java.lang.String,java.lang.String"
            ));
            assert!(!accepts("A foo(String...)", "int"));
        }

        #[test]
        fn varargs_after_fixed_args() {
            assert!(accepts("A format(String, Object...)", "java.lang.String,java.lang.Object"));
            assert!(accepts(
                "A format(String, Object...)",
                "java.lang.String,java.lang.Object,java.lang.Object"
            ));
            assert!(accepts("A format(String, Object...)", "java.lang.String,java.lang.Object[]"));
        }
    }

    mod idempotence_tests {
        use super::*;

        #[test]
        fn compiling_twice_yields_equal_patterns() {
            let first = MethodMatcher::new("a..B foo(.., int)").unwrap();
            let second = MethodMatcher::new("a..B foo(.., int)").unwrap();
            assert_eq!(first.target_type_pattern(), second.target_type_pattern());
            assert_eq!(first.method_name_pattern(), second.method_name_pattern());
            assert_eq!(first.argument_pattern(), second.argument_pattern());
        }

        #[test]
        fn name_glob_compiles_to_dot_star() {
            let matcher = MethodMatcher::new("A set*(..)").unwrap();
            assert!(matcher.matches_method_name("setValue"));
            assert!(matcher.matches_method_name("set"));
            assert!(!matcher.matches_method_name("getValue"));
        }
    }
}
