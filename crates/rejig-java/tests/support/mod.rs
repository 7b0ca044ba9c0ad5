//! Tree construction helpers for the scenario tests.
//!
//! Trees are built the way the external parser would deliver them: reified
//! formatting on every node, type attributions on expressions, and each
//! fixture's `print()` equal to the source it models.

#![allow(dead_code)]

use rejig_java_cst::nodes::*;
use rejig_java_cst::types::{
    ClassType, JavaType, MethodSignature, MethodType, PrimitiveTag,
};
use std::sync::Arc;

pub fn ident(name: &str, prefix: &str) -> Ident {
    Ident::new(name, None, Formatting::prefixed(prefix))
}

pub fn typed_ident(name: &str, fqn: &str, prefix: &str) -> Ident {
    Ident::new(
        name,
        Some(JavaType::Class(ClassType::build(fqn))),
        Formatting::prefixed(prefix),
    )
}

pub fn string_literal(value: &str, prefix: &str) -> Literal {
    Literal::new(
        LiteralValue::String(value.to_string()),
        format!("\"{value}\""),
        PrimitiveTag::String,
        Some(JavaType::Class(ClassType::build("java.lang.String"))),
        Formatting::prefixed(prefix),
    )
}

pub fn int_literal(value: i64, prefix: &str) -> Literal {
    Literal::new(
        LiteralValue::Int(value),
        value.to_string(),
        PrimitiveTag::Int,
        Some(JavaType::Primitive(PrimitiveTag::Int)),
        Formatting::prefixed(prefix),
    )
}

pub fn long_literal(value: i64, prefix: &str) -> Literal {
    Literal::new(
        LiteralValue::Long(value),
        format!("{value}L"),
        PrimitiveTag::Long,
        Some(JavaType::Primitive(PrimitiveTag::Long)),
        Formatting::prefixed(prefix),
    )
}

/// `import <fqn>;` with the given prefix, e.g. `"\n"`.
pub fn import(fqn: &str, prefix: &str) -> Import {
    let (package, simple) = fqn.rsplit_once('.').expect("dotted import path");
    let mut target = None;
    for segment in package.split('.') {
        target = Some(match target {
            None => Expression::Ident(ident(segment, "")),
            Some(expr) => Expression::FieldAccess(FieldAccess::new(
                expr,
                ident(segment, ""),
                None,
                Formatting::None,
            )),
        });
    }
    Import::new(
        FieldAccess::new(
            target.expect("non-empty package"),
            ident(simple, ""),
            None,
            Formatting::prefixed(" "),
        ),
        None,
        Formatting::prefixed(prefix),
    )
}

/// `import <package>.*;`
pub fn star_import(package: &str, prefix: &str) -> Import {
    import(&format!("{package}.*"), prefix)
}

/// A static import; `member` may be `*`.
pub fn static_import(clazz: &str, member: &str, prefix: &str) -> Import {
    let base = import(&format!("{clazz}.{member}"), prefix);
    Import::new(
        base.qualid,
        Some(Formatting::prefixed(" ")),
        Formatting::prefixed(prefix),
    )
}

/// A resolved invocation `select.name(args)` declared on `declaring_fqn`.
pub fn invocation(
    select: Option<Expression>,
    name: &str,
    args: Vec<Expression>,
    declaring_fqn: &str,
    param_types: Vec<JavaType>,
    prefix: &str,
) -> MethodInvocation {
    let declaring = ClassType::build(declaring_fqn);
    let signature = MethodSignature::new(param_types, JavaType::Primitive(PrimitiveTag::Void));
    MethodInvocation::new(
        select,
        ident(name, ""),
        Args::new(args, Formatting::None),
        Some(MethodType::build(declaring, name, signature)),
        Formatting::prefixed(prefix),
    )
}

/// `new <simple>()` resolved to `fqn`.
pub fn new_class(simple: &str, fqn: &str, prefix: &str) -> NewClass {
    NewClass::new(
        TypeTree::Ident(typed_ident(simple, fqn, prefix)),
        Args::new(vec![], Formatting::None),
        None,
        Some(JavaType::Class(ClassType::build(fqn))),
        Formatting::None,
    )
}

/// A field declaration statement: `<Type> <name> = <init>` with standard
/// four-space body indentation.
pub fn field(type_expr: TypeTree, name: &str, initializer: Expression) -> Statement {
    let typ = type_expr.java_type().cloned();
    Statement::VariableDecls(VariableDecls::new(
        vec![],
        vec![],
        Some(type_expr),
        vec![NamedVar::new(
            Ident::new(name, None, Formatting::reified("", " ")),
            Some(initializer),
            typ,
            Formatting::prefixed(" "),
        )],
        Formatting::prefixed("\n    "),
    ))
}

/// `class A { <statements> }` with a trailing newline on the unit.
pub fn unit_with_class(imports: Vec<Import>, statements: Vec<Statement>) -> CompilationUnit {
    let class_prefix = if imports.is_empty() { "" } else { "\n\n" };
    let class = ClassDecl::new(
        vec![],
        vec![],
        ClassKind::Class(Formatting::prefixed(class_prefix)),
        ident("A", " "),
        None,
        None,
        Block::new(statements, "\n", Formatting::prefixed(" ")),
        None,
        Formatting::None,
    );
    CompilationUnit::new(
        "A.java",
        None,
        imports,
        vec![class],
        Formatting::reified("", "\n"),
    )
}

/// `public void test() { <statements> }` as a class member.
pub fn test_method(statements: Vec<Statement>) -> Statement {
    Statement::MethodDecl(MethodDecl::new(
        vec![],
        vec![Modifier::Public(Formatting::None)],
        Some(TypeTree::Primitive(Primitive::new(
            PrimitiveTag::Void,
            Formatting::prefixed(" "),
        ))),
        ident("test", " "),
        Parameters::new(vec![], Formatting::None),
        None,
        Some(Block::new(statements, "\n    ", Formatting::prefixed(" "))),
        Formatting::prefixed("\n    "),
    ))
}

/// A class hierarchy entry for matcher tests.
pub fn class_with_supertype(fqn: &str, supertype: &str) -> Arc<ClassType> {
    ClassType::with_hierarchy(fqn, Some(ClassType::build(supertype)), vec![], vec![])
}
