//! End-to-end refactor scenarios over hand-built trees.
//!
//! Each fixture prints back to the source it models before the refactor runs
//! (the lossless round trip), then a transaction is staged and the printed
//! result and patch are checked byte for byte.

mod support;

use pretty_assertions::assert_eq;

use rejig_java::ops::{AddImport, ChangeLiteral, ChangeMethodName, ChangeType, RemoveImport};
use rejig_java::{find_method_calls, Refactor};
use rejig_java_cst::nodes::*;
use rejig_java_cst::printer::verify_round_trip;
use rejig_java_cst::types::{ClassType, JavaType, PrimitiveTag};
use rejig_java_cst::Print;

use support::*;

// ============================================================================
// (a) Method rename
// ============================================================================

fn single_arg_unit() -> (CompilationUnit, NodeId) {
    let call = invocation(
        Some(Expression::NewClass(new_class("B", "B", " "))),
        "singleArg",
        vec![Expression::Literal(string_literal("boo", ""))],
        "B",
        vec![JavaType::Class(ClassType::build("java.lang.String"))],
        "\n        ",
    );
    let call_id = call.id;
    let cu = unit_with_class(
        vec![],
        vec![test_method(vec![Statement::Expression(
            Expression::MethodInvocation(call),
        )])],
    );
    (cu, call_id)
}

#[test]
fn change_method_name_rewrites_only_the_name() {
    let (cu, call_id) = single_arg_unit();
    let source = "class A {\n    public void test() {\n        new B().singleArg(\"boo\");\n    }\n}\n";
    assert_eq!(cu.print(), source);
    verify_round_trip(&cu, source).unwrap();

    let result = Refactor::new(cu)
        .visit(ChangeMethodName::new(call_id, "bar"))
        .fix()
        .unwrap();

    assert!(result.changed);
    assert_eq!(
        result.fixed.print(),
        "class A {\n    public void test() {\n        new B().bar(\"boo\");\n    }\n}\n"
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn find_method_calls_matches_the_resolved_invocation() {
    let (cu, call_id) = single_arg_unit();

    let matches = find_method_calls(&cu, "B singleArg(String)").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, call_id);

    // Unqualified Object matches through the implicit supertype closure.
    let via_object = find_method_calls(&cu, "Object singleArg(..)").unwrap();
    assert_eq!(via_object.len(), 1);

    assert!(find_method_calls(&cu, "B otherName(String)").unwrap().is_empty());
    assert!(find_method_calls(&cu, "B singleArg(int)").unwrap().is_empty());
}

// ============================================================================
// (b) Array argument type change
// ============================================================================

fn array_field_unit() -> CompilationUnit {
    let element = typed_ident("A1", "a.A1", "");
    let array_type = TypeTree::Array(ArrayType::new(
        TypeTree::Ident(element),
        vec![ArrayDim::new(Formatting::None)],
        Some(JavaType::Array(Box::new(JavaType::Class(ClassType::build(
            "a.A1",
        ))))),
        Formatting::None,
    ));
    let new_array = Expression::NewArray(NewArray::new(
        Some(TypeTree::Ident(typed_ident("A1", "a.A1", " "))),
        vec![NewArrayDim::new(
            Expression::Literal(int_literal(0, "")),
            Formatting::None,
        )],
        None,
        Some(JavaType::Array(Box::new(JavaType::Class(ClassType::build(
            "a.A1",
        ))))),
        Formatting::prefixed(" "),
    ));
    unit_with_class(vec![import("a.A1", "")], vec![field(array_type, "a", new_array)])
}

#[test]
fn change_type_rewrites_array_sites_and_flips_the_import() {
    let cu = array_field_unit();
    let source = "import a.A1;\n\nclass A {\n    A1[] a = new A1[0];\n}\n";
    assert_eq!(cu.print(), source);
    verify_round_trip(&cu, source).unwrap();

    let result = Refactor::new(cu)
        .visit(ChangeType::new("a.A1", "a.A2"))
        .fix()
        .unwrap();

    assert!(result.changed);
    assert_eq!(
        result.fixed.print(),
        "import a.A2;\n\nclass A {\n    A2[] a = new A2[0];\n}\n"
    );
    assert!(result.patch.unified_diff.contains("-import a.A1;"));
    assert!(result.patch.unified_diff.contains("+import a.A2;"));
    assert!(result.warnings.is_empty());
}

#[test]
fn change_type_without_references_is_a_no_op() {
    let cu = array_field_unit();
    let result = Refactor::new(cu)
        .visit(ChangeType::new("a.Unused", "a.Other"))
        .fix()
        .unwrap();

    assert!(!result.changed);
    assert!(result.patch.is_empty());
    assert_eq!(result.fixed.imports.len(), 1, "no import added");
    assert_eq!(result.fixed.imports[0].qualified_name(), "a.A1");
}

// ============================================================================
// (e) Star import collapse
// ============================================================================

#[test]
fn remove_import_narrows_a_star_import_to_the_one_referenced_class() {
    let cu = unit_with_class(
        vec![star_import("a", "")],
        vec![field(
            TypeTree::Ident(typed_ident("A1", "a.A1", "")),
            "a1",
            Expression::NewClass(new_class("A1", "a.A1", " ")),
        )],
    );
    let source = "import a.*;\n\nclass A {\n    A1 a1 = new A1();\n}\n";
    assert_eq!(cu.print(), source);

    // Removing an unreferenced class of another package changes nothing.
    let result = Refactor::new(cu).visit(RemoveImport::new("b.B")).fix().unwrap();
    assert!(!result.changed);

    // Exactly one class of `a` is referenced, so the star import narrows.
    let result = Refactor::new(result.fixed)
        .visit(RemoveImport::new("a"))
        .fix()
        .unwrap();
    assert!(result.changed);
    assert_eq!(
        result.fixed.print(),
        "import a.A1;\n\nclass A {\n    A1 a1 = new A1();\n}\n"
    );
}

#[test]
fn remove_import_deletes_an_unreferenced_named_import() {
    let cu = unit_with_class(
        vec![import("a.A1", ""), import("b.B1", "\n")],
        vec![field(
            TypeTree::Ident(typed_ident("A1", "a.A1", "")),
            "a1",
            Expression::NewClass(new_class("A1", "a.A1", " ")),
        )],
    );
    let source = "import a.A1;\nimport b.B1;\n\nclass A {\n    A1 a1 = new A1();\n}\n";
    assert_eq!(cu.print(), source);

    let result = Refactor::new(cu).visit(RemoveImport::new("b.B1")).fix().unwrap();
    assert!(result.changed);
    assert_eq!(
        result.fixed.print(),
        "import a.A1;\n\nclass A {\n    A1 a1 = new A1();\n}\n"
    );
    assert_eq!(result.fixed.imports.len(), 1);

    // The referenced one stays.
    let result = Refactor::new(result.fixed)
        .visit(RemoveImport::new("a.A1"))
        .fix()
        .unwrap();
    assert!(!result.changed);
}

#[test]
fn remove_import_static_forms_follow_referenced_methods() {
    let helper_call = invocation(None, "helper", vec![], "a.Util", vec![], "\n        ");
    let cu = unit_with_class(
        vec![
            static_import("a.Util", "helper", ""),
            static_import("a.Util", "unused", "\n"),
            static_import("b.Other", "*", "\n"),
        ],
        vec![test_method(vec![Statement::Expression(
            Expression::MethodInvocation(helper_call),
        )])],
    );
    let source = "import static a.Util.helper;\nimport static a.Util.unused;\nimport static b.Other.*;\n\nclass A {\n    public void test() {\n        helper();\n    }\n}\n";
    assert_eq!(cu.print(), source);

    // The named import whose method is unreferenced goes; helper stays.
    let result = Refactor::new(cu).visit(RemoveImport::new("a.Util")).fix().unwrap();
    assert!(result.changed);
    assert!(result.fixed.print().contains("import static a.Util.helper;"));
    assert!(!result.fixed.print().contains("unused"));

    // The static star import with no referenced methods goes entirely.
    let result = Refactor::new(result.fixed)
        .visit(RemoveImport::new("b.Other"))
        .fix()
        .unwrap();
    assert!(result.changed);
    assert!(!result.fixed.print().contains("b.Other"));
}

// ============================================================================
// (f) Literal transform
// ============================================================================

#[test]
fn change_literal_reattaches_the_long_suffix() {
    let literal = long_literal(3, " ");
    let literal_id = literal.id;
    let cu = unit_with_class(
        vec![],
        vec![field(
            TypeTree::Primitive(Primitive::new(PrimitiveTag::Long, Formatting::None)),
            "x",
            Expression::Literal(literal),
        )],
    );
    let source = "class A {\n    long x = 3L;\n}\n";
    assert_eq!(cu.print(), source);

    let result = Refactor::new(cu)
        .visit(ChangeLiteral::new(literal_id, |value| match value {
            LiteralValue::Long(3) => LiteralValue::Long(7),
            other => other.clone(),
        }))
        .fix()
        .unwrap();

    assert!(result.changed);
    assert_eq!(result.fixed.print(), "class A {\n    long x = 7L;\n}\n");
}

#[test]
fn change_literal_reaches_through_string_concatenation() {
    let left = string_literal("Hello ", "");
    let right = string_literal("world", " ");
    let concat = Binary::new(
        Expression::Literal(left),
        BinaryOperator::Addition(Formatting::prefixed(" ")),
        Expression::Literal(right),
        Some(JavaType::Class(ClassType::build("java.lang.String"))),
        Formatting::prefixed(" "),
    );
    let concat_id = concat.id;
    let cu = unit_with_class(
        vec![],
        vec![field(
            TypeTree::Ident(typed_ident("String", "java.lang.String", "")),
            "s",
            Expression::Binary(concat),
        )],
    );
    let source = "class A {\n    String s = \"Hello \" + \"world\";\n}\n";
    assert_eq!(cu.print(), source);

    let result = Refactor::new(cu)
        .visit(ChangeLiteral::new(concat_id, |value| match value {
            LiteralValue::String(s) => LiteralValue::String(s.to_uppercase()),
            other => other.clone(),
        }))
        .fix()
        .unwrap();

    assert_eq!(
        result.fixed.print(),
        "class A {\n    String s = \"HELLO \" + \"WORLD\";\n}\n"
    );
}

#[test]
fn change_literal_outside_its_scope_is_inert() {
    let literal = long_literal(3, " ");
    let cu = unit_with_class(
        vec![],
        vec![field(
            TypeTree::Primitive(Primitive::new(PrimitiveTag::Long, Formatting::None)),
            "x",
            Expression::Literal(literal),
        )],
    );
    let unrelated_anchor = NodeId::next();

    let result = Refactor::new(cu)
        .visit(ChangeLiteral::new(unrelated_anchor, |_| LiteralValue::Long(9)))
        .fix()
        .unwrap();
    assert!(!result.changed);
    assert!(result.patch.is_empty());
}

// ============================================================================
// AddImport
// ============================================================================

#[test]
fn add_import_lands_in_sorted_position() {
    let cu = unit_with_class(
        vec![import("a.A1", ""), import("c.C1", "\n")],
        vec![field(
            TypeTree::Ident(typed_ident("A1", "a.A1", "")),
            "a1",
            Expression::NewClass(new_class("A1", "a.A1", " ")),
        )],
    );
    let source = "import a.A1;\nimport c.C1;\n\nclass A {\n    A1 a1 = new A1();\n}\n";
    assert_eq!(cu.print(), source);

    let result = Refactor::new(cu).visit(AddImport::new("b.B1")).fix().unwrap();
    assert!(result.changed);
    assert_eq!(
        result.fixed.print(),
        "import a.A1;\nimport b.B1;\nimport c.C1;\n\nclass A {\n    A1 a1 = new A1();\n}\n"
    );
}

#[test]
fn add_import_is_idempotent_for_covered_types() {
    let cu = unit_with_class(
        vec![import("a.A1", ""), star_import("b", "\n")],
        vec![],
    );

    let result = Refactor::new(cu)
        .visit(AddImport::new("a.A1"))
        .visit(AddImport::new("b.Covered"))
        .visit(AddImport::new("java.lang.String"))
        .fix()
        .unwrap();
    assert!(!result.changed);
    assert_eq!(result.fixed.imports.len(), 2);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn trees_round_trip_through_serde() {
    let (cu, _) = single_arg_unit();
    let json = serde_json::to_string(&cu).unwrap();
    let back: CompilationUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cu);
    assert_eq!(back.print(), cu.print());
}

#[test]
fn patches_serialize_for_json_output() {
    let (cu, call_id) = single_arg_unit();
    let result = Refactor::new(cu)
        .visit(ChangeMethodName::new(call_id, "bar"))
        .fix()
        .unwrap();

    let json = serde_json::to_value(&result.patch).unwrap();
    assert!(json["unified_diff"].as_str().unwrap().contains("+++ b/A.java"));
    assert!(!json["records"].as_array().unwrap().is_empty());
}
