//! Lossless round-trip over a unit exercising most node kinds.
//!
//! The fixture is built the way the external parser would build it, with
//! reified formatting everywhere, and must print back to the expected source
//! byte for byte.

use pretty_assertions::assert_eq;

use rejig_java_cst::nodes::*;
use rejig_java_cst::printer::verify_round_trip;
use rejig_java_cst::types::{ClassType, JavaType, PrimitiveTag};
use rejig_java_cst::Print;

const EXPECTED: &str = "\
package demo.app;

import java.util.List;

public class A extends Base implements Runnable {
    int count = 0;

    public int compute(int n) throws Exception {
        int total = 0;
        for (int i = 0; i < n; i++) {
            total += i;
        }
        while (total > 100) {
            total--;
        }
        do {
            total++;
        } while (total < 0);
        if (total % 2 == 0) {
            total = total / 2;
        } else {
            total = 3 * total + 1;
        }
        switch (total) {
            case 0:
                break;
            default:
                total = -total;
        }
        try {
            Object o = (Object) null;
        } catch (RuntimeException | Error e) {
            throw e;
        } finally {
            count = total;
        }
        synchronized (this) {
            count += 1;
        }
        int[] cache = new int[] { 1, 2 };
        cache[0] = count > 0 ? count : 0;
        outer: for (int v : cache) {
            if (v == 0) continue;
            break;
        }
        Runnable r = () -> count++;
        Object boxed = null;
        boolean ok = boxed instanceof Runnable;
        this.count = 0;
        return total;
    }
}

enum Color {
    RED, GREEN;
}

@Deprecated
interface Box<T extends Comparable> {
    List<? extends T> items();
}
";

fn pfx(prefix: &str) -> Formatting {
    Formatting::prefixed(prefix)
}

fn id(name: &str, prefix: &str) -> Ident {
    Ident::new(name, None, pfx(prefix))
}

fn id_sfx(name: &str, prefix: &str, suffix: &str) -> Ident {
    Ident::new(name, None, Formatting::reified(prefix, suffix))
}

fn lit_int(value: i64, prefix: &str) -> Literal {
    Literal::new(
        LiteralValue::Int(value),
        value.to_string(),
        PrimitiveTag::Int,
        Some(JavaType::Primitive(PrimitiveTag::Int)),
        pfx(prefix),
    )
}

fn int_type(prefix: &str) -> TypeTree {
    TypeTree::Primitive(Primitive::new(PrimitiveTag::Int, pfx(prefix)))
}

fn decl(prefix: &str, type_expr: TypeTree, name: &str, initializer: Expression) -> Statement {
    Statement::VariableDecls(VariableDecls::new(
        vec![],
        vec![],
        Some(type_expr),
        vec![NamedVar::new(
            id_sfx(name, "", " "),
            Some(initializer),
            None,
            pfx(" "),
        )],
        pfx(prefix),
    ))
}

fn expr_stmt(expr: Expression) -> Statement {
    Statement::Expression(expr)
}

fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::Binary(Binary::new(left, operator, right, None, Formatting::None))
}

fn block(statements: Vec<Statement>, end: &str) -> Block {
    Block::new(statements, end, pfx(" "))
}

/// `int total = 0;`
fn total_decl() -> Statement {
    decl(
        "\n        ",
        int_type(""),
        "total",
        Expression::Literal(lit_int(0, " ")),
    )
}

/// `for (int i = 0; i < n; i++) { total += i; }`
fn for_loop() -> Statement {
    let init = Statement::VariableDecls(VariableDecls::new(
        vec![],
        vec![],
        Some(int_type("")),
        vec![NamedVar::new(
            id_sfx("i", " ", " "),
            Some(Expression::Literal(lit_int(0, " "))),
            None,
            Formatting::None,
        )],
        Formatting::None,
    ));
    let condition = Expression::Binary(Binary::new(
        Expression::Ident(id("i", " ")),
        BinaryOperator::LessThan(pfx(" ")),
        Expression::Ident(id("n", " ")),
        None,
        Formatting::None,
    ));
    let update = expr_stmt(Expression::Unary(Unary::new(
        UnaryOperator::PostIncrement(Formatting::None),
        Expression::Ident(id("i", " ")),
        None,
        Formatting::None,
    )));
    let body = block(
        vec![expr_stmt(Expression::AssignOp(AssignOp::new(
            Expression::Ident(id("total", "\n            ")),
            AssignmentOperator::Addition(Formatting::reified(" ", "")),
            Expression::Ident(id("i", " ")),
            None,
            Formatting::None,
        )))],
        "\n        ",
    );
    Statement::ForLoop(ForLoop::new(
        ForControl::new(init, condition, vec![update], pfx(" ")),
        Statement::Block(body),
        pfx("\n        "),
    ))
}

/// `while (total > 100) { total--; }`
fn while_loop() -> Statement {
    let condition = Parens::new(
        binary(
            Expression::Ident(id("total", "")),
            BinaryOperator::GreaterThan(pfx(" ")),
            Expression::Literal(lit_int(100, " ")),
        ),
        pfx(" "),
    );
    let body = block(
        vec![expr_stmt(Expression::Unary(Unary::new(
            UnaryOperator::PostDecrement(Formatting::None),
            Expression::Ident(id("total", "\n            ")),
            None,
            Formatting::None,
        )))],
        "\n        ",
    );
    Statement::WhileLoop(WhileLoop::new(condition, Statement::Block(body), pfx("\n        ")))
}

/// `do { total++; } while (total < 0);`
fn do_while() -> Statement {
    let body = block(
        vec![expr_stmt(Expression::Unary(Unary::new(
            UnaryOperator::PostIncrement(Formatting::None),
            Expression::Ident(id("total", "\n            ")),
            None,
            Formatting::None,
        )))],
        "\n        ",
    );
    let condition = Parens::new(
        binary(
            Expression::Ident(id("total", "")),
            BinaryOperator::LessThan(pfx(" ")),
            Expression::Literal(lit_int(0, " ")),
        ),
        pfx(" "),
    );
    Statement::DoWhileLoop(DoWhileLoop::new(
        Statement::Block(body),
        pfx(" "),
        condition,
        pfx("\n        "),
    ))
}

/// `if (total % 2 == 0) { total = total / 2; } else { total = 3 * total + 1; }`
fn if_else() -> Statement {
    let condition = Parens::new(
        binary(
            binary(
                Expression::Ident(id("total", "")),
                BinaryOperator::Modulo(pfx(" ")),
                Expression::Literal(lit_int(2, " ")),
            ),
            BinaryOperator::Equal(pfx(" ")),
            Expression::Literal(lit_int(0, " ")),
        ),
        pfx(" "),
    );
    let halve = expr_stmt(Expression::Assign(Assign::new(
        Expression::Ident(id_sfx("total", "\n            ", " ")),
        binary(
            Expression::Ident(id("total", " ")),
            BinaryOperator::Division(pfx(" ")),
            Expression::Literal(lit_int(2, " ")),
        ),
        None,
        Formatting::None,
    )));
    let grow = expr_stmt(Expression::Assign(Assign::new(
        Expression::Ident(id_sfx("total", "\n            ", " ")),
        binary(
            binary(
                Expression::Literal(lit_int(3, " ")),
                BinaryOperator::Multiplication(pfx(" ")),
                Expression::Ident(id("total", " ")),
            ),
            BinaryOperator::Addition(pfx(" ")),
            Expression::Literal(lit_int(1, " ")),
        ),
        None,
        Formatting::None,
    )));
    Statement::If(If::new(
        condition,
        Statement::Block(block(vec![halve], "\n        ")),
        Some(Else::new(
            Statement::Block(block(vec![grow], "\n        ")),
            pfx(" "),
        )),
        pfx("\n        "),
    ))
}

/// `switch (total) { case 0: break; default: total = -total; }`
fn switch_stmt() -> Statement {
    let zero_case = Statement::Case(Case::new(
        Some(Expression::Literal(lit_int(0, " "))),
        vec![Statement::Break(Break::new(None, pfx("\n                ")))],
        pfx("\n            "),
    ));
    let default_case = Statement::Case(Case::new(
        None,
        vec![expr_stmt(Expression::Assign(Assign::new(
            Expression::Ident(id_sfx("total", "\n                ", " ")),
            Expression::Unary(Unary::new(
                UnaryOperator::Negative(pfx(" ")),
                Expression::Ident(id("total", "")),
                None,
                Formatting::None,
            )),
            None,
            Formatting::None,
        )))],
        pfx("\n            "),
    ));
    Statement::Switch(Switch::new(
        Parens::new(Expression::Ident(id("total", "")), pfx(" ")),
        Block::new(vec![zero_case, default_case], "\n        ", pfx(" ")),
        pfx("\n        "),
    ))
}

/// `try { ... } catch (RuntimeException | Error e) { ... } finally { ... }`
fn try_catch_finally() -> Statement {
    let null_literal = Literal::new(
        LiteralValue::Null,
        "null",
        PrimitiveTag::Null,
        None,
        pfx(" "),
    );
    let cast = Expression::TypeCast(TypeCast::new(
        Parens::new(
            TypeTree::Ident(Ident::new(
                "Object",
                Some(JavaType::Class(ClassType::build("java.lang.Object"))),
                Formatting::None,
            )),
            Formatting::None,
        ),
        Expression::Literal(null_literal),
        pfx(" "),
    ));
    let body = block(
        vec![decl(
            "\n            ",
            TypeTree::Ident(Ident::new(
                "Object",
                Some(JavaType::Class(ClassType::build("java.lang.Object"))),
                Formatting::None,
            )),
            "o",
            cast,
        )],
        "\n        ",
    );

    let multi = TypeTree::MultiCatch(MultiCatch::new(
        vec![
            TypeTree::Ident(id_sfx("RuntimeException", "", " ")),
            TypeTree::Ident(id("Error", " ")),
        ],
        Formatting::None,
    ));
    let catch_param = Parens::new(
        VariableDecls::new(
            vec![],
            vec![],
            Some(multi),
            vec![NamedVar::new(id("e", " "), None, None, Formatting::None)],
            Formatting::None,
        ),
        pfx(" "),
    );
    let catch_body = block(
        vec![Statement::Throw(Throw::new(
            Expression::Ident(id("e", " ")),
            pfx("\n            "),
        ))],
        "\n        ",
    );
    let catch = Catch::new(catch_param, catch_body, pfx(" "));

    let finally_body = block(
        vec![expr_stmt(Expression::Assign(Assign::new(
            Expression::Ident(id_sfx("count", "\n            ", " ")),
            Expression::Ident(id("total", " ")),
            None,
            Formatting::None,
        )))],
        "\n        ",
    );

    Statement::Try(Try::new(
        None,
        body,
        vec![catch],
        Some(Finally::new(finally_body, pfx(" "))),
        pfx("\n        "),
    ))
}

/// `synchronized (this) { count += 1; }`
fn synchronized_stmt() -> Statement {
    let body = block(
        vec![expr_stmt(Expression::AssignOp(AssignOp::new(
            Expression::Ident(id("count", "\n            ")),
            AssignmentOperator::Addition(Formatting::reified(" ", "")),
            Expression::Literal(lit_int(1, " ")),
            None,
            Formatting::None,
        )))],
        "\n        ",
    );
    Statement::Synchronized(Synchronized::new(
        Parens::new(Expression::Ident(id("this", "")), pfx(" ")),
        body,
        pfx("\n        "),
    ))
}

/// `int[] cache = new int[] { 1, 2 };`
fn cache_decl() -> Statement {
    let array_type = TypeTree::Array(ArrayType::new(
        int_type(""),
        vec![ArrayDim::new(Formatting::None)],
        None,
        Formatting::None,
    ));
    let initializer = ArrayInit {
        fmt: pfx(" "),
        elements: vec![
            Expression::Literal(lit_int(1, " ")),
            Expression::Literal(Literal::new(
                LiteralValue::Int(2),
                "2",
                PrimitiveTag::Int,
                Some(JavaType::Primitive(PrimitiveTag::Int)),
                Formatting::reified(" ", " "),
            )),
        ],
    };
    let new_array = Expression::NewArray(NewArray::new(
        Some(int_type(" ")),
        vec![NewArrayDim::new(
            Expression::Empty(Empty::new(Formatting::None)),
            Formatting::None,
        )],
        Some(initializer),
        None,
        pfx(" "),
    ));
    decl("\n        ", array_type, "cache", new_array)
}

/// `cache[0] = count > 0 ? count : 0;`
fn ternary_assign() -> Statement {
    let target = Expression::ArrayAccess(ArrayAccess::new(
        Expression::Ident(id("cache", "")),
        Expression::Literal(lit_int(0, "")),
        None,
        Formatting::reified("\n        ", " "),
    ));
    let condition = Expression::Binary(Binary::new(
        Expression::Ident(id("count", "")),
        BinaryOperator::GreaterThan(pfx(" ")),
        Expression::Literal(lit_int(0, " ")),
        None,
        Formatting::reified("", " "),
    ));
    let ternary = Expression::Ternary(Ternary::new(
        condition,
        Expression::Ident(id_sfx("count", " ", " ")),
        Expression::Literal(lit_int(0, " ")),
        None,
        pfx(" "),
    ));
    expr_stmt(Expression::Assign(Assign::new(target, ternary, None, Formatting::None)))
}

/// `outer: for (int v : cache) { if (v == 0) continue; break; }`
fn labeled_for_each() -> Statement {
    let variable = VariableDecls::new(
        vec![],
        vec![],
        Some(int_type("")),
        vec![NamedVar::new(id_sfx("v", " ", " "), None, None, Formatting::None)],
        Formatting::None,
    );
    let guard = Statement::If(If::new(
        Parens::new(
            binary(
                Expression::Ident(id("v", "")),
                BinaryOperator::Equal(pfx(" ")),
                Expression::Literal(lit_int(0, " ")),
            ),
            pfx(" "),
        ),
        Statement::Continue(Continue::new(None, pfx(" "))),
        None,
        pfx("\n            "),
    ));
    let body = block(
        vec![guard, Statement::Break(Break::new(None, pfx("\n            ")))],
        "\n        ",
    );
    let for_each = ForEachLoop::new(
        ForEachControl::new(variable, Expression::Ident(id("cache", " ")), pfx(" ")),
        Statement::Block(body),
        pfx(" "),
    );
    Statement::Label(Label::new(
        id("outer", ""),
        Statement::ForEachLoop(for_each),
        pfx("\n        "),
    ))
}

/// `Runnable r = () -> count++;`
fn lambda_decl() -> Statement {
    let lambda = Expression::Lambda(Lambda::new(
        true,
        vec![],
        Formatting::reified(" ", " "),
        LambdaBody::Expr(Box::new(Expression::Unary(Unary::new(
            UnaryOperator::PostIncrement(Formatting::None),
            Expression::Ident(id("count", "")),
            None,
            Formatting::None,
        )))),
        None,
        pfx(" "),
    ));
    decl(
        "\n        ",
        TypeTree::Ident(Ident::new(
            "Runnable",
            Some(JavaType::Class(ClassType::build("java.lang.Runnable"))),
            Formatting::None,
        )),
        "r",
        lambda,
    )
}

/// `boolean ok = boxed instanceof Runnable;`
fn instanceof_decl() -> Statement {
    let check = Expression::InstanceOf(InstanceOf::new(
        Expression::Ident(id_sfx("boxed", "", " ")),
        TypeTree::Ident(id("Runnable", " ")),
        Some(JavaType::Primitive(PrimitiveTag::Boolean)),
        pfx(" "),
    ));
    decl(
        "\n        ",
        TypeTree::Primitive(Primitive::new(PrimitiveTag::Boolean, Formatting::None)),
        "ok",
        check,
    )
}

/// `this.count = 0;`
fn field_assign() -> Statement {
    let target = Expression::FieldAccess(FieldAccess::new(
        Expression::Ident(id("this", "")),
        id("count", ""),
        None,
        Formatting::reified("\n        ", " "),
    ));
    expr_stmt(Expression::Assign(Assign::new(
        target,
        Expression::Literal(lit_int(0, " ")),
        None,
        Formatting::None,
    )))
}

fn compute_method() -> Statement {
    let statements = vec![
        total_decl(),
        for_loop(),
        while_loop(),
        do_while(),
        if_else(),
        switch_stmt(),
        try_catch_finally(),
        synchronized_stmt(),
        cache_decl(),
        ternary_assign(),
        labeled_for_each(),
        lambda_decl(),
        decl(
            "\n        ",
            TypeTree::Ident(Ident::new(
                "Object",
                Some(JavaType::Class(ClassType::build("java.lang.Object"))),
                Formatting::None,
            )),
            "boxed",
            Expression::Literal(Literal::new(
                LiteralValue::Null,
                "null",
                PrimitiveTag::Null,
                None,
                pfx(" "),
            )),
        ),
        instanceof_decl(),
        field_assign(),
        Statement::Return(Return::new(
            Some(Expression::Ident(id("total", " "))),
            pfx("\n        "),
        )),
    ];

    let params = Parameters::new(
        vec![VariableDecls::new(
            vec![],
            vec![],
            Some(int_type("")),
            vec![NamedVar::new(id("n", " "), None, None, Formatting::None)],
            Formatting::None,
        )],
        Formatting::None,
    );
    let throws = Throws::new(
        vec![TypeTree::Ident(id("Exception", " "))],
        pfx(" "),
    );

    Statement::MethodDecl(MethodDecl::new(
        vec![],
        vec![Modifier::Public(Formatting::None)],
        Some(int_type(" ")),
        id("compute", " "),
        params,
        Some(throws),
        Some(Block::new(statements, "\n    ", pfx(" "))),
        pfx("\n\n    "),
    ))
}

fn class_a() -> ClassDecl {
    let count_field = decl(
        "\n    ",
        int_type(""),
        "count",
        Expression::Literal(lit_int(0, " ")),
    );
    ClassDecl::new(
        vec![],
        vec![Modifier::Public(Formatting::None)],
        ClassKind::Class(pfx(" ")),
        id("A", " "),
        Some(Extends::new(TypeTree::Ident(id("Base", " ")), pfx(" "))),
        Some(Implements::new(
            vec![TypeTree::Ident(id("Runnable", " "))],
            pfx(" "),
        )),
        Block::new(vec![count_field, compute_method()], "\n", pfx(" ")),
        None,
        pfx("\n\n"),
    )
}

fn color_enum() -> ClassDecl {
    let values = Statement::EnumValueSet(EnumValueSet::new(
        vec![
            EnumValue::new(id("RED", ""), None, Formatting::None),
            EnumValue::new(id("GREEN", " "), None, Formatting::None),
        ],
        true,
        pfx("\n    "),
    ));
    ClassDecl::new(
        vec![],
        vec![],
        ClassKind::Enum(pfx("\n\n")),
        id("Color", " "),
        None,
        None,
        Block::new(vec![values], "\n", pfx(" ")),
        None,
        Formatting::None,
    )
}

fn box_interface() -> ClassDecl {
    let wildcard = TypeTree::Wildcard(Wildcard::new(
        Some(WildcardBound::Extends(pfx(" "))),
        Some(TypeTree::Ident(id("T", " "))),
        Formatting::None,
    ));
    let return_type = TypeTree::Parameterized(ParameterizedType::new(
        TypeTree::Ident(id("List", "")),
        vec![wildcard],
        Formatting::None,
    ));
    let items = Statement::MethodDecl(MethodDecl::new(
        vec![],
        vec![],
        Some(return_type),
        id("items", " "),
        Parameters::new(vec![], Formatting::None),
        None,
        None,
        pfx("\n    "),
    ));

    let type_param = TypeParameter::new(
        vec![],
        TypeTree::Ident(id("T", "")),
        Some(Bounds::new(
            vec![TypeTree::Ident(id("Comparable", " "))],
            pfx(" "),
        )),
        Formatting::None,
    );
    let mut class = ClassDecl::new(
        vec![Annotation::new(
            TypeTree::Ident(id("Deprecated", "")),
            None,
            pfx("\n\n"),
        )],
        vec![],
        ClassKind::Interface(pfx("\n")),
        id("Box", " "),
        None,
        None,
        Block::new(vec![items], "\n", pfx(" ")),
        None,
        Formatting::None,
    );
    class.type_parameters = Some(TypeParameters::new(vec![type_param], Formatting::None));
    class
}

fn fixture() -> CompilationUnit {
    let package = Package::new(
        Expression::FieldAccess(FieldAccess::new(
            Expression::Ident(id("demo", " ")),
            id("app", ""),
            None,
            Formatting::None,
        )),
        Formatting::None,
    );
    let list_import = Import::new(
        FieldAccess::new(
            Expression::FieldAccess(FieldAccess::new(
                Expression::Ident(id("java", " ")),
                id("util", ""),
                None,
                Formatting::None,
            )),
            id("List", ""),
            None,
            Formatting::None,
        ),
        None,
        pfx("\n\n"),
    );
    CompilationUnit::new(
        "demo/app/A.java",
        Some(package),
        vec![list_import],
        vec![class_a(), color_enum(), box_interface()],
        Formatting::reified("", "\n"),
    )
}

#[test]
fn kitchen_sink_round_trip() {
    let cu = fixture();
    assert_eq!(cu.print(), EXPECTED);
    verify_round_trip(&cu, EXPECTED).unwrap();
}

#[test]
fn span_table_covers_every_printed_byte_boundary() {
    let cu = fixture();
    let (printed, spans) = cu.print_with_spans();

    // The unit's full extent is the whole file.
    let full = spans.full(cu.id).expect("unit span recorded");
    assert_eq!(full.start, 0);
    assert_eq!(full.end, printed.len());

    // Every import's content extent prints the import exactly.
    for import in &cu.imports {
        let content = spans.content(import.id).expect("import span recorded");
        assert_eq!(&printed[content.start..content.end], "import java.util.List;");
    }
}

#[test]
fn round_trip_mismatch_reports_the_offending_region() {
    let cu = fixture();
    let mut wrong = EXPECTED.to_string();
    wrong.replace_range(0..7, "pakkage");
    let err = verify_round_trip(&cu, &wrong).unwrap_err();
    match err {
        rejig_java_cst::PrintError::RoundTripMismatch { offset, .. } => {
            assert!(offset < 8, "mismatch is at the start, got {offset}");
        }
    }
}
