//! Walk functions for read-only traversal.
//!
//! Each walk calls `visit_*`, descends into children in source order unless
//! the hook said otherwise, then calls `leave_*`. `Stop` propagates out of
//! the whole walk immediately; `SkipChildren` still runs `leave_*`.

use super::traits::{JavaVisitor, VisitResult};
use crate::nodes::*;

/// Propagate `Stop` out of a child walk.
macro_rules! try_walk {
    ($e:expr) => {
        if $e == VisitResult::Stop {
            return VisitResult::Stop;
        }
    };
}

/// The visit / children / leave shape shared by every walk function.
macro_rules! walk_node {
    ($visitor:ident, $node:ident, $visit:ident, $leave:ident, $children:block) => {{
        match $visitor.$visit($node) {
            VisitResult::Stop => return VisitResult::Stop,
            VisitResult::SkipChildren => {}
            VisitResult::Continue => $children,
        }
        $visitor.$leave($node);
        VisitResult::Continue
    }};
}

// ============================================================================
// Roots and declarations
// ============================================================================

/// Walk a [`CompilationUnit`]: package, imports, then classes.
pub fn walk_compilation_unit<V: JavaVisitor>(
    visitor: &mut V,
    node: &CompilationUnit,
) -> VisitResult {
    walk_node!(visitor, node, visit_compilation_unit, leave_compilation_unit, {
        if let Some(package) = &node.package {
            try_walk!(walk_package_decl(visitor, package));
        }
        for import in &node.imports {
            try_walk!(walk_import_decl(visitor, import));
        }
        for class in &node.classes {
            try_walk!(walk_class_decl(visitor, class));
        }
    })
}

pub fn walk_package_decl<V: JavaVisitor>(visitor: &mut V, node: &Package) -> VisitResult {
    walk_node!(visitor, node, visit_package_decl, leave_package_decl, {
        try_walk!(walk_expression(visitor, &node.expr));
    })
}

pub fn walk_import_decl<V: JavaVisitor>(visitor: &mut V, node: &Import) -> VisitResult {
    walk_node!(visitor, node, visit_import_decl, leave_import_decl, {
        try_walk!(walk_field_access(visitor, &node.qualid));
    })
}

pub fn walk_class_decl<V: JavaVisitor>(visitor: &mut V, node: &ClassDecl) -> VisitResult {
    walk_node!(visitor, node, visit_class_decl, leave_class_decl, {
        for annotation in &node.annotations {
            try_walk!(walk_annotation(visitor, annotation));
        }
        try_walk!(walk_ident(visitor, &node.name));
        if let Some(type_parameters) = &node.type_parameters {
            try_walk!(walk_type_parameters(visitor, type_parameters));
        }
        if let Some(extends) = &node.extends {
            try_walk!(walk_type_tree(visitor, &extends.from));
        }
        if let Some(implements) = &node.implements {
            for tree in &implements.from {
                try_walk!(walk_type_tree(visitor, tree));
            }
        }
        try_walk!(walk_block(visitor, &node.body));
    })
}

pub fn walk_method_decl<V: JavaVisitor>(visitor: &mut V, node: &MethodDecl) -> VisitResult {
    walk_node!(visitor, node, visit_method_decl, leave_method_decl, {
        for annotation in &node.annotations {
            try_walk!(walk_annotation(visitor, annotation));
        }
        if let Some(type_parameters) = &node.type_parameters {
            try_walk!(walk_type_parameters(visitor, type_parameters));
        }
        if let Some(return_type) = &node.return_type {
            try_walk!(walk_type_tree(visitor, return_type));
        }
        try_walk!(walk_ident(visitor, &node.name));
        for param in &node.params.params {
            try_walk!(walk_variable_decls(visitor, param));
        }
        if let Some(throws) = &node.throws {
            for exception in &throws.exceptions {
                try_walk!(walk_type_tree(visitor, exception));
            }
        }
        if let Some(body) = &node.body {
            try_walk!(walk_block(visitor, body));
        }
    })
}

pub fn walk_variable_decls<V: JavaVisitor>(visitor: &mut V, node: &VariableDecls) -> VisitResult {
    walk_node!(visitor, node, visit_variable_decls, leave_variable_decls, {
        for annotation in &node.annotations {
            try_walk!(walk_annotation(visitor, annotation));
        }
        if let Some(type_expr) = &node.type_expr {
            try_walk!(walk_type_tree(visitor, type_expr));
        }
        for var in &node.vars {
            try_walk!(walk_named_var(visitor, var));
        }
    })
}

pub fn walk_named_var<V: JavaVisitor>(visitor: &mut V, node: &NamedVar) -> VisitResult {
    walk_node!(visitor, node, visit_named_var, leave_named_var, {
        try_walk!(walk_ident(visitor, &node.name));
        if let Some(initializer) = &node.initializer {
            try_walk!(walk_expression(visitor, initializer));
        }
    })
}

pub fn walk_annotation<V: JavaVisitor>(visitor: &mut V, node: &Annotation) -> VisitResult {
    walk_node!(visitor, node, visit_annotation, leave_annotation, {
        try_walk!(walk_type_tree(visitor, &node.annotation_type));
        if let Some(args) = &node.args {
            for arg in &args.args {
                try_walk!(walk_expression(visitor, arg));
            }
        }
    })
}

// ============================================================================
// Statements
// ============================================================================

/// Dispatch a [`Statement`] to its kind's walk.
pub fn walk_statement<V: JavaVisitor>(visitor: &mut V, node: &Statement) -> VisitResult {
    match node {
        Statement::Block(n) => walk_block(visitor, n),
        Statement::Break(n) => walk_break_stmt(visitor, n),
        Statement::Case(n) => walk_case(visitor, n),
        Statement::Catch(n) => walk_catch(visitor, n),
        Statement::ClassDecl(n) => walk_class_decl(visitor, n),
        Statement::Continue(n) => walk_continue_stmt(visitor, n),
        Statement::DoWhileLoop(n) => walk_do_while_loop(visitor, n),
        Statement::Empty(n) => walk_empty(visitor, n),
        Statement::EnumValueSet(n) => walk_enum_value_set(visitor, n),
        Statement::Expression(n) => walk_expression(visitor, n),
        Statement::ForEachLoop(n) => walk_for_each_loop(visitor, n),
        Statement::ForLoop(n) => walk_for_loop(visitor, n),
        Statement::If(n) => walk_if_stmt(visitor, n),
        Statement::Label(n) => walk_label(visitor, n),
        Statement::MethodDecl(n) => walk_method_decl(visitor, n),
        Statement::Return(n) => walk_return_stmt(visitor, n),
        Statement::Switch(n) => walk_switch_stmt(visitor, n),
        Statement::Synchronized(n) => walk_synchronized(visitor, n),
        Statement::Throw(n) => walk_throw(visitor, n),
        Statement::Try(n) => walk_try_stmt(visitor, n),
        Statement::VariableDecls(n) => walk_variable_decls(visitor, n),
        Statement::WhileLoop(n) => walk_while_loop(visitor, n),
    }
}

pub fn walk_block<V: JavaVisitor>(visitor: &mut V, node: &Block) -> VisitResult {
    walk_node!(visitor, node, visit_block, leave_block, {
        for stmt in &node.statements {
            try_walk!(walk_statement(visitor, stmt));
        }
    })
}

pub fn walk_break_stmt<V: JavaVisitor>(visitor: &mut V, node: &Break) -> VisitResult {
    walk_node!(visitor, node, visit_break_stmt, leave_break_stmt, {
        if let Some(label) = &node.label {
            try_walk!(walk_ident(visitor, label));
        }
    })
}

pub fn walk_case<V: JavaVisitor>(visitor: &mut V, node: &Case) -> VisitResult {
    walk_node!(visitor, node, visit_case, leave_case, {
        if let Some(pattern) = &node.pattern {
            try_walk!(walk_expression(visitor, pattern));
        }
        for stmt in &node.statements {
            try_walk!(walk_statement(visitor, stmt));
        }
    })
}

pub fn walk_catch<V: JavaVisitor>(visitor: &mut V, node: &Catch) -> VisitResult {
    walk_node!(visitor, node, visit_catch, leave_catch, {
        try_walk!(walk_variable_decls(visitor, &node.param.tree));
        try_walk!(walk_block(visitor, &node.body));
    })
}

pub fn walk_continue_stmt<V: JavaVisitor>(visitor: &mut V, node: &Continue) -> VisitResult {
    walk_node!(visitor, node, visit_continue_stmt, leave_continue_stmt, {
        if let Some(label) = &node.label {
            try_walk!(walk_ident(visitor, label));
        }
    })
}

pub fn walk_do_while_loop<V: JavaVisitor>(visitor: &mut V, node: &DoWhileLoop) -> VisitResult {
    walk_node!(visitor, node, visit_do_while_loop, leave_do_while_loop, {
        try_walk!(walk_statement(visitor, &node.body));
        try_walk!(walk_parentheses(visitor, &node.condition));
    })
}

pub fn walk_empty<V: JavaVisitor>(visitor: &mut V, node: &Empty) -> VisitResult {
    walk_node!(visitor, node, visit_empty, leave_empty, {})
}

pub fn walk_enum_value<V: JavaVisitor>(visitor: &mut V, node: &EnumValue) -> VisitResult {
    walk_node!(visitor, node, visit_enum_value, leave_enum_value, {
        try_walk!(walk_ident(visitor, &node.name));
        if let Some(initializer) = &node.initializer {
            for arg in &initializer.args {
                try_walk!(walk_expression(visitor, arg));
            }
        }
    })
}

pub fn walk_enum_value_set<V: JavaVisitor>(visitor: &mut V, node: &EnumValueSet) -> VisitResult {
    walk_node!(visitor, node, visit_enum_value_set, leave_enum_value_set, {
        for value in &node.values {
            try_walk!(walk_enum_value(visitor, value));
        }
    })
}

pub fn walk_for_each_loop<V: JavaVisitor>(visitor: &mut V, node: &ForEachLoop) -> VisitResult {
    walk_node!(visitor, node, visit_for_each_loop, leave_for_each_loop, {
        try_walk!(walk_variable_decls(visitor, &node.control.variable));
        try_walk!(walk_expression(visitor, &node.control.iterable));
        try_walk!(walk_statement(visitor, &node.body));
    })
}

pub fn walk_for_loop<V: JavaVisitor>(visitor: &mut V, node: &ForLoop) -> VisitResult {
    walk_node!(visitor, node, visit_for_loop, leave_for_loop, {
        try_walk!(walk_statement(visitor, &node.control.init));
        try_walk!(walk_expression(visitor, &node.control.condition));
        for update in &node.control.update {
            try_walk!(walk_statement(visitor, update));
        }
        try_walk!(walk_statement(visitor, &node.body));
    })
}

pub fn walk_if_stmt<V: JavaVisitor>(visitor: &mut V, node: &If) -> VisitResult {
    walk_node!(visitor, node, visit_if_stmt, leave_if_stmt, {
        try_walk!(walk_parentheses(visitor, &node.condition));
        try_walk!(walk_statement(visitor, &node.then_part));
        if let Some(else_part) = &node.else_part {
            try_walk!(walk_statement(visitor, &else_part.body));
        }
    })
}

pub fn walk_label<V: JavaVisitor>(visitor: &mut V, node: &Label) -> VisitResult {
    walk_node!(visitor, node, visit_label, leave_label, {
        try_walk!(walk_ident(visitor, &node.label));
        try_walk!(walk_statement(visitor, &node.statement));
    })
}

pub fn walk_return_stmt<V: JavaVisitor>(visitor: &mut V, node: &Return) -> VisitResult {
    walk_node!(visitor, node, visit_return_stmt, leave_return_stmt, {
        if let Some(expr) = &node.expr {
            try_walk!(walk_expression(visitor, expr));
        }
    })
}

pub fn walk_switch_stmt<V: JavaVisitor>(visitor: &mut V, node: &Switch) -> VisitResult {
    walk_node!(visitor, node, visit_switch_stmt, leave_switch_stmt, {
        try_walk!(walk_parentheses(visitor, &node.selector));
        try_walk!(walk_block(visitor, &node.cases));
    })
}

pub fn walk_synchronized<V: JavaVisitor>(visitor: &mut V, node: &Synchronized) -> VisitResult {
    walk_node!(visitor, node, visit_synchronized, leave_synchronized, {
        try_walk!(walk_parentheses(visitor, &node.lock));
        try_walk!(walk_block(visitor, &node.body));
    })
}

pub fn walk_throw<V: JavaVisitor>(visitor: &mut V, node: &Throw) -> VisitResult {
    walk_node!(visitor, node, visit_throw, leave_throw, {
        try_walk!(walk_expression(visitor, &node.exception));
    })
}

pub fn walk_try_stmt<V: JavaVisitor>(visitor: &mut V, node: &Try) -> VisitResult {
    walk_node!(visitor, node, visit_try_stmt, leave_try_stmt, {
        if let Some(resources) = &node.resources {
            for decl in &resources.decls {
                try_walk!(walk_variable_decls(visitor, decl));
            }
        }
        try_walk!(walk_block(visitor, &node.body));
        for catch in &node.catches {
            try_walk!(walk_catch(visitor, catch));
        }
        if let Some(finally_block) = &node.finally_block {
            try_walk!(walk_block(visitor, &finally_block.block));
        }
    })
}

pub fn walk_type_parameters<V: JavaVisitor>(visitor: &mut V, node: &TypeParameters) -> VisitResult {
    walk_node!(visitor, node, visit_type_parameters, leave_type_parameters, {
        for param in &node.params {
            try_walk!(walk_type_parameter(visitor, param));
        }
    })
}

pub fn walk_type_parameter<V: JavaVisitor>(visitor: &mut V, node: &TypeParameter) -> VisitResult {
    walk_node!(visitor, node, visit_type_parameter, leave_type_parameter, {
        for annotation in &node.annotations {
            try_walk!(walk_annotation(visitor, annotation));
        }
        try_walk!(walk_type_tree(visitor, &node.name));
        if let Some(bounds) = &node.bounds {
            for bound in &bounds.types {
                try_walk!(walk_type_tree(visitor, bound));
            }
        }
    })
}

pub fn walk_while_loop<V: JavaVisitor>(visitor: &mut V, node: &WhileLoop) -> VisitResult {
    walk_node!(visitor, node, visit_while_loop, leave_while_loop, {
        try_walk!(walk_parentheses(visitor, &node.condition));
        try_walk!(walk_statement(visitor, &node.body));
    })
}

// ============================================================================
// Expressions
// ============================================================================

/// Dispatch an [`Expression`] to its kind's walk.
pub fn walk_expression<V: JavaVisitor>(visitor: &mut V, node: &Expression) -> VisitResult {
    match node {
        Expression::ArrayAccess(n) => walk_array_access(visitor, n),
        Expression::Assign(n) => walk_assign(visitor, n),
        Expression::AssignOp(n) => walk_assign_op(visitor, n),
        Expression::Binary(n) => walk_binary(visitor, n),
        Expression::Empty(n) => walk_empty(visitor, n),
        Expression::FieldAccess(n) => walk_field_access(visitor, n),
        Expression::Ident(n) => walk_ident(visitor, n),
        Expression::InstanceOf(n) => walk_instance_of(visitor, n),
        Expression::Lambda(n) => walk_lambda(visitor, n),
        Expression::Literal(n) => walk_literal(visitor, n),
        Expression::MethodInvocation(n) => walk_method_invocation(visitor, n),
        Expression::NewArray(n) => walk_new_array(visitor, n),
        Expression::NewClass(n) => walk_new_class(visitor, n),
        Expression::Parentheses(n) => walk_parentheses(visitor, n),
        Expression::Ternary(n) => walk_ternary(visitor, n),
        Expression::TypeCast(n) => walk_type_cast(visitor, n),
        Expression::Unary(n) => walk_unary(visitor, n),
    }
}

pub fn walk_array_access<V: JavaVisitor>(visitor: &mut V, node: &ArrayAccess) -> VisitResult {
    walk_node!(visitor, node, visit_array_access, leave_array_access, {
        try_walk!(walk_expression(visitor, &node.indexed));
        try_walk!(walk_expression(visitor, &node.index));
    })
}

pub fn walk_assign<V: JavaVisitor>(visitor: &mut V, node: &Assign) -> VisitResult {
    walk_node!(visitor, node, visit_assign, leave_assign, {
        try_walk!(walk_expression(visitor, &node.variable));
        try_walk!(walk_expression(visitor, &node.assignment));
    })
}

pub fn walk_assign_op<V: JavaVisitor>(visitor: &mut V, node: &AssignOp) -> VisitResult {
    walk_node!(visitor, node, visit_assign_op, leave_assign_op, {
        try_walk!(walk_expression(visitor, &node.variable));
        try_walk!(walk_expression(visitor, &node.assignment));
    })
}

pub fn walk_binary<V: JavaVisitor>(visitor: &mut V, node: &Binary) -> VisitResult {
    walk_node!(visitor, node, visit_binary, leave_binary, {
        try_walk!(walk_expression(visitor, &node.left));
        try_walk!(walk_expression(visitor, &node.right));
    })
}

pub fn walk_field_access<V: JavaVisitor>(visitor: &mut V, node: &FieldAccess) -> VisitResult {
    walk_node!(visitor, node, visit_field_access, leave_field_access, {
        try_walk!(walk_expression(visitor, &node.target));
        try_walk!(walk_ident(visitor, &node.name));
    })
}

pub fn walk_ident<V: JavaVisitor>(visitor: &mut V, node: &Ident) -> VisitResult {
    walk_node!(visitor, node, visit_ident, leave_ident, {})
}

pub fn walk_instance_of<V: JavaVisitor>(visitor: &mut V, node: &InstanceOf) -> VisitResult {
    walk_node!(visitor, node, visit_instance_of, leave_instance_of, {
        try_walk!(walk_expression(visitor, &node.expr));
        try_walk!(walk_type_tree(visitor, &node.clazz));
    })
}

pub fn walk_lambda<V: JavaVisitor>(visitor: &mut V, node: &Lambda) -> VisitResult {
    walk_node!(visitor, node, visit_lambda, leave_lambda, {
        for param in &node.params {
            try_walk!(walk_variable_decls(visitor, param));
        }
        match &node.body {
            LambdaBody::Expr(expr) => try_walk!(walk_expression(visitor, expr)),
            LambdaBody::Block(block) => try_walk!(walk_block(visitor, block)),
        }
    })
}

pub fn walk_literal<V: JavaVisitor>(visitor: &mut V, node: &Literal) -> VisitResult {
    walk_node!(visitor, node, visit_literal, leave_literal, {})
}

pub fn walk_method_invocation<V: JavaVisitor>(
    visitor: &mut V,
    node: &MethodInvocation,
) -> VisitResult {
    walk_node!(visitor, node, visit_method_invocation, leave_method_invocation, {
        if let Some(select) = &node.select {
            try_walk!(walk_expression(visitor, select));
        }
        if let Some(type_parameters) = &node.type_parameters {
            try_walk!(walk_type_parameters(visitor, type_parameters));
        }
        try_walk!(walk_ident(visitor, &node.name));
        for arg in &node.args.args {
            try_walk!(walk_expression(visitor, arg));
        }
    })
}

pub fn walk_new_array<V: JavaVisitor>(visitor: &mut V, node: &NewArray) -> VisitResult {
    walk_node!(visitor, node, visit_new_array, leave_new_array, {
        if let Some(type_expr) = &node.type_expr {
            try_walk!(walk_type_tree(visitor, type_expr));
        }
        for dim in &node.dimensions {
            try_walk!(walk_expression(visitor, &dim.size));
        }
        if let Some(initializer) = &node.initializer {
            for element in &initializer.elements {
                try_walk!(walk_expression(visitor, element));
            }
        }
    })
}

pub fn walk_new_class<V: JavaVisitor>(visitor: &mut V, node: &NewClass) -> VisitResult {
    walk_node!(visitor, node, visit_new_class, leave_new_class, {
        try_walk!(walk_type_tree(visitor, &node.clazz));
        for arg in &node.args.args {
            try_walk!(walk_expression(visitor, arg));
        }
        if let Some(body) = &node.body {
            try_walk!(walk_block(visitor, body));
        }
    })
}

pub fn walk_parentheses<V: JavaVisitor>(
    visitor: &mut V,
    node: &Parens<Expression>,
) -> VisitResult {
    walk_node!(visitor, node, visit_parentheses, leave_parentheses, {
        try_walk!(walk_expression(visitor, &node.tree));
    })
}

pub fn walk_ternary<V: JavaVisitor>(visitor: &mut V, node: &Ternary) -> VisitResult {
    walk_node!(visitor, node, visit_ternary, leave_ternary, {
        try_walk!(walk_expression(visitor, &node.condition));
        try_walk!(walk_expression(visitor, &node.true_part));
        try_walk!(walk_expression(visitor, &node.false_part));
    })
}

pub fn walk_type_cast<V: JavaVisitor>(visitor: &mut V, node: &TypeCast) -> VisitResult {
    walk_node!(visitor, node, visit_type_cast, leave_type_cast, {
        try_walk!(walk_type_tree(visitor, &node.clazz.tree));
        try_walk!(walk_expression(visitor, &node.expr));
    })
}

pub fn walk_unary<V: JavaVisitor>(visitor: &mut V, node: &Unary) -> VisitResult {
    walk_node!(visitor, node, visit_unary, leave_unary, {
        try_walk!(walk_expression(visitor, &node.expr));
    })
}

// ============================================================================
// Type trees
// ============================================================================

/// Dispatch a [`TypeTree`] to its kind's walk.
pub fn walk_type_tree<V: JavaVisitor>(visitor: &mut V, node: &TypeTree) -> VisitResult {
    match node {
        TypeTree::Ident(n) => walk_ident(visitor, n),
        TypeTree::FieldAccess(n) => walk_field_access(visitor, n),
        TypeTree::Array(n) => walk_array_type(visitor, n),
        TypeTree::Parameterized(n) => walk_parameterized_type(visitor, n),
        TypeTree::Primitive(n) => walk_primitive(visitor, n),
        TypeTree::Wildcard(n) => walk_wildcard(visitor, n),
        TypeTree::MultiCatch(n) => walk_multi_catch(visitor, n),
    }
}

pub fn walk_array_type<V: JavaVisitor>(visitor: &mut V, node: &ArrayType) -> VisitResult {
    walk_node!(visitor, node, visit_array_type, leave_array_type, {
        try_walk!(walk_type_tree(visitor, &node.element_type));
    })
}

pub fn walk_parameterized_type<V: JavaVisitor>(
    visitor: &mut V,
    node: &ParameterizedType,
) -> VisitResult {
    walk_node!(visitor, node, visit_parameterized_type, leave_parameterized_type, {
        try_walk!(walk_type_tree(visitor, &node.clazz));
        for arg in &node.type_arguments {
            try_walk!(walk_type_tree(visitor, arg));
        }
    })
}

pub fn walk_primitive<V: JavaVisitor>(visitor: &mut V, node: &Primitive) -> VisitResult {
    walk_node!(visitor, node, visit_primitive, leave_primitive, {})
}

pub fn walk_wildcard<V: JavaVisitor>(visitor: &mut V, node: &Wildcard) -> VisitResult {
    walk_node!(visitor, node, visit_wildcard, leave_wildcard, {
        if let Some(bounded_type) = &node.bounded_type {
            try_walk!(walk_type_tree(visitor, bounded_type));
        }
    })
}

pub fn walk_multi_catch<V: JavaVisitor>(visitor: &mut V, node: &MultiCatch) -> VisitResult {
    walk_node!(visitor, node, visit_multi_catch, leave_multi_catch, {
        for alternative in &node.alternatives {
            try_walk!(walk_type_tree(visitor, alternative));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveTag;

    struct IdentCollector {
        names: Vec<String>,
    }

    impl JavaVisitor for IdentCollector {
        fn visit_ident(&mut self, node: &Ident) -> VisitResult {
            self.names.push(node.simple_name.clone());
            VisitResult::Continue
        }
    }

    struct FirstLiteralFinder {
        found: Option<String>,
    }

    impl JavaVisitor for FirstLiteralFinder {
        fn visit_literal(&mut self, node: &Literal) -> VisitResult {
            self.found = Some(node.value_source.clone());
            VisitResult::Stop
        }
    }

    fn sample_binary() -> Expression {
        // a + 1 * 2
        let one = Expression::Literal(Literal::new(
            LiteralValue::Int(1),
            "1",
            PrimitiveTag::Int,
            None,
            Formatting::None,
        ));
        let two = Expression::Literal(Literal::new(
            LiteralValue::Int(2),
            "2",
            PrimitiveTag::Int,
            None,
            Formatting::None,
        ));
        let product = Expression::Binary(Binary::new(
            one,
            BinaryOperator::Multiplication(Formatting::None),
            two,
            None,
            Formatting::None,
        ));
        Expression::Binary(Binary::new(
            Expression::Ident(Ident::new("a", None, Formatting::None)),
            BinaryOperator::Addition(Formatting::None),
            product,
            None,
            Formatting::None,
        ))
    }

    #[test]
    fn walk_visits_nested_idents_in_source_order() {
        let mut collector = IdentCollector { names: vec![] };
        walk_expression(&mut collector, &sample_binary());
        assert_eq!(collector.names, vec!["a"]);
    }

    #[test]
    fn stop_halts_the_walk_at_the_first_match() {
        let mut finder = FirstLiteralFinder { found: None };
        let result = walk_expression(&mut finder, &sample_binary());
        assert_eq!(result, VisitResult::Stop);
        assert_eq!(finder.found.as_deref(), Some("1"));
    }

    #[test]
    fn skip_children_still_calls_leave() {
        struct Skipper {
            visited_literal: bool,
            left_binary: bool,
        }
        impl JavaVisitor for Skipper {
            fn visit_binary(&mut self, _node: &Binary) -> VisitResult {
                VisitResult::SkipChildren
            }
            fn leave_binary(&mut self, _node: &Binary) {
                self.left_binary = true;
            }
            fn visit_literal(&mut self, _node: &Literal) -> VisitResult {
                self.visited_literal = true;
                VisitResult::Continue
            }
        }

        let mut skipper = Skipper {
            visited_literal: false,
            left_binary: false,
        };
        walk_expression(&mut skipper, &sample_binary());
        assert!(!skipper.visited_literal, "children should be skipped");
        assert!(skipper.left_binary, "leave should still run");
    }
}
