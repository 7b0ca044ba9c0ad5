//! Rewriting traversal: post-order reassembly with derived fixes.
//!
//! `refactor_*` functions transform a node's children first, reassemble the
//! node, and hand it to the matching [`JavaRefactorVisitor`] hook. When a
//! hook returns a node different from what it was given (and did not emit
//! explicit fixes of its own), the traversal derives a `Replace` fix: the
//! original node's full extent becomes the printed form of the replacement.
//! A hook that emits explicit fixes is trusted to describe its own edit and
//! no fix is derived for that node.
//!
//! The [`RefactorCtx`] owns the ancestor cursor; entries are pushed before a
//! node's children are walked and popped after its hook returns, so a hook
//! always sees itself and its ancestors on the stack.

use rejig_core::{Fix, FixSet};

use super::cursor::Cursor;
use super::traits::JavaRefactorVisitor;
use crate::nodes::*;
use crate::printer::{Print, SpanTable};

// ============================================================================
// Context
// ============================================================================

/// A non-fatal condition collected during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub node_id: Option<NodeId>,
    pub message: String,
}

/// Traversal state shared with rewriting hooks.
pub struct RefactorCtx {
    cursor: Cursor,
    spans: SpanTable,
    fixes: FixSet,
    warnings: Vec<Warning>,
}

impl RefactorCtx {
    /// A context over the span table of the printed input tree.
    pub fn new(spans: SpanTable) -> Self {
        RefactorCtx {
            cursor: Cursor::new(),
            spans,
            fixes: FixSet::new(),
            warnings: Vec::new(),
        }
    }

    /// The ancestor stack, current node included.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// True when the scope anchor is the current node or an ancestor of it.
    pub fn is_scope_in_cursor_path(&self, scope: NodeId) -> bool {
        self.cursor.is_in_path(scope)
    }

    /// Extents of the printed input tree.
    pub fn spans(&self) -> &SpanTable {
        &self.spans
    }

    /// Emit an explicit fix. A hook that emits fixes for a node suppresses
    /// the derived replacement fix for that same node.
    pub fn emit_fix(&mut self, fix: Fix) {
        self.fixes.push(fix);
    }

    /// Record a non-fatal warning; the affected node is skipped, not fatal.
    pub fn warn(&mut self, node_id: Option<NodeId>, message: impl Into<String>) {
        self.warnings.push(Warning {
            node_id,
            message: message.into(),
        });
    }

    /// The fixes and warnings collected so far.
    pub fn into_parts(self) -> (FixSet, Vec<Warning>) {
        (self.fixes, self.warnings)
    }

    fn fix_count(&self) -> usize {
        self.fixes.len()
    }

    fn replace<T: Print>(&mut self, id: NodeId, replacement: &T) {
        let span = self.spans.full(id);
        match span {
            Some(span) => self.fixes.push(Fix::replace(span, replacement.print())),
            None => self.warn(Some(id), "replaced node has no recorded source extent"),
        }
    }
}

/// Run the hook over the reassembled node; derive a replacement fix when the
/// hook changed the node without emitting explicit fixes.
macro_rules! apply_hook {
    ($visitor:ident, $ctx:ident, $node:ident, $hook:ident) => {{
        let before = $node.clone();
        let fixes_before = $ctx.fix_count();
        let after = $visitor.$hook($node, $ctx);
        if after != before && $ctx.fix_count() == fixes_before {
            $ctx.replace(before.id, &after);
        }
        after
    }};
}

// ============================================================================
// Roots and declarations
// ============================================================================

pub fn refactor_compilation_unit(
    v: &mut dyn JavaRefactorVisitor,
    node: CompilationUnit,
    ctx: &mut RefactorCtx,
) -> CompilationUnit {
    ctx.cursor.push(node.id, NodeKind::CompilationUnit);
    let CompilationUnit {
        id,
        fmt,
        source_path,
        package,
        imports,
        classes,
    } = node;
    let node = CompilationUnit {
        id,
        fmt,
        source_path,
        package: package.map(|p| refactor_package_decl(v, p, ctx)),
        imports: imports
            .into_iter()
            .map(|i| refactor_import_decl(v, i, ctx))
            .collect(),
        classes: classes
            .into_iter()
            .map(|c| refactor_class_decl(v, c, ctx))
            .collect(),
    };
    let out = apply_hook!(v, ctx, node, visit_compilation_unit);
    ctx.cursor.pop();
    out
}

pub fn refactor_package_decl(
    v: &mut dyn JavaRefactorVisitor,
    node: Package,
    ctx: &mut RefactorCtx,
) -> Package {
    ctx.cursor.push(node.id, NodeKind::Package);
    let Package { id, fmt, expr } = node;
    let node = Package {
        id,
        fmt,
        expr: refactor_expression(v, expr, ctx),
    };
    let out = apply_hook!(v, ctx, node, visit_package_decl);
    ctx.cursor.pop();
    out
}

pub fn refactor_import_decl(
    v: &mut dyn JavaRefactorVisitor,
    node: Import,
    ctx: &mut RefactorCtx,
) -> Import {
    ctx.cursor.push(node.id, NodeKind::Import);
    let Import {
        id,
        fmt,
        statik,
        qualid,
    } = node;
    let node = Import {
        id,
        fmt,
        statik,
        qualid: refactor_field_access(v, qualid, ctx),
    };
    let out = apply_hook!(v, ctx, node, visit_import_decl);
    ctx.cursor.pop();
    out
}

pub fn refactor_class_decl(
    v: &mut dyn JavaRefactorVisitor,
    node: ClassDecl,
    ctx: &mut RefactorCtx,
) -> ClassDecl {
    ctx.cursor.push(node.id, NodeKind::ClassDecl);
    let ClassDecl {
        id,
        fmt,
        annotations,
        modifiers,
        kind,
        name,
        type_parameters,
        extends,
        implements,
        body,
        typ,
    } = node;
    let node = ClassDecl {
        id,
        fmt,
        annotations: annotations
            .into_iter()
            .map(|a| refactor_annotation(v, a, ctx))
            .collect(),
        modifiers,
        kind,
        name: refactor_ident(v, name, ctx),
        type_parameters: type_parameters.map(|t| refactor_type_parameters(v, t, ctx)),
        extends: extends.map(|e| Extends {
            id: e.id,
            fmt: e.fmt,
            from: refactor_type_tree(v, e.from, ctx),
        }),
        implements: implements.map(|i| Implements {
            id: i.id,
            fmt: i.fmt,
            from: i
                .from
                .into_iter()
                .map(|t| refactor_type_tree(v, t, ctx))
                .collect(),
        }),
        body: refactor_block(v, body, ctx),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_class_decl);
    ctx.cursor.pop();
    out
}

pub fn refactor_method_decl(
    v: &mut dyn JavaRefactorVisitor,
    node: MethodDecl,
    ctx: &mut RefactorCtx,
) -> MethodDecl {
    ctx.cursor.push(node.id, NodeKind::MethodDecl);
    let MethodDecl {
        id,
        fmt,
        annotations,
        modifiers,
        type_parameters,
        return_type,
        name,
        params,
        throws,
        body,
    } = node;
    let node = MethodDecl {
        id,
        fmt,
        annotations: annotations
            .into_iter()
            .map(|a| refactor_annotation(v, a, ctx))
            .collect(),
        modifiers,
        type_parameters: type_parameters.map(|t| refactor_type_parameters(v, t, ctx)),
        return_type: return_type.map(|t| refactor_type_tree(v, t, ctx)),
        name: refactor_ident(v, name, ctx),
        params: Parameters {
            id: params.id,
            fmt: params.fmt,
            params: params
                .params
                .into_iter()
                .map(|p| refactor_variable_decls(v, p, ctx))
                .collect(),
        },
        throws: throws.map(|t| Throws {
            id: t.id,
            fmt: t.fmt,
            exceptions: t
                .exceptions
                .into_iter()
                .map(|e| refactor_type_tree(v, e, ctx))
                .collect(),
        }),
        body: body.map(|b| refactor_block(v, b, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_method_decl);
    ctx.cursor.pop();
    out
}

pub fn refactor_variable_decls(
    v: &mut dyn JavaRefactorVisitor,
    node: VariableDecls,
    ctx: &mut RefactorCtx,
) -> VariableDecls {
    ctx.cursor.push(node.id, NodeKind::VariableDecls);
    let VariableDecls {
        id,
        fmt,
        annotations,
        modifiers,
        type_expr,
        varargs,
        dims_before_name,
        vars,
    } = node;
    let node = VariableDecls {
        id,
        fmt,
        annotations: annotations
            .into_iter()
            .map(|a| refactor_annotation(v, a, ctx))
            .collect(),
        modifiers,
        type_expr: type_expr.map(|t| refactor_type_tree(v, t, ctx)),
        varargs,
        dims_before_name,
        vars: vars
            .into_iter()
            .map(|n| refactor_named_var(v, n, ctx))
            .collect(),
    };
    let out = apply_hook!(v, ctx, node, visit_variable_decls);
    ctx.cursor.pop();
    out
}

pub fn refactor_named_var(
    v: &mut dyn JavaRefactorVisitor,
    node: NamedVar,
    ctx: &mut RefactorCtx,
) -> NamedVar {
    ctx.cursor.push(node.id, NodeKind::NamedVar);
    let NamedVar {
        id,
        fmt,
        name,
        dims_after_name,
        initializer,
        typ,
    } = node;
    let node = NamedVar {
        id,
        fmt,
        name: refactor_ident(v, name, ctx),
        dims_after_name,
        initializer: initializer.map(|e| refactor_expression(v, e, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_named_var);
    ctx.cursor.pop();
    out
}

pub fn refactor_annotation(
    v: &mut dyn JavaRefactorVisitor,
    node: Annotation,
    ctx: &mut RefactorCtx,
) -> Annotation {
    ctx.cursor.push(node.id, NodeKind::Annotation);
    let Annotation {
        id,
        fmt,
        annotation_type,
        args,
    } = node;
    let node = Annotation {
        id,
        fmt,
        annotation_type: refactor_type_tree(v, annotation_type, ctx),
        args: args.map(|a| refactor_args(v, a, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_annotation);
    ctx.cursor.pop();
    out
}

fn refactor_args(v: &mut dyn JavaRefactorVisitor, node: Args, ctx: &mut RefactorCtx) -> Args {
    let Args { id, fmt, args } = node;
    Args {
        id,
        fmt,
        args: args
            .into_iter()
            .map(|a| refactor_expression(v, a, ctx))
            .collect(),
    }
}

// ============================================================================
// Statements
// ============================================================================

pub fn refactor_statement(
    v: &mut dyn JavaRefactorVisitor,
    node: Statement,
    ctx: &mut RefactorCtx,
) -> Statement {
    match node {
        Statement::Block(n) => Statement::Block(refactor_block(v, n, ctx)),
        Statement::Break(n) => Statement::Break(refactor_break_stmt(v, n, ctx)),
        Statement::Case(n) => Statement::Case(refactor_case(v, n, ctx)),
        Statement::Catch(n) => Statement::Catch(refactor_catch(v, n, ctx)),
        Statement::ClassDecl(n) => Statement::ClassDecl(refactor_class_decl(v, n, ctx)),
        Statement::Continue(n) => Statement::Continue(refactor_continue_stmt(v, n, ctx)),
        Statement::DoWhileLoop(n) => Statement::DoWhileLoop(refactor_do_while_loop(v, n, ctx)),
        Statement::Empty(n) => Statement::Empty(refactor_empty(v, n, ctx)),
        Statement::EnumValueSet(n) => Statement::EnumValueSet(refactor_enum_value_set(v, n, ctx)),
        Statement::Expression(n) => Statement::Expression(refactor_expression(v, n, ctx)),
        Statement::ForEachLoop(n) => Statement::ForEachLoop(refactor_for_each_loop(v, n, ctx)),
        Statement::ForLoop(n) => Statement::ForLoop(refactor_for_loop(v, n, ctx)),
        Statement::If(n) => Statement::If(refactor_if_stmt(v, n, ctx)),
        Statement::Label(n) => Statement::Label(refactor_label(v, n, ctx)),
        Statement::MethodDecl(n) => Statement::MethodDecl(refactor_method_decl(v, n, ctx)),
        Statement::Return(n) => Statement::Return(refactor_return_stmt(v, n, ctx)),
        Statement::Switch(n) => Statement::Switch(refactor_switch_stmt(v, n, ctx)),
        Statement::Synchronized(n) => Statement::Synchronized(refactor_synchronized(v, n, ctx)),
        Statement::Throw(n) => Statement::Throw(refactor_throw(v, n, ctx)),
        Statement::Try(n) => Statement::Try(refactor_try_stmt(v, n, ctx)),
        Statement::VariableDecls(n) => Statement::VariableDecls(refactor_variable_decls(v, n, ctx)),
        Statement::WhileLoop(n) => Statement::WhileLoop(refactor_while_loop(v, n, ctx)),
    }
}

pub fn refactor_block(
    v: &mut dyn JavaRefactorVisitor,
    node: Block,
    ctx: &mut RefactorCtx,
) -> Block {
    ctx.cursor.push(node.id, NodeKind::Block);
    let Block {
        id,
        fmt,
        statements,
        end_of_block_suffix,
    } = node;
    let node = Block {
        id,
        fmt,
        statements: statements
            .into_iter()
            .map(|s| refactor_statement(v, s, ctx))
            .collect(),
        end_of_block_suffix,
    };
    let out = apply_hook!(v, ctx, node, visit_block);
    ctx.cursor.pop();
    out
}

pub fn refactor_break_stmt(
    v: &mut dyn JavaRefactorVisitor,
    node: Break,
    ctx: &mut RefactorCtx,
) -> Break {
    ctx.cursor.push(node.id, NodeKind::Break);
    let out = apply_hook!(v, ctx, node, visit_break_stmt);
    ctx.cursor.pop();
    out
}

pub fn refactor_case(v: &mut dyn JavaRefactorVisitor, node: Case, ctx: &mut RefactorCtx) -> Case {
    ctx.cursor.push(node.id, NodeKind::Case);
    let Case {
        id,
        fmt,
        pattern,
        statements,
    } = node;
    let node = Case {
        id,
        fmt,
        pattern: pattern.map(|p| refactor_expression(v, p, ctx)),
        statements: statements
            .into_iter()
            .map(|s| refactor_statement(v, s, ctx))
            .collect(),
    };
    let out = apply_hook!(v, ctx, node, visit_case);
    ctx.cursor.pop();
    out
}

pub fn refactor_catch(
    v: &mut dyn JavaRefactorVisitor,
    node: Catch,
    ctx: &mut RefactorCtx,
) -> Catch {
    ctx.cursor.push(node.id, NodeKind::Catch);
    let Catch {
        id,
        fmt,
        param,
        body,
    } = node;
    let Parens {
        id: paren_id,
        fmt: paren_fmt,
        tree,
    } = param;
    let node = Catch {
        id,
        fmt,
        param: Parens {
            id: paren_id,
            fmt: paren_fmt,
            tree: Box::new(refactor_variable_decls(v, *tree, ctx)),
        },
        body: refactor_block(v, body, ctx),
    };
    let out = apply_hook!(v, ctx, node, visit_catch);
    ctx.cursor.pop();
    out
}

pub fn refactor_continue_stmt(
    v: &mut dyn JavaRefactorVisitor,
    node: Continue,
    ctx: &mut RefactorCtx,
) -> Continue {
    ctx.cursor.push(node.id, NodeKind::Continue);
    let out = apply_hook!(v, ctx, node, visit_continue_stmt);
    ctx.cursor.pop();
    out
}

pub fn refactor_do_while_loop(
    v: &mut dyn JavaRefactorVisitor,
    node: DoWhileLoop,
    ctx: &mut RefactorCtx,
) -> DoWhileLoop {
    ctx.cursor.push(node.id, NodeKind::DoWhileLoop);
    let DoWhileLoop {
        id,
        fmt,
        body,
        while_kw,
        condition,
    } = node;
    let node = DoWhileLoop {
        id,
        fmt,
        body: Box::new(refactor_statement(v, *body, ctx)),
        while_kw,
        condition: refactor_parentheses(v, condition, ctx),
    };
    let out = apply_hook!(v, ctx, node, visit_do_while_loop);
    ctx.cursor.pop();
    out
}

pub fn refactor_empty(
    v: &mut dyn JavaRefactorVisitor,
    node: Empty,
    ctx: &mut RefactorCtx,
) -> Empty {
    ctx.cursor.push(node.id, NodeKind::Empty);
    let out = apply_hook!(v, ctx, node, visit_empty);
    ctx.cursor.pop();
    out
}

pub fn refactor_enum_value(
    v: &mut dyn JavaRefactorVisitor,
    node: EnumValue,
    ctx: &mut RefactorCtx,
) -> EnumValue {
    ctx.cursor.push(node.id, NodeKind::EnumValue);
    let EnumValue {
        id,
        fmt,
        name,
        initializer,
    } = node;
    let node = EnumValue {
        id,
        fmt,
        name: refactor_ident(v, name, ctx),
        initializer: initializer.map(|a| refactor_args(v, a, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_enum_value);
    ctx.cursor.pop();
    out
}

pub fn refactor_enum_value_set(
    v: &mut dyn JavaRefactorVisitor,
    node: EnumValueSet,
    ctx: &mut RefactorCtx,
) -> EnumValueSet {
    ctx.cursor.push(node.id, NodeKind::EnumValueSet);
    let EnumValueSet {
        id,
        fmt,
        values,
        terminated_with_semicolon,
    } = node;
    let node = EnumValueSet {
        id,
        fmt,
        values: values
            .into_iter()
            .map(|e| refactor_enum_value(v, e, ctx))
            .collect(),
        terminated_with_semicolon,
    };
    let out = apply_hook!(v, ctx, node, visit_enum_value_set);
    ctx.cursor.pop();
    out
}

pub fn refactor_for_each_loop(
    v: &mut dyn JavaRefactorVisitor,
    node: ForEachLoop,
    ctx: &mut RefactorCtx,
) -> ForEachLoop {
    ctx.cursor.push(node.id, NodeKind::ForEachLoop);
    let ForEachLoop {
        id,
        fmt,
        control,
        body,
    } = node;
    let node = ForEachLoop {
        id,
        fmt,
        control: ForEachControl {
            id: control.id,
            fmt: control.fmt,
            variable: refactor_variable_decls(v, control.variable, ctx),
            iterable: refactor_expression(v, control.iterable, ctx),
        },
        body: Box::new(refactor_statement(v, *body, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_for_each_loop);
    ctx.cursor.pop();
    out
}

pub fn refactor_for_loop(
    v: &mut dyn JavaRefactorVisitor,
    node: ForLoop,
    ctx: &mut RefactorCtx,
) -> ForLoop {
    ctx.cursor.push(node.id, NodeKind::ForLoop);
    let ForLoop {
        id,
        fmt,
        control,
        body,
    } = node;
    let node = ForLoop {
        id,
        fmt,
        control: ForControl {
            init: Box::new(refactor_statement(v, *control.init, ctx)),
            condition: Box::new(refactor_expression(v, *control.condition, ctx)),
            update: control
                .update
                .into_iter()
                .map(|s| refactor_statement(v, s, ctx))
                .collect(),
            id: control.id,
            fmt: control.fmt,
        },
        body: Box::new(refactor_statement(v, *body, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_for_loop);
    ctx.cursor.pop();
    out
}

pub fn refactor_if_stmt(v: &mut dyn JavaRefactorVisitor, node: If, ctx: &mut RefactorCtx) -> If {
    ctx.cursor.push(node.id, NodeKind::If);
    let If {
        id,
        fmt,
        condition,
        then_part,
        else_part,
    } = node;
    let node = If {
        id,
        fmt,
        condition: refactor_parentheses(v, condition, ctx),
        then_part: Box::new(refactor_statement(v, *then_part, ctx)),
        else_part: else_part.map(|e| Else {
            body: Box::new(refactor_statement(v, *e.body, ctx)),
            id: e.id,
            fmt: e.fmt,
        }),
    };
    let out = apply_hook!(v, ctx, node, visit_if_stmt);
    ctx.cursor.pop();
    out
}

pub fn refactor_label(
    v: &mut dyn JavaRefactorVisitor,
    node: Label,
    ctx: &mut RefactorCtx,
) -> Label {
    ctx.cursor.push(node.id, NodeKind::Label);
    let Label {
        id,
        fmt,
        label,
        statement,
    } = node;
    let node = Label {
        id,
        fmt,
        label: refactor_ident(v, label, ctx),
        statement: Box::new(refactor_statement(v, *statement, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_label);
    ctx.cursor.pop();
    out
}

pub fn refactor_return_stmt(
    v: &mut dyn JavaRefactorVisitor,
    node: Return,
    ctx: &mut RefactorCtx,
) -> Return {
    ctx.cursor.push(node.id, NodeKind::Return);
    let Return { id, fmt, expr } = node;
    let node = Return {
        id,
        fmt,
        expr: expr.map(|e| refactor_expression(v, e, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_return_stmt);
    ctx.cursor.pop();
    out
}

pub fn refactor_switch_stmt(
    v: &mut dyn JavaRefactorVisitor,
    node: Switch,
    ctx: &mut RefactorCtx,
) -> Switch {
    ctx.cursor.push(node.id, NodeKind::Switch);
    let Switch {
        id,
        fmt,
        selector,
        cases,
    } = node;
    let node = Switch {
        id,
        fmt,
        selector: refactor_parentheses(v, selector, ctx),
        cases: refactor_block(v, cases, ctx),
    };
    let out = apply_hook!(v, ctx, node, visit_switch_stmt);
    ctx.cursor.pop();
    out
}

pub fn refactor_synchronized(
    v: &mut dyn JavaRefactorVisitor,
    node: Synchronized,
    ctx: &mut RefactorCtx,
) -> Synchronized {
    ctx.cursor.push(node.id, NodeKind::Synchronized);
    let Synchronized {
        id,
        fmt,
        lock,
        body,
    } = node;
    let node = Synchronized {
        id,
        fmt,
        lock: refactor_parentheses(v, lock, ctx),
        body: refactor_block(v, body, ctx),
    };
    let out = apply_hook!(v, ctx, node, visit_synchronized);
    ctx.cursor.pop();
    out
}

pub fn refactor_throw(
    v: &mut dyn JavaRefactorVisitor,
    node: Throw,
    ctx: &mut RefactorCtx,
) -> Throw {
    ctx.cursor.push(node.id, NodeKind::Throw);
    let Throw {
        id,
        fmt,
        exception,
    } = node;
    let node = Throw {
        id,
        fmt,
        exception: refactor_expression(v, exception, ctx),
    };
    let out = apply_hook!(v, ctx, node, visit_throw);
    ctx.cursor.pop();
    out
}

pub fn refactor_try_stmt(v: &mut dyn JavaRefactorVisitor, node: Try, ctx: &mut RefactorCtx) -> Try {
    ctx.cursor.push(node.id, NodeKind::Try);
    let Try {
        id,
        fmt,
        resources,
        body,
        catches,
        finally_block,
    } = node;
    let node = Try {
        id,
        fmt,
        resources: resources.map(|r| TryResources {
            decls: r
                .decls
                .into_iter()
                .map(|d| refactor_variable_decls(v, d, ctx))
                .collect(),
            id: r.id,
            fmt: r.fmt,
        }),
        body: refactor_block(v, body, ctx),
        catches: catches
            .into_iter()
            .map(|c| refactor_catch(v, c, ctx))
            .collect(),
        finally_block: finally_block.map(|f| Finally {
            block: refactor_block(v, f.block, ctx),
            id: f.id,
            fmt: f.fmt,
        }),
    };
    let out = apply_hook!(v, ctx, node, visit_try_stmt);
    ctx.cursor.pop();
    out
}

pub fn refactor_type_parameters(
    v: &mut dyn JavaRefactorVisitor,
    node: TypeParameters,
    ctx: &mut RefactorCtx,
) -> TypeParameters {
    ctx.cursor.push(node.id, NodeKind::TypeParameters);
    let TypeParameters { id, fmt, params } = node;
    let node = TypeParameters {
        id,
        fmt,
        params: params
            .into_iter()
            .map(|p| refactor_type_parameter(v, p, ctx))
            .collect(),
    };
    let out = apply_hook!(v, ctx, node, visit_type_parameters);
    ctx.cursor.pop();
    out
}

pub fn refactor_type_parameter(
    v: &mut dyn JavaRefactorVisitor,
    node: TypeParameter,
    ctx: &mut RefactorCtx,
) -> TypeParameter {
    ctx.cursor.push(node.id, NodeKind::TypeParameter);
    let TypeParameter {
        id,
        fmt,
        annotations,
        name,
        bounds,
    } = node;
    let node = TypeParameter {
        id,
        fmt,
        annotations: annotations
            .into_iter()
            .map(|a| refactor_annotation(v, a, ctx))
            .collect(),
        name: Box::new(refactor_type_tree(v, *name, ctx)),
        bounds: bounds.map(|b| Bounds {
            types: b
                .types
                .into_iter()
                .map(|t| refactor_type_tree(v, t, ctx))
                .collect(),
            id: b.id,
            fmt: b.fmt,
        }),
    };
    let out = apply_hook!(v, ctx, node, visit_type_parameter);
    ctx.cursor.pop();
    out
}

pub fn refactor_while_loop(
    v: &mut dyn JavaRefactorVisitor,
    node: WhileLoop,
    ctx: &mut RefactorCtx,
) -> WhileLoop {
    ctx.cursor.push(node.id, NodeKind::WhileLoop);
    let WhileLoop {
        id,
        fmt,
        condition,
        body,
    } = node;
    let node = WhileLoop {
        id,
        fmt,
        condition: refactor_parentheses(v, condition, ctx),
        body: Box::new(refactor_statement(v, *body, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_while_loop);
    ctx.cursor.pop();
    out
}

// ============================================================================
// Expressions
// ============================================================================

pub fn refactor_expression(
    v: &mut dyn JavaRefactorVisitor,
    node: Expression,
    ctx: &mut RefactorCtx,
) -> Expression {
    match node {
        Expression::ArrayAccess(n) => Expression::ArrayAccess(refactor_array_access(v, n, ctx)),
        Expression::Assign(n) => Expression::Assign(refactor_assign(v, n, ctx)),
        Expression::AssignOp(n) => Expression::AssignOp(refactor_assign_op(v, n, ctx)),
        Expression::Binary(n) => Expression::Binary(refactor_binary(v, n, ctx)),
        Expression::Empty(n) => Expression::Empty(refactor_empty(v, n, ctx)),
        Expression::FieldAccess(n) => Expression::FieldAccess(refactor_field_access(v, n, ctx)),
        Expression::Ident(n) => Expression::Ident(refactor_ident(v, n, ctx)),
        Expression::InstanceOf(n) => Expression::InstanceOf(refactor_instance_of(v, n, ctx)),
        Expression::Lambda(n) => Expression::Lambda(refactor_lambda(v, n, ctx)),
        Expression::Literal(n) => Expression::Literal(refactor_literal(v, n, ctx)),
        Expression::MethodInvocation(n) => {
            Expression::MethodInvocation(refactor_method_invocation(v, n, ctx))
        }
        Expression::NewArray(n) => Expression::NewArray(refactor_new_array(v, n, ctx)),
        Expression::NewClass(n) => Expression::NewClass(refactor_new_class(v, n, ctx)),
        Expression::Parentheses(n) => Expression::Parentheses(refactor_parentheses(v, n, ctx)),
        Expression::Ternary(n) => Expression::Ternary(refactor_ternary(v, n, ctx)),
        Expression::TypeCast(n) => Expression::TypeCast(refactor_type_cast(v, n, ctx)),
        Expression::Unary(n) => Expression::Unary(refactor_unary(v, n, ctx)),
    }
}

pub fn refactor_array_access(
    v: &mut dyn JavaRefactorVisitor,
    node: ArrayAccess,
    ctx: &mut RefactorCtx,
) -> ArrayAccess {
    ctx.cursor.push(node.id, NodeKind::ArrayAccess);
    let ArrayAccess {
        id,
        fmt,
        indexed,
        dim_fmt,
        index,
        typ,
    } = node;
    let node = ArrayAccess {
        id,
        fmt,
        indexed: Box::new(refactor_expression(v, *indexed, ctx)),
        dim_fmt,
        index: Box::new(refactor_expression(v, *index, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_array_access);
    ctx.cursor.pop();
    out
}

pub fn refactor_assign(
    v: &mut dyn JavaRefactorVisitor,
    node: Assign,
    ctx: &mut RefactorCtx,
) -> Assign {
    ctx.cursor.push(node.id, NodeKind::Assign);
    let Assign {
        id,
        fmt,
        variable,
        assignment,
        typ,
    } = node;
    let node = Assign {
        id,
        fmt,
        variable: Box::new(refactor_expression(v, *variable, ctx)),
        assignment: Box::new(refactor_expression(v, *assignment, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_assign);
    ctx.cursor.pop();
    out
}

pub fn refactor_assign_op(
    v: &mut dyn JavaRefactorVisitor,
    node: AssignOp,
    ctx: &mut RefactorCtx,
) -> AssignOp {
    ctx.cursor.push(node.id, NodeKind::AssignOp);
    let AssignOp {
        id,
        fmt,
        variable,
        operator,
        assignment,
        typ,
    } = node;
    let node = AssignOp {
        id,
        fmt,
        variable: Box::new(refactor_expression(v, *variable, ctx)),
        operator,
        assignment: Box::new(refactor_expression(v, *assignment, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_assign_op);
    ctx.cursor.pop();
    out
}

pub fn refactor_binary(
    v: &mut dyn JavaRefactorVisitor,
    node: Binary,
    ctx: &mut RefactorCtx,
) -> Binary {
    ctx.cursor.push(node.id, NodeKind::Binary);
    let Binary {
        id,
        fmt,
        left,
        operator,
        right,
        typ,
    } = node;
    let node = Binary {
        id,
        fmt,
        left: Box::new(refactor_expression(v, *left, ctx)),
        operator,
        right: Box::new(refactor_expression(v, *right, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_binary);
    ctx.cursor.pop();
    out
}

pub fn refactor_field_access(
    v: &mut dyn JavaRefactorVisitor,
    node: FieldAccess,
    ctx: &mut RefactorCtx,
) -> FieldAccess {
    ctx.cursor.push(node.id, NodeKind::FieldAccess);
    let FieldAccess {
        id,
        fmt,
        target,
        name,
        typ,
    } = node;
    let node = FieldAccess {
        id,
        fmt,
        target: Box::new(refactor_expression(v, *target, ctx)),
        name: refactor_ident(v, name, ctx),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_field_access);
    ctx.cursor.pop();
    out
}

pub fn refactor_ident(
    v: &mut dyn JavaRefactorVisitor,
    node: Ident,
    ctx: &mut RefactorCtx,
) -> Ident {
    ctx.cursor.push(node.id, NodeKind::Ident);
    let out = apply_hook!(v, ctx, node, visit_ident);
    ctx.cursor.pop();
    out
}

pub fn refactor_instance_of(
    v: &mut dyn JavaRefactorVisitor,
    node: InstanceOf,
    ctx: &mut RefactorCtx,
) -> InstanceOf {
    ctx.cursor.push(node.id, NodeKind::InstanceOf);
    let InstanceOf {
        id,
        fmt,
        expr,
        clazz,
        typ,
    } = node;
    let node = InstanceOf {
        id,
        fmt,
        expr: Box::new(refactor_expression(v, *expr, ctx)),
        clazz: Box::new(refactor_type_tree(v, *clazz, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_instance_of);
    ctx.cursor.pop();
    out
}

pub fn refactor_lambda(
    v: &mut dyn JavaRefactorVisitor,
    node: Lambda,
    ctx: &mut RefactorCtx,
) -> Lambda {
    ctx.cursor.push(node.id, NodeKind::Lambda);
    let Lambda {
        id,
        fmt,
        parenthesized,
        params,
        arrow,
        body,
        typ,
    } = node;
    let node = Lambda {
        id,
        fmt,
        parenthesized,
        params: params
            .into_iter()
            .map(|p| refactor_variable_decls(v, p, ctx))
            .collect(),
        arrow,
        body: match body {
            LambdaBody::Expr(e) => LambdaBody::Expr(Box::new(refactor_expression(v, *e, ctx))),
            LambdaBody::Block(b) => LambdaBody::Block(refactor_block(v, b, ctx)),
        },
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_lambda);
    ctx.cursor.pop();
    out
}

pub fn refactor_literal(
    v: &mut dyn JavaRefactorVisitor,
    node: Literal,
    ctx: &mut RefactorCtx,
) -> Literal {
    ctx.cursor.push(node.id, NodeKind::Literal);
    let out = apply_hook!(v, ctx, node, visit_literal);
    ctx.cursor.pop();
    out
}

pub fn refactor_method_invocation(
    v: &mut dyn JavaRefactorVisitor,
    node: MethodInvocation,
    ctx: &mut RefactorCtx,
) -> MethodInvocation {
    ctx.cursor.push(node.id, NodeKind::MethodInvocation);
    let MethodInvocation {
        id,
        fmt,
        select,
        type_parameters,
        name,
        args,
        method_type,
    } = node;
    let node = MethodInvocation {
        id,
        fmt,
        select: select.map(|s| Box::new(refactor_expression(v, *s, ctx))),
        type_parameters: type_parameters.map(|t| refactor_type_parameters(v, t, ctx)),
        name: refactor_ident(v, name, ctx),
        args: refactor_args(v, args, ctx),
        method_type,
    };
    let out = apply_hook!(v, ctx, node, visit_method_invocation);
    ctx.cursor.pop();
    out
}

pub fn refactor_new_array(
    v: &mut dyn JavaRefactorVisitor,
    node: NewArray,
    ctx: &mut RefactorCtx,
) -> NewArray {
    ctx.cursor.push(node.id, NodeKind::NewArray);
    let NewArray {
        id,
        fmt,
        type_expr,
        dimensions,
        initializer,
        typ,
    } = node;
    let node = NewArray {
        id,
        fmt,
        type_expr: type_expr.map(|t| refactor_type_tree(v, t, ctx)),
        dimensions: dimensions
            .into_iter()
            .map(|d| NewArrayDim {
                size: refactor_expression(v, d.size, ctx),
                fmt: d.fmt,
            })
            .collect(),
        initializer: initializer.map(|i| ArrayInit {
            elements: i
                .elements
                .into_iter()
                .map(|e| refactor_expression(v, e, ctx))
                .collect(),
            fmt: i.fmt,
        }),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_new_array);
    ctx.cursor.pop();
    out
}

pub fn refactor_new_class(
    v: &mut dyn JavaRefactorVisitor,
    node: NewClass,
    ctx: &mut RefactorCtx,
) -> NewClass {
    ctx.cursor.push(node.id, NodeKind::NewClass);
    let NewClass {
        id,
        fmt,
        clazz,
        args,
        body,
        typ,
    } = node;
    let node = NewClass {
        id,
        fmt,
        clazz: refactor_type_tree(v, clazz, ctx),
        args: refactor_args(v, args, ctx),
        body: body.map(|b| refactor_block(v, b, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_new_class);
    ctx.cursor.pop();
    out
}

pub fn refactor_parentheses(
    v: &mut dyn JavaRefactorVisitor,
    node: Parens<Expression>,
    ctx: &mut RefactorCtx,
) -> Parens<Expression> {
    ctx.cursor.push(node.id, NodeKind::Parentheses);
    let Parens { id, fmt, tree } = node;
    let node = Parens {
        id,
        fmt,
        tree: Box::new(refactor_expression(v, *tree, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_parentheses);
    ctx.cursor.pop();
    out
}

pub fn refactor_ternary(
    v: &mut dyn JavaRefactorVisitor,
    node: Ternary,
    ctx: &mut RefactorCtx,
) -> Ternary {
    ctx.cursor.push(node.id, NodeKind::Ternary);
    let Ternary {
        id,
        fmt,
        condition,
        true_part,
        false_part,
        typ,
    } = node;
    let node = Ternary {
        id,
        fmt,
        condition: Box::new(refactor_expression(v, *condition, ctx)),
        true_part: Box::new(refactor_expression(v, *true_part, ctx)),
        false_part: Box::new(refactor_expression(v, *false_part, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_ternary);
    ctx.cursor.pop();
    out
}

pub fn refactor_type_cast(
    v: &mut dyn JavaRefactorVisitor,
    node: TypeCast,
    ctx: &mut RefactorCtx,
) -> TypeCast {
    ctx.cursor.push(node.id, NodeKind::TypeCast);
    let TypeCast {
        id,
        fmt,
        clazz,
        expr,
    } = node;
    let Parens {
        id: paren_id,
        fmt: paren_fmt,
        tree,
    } = clazz;
    let node = TypeCast {
        id,
        fmt,
        clazz: Parens {
            id: paren_id,
            fmt: paren_fmt,
            tree: Box::new(refactor_type_tree(v, *tree, ctx)),
        },
        expr: Box::new(refactor_expression(v, *expr, ctx)),
    };
    let out = apply_hook!(v, ctx, node, visit_type_cast);
    ctx.cursor.pop();
    out
}

pub fn refactor_unary(
    v: &mut dyn JavaRefactorVisitor,
    node: Unary,
    ctx: &mut RefactorCtx,
) -> Unary {
    ctx.cursor.push(node.id, NodeKind::Unary);
    let Unary {
        id,
        fmt,
        operator,
        expr,
        typ,
    } = node;
    let node = Unary {
        id,
        fmt,
        operator,
        expr: Box::new(refactor_expression(v, *expr, ctx)),
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_unary);
    ctx.cursor.pop();
    out
}

// ============================================================================
// Type trees
// ============================================================================

pub fn refactor_type_tree(
    v: &mut dyn JavaRefactorVisitor,
    node: TypeTree,
    ctx: &mut RefactorCtx,
) -> TypeTree {
    match node {
        TypeTree::Ident(n) => TypeTree::Ident(refactor_ident(v, n, ctx)),
        TypeTree::FieldAccess(n) => TypeTree::FieldAccess(refactor_field_access(v, n, ctx)),
        TypeTree::Array(n) => TypeTree::Array(refactor_array_type(v, n, ctx)),
        TypeTree::Parameterized(n) => {
            TypeTree::Parameterized(refactor_parameterized_type(v, n, ctx))
        }
        TypeTree::Primitive(n) => TypeTree::Primitive(refactor_primitive(v, n, ctx)),
        TypeTree::Wildcard(n) => TypeTree::Wildcard(refactor_wildcard(v, n, ctx)),
        TypeTree::MultiCatch(n) => TypeTree::MultiCatch(refactor_multi_catch(v, n, ctx)),
    }
}

pub fn refactor_array_type(
    v: &mut dyn JavaRefactorVisitor,
    node: ArrayType,
    ctx: &mut RefactorCtx,
) -> ArrayType {
    ctx.cursor.push(node.id, NodeKind::ArrayType);
    let ArrayType {
        id,
        fmt,
        element_type,
        dimensions,
        typ,
    } = node;
    let node = ArrayType {
        id,
        fmt,
        element_type: Box::new(refactor_type_tree(v, *element_type, ctx)),
        dimensions,
        typ,
    };
    let out = apply_hook!(v, ctx, node, visit_array_type);
    ctx.cursor.pop();
    out
}

pub fn refactor_parameterized_type(
    v: &mut dyn JavaRefactorVisitor,
    node: ParameterizedType,
    ctx: &mut RefactorCtx,
) -> ParameterizedType {
    ctx.cursor.push(node.id, NodeKind::ParameterizedType);
    let ParameterizedType {
        id,
        fmt,
        clazz,
        type_arguments,
    } = node;
    let node = ParameterizedType {
        id,
        fmt,
        clazz: Box::new(refactor_type_tree(v, *clazz, ctx)),
        type_arguments: type_arguments
            .into_iter()
            .map(|t| refactor_type_tree(v, t, ctx))
            .collect(),
    };
    let out = apply_hook!(v, ctx, node, visit_parameterized_type);
    ctx.cursor.pop();
    out
}

pub fn refactor_primitive(
    v: &mut dyn JavaRefactorVisitor,
    node: Primitive,
    ctx: &mut RefactorCtx,
) -> Primitive {
    ctx.cursor.push(node.id, NodeKind::Primitive);
    let out = apply_hook!(v, ctx, node, visit_primitive);
    ctx.cursor.pop();
    out
}

pub fn refactor_wildcard(
    v: &mut dyn JavaRefactorVisitor,
    node: Wildcard,
    ctx: &mut RefactorCtx,
) -> Wildcard {
    ctx.cursor.push(node.id, NodeKind::Wildcard);
    let Wildcard {
        id,
        fmt,
        bound,
        bounded_type,
    } = node;
    let node = Wildcard {
        id,
        fmt,
        bound,
        bounded_type: bounded_type.map(|t| Box::new(refactor_type_tree(v, *t, ctx))),
    };
    let out = apply_hook!(v, ctx, node, visit_wildcard);
    ctx.cursor.pop();
    out
}

pub fn refactor_multi_catch(
    v: &mut dyn JavaRefactorVisitor,
    node: MultiCatch,
    ctx: &mut RefactorCtx,
) -> MultiCatch {
    ctx.cursor.push(node.id, NodeKind::MultiCatch);
    let MultiCatch {
        id,
        fmt,
        alternatives,
    } = node;
    let node = MultiCatch {
        id,
        fmt,
        alternatives: alternatives
            .into_iter()
            .map(|t| refactor_type_tree(v, t, ctx))
            .collect(),
    };
    let out = apply_hook!(v, ctx, node, visit_multi_catch);
    ctx.cursor.pop();
    out
}

// ============================================================================
// Tests
// ============================================================================
