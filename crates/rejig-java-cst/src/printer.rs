//! Deterministic, lossless printing.
//!
//! Every node prints as `prefix + tokens + children + suffix`; for a freshly
//! parsed tree the concatenation reproduces the original source byte for
//! byte. Printing can also record a [`SpanTable`] giving, per node id, the
//! full extent (prefix through suffix) and the content extent (tokens only).
//! The refactor pipeline uses the full extent when deriving replacement
//! fixes, so a fix's text can simply be the replacement node's own print.
//!
//! ## Formatting inference
//!
//! A node inserted with [`Formatting::Infer`] is reified at print time: an
//! import copies the prefix of the import before it (falling back to a
//! newline), everything else prints with empty surroundings. Operations that
//! insert nodes normally reify formatting themselves at construction; the
//! printer rules are the backstop.

use std::collections::HashMap;

use rejig_core::Span;
use thiserror::Error;

use crate::nodes::*;

// ============================================================================
// Span table
// ============================================================================

/// Source extents recorded for each node during printing.
#[derive(Debug, Default, Clone)]
pub struct SpanTable {
    full: HashMap<NodeId, Span>,
    content: HashMap<NodeId, Span>,
}

impl SpanTable {
    pub fn new() -> Self {
        SpanTable::default()
    }

    /// The extent covering the node's prefix, tokens, children, and suffix.
    pub fn full(&self, id: NodeId) -> Option<Span> {
        self.full.get(&id).copied()
    }

    /// The extent covering only tokens and children.
    pub fn content(&self, id: NodeId) -> Option<Span> {
        self.content.get(&id).copied()
    }

    /// The node with the smallest full extent containing `offset`.
    pub fn innermost_at(&self, offset: usize) -> Option<NodeId> {
        self.full
            .iter()
            .filter(|(_, span)| span.start <= offset && offset < span.end.max(span.start + 1))
            .min_by_key(|(_, span)| span.len())
            .map(|(id, _)| *id)
    }
}

// ============================================================================
// Print errors
// ============================================================================

/// Internal printing invariant failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// Printing a freshly parsed tree did not reproduce its source. This is
    /// a programmer error in the parser, surfaced with the offending subtree.
    #[error("printed tree diverges from source at offset {offset} (node {node_id})")]
    RoundTripMismatch { node_id: NodeId, offset: usize },
}

/// Check that `cu` prints back to `source` exactly.
///
/// On mismatch, reports the innermost node whose extent covers the first
/// diverging byte.
pub fn verify_round_trip(cu: &CompilationUnit, source: &str) -> Result<(), PrintError> {
    let (printed, spans) = cu.print_with_spans();
    if printed == source {
        return Ok(());
    }
    let offset = printed
        .bytes()
        .zip(source.bytes())
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| printed.len().min(source.len()));
    Err(PrintError::RoundTripMismatch {
        node_id: spans.innermost_at(offset).unwrap_or(cu.id),
        offset,
    })
}

// ============================================================================
// Print state
// ============================================================================

/// Accumulates printed output and, optionally, node spans.
#[derive(Debug, Default)]
pub struct PrintState {
    buf: String,
    spans: Option<SpanTable>,
}

impl PrintState {
    pub fn new() -> Self {
        PrintState::default()
    }

    /// A state that records node spans while printing.
    pub fn with_spans() -> Self {
        PrintState {
            buf: String::new(),
            spans: Some(SpanTable::new()),
        }
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Print one node: prefix, then `tokens`, then suffix, recording spans.
    pub fn node<F: FnOnce(&mut Self)>(&mut self, id: NodeId, fmt: &Formatting, tokens: F) {
        self.node_with(id, fmt.prefix(), fmt.suffix(), tokens)
    }

    fn node_with<F: FnOnce(&mut Self)>(&mut self, id: NodeId, prefix: &str, suffix: &str, tokens: F) {
        let full_start = self.buf.len();
        self.push(prefix);
        let content_start = self.buf.len();
        tokens(self);
        let content_end = self.buf.len();
        self.push(suffix);
        if let Some(spans) = &mut self.spans {
            spans.full.insert(id, Span::new(full_start, self.buf.len()));
            spans.content.insert(id, Span::new(content_start, content_end));
        }
    }

    /// Print a comma-separated list of printable children.
    fn join<T: Print>(&mut self, items: &[T], separator: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            item.print_to(self);
        }
    }

    /// Print a statement followed by its terminator.
    fn statement(&mut self, stmt: &Statement) {
        stmt.print_to(self);
        self.push(statement_terminator(stmt));
    }

    pub fn finish(self) -> (String, Option<SpanTable>) {
        (self.buf, self.spans)
    }
}

/// The token that closes a statement in a statement position. Braced and
/// clause-bearing statements terminate themselves; everything else takes a
/// semicolon from its enclosing context.
fn statement_terminator(stmt: &Statement) -> &'static str {
    match stmt {
        Statement::Break(_)
        | Statement::Continue(_)
        | Statement::DoWhileLoop(_)
        | Statement::Empty(_)
        | Statement::Expression(_)
        | Statement::Return(_)
        | Statement::Throw(_)
        | Statement::VariableDecls(_) => ";",
        Statement::Label(label) => statement_terminator(&label.statement),
        _ => "",
    }
}

// ============================================================================
// Print trait
// ============================================================================

/// Emit a node's lossless source form into a [`PrintState`].
pub trait Print {
    fn print_to(&self, state: &mut PrintState);

    /// Convenience: print this node alone.
    fn print(&self) -> String {
        let mut state = PrintState::new();
        self.print_to(&mut state);
        state.finish().0
    }
}

impl CompilationUnit {
    /// Print the unit and record every node's extents.
    pub fn print_with_spans(&self) -> (String, SpanTable) {
        let mut state = PrintState::with_spans();
        self.print_to(&mut state);
        let (buf, spans) = state.finish();
        (buf, spans.unwrap_or_default())
    }
}

// ============================================================================
// Compilation unit and declarations
// ============================================================================

impl Print for CompilationUnit {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            if let Some(package) = &self.package {
                package.print_to(s);
            }
            let mut previous_prefix: Option<String> = None;
            for import in &self.imports {
                if import.fmt.is_infer() {
                    let prefix = previous_prefix.clone().unwrap_or_else(|| "\n".to_string());
                    let reified = Import {
                        fmt: Formatting::prefixed(prefix),
                        ..import.clone()
                    };
                    reified.print_to(s);
                    previous_prefix = Some(reified.fmt.prefix().to_string());
                } else {
                    import.print_to(s);
                    previous_prefix = Some(import.fmt.prefix().to_string());
                }
            }
            for class in &self.classes {
                class.print_to(s);
            }
        })
    }
}

impl Print for Package {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("package");
            self.expr.print_to(s);
            s.push(";");
        })
    }
}

impl Print for Import {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("import");
            if let Some(statik) = &self.statik {
                s.push(statik.prefix());
                s.push("static");
                s.push(statik.suffix());
            }
            self.qualid.print_to(s);
            s.push(";");
        })
    }
}

impl Print for ClassDecl {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            for annotation in &self.annotations {
                annotation.print_to(s);
            }
            for modifier in &self.modifiers {
                modifier.print_to(s);
            }
            let kind_fmt = self.kind.formatting();
            s.push(kind_fmt.prefix());
            s.push(self.kind.token());
            s.push(kind_fmt.suffix());
            self.name.print_to(s);
            if let Some(type_parameters) = &self.type_parameters {
                type_parameters.print_to(s);
            }
            if let Some(extends) = &self.extends {
                extends.print_to(s);
            }
            if let Some(implements) = &self.implements {
                implements.print_to(s);
            }
            self.body.print_to(s);
        })
    }
}

impl Print for Modifier {
    fn print_to(&self, state: &mut PrintState) {
        let fmt = self.formatting();
        state.push(fmt.prefix());
        state.push(self.token());
        state.push(fmt.suffix());
    }
}

impl Print for Extends {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("extends");
            self.from.print_to(s);
        })
    }
}

impl Print for Implements {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("implements");
            s.join(&self.from, ",");
        })
    }
}

impl Print for Annotation {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("@");
            self.annotation_type.print_to(s);
            if let Some(args) = &self.args {
                args.print_to(s);
            }
        })
    }
}

impl Print for MethodDecl {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            for annotation in &self.annotations {
                annotation.print_to(s);
            }
            for modifier in &self.modifiers {
                modifier.print_to(s);
            }
            if let Some(type_parameters) = &self.type_parameters {
                type_parameters.print_to(s);
            }
            if let Some(return_type) = &self.return_type {
                return_type.print_to(s);
            }
            self.name.print_to(s);
            self.params.print_to(s);
            if let Some(throws) = &self.throws {
                throws.print_to(s);
            }
            match &self.body {
                Some(body) => body.print_to(s),
                None => s.push(";"),
            }
        })
    }
}

impl Print for Parameters {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("(");
            s.join(&self.params, ",");
            s.push(")");
        })
    }
}

impl Print for Throws {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("throws");
            s.join(&self.exceptions, ",");
        })
    }
}

impl Print for VariableDecls {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            for annotation in &self.annotations {
                annotation.print_to(s);
            }
            for modifier in &self.modifiers {
                modifier.print_to(s);
            }
            if let Some(type_expr) = &self.type_expr {
                type_expr.print_to(s);
            }
            if let Some(varargs) = &self.varargs {
                s.push(varargs.prefix());
                s.push("...");
                s.push(varargs.suffix());
            }
            for dim in &self.dims_before_name {
                dim.print_to(s);
            }
            s.join(&self.vars, ",");
        })
    }
}

impl Print for NamedVar {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.name.print_to(s);
            for dim in &self.dims_after_name {
                dim.print_to(s);
            }
            if let Some(initializer) = &self.initializer {
                s.push("=");
                initializer.print_to(s);
            }
        })
    }
}

// ============================================================================
// Statements
// ============================================================================

impl Print for Statement {
    fn print_to(&self, state: &mut PrintState) {
        match self {
            Statement::Block(n) => n.print_to(state),
            Statement::Break(n) => n.print_to(state),
            Statement::Case(n) => n.print_to(state),
            Statement::Catch(n) => n.print_to(state),
            Statement::ClassDecl(n) => n.print_to(state),
            Statement::Continue(n) => n.print_to(state),
            Statement::DoWhileLoop(n) => n.print_to(state),
            Statement::Empty(n) => n.print_to(state),
            Statement::EnumValueSet(n) => n.print_to(state),
            Statement::Expression(n) => n.print_to(state),
            Statement::ForEachLoop(n) => n.print_to(state),
            Statement::ForLoop(n) => n.print_to(state),
            Statement::If(n) => n.print_to(state),
            Statement::Label(n) => n.print_to(state),
            Statement::MethodDecl(n) => n.print_to(state),
            Statement::Return(n) => n.print_to(state),
            Statement::Switch(n) => n.print_to(state),
            Statement::Synchronized(n) => n.print_to(state),
            Statement::Throw(n) => n.print_to(state),
            Statement::Try(n) => n.print_to(state),
            Statement::VariableDecls(n) => n.print_to(state),
            Statement::WhileLoop(n) => n.print_to(state),
        }
    }
}

impl Print for Block {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("{");
            for stmt in &self.statements {
                s.statement(stmt);
            }
            s.push(&self.end_of_block_suffix);
            s.push("}");
        })
    }
}

impl Print for Break {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("break");
            if let Some(label) = &self.label {
                label.print_to(s);
            }
        })
    }
}

impl Print for Continue {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("continue");
            if let Some(label) = &self.label {
                label.print_to(s);
            }
        })
    }
}

impl Print for Case {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            match &self.pattern {
                Some(pattern) => {
                    s.push("case");
                    pattern.print_to(s);
                }
                None => s.push("default"),
            }
            s.push(":");
            for stmt in &self.statements {
                s.statement(stmt);
            }
        })
    }
}

impl Print for Catch {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("catch");
            self.param.print_to(s);
            self.body.print_to(s);
        })
    }
}

impl Print for DoWhileLoop {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("do");
            s.statement(&self.body);
            s.push(self.while_kw.prefix());
            s.push("while");
            s.push(self.while_kw.suffix());
            self.condition.print_to(s);
        })
    }
}

impl Print for EnumValue {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.name.print_to(s);
            if let Some(initializer) = &self.initializer {
                initializer.print_to(s);
            }
        })
    }
}

impl Print for EnumValueSet {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.join(&self.values, ",");
            if self.terminated_with_semicolon {
                s.push(";");
            }
        })
    }
}

impl Print for ForEachLoop {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("for");
            self.control.print_to(s);
            s.statement(&self.body);
        })
    }
}

impl Print for ForEachControl {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("(");
            self.variable.print_to(s);
            s.push(":");
            self.iterable.print_to(s);
            s.push(")");
        })
    }
}

impl Print for ForLoop {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("for");
            self.control.print_to(s);
            s.statement(&self.body);
        })
    }
}

impl Print for ForControl {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("(");
            self.init.print_to(s);
            s.push(";");
            self.condition.print_to(s);
            s.push(";");
            s.join(&self.update, ",");
            s.push(")");
        })
    }
}

impl Print for If {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("if");
            self.condition.print_to(s);
            s.statement(&self.then_part);
            if let Some(else_part) = &self.else_part {
                else_part.print_to(s);
            }
        })
    }
}

impl Print for Else {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("else");
            s.statement(&self.body);
        })
    }
}

impl Print for Label {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.label.print_to(s);
            s.push(":");
            self.statement.print_to(s);
        })
    }
}

impl Print for Return {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("return");
            if let Some(expr) = &self.expr {
                expr.print_to(s);
            }
        })
    }
}

impl Print for Switch {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("switch");
            self.selector.print_to(s);
            self.cases.print_to(s);
        })
    }
}

impl Print for Synchronized {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("synchronized");
            self.lock.print_to(s);
            self.body.print_to(s);
        })
    }
}

impl Print for Throw {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("throw");
            self.exception.print_to(s);
        })
    }
}

impl Print for Try {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("try");
            if let Some(resources) = &self.resources {
                resources.print_to(s);
            }
            self.body.print_to(s);
            for catch in &self.catches {
                catch.print_to(s);
            }
            if let Some(finally_block) = &self.finally_block {
                finally_block.print_to(s);
            }
        })
    }
}

impl Print for TryResources {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("(");
            s.join(&self.decls, ";");
            s.push(")");
        })
    }
}

impl Print for Finally {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("finally");
            self.block.print_to(s);
        })
    }
}

impl Print for TypeParameters {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("<");
            s.join(&self.params, ",");
            s.push(">");
        })
    }
}

impl Print for TypeParameter {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            for annotation in &self.annotations {
                annotation.print_to(s);
            }
            self.name.print_to(s);
            if let Some(bounds) = &self.bounds {
                bounds.print_to(s);
            }
        })
    }
}

impl Print for Bounds {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("extends");
            s.join(&self.types, "&");
        })
    }
}

impl Print for WhileLoop {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("while");
            self.condition.print_to(s);
            s.statement(&self.body);
        })
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl Print for Expression {
    fn print_to(&self, state: &mut PrintState) {
        match self {
            Expression::ArrayAccess(n) => n.print_to(state),
            Expression::Assign(n) => n.print_to(state),
            Expression::AssignOp(n) => n.print_to(state),
            Expression::Binary(n) => n.print_to(state),
            Expression::Empty(n) => n.print_to(state),
            Expression::FieldAccess(n) => n.print_to(state),
            Expression::Ident(n) => n.print_to(state),
            Expression::InstanceOf(n) => n.print_to(state),
            Expression::Lambda(n) => n.print_to(state),
            Expression::Literal(n) => n.print_to(state),
            Expression::MethodInvocation(n) => n.print_to(state),
            Expression::NewArray(n) => n.print_to(state),
            Expression::NewClass(n) => n.print_to(state),
            Expression::Parentheses(n) => n.print_to(state),
            Expression::Ternary(n) => n.print_to(state),
            Expression::TypeCast(n) => n.print_to(state),
            Expression::Unary(n) => n.print_to(state),
        }
    }
}

impl Print for Empty {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |_| {})
    }
}

impl Print for Ident {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| s.push(&self.simple_name))
    }
}

impl Print for FieldAccess {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.target.print_to(s);
            s.push(".");
            self.name.print_to(s);
        })
    }
}

impl Print for Literal {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| s.push(&self.value_source))
    }
}

impl Print for ArrayAccess {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.indexed.print_to(s);
            s.push(self.dim_fmt.prefix());
            s.push("[");
            self.index.print_to(s);
            s.push("]");
            s.push(self.dim_fmt.suffix());
        })
    }
}

impl Print for Assign {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.variable.print_to(s);
            s.push("=");
            self.assignment.print_to(s);
        })
    }
}

impl Print for AssignOp {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.variable.print_to(s);
            let op_fmt = self.operator.formatting();
            s.push(op_fmt.prefix());
            s.push(self.operator.token());
            s.push(op_fmt.suffix());
            self.assignment.print_to(s);
        })
    }
}

impl Print for Binary {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.left.print_to(s);
            let op_fmt = self.operator.formatting();
            s.push(op_fmt.prefix());
            s.push(self.operator.token());
            s.push(op_fmt.suffix());
            self.right.print_to(s);
        })
    }
}

impl Print for InstanceOf {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.expr.print_to(s);
            s.push("instanceof");
            self.clazz.print_to(s);
        })
    }
}

impl Print for Lambda {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            if self.parenthesized {
                s.push("(");
                s.join(&self.params, ",");
                s.push(")");
            } else {
                s.join(&self.params, ",");
            }
            s.push(self.arrow.prefix());
            s.push("->");
            s.push(self.arrow.suffix());
            match &self.body {
                LambdaBody::Expr(expr) => expr.print_to(s),
                LambdaBody::Block(block) => block.print_to(s),
            }
        })
    }
}

impl Print for MethodInvocation {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            if let Some(select) = &self.select {
                select.print_to(s);
                s.push(".");
            }
            if let Some(type_parameters) = &self.type_parameters {
                type_parameters.print_to(s);
            }
            self.name.print_to(s);
            self.args.print_to(s);
        })
    }
}

impl Print for Args {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("(");
            s.join(&self.args, ",");
            s.push(")");
        })
    }
}

impl Print for NewArray {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("new");
            if let Some(type_expr) = &self.type_expr {
                type_expr.print_to(s);
            }
            for dim in &self.dimensions {
                s.push(dim.fmt.prefix());
                s.push("[");
                dim.size.print_to(s);
                s.push("]");
                s.push(dim.fmt.suffix());
            }
            if let Some(initializer) = &self.initializer {
                s.push(initializer.fmt.prefix());
                s.push("{");
                s.join(&initializer.elements, ",");
                s.push("}");
                s.push(initializer.fmt.suffix());
            }
        })
    }
}

impl Print for NewClass {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("new");
            self.clazz.print_to(s);
            self.args.print_to(s);
            if let Some(body) = &self.body {
                body.print_to(s);
            }
        })
    }
}

impl Print for Ternary {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.condition.print_to(s);
            s.push("?");
            self.true_part.print_to(s);
            s.push(":");
            self.false_part.print_to(s);
        })
    }
}

impl Print for TypeCast {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.clazz.print_to(s);
            self.expr.print_to(s);
        })
    }
}

impl Print for Unary {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            let op_fmt = self.operator.formatting();
            if self.operator.is_postfix() {
                self.expr.print_to(s);
                s.push(op_fmt.prefix());
                s.push(self.operator.token());
                s.push(op_fmt.suffix());
            } else {
                s.push(op_fmt.prefix());
                s.push(self.operator.token());
                s.push(op_fmt.suffix());
                self.expr.print_to(s);
            }
        })
    }
}

impl<T: Print> Print for Parens<T> {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("(");
            self.tree.print_to(s);
            s.push(")");
        })
    }
}

// ============================================================================
// Type trees
// ============================================================================

impl Print for TypeTree {
    fn print_to(&self, state: &mut PrintState) {
        match self {
            TypeTree::Ident(n) => n.print_to(state),
            TypeTree::FieldAccess(n) => n.print_to(state),
            TypeTree::Array(n) => n.print_to(state),
            TypeTree::Parameterized(n) => n.print_to(state),
            TypeTree::Primitive(n) => n.print_to(state),
            TypeTree::Wildcard(n) => n.print_to(state),
            TypeTree::MultiCatch(n) => n.print_to(state),
        }
    }
}

impl Print for ArrayType {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.element_type.print_to(s);
            for dim in &self.dimensions {
                dim.print_to(s);
            }
        })
    }
}

impl Print for ArrayDim {
    fn print_to(&self, state: &mut PrintState) {
        state.push(self.fmt.prefix());
        state.push("[]");
        state.push(self.fmt.suffix());
    }
}

impl Print for ParameterizedType {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            self.clazz.print_to(s);
            s.push("<");
            s.join(&self.type_arguments, ",");
            s.push(">");
        })
    }
}

impl Print for Primitive {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| s.push(self.tag.keyword()))
    }
}

impl Print for Wildcard {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.push("?");
            if let Some(bound) = &self.bound {
                let (fmt, token) = match bound {
                    WildcardBound::Extends(f) => (f, "extends"),
                    WildcardBound::Super(f) => (f, "super"),
                };
                s.push(fmt.prefix());
                s.push(token);
                s.push(fmt.suffix());
            }
            if let Some(bounded_type) = &self.bounded_type {
                bounded_type.print_to(s);
            }
        })
    }
}

impl Print for MultiCatch {
    fn print_to(&self, state: &mut PrintState) {
        state.node(self.id, &self.fmt, |s| {
            s.join(&self.alternatives, "|");
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
