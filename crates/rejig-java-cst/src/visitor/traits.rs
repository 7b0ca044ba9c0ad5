//! Visitor trait definitions.
//!
//! Two traversal styles share the tree:
//!
//! - [`JavaVisitor`] is read-only: one `visit_*`/`leave_*` pair per node
//!   kind, with [`VisitResult`] controlling descent. The search collectors
//!   are built on it.
//! - [`JavaRefactorVisitor`] rewrites: one `visit_*` hook per node kind that
//!   takes the node by value (children already transformed) and returns its
//!   replacement. Hooks may also emit explicit fixes and warnings through
//!   the [`RefactorCtx`](super::RefactorCtx).

use crate::nodes::*;

use super::refactor::RefactorCtx;

/// Result of visiting a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    #[default]
    Continue,
    /// Skip children, continue with siblings. `leave_*` is still called.
    SkipChildren,
    /// Stop traversal entirely.
    Stop,
}

/// Generate `visit_*`/`leave_*` pairs with default implementations.
macro_rules! visitor_methods {
    (
        $(
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node before its children.")]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &$node_type) -> VisitResult {
                    VisitResult::Continue
                }

                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node after its children.")]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &$node_type) {}
            )*
        }
    };
}

/// Generate rewriting hooks with identity defaults.
macro_rules! refactor_methods {
    (
        $(
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                #[doc = concat!("Transform a [`", stringify!($node_type), "`] node. Children have already been transformed.")]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: $node_type, ctx: &mut RefactorCtx) -> $node_type {
                    node
                }
            )*
        }
    };
}

macro_rules! java_node_kinds {
    ($apply:ident) => {
        $apply! {
            compilation_unit: CompilationUnit,
            package_decl: Package,
            import_decl: Import,
            class_decl: ClassDecl,
            method_decl: MethodDecl,
            variable_decls: VariableDecls,
            named_var: NamedVar,
            block: Block,
            annotation: Annotation,
            array_access: ArrayAccess,
            array_type: ArrayType,
            assign: Assign,
            assign_op: AssignOp,
            binary: Binary,
            break_stmt: Break,
            case: Case,
            catch: Catch,
            continue_stmt: Continue,
            do_while_loop: DoWhileLoop,
            empty: Empty,
            enum_value: EnumValue,
            enum_value_set: EnumValueSet,
            field_access: FieldAccess,
            for_each_loop: ForEachLoop,
            for_loop: ForLoop,
            ident: Ident,
            if_stmt: If,
            instance_of: InstanceOf,
            label: Label,
            lambda: Lambda,
            literal: Literal,
            method_invocation: MethodInvocation,
            multi_catch: MultiCatch,
            new_array: NewArray,
            new_class: NewClass,
            parameterized_type: ParameterizedType,
            parentheses: Parens<Expression>,
            primitive: Primitive,
            return_stmt: Return,
            switch_stmt: Switch,
            synchronized: Synchronized,
            ternary: Ternary,
            throw: Throw,
            try_stmt: Try,
            type_cast: TypeCast,
            type_parameter: TypeParameter,
            type_parameters: TypeParameters,
            unary: Unary,
            while_loop: WhileLoop,
            wildcard: Wildcard,
        }
    };
}

/// Read-only, depth-first traversal over the Java tree.
///
/// `visit_*` is called in pre-order, `leave_*` in post-order; children are
/// visited in source order. Collectors track their own context (for example
/// a scope path) in matching `visit_*`/`leave_*` pairs.
///
/// # Example
///
/// ```ignore
/// struct IdentCounter {
///     count: usize,
/// }
///
/// impl JavaVisitor for IdentCounter {
///     fn visit_ident(&mut self, _node: &Ident) -> VisitResult {
///         self.count += 1;
///         VisitResult::Continue
///     }
/// }
/// ```
pub trait JavaVisitor {
    java_node_kinds!(visitor_methods);
}

/// A rewriting visitor.
///
/// The framework walks the tree depth-first, transforms each node's children,
/// reassembles the node, and hands it to the matching hook; whatever the hook
/// returns replaces the node. The [`RefactorCtx`](super::RefactorCtx) carries
/// the ancestor cursor, the span table of the printed input, and the fixes
/// and warnings collected so far.
pub trait JavaRefactorVisitor {
    java_node_kinds!(refactor_methods);
}
