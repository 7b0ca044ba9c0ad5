//! The refactor transaction: staged visitors, fixes, and the patch.
//!
//! A [`Refactor`] is scoped to one compilation unit. Visitors are staged
//! with [`visit`](Refactor::visit) and [`fold`](Refactor::fold) and run in
//! staging order when [`fix`](Refactor::fix) is called. Each pass prints the
//! current tree with spans, runs the rewriting traversal, normalizes the
//! collected fixes (sorting, containment, overlap check), and applies them to
//! the pass's source; the next pass sees the transformed tree. The result
//! carries the fixed tree, a [`Patch`] (per-fix records plus the unified diff
//! from the original source), a `changed` flag, and any warnings.
//!
//! For a given input tree and staging order, `fix` is deterministic: same
//! tree in, same result out.

use thiserror::Error;
use tracing::{debug, warn};

use rejig_core::diff::unified_diff;
use rejig_core::{FixError, FixRecord, Patch};
use rejig_java_cst::nodes::{CompilationUnit, NodeId};
use rejig_java_cst::visitor::{refactor_compilation_unit, JavaRefactorVisitor, RefactorCtx, Warning};
use rejig_java_cst::Print;

/// Errors that abort a transaction.
#[derive(Debug, Error)]
pub enum RefactorError {
    /// Two fixes within one pass overlap, or a fix fell outside the source.
    #[error(transparent)]
    Fix(#[from] FixError),
}

/// The outcome of [`Refactor::fix`].
#[derive(Debug)]
pub struct RefactorResult {
    /// The transformed compilation unit.
    pub fixed: CompilationUnit,
    /// Per-fix records and the unified diff against the original source.
    pub patch: Patch,
    /// True when the fixed source differs from the original.
    pub changed: bool,
    /// Non-fatal conditions collected during traversal, e.g. nodes skipped
    /// for missing type resolution.
    pub warnings: Vec<Warning>,
}

/// A refactor transaction over one compilation unit.
///
/// # Example
///
/// ```ignore
/// let result = Refactor::new(cu)
///     .visit(ChangeType::new("a.A1", "a.A2"))
///     .fix()?;
/// assert!(result.changed);
/// println!("{}", result.patch.unified_diff);
/// ```
pub struct Refactor {
    cu: CompilationUnit,
    visitors: Vec<Box<dyn JavaRefactorVisitor>>,
}

impl Refactor {
    /// Begin a transaction over `cu`.
    pub fn new(cu: CompilationUnit) -> Self {
        Refactor {
            cu,
            visitors: Vec::new(),
        }
    }

    /// Stage a rewriting visitor. Visitors run in staging order; the output
    /// tree of one pass feeds the next.
    pub fn visit<V: JavaRefactorVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Stage one scoped visitor per anchor id.
    pub fn fold<V, F>(mut self, anchors: Vec<NodeId>, factory: F) -> Self
    where
        V: JavaRefactorVisitor + 'static,
        F: Fn(NodeId) -> V,
    {
        for anchor in anchors {
            self.visitors.push(Box::new(factory(anchor)));
        }
        self
    }

    /// Run the staged visitors and produce the fixed tree and patch.
    ///
    /// Overlapping fixes within a single pass abort the transaction with
    /// [`RefactorError::Fix`]; per-node conditions are collected as warnings
    /// on the result instead.
    pub fn fix(self) -> Result<RefactorResult, RefactorError> {
        let Refactor { cu, visitors } = self;

        let original_source = cu.print();
        let file = cu.source_path.clone();
        let mut tree = cu;
        let mut current_source = original_source.clone();
        let mut records: Vec<FixRecord> = Vec::new();
        let mut warnings: Vec<Warning> = Vec::new();

        for (pass, mut visitor) in visitors.into_iter().enumerate() {
            let (pass_source, spans) = tree.print_with_spans();
            let mut ctx = RefactorCtx::new(spans);
            tree = refactor_compilation_unit(visitor.as_mut(), tree, &mut ctx);
            let (fixes, pass_warnings) = ctx.into_parts();

            for warning in &pass_warnings {
                warn!(pass, node = ?warning.node_id, "{}", warning.message);
            }
            warnings.extend(pass_warnings);

            debug!(pass, fixes = fixes.len(), "applying refactor pass");
            let (next_source, normalized) = fixes.apply(&pass_source)?;
            records.extend(normalized.materialize(&pass_source, &file));
            current_source = next_source;
        }

        let changed = current_source != original_source;
        let patch = if changed {
            Patch {
                records,
                unified_diff: unified_diff(&original_source, &current_source, &file),
            }
        } else {
            Patch::empty()
        };

        Ok(RefactorResult {
            fixed: tree,
            patch,
            changed,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rejig_java_cst::nodes::*;
    use rejig_java_cst::types::PrimitiveTag;

    fn literal_unit(value_source: &str) -> (CompilationUnit, NodeId) {
        let literal = Literal::new(
            LiteralValue::Int(3),
            value_source,
            PrimitiveTag::Int,
            None,
            Formatting::prefixed(" "),
        );
        let literal_id = literal.id;
        let field = Statement::VariableDecls(VariableDecls::new(
            vec![],
            vec![],
            Some(TypeTree::Primitive(Primitive::new(
                PrimitiveTag::Int,
                Formatting::None,
            ))),
            vec![NamedVar::new(
                Ident::new("x", None, Formatting::reified("", " ")),
                Some(Expression::Literal(literal)),
                None,
                Formatting::prefixed(" "),
            )],
            Formatting::prefixed("\n    "),
        ));
        let class = ClassDecl::new(
            vec![],
            vec![],
            ClassKind::Class(Formatting::None),
            Ident::new("A", None, Formatting::prefixed(" ")),
            None,
            None,
            Block::new(vec![field], "\n", Formatting::prefixed(" ")),
            None,
            Formatting::None,
        );
        (
            CompilationUnit::new("A.java", None, vec![], vec![class], Formatting::reified("", "\n")),
            literal_id,
        )
    }

    #[test]
    fn identity_transaction_changes_nothing() {
        let (cu, _) = literal_unit("3");
        let before = cu.print();
        let result = Refactor::new(cu).fix().unwrap();
        assert!(!result.changed);
        assert!(result.patch.is_empty());
        assert_eq!(result.fixed.print(), before);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn a_visitor_pass_produces_a_patch() {
        struct SetLiteral;
        impl JavaRefactorVisitor for SetLiteral {
            fn visit_literal(
                &mut self,
                node: Literal,
                _ctx: &mut rejig_java_cst::RefactorCtx,
            ) -> Literal {
                node.with_value(LiteralValue::Int(7), "7")
            }
        }

        let (cu, _) = literal_unit("3");
        assert_eq!(cu.print(), "class A {\n    int x = 3;\n}\n");

        let result = Refactor::new(cu).visit(SetLiteral).fix().unwrap();
        assert!(result.changed);
        assert_eq!(result.fixed.print(), "class A {\n    int x = 7;\n}\n");
        assert_eq!(result.patch.records.len(), 1);
        assert_eq!(result.patch.records[0].old_text, " 3");
        assert_eq!(result.patch.records[0].new_text, " 7");
        assert!(result.patch.unified_diff.contains("-    int x = 3;"));
        assert!(result.patch.unified_diff.contains("+    int x = 7;"));
    }

    #[test]
    fn later_passes_see_earlier_output() {
        struct Increment;
        impl JavaRefactorVisitor for Increment {
            fn visit_literal(
                &mut self,
                node: Literal,
                _ctx: &mut rejig_java_cst::RefactorCtx,
            ) -> Literal {
                if let LiteralValue::Int(v) = node.value {
                    let next = v + 1;
                    node.with_value(LiteralValue::Int(next), next.to_string())
                } else {
                    node
                }
            }
        }

        let (cu, _) = literal_unit("3");
        let result = Refactor::new(cu)
            .visit(Increment)
            .visit(Increment)
            .fix()
            .unwrap();
        assert_eq!(result.fixed.print(), "class A {\n    int x = 5;\n}\n");
        assert_eq!(result.patch.records.len(), 2);
    }

    #[test]
    fn fold_stages_one_visitor_per_anchor() {
        struct ScopedBump {
            scope: NodeId,
        }
        impl JavaRefactorVisitor for ScopedBump {
            fn visit_literal(
                &mut self,
                node: Literal,
                ctx: &mut rejig_java_cst::RefactorCtx,
            ) -> Literal {
                if !ctx.is_scope_in_cursor_path(self.scope) {
                    return node;
                }
                node.with_value(LiteralValue::Int(9), "9")
            }
        }

        let (cu, literal_id) = literal_unit("3");
        let other_anchor = NodeId::next();

        // Only the anchor that is actually on the literal's path rewrites it.
        let result = Refactor::new(cu)
            .fold(vec![other_anchor, literal_id], |scope| ScopedBump { scope })
            .fix()
            .unwrap();
        assert_eq!(result.fixed.print(), "class A {\n    int x = 9;\n}\n");
    }
}
