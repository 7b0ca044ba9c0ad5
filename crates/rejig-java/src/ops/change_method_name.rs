//! Rename a single method invocation.

use std::sync::Arc;

use rejig_java_cst::nodes::{MethodInvocation, NodeId};
use rejig_java_cst::types::MethodType;
use rejig_java_cst::visitor::RefactorCtx;
use rejig_java_cst::JavaRefactorVisitor;

/// Replaces the name identifier of one invocation, anchored by node id.
/// Surrounding whitespace and argument formatting are untouched: only the
/// name changes within the invocation's printed form.
pub struct ChangeMethodName {
    scope: NodeId,
    name: String,
}

impl ChangeMethodName {
    /// Rename the invocation with id `scope` to `name`.
    pub fn new(scope: NodeId, name: impl Into<String>) -> Self {
        ChangeMethodName {
            scope,
            name: name.into(),
        }
    }

    /// Convenience constructor from the invocation node itself.
    pub fn for_invocation(invocation: &MethodInvocation, name: impl Into<String>) -> Self {
        ChangeMethodName::new(invocation.id, name)
    }
}

impl JavaRefactorVisitor for ChangeMethodName {
    fn visit_method_invocation(
        &mut self,
        node: MethodInvocation,
        ctx: &mut RefactorCtx,
    ) -> MethodInvocation {
        if !ctx.is_scope_in_cursor_path(self.scope) || node.id != self.scope {
            return node;
        }
        let name = node.name.clone().with_simple_name(&self.name);
        let method_type = node.method_type.clone().map(|m| {
            Arc::new(MethodType {
                name: self.name.clone(),
                ..(*m).clone()
            })
        });
        let mut renamed = node.with_name(name);
        renamed.method_type = method_type;
        renamed
    }
}
