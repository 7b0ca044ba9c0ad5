//! Rewrite every reference to one type so it references another.

use std::sync::Arc;

use rejig_core::Fix;
use rejig_java_cst::nodes::{
    CompilationUnit, FieldAccess, Ident, NodeKind,
};
use rejig_java_cst::types::{ClassType, JavaType};
use rejig_java_cst::visitor::RefactorCtx;
use rejig_java_cst::{JavaRefactorVisitor, Print};

use super::add_import::{import_of, insert_import};
use super::package_of;

/// Rewrites every identifier and qualified-name node whose resolved type is
/// `from` to reference `to`, preserving the qualification style at each
/// site: a simple name stays simple, a fully qualified name stays fully
/// qualified. The import for `from` flips to `to` (or one is added when the
/// unit had none); a unit without references to `from` is left untouched.
pub struct ChangeType {
    from: String,
    to: Arc<ClassType>,
    changes: usize,
    simple_references: usize,
}

impl ChangeType {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        ChangeType {
            from: from.into(),
            to: ClassType::build(to.into()),
            changes: 0,
            simple_references: 0,
        }
    }

    fn from_simple_name(&self) -> &str {
        self.from.rsplit('.').next().unwrap_or(&self.from)
    }

    /// True when `typ` resolves to `from`, looking through arrays.
    fn references_from(&self, typ: &JavaType) -> bool {
        match typ {
            JavaType::Class(c) => c.fully_qualified_name() == self.from,
            JavaType::Array(elem) => self.references_from(elem),
            _ => false,
        }
    }
}

impl JavaRefactorVisitor for ChangeType {
    fn visit_ident(&mut self, node: Ident, ctx: &mut RefactorCtx) -> Ident {
        if node.simple_name != self.from_simple_name() {
            return node;
        }
        // Qualified references rewrite at the field-access level; names
        // inside imports are handled when the import itself flips.
        let parent = ctx.cursor().parent().map(|entry| entry.kind);
        if matches!(parent, Some(NodeKind::FieldAccess) | Some(NodeKind::Import)) {
            return node;
        }
        match &node.typ {
            Some(typ) if self.references_from(typ) => {
                self.changes += 1;
                self.simple_references += 1;
                node.with_simple_name(self.to.class_name())
                    .with_type(Some(JavaType::Class(self.to.clone())))
            }
            Some(_) => node,
            // A method name identifier carries no type of its own.
            None if parent == Some(NodeKind::MethodInvocation) => node,
            None => {
                ctx.warn(
                    Some(node.id),
                    format!("identifier '{}' has no resolved type; skipped", node.simple_name),
                );
                node
            }
        }
    }

    fn visit_field_access(&mut self, node: FieldAccess, ctx: &mut RefactorCtx) -> FieldAccess {
        // Only fully qualified type references, not member selections.
        if matches!(
            ctx.cursor().parent().map(|entry| entry.kind),
            Some(NodeKind::Import)
        ) {
            return node;
        }
        let is_reference = node
            .typ
            .as_ref()
            .map(|typ| self.references_from(typ))
            .unwrap_or(false);
        if !is_reference || node.flat_name() != self.from {
            return node;
        }

        self.changes += 1;
        let renamed = node.name.clone().with_simple_name(self.to.class_name());
        let mut rewritten = if package_of(&self.from) == self.to.package_name() {
            node.with_name(renamed)
        } else {
            let fresh = import_of(self.to.fully_qualified_name(), rejig_java_cst::Formatting::None);
            FieldAccess {
                target: fresh.qualid.target.clone(),
                name: renamed,
                ..node
            }
        };
        rewritten.typ = Some(JavaType::Class(self.to.clone()));
        rewritten
    }

    fn visit_compilation_unit(
        &mut self,
        node: CompilationUnit,
        ctx: &mut RefactorCtx,
    ) -> CompilationUnit {
        if self.changes == 0 {
            return node;
        }

        let mut flipped = false;
        let mut imports = Vec::with_capacity(node.imports.len());
        for import in node.imports.iter() {
            if !import.is_static() && !import.is_star() && import.qualified_name() == self.from {
                let renamed = import
                    .qualid
                    .name
                    .clone()
                    .with_simple_name(self.to.class_name());
                let new_qualid = if package_of(&self.from) == self.to.package_name() {
                    import.qualid.clone().with_name(renamed)
                } else {
                    let fresh = import_of(
                        self.to.fully_qualified_name(),
                        rejig_java_cst::Formatting::None,
                    );
                    FieldAccess {
                        target: fresh.qualid.target.clone(),
                        name: renamed,
                        ..import.qualid.clone()
                    }
                };
                let new_import = import.clone().with_qualid(new_qualid);
                let span = ctx.spans().full(import.id);
                match span {
                    Some(span) => ctx.emit_fix(Fix::replace(span, new_import.print())),
                    None => ctx.warn(Some(import.id), "import has no recorded source extent"),
                }
                imports.push(new_import);
                flipped = true;
            } else {
                imports.push(import.clone());
            }
        }

        let node = node.with_imports(imports);
        if flipped || self.simple_references == 0 {
            node
        } else {
            // Simple-name references with no import to flip: bring one in.
            let to_fqn = self.to.fully_qualified_name().to_string();
            insert_import(node, ctx, &to_fqn)
        }
    }
}
