//! Remove or narrow imports that are no longer referenced.

use rejig_core::Fix;
use rejig_java_cst::nodes::{CompilationUnit, Import};
use rejig_java_cst::visitor::{RefactorCtx, StaticMethodCollector, TypeReferenceCollector};
use rejig_java_cst::{JavaRefactorVisitor, Print};

use super::add_import::import_of;
use super::package_of;

/// Removes the imports of `clazz` that nothing in the unit still uses.
///
/// The scan distinguishes four import shapes against the unit's referenced
/// types and referenced static methods:
///
/// - a **named import** of `clazz` is deleted when no referenced type equals
///   `clazz`;
/// - a **star import** over `clazz`'s package is deleted when no referenced
///   type lives in that package, and narrowed to a single-type import when
///   exactly one class of the package remains referenced;
/// - a **static star import** of `clazz` is deleted when no static method of
///   `clazz` is referenced (statically imported fields do not keep it
///   alive);
/// - a **static named import** is deleted when its specific method is
///   unreferenced.
pub struct RemoveImport {
    clazz: String,
}

impl RemoveImport {
    pub fn new(clazz: impl Into<String>) -> Self {
        RemoveImport {
            clazz: clazz.into(),
        }
    }
}

enum Disposition {
    Keep,
    Delete,
    ReplaceWith(Import),
}

impl JavaRefactorVisitor for RemoveImport {
    fn visit_compilation_unit(
        &mut self,
        node: CompilationUnit,
        ctx: &mut RefactorCtx,
    ) -> CompilationUnit {
        let referenced_types = TypeReferenceCollector::collect(&node);
        let referenced_methods = StaticMethodCollector::collect(&node);
        let package = package_of(&self.clazz);

        let mut imports = Vec::with_capacity(node.imports.len());
        let mut changed = false;

        for import in node.imports.iter() {
            let disposition = if import.is_static() {
                if import.target() != self.clazz {
                    Disposition::Keep
                } else {
                    let methods = referenced_methods.get(&self.clazz);
                    if import.is_star() {
                        if methods.map_or(true, |m| m.is_empty()) {
                            Disposition::Delete
                        } else {
                            Disposition::Keep
                        }
                    } else if methods
                        .map(|m| m.contains(&import.qualid.name.simple_name))
                        .unwrap_or(false)
                    {
                        Disposition::Keep
                    } else {
                        Disposition::Delete
                    }
                }
            } else if import.is_star() && import.target() == package {
                let in_package: Vec<&String> = referenced_types
                    .iter()
                    .filter(|fqn| package_of(fqn) == package && fqn.as_str() != package)
                    .collect();
                match in_package.as_slice() {
                    [] => Disposition::Delete,
                    [only] => {
                        let narrowed = import.clone().with_qualid(
                            import_of(only.as_str(), rejig_java_cst::Formatting::None).qualid,
                        );
                        Disposition::ReplaceWith(narrowed)
                    }
                    _ => Disposition::Keep,
                }
            } else if !import.is_star() && import.qualified_name() == self.clazz {
                if referenced_types.contains(&self.clazz) {
                    Disposition::Keep
                } else {
                    Disposition::Delete
                }
            } else {
                Disposition::Keep
            };

            let span = ctx.spans().full(import.id);
            match disposition {
                Disposition::Keep => imports.push(import.clone()),
                Disposition::Delete => match span {
                    Some(span) => {
                        ctx.emit_fix(Fix::delete(span));
                        changed = true;
                    }
                    None => {
                        ctx.warn(Some(import.id), "import has no recorded source extent");
                        imports.push(import.clone());
                    }
                },
                Disposition::ReplaceWith(new_import) => match span {
                    Some(span) => {
                        ctx.emit_fix(Fix::replace(span, new_import.print()));
                        imports.push(new_import);
                        changed = true;
                    }
                    None => {
                        ctx.warn(Some(import.id), "import has no recorded source extent");
                        imports.push(import.clone());
                    }
                },
            }
        }

        if changed {
            node.with_imports(imports)
        } else {
            node
        }
    }
}
