//! Insert a single-type import.

use rejig_core::Fix;
use rejig_java_cst::nodes::{
    CompilationUnit, Expression, FieldAccess, Formatting, Ident, Import,
};
use rejig_java_cst::visitor::RefactorCtx;
use rejig_java_cst::{JavaRefactorVisitor, Print};

use super::package_of;

/// Adds `import <clazz>;` in lexicographic position among the existing
/// imports. A no-op when the type is already covered by a named or star
/// import, lives in `java.lang`, or lives in the unit's own package.
pub struct AddImport {
    clazz: String,
}

impl AddImport {
    pub fn new(clazz: impl Into<String>) -> Self {
        AddImport {
            clazz: clazz.into(),
        }
    }
}

impl JavaRefactorVisitor for AddImport {
    fn visit_compilation_unit(
        &mut self,
        node: CompilationUnit,
        ctx: &mut RefactorCtx,
    ) -> CompilationUnit {
        insert_import(node, ctx, &self.clazz)
    }
}

/// Build the dotted expression for a package prefix: `a.b.c`.
fn qualified_expression(prefix: &str) -> Expression {
    let mut segments = prefix.split('.');
    let first = segments.next().unwrap_or_default();
    let mut expr = Expression::Ident(Ident::new(first, None, Formatting::None));
    for segment in segments {
        expr = Expression::FieldAccess(FieldAccess::new(
            expr,
            Ident::new(segment, None, Formatting::None),
            None,
            Formatting::None,
        ));
    }
    expr
}

/// The import node for a fully qualified (dotted) class name.
pub(crate) fn import_of(clazz: &str, fmt: Formatting) -> Import {
    let (package, simple) = match clazz.rfind('.') {
        Some(idx) => (&clazz[..idx], &clazz[idx + 1..]),
        None => ("", clazz),
    };
    let target = qualified_expression(package);
    Import::new(
        FieldAccess::new(
            target,
            Ident::new(simple, None, Formatting::None),
            None,
            Formatting::prefixed(" "),
        ),
        None,
        fmt,
    )
}

/// Shared insertion: used by [`AddImport`] and by `ChangeType` when the
/// replacement type has no import yet.
///
/// The new import's formatting is inferred from its neighbors: the prefix of
/// the import it lands next to, a blank line after the package declaration
/// when it is the first import, or nothing at the top of a bare unit.
pub(crate) fn insert_import(
    cu: CompilationUnit,
    ctx: &mut RefactorCtx,
    clazz: &str,
) -> CompilationUnit {
    // Types in the default package cannot be imported.
    if !clazz.contains('.') {
        return cu;
    }
    if cu.has_import(clazz) || package_of(clazz) == "java.lang" {
        return cu;
    }
    if let Some(package) = &cu.package {
        if let Expression::FieldAccess(fa) = &package.expr {
            if fa.flat_name() == package_of(clazz) {
                return cu;
            }
        }
        if let Expression::Ident(ident) = &package.expr {
            if ident.simple_name == package_of(clazz) {
                return cu;
            }
        }
    }

    let index = cu
        .imports
        .iter()
        .position(|import| import.qualified_name().as_str() > clazz)
        .unwrap_or(cu.imports.len());

    let prefix = if cu.imports.is_empty() {
        if cu.package.is_some() {
            "\n\n".to_string()
        } else {
            String::new()
        }
    } else if index > 0 {
        let sibling = cu.imports[index - 1].fmt.prefix();
        if sibling.is_empty() {
            "\n".to_string()
        } else {
            sibling.to_string()
        }
    } else {
        "\n".to_string()
    };

    let new_import = import_of(clazz, Formatting::prefixed(prefix));

    let offset = if index < cu.imports.len() {
        ctx.spans().full(cu.imports[index].id).map(|span| span.start)
    } else if let Some(last) = cu.imports.last() {
        ctx.spans().full(last.id).map(|span| span.end)
    } else if let Some(package) = &cu.package {
        ctx.spans().full(package.id).map(|span| span.end)
    } else {
        Some(0)
    };

    match offset {
        Some(offset) => ctx.emit_fix(Fix::insert(offset, new_import.print())),
        None => {
            ctx.warn(Some(cu.id), format!("no insertion point for import {clazz}"));
            return cu;
        }
    }

    let mut imports = cu.imports.clone();
    imports.insert(index, new_import);
    cu.with_imports(imports)
}
