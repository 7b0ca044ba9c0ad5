//! Built-in refactor visitors.
//!
//! Each operation is a [`JavaRefactorVisitor`](rejig_java_cst::JavaRefactorVisitor)
//! staged on a [`Refactor`](crate::refactor::Refactor) transaction:
//!
//! - [`ChangeType`]: retarget every reference to one type, imports included.
//! - [`ChangeMethodName`]: rename one invocation, anchored by node id.
//! - [`ChangeLiteral`]: transform literal values within an expression scope.
//! - [`RemoveImport`]: drop or narrow imports nothing references anymore.
//! - [`AddImport`]: insert a single-type import in sorted position.

mod add_import;
mod change_literal;
mod change_method_name;
mod change_type;
mod remove_import;

pub use add_import::AddImport;
pub use change_literal::ChangeLiteral;
pub use change_method_name::ChangeMethodName;
pub use change_type::ChangeType;
pub use remove_import::RemoveImport;

/// The package prefix of a fully qualified name, or the whole name when it
/// has no dot.
pub(crate) fn package_of(fqn: &str) -> &str {
    match fqn.rfind('.') {
        Some(idx) => &fqn[..idx],
        None => fqn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_of_splits_at_the_last_dot() {
        assert_eq!(package_of("a.b.C"), "a.b");
        assert_eq!(package_of("a.C"), "a");
        assert_eq!(package_of("a"), "a");
    }
}
