//! Signature-driven searches over a compilation unit.

use rejig_java_cst::nodes::{CompilationUnit, MethodInvocation};
use rejig_java_cst::visitor::InvocationCollector;

use crate::matcher::{MethodMatcher, SignatureError};

/// The method invocations in `cu` accepted by `signature`, in source order.
///
/// Matching follows [`MethodMatcher`]: the declaring type (or any of its
/// supertypes), the simple name, and the resolved argument types must all
/// accept. Invocations without type resolution never match.
///
/// # Errors
///
/// Returns [`SignatureError`] when the signature does not compile.
pub fn find_method_calls(
    cu: &CompilationUnit,
    signature: &str,
) -> Result<Vec<MethodInvocation>, SignatureError> {
    let matcher = MethodMatcher::new(signature)?;
    Ok(InvocationCollector::collect(cu)
        .into_iter()
        .filter(|invocation| matcher.matches(invocation))
        .collect())
}
