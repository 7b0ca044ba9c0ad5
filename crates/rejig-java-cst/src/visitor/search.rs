//! Search collectors built on the read-only visitor.
//!
//! These power the navigation operations on [`CompilationUnit`] and
//! [`ClassDecl`]: referenced-type and static-method scans for import
//! bookkeeping, invocation collection for signature matching, and the
//! boolean `has_type` / `has_import` probes with short-circuit.

use std::collections::{BTreeMap, BTreeSet};

use super::dispatch::{walk_compilation_unit, walk_expression};
use super::traits::{JavaVisitor, VisitResult};
use crate::nodes::*;
use crate::types::{JavaType, VarType};

fn class_name_of(typ: &JavaType) -> Option<String> {
    match typ {
        JavaType::Class(c) => Some(c.fully_qualified_name().to_string()),
        JavaType::Array(elem) => class_name_of(elem),
        JavaType::Var(v) => class_name_of(&v.var_type),
        _ => None,
    }
}

// ============================================================================
// Referenced types
// ============================================================================

/// Collects the fully qualified names of every class type referenced by the
/// tree's type attributions. Imports themselves carry no attributions, so
/// they never count as references.
#[derive(Debug, Default)]
pub struct TypeReferenceCollector {
    types: BTreeSet<String>,
}

impl TypeReferenceCollector {
    /// All class names referenced anywhere under `cu`.
    pub fn collect(cu: &CompilationUnit) -> BTreeSet<String> {
        let mut collector = TypeReferenceCollector::default();
        walk_compilation_unit(&mut collector, cu);
        collector.types
    }

    fn note(&mut self, typ: Option<&JavaType>) {
        if let Some(name) = typ.and_then(class_name_of) {
            self.types.insert(name);
        }
    }
}

impl JavaVisitor for TypeReferenceCollector {
    fn visit_ident(&mut self, node: &Ident) -> VisitResult {
        self.note(node.typ.as_ref());
        VisitResult::Continue
    }

    fn visit_field_access(&mut self, node: &FieldAccess) -> VisitResult {
        self.note(node.typ.as_ref());
        VisitResult::Continue
    }

    fn visit_named_var(&mut self, node: &NamedVar) -> VisitResult {
        self.note(node.typ.as_ref());
        VisitResult::Continue
    }

    fn visit_new_class(&mut self, node: &NewClass) -> VisitResult {
        self.note(node.typ.as_ref());
        VisitResult::Continue
    }

    fn visit_new_array(&mut self, node: &NewArray) -> VisitResult {
        self.note(node.typ.as_ref());
        VisitResult::Continue
    }

    fn visit_literal(&mut self, node: &Literal) -> VisitResult {
        self.note(node.typ.as_ref());
        VisitResult::Continue
    }
}

// ============================================================================
// Referenced static methods
// ============================================================================

/// Collects `declaring type -> method names` for unselected invocations,
/// i.e. calls that can only resolve through a static import.
#[derive(Debug, Default)]
pub struct StaticMethodCollector {
    methods: BTreeMap<String, BTreeSet<String>>,
}

impl StaticMethodCollector {
    pub fn collect(cu: &CompilationUnit) -> BTreeMap<String, BTreeSet<String>> {
        let mut collector = StaticMethodCollector::default();
        walk_compilation_unit(&mut collector, cu);
        collector.methods
    }
}

impl JavaVisitor for StaticMethodCollector {
    fn visit_method_invocation(&mut self, node: &MethodInvocation) -> VisitResult {
        if node.select.is_none() {
            if let Some(declaring) = node.declaring_type() {
                self.methods
                    .entry(declaring.fully_qualified_name().to_string())
                    .or_default()
                    .insert(node.simple_name().to_string());
            }
        }
        VisitResult::Continue
    }
}

// ============================================================================
// Invocations
// ============================================================================

/// Collects every method invocation in the tree, in source order.
#[derive(Debug, Default)]
pub struct InvocationCollector {
    invocations: Vec<MethodInvocation>,
}

impl InvocationCollector {
    pub fn collect(cu: &CompilationUnit) -> Vec<MethodInvocation> {
        let mut collector = InvocationCollector::default();
        walk_compilation_unit(&mut collector, cu);
        collector.invocations
    }

    /// Collect from a single expression subtree.
    pub fn collect_in(expr: &Expression) -> Vec<MethodInvocation> {
        let mut collector = InvocationCollector::default();
        walk_expression(&mut collector, expr);
        collector.invocations
    }
}

impl JavaVisitor for InvocationCollector {
    fn visit_method_invocation(&mut self, node: &MethodInvocation) -> VisitResult {
        self.invocations.push(node.clone());
        VisitResult::Continue
    }
}

// ============================================================================
// Boolean probes
// ============================================================================

struct TypeProbe<'a> {
    fqn: &'a str,
    found: bool,
}

impl JavaVisitor for TypeProbe<'_> {
    fn visit_ident(&mut self, node: &Ident) -> VisitResult {
        self.check(node.typ.as_ref())
    }

    fn visit_field_access(&mut self, node: &FieldAccess) -> VisitResult {
        self.check(node.typ.as_ref())
    }

    fn visit_named_var(&mut self, node: &NamedVar) -> VisitResult {
        self.check(node.typ.as_ref())
    }

    fn visit_new_class(&mut self, node: &NewClass) -> VisitResult {
        self.check(node.typ.as_ref())
    }

    fn visit_literal(&mut self, node: &Literal) -> VisitResult {
        self.check(node.typ.as_ref())
    }
}

impl TypeProbe<'_> {
    fn check(&mut self, typ: Option<&JavaType>) -> VisitResult {
        if typ.and_then(class_name_of).as_deref() == Some(self.fqn) {
            self.found = true;
            VisitResult::Stop
        } else {
            VisitResult::Continue
        }
    }
}

impl CompilationUnit {
    /// True when any node in the unit resolves to `fqn`. Stops at the first
    /// match.
    pub fn has_type(&self, fqn: &str) -> bool {
        let mut probe = TypeProbe { fqn, found: false };
        walk_compilation_unit(&mut probe, self);
        probe.found
    }

    /// True when an import (single-type or star) covers `fqn`.
    pub fn has_import(&self, fqn: &str) -> bool {
        self.imports.iter().any(|import| import.matches(fqn))
    }
}

// ============================================================================
// Field searches
// ============================================================================

impl ClassDecl {
    /// Locally declared fields whose type resolves to `fqn`.
    pub fn find_fields(&self, fqn: &str) -> Vec<&VariableDecls> {
        self.fields()
            .filter(|decl| {
                decl.declared_type()
                    .and_then(class_name_of)
                    .as_deref()
                    == Some(fqn)
            })
            .collect()
    }

    /// Fields of type `fqn` reachable through the supertype chain of this
    /// class's resolved type. Does not include locally declared fields.
    pub fn find_inherited_fields(&self, fqn: &str) -> Vec<VarType> {
        let Some(JavaType::Class(own)) = &self.typ else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut current = own.supertype().cloned();
        while let Some(class) = current {
            for member in class.members() {
                if class_name_of(&member.var_type).as_deref() == Some(fqn) {
                    out.push(member.clone());
                }
            }
            current = class.supertype().cloned();
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
