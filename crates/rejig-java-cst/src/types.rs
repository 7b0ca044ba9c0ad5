//! Resolved Java type descriptors.
//!
//! The parser attaches a [`JavaType`] to expression and type-bearing nodes
//! before refactors run. The model is a closed sum over classes, methods,
//! variables, generic type variables, primitives, and arrays.
//!
//! ## Interning
//!
//! [`ClassType::build`] interns by fully qualified name in a global concurrent
//! map: two calls with identical strings return the same shared instance.
//! Hierarchy-bearing instances (supertype, interfaces, members) are built with
//! the `with_*` constructors; equality stays name-based throughout, so an
//! interned `java.lang.String` and a hierarchy-bearing one compare equal.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use serde::{Deserialize, Serialize};

// ============================================================================
// JavaType
// ============================================================================

/// A resolved Java type reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JavaType {
    /// A class, interface, enum, or annotation type.
    Class(Arc<ClassType>),
    /// A resolved method signature.
    Method(Arc<MethodType>),
    /// A named variable with its declared type.
    Var(Box<VarType>),
    /// A generic type variable such as `T extends Number`.
    GenericTypeVariable {
        name: String,
        bound: Option<Arc<ClassType>>,
    },
    /// A primitive, or one of the special literal tags.
    Primitive(PrimitiveTag),
    /// An array type, covariant in its element type.
    Array(Box<JavaType>),
}

impl JavaType {
    /// Narrow to a class type.
    pub fn as_class(&self) -> Option<&Arc<ClassType>> {
        match self {
            JavaType::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Narrow to a method type.
    pub fn as_method(&self) -> Option<&Arc<MethodType>> {
        match self {
            JavaType::Method(m) => Some(m),
            _ => None,
        }
    }

    /// The element type if this is an array.
    pub fn element_type(&self) -> Option<&JavaType> {
        match self {
            JavaType::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Render the fully qualified textual form used for signature matching:
    /// `java.lang.String`, `int`, `a.A1[]`.
    pub fn to_type_string(&self) -> Option<String> {
        match self {
            JavaType::Class(c) => Some(c.fully_qualified_name().to_string()),
            JavaType::Primitive(tag) => Some(tag.keyword().to_string()),
            JavaType::Array(elem) => elem.to_type_string().map(|e| format!("{e}[]")),
            JavaType::GenericTypeVariable { bound, .. } => bound
                .as_ref()
                .map(|b| b.fully_qualified_name().to_string())
                .or_else(|| Some("java.lang.Object".to_string())),
            JavaType::Var(v) => v.var_type.to_type_string(),
            JavaType::Method(_) => None,
        }
    }

    /// True when `sub` is assignable to this type per the subtype relation:
    /// reflexive, transitive through supertypes and interfaces, and covariant
    /// over array element types.
    pub fn is_assignable_from(&self, sub: &JavaType) -> bool {
        match (self, sub) {
            (JavaType::Class(sup), JavaType::Class(sub)) => sup.is_assignable_from(sub),
            (JavaType::Array(sup), JavaType::Array(sub)) => sup.is_assignable_from(sub),
            (JavaType::Primitive(a), JavaType::Primitive(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// ClassType
// ============================================================================

/// A resolved class, interface, enum, or annotation type.
///
/// Equality and hashing are by fully qualified name only; the hierarchy
/// fields describe what is known about the type, not its identity.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassType {
    fully_qualified_name: String,
    supertype: Option<Arc<ClassType>>,
    interfaces: Vec<Arc<ClassType>>,
    members: Vec<VarType>,
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.fully_qualified_name == other.fully_qualified_name
    }
}

impl Eq for ClassType {}

impl std::hash::Hash for ClassType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.fully_qualified_name.hash(state);
    }
}

fn class_cache() -> &'static Mutex<HashMap<String, Arc<ClassType>>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Arc<ClassType>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

impl ClassType {
    /// Interned constructor: the canonical shared instance for `fqn`.
    ///
    /// Two calls with identical strings return the same `Arc`.
    pub fn build(fqn: impl Into<String>) -> Arc<ClassType> {
        let fqn = fqn.into();
        let mut cache = class_cache().lock().expect("class intern cache poisoned");
        cache
            .entry(fqn.clone())
            .or_insert_with(|| {
                Arc::new(ClassType {
                    fully_qualified_name: fqn,
                    supertype: None,
                    interfaces: Vec::new(),
                    members: Vec::new(),
                })
            })
            .clone()
    }

    /// A hierarchy-bearing instance. Not interned; equality is still by name.
    pub fn with_hierarchy(
        fqn: impl Into<String>,
        supertype: Option<Arc<ClassType>>,
        interfaces: Vec<Arc<ClassType>>,
        members: Vec<VarType>,
    ) -> Arc<ClassType> {
        Arc::new(ClassType {
            fully_qualified_name: fqn.into(),
            supertype,
            interfaces,
            members,
        })
    }

    /// The fully qualified name, e.g. `java.util.List`.
    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// The simple class name: everything after the last dot.
    pub fn class_name(&self) -> &str {
        self.fully_qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.fully_qualified_name)
    }

    /// The package name, or the whole name when there is no dot.
    pub fn package_name(&self) -> &str {
        match self.fully_qualified_name.rfind('.') {
            Some(idx) => &self.fully_qualified_name[..idx],
            None => &self.fully_qualified_name,
        }
    }

    /// The direct supertype, if known.
    pub fn supertype(&self) -> Option<&Arc<ClassType>> {
        self.supertype.as_ref()
    }

    /// The supertype used for hierarchy walks: the recorded one, or the
    /// implicit `java.lang.Object` every class other than `Object` extends.
    fn effective_supertype(&self) -> Option<Arc<ClassType>> {
        if let Some(supertype) = &self.supertype {
            return Some(supertype.clone());
        }
        if self.fully_qualified_name == "java.lang.Object" {
            None
        } else {
            Some(ClassType::build("java.lang.Object"))
        }
    }

    /// The directly implemented interfaces.
    pub fn interfaces(&self) -> &[Arc<ClassType>] {
        &self.interfaces
    }

    /// The known members (fields) of this type.
    pub fn members(&self) -> &[VarType] {
        &self.members
    }

    /// True when `sub <: self`: reflexive, transitive through the supertype
    /// chain, and transitive through `interfaces`.
    pub fn is_assignable_from(&self, sub: &ClassType) -> bool {
        if self.fully_qualified_name == sub.fully_qualified_name {
            return true;
        }
        if let Some(sup) = sub.effective_supertype() {
            if self.is_assignable_from(&sup) {
                return true;
            }
        }
        sub.interfaces.iter().any(|i| self.is_assignable_from(i))
    }

    /// This class plus every supertype and interface reachable from it
    /// (including the implicit `java.lang.Object` root), starting at the
    /// class itself.
    pub fn hierarchy(self: &Arc<ClassType>) -> Vec<Arc<ClassType>> {
        let mut out: Vec<Arc<ClassType>> = Vec::new();
        let mut queue: Vec<Arc<ClassType>> = vec![self.clone()];
        while let Some(next) = queue.pop() {
            if out.iter().any(|c| c.fully_qualified_name == next.fully_qualified_name) {
                continue;
            }
            if let Some(sup) = next.effective_supertype() {
                queue.push(sup);
            }
            queue.extend(next.interfaces.iter().cloned());
            out.push(next);
        }
        out
    }
}

// ============================================================================
// MethodType
// ============================================================================

/// The parameter and return types of one method shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub param_types: Vec<JavaType>,
    pub return_type: JavaType,
}

impl MethodSignature {
    pub fn new(param_types: Vec<JavaType>, return_type: JavaType) -> Self {
        MethodSignature {
            param_types,
            return_type,
        }
    }
}

/// A resolved method: its declaring type, name, and signatures.
///
/// `generic_signature` carries declared type variables; `resolved_signature`
/// carries the types as seen at the call site. For non-generic methods the
/// two coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodType {
    pub declaring_type: Arc<ClassType>,
    pub name: String,
    pub generic_signature: MethodSignature,
    pub resolved_signature: MethodSignature,
}

impl MethodType {
    /// A method whose generic and resolved signatures coincide.
    pub fn build(
        declaring_type: Arc<ClassType>,
        name: impl Into<String>,
        signature: MethodSignature,
    ) -> Arc<MethodType> {
        Arc::new(MethodType {
            declaring_type,
            name: name.into(),
            generic_signature: signature.clone(),
            resolved_signature: signature,
        })
    }
}

// ============================================================================
// VarType
// ============================================================================

/// A named variable or field with its declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarType {
    pub name: String,
    pub var_type: JavaType,
}

impl VarType {
    pub fn new(name: impl Into<String>, var_type: JavaType) -> Self {
        VarType {
            name: name.into(),
            var_type,
        }
    }
}

// ============================================================================
// PrimitiveTag
// ============================================================================

/// Primitive type tags, including the special literal tags.
///
/// `String`, `Wildcard`, `Null`, and `None` are literal rendering hints: the
/// resolved type of a string literal expression is nonetheless
/// `Class("java.lang.String")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveTag {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
    String,
    Wildcard,
    Null,
    None,
}

impl PrimitiveTag {
    /// The Java keyword or rendering for this tag.
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveTag::Boolean => "boolean",
            PrimitiveTag::Byte => "byte",
            PrimitiveTag::Char => "char",
            PrimitiveTag::Short => "short",
            PrimitiveTag::Int => "int",
            PrimitiveTag::Long => "long",
            PrimitiveTag::Float => "float",
            PrimitiveTag::Double => "double",
            PrimitiveTag::Void => "void",
            PrimitiveTag::String => "String",
            PrimitiveTag::Wildcard => "*",
            PrimitiveTag::Null => "null",
            PrimitiveTag::None => "",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
