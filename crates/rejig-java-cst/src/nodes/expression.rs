//! Expression and type-tree nodes.

use serde::{Deserialize, Serialize};

use crate::types::{JavaType, MethodType, PrimitiveTag};
use std::sync::Arc;

use super::{Block, Formatting, NodeId, Parens, VariableDecls};

// ============================================================================
// Expression
// ============================================================================

/// The closed set of expression kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    ArrayAccess(ArrayAccess),
    Assign(Assign),
    AssignOp(AssignOp),
    Binary(Binary),
    Empty(Empty),
    FieldAccess(FieldAccess),
    Ident(Ident),
    InstanceOf(InstanceOf),
    Lambda(Lambda),
    Literal(Literal),
    MethodInvocation(MethodInvocation),
    NewArray(NewArray),
    NewClass(NewClass),
    Parentheses(Parens<Expression>),
    Ternary(Ternary),
    TypeCast(TypeCast),
    Unary(Unary),
}

impl Expression {
    /// The node id of the wrapped expression.
    pub fn id(&self) -> NodeId {
        match self {
            Expression::ArrayAccess(n) => n.id,
            Expression::Assign(n) => n.id,
            Expression::AssignOp(n) => n.id,
            Expression::Binary(n) => n.id,
            Expression::Empty(n) => n.id,
            Expression::FieldAccess(n) => n.id,
            Expression::Ident(n) => n.id,
            Expression::InstanceOf(n) => n.id,
            Expression::Lambda(n) => n.id,
            Expression::Literal(n) => n.id,
            Expression::MethodInvocation(n) => n.id,
            Expression::NewArray(n) => n.id,
            Expression::NewClass(n) => n.id,
            Expression::Parentheses(n) => n.id,
            Expression::Ternary(n) => n.id,
            Expression::TypeCast(n) => n.id,
            Expression::Unary(n) => n.id,
        }
    }

    /// The resolved type attached to the expression, if any.
    pub fn java_type(&self) -> Option<&JavaType> {
        match self {
            Expression::ArrayAccess(n) => n.typ.as_ref(),
            Expression::Assign(n) => n.typ.as_ref(),
            Expression::AssignOp(n) => n.typ.as_ref(),
            Expression::Binary(n) => n.typ.as_ref(),
            Expression::Empty(_) => None,
            Expression::FieldAccess(n) => n.typ.as_ref(),
            Expression::Ident(n) => n.typ.as_ref(),
            Expression::InstanceOf(n) => n.typ.as_ref(),
            Expression::Lambda(n) => n.typ.as_ref(),
            Expression::Literal(n) => n.typ.as_ref(),
            Expression::MethodInvocation(n) => n.return_type(),
            Expression::NewArray(n) => n.typ.as_ref(),
            Expression::NewClass(n) => n.typ.as_ref(),
            Expression::Parentheses(n) => n.tree.java_type(),
            Expression::Ternary(n) => n.typ.as_ref(),
            Expression::TypeCast(n) => n.clazz.tree.java_type(),
            Expression::Unary(n) => n.typ.as_ref(),
        }
    }
}

// ============================================================================
// Type trees
// ============================================================================

/// A type as written in source: simple name, qualified name, array,
/// parameterized, primitive, wildcard, or multi-catch alternative list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeTree {
    Ident(Ident),
    FieldAccess(FieldAccess),
    Array(ArrayType),
    Parameterized(ParameterizedType),
    Primitive(Primitive),
    Wildcard(Wildcard),
    MultiCatch(MultiCatch),
}

impl TypeTree {
    pub fn id(&self) -> NodeId {
        match self {
            TypeTree::Ident(n) => n.id,
            TypeTree::FieldAccess(n) => n.id,
            TypeTree::Array(n) => n.id,
            TypeTree::Parameterized(n) => n.id,
            TypeTree::Primitive(n) => n.id,
            TypeTree::Wildcard(n) => n.id,
            TypeTree::MultiCatch(n) => n.id,
        }
    }

    /// The resolved type this tree names, if known.
    pub fn java_type(&self) -> Option<&JavaType> {
        match self {
            TypeTree::Ident(n) => n.typ.as_ref(),
            TypeTree::FieldAccess(n) => n.typ.as_ref(),
            TypeTree::Array(n) => n.typ.as_ref(),
            TypeTree::Parameterized(n) => n.clazz.java_type(),
            TypeTree::Primitive(n) => n.typ.as_ref(),
            TypeTree::Wildcard(_) => None,
            TypeTree::MultiCatch(_) => None,
        }
    }
}

/// An array type as written: element type plus `[]` dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub id: NodeId,
    pub fmt: Formatting,
    pub element_type: Box<TypeTree>,
    pub dimensions: Vec<ArrayDim>,
    pub typ: Option<JavaType>,
}

impl ArrayType {
    pub fn new(
        element_type: TypeTree,
        dimensions: Vec<ArrayDim>,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        ArrayType {
            id: NodeId::next(),
            fmt,
            element_type: Box::new(element_type),
            dimensions,
            typ,
        }
    }
}

/// One `[]` dimension; the formatting prefix holds any space before `[`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayDim {
    pub fmt: Formatting,
}

impl ArrayDim {
    pub fn new(fmt: Formatting) -> Self {
        ArrayDim { fmt }
    }
}

/// `Clazz<A, B>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterizedType {
    pub id: NodeId,
    pub fmt: Formatting,
    pub clazz: Box<TypeTree>,
    pub type_arguments: Vec<TypeTree>,
}

impl ParameterizedType {
    pub fn new(clazz: TypeTree, type_arguments: Vec<TypeTree>, fmt: Formatting) -> Self {
        ParameterizedType {
            id: NodeId::next(),
            fmt,
            clazz: Box::new(clazz),
            type_arguments,
        }
    }
}

/// A primitive type keyword in a type position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub id: NodeId,
    pub fmt: Formatting,
    pub tag: PrimitiveTag,
    pub typ: Option<JavaType>,
}

impl Primitive {
    pub fn new(tag: PrimitiveTag, fmt: Formatting) -> Self {
        Primitive {
            id: NodeId::next(),
            fmt,
            tag,
            typ: Some(JavaType::Primitive(tag)),
        }
    }
}

/// `?`, `? extends T`, or `? super T` in a type-argument position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wildcard {
    pub id: NodeId,
    pub fmt: Formatting,
    pub bound: Option<WildcardBound>,
    pub bounded_type: Option<Box<TypeTree>>,
}

impl Wildcard {
    pub fn new(
        bound: Option<WildcardBound>,
        bounded_type: Option<TypeTree>,
        fmt: Formatting,
    ) -> Self {
        Wildcard {
            id: NodeId::next(),
            fmt,
            bound,
            bounded_type: bounded_type.map(Box::new),
        }
    }
}

/// The bound keyword of a wildcard, carrying its own formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WildcardBound {
    Extends(Formatting),
    Super(Formatting),
}

/// The `A | B` alternatives of a multi-catch clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiCatch {
    pub id: NodeId,
    pub fmt: Formatting,
    pub alternatives: Vec<TypeTree>,
}

impl MultiCatch {
    pub fn new(alternatives: Vec<TypeTree>, fmt: Formatting) -> Self {
        MultiCatch {
            id: NodeId::next(),
            fmt,
            alternatives,
        }
    }
}

// ============================================================================
// Leaf and operator expressions
// ============================================================================

/// A simple name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub id: NodeId,
    pub fmt: Formatting,
    pub simple_name: String,
    pub typ: Option<JavaType>,
}

impl Ident {
    pub fn new(simple_name: impl Into<String>, typ: Option<JavaType>, fmt: Formatting) -> Self {
        Ident {
            id: NodeId::next(),
            fmt,
            simple_name: simple_name.into(),
            typ,
        }
    }

    /// Replace the name, preserving id, formatting, and type.
    pub fn with_simple_name(mut self, simple_name: impl Into<String>) -> Self {
        self.simple_name = simple_name.into();
        self
    }

    /// Replace the resolved type, preserving everything else.
    pub fn with_type(mut self, typ: Option<JavaType>) -> Self {
        self.typ = typ;
        self
    }
}

/// `target.name` — a field access, a qualified name, or a package segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAccess {
    pub id: NodeId,
    pub fmt: Formatting,
    pub target: Box<Expression>,
    pub name: Ident,
    pub typ: Option<JavaType>,
}

impl FieldAccess {
    pub fn new(target: Expression, name: Ident, typ: Option<JavaType>, fmt: Formatting) -> Self {
        FieldAccess {
            id: NodeId::next(),
            fmt,
            target: Box::new(target),
            name,
            typ,
        }
    }

    pub fn with_target(mut self, target: Expression) -> Self {
        self.target = Box::new(target);
        self
    }

    pub fn with_name(mut self, name: Ident) -> Self {
        self.name = name;
        self
    }

    /// The dotted name this access spells, ignoring formatting: `a.b.C`.
    ///
    /// Only meaningful when the whole chain is built from idents, as in
    /// import qualifiers and package names.
    pub fn flat_name(&self) -> String {
        let target = match self.target.as_ref() {
            Expression::Ident(i) => i.simple_name.clone(),
            Expression::FieldAccess(f) => f.flat_name(),
            other => format!("<{:?}>", other.id()),
        };
        format!("{}.{}", target, self.name.simple_name)
    }
}

/// A literal with its exact source rendering.
///
/// `value_source` is what gets printed; `type_tag` records which literal
/// family the token belongs to so transformed values can be re-rendered with
/// the right suffix and quoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub id: NodeId,
    pub fmt: Formatting,
    pub value: LiteralValue,
    pub value_source: String,
    pub type_tag: PrimitiveTag,
    pub typ: Option<JavaType>,
}

impl Literal {
    pub fn new(
        value: LiteralValue,
        value_source: impl Into<String>,
        type_tag: PrimitiveTag,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        Literal {
            id: NodeId::next(),
            fmt,
            value,
            value_source: value_source.into(),
            type_tag,
            typ,
        }
    }

    /// Replace value and source rendering together, preserving the id.
    pub fn with_value(mut self, value: LiteralValue, value_source: impl Into<String>) -> Self {
        self.value = value;
        self.value_source = value_source.into();
        self
    }
}

/// The resolved value of a literal token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Boolean(bool),
    Char(char),
    Int(i64),
    Long(i64),
    Float(f64),
    Double(f64),
    String(String),
    Null,
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Boolean(v) => write!(f, "{v}"),
            LiteralValue::Char(v) => write!(f, "{v}"),
            LiteralValue::Int(v) => write!(f, "{v}"),
            LiteralValue::Long(v) => write!(f, "{v}"),
            LiteralValue::Float(v) => write!(f, "{v}"),
            LiteralValue::Double(v) => write!(f, "{v}"),
            LiteralValue::String(v) => write!(f, "{v}"),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}

/// `indexed[index]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayAccess {
    pub id: NodeId,
    pub fmt: Formatting,
    pub indexed: Box<Expression>,
    pub dim_fmt: Formatting,
    pub index: Box<Expression>,
    pub typ: Option<JavaType>,
}

impl ArrayAccess {
    pub fn new(
        indexed: Expression,
        index: Expression,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        ArrayAccess {
            id: NodeId::next(),
            fmt,
            indexed: Box::new(indexed),
            dim_fmt: Formatting::None,
            index: Box::new(index),
            typ,
        }
    }
}

/// `variable = assignment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub id: NodeId,
    pub fmt: Formatting,
    pub variable: Box<Expression>,
    pub assignment: Box<Expression>,
    pub typ: Option<JavaType>,
}

impl Assign {
    pub fn new(
        variable: Expression,
        assignment: Expression,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        Assign {
            id: NodeId::next(),
            fmt,
            variable: Box::new(variable),
            assignment: Box::new(assignment),
            typ,
        }
    }
}

/// `variable op= assignment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignOp {
    pub id: NodeId,
    pub fmt: Formatting,
    pub variable: Box<Expression>,
    pub operator: AssignmentOperator,
    pub assignment: Box<Expression>,
    pub typ: Option<JavaType>,
}

impl AssignOp {
    pub fn new(
        variable: Expression,
        operator: AssignmentOperator,
        assignment: Expression,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        AssignOp {
            id: NodeId::next(),
            fmt,
            variable: Box::new(variable),
            operator,
            assignment: Box::new(assignment),
            typ,
        }
    }
}

/// Compound-assignment operators; each variant carries its own formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Addition(Formatting),
    Subtraction(Formatting),
    Multiplication(Formatting),
    Division(Formatting),
    Modulo(Formatting),
    BitAnd(Formatting),
    BitOr(Formatting),
    BitXor(Formatting),
    LeftShift(Formatting),
    RightShift(Formatting),
    UnsignedRightShift(Formatting),
}

impl AssignmentOperator {
    pub fn token(&self) -> &'static str {
        match self {
            AssignmentOperator::Addition(_) => "+=",
            AssignmentOperator::Subtraction(_) => "-=",
            AssignmentOperator::Multiplication(_) => "*=",
            AssignmentOperator::Division(_) => "/=",
            AssignmentOperator::Modulo(_) => "%=",
            AssignmentOperator::BitAnd(_) => "&=",
            AssignmentOperator::BitOr(_) => "|=",
            AssignmentOperator::BitXor(_) => "^=",
            AssignmentOperator::LeftShift(_) => "<<=",
            AssignmentOperator::RightShift(_) => ">>=",
            AssignmentOperator::UnsignedRightShift(_) => ">>>=",
        }
    }

    pub fn formatting(&self) -> &Formatting {
        match self {
            AssignmentOperator::Addition(f)
            | AssignmentOperator::Subtraction(f)
            | AssignmentOperator::Multiplication(f)
            | AssignmentOperator::Division(f)
            | AssignmentOperator::Modulo(f)
            | AssignmentOperator::BitAnd(f)
            | AssignmentOperator::BitOr(f)
            | AssignmentOperator::BitXor(f)
            | AssignmentOperator::LeftShift(f)
            | AssignmentOperator::RightShift(f)
            | AssignmentOperator::UnsignedRightShift(f) => f,
        }
    }
}

/// `left op right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binary {
    pub id: NodeId,
    pub fmt: Formatting,
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub typ: Option<JavaType>,
}

impl Binary {
    pub fn new(
        left: Expression,
        operator: BinaryOperator,
        right: Expression,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        Binary {
            id: NodeId::next(),
            fmt,
            left: Box::new(left),
            operator,
            right: Box::new(right),
            typ,
        }
    }
}

/// Binary operators as tagged variants, each carrying its own formatting so
/// the token can hold surrounding whitespace independently of the operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Addition(Formatting),
    Subtraction(Formatting),
    Multiplication(Formatting),
    Division(Formatting),
    Modulo(Formatting),
    LessThan(Formatting),
    GreaterThan(Formatting),
    LessThanOrEqual(Formatting),
    GreaterThanOrEqual(Formatting),
    Equal(Formatting),
    NotEqual(Formatting),
    BitAnd(Formatting),
    BitOr(Formatting),
    BitXor(Formatting),
    LeftShift(Formatting),
    RightShift(Formatting),
    UnsignedRightShift(Formatting),
    Or(Formatting),
    And(Formatting),
}

impl BinaryOperator {
    pub fn token(&self) -> &'static str {
        match self {
            BinaryOperator::Addition(_) => "+",
            BinaryOperator::Subtraction(_) => "-",
            BinaryOperator::Multiplication(_) => "*",
            BinaryOperator::Division(_) => "/",
            BinaryOperator::Modulo(_) => "%",
            BinaryOperator::LessThan(_) => "<",
            BinaryOperator::GreaterThan(_) => ">",
            BinaryOperator::LessThanOrEqual(_) => "<=",
            BinaryOperator::GreaterThanOrEqual(_) => ">=",
            BinaryOperator::Equal(_) => "==",
            BinaryOperator::NotEqual(_) => "!=",
            BinaryOperator::BitAnd(_) => "&",
            BinaryOperator::BitOr(_) => "|",
            BinaryOperator::BitXor(_) => "^",
            BinaryOperator::LeftShift(_) => "<<",
            BinaryOperator::RightShift(_) => ">>",
            BinaryOperator::UnsignedRightShift(_) => ">>>",
            BinaryOperator::Or(_) => "||",
            BinaryOperator::And(_) => "&&",
        }
    }

    pub fn formatting(&self) -> &Formatting {
        match self {
            BinaryOperator::Addition(f)
            | BinaryOperator::Subtraction(f)
            | BinaryOperator::Multiplication(f)
            | BinaryOperator::Division(f)
            | BinaryOperator::Modulo(f)
            | BinaryOperator::LessThan(f)
            | BinaryOperator::GreaterThan(f)
            | BinaryOperator::LessThanOrEqual(f)
            | BinaryOperator::GreaterThanOrEqual(f)
            | BinaryOperator::Equal(f)
            | BinaryOperator::NotEqual(f)
            | BinaryOperator::BitAnd(f)
            | BinaryOperator::BitOr(f)
            | BinaryOperator::BitXor(f)
            | BinaryOperator::LeftShift(f)
            | BinaryOperator::RightShift(f)
            | BinaryOperator::UnsignedRightShift(f)
            | BinaryOperator::Or(f)
            | BinaryOperator::And(f) => f,
        }
    }
}

/// `expr instanceof Clazz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceOf {
    pub id: NodeId,
    pub fmt: Formatting,
    pub expr: Box<Expression>,
    pub clazz: Box<TypeTree>,
    pub typ: Option<JavaType>,
}

impl InstanceOf {
    pub fn new(
        expr: Expression,
        clazz: TypeTree,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        InstanceOf {
            id: NodeId::next(),
            fmt,
            expr: Box::new(expr),
            clazz: Box::new(clazz),
            typ,
        }
    }
}

/// A lambda expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lambda {
    pub id: NodeId,
    pub fmt: Formatting,
    pub parenthesized: bool,
    pub params: Vec<VariableDecls>,
    /// Formatting of the `->` token.
    pub arrow: Formatting,
    pub body: LambdaBody,
    pub typ: Option<JavaType>,
}

impl Lambda {
    pub fn new(
        parenthesized: bool,
        params: Vec<VariableDecls>,
        arrow: Formatting,
        body: LambdaBody,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        Lambda {
            id: NodeId::next(),
            fmt,
            parenthesized,
            params,
            arrow,
            body,
            typ,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LambdaBody {
    Expr(Box<Expression>),
    Block(Block),
}

/// A (possibly selected) method call: `select.name(args)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInvocation {
    pub id: NodeId,
    pub fmt: Formatting,
    pub select: Option<Box<Expression>>,
    pub type_parameters: Option<super::TypeParameters>,
    pub name: Ident,
    pub args: Args,
    /// The resolved method, when type attribution succeeded. The expression's
    /// type is the resolved signature's return type and is derived from this
    /// rather than stored separately.
    pub method_type: Option<Arc<MethodType>>,
}

impl MethodInvocation {
    pub fn new(
        select: Option<Expression>,
        name: Ident,
        args: Args,
        method_type: Option<Arc<MethodType>>,
        fmt: Formatting,
    ) -> Self {
        MethodInvocation {
            id: NodeId::next(),
            fmt,
            select: select.map(Box::new),
            type_parameters: None,
            name,
            args,
            method_type,
        }
    }

    /// Replace the name identifier, preserving the invocation id.
    pub fn with_name(mut self, name: Ident) -> Self {
        self.name = name;
        self
    }

    /// The method's simple name as written.
    pub fn simple_name(&self) -> &str {
        &self.name.simple_name
    }

    /// The resolved declaring type, if type attribution succeeded.
    pub fn declaring_type(&self) -> Option<&Arc<crate::types::ClassType>> {
        self.method_type.as_ref().map(|m| &m.declaring_type)
    }

    /// The resolved return type, if type attribution succeeded.
    pub fn return_type(&self) -> Option<&JavaType> {
        self.method_type
            .as_ref()
            .map(|m| &m.resolved_signature.return_type)
    }
}

/// A parenthesized argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Args {
    pub id: NodeId,
    pub fmt: Formatting,
    pub args: Vec<Expression>,
}

impl Args {
    pub fn new(args: Vec<Expression>, fmt: Formatting) -> Self {
        Args {
            id: NodeId::next(),
            fmt,
            args,
        }
    }
}

/// `new T[dims]` or `new T[] { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArray {
    pub id: NodeId,
    pub fmt: Formatting,
    pub type_expr: Option<TypeTree>,
    pub dimensions: Vec<NewArrayDim>,
    pub initializer: Option<ArrayInit>,
    pub typ: Option<JavaType>,
}

impl NewArray {
    pub fn new(
        type_expr: Option<TypeTree>,
        dimensions: Vec<NewArrayDim>,
        initializer: Option<ArrayInit>,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        NewArray {
            id: NodeId::next(),
            fmt,
            type_expr,
            dimensions,
            initializer,
            typ,
        }
    }
}

/// One `[size]` dimension of a new-array expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArrayDim {
    pub fmt: Formatting,
    pub size: Expression,
}

impl NewArrayDim {
    pub fn new(size: Expression, fmt: Formatting) -> Self {
        NewArrayDim { fmt, size }
    }
}

/// A braced array initializer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayInit {
    pub fmt: Formatting,
    pub elements: Vec<Expression>,
}

/// `new Clazz(args)` with an optional anonymous class body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClass {
    pub id: NodeId,
    pub fmt: Formatting,
    pub clazz: TypeTree,
    pub args: Args,
    pub body: Option<Block>,
    pub typ: Option<JavaType>,
}

impl NewClass {
    pub fn new(
        clazz: TypeTree,
        args: Args,
        body: Option<Block>,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        NewClass {
            id: NodeId::next(),
            fmt,
            clazz,
            args,
            body,
            typ,
        }
    }
}

/// `condition ? true_part : false_part`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ternary {
    pub id: NodeId,
    pub fmt: Formatting,
    pub condition: Box<Expression>,
    pub true_part: Box<Expression>,
    pub false_part: Box<Expression>,
    pub typ: Option<JavaType>,
}

impl Ternary {
    pub fn new(
        condition: Expression,
        true_part: Expression,
        false_part: Expression,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        Ternary {
            id: NodeId::next(),
            fmt,
            condition: Box::new(condition),
            true_part: Box::new(true_part),
            false_part: Box::new(false_part),
            typ,
        }
    }
}

/// `(Clazz) expr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCast {
    pub id: NodeId,
    pub fmt: Formatting,
    pub clazz: Parens<TypeTree>,
    pub expr: Box<Expression>,
}

impl TypeCast {
    pub fn new(clazz: Parens<TypeTree>, expr: Expression, fmt: Formatting) -> Self {
        TypeCast {
            id: NodeId::next(),
            fmt,
            clazz,
            expr: Box::new(expr),
        }
    }
}

/// A prefix or postfix unary expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unary {
    pub id: NodeId,
    pub fmt: Formatting,
    pub operator: UnaryOperator,
    pub expr: Box<Expression>,
    pub typ: Option<JavaType>,
}

impl Unary {
    pub fn new(
        operator: UnaryOperator,
        expr: Expression,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        Unary {
            id: NodeId::next(),
            fmt,
            operator,
            expr: Box::new(expr),
            typ,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnaryOperator {
    PreIncrement(Formatting),
    PreDecrement(Formatting),
    PostIncrement(Formatting),
    PostDecrement(Formatting),
    Positive(Formatting),
    Negative(Formatting),
    Complement(Formatting),
    Not(Formatting),
}

impl UnaryOperator {
    pub fn token(&self) -> &'static str {
        match self {
            UnaryOperator::PreIncrement(_) | UnaryOperator::PostIncrement(_) => "++",
            UnaryOperator::PreDecrement(_) | UnaryOperator::PostDecrement(_) => "--",
            UnaryOperator::Positive(_) => "+",
            UnaryOperator::Negative(_) => "-",
            UnaryOperator::Complement(_) => "~",
            UnaryOperator::Not(_) => "!",
        }
    }

    /// True when the operator prints after its operand.
    pub fn is_postfix(&self) -> bool {
        matches!(
            self,
            UnaryOperator::PostIncrement(_) | UnaryOperator::PostDecrement(_)
        )
    }

    pub fn formatting(&self) -> &Formatting {
        match self {
            UnaryOperator::PreIncrement(f)
            | UnaryOperator::PreDecrement(f)
            | UnaryOperator::PostIncrement(f)
            | UnaryOperator::PostDecrement(f)
            | UnaryOperator::Positive(f)
            | UnaryOperator::Negative(f)
            | UnaryOperator::Complement(f)
            | UnaryOperator::Not(f) => f,
        }
    }
}

/// An empty expression or statement; prints only its formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empty {
    pub id: NodeId,
    pub fmt: Formatting,
}

impl Empty {
    pub fn new(fmt: Formatting) -> Self {
        Empty {
            id: NodeId::next(),
            fmt,
        }
    }
}
