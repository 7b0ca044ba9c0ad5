//! Statement and declaration nodes, including the compilation unit.

use serde::{Deserialize, Serialize};

use crate::types::JavaType;

use super::{
    Args, ArrayDim, Empty, Expression, FieldAccess, Formatting, Ident, NodeId, Parens, TypeTree,
};

// ============================================================================
// Statement
// ============================================================================

/// The closed set of statement kinds.
///
/// Declarations (classes, methods, fields, enum values) are statements too so
/// class bodies and blocks share one list representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Block(Block),
    Break(Break),
    Case(Case),
    Catch(Catch),
    ClassDecl(ClassDecl),
    Continue(Continue),
    DoWhileLoop(DoWhileLoop),
    Empty(Empty),
    EnumValueSet(EnumValueSet),
    Expression(Expression),
    ForEachLoop(ForEachLoop),
    ForLoop(ForLoop),
    If(If),
    Label(Label),
    MethodDecl(MethodDecl),
    Return(Return),
    Switch(Switch),
    Synchronized(Synchronized),
    Throw(Throw),
    Try(Try),
    VariableDecls(VariableDecls),
    WhileLoop(WhileLoop),
}

impl Statement {
    pub fn id(&self) -> NodeId {
        match self {
            Statement::Block(n) => n.id,
            Statement::Break(n) => n.id,
            Statement::Case(n) => n.id,
            Statement::Catch(n) => n.id,
            Statement::ClassDecl(n) => n.id,
            Statement::Continue(n) => n.id,
            Statement::DoWhileLoop(n) => n.id,
            Statement::Empty(n) => n.id,
            Statement::EnumValueSet(n) => n.id,
            Statement::Expression(n) => n.id(),
            Statement::ForEachLoop(n) => n.id,
            Statement::ForLoop(n) => n.id,
            Statement::If(n) => n.id,
            Statement::Label(n) => n.id,
            Statement::MethodDecl(n) => n.id,
            Statement::Return(n) => n.id,
            Statement::Switch(n) => n.id,
            Statement::Synchronized(n) => n.id,
            Statement::Throw(n) => n.id,
            Statement::Try(n) => n.id,
            Statement::VariableDecls(n) => n.id,
            Statement::WhileLoop(n) => n.id,
        }
    }
}

// ============================================================================
// Compilation unit
// ============================================================================

/// The tree rooted at one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub id: NodeId,
    pub fmt: Formatting,
    pub source_path: String,
    pub package: Option<Package>,
    pub imports: Vec<Import>,
    pub classes: Vec<ClassDecl>,
}

impl CompilationUnit {
    pub fn new(
        source_path: impl Into<String>,
        package: Option<Package>,
        imports: Vec<Import>,
        classes: Vec<ClassDecl>,
        fmt: Formatting,
    ) -> Self {
        CompilationUnit {
            id: NodeId::next(),
            fmt,
            source_path: source_path.into(),
            package,
            imports,
            classes,
        }
    }

    /// Replace the import list, preserving the unit's id.
    pub fn with_imports(mut self, imports: Vec<Import>) -> Self {
        self.imports = imports;
        self
    }
}

/// `package a.b;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: NodeId,
    pub fmt: Formatting,
    pub expr: Expression,
}

impl Package {
    pub fn new(expr: Expression, fmt: Formatting) -> Self {
        Package {
            id: NodeId::next(),
            fmt,
            expr,
        }
    }
}

/// `import a.b.C;`, `import a.b.*;`, or the static forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub id: NodeId,
    pub fmt: Formatting,
    /// Formatting of the `static` keyword; `None` for a plain import.
    pub statik: Option<Formatting>,
    pub qualid: FieldAccess,
}

impl Import {
    pub fn new(qualid: FieldAccess, statik: Option<Formatting>, fmt: Formatting) -> Self {
        Import {
            id: NodeId::next(),
            fmt,
            statik,
            qualid,
        }
    }

    /// Replace the imported path, preserving id and formatting.
    pub fn with_qualid(mut self, qualid: FieldAccess) -> Self {
        self.qualid = qualid;
        self
    }

    /// The dotted name as written, e.g. `a.b.C` or `a.b.*`.
    pub fn qualified_name(&self) -> String {
        self.qualid.flat_name()
    }

    /// True for on-demand (`.*`) imports.
    pub fn is_star(&self) -> bool {
        self.qualid.name.simple_name == "*"
    }

    pub fn is_static(&self) -> bool {
        self.statik.is_some()
    }

    /// The target left of the final segment: the package of a single-type
    /// import, or the type of a static import.
    pub fn target(&self) -> String {
        match self.qualid.target.as_ref() {
            Expression::Ident(i) => i.simple_name.clone(),
            Expression::FieldAccess(f) => f.flat_name(),
            _ => String::new(),
        }
    }

    /// True when this import covers `clazz`: a single-type import with that
    /// exact qualified name, or a star import whose target equals the
    /// class's package prefix.
    pub fn matches(&self, clazz: &str) -> bool {
        if self.is_star() {
            let package = match clazz.rfind('.') {
                Some(idx) => &clazz[..idx],
                None => clazz,
            };
            self.target() == package
        } else {
            self.qualified_name() == clazz
        }
    }
}

// ============================================================================
// Class declarations
// ============================================================================

/// A class, interface, enum, or annotation declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub id: NodeId,
    pub fmt: Formatting,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub kind: ClassKind,
    pub name: Ident,
    pub type_parameters: Option<TypeParameters>,
    pub extends: Option<Extends>,
    pub implements: Option<Implements>,
    pub body: Block,
    pub typ: Option<JavaType>,
}

impl ClassDecl {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        annotations: Vec<Annotation>,
        modifiers: Vec<Modifier>,
        kind: ClassKind,
        name: Ident,
        extends: Option<Extends>,
        implements: Option<Implements>,
        body: Block,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        ClassDecl {
            id: NodeId::next(),
            fmt,
            annotations,
            modifiers,
            kind,
            name,
            type_parameters: None,
            extends,
            implements,
            body,
            typ,
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.name.simple_name
    }

    /// The field declarations directly inside this class body.
    pub fn fields(&self) -> impl Iterator<Item = &VariableDecls> {
        self.body.statements.iter().filter_map(|s| match s {
            Statement::VariableDecls(v) => Some(v),
            _ => None,
        })
    }

    /// The method declarations directly inside this class body.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.body.statements.iter().filter_map(|s| match s {
            Statement::MethodDecl(m) => Some(m),
            _ => None,
        })
    }
}

/// The declaration keyword, carrying its own formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassKind {
    Class(Formatting),
    Interface(Formatting),
    Enum(Formatting),
    Annotation(Formatting),
}

impl ClassKind {
    pub fn token(&self) -> &'static str {
        match self {
            ClassKind::Class(_) => "class",
            ClassKind::Interface(_) => "interface",
            ClassKind::Enum(_) => "enum",
            ClassKind::Annotation(_) => "@interface",
        }
    }

    pub fn formatting(&self) -> &Formatting {
        match self {
            ClassKind::Class(f)
            | ClassKind::Interface(f)
            | ClassKind::Enum(f)
            | ClassKind::Annotation(f) => f,
        }
    }
}

/// A declaration modifier keyword with its own formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Modifier {
    Public(Formatting),
    Protected(Formatting),
    Private(Formatting),
    Abstract(Formatting),
    Static(Formatting),
    Final(Formatting),
    Native(Formatting),
    Synchronized(Formatting),
    Transient(Formatting),
    Volatile(Formatting),
    Strictfp(Formatting),
    Default(Formatting),
}

impl Modifier {
    pub fn token(&self) -> &'static str {
        match self {
            Modifier::Public(_) => "public",
            Modifier::Protected(_) => "protected",
            Modifier::Private(_) => "private",
            Modifier::Abstract(_) => "abstract",
            Modifier::Static(_) => "static",
            Modifier::Final(_) => "final",
            Modifier::Native(_) => "native",
            Modifier::Synchronized(_) => "synchronized",
            Modifier::Transient(_) => "transient",
            Modifier::Volatile(_) => "volatile",
            Modifier::Strictfp(_) => "strictfp",
            Modifier::Default(_) => "default",
        }
    }

    pub fn formatting(&self) -> &Formatting {
        match self {
            Modifier::Public(f)
            | Modifier::Protected(f)
            | Modifier::Private(f)
            | Modifier::Abstract(f)
            | Modifier::Static(f)
            | Modifier::Final(f)
            | Modifier::Native(f)
            | Modifier::Synchronized(f)
            | Modifier::Transient(f)
            | Modifier::Volatile(f)
            | Modifier::Strictfp(f)
            | Modifier::Default(f) => f,
        }
    }
}

/// The `extends` clause; the keyword's whitespace lives on this node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extends {
    pub id: NodeId,
    pub fmt: Formatting,
    pub from: TypeTree,
}

impl Extends {
    pub fn new(from: TypeTree, fmt: Formatting) -> Self {
        Extends {
            id: NodeId::next(),
            fmt,
            from,
        }
    }
}

/// The `implements` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Implements {
    pub id: NodeId,
    pub fmt: Formatting,
    pub from: Vec<TypeTree>,
}

impl Implements {
    pub fn new(from: Vec<TypeTree>, fmt: Formatting) -> Self {
        Implements {
            id: NodeId::next(),
            fmt,
            from,
        }
    }
}

/// `@Anno` or `@Anno(args)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: NodeId,
    pub fmt: Formatting,
    pub annotation_type: TypeTree,
    pub args: Option<Args>,
}

impl Annotation {
    pub fn new(annotation_type: TypeTree, args: Option<Args>, fmt: Formatting) -> Self {
        Annotation {
            id: NodeId::next(),
            fmt,
            annotation_type,
            args,
        }
    }
}

// ============================================================================
// Method declarations
// ============================================================================

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub id: NodeId,
    pub fmt: Formatting,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub type_parameters: Option<TypeParameters>,
    /// Absent for constructors.
    pub return_type: Option<TypeTree>,
    pub name: Ident,
    pub params: Parameters,
    pub throws: Option<Throws>,
    /// Absent for abstract and interface methods.
    pub body: Option<Block>,
}

impl MethodDecl {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        annotations: Vec<Annotation>,
        modifiers: Vec<Modifier>,
        return_type: Option<TypeTree>,
        name: Ident,
        params: Parameters,
        throws: Option<Throws>,
        body: Option<Block>,
        fmt: Formatting,
    ) -> Self {
        MethodDecl {
            id: NodeId::next(),
            fmt,
            annotations,
            modifiers,
            type_parameters: None,
            return_type,
            name,
            params,
            throws,
            body,
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.name.simple_name
    }
}

/// The parenthesized parameter list of a method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub id: NodeId,
    pub fmt: Formatting,
    pub params: Vec<VariableDecls>,
}

impl Parameters {
    pub fn new(params: Vec<VariableDecls>, fmt: Formatting) -> Self {
        Parameters {
            id: NodeId::next(),
            fmt,
            params,
        }
    }
}

/// The `throws` clause of a method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throws {
    pub id: NodeId,
    pub fmt: Formatting,
    pub exceptions: Vec<TypeTree>,
}

impl Throws {
    pub fn new(exceptions: Vec<TypeTree>, fmt: Formatting) -> Self {
        Throws {
            id: NodeId::next(),
            fmt,
            exceptions,
        }
    }
}

// ============================================================================
// Variable declarations
// ============================================================================

/// A (possibly multi-) variable declaration: `int a = 1, b = 2;`
///
/// Each named variable carries its own name, dimensions, and initializer;
/// the declaration holds the shared annotations, modifiers, and type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDecls {
    pub id: NodeId,
    pub fmt: Formatting,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    /// Absent for inferred lambda parameters.
    pub type_expr: Option<TypeTree>,
    /// Formatting of the `...` token for a varargs parameter.
    pub varargs: Option<Formatting>,
    pub dims_before_name: Vec<ArrayDim>,
    pub vars: Vec<NamedVar>,
}

impl VariableDecls {
    pub fn new(
        annotations: Vec<Annotation>,
        modifiers: Vec<Modifier>,
        type_expr: Option<TypeTree>,
        vars: Vec<NamedVar>,
        fmt: Formatting,
    ) -> Self {
        VariableDecls {
            id: NodeId::next(),
            fmt,
            annotations,
            modifiers,
            type_expr,
            varargs: None,
            dims_before_name: Vec::new(),
            vars,
        }
    }

    /// The declared type of the first named variable, if resolved.
    pub fn declared_type(&self) -> Option<&JavaType> {
        self.vars.first().and_then(|v| v.typ.as_ref())
    }
}

/// One name within a variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedVar {
    pub id: NodeId,
    pub fmt: Formatting,
    pub name: Ident,
    pub dims_after_name: Vec<ArrayDim>,
    pub initializer: Option<Expression>,
    pub typ: Option<JavaType>,
}

impl NamedVar {
    pub fn new(
        name: Ident,
        initializer: Option<Expression>,
        typ: Option<JavaType>,
        fmt: Formatting,
    ) -> Self {
        NamedVar {
            id: NodeId::next(),
            fmt,
            name,
            dims_after_name: Vec::new(),
            initializer,
            typ,
        }
    }
}

// ============================================================================
// Blocks and control flow
// ============================================================================

/// A braced statement list. `end_of_block_suffix` is the whitespace between
/// the last statement and the closing brace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: NodeId,
    pub fmt: Formatting,
    pub statements: Vec<Statement>,
    pub end_of_block_suffix: String,
}

impl Block {
    pub fn new(
        statements: Vec<Statement>,
        end_of_block_suffix: impl Into<String>,
        fmt: Formatting,
    ) -> Self {
        Block {
            id: NodeId::next(),
            fmt,
            statements,
            end_of_block_suffix: end_of_block_suffix.into(),
        }
    }

    pub fn with_statements(mut self, statements: Vec<Statement>) -> Self {
        self.statements = statements;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    pub id: NodeId,
    pub fmt: Formatting,
    pub label: Option<Ident>,
}

impl Break {
    pub fn new(label: Option<Ident>, fmt: Formatting) -> Self {
        Break {
            id: NodeId::next(),
            fmt,
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Continue {
    pub id: NodeId,
    pub fmt: Formatting,
    pub label: Option<Ident>,
}

impl Continue {
    pub fn new(label: Option<Ident>, fmt: Formatting) -> Self {
        Continue {
            id: NodeId::next(),
            fmt,
            label,
        }
    }
}

/// A `case expr:` or `default:` group within a switch block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: NodeId,
    pub fmt: Formatting,
    /// `None` for the `default` case.
    pub pattern: Option<Expression>,
    pub statements: Vec<Statement>,
}

impl Case {
    pub fn new(pattern: Option<Expression>, statements: Vec<Statement>, fmt: Formatting) -> Self {
        Case {
            id: NodeId::next(),
            fmt,
            pattern,
            statements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catch {
    pub id: NodeId,
    pub fmt: Formatting,
    pub param: Parens<VariableDecls>,
    pub body: Block,
}

impl Catch {
    pub fn new(param: Parens<VariableDecls>, body: Block, fmt: Formatting) -> Self {
        Catch {
            id: NodeId::next(),
            fmt,
            param,
            body,
        }
    }
}

/// `do body while (condition)`; the `while` keyword's whitespace lives in
/// `while_kw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileLoop {
    pub id: NodeId,
    pub fmt: Formatting,
    pub body: Box<Statement>,
    pub while_kw: Formatting,
    pub condition: Parens<Expression>,
}

impl DoWhileLoop {
    pub fn new(
        body: Statement,
        while_kw: Formatting,
        condition: Parens<Expression>,
        fmt: Formatting,
    ) -> Self {
        DoWhileLoop {
            id: NodeId::next(),
            fmt,
            body: Box::new(body),
            while_kw,
            condition,
        }
    }
}

/// One enum constant, with optional constructor arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub id: NodeId,
    pub fmt: Formatting,
    pub name: Ident,
    pub initializer: Option<Args>,
}

impl EnumValue {
    pub fn new(name: Ident, initializer: Option<Args>, fmt: Formatting) -> Self {
        EnumValue {
            id: NodeId::next(),
            fmt,
            name,
            initializer,
        }
    }
}

/// The comma-separated run of enum constants at the top of an enum body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueSet {
    pub id: NodeId,
    pub fmt: Formatting,
    pub values: Vec<EnumValue>,
    pub terminated_with_semicolon: bool,
}

impl EnumValueSet {
    pub fn new(values: Vec<EnumValue>, terminated_with_semicolon: bool, fmt: Formatting) -> Self {
        EnumValueSet {
            id: NodeId::next(),
            fmt,
            values,
            terminated_with_semicolon,
        }
    }
}

/// `for (variable : iterable) body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForEachLoop {
    pub id: NodeId,
    pub fmt: Formatting,
    pub control: ForEachControl,
    pub body: Box<Statement>,
}

impl ForEachLoop {
    pub fn new(control: ForEachControl, body: Statement, fmt: Formatting) -> Self {
        ForEachLoop {
            id: NodeId::next(),
            fmt,
            control,
            body: Box::new(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForEachControl {
    pub id: NodeId,
    pub fmt: Formatting,
    pub variable: VariableDecls,
    pub iterable: Expression,
}

impl ForEachControl {
    pub fn new(variable: VariableDecls, iterable: Expression, fmt: Formatting) -> Self {
        ForEachControl {
            id: NodeId::next(),
            fmt,
            variable,
            iterable,
        }
    }
}

/// `for (init; condition; update) body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForLoop {
    pub id: NodeId,
    pub fmt: Formatting,
    pub control: ForControl,
    pub body: Box<Statement>,
}

impl ForLoop {
    pub fn new(control: ForControl, body: Statement, fmt: Formatting) -> Self {
        ForLoop {
            id: NodeId::next(),
            fmt,
            control,
            body: Box::new(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForControl {
    pub id: NodeId,
    pub fmt: Formatting,
    pub init: Box<Statement>,
    pub condition: Box<Expression>,
    pub update: Vec<Statement>,
}

impl ForControl {
    pub fn new(
        init: Statement,
        condition: Expression,
        update: Vec<Statement>,
        fmt: Formatting,
    ) -> Self {
        ForControl {
            id: NodeId::next(),
            fmt,
            init: Box::new(init),
            condition: Box::new(condition),
            update,
        }
    }
}

/// `if (condition) then_part else else_part`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub id: NodeId,
    pub fmt: Formatting,
    pub condition: Parens<Expression>,
    pub then_part: Box<Statement>,
    pub else_part: Option<Else>,
}

impl If {
    pub fn new(
        condition: Parens<Expression>,
        then_part: Statement,
        else_part: Option<Else>,
        fmt: Formatting,
    ) -> Self {
        If {
            id: NodeId::next(),
            fmt,
            condition,
            then_part: Box::new(then_part),
            else_part,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Else {
    pub id: NodeId,
    pub fmt: Formatting,
    pub body: Box<Statement>,
}

impl Else {
    pub fn new(body: Statement, fmt: Formatting) -> Self {
        Else {
            id: NodeId::next(),
            fmt,
            body: Box::new(body),
        }
    }
}

/// `label: statement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: NodeId,
    pub fmt: Formatting,
    pub label: Ident,
    pub statement: Box<Statement>,
}

impl Label {
    pub fn new(label: Ident, statement: Statement, fmt: Formatting) -> Self {
        Label {
            id: NodeId::next(),
            fmt,
            label,
            statement: Box::new(statement),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    pub id: NodeId,
    pub fmt: Formatting,
    pub expr: Option<Expression>,
}

impl Return {
    pub fn new(expr: Option<Expression>, fmt: Formatting) -> Self {
        Return {
            id: NodeId::next(),
            fmt,
            expr,
        }
    }
}

/// `switch (selector) { cases }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub id: NodeId,
    pub fmt: Formatting,
    pub selector: Parens<Expression>,
    pub cases: Block,
}

impl Switch {
    pub fn new(selector: Parens<Expression>, cases: Block, fmt: Formatting) -> Self {
        Switch {
            id: NodeId::next(),
            fmt,
            selector,
            cases,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synchronized {
    pub id: NodeId,
    pub fmt: Formatting,
    pub lock: Parens<Expression>,
    pub body: Block,
}

impl Synchronized {
    pub fn new(lock: Parens<Expression>, body: Block, fmt: Formatting) -> Self {
        Synchronized {
            id: NodeId::next(),
            fmt,
            lock,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throw {
    pub id: NodeId,
    pub fmt: Formatting,
    pub exception: Expression,
}

impl Throw {
    pub fn new(exception: Expression, fmt: Formatting) -> Self {
        Throw {
            id: NodeId::next(),
            fmt,
            exception,
        }
    }
}

/// `try (resources) body catches finally`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Try {
    pub id: NodeId,
    pub fmt: Formatting,
    pub resources: Option<TryResources>,
    pub body: Block,
    pub catches: Vec<Catch>,
    pub finally_block: Option<Finally>,
}

impl Try {
    pub fn new(
        resources: Option<TryResources>,
        body: Block,
        catches: Vec<Catch>,
        finally_block: Option<Finally>,
        fmt: Formatting,
    ) -> Self {
        Try {
            id: NodeId::next(),
            fmt,
            resources,
            body,
            catches,
            finally_block,
        }
    }
}

/// The parenthesized, semicolon-separated resource declarations of a try.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryResources {
    pub id: NodeId,
    pub fmt: Formatting,
    pub decls: Vec<VariableDecls>,
}

impl TryResources {
    pub fn new(decls: Vec<VariableDecls>, fmt: Formatting) -> Self {
        TryResources {
            id: NodeId::next(),
            fmt,
            decls,
        }
    }
}

/// The `finally` clause; the keyword's whitespace lives on this node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finally {
    pub id: NodeId,
    pub fmt: Formatting,
    pub block: Block,
}

impl Finally {
    pub fn new(block: Block, fmt: Formatting) -> Self {
        Finally {
            id: NodeId::next(),
            fmt,
            block,
        }
    }
}

// ============================================================================
// Type parameters
// ============================================================================

/// `<T, U extends Bound>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameters {
    pub id: NodeId,
    pub fmt: Formatting,
    pub params: Vec<TypeParameter>,
}

impl TypeParameters {
    pub fn new(params: Vec<TypeParameter>, fmt: Formatting) -> Self {
        TypeParameters {
            id: NodeId::next(),
            fmt,
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub id: NodeId,
    pub fmt: Formatting,
    pub annotations: Vec<Annotation>,
    pub name: Box<TypeTree>,
    pub bounds: Option<Bounds>,
}

impl TypeParameter {
    pub fn new(
        annotations: Vec<Annotation>,
        name: TypeTree,
        bounds: Option<Bounds>,
        fmt: Formatting,
    ) -> Self {
        TypeParameter {
            id: NodeId::next(),
            fmt,
            annotations,
            name: Box::new(name),
            bounds,
        }
    }
}

/// The `extends A & B` bounds of a type parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub id: NodeId,
    pub fmt: Formatting,
    pub types: Vec<TypeTree>,
}

impl Bounds {
    pub fn new(types: Vec<TypeTree>, fmt: Formatting) -> Self {
        Bounds {
            id: NodeId::next(),
            fmt,
            types,
        }
    }
}

/// `while (condition) body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileLoop {
    pub id: NodeId,
    pub fmt: Formatting,
    pub condition: Parens<Expression>,
    pub body: Box<Statement>,
}

impl WhileLoop {
    pub fn new(condition: Parens<Expression>, body: Statement, fmt: Formatting) -> Self {
        WhileLoop {
            id: NodeId::next(),
            fmt,
            condition,
            body: Box::new(body),
        }
    }
}
