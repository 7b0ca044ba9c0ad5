//! A lossless Java syntax tree with a type model, printer, and visitors.
//!
//! This crate holds the language core of rejig:
//!
//! - **Tree model** ([`nodes`]): ~45 immutable node kinds, each carrying the
//!   whitespace and comments needed to reprint the original source byte for
//!   byte, plus a stable [`NodeId`](nodes::NodeId).
//! - **Type model** ([`types`]): resolved symbol descriptors with an interned
//!   class cache and the subtype relation.
//! - **Printer** ([`printer`]): deterministic printing and span recording;
//!   for a freshly parsed tree, `print` is the identity.
//! - **Visitors** ([`visitor`]): read-only walks with collectors, and the
//!   rewriting traversal used by the refactor pipeline.
//!
//! Trees are produced by an external parser (or built programmatically) and
//! never mutated: rewrites produce new nodes, and nodes that are not replaced
//! keep their ids.
//!
//! # Round trip
//!
//! ```
//! use rejig_java_cst::nodes::{Expression, Formatting, Ident};
//! use rejig_java_cst::printer::Print;
//!
//! let expr = Expression::Ident(Ident::new("x", None, Formatting::prefixed(" ")));
//! assert_eq!(expr.print(), " x");
//! ```

pub mod nodes;
pub mod printer;
pub mod types;
pub mod visitor;

pub use nodes::{Formatting, NodeId, NodeKind};
pub use printer::{Print, PrintError, PrintState, SpanTable};
pub use types::{ClassType, JavaType, MethodSignature, MethodType, PrimitiveTag, VarType};
pub use visitor::{JavaRefactorVisitor, JavaVisitor, RefactorCtx, VisitResult, Warning};
