//! Visitor infrastructure for tree traversal.
//!
//! Two traversal styles:
//!
//! - [`JavaVisitor`] with the `walk_*` functions: read-only, pre/post hooks,
//!   [`VisitResult`] flow control. The search collectors are built on this.
//! - [`JavaRefactorVisitor`] with the `refactor_*` functions: owned-node
//!   rewriting with post-order reassembly, an ancestor [`Cursor`] stack, and
//!   fix/warning collection in [`RefactorCtx`].

mod cursor;
mod dispatch;
mod refactor;
mod search;
mod traits;

pub use cursor::{Cursor, CursorEntry};
pub use dispatch::*;
pub use refactor::*;
pub use search::{InvocationCollector, StaticMethodCollector, TypeReferenceCollector};
pub use traits::{JavaRefactorVisitor, JavaVisitor, VisitResult};
