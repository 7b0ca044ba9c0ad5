//! Refactoring operations for Java source.
//!
//! This crate sits on top of `rejig-java-cst` and provides:
//!
//! - the [`matcher`]: AspectJ-style method signature compilation and
//!   matching with subtype acceptance;
//! - the [`refactor`] pipeline: transactions that stage rewriting visitors
//!   and produce a fixed tree plus a textual patch;
//! - the built-in [`ops`]: `ChangeType`, `ChangeMethodName`,
//!   `ChangeLiteral`, `RemoveImport`, `AddImport`;
//! - [`search`]: `find_method_calls` and friends.
//!
//! # Example
//!
//! ```ignore
//! use rejig_java::{ops::ChangeType, refactor::Refactor};
//!
//! let result = Refactor::new(cu)
//!     .visit(ChangeType::new("a.A1", "a.A2"))
//!     .fix()?;
//! println!("{}", result.patch.unified_diff);
//! ```

pub mod matcher;
pub mod ops;
pub mod refactor;
pub mod search;

pub use matcher::{MethodMatcher, SignatureError};
pub use refactor::{Refactor, RefactorError, RefactorResult};
pub use search::find_method_calls;
