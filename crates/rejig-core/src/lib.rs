//! Shared fix and patch infrastructure for rejig.
//!
//! This crate holds the language-independent pieces of the refactoring
//! engine:
//!
//! - **Fix IR** ([`fix`]): spans, `Delete`/`Replace`/`Insert` fixes, conflict
//!   detection, and atomic application to source text.
//! - **Patch rendering** ([`diff`]): unified diff output with context lines.
//! - **Text positions** ([`text`]): byte offset to line:column conversion.
//!
//! The Java-specific tree, visitors, and refactor operations live in
//! `rejig-java-cst` and `rejig-java` and build on this crate.

pub mod diff;
pub mod fix;
pub mod text;

pub use fix::{Fix, FixError, FixRecord, FixSet, Patch, Span};
