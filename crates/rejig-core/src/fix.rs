//! Fix IR: spans, textual fixes, and atomic application to source text.
//!
//! A refactor pass over a compilation unit produces a set of [`Fix`]es, each a
//! localized textual edit expressed in byte offsets of the printed source:
//! - `Delete(span)` removes the bytes in `span`
//! - `Replace(span, text)` substitutes the bytes in `span`
//! - `Insert(offset, text)` inserts at a position
//!
//! Fixes within one pass are collected into a [`FixSet`], normalized (sorted,
//! de-duplicated by containment), checked for overlap, and applied atomically:
//! either every fix applies or none do.

use serde::{Deserialize, Serialize};
use std::fmt;

use thiserror::Error;

use crate::text::byte_offset_to_position;

// ============================================================================
// Span
// ============================================================================

/// A half-open byte range `[start, end)` into source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Span { start, end }
    }

    /// A zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span overlaps another.
    ///
    /// Adjacent spans (one ends where the other starts) do NOT overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if this span contains another span entirely.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

// ============================================================================
// Fix
// ============================================================================

/// A single localized textual edit produced by a refactor visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fix {
    /// Remove the bytes in `span`.
    Delete { span: Span },
    /// Substitute the bytes in `span` with `text`.
    Replace { span: Span, text: String },
    /// Insert `text` at `offset`.
    Insert { offset: usize, text: String },
}

impl Fix {
    /// Create a Delete fix.
    ///
    /// # Panics
    /// Panics if the span is empty; deleting nothing is a bug in the caller.
    pub fn delete(span: Span) -> Self {
        assert!(!span.is_empty(), "delete span must be non-empty, got {span}");
        Fix::Delete { span }
    }

    /// Create a Replace fix.
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Fix::Replace {
            span,
            text: text.into(),
        }
    }

    /// Create an Insert fix.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Fix::Insert {
            offset,
            text: text.into(),
        }
    }

    /// The span this fix operates on. Inserts report a zero-width span.
    pub fn span(&self) -> Span {
        match self {
            Fix::Delete { span } => *span,
            Fix::Replace { span, .. } => *span,
            Fix::Insert { offset, .. } => Span::point(*offset),
        }
    }

    /// The replacement text (empty for Delete).
    pub fn text(&self) -> &str {
        match self {
            Fix::Delete { .. } => "",
            Fix::Replace { text, .. } => text,
            Fix::Insert { text, .. } => text,
        }
    }
}

/// Errors raised while normalizing or applying a fix set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// Two fixes within one pass partially overlap.
    #[error("conflicting fixes: {first} overlaps {second}")]
    ConflictingFixes { first: Span, second: Span },

    /// A fix span extends beyond the source length.
    #[error("fix span {span} is out of bounds for source of length {source_len}")]
    SpanOutOfBounds { span: Span, source_len: usize },
}

// ============================================================================
// FixSet
// ============================================================================

/// The fixes collected during a single refactor pass.
///
/// A fix set is normalized before application: fixes are ordered by start
/// offset, a replacement wholly contained in another replacement is dropped
/// (the outer replacement text already includes the inner change), and any
/// remaining overlap is a [`FixError::ConflictingFixes`] error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSet {
    fixes: Vec<Fix>,
}

impl FixSet {
    /// Create an empty fix set.
    pub fn new() -> Self {
        FixSet::default()
    }

    /// Add a fix.
    pub fn push(&mut self, fix: Fix) {
        self.fixes.push(fix);
    }

    /// Number of fixes.
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    /// Check if the set contains no fixes.
    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// The fixes in their current order.
    pub fn fixes(&self) -> &[Fix] {
        &self.fixes
    }

    /// Absorb every fix from `other`.
    pub fn extend(&mut self, other: FixSet) {
        self.fixes.extend(other.fixes);
    }

    /// Sort by start offset, resolve replacement containment, and reject
    /// partial overlap.
    pub fn normalize(mut self) -> Result<FixSet, FixError> {
        // Stable sort: by start ascending, wider span first so a containing
        // replacement precedes the replacements it swallows.
        self.fixes
            .sort_by(|a, b| {
                let (sa, sb) = (a.span(), b.span());
                sa.start.cmp(&sb.start).then(sb.end.cmp(&sa.end))
            });

        let mut kept: Vec<Fix> = Vec::with_capacity(self.fixes.len());
        for fix in self.fixes {
            let span = fix.span();
            if let Some(prev) = kept.last() {
                let prev_span = prev.span();
                if prev_span.overlaps(&span) {
                    let both_replace = matches!(prev, Fix::Replace { .. })
                        && matches!(fix, Fix::Replace { .. });
                    if both_replace && prev_span.contains(&span) {
                        // The outer replacement already prints the inner one.
                        continue;
                    }
                    return Err(FixError::ConflictingFixes {
                        first: prev_span,
                        second: span,
                    });
                }
            }
            kept.push(fix);
        }

        Ok(FixSet { fixes: kept })
    }

    /// Apply the fixes to `source`, producing the revised text.
    ///
    /// The set is normalized first. Fixes are applied in reverse offset order
    /// so earlier spans stay valid while later text shifts.
    pub fn apply(self, source: &str) -> Result<(String, FixSet), FixError> {
        let normalized = self.normalize()?;

        for fix in &normalized.fixes {
            let span = fix.span();
            if span.end > source.len() {
                return Err(FixError::SpanOutOfBounds {
                    span,
                    source_len: source.len(),
                });
            }
        }

        let mut text = source.to_string();
        for fix in normalized.fixes.iter().rev() {
            let span = fix.span();
            text.replace_range(span.start..span.end, fix.text());
        }

        Ok((text, normalized))
    }

    /// Build structured per-fix records against the source the fixes target.
    pub fn materialize(&self, source: &str, file: &str) -> Vec<FixRecord> {
        self.fixes
            .iter()
            .map(|fix| {
                let span = fix.span();
                let old_text = source.get(span.start..span.end).unwrap_or("").to_string();
                let (line, col) = byte_offset_to_position(source, span.start);
                FixRecord {
                    file: file.to_string(),
                    span,
                    old_text,
                    new_text: fix.text().to_string(),
                    line,
                    col,
                }
            })
            .collect()
    }
}

// ============================================================================
// Patch materialization
// ============================================================================

/// A single fix as it appears in patch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRecord {
    /// Workspace-relative file path.
    pub file: String,
    /// Byte range replaced, relative to the pass's input source.
    pub span: Span,
    /// Original text at the span.
    pub old_text: String,
    /// Replacement text (empty for deletions).
    pub new_text: String,
    /// 1-indexed line of the span start.
    pub line: u32,
    /// 1-indexed column of the span start.
    pub col: u32,
}

/// The textual outcome of a refactor transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    /// Per-fix records, in application order, across all passes.
    pub records: Vec<FixRecord>,
    /// Standard unified diff from the original source to the fixed source.
    pub unified_diff: String,
}

impl Patch {
    /// An empty patch (no fixes, no diff).
    pub fn empty() -> Self {
        Patch {
            records: Vec::new(),
            unified_diff: String::new(),
        }
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.unified_diff.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod span_tests {
        use super::*;

        #[test]
        fn overlap_detection() {
            let a = Span::new(10, 20);
            let b = Span::new(15, 25);
            let c = Span::new(20, 30);

            assert!(a.overlaps(&b));
            assert!(b.overlaps(&a));
            // Adjacent spans do not overlap
            assert!(!a.overlaps(&c));
            assert!(!c.overlaps(&a));
        }

        #[test]
        fn containment() {
            let outer = Span::new(10, 30);
            let inner = Span::new(15, 25);
            assert!(outer.contains(&inner));
            assert!(!inner.contains(&outer));
            assert!(outer.contains(&outer));
        }
    }

    mod apply_tests {
        use super::*;

        #[test]
        fn replace_single() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(4, 7), "bar"));
            let (out, _) = fixes.apply("int foo = 1;").unwrap();
            assert_eq!(out, "int bar = 1;");
        }

        #[test]
        fn multiple_fixes_apply_in_reverse_offset_order() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(0, 3), "AAA"));
            fixes.push(Fix::replace(Span::new(8, 11), "CCC"));
            let (out, _) = fixes.apply("aaa bbb ccc").unwrap();
            assert_eq!(out, "AAA bbb CCC");
        }

        #[test]
        fn delete_and_insert() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::delete(Span::new(0, 4)));
            fixes.push(Fix::insert(11, "!"));
            let (out, _) = fixes.apply("xxx hello w").unwrap();
            assert_eq!(out, "hello w!");
        }

        #[test]
        fn out_of_bounds_is_rejected() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(0, 100), "x"));
            let err = fixes.apply("short").unwrap_err();
            assert!(matches!(err, FixError::SpanOutOfBounds { .. }));
        }

        #[test]
        fn empty_set_is_identity() {
            let (out, normalized) = FixSet::new().apply("unchanged").unwrap();
            assert_eq!(out, "unchanged");
            assert!(normalized.is_empty());
        }
    }

    mod normalize_tests {
        use super::*;

        #[test]
        fn partial_overlap_is_a_conflict() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(0, 10), "a"));
            fixes.push(Fix::replace(Span::new(5, 15), "b"));
            let err = fixes.normalize().unwrap_err();
            assert!(matches!(err, FixError::ConflictingFixes { .. }));
        }

        #[test]
        fn contained_replacement_is_dropped() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(4, 7), "inner"));
            fixes.push(Fix::replace(Span::new(0, 10), "outer"));
            let normalized = fixes.normalize().unwrap();
            assert_eq!(normalized.len(), 1);
            assert_eq!(normalized.fixes()[0].span(), Span::new(0, 10));
        }

        #[test]
        fn delete_inside_replace_is_a_conflict() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(0, 10), "outer"));
            fixes.push(Fix::delete(Span::new(4, 7)));
            let err = fixes.normalize().unwrap_err();
            assert!(matches!(err, FixError::ConflictingFixes { .. }));
        }

        #[test]
        fn adjacent_fixes_are_fine() {
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(0, 5), "a"));
            fixes.push(Fix::replace(Span::new(5, 10), "b"));
            assert_eq!(fixes.normalize().unwrap().len(), 2);
        }
    }

    mod materialize_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn fixes_and_patches_serialize() {
            let fix = Fix::replace(Span::new(4, 7), "bar");
            let json = serde_json::to_string(&fix).unwrap();
            let back: Fix = serde_json::from_str(&json).unwrap();
            assert_eq!(back, fix);

            let patch = Patch::empty();
            let json = serde_json::to_value(&patch).unwrap();
            assert_eq!(json["unified_diff"], "");
        }

        #[test]
        fn records_carry_old_text_and_position() {
            let source = "line1\nline2 foo\n";
            let mut fixes = FixSet::new();
            fixes.push(Fix::replace(Span::new(12, 15), "bar"));
            let records = fixes.materialize(source, "A.java");

            assert_eq!(records.len(), 1);
            assert_eq!(records[0].file, "A.java");
            assert_eq!(records[0].old_text, "foo");
            assert_eq!(records[0].new_text, "bar");
            assert_eq!(records[0].line, 2);
            assert_eq!(records[0].col, 7);
        }
    }
}
