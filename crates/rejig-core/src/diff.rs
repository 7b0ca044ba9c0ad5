//! Unified diff rendering for patches.
//!
//! Renders the standard unified format from the original and fixed source of
//! one file: `--- a/<path>` / `+++ b/<path>` headers, hunks coalesced per
//! contiguous run of changes, three context lines, and "no newline at end of
//! file" markers.

use similar::TextDiff;

/// Number of context lines around each hunk.
const CONTEXT_LINES: usize = 3;

/// Render a unified diff from `original` to `revised`.
///
/// Returns an empty string when the texts are identical.
pub fn unified_diff(original: &str, revised: &str, path: &str) -> String {
    if original == revised {
        return String::new();
    }

    let diff = TextDiff::from_lines(original, revised);
    diff.unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sources_produce_no_diff() {
        assert_eq!(unified_diff("same\n", "same\n", "A.java"), "");
    }

    #[test]
    fn single_change_produces_one_hunk() {
        let original = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj\n";
        let revised = "a\nb\nc\nd\nE\nf\ng\nh\ni\nj\n";
        let diff = unified_diff(original, revised, "A.java");

        assert!(diff.starts_with("--- a/A.java\n+++ b/A.java\n"));
        assert_eq!(diff.matches("@@").count(), 2, "one hunk expected: {diff}");
        assert!(diff.contains("-e\n"));
        assert!(diff.contains("+E\n"));
        // Three context lines on each side of the change
        assert!(diff.contains(" b\n c\n d\n"));
        assert!(diff.contains(" f\n g\n h\n"));
    }

    #[test]
    fn distant_changes_produce_separate_hunks() {
        let original: String = (1..=30).map(|i| format!("line{i}\n")).collect();
        let revised = original.replace("line2\n", "LINE2\n").replace("line28\n", "LINE28\n");
        let diff = unified_diff(&original, &revised, "A.java");

        // Two hunks, each with its own @@ header pair
        assert_eq!(diff.matches("@@ -").count(), 2, "{diff}");
    }

    #[test]
    fn missing_trailing_newline_is_marked() {
        let diff = unified_diff("x\n", "x", "A.java");
        assert!(diff.contains("\\ No newline at end of file"), "{diff}");
    }
}
