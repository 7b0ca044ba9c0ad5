//! Text position utilities for byte offset and line:column conversions.
//!
//! Lines and columns are 1-indexed (matching editor conventions); byte offsets
//! are 0-indexed. Columns count Unicode scalar values, not bytes.

/// Convert a byte offset to a 1-indexed `(line, col)` pair.
///
/// If `offset` exceeds the content length, returns the position at the end of
/// the content.
pub fn byte_offset_to_position(content: &str, offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    let mut current = 0usize;

    for ch in content.chars() {
        if current >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
        current += ch.len_utf8();
    }

    (line, col)
}

/// Get the byte offset of the start of a 1-indexed line.
///
/// Returns `content.len()` when the line does not exist.
pub fn line_start_offset(content: &str, line: u32) -> usize {
    if line <= 1 {
        return 0;
    }
    let mut current_line = 1u32;
    for (i, ch) in content.char_indices() {
        if ch == '\n' {
            current_line += 1;
            if current_line == line {
                return i + 1;
            }
        }
    }
    content.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_to_position_simple() {
        let content = "line1\nline2\nline3\n";
        assert_eq!(byte_offset_to_position(content, 0), (1, 1));
        assert_eq!(byte_offset_to_position(content, 4), (1, 5));
        assert_eq!(byte_offset_to_position(content, 6), (2, 1));
        assert_eq!(byte_offset_to_position(content, 12), (3, 1));
    }

    #[test]
    fn offset_beyond_content_clamps_to_end() {
        let (line, col) = byte_offset_to_position("short", 100);
        assert_eq!((line, col), (1, 6));
    }

    #[test]
    fn multibyte_columns_count_chars() {
        // '你' is 3 bytes
        let content = "x = '你好'\n";
        assert_eq!(byte_offset_to_position(content, 5), (1, 6));
        assert_eq!(byte_offset_to_position(content, 8), (1, 7));
    }

    #[test]
    fn line_starts() {
        let content = "line1\nline2\nline3\n";
        assert_eq!(line_start_offset(content, 1), 0);
        assert_eq!(line_start_offset(content, 2), 6);
        assert_eq!(line_start_offset(content, 3), 12);
        assert_eq!(line_start_offset(content, 9), content.len());
    }
}
