// src/position.rs

//! Resolves byte offsets into human-readable line/column positions and
//! builds the bounded context snippets shown in verbose reports.
//!
//! Scanners work in byte offsets because that is what string slicing wants;
//! users read columns in characters. The conversion happens here, at the
//! reporting boundary, so the core never carries both representations.

/// A 1-based line/column position within a text.
///
/// Columns count characters, not bytes, so a position after `"héllo "`
/// is column 7 regardless of how many bytes the prefix occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters from the start of the line.
    pub column: usize,
}

/// Resolves a byte offset into a [`Position`].
///
/// `byte_offset` must lie on a character boundary of `content`; scanner
/// match offsets always do.
///
/// # Examples
///
/// ```
/// use nomoemo::position::{locate, Position};
///
/// let text = "abc\ndef";
/// assert_eq!(locate(text, 0), Position { line: 1, column: 1 });
/// assert_eq!(locate(text, 4), Position { line: 2, column: 1 });
/// assert_eq!(locate(text, 6), Position { line: 2, column: 3 });
/// ```
pub fn locate(content: &str, byte_offset: usize) -> Position {
    let prefix = &content[..byte_offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = content[line_start..byte_offset].chars().count() + 1;
    Position { line, column }
}

/// Builds a context snippet around the span `start..end` of `content`.
///
/// The snippet contains up to `radius` characters on each side of the span,
/// with the span itself replaced by `marker` and newlines collapsed to
/// spaces. Only the span is redacted: identical text elsewhere in the
/// window is left as-is.
///
/// `start` and `end` are byte offsets on character boundaries.
pub fn context_snippet(
    content: &str,
    start: usize,
    end: usize,
    radius: usize,
    marker: &str,
) -> String {
    let window_start = content[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let window_end = content[end..]
        .char_indices()
        .nth(radius)
        .map_or(content.len(), |(i, _)| end + i);

    let mut snippet =
        String::with_capacity(window_end - window_start - (end - start) + marker.len());
    snippet.push_str(&content[window_start..start]);
    snippet.push_str(marker);
    snippet.push_str(&content[end..window_end]);
    snippet.replace('\n', " ")
}
