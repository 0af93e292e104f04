// src/transform.rs

//! In-memory removal and replacement of emoji matches.
//!
//! Both operations splice around the spans reported by the oracle, so a
//! compound sequence disappears (or collapses to one replacement character)
//! as a unit. The returned count is the number of matches, not the number
//! of codepoints touched.

use crate::scanner::emoji::list_matches;

fn splice_matches(text: &str, substitute: Option<char>) -> (String, usize) {
    let matches = list_matches(text);
    let count = matches.len();
    if count == 0 {
        return (text.to_string(), 0);
    }

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for m in &matches {
        result.push_str(&text[cursor..m.start]);
        if let Some(c) = substitute {
            result.push(c);
        }
        cursor = m.end;
    }
    result.push_str(&text[cursor..]);

    (result, count)
}

/// Deletes every emoji match from `text`.
///
/// Returns the new content and the number of matches removed. Unmatched
/// content, including its whitespace, is preserved byte-for-byte.
///
/// # Examples
///
/// ```
/// use nomoemo::transform::remove_emoji;
///
/// let (output, count) = remove_emoji("Status: Good 👍 done");
/// assert_eq!(output, "Status: Good  done");
/// assert_eq!(count, 1);
/// ```
pub fn remove_emoji(text: &str) -> (String, usize) {
    splice_matches(text, None)
}

/// Substitutes each emoji match in `text` with one `replacement` character.
///
/// A compound sequence collapses to a single replacement character. The
/// replacement character is validated to be plain printable ASCII when the
/// configuration is built, so substitution can never reintroduce a match.
pub fn replace_emoji(text: &str, replacement: char) -> (String, usize) {
    splice_matches(text, Some(replacement))
}
