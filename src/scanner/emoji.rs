// src/scanner/emoji.rs

//! The emoji oracle: finds emoji in text and classifies single characters.
//!
//! Matching is built on two Unicode ground truths rather than a hand-rolled
//! table: extended grapheme cluster segmentation (UAX #29, via
//! `unicode-segmentation`) and the `Emoji` character property (UTS #51, via
//! `unicode-properties`). A compound emoji (a ZWJ family, a flag pair, a
//! skin-tone sequence, a keycap, a tag-sequence flag) is a single grapheme
//! cluster, so matching whole clusters guarantees that sequences are found
//! as units and never as their components.

use unicode_properties::UnicodeEmoji;
use unicode_segmentation::UnicodeSegmentation;

/// U+20E3, the combining mark that turns `#`, `*`, or a digit into a keycap.
const COMBINING_KEYCAP: char = '\u{20E3}';

/// A single emoji occurrence in a scanned text.
///
/// `start` and `end` are byte offsets into the scanned string, half-open
/// (`start < end`), always on character boundaries. `text` borrows the
/// matched substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch<'a> {
    /// Byte offset of the first byte of the match.
    pub start: usize,
    /// Byte offset one past the last byte of the match.
    pub end: usize,
    /// The matched substring, including any modifiers and joiners.
    pub text: &'a str,
}

/// Returns `true` if `c` is an emoji-classified character.
///
/// ASCII characters are never emoji here, even though Unicode assigns the
/// `Emoji` property to the digits, `#`, and `*`. The same goes for the
/// combining keycap mark: all of them only act as emoji inside keycap
/// sequences, which [`list_matches`] recognizes whole.
///
/// # Examples
///
/// ```
/// use nomoemo::scanner::is_emoji;
///
/// assert!(is_emoji('😀'));
/// assert!(is_emoji('©')); // unqualified form, still emoji-classified
/// assert!(!is_emoji('3'));
/// assert!(!is_emoji('é'));
/// ```
pub fn is_emoji(c: char) -> bool {
    !c.is_ascii() && c != COMBINING_KEYCAP && c.is_emoji_char()
}

fn is_keycap_base(c: char) -> bool {
    matches!(c, '0'..='9' | '#' | '*')
}

/// Finds every emoji in `text`, leftmost first, non-overlapping.
///
/// Each match covers a full extended grapheme cluster (or its emoji tail,
/// for degenerate clusters that lead with a plain character), so compound
/// sequences come back as one match:
///
/// ```
/// use nomoemo::scanner::list_matches;
///
/// let matches = list_matches("family: 👨\u{200D}👩\u{200D}👧\u{200D}👦!");
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].text, "👨\u{200D}👩\u{200D}👧\u{200D}👦");
/// ```
pub fn list_matches(text: &str) -> Vec<EmojiMatch<'_>> {
    let mut matches = Vec::new();

    for (cluster_start, cluster) in text.grapheme_indices(true) {
        // All-ASCII clusters can never be emoji; this also keeps the
        // keycap bases (digits, '#', '*') from matching on their own.
        if cluster.is_ascii() {
            continue;
        }

        // A keycap sequence is emoji as a whole even though its base
        // character is not.
        if cluster.contains(COMBINING_KEYCAP) && cluster.starts_with(is_keycap_base) {
            matches.push(EmojiMatch {
                start: cluster_start,
                end: cluster_start + cluster.len(),
                text: cluster,
            });
            continue;
        }

        // Otherwise match from the first emoji-classified character to the
        // end of the cluster. A well-formed emoji cluster starts with one;
        // a degenerate cluster such as a letter followed by a bare skin-tone
        // modifier contributes just its emoji tail.
        if let Some((offset, _)) = cluster.char_indices().find(|&(_, c)| is_emoji(c)) {
            matches.push(EmojiMatch {
                start: cluster_start + offset,
                end: cluster_start + cluster.len(),
                text: &cluster[offset..],
            });
        }
    }

    matches
}
