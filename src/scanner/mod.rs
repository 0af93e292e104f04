// src/scanner/mod.rs

//! Content scanning: emoji matches and restricted-charset violations.
//!
//! Both scans are pure functions over a decoded text; rendering findings as
//! console lines is the coordinator's job. The emoji scan delegates to the
//! oracle in [`emoji`]; the charset scan is a plain threshold check over
//! every character.

pub mod emoji;

pub use emoji::{is_emoji, list_matches, EmojiMatch};

use crate::position::{locate, Position};

/// A character exceeding the active charset threshold.
///
/// Records where the character sits so verbose reports can print it without
/// re-resolving the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetViolation {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the scanned text.
    pub offset: usize,
    /// 1-based line/column of the character.
    pub position: Position,
}

impl CharsetViolation {
    /// The character's codepoint, as shown in `U+XXXX` escapes.
    pub fn codepoint(&self) -> u32 {
        self.character as u32
    }
}

/// Scans `text` for emoji, leftmost first.
pub fn scan_emoji(text: &str) -> Vec<EmojiMatch<'_>> {
    emoji::list_matches(text)
}

/// Scans `text` for characters whose codepoint exceeds `max_codepoint`.
///
/// Every violating character is recorded individually, in text order, with
/// no deduplication. `max_codepoint` is 127 for ASCII-only audits and 255
/// for Latin-1-only audits.
pub fn scan_charset(text: &str, max_codepoint: u32) -> Vec<CharsetViolation> {
    let mut violations = Vec::new();
    for (offset, c) in text.char_indices() {
        if (c as u32) > max_codepoint {
            violations.push(CharsetViolation {
                character: c,
                offset,
                position: locate(text, offset),
            });
        }
    }
    violations
}
