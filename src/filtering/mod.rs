// src/filtering/mod.rs

//! Provides standalone functions for file eligibility checks.
//!
//! These functions are used by the discovery stage to decide which files in a
//! directory walk are candidates for scanning. They are exposed publicly to
//! allow for their use in other contexts.

mod extension;
mod text_detection;

pub use extension::has_binary_extension;
pub use text_detection::{is_likely_utf8_text, is_likely_utf8_text_from_buffer};

use std::path::Path;

/// Determines whether a file found during a directory walk should be scanned.
///
/// A file is scannable when its extension is not a known binary format and a
/// probe of its leading bytes looks like UTF-8 text. A file that cannot be
/// opened or read is treated as not scannable instead of failing the walk.
///
/// Note that an explicitly named file target bypasses this check entirely;
/// it only applies to files discovered inside a directory.
pub fn is_scannable(path: &Path) -> bool {
    if has_binary_extension(path) {
        return false;
    }
    is_likely_utf8_text(path).unwrap_or(false)
}
