// src/filtering/extension.rs

use crate::constants::BINARY_EXTENSIONS;
use std::path::Path;

/// Checks if a path carries one of the known binary file extensions.
///
/// The comparison is case-insensitive. Files without an extension are never
/// denied here; they proceed to the content probe.
///
/// # Examples
///
/// ```
/// use nomoemo::filtering::has_binary_extension;
/// use std::path::Path;
///
/// assert!(has_binary_extension(Path::new("photo.JPG")));
/// assert!(has_binary_extension(Path::new("lib/native.so")));
/// assert!(!has_binary_extension(Path::new("src/main.rs")));
/// assert!(!has_binary_extension(Path::new("Makefile")));
/// ```
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_lowercase())
        .map_or(false, |ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_binary_extensions_denied() {
        for name in ["a.exe", "b.dll", "c.png", "d.tar", "e.pdf"] {
            assert!(has_binary_extension(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(has_binary_extension(Path::new("SETUP.EXE")));
        assert!(has_binary_extension(Path::new("image.PnG")));
    }

    #[test]
    fn test_text_extensions_pass() {
        for name in ["main.rs", "notes.txt", "script.py", "page.html"] {
            assert!(!has_binary_extension(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn test_no_extension_passes() {
        assert!(!has_binary_extension(Path::new("Makefile")));
        assert!(!has_binary_extension(Path::new("bin")));
    }

    #[test]
    fn test_compound_suffix_uses_last_component() {
        // Only the final extension counts, same as `Path::extension`.
        assert!(has_binary_extension(Path::new("backup.tar.gz")));
        assert!(!has_binary_extension(Path::new("archive.zip.txt")));
    }
}
