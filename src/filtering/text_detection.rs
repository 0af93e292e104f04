// src/filtering/text_detection.rs

use crate::constants::PROBE_BUFFER_SIZE;
use content_inspector::ContentType;
use std::{fs::File, io::Read, path::Path, str};

/// Checks if a byte buffer is likely UTF-8 text.
///
/// This is the core logic used by both `is_likely_utf8_text` and the unit
/// tests. It uses `content_inspector` for a heuristic check and then verifies
/// UTF-8 validity.
///
/// `truncated` indicates that the buffer is a probe cut off at a fixed size
/// rather than the whole file. In that case a multi-byte character split at
/// the end of the buffer is not treated as invalid: only `error_len() ==
/// None` failures (an incomplete final character) are forgiven, and only at
/// a truncation boundary.
///
/// # Examples
/// ```
/// use nomoemo::filtering::is_likely_utf8_text_from_buffer;
///
/// let text_buffer = b"This is valid UTF-8 text.";
/// assert!(is_likely_utf8_text_from_buffer(text_buffer, false));
///
/// let binary_buffer = b"This contains a null byte \0.";
/// assert!(!is_likely_utf8_text_from_buffer(binary_buffer, false));
///
/// // The first two bytes of a three-byte character, cut off by the probe.
/// let split_probe = &[b'o', b'k', 0xE2, 0x82];
/// assert!(is_likely_utf8_text_from_buffer(split_probe, true));
/// assert!(!is_likely_utf8_text_from_buffer(split_probe, false));
/// ```
pub fn is_likely_utf8_text_from_buffer(buffer_slice: &[u8], truncated: bool) -> bool {
    let content_type = content_inspector::inspect(buffer_slice);

    // Consider it text ONLY if explicitly detected as UTF_8_BOM, or if
    // detected as UTF_8 AND the buffer slice is actually valid UTF-8.
    // All other types (BINARY, UTF-16 variants, etc.) are non-text.
    match content_type {
        ContentType::UTF_8_BOM => true,
        ContentType::UTF_8 => match str::from_utf8(buffer_slice) {
            Ok(_) => true,
            Err(e) => truncated && e.error_len().is_none(),
        },
        _ => false,
    }
}

/// Checks if the file content is likely UTF-8 text by reading its head.
///
/// Reads the first 1024 bytes of the file and applies the buffer heuristic.
/// When the file is larger than the probe, the probe is marked as truncated
/// so that a character split at the probe boundary does not misclassify the
/// file as binary.
///
/// # Returns
/// `Ok(true)` if likely text, `Ok(false)` otherwise.
///
/// # Errors
/// Returns an `Err` on I/O error (e.g., file not found, permission denied).
pub fn is_likely_utf8_text(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let mut buffer = [0; PROBE_BUFFER_SIZE];
    let bytes_read = file.read(&mut buffer)?;
    let buffer_slice = &buffer[..bytes_read];

    Ok(is_likely_utf8_text_from_buffer(
        buffer_slice,
        bytes_read == PROBE_BUFFER_SIZE,
    ))
}
