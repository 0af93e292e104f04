// src/constants.rs

/// File extensions (lowercase, without the dot) that are never scanned.
/// These are obviously-binary formats; everything else gets a content probe.
pub const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "dylib", "bin", "jpg", "png", "gif", "bmp", "mp4", "avi", "zip", "tar",
    "gz", "pdf",
];

/// Number of leading bytes read when probing a file for binary content.
pub const PROBE_BUFFER_SIZE: usize = 1024;

/// Characters of context shown on each side of a match in verbose reports.
pub const CONTEXT_RADIUS: usize = 20;

/// Marker substituted for the matched emoji span in context snippets, so the
/// emoji itself never reaches the console.
pub const EMOJI_MARKER: &str = "[EMOJI]";
