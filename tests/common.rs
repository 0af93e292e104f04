// tests/common.rs

use assert_cmd::Command;
use std::fs;
use std::path::Path;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn nomoemo_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("nomoemo"))
}

// Creates a file under `dir`, including any missing parent directories.
#[allow(dead_code)]
pub fn create_file(
    dir: &Path,
    relative_path: &str,
    content: impl AsRef<[u8]>,
) -> std::io::Result<()> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)
}
