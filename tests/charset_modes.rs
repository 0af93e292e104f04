// tests/charset_modes.rs

mod common;

use common::{create_file, nomoemo_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_ascii_only_flags_accented_text() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("menu.txt"), "café")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--ascii-only")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "ASCII-ONLY MODE - Scanning for non-ASCII characters (codepoints > 127)",
        ))
        .stderr(predicate::str::contains("[-] Found 1 non-ASCII character(s) in"))
        .stderr(predicate::str::contains(
            "[+] Total: 1 non-ASCII characters (codepoints > 127) in 1 files.",
        ))
        .stderr(predicate::str::contains(
            "[!] 1 files contain non-ASCII characters (codepoints > 127).",
        ));

    // An audit never rewrites anything.
    assert_eq!(fs::read_to_string(temp.path().join("menu.txt"))?, "café");

    temp.close()?;
    Ok(())
}

#[test]
fn test_ascii_only_compliant_tree() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("src.rs"), "fn main() {}\n")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--ascii-only")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[✓] All files are ASCII-only compliant.",
        ))
        .stderr(predicate::str::contains("[!]").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_latin1_accepts_what_ascii_rejects() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("menu.txt"), "café")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--latin1-only")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[✓] All files are Latin-1-only compliant.",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_latin1_flags_wider_codepoints() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // 'é' passes Latin-1, '€' (U+20AC) and the emoji do not.
    fs::write(temp.path().join("price.txt"), "café €5 😀")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--latin1-only")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "LATIN1-ONLY MODE - Scanning for extended Unicode characters (codepoints > 255)",
        ))
        .stderr(predicate::str::contains(
            "[-] Found 2 extended Unicode character(s) in",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_charset_verbose_shows_codepoint_escapes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("menu.txt"), "caf\u{E9} au lait")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--ascii-only")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "  Line 1, Col 4: U+00E9 - caf[U+00E9] au lait",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_emoji_counts_per_codepoint_in_audits() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // The flag pair is one emoji but two codepoints; audits count
    // codepoints.
    fs::write(temp.path().join("flag.txt"), "us 🇺🇸")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--ascii-only")
        .assert()
        .success()
        .stderr(predicate::str::contains("[-] Found 2 non-ASCII character(s) in"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_audit_counts_every_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "naïve café")?;
    create_file(temp.path(), "b.txt", "plain")?;
    create_file(temp.path(), "c.txt", "über älter")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--ascii-only")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[+] Total: 4 non-ASCII characters (codepoints > 127) in 2 files.",
        ))
        .stderr(predicate::str::contains("[*] Processed 3 files."))
        .stderr(predicate::str::contains(
            "[!] 2 files contain non-ASCII characters (codepoints > 127).",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_quiet_audit_with_violations_warns() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("menu.txt"), "café")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--ascii-only")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[WARNING] [+] Total: 1 non-ASCII characters (codepoints > 127) in 1 files.",
        ))
        .stderr(predicate::str::contains("[✓]").not());

    temp.close()?;
    Ok(())
}
