// tests/transform_replace.rs

mod common;

use common::nomoemo_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_replace_with_force() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file_path = temp.path().join("deploy.txt");
    fs::write(&file_path, "deploy 🚀 now")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--replace")
        .arg("--replacement")
        .arg("_")
        .arg("--force")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "REPLACE MODE - Emojis will be replaced with '_'",
        ))
        .stderr(predicate::str::contains("[+] Replaced 1 emojis in 1 files."));

    assert_eq!(fs::read_to_string(&file_path)?, "deploy _ now");

    temp.close()?;
    Ok(())
}

#[test]
fn test_replace_prompt_names_the_character() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "x 😀")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--replace")
        .arg("--replacement")
        .arg("*")
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[?] Replace Emojis with '*'? (y/N)"));

    assert_eq!(fs::read_to_string(temp.path().join("a.txt"))?, "x *");

    temp.close()?;
    Ok(())
}

#[test]
fn test_each_sequence_becomes_one_character() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file_path = temp.path().join("seq.txt");
    // A ZWJ family and a flag pair: 1 + 2 substitutions.
    fs::write(&file_path, "[👨‍👩‍👧][🇺🇸🇩🇪]")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--replace")
        .arg("--replacement")
        .arg("#")
        .arg("--force")
        .assert()
        .success()
        .stderr(predicate::str::contains("[+] Replaced 3 emojis in 1 files."));

    assert_eq!(fs::read_to_string(&file_path)?, "[#][##]");

    temp.close()?;
    Ok(())
}

#[test]
fn test_replace_declined_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "wip 🚧")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--replace")
        .arg("--replacement")
        .arg("_")
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("REPLACE MODE").not());

    assert_eq!(fs::read_to_string(&file_path)?, "wip 🚧");

    temp.close()?;
    Ok(())
}

#[test]
fn test_replacement_appears_once_per_keycap() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file_path = temp.path().join("keys.txt");
    fs::write(&file_path, "press 3️⃣ then #️⃣")?;

    nomoemo_cmd()
        .arg(temp.path())
        .arg("--replace")
        .arg("--replacement")
        .arg("X")
        .arg("--force")
        .assert()
        .success()
        .stderr(predicate::str::contains("[+] Replaced 2 emojis in 1 files."));

    // The digit and hash bases are part of the keycap sequence and go
    // with it.
    assert_eq!(fs::read_to_string(&file_path)?, "press X then X");

    temp.close()?;
    Ok(())
}
