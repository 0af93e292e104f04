// src/config/validation.rs

use super::Mode;
use crate::cli::Cli;
use crate::errors::{Error, Result};
use crate::scanner::is_emoji;

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}

/// Resolves the mode flags into a [`Mode`], enforcing the cross-argument
/// rules that clap cannot easily express.
///
/// Mutual exclusion of the mode flags themselves is handled by clap; this
/// function checks the pairing of `--replace` with `--replacement` and the
/// shape of the replacement character.
pub(super) fn resolve_mode(cli: &Cli) -> Result<Mode> {
    if cli.replace && cli.replacement.is_none() {
        return Err(invalid("--replace requires --replacement argument"));
    }
    if cli.replacement.is_some() && !cli.replace {
        return Err(invalid("--replacement can only be used with --replace"));
    }

    if cli.remove {
        Ok(Mode::Remove)
    } else if cli.ascii_only {
        Ok(Mode::AsciiOnly)
    } else if cli.latin1_only {
        Ok(Mode::Latin1Only)
    } else if let Some(raw) = cli.replacement.as_deref() {
        Ok(Mode::Replace(validate_replacement_char(raw)?))
    } else {
        // No action flag (or an explicit --dry-run) selects the default.
        Ok(Mode::DryRun)
    }
}

/// Validates the `--replacement` value: exactly one character, ASCII, and
/// not itself an emoji.
fn validate_replacement_char(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(invalid("--replacement must be a single character")),
    };

    if !c.is_ascii() {
        return Err(invalid("--replacement must be an ASCII character"));
    }

    if is_emoji(c) {
        return Err(invalid("--replacement cannot be an emoji character"));
    }

    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn resolve(args: &[&str]) -> Result<Mode> {
        let cli = Cli::parse_from(args);
        resolve_mode(&cli)
    }

    #[test]
    fn test_default_is_dry_run() {
        assert_eq!(resolve(&["nomoemo", "."]).unwrap(), Mode::DryRun);
        assert_eq!(resolve(&["nomoemo", ".", "--dry-run"]).unwrap(), Mode::DryRun);
    }

    #[test]
    fn test_mode_flags_map_to_modes() {
        assert_eq!(resolve(&["nomoemo", ".", "--remove"]).unwrap(), Mode::Remove);
        assert_eq!(
            resolve(&["nomoemo", ".", "--ascii-only"]).unwrap(),
            Mode::AsciiOnly
        );
        assert_eq!(
            resolve(&["nomoemo", ".", "--latin1-only"]).unwrap(),
            Mode::Latin1Only
        );
        assert_eq!(
            resolve(&["nomoemo", ".", "--replace", "--replacement", "*"]).unwrap(),
            Mode::Replace('*')
        );
    }

    #[test]
    fn test_replace_without_replacement_fails() {
        let err = resolve(&["nomoemo", ".", "--replace"]).unwrap_err();
        assert_eq!(err.to_string(), "--replace requires --replacement argument");
    }

    #[test]
    fn test_replacement_without_replace_fails() {
        let err = resolve(&["nomoemo", ".", "--replacement", "*"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--replacement can only be used with --replace"
        );
    }

    #[test]
    fn test_replacement_must_be_single_character() {
        let err = resolve(&["nomoemo", ".", "--replace", "--replacement", "ab"]).unwrap_err();
        assert_eq!(err.to_string(), "--replacement must be a single character");

        let err = resolve(&["nomoemo", ".", "--replace", "--replacement", ""]).unwrap_err();
        assert_eq!(err.to_string(), "--replacement must be a single character");
    }

    #[test]
    fn test_replacement_must_be_ascii() {
        let err = resolve(&["nomoemo", ".", "--replace", "--replacement", "é"]).unwrap_err();
        assert_eq!(err.to_string(), "--replacement must be an ASCII character");
    }

    #[test]
    fn test_emoji_replacement_hits_ascii_rule_first() {
        // An emoji is also non-ASCII, so the ASCII rule fires first.
        let err = resolve(&["nomoemo", ".", "--replace", "--replacement", "😀"]).unwrap_err();
        assert_eq!(err.to_string(), "--replacement must be an ASCII character");
    }

    #[test]
    fn test_valid_replacement_characters() {
        assert_eq!(
            resolve(&["nomoemo", ".", "--replace", "--replacement", "X"]).unwrap(),
            Mode::Replace('X')
        );
        assert_eq!(
            resolve(&["nomoemo", ".", "--replace", "--replacement", " "]).unwrap(),
            Mode::Replace(' ')
        );
    }
}
