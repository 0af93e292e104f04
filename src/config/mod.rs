//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI,
//! making them available to the rest of the application in a structured and
//! type-safe manner.

use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::path::PathBuf;

mod validation;

/// The action performed on the scanned files.
///
/// Exactly one mode is active per run. The scan-only modes (`DryRun`,
/// `AsciiOnly`, `Latin1Only`) never write to disk; `Remove` and
/// `Replace` rewrite matching files in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report emoji findings without touching any file (the default).
    DryRun,
    /// Delete every emoji match, rewriting affected files in place.
    Remove,
    /// Substitute every emoji match with the given ASCII character.
    Replace(char),
    /// Report characters above the ASCII range (codepoints > 127).
    AsciiOnly,
    /// Report characters above the Latin-1 range (codepoints > 255).
    Latin1Only,
}

impl Mode {
    /// Returns `true` for modes that rewrite file content.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Mode::Remove | Mode::Replace(_))
    }
}

/// Restricted character-set policies enforced by `--ascii-only` and
/// `--latin1-only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetPolicy {
    /// Only codepoints up to U+007F are allowed.
    Ascii,
    /// Only codepoints up to U+00FF are allowed.
    Latin1,
}

impl CharsetPolicy {
    /// The highest codepoint the policy permits.
    pub fn max_codepoint(&self) -> u32 {
        match self {
            CharsetPolicy::Ascii => 127,
            CharsetPolicy::Latin1 => 255,
        }
    }

    /// Returns `true` if `c` falls outside the permitted range.
    pub fn is_violation(&self, c: char) -> bool {
        (c as u32) > self.max_codepoint()
    }

    /// Short noun used in per-file findings ("non-ASCII character(s)").
    pub fn short_description(&self) -> &'static str {
        match self {
            CharsetPolicy::Ascii => "non-ASCII",
            CharsetPolicy::Latin1 => "extended Unicode",
        }
    }

    /// Full phrase used in run summaries.
    pub fn violation_description(&self) -> &'static str {
        match self {
            CharsetPolicy::Ascii => "non-ASCII characters (codepoints > 127)",
            CharsetPolicy::Latin1 => "extended Unicode characters (codepoints > 255)",
        }
    }

    /// Label used in the all-clear compliance line.
    pub fn compliance_label(&self) -> &'static str {
        match self {
            CharsetPolicy::Ascii => "ASCII-only",
            CharsetPolicy::Latin1 => "Latin-1-only",
        }
    }
}

/// Validated, immutable settings for a single run.
///
/// Built from the parsed [`Cli`] via `TryFrom`, which performs the
/// cross-argument validation that clap cannot express (replacement
/// character rules). Read-only after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// File or directory to process.
    pub target: PathBuf,
    /// The selected action.
    pub mode: Mode,
    /// Whether to descend into subdirectories of a directory target.
    pub recursive: bool,
    /// Skip confirmation prompts in destructive modes.
    pub force: bool,
    /// Restrict console output to warnings and non-zero summaries.
    pub quiet: bool,
    /// Emit per-match locations and context snippets.
    pub verbose: bool,
    /// Mirror all output into this file at full verbosity.
    pub log_file: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let mode = validation::resolve_mode(&cli)?;
        Ok(Self {
            target: PathBuf::from(&cli.target),
            mode,
            recursive: cli.recursive,
            force: cli.force,
            quiet: cli.quiet,
            verbose: cli.verbose,
            log_file: cli.log.map(PathBuf::from),
        })
    }
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test<P: Into<PathBuf>>(target: P) -> Self {
        Self {
            target: target.into(),
            mode: Mode::DryRun,
            recursive: false,
            force: true,
            quiet: false,
            verbose: false,
            log_file: None,
        }
    }
}
