// src/coordinator.rs

//! Drives a complete run: collects the target's files, dispatches the
//! selected mode over them, and renders findings and summaries through the
//! report sink.
//!
//! All side effects of a run happen here: reads, the confirmed in-place
//! writes of the transform modes, and every report line. The collaborators
//! (reporter, confirmation prompt, cancellation token) come in as
//! parameters so tests can drive a run entirely in memory.

use crate::cancellation::CancellationToken;
use crate::config::{CharsetPolicy, Config, Mode};
use crate::constants::{CONTEXT_RADIUS, EMOJI_MARKER};
use crate::discovery::collect_files;
use crate::errors::{Error, Result};
use crate::position::{context_snippet, locate};
use crate::prompt::Confirm;
use crate::report::Reporter;
use crate::scanner::{scan_charset, scan_emoji, CharsetViolation};
use crate::transform::{remove_emoji, replace_emoji};
use std::fs;
use std::path::{Path, PathBuf};

/// Totals accumulated over one run.
///
/// Owned by [`run`] and only ever incremented. `files_processed` counts
/// files that were successfully read and decoded, in every mode; read and
/// decode failures are soft skips and never reach it.
#[derive(Debug, Default)]
pub struct RunCounters {
    /// Files successfully read and decoded.
    pub files_processed: usize,
    /// Files with at least one emoji match (scan mode).
    pub files_with_emojis: usize,
    /// Emoji matches found, removed, or replaced.
    pub emoji_count: usize,
    /// Files rewritten in place by a transform mode.
    pub files_modified: usize,
    /// Files with at least one charset violation (audit modes).
    pub files_with_charset_violations: usize,
    /// Every charset violation of the run, in discovery order.
    pub charset_violations: Vec<(PathBuf, CharsetViolation)>,
}

/// Executes one run according to `config`.
///
/// Returns the accumulated counters on success. A missing target and a
/// user interrupt are the only errors; per-file problems are reported as
/// warnings and skipped. The cancellation token is checked between files
/// (and after the confirmation prompt), so an in-flight file is always
/// finished rather than aborted mid-write.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    reporter: &mut dyn Reporter,
    confirm: &mut dyn Confirm,
) -> Result<RunCounters> {
    let files = collect_files(&config.target, config.recursive, reporter)?;

    let mut counters = RunCounters::default();

    if files.is_empty() {
        reporter.info("No files found to process.");
        return Ok(counters);
    }

    if matches!(config.mode, Mode::DryRun | Mode::Remove | Mode::Replace(_)) {
        reporter.info("Scanning for emoji...");
    }

    match config.mode {
        Mode::DryRun => run_dry_run(config, &files, token, reporter, &mut counters)?,
        Mode::Remove => {
            run_transform(config, &files, token, reporter, confirm, &mut counters, None)?
        }
        Mode::Replace(c) => run_transform(
            config,
            &files,
            token,
            reporter,
            confirm,
            &mut counters,
            Some(c),
        )?,
        Mode::AsciiOnly => run_charset(
            config,
            &files,
            token,
            reporter,
            &mut counters,
            CharsetPolicy::Ascii,
        )?,
        Mode::Latin1Only => run_charset(
            config,
            &files,
            token,
            reporter,
            &mut counters,
            CharsetPolicy::Latin1,
        )?,
    }

    Ok(counters)
}

/// Reads `path` as UTF-8 text.
///
/// Reports a warning and returns `None` when the file cannot be read or is
/// not valid UTF-8; callers skip such files and keep going.
fn read_text(path: &Path, reporter: &mut dyn Reporter) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            reporter.warning(&format!("Could not process '{}': {}", path.display(), e));
            return None;
        }
    };
    match String::from_utf8(bytes) {
        Ok(content) => Some(content),
        Err(e) => {
            reporter.warning(&format!(
                "Could not decode '{}' as UTF-8: {}",
                path.display(),
                e.utf8_error()
            ));
            None
        }
    }
}

fn run_dry_run(
    config: &Config,
    files: &[PathBuf],
    token: &CancellationToken,
    reporter: &mut dyn Reporter,
    counters: &mut RunCounters,
) -> Result<()> {
    reporter.info("DRY RUN MODE - No files will be modified");

    for path in files {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let content = match read_text(path, reporter) {
            Some(content) => content,
            None => continue,
        };
        counters.files_processed += 1;

        let matches = scan_emoji(&content);
        if matches.is_empty() {
            continue;
        }
        counters.files_with_emojis += 1;
        counters.emoji_count += matches.len();

        reporter.info(&format!(
            "[-] Found {} emoji(s) in {}",
            matches.len(),
            path.display()
        ));

        if config.verbose {
            for m in &matches {
                let pos = locate(&content, m.start);
                let context =
                    context_snippet(&content, m.start, m.end, CONTEXT_RADIUS, EMOJI_MARKER);
                reporter.info(&format!(
                    "  Line {}, Col {}: {}",
                    pos.line, pos.column, context
                ));
            }
        }
    }

    let total = format!(
        "[+] Total: {} emojis in {} files.",
        counters.emoji_count, counters.files_with_emojis
    );
    if !config.quiet {
        reporter.info(&total);
        reporter.info(&format!("[*] Processed {} files.", counters.files_processed));
    } else if counters.emoji_count > 0 {
        reporter.warning(&total);
    }

    Ok(())
}

fn run_transform(
    config: &Config,
    files: &[PathBuf],
    token: &CancellationToken,
    reporter: &mut dyn Reporter,
    confirm: &mut dyn Confirm,
    counters: &mut RunCounters,
    replacement: Option<char>,
) -> Result<()> {
    if !config.force {
        let action = match replacement {
            Some(c) => format!("Replace Emojis with '{c}'"),
            None => "Delete Emojis".to_string(),
        };
        if !confirm.confirm(&action) {
            // Ctrl+C at the prompt surfaces as a declined read; tell the
            // interrupt apart from an actual "no".
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            return Ok(());
        }
    }

    match replacement {
        Some(c) => reporter.info(&format!(
            "REPLACE MODE - Emojis will be replaced with '{c}'"
        )),
        None => reporter.info("REMOVE MODE - Emojis will be deleted"),
    }

    for path in files {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let content = match read_text(path, reporter) {
            Some(content) => content,
            None => continue,
        };
        counters.files_processed += 1;

        let (new_content, count) = match replacement {
            Some(c) => replace_emoji(&content, c),
            None => remove_emoji(&content),
        };
        if count == 0 {
            continue;
        }

        if let Err(e) = fs::write(path, &new_content) {
            reporter.warning(&format!("Could not write '{}': {}", path.display(), e));
            continue;
        }
        counters.files_modified += 1;
        counters.emoji_count += count;

        if config.verbose {
            match replacement {
                Some(_) => reporter.info(&format!(
                    "[-] Replaced {} emoji(s) in {}",
                    count,
                    path.display()
                )),
                None => reporter.info(&format!(
                    "[-] Removed {} emoji(s) from {}",
                    count,
                    path.display()
                )),
            }
        }
    }

    let summary = match replacement {
        Some(_) => format!(
            "[+] Replaced {} emojis in {} files.",
            counters.emoji_count, counters.files_modified
        ),
        None => format!(
            "[+] Removed {} emojis from {} files.",
            counters.emoji_count, counters.files_modified
        ),
    };
    if !config.quiet {
        reporter.info(&summary);
    } else if counters.emoji_count > 0 {
        reporter.warning(&summary);
    }

    Ok(())
}

fn run_charset(
    config: &Config,
    files: &[PathBuf],
    token: &CancellationToken,
    reporter: &mut dyn Reporter,
    counters: &mut RunCounters,
    policy: CharsetPolicy,
) -> Result<()> {
    let banner = match policy {
        CharsetPolicy::Ascii => {
            "ASCII-ONLY MODE - Scanning for non-ASCII characters (codepoints > 127)"
        }
        CharsetPolicy::Latin1 => {
            "LATIN1-ONLY MODE - Scanning for extended Unicode characters (codepoints > 255)"
        }
    };
    reporter.info(banner);

    for path in files {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let content = match read_text(path, reporter) {
            Some(content) => content,
            None => continue,
        };
        counters.files_processed += 1;

        let violations = scan_charset(&content, policy.max_codepoint());
        if violations.is_empty() {
            continue;
        }
        counters.files_with_charset_violations += 1;

        reporter.info(&format!(
            "[-] Found {} {} character(s) in {}",
            violations.len(),
            policy.short_description(),
            path.display()
        ));

        if config.verbose {
            for v in &violations {
                let marker = format!("[U+{:04X}]", v.codepoint());
                let context = context_snippet(
                    &content,
                    v.offset,
                    v.offset + v.character.len_utf8(),
                    CONTEXT_RADIUS,
                    &marker,
                );
                reporter.info(&format!(
                    "  Line {}, Col {}: U+{:04X} - {}",
                    v.position.line,
                    v.position.column,
                    v.codepoint(),
                    context
                ));
            }
        }

        counters
            .charset_violations
            .extend(violations.into_iter().map(|v| (path.clone(), v)));
    }

    let total = format!(
        "[+] Total: {} {} in {} files.",
        counters.charset_violations.len(),
        policy.violation_description(),
        counters.files_with_charset_violations
    );
    if !config.quiet {
        reporter.info(&total);
        reporter.info(&format!("[*] Processed {} files.", counters.files_processed));

        if counters.files_with_charset_violations == 0 {
            reporter.info(&format!(
                "[✓] All files are {} compliant.",
                policy.compliance_label()
            ));
        } else {
            reporter.warning(&format!(
                "[!] {} files contain {}.",
                counters.files_with_charset_violations,
                policy.violation_description()
            ));
        }
    } else if !counters.charset_violations.is_empty() {
        reporter.warning(&total);
    }

    Ok(())
}
