// src/report.rs

//! The user-facing report sink.
//!
//! Everything nomoemo tells the user flows through the [`Reporter`] trait:
//! banners, per-file findings, summaries, warnings. The console
//! implementation applies the quiet/verbose thresholds and mirrors every
//! line into an optional log file at full verbosity; the memory
//! implementation captures lines so unit tests can drive the coordinator
//! without capturing stderr.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Severity of a report line, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Diagnostic detail, console-visible only with `--verbose`.
    Debug,
    /// Normal progress and findings.
    Info,
    /// Problems that do not stop the run; always console-visible.
    Warning,
    /// Fatal problems, reported just before a non-zero exit.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        })
    }
}

/// A sink for user-facing report lines.
///
/// # Examples
///
/// ```
/// use nomoemo::report::{Level, MemoryReporter, Reporter};
///
/// let mut reporter = MemoryReporter::new();
/// reporter.info("Scanning for emoji...");
/// reporter.warning("Could not decode 'x.bin' as UTF-8: invalid data");
///
/// assert_eq!(reporter.records().len(), 2);
/// assert_eq!(reporter.records()[1].0, Level::Warning);
/// assert!(reporter.contains("Scanning"));
/// ```
pub trait Reporter {
    /// Records one line at the given level.
    fn record(&mut self, level: Level, message: &str);

    /// Records a debug line.
    fn debug(&mut self, message: &str) {
        self.record(Level::Debug, message);
    }

    /// Records an info line.
    fn info(&mut self, message: &str) {
        self.record(Level::Info, message);
    }

    /// Records a warning line.
    fn warning(&mut self, message: &str) {
        self.record(Level::Warning, message);
    }

    /// Records an error line.
    fn error(&mut self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// The production sink: stderr, filtered by quiet/verbose, with an
/// optional log-file mirror.
///
/// The console threshold is `Warning` under `--quiet`, `Debug` under
/// `--verbose`, and `Info` otherwise. The log file always receives every
/// line in `[LEVEL] message` format and is truncated when opened; if it
/// cannot be opened the reporter warns and continues console-only.
pub struct ConsoleReporter {
    console_threshold: Level,
    log_file: Option<File>,
}

impl ConsoleReporter {
    /// Creates a reporter for the given output settings, opening the log
    /// file mirror if one was requested.
    pub fn new(quiet: bool, verbose: bool, log_path: Option<&Path>) -> Self {
        let console_threshold = if quiet {
            Level::Warning
        } else if verbose {
            Level::Debug
        } else {
            Level::Info
        };

        let mut reporter = Self {
            console_threshold,
            log_file: None,
        };

        if let Some(path) = log_path {
            match File::create(path) {
                Ok(file) => {
                    reporter.log_file = Some(file);
                    reporter.debug(&format!("Logging to file: {}", path.display()));
                }
                Err(e) => {
                    reporter.warning(&format!(
                        "Could not create log file '{}': {}",
                        path.display(),
                        e
                    ));
                }
            }
        }

        reporter
    }
}

impl Reporter for ConsoleReporter {
    fn record(&mut self, level: Level, message: &str) {
        if level >= self.console_threshold {
            eprintln!("[{level}] {message}");
        }

        let mirror_failed = match self.log_file.as_mut() {
            Some(file) => writeln!(file, "[{level}] {message}").is_err(),
            None => false,
        };
        if mirror_failed {
            self.log_file = None;
        }
    }
}

/// A `Reporter` that stores every line in memory.
///
/// Used by unit tests to assert on exactly what the coordinator reported,
/// and usable by library callers who want findings without console output.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    records: Vec<(Level, String)>,
}

impl MemoryReporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in order.
    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }

    /// The messages recorded at `level`, in order.
    pub fn messages_at(&self, level: Level) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Returns `true` if any recorded message contains `fragment`.
    pub fn contains(&self, fragment: &str) -> bool {
        self.records.iter().any(|(_, m)| m.contains(fragment))
    }
}

impl Reporter for MemoryReporter {
    fn record(&mut self, level: Level, message: &str) {
        self.records.push((level, message.to_string()));
    }
}
