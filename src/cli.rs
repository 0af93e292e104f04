// src/cli.rs

use clap::Parser;

/// Seek out and eliminate emojis in code files.
///
/// nomoemo scans a file or a directory tree for Unicode emoji characters and
/// either reports them (dry run), deletes them, or replaces them with a plain
/// ASCII character, rewriting the affected files in place. Two auxiliary modes
/// check files against restricted character sets (ASCII-only, Latin-1-only)
/// for embedded codebases that must stay within them. Binary files are
/// detected and skipped automatically; only UTF-8 text is processed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File or directory to process.
    pub target: String,

    // --- Mode selection (mutually exclusive) ---
    /// Scan and report emojis without modifying files (default mode).
    #[arg(long, group = "action", action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Remove all emoji characters from files (destructive - prompts for
    /// confirmation unless --force is used).
    #[arg(long, group = "action", action = clap::ArgAction::SetTrue)]
    pub remove: bool,

    /// Replace emojis with the specified character (requires --replacement).
    #[arg(long, group = "action", action = clap::ArgAction::SetTrue)]
    pub replace: bool,

    /// Scan for non-ASCII characters (codepoints > 127) without modifying files.
    #[arg(long, group = "action", action = clap::ArgAction::SetTrue)]
    pub ascii_only: bool,

    /// Scan for extended Unicode characters (codepoints > 255) without modifying files.
    #[arg(long, group = "action", action = clap::ArgAction::SetTrue)]
    pub latin1_only: bool,

    // --- Options ---
    /// Single ASCII character to replace emojis with (required when using --replace).
    #[arg(long, value_name = "CHAR")]
    pub replacement: Option<String>,

    /// Process directories recursively (descend into all subdirectories).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub recursive: bool,

    /// Skip confirmation prompts for destructive operations (--remove, --replace).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub force: bool,

    // --- Output control ---
    /// Suppress most output (only warnings, plus the final summary when
    /// something was found).
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output (show per-match locations and context).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Mirror all output to the specified file (in addition to the console).
    #[arg(long, value_name = "FILE")]
    pub log: Option<String>,
}
