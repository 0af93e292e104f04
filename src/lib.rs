//! `nomoemo` is a library and command-line tool for finding and removing
//! emojis from text files, and for auditing files against restricted
//! character sets (ASCII or Latin-1).
//!
//! The scan understands full emoji sequences, not just single codepoints:
//! ZWJ families, skin-tone modified gestures, flag pairs, and keycaps are
//! each found and rewritten as one unit, so a removal never leaves stray
//! joiners or modifiers behind.
//!
//! As a library, the pieces compose as a pipeline:
//! 1.  **Discover**: Walk the target and keep the files that look like
//!     UTF-8 text, skipping binaries by extension and by content probe.
//! 2.  **Scan**: Find emoji matches or charset violations in decoded text.
//! 3.  **Act**: Report findings, or rewrite files in place.
//!
//! The [`run`] driver wires these together behind the same reporter and
//! confirmation traits the binary uses, so a host application can capture
//! all output and answer prompts programmatically.
//!
//! # Example: Library Usage
//!
//! The following example removes the emojis from every file in a
//! temporary directory.
//!
//! ```
//! use nomoemo::prompt::StdinConfirm;
//! use nomoemo::report::MemoryReporter;
//! use nomoemo::{run, CancellationToken, Config, Mode};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a directory with one offending file.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("notes.txt"), "ship it 🚀").unwrap();
//!
//! // 2. Configure a forced removal run over that directory.
//! let config = Config {
//!     target: temp_dir.path().to_path_buf(),
//!     mode: Mode::Remove,
//!     recursive: false,
//!     force: true,
//!     quiet: false,
//!     verbose: false,
//!     log_file: None,
//! };
//!
//! // 3. Collect output in memory; `force` means the prompt is never read.
//! let token = CancellationToken::new();
//! let mut reporter = MemoryReporter::new();
//! let mut confirm = StdinConfirm;
//!
//! // 4. Execute the run.
//! let counters = run(&config, &token, &mut reporter, &mut confirm).unwrap();
//!
//! assert_eq!(counters.files_modified, 1);
//! assert_eq!(
//!     fs::read_to_string(temp_dir.path().join("notes.txt")).unwrap(),
//!     "ship it "
//! );
//! assert!(reporter.contains("[+] Removed 1 emojis from 1 files."));
//! ```

// Make modules public if they contain public types used in the API
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod position;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod signal;
pub mod transform;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{CharsetPolicy, Config, Mode};
pub use coordinator::{run, RunCounters};
pub use errors::{Error, Result};
