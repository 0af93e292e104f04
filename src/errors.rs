// src/errors.rs

//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the run-aborting
//! failures, offering more context than generic I/O or `anyhow` errors.
//! Per-file problems (unreadable, undecodable, unwritable) are deliberately
//! NOT represented here: they are soft skips reported as warnings and never
//! escalate into the run's final status.

use thiserror::Error;

/// Convenience alias used by the library pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `nomoemo`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// The positional target path does not exist.
    #[error("Target path does not exist: {path}")]
    TargetNotFound {
        /// The path that was requested on the command line.
        path: String,
    },

    /// Generic error related to invalid argument settings or combinations.
    /// Used when validation fails after initial clap parsing.
    #[error("{0}")]
    InvalidConfig(String),

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
