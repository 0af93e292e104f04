// src/discovery/mod.rs

//! Builds the list of files a run will process.
//!
//! A file target is taken as-is; a directory target is walked (one level
//! deep unless recursive) and every regular file that passes the
//! eligibility check in [`crate::filtering`] is collected. `walkdir` is
//! used instead of an ignore-aware walker on purpose: hidden files and
//! ignored files are scanned like any others.

use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::is_scannable;
use crate::report::Reporter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects the files to process for `target`.
///
/// An explicitly named file is returned directly, bypassing eligibility:
/// naming a file on the command line overrides the binary heuristics. A
/// directory is enumerated (immediate children only unless `recursive`),
/// keeping regular files and symlinks to regular files that pass
/// [`is_scannable`]. Enumeration errors on individual entries are reported
/// as warnings and skipped.
///
/// The result is sorted so runs over the same tree are deterministic.
///
/// # Errors
/// Returns [`Error::TargetNotFound`] if `target` does not exist, or
/// [`Error::Io`] if its metadata cannot be read at all.
pub fn collect_files(
    target: &Path,
    recursive: bool,
    reporter: &mut dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let metadata = match fs::metadata(target) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::TargetNotFound {
                path: target.display().to_string(),
            });
        }
        Err(e) => return Err(io_error_with_path(e, target)),
    };

    if metadata.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }

    let mut walker = WalkDir::new(target);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                reporter.warning(&format!("Could not read directory entry: {e}"));
                continue;
            }
        };

        // Symlinked directories are listed but not descended into.
        let is_regular_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_regular_file {
            continue;
        }

        let path = entry.into_path();
        if is_scannable(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
