// src/prompt.rs

//! Two-step confirmation for destructive operations.
//!
//! Remove and replace runs must be confirmed twice before any file is
//! touched. The exchange sits behind the [`Confirm`] trait so the
//! coordinator can be driven in tests without a TTY.

use std::io::{self, BufRead, Write};

/// Asks the user to confirm a destructive action.
///
/// # Examples
///
/// ```
/// use nomoemo::prompt::Confirm;
///
/// // A test double that always declines.
/// struct Decline;
/// impl Confirm for Decline {
///     fn confirm(&mut self, _action: &str) -> bool {
///         false
///     }
/// }
///
/// let mut prompt = Decline;
/// assert!(!prompt.confirm("Delete Emojis"));
/// ```
pub trait Confirm {
    /// Runs the two-step exchange for `action` (e.g. `"Delete Emojis"`).
    ///
    /// Returns `true` only if the user answered yes to both prompts.
    fn confirm(&mut self, action: &str) -> bool;
}

/// Interactive confirmation over stdin/stdout.
///
/// Only a trimmed `y` or `Y` counts as yes; anything else, end of input,
/// or a read error declines.
pub struct StdinConfirm;

fn is_yes(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("y")
}

impl StdinConfirm {
    fn ask(prompt: &str) -> bool {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => false, // end of input declines
            Ok(_) => is_yes(&line),
            Err(_) => false,
        }
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&mut self, action: &str) -> bool {
        if !Self::ask(&format!("[?] {action}? (y/N) ")) {
            return false;
        }
        Self::ask("[!] Are you SURE? (y/N) Press Y to confirm! ")
    }
}
