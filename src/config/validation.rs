// src/config/validation.rs

use super::{Action, MergeMode};
use crate::errors::{Error, Result};

/// Checks that the action carries the arguments it needs.
///
/// A collect without operands is accepted under `--append` or `--prepend`: it
/// only re-merges the current clipboard.
pub(super) fn validate_action(action: &Action, merge: MergeMode) -> Result<()> {
    match action {
        Action::Write(path) if path.as_os_str().is_empty() => Err(Error::Config(
            "Missing file path. Usage: pull write ./some_file".to_string(),
        )),
        Action::Href(urls) if urls.iter().all(|u| u.trim().is_empty()) => Err(Error::Config(
            "Missing URL(s). Usage: pull href <url> [url2 ...]".to_string(),
        )),
        Action::Collect(operands)
            if !merge.reads_clipboard() && operands.iter().all(|o| o.trim().is_empty()) =>
        {
            Err(Error::Config(
                "Missing operand(s). Usage: pull <file/dir> ...".to_string(),
            ))
        }
        _ => Ok(()),
    }
}

/// Validates combinations of options that clap cannot express for programmatic callers.
pub(super) fn validate_output_options(stdout: bool, output_file: bool) -> Result<()> {
    if stdout && output_file {
        return Err(Error::Config(
            "Cannot use --output <FILE> (-o) and --stdout simultaneously.".to_string(),
        ));
    }
    Ok(())
}
