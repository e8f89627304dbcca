// src/output/writer.rs

//! Delivers the final text to its destination (clipboard, stdout, or file).

use crate::clipboard::Clipboard;
use crate::config::OutputDestination;
use crate::errors::{io_error_with_path, Result};
use std::fs;
use std::io::Write;

/// Sends `content` to `destination`.
///
/// The clipboard only accepts text, so non-UTF-8 bytes are replaced there;
/// stdout and files receive the bytes unchanged.
pub fn deliver(
    content: &[u8],
    destination: &OutputDestination,
    clipboard: &mut dyn Clipboard,
    stdout: &mut dyn Write,
) -> Result<()> {
    match destination {
        OutputDestination::Clipboard => {
            clipboard.write(&String::from_utf8_lossy(content))?;
        }
        OutputDestination::Stdout => {
            stdout
                .write_all(content)
                .and_then(|_| stdout.flush())
                .map_err(|e| io_error_with_path(e, "<stdout>"))?;
        }
        OutputDestination::File(path) => {
            fs::write(path, content).map_err(|e| io_error_with_path(e, path))?;
        }
    }
    Ok(())
}
