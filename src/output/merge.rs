// src/output/merge.rs

//! Combines freshly collected content with whatever the clipboard already holds.

use crate::clipboard::Clipboard;
use crate::errors::Result;
use log::debug;

/// How new content relates to the existing clipboard text.
///
/// Both flags may be set at once: the old text is then present both before and
/// after the new content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeMode {
    /// Keep the old clipboard text in front of the new content.
    pub append: bool,
    /// Keep the old clipboard text after the new content.
    pub prepend: bool,
}

impl MergeMode {
    /// Overwrite the clipboard, ignoring its previous content.
    pub const OVERWRITE: MergeMode = MergeMode {
        append: false,
        prepend: false,
    };

    /// Returns `true` if either mode needs the previous clipboard text.
    pub fn reads_clipboard(&self) -> bool {
        self.append || self.prepend
    }
}

/// Produces the final text of a run.
///
/// Order of operations:
/// 1. `append`: read the clipboard and seed the buffer with it (plus a newline if
///    it lacks one). A failed read seeds nothing.
/// 2. `prepend`: read the clipboard again and hold the text aside.
/// 3. Run `produce`; its error aborts the merge and is returned unchanged.
/// 4. `prepend`: attach the held text after the new content, separated by a
///    newline when needed.
pub fn merge_with_clipboard<F>(
    clipboard: &mut dyn Clipboard,
    mode: MergeMode,
    produce: F,
) -> Result<Vec<u8>>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buffer = Vec::new();

    if mode.append {
        match clipboard.read() {
            Ok(current) => {
                buffer.extend_from_slice(current.as_bytes());
                ensure_trailing_newline(&mut buffer);
            }
            Err(e) => debug!("Append mode: clipboard unreadable, starting empty ({})", e),
        }
    }

    let previous = if mode.prepend {
        clipboard.read().unwrap_or_else(|e| {
            debug!("Prepend mode: clipboard unreadable, nothing to keep ({})", e);
            String::new()
        })
    } else {
        String::new()
    };

    produce(&mut buffer)?;

    if !previous.is_empty() {
        ensure_trailing_newline(&mut buffer);
        buffer.extend_from_slice(previous.as_bytes());
    }

    Ok(buffer)
}

/// Appends `\n` unless `buffer` is empty or already ends with one.
pub(crate) fn ensure_trailing_newline(buffer: &mut Vec<u8>) {
    if !buffer.is_empty() && !buffer.ends_with(b"\n") {
        buffer.push(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::errors::Error;

    fn produce_text(text: &'static str) -> impl FnOnce(&mut Vec<u8>) -> Result<()> {
        move |buffer| {
            buffer.extend_from_slice(text.as_bytes());
            Ok(())
        }
    }

    fn merged(clipboard: &mut MemoryClipboard, mode: MergeMode, new: &'static str) -> String {
        let bytes = merge_with_clipboard(clipboard, mode, produce_text(new)).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_overwrite_ignores_clipboard() {
        let mut clipboard = MemoryClipboard::with_content("old");
        assert_eq!(merged(&mut clipboard, MergeMode::OVERWRITE, "new\n"), "new\n");
        assert_eq!(clipboard.reads, 0);
    }

    #[test]
    fn test_append_seeds_with_previous_content() {
        let mut clipboard = MemoryClipboard::with_content("old");
        let mode = MergeMode {
            append: true,
            prepend: false,
        };
        assert_eq!(merged(&mut clipboard, mode, "new\n"), "old\nnew\n");
    }

    #[test]
    fn test_append_does_not_double_newline() {
        let mut clipboard = MemoryClipboard::with_content("old\n");
        let mode = MergeMode {
            append: true,
            prepend: false,
        };
        assert_eq!(merged(&mut clipboard, mode, "new\n"), "old\nnew\n");
    }

    #[test]
    fn test_append_with_empty_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        let mode = MergeMode {
            append: true,
            prepend: false,
        };
        assert_eq!(merged(&mut clipboard, mode, "new\n"), "new\n");
    }

    #[test]
    fn test_prepend_keeps_previous_after_new() {
        let mut clipboard = MemoryClipboard::with_content("old");
        let mode = MergeMode {
            append: false,
            prepend: true,
        };
        assert_eq!(merged(&mut clipboard, mode, "new"), "new\nold");
    }

    #[test]
    fn test_prepend_with_empty_new_content() {
        let mut clipboard = MemoryClipboard::with_content("old");
        let mode = MergeMode {
            append: false,
            prepend: true,
        };
        assert_eq!(merged(&mut clipboard, mode, ""), "old");
    }

    #[test]
    fn test_append_and_prepend_together() {
        let mut clipboard = MemoryClipboard::with_content("old");
        let mode = MergeMode {
            append: true,
            prepend: true,
        };
        assert_eq!(merged(&mut clipboard, mode, "new\n"), "old\nnew\nold");
        assert_eq!(clipboard.reads, 2);
    }

    #[test]
    fn test_failed_reads_degrade_to_overwrite() {
        let mut clipboard = MemoryClipboard {
            read_fails: true,
            ..MemoryClipboard::with_content("old")
        };
        let mode = MergeMode {
            append: true,
            prepend: true,
        };
        assert_eq!(merged(&mut clipboard, mode, "new\n"), "new\n");
    }

    #[test]
    fn test_produce_error_is_propagated() {
        let mut clipboard = MemoryClipboard::with_content("old");
        let mode = MergeMode {
            append: true,
            prepend: true,
        };
        let result = merge_with_clipboard(&mut clipboard, mode, |buffer| {
            buffer.extend_from_slice(b"partial");
            Err(Error::Config("boom".to_string()))
        });
        assert!(matches!(result, Err(Error::Config(msg)) if msg == "boom"));
        assert_eq!(clipboard.writes, 0);
        assert_eq!(clipboard.content, "old");
    }
}
