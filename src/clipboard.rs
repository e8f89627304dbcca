//! Clipboard access behind a small trait so the pipeline can run against an
//! in-memory clipboard in tests and headless environments.

use crate::errors::ClipboardError;

/// Read/write access to a text clipboard.
///
/// No atomicity is assumed: content may change between a `read` and a later `write`.
pub trait Clipboard {
    /// Returns the current clipboard text.
    fn read(&mut self) -> Result<String, ClipboardError>;
    /// Replaces the clipboard text.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard, via `arboard`.
///
/// The backend is opened lazily on first use, so commands that never touch the
/// clipboard (e.g. `--stdout` without `--append`) work on machines without one.
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(feature = "clipboard")]
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a handle; the backend is not contacted yet.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "clipboard")]
    fn backend(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Initialization(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Initialization("backend unavailable".to_string()))
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        match self.backend()?.get_text() {
            Ok(text) => Ok(text),
            // An empty clipboard is not an error for our purposes.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::GetContent(e.to_string())),
        }
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.backend()?
            .set_text(text)
            .map_err(|e| ClipboardError::SetContent(e.to_string()))
    }
}

#[cfg(not(feature = "clipboard"))]
impl Clipboard for SystemClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unsupported)
    }

    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

/// An in-process clipboard.
///
/// `read_fails` makes every read return an error, which is how tests exercise the
/// lenient append/prepend seeding. `write_fails` does the same for writes.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    /// Current content.
    pub content: String,
    /// Number of successful or failed `read` calls so far.
    pub reads: usize,
    /// Number of `write` calls so far.
    pub writes: usize,
    /// When set, `read` fails.
    pub read_fails: bool,
    /// When set, `write` fails and leaves `content` unchanged.
    pub write_fails: bool,
}

impl MemoryClipboard {
    /// Creates a clipboard holding `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        self.reads += 1;
        if self.read_fails {
            return Err(ClipboardError::GetContent("simulated failure".to_string()));
        }
        Ok(self.content.clone())
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes += 1;
        if self.write_fails {
            return Err(ClipboardError::SetContent("simulated failure".to_string()));
        }
        self.content = text.to_string();
        Ok(())
    }
}
