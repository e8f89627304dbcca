//! Defines application-specific error types.
//!
//! Every fatal condition of a run maps to one variant of [`Error`]. Errors that
//! only cost a single file during a local walk are logged where they happen and
//! never reach this type.

use thiserror::Error;

/// A specialized `Result` type for `pull` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The primary error type for all operations in `pull`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid or incomplete configuration.
    #[error("{0}")]
    Config(String),

    /// Reading or writing the clipboard failed.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// A GitHub operand could not be parsed.
    #[error("github: {reason}, got {input:?}")]
    InvalidSpec {
        /// The operand as given on the command line.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The GitHub API answered with a non-success status.
    #[error("{}", github_status_message(.status, .message.as_deref()))]
    GitHubStatus {
        /// Status line, e.g. `404 Not Found`.
        status: String,
        /// The `message` field of the error body, if there was one.
        message: Option<String>,
    },

    /// A single-object listing described something that is neither a file nor a directory.
    #[error("github: unsupported content type {kind:?} at {location}")]
    UnsupportedContent {
        /// The declared entry type.
        kind: String,
        /// `owner/repo:path` of the entry.
        location: String,
    },

    /// A body exceeded the configured fetch ceiling.
    #[error("{what} too large (exceeds {limit} bytes)")]
    TooLarge {
        /// What was being read.
        what: String,
        /// The ceiling in bytes.
        limit: u64,
    },

    /// The HTTP transport failed before a status was received.
    #[error("{context}: {source}")]
    Http {
        /// What the request was for.
        context: String,
        /// The underlying `reqwest::Error`.
        #[source]
        source: reqwest::Error,
    },

    /// An `href` fetch answered with a non-2xx status.
    #[error("href: bad status for {url:?}: {status}")]
    HrefStatus {
        /// The normalized URL.
        url: String,
        /// Status line, e.g. `404 Not Found`.
        status: String,
    },

    /// A GitHub API body could not be decoded.
    #[error("{context}: {source}")]
    Decode {
        /// What was being decoded.
        context: String,
        /// The underlying `serde_json::Error`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors specific to clipboard operations.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard backend could not be initialized.
    #[error("Failed to initialize clipboard: {0}")]
    Initialization(String),
    /// Reading the clipboard failed.
    #[error("Error reading clipboard: {0}")]
    GetContent(String),
    /// Writing the clipboard failed.
    #[error("Error writing to clipboard: {0}")]
    SetContent(String),
    /// The binary was built without the `clipboard` feature.
    #[error("Clipboard support is not compiled in (enable the `clipboard` feature)")]
    Unsupported,
}

fn github_status_message(status: &str, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("github: {} ({})", message, status),
        None => format!("github: bad status {}", status),
    }
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
