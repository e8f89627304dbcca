//! `pull` is a library and command-line tool that gathers local files, GitHub
//! paths and web pages into one block of text, ready to paste.
//!
//! Every collected file is introduced by a `file: <path>` line and reduced to its
//! meaningful lines: blank lines and lines starting with `//` or `#` are dropped.
//! The result replaces the clipboard, or is merged with what the clipboard
//! already holds (`--append`, `--prepend`), or goes to stdout or a file.
//!
//! The pipeline is:
//! 1.  **Classify**: each operand is a local path or a GitHub location.
//! 2.  **Collect**: local trees are walked honoring `.gitignore`; GitHub trees are
//!     listed through the REST contents API; `href` URLs are fetched verbatim.
//! 3.  **Merge & deliver**: the new text is combined with the clipboard and sent
//!     to its destination only if every operand succeeded.
//!
//! # Example: Library Usage
//!
//! ```
//! use pull::clipboard::MemoryClipboard;
//! use pull::{execute, ConfigBuilder, Outcome};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("notes.txt"), "# heading\n\nkeep me\n").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .operands([temp_dir.path().to_str().unwrap()])
//!     .ignore_search_start(temp_dir.path())
//!     .build()
//!     .unwrap();
//!
//! let mut clipboard = MemoryClipboard::default();
//! let mut stdout = Vec::new();
//! let outcome = execute(&config, &mut clipboard, &mut stdout).unwrap();
//!
//! assert!(matches!(outcome, Outcome::Delivered(_)));
//! assert!(clipboard.content.ends_with("notes.txt\nkeep me\n"));
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod errors;
pub mod github;
pub mod href;
pub mod ignore_matcher;
pub mod local;
pub mod operand;
pub mod output;
pub mod processing;

pub use config::{Action, Config, ConfigBuilder, OutputDestination};

use crate::clipboard::Clipboard;
use crate::errors::{io_error_with_path, Result};
use crate::github::{collect_remote, GitHubClient};
use crate::href::HrefFetcher;
use crate::ignore_matcher::IgnoreMatcher;
use crate::local::LocalCollector;
use crate::operand::Operand;
use crate::output::{deliver, merge_with_clipboard};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// What a successful [`execute`] did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The clipboard was emptied.
    Cleared,
    /// The clipboard content was printed.
    Emitted,
    /// The clipboard content was written to this file.
    Written(PathBuf),
    /// Collected or fetched content was delivered here.
    Delivered(OutputDestination),
}

/// Runs one configured action against the given clipboard and stdout.
///
/// For `Collect` and `Href` nothing is delivered unless every operand succeeded;
/// on error the clipboard and the output destination are left untouched.
pub fn execute(
    config: &Config,
    clipboard: &mut dyn Clipboard,
    stdout: &mut dyn Write,
) -> Result<Outcome> {
    match &config.action {
        Action::Clear => {
            clipboard.write("")?;
            Ok(Outcome::Cleared)
        }
        Action::Emit => {
            let content = clipboard.read()?;
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| io_error_with_path(e, "<stdout>"))?;
            Ok(Outcome::Emitted)
        }
        Action::Write(path) => {
            let content = clipboard.read()?;
            fs::write(path, content.as_bytes()).map_err(|e| io_error_with_path(e, path))?;
            Ok(Outcome::Written(path.clone()))
        }
        Action::Href(urls) => {
            let content = merge_with_clipboard(clipboard, config.merge, |out| {
                fetch_urls(urls, config, out)
            })?;
            deliver(&content, &config.output_destination, clipboard, stdout)?;
            Ok(Outcome::Delivered(config.output_destination.clone()))
        }
        Action::Collect(operands) => {
            let content = merge_with_clipboard(clipboard, config.merge, |out| {
                collect(operands, config, out)
            })?;
            info!("Collected {} bytes from {} operand(s)", content.len(), operands.len());
            deliver(&content, &config.output_destination, clipboard, stdout)?;
            Ok(Outcome::Delivered(config.output_destination.clone()))
        }
    }
}

/// Collects `operands` in order into `out`.
///
/// Local operands never fail as a whole (unreadable entries are logged and
/// skipped). The first failing GitHub operand aborts the collection.
pub fn collect<S: AsRef<str>>(operands: &[S], config: &Config, out: &mut Vec<u8>) -> Result<()> {
    let mut matcher: Option<IgnoreMatcher> = None;
    let mut client: Option<GitHubClient> = None;

    for raw in operands {
        match Operand::classify(raw.as_ref())? {
            Operand::Local(path) => {
                let matcher = matcher.get_or_insert_with(|| local_matcher(config));
                LocalCollector::new(matcher, config.include_ignored).collect(&path, out);
            }
            Operand::GitHub(spec) => {
                if client.is_none() {
                    client = Some(GitHubClient::new(&config.github, config.max_fetch_bytes)?);
                }
                if let Some(client) = &client {
                    collect_remote(client, &spec, out)?;
                }
            }
        }
    }
    Ok(())
}

/// Fetches each URL in order into `out`. The first failure aborts.
pub fn fetch_urls<S: AsRef<str>>(urls: &[S], config: &Config, out: &mut Vec<u8>) -> Result<()> {
    let fetcher = HrefFetcher::new(&config.href, config.max_fetch_bytes)?;
    for url in urls.iter().map(AsRef::as_ref).filter(|u| !u.trim().is_empty()) {
        fetcher.fetch_into(url, out)?;
    }
    Ok(())
}

fn local_matcher(config: &Config) -> IgnoreMatcher {
    if config.include_ignored {
        return IgnoreMatcher::none();
    }
    let matcher = IgnoreMatcher::discover(&config.ignore_search_start);
    if let Some(root) = matcher.root() {
        debug!("Ignore rules anchored at {}", root.display());
    }
    matcher
}
