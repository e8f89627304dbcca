//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI,
//! making them available to the rest of the application in a structured and
//! type-safe manner. Nothing downstream reads environment variables or the
//! working directory on its own; everything arrives through [`Config`].

use crate::constants::{GITHUB_API_ROOT, GITHUB_TIMEOUT, HREF_TIMEOUT};
use std::path::PathBuf;
use std::time::Duration;

pub use crate::output::merge::MergeMode;
pub use builder::ConfigBuilder;

mod builder;
mod parsing;
mod validation;

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the clipboard to the empty string.
    Clear,
    /// Print the clipboard content to stdout.
    Emit,
    /// Write the clipboard content to the given file.
    Write(PathBuf),
    /// Fetch each URL in order and deliver the concatenated bodies.
    Href(Vec<String>),
    /// Collect each operand (local path or GitHub location) in order.
    Collect(Vec<String>),
}

/// Represents the destination for the generated output of `Collect` and `Href`.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum OutputDestination {
    /// Copy the output to the system clipboard.
    #[default]
    Clipboard,
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

/// Settings for the GitHub contents client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    /// Root of the REST API, `https://api.github.com` unless overridden.
    pub api_root: String,
    /// Optional bearer token. Never logged.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_root: GITHUB_API_ROOT.to_string(),
            token: None,
            timeout: GITHUB_TIMEOUT,
        }
    }
}

/// Settings for `href` fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefConfig {
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HrefConfig {
    fn default() -> Self {
        Self {
            timeout: HREF_TIMEOUT,
        }
    }
}

/// Represents the fully resolved and validated configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The action to perform.
    pub action: Action,
    /// How new content is combined with the previous clipboard text.
    pub merge: MergeMode,
    /// Collect local files even when the repository's `.gitignore` matches them.
    pub include_ignored: bool,
    /// Where collected or fetched content goes.
    pub output_destination: OutputDestination,
    /// GitHub client settings.
    pub github: GitHubConfig,
    /// `href` client settings.
    pub href: HrefConfig,
    /// Ceiling for any single fetched body, in bytes.
    pub max_fetch_bytes: u64,
    /// Where the search for the repository root (and its `.gitignore`) starts.
    pub ignore_search_start: PathBuf,
}
