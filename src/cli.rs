// src/cli.rs

use crate::constants::{GITHUB_API_URL_ENV, GITHUB_TOKEN_ENV};
use clap::{Parser, Subcommand};

/// Pull files, directories, GitHub paths and URLs into the clipboard.
///
/// Every file is emitted as a `file: <path>` line followed by its content, with
/// blank lines and `//` or `#` comment lines dropped. Local directories are walked
/// recursively while honoring the repository's `.gitignore`.
#[derive(Parser, Debug)]
#[command(name = "pull", author, version, about, long_about = None)]
#[command(after_help = "GitHub auth (recommended):\n  \
    export GITHUB_TOKEN=ghp_...   (or a fine-grained token with repo read access)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files, directories or GitHub locations to collect, in order.
    ///
    /// GitHub forms: github.com/<owner>/<repo>[@ref][/path],
    /// https://github.com/<owner>/<repo>/tree/<ref>/<path>,
    /// https://github.com/<owner>/<repo>/blob/<ref>/<path>.
    #[arg(value_name = "PATH_OR_GITHUB")]
    pub operands: Vec<String>,

    // --- Clipboard Merge Options ---
    /// Append to the clipboard instead of overwriting it.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub append: bool,

    /// Prepend to the clipboard instead of overwriting it.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub prepend: bool,

    // --- Filtering Options ---
    /// Include files that are ignored by .gitignore.
    #[arg(long = "includeIgnore", global = true, action = clap::ArgAction::SetTrue)]
    pub include_ignore: bool,

    /// Maximum size of any fetched body (e.g., "5MiB", "512k").
    #[arg(short = 'm', long, global = true, value_name = "BYTES")]
    pub max_size: Option<String>,

    // --- Output Options ---
    /// Print the result to stdout instead of copying it to the clipboard.
    #[arg(long, global = true, conflicts_with = "output", action = clap::ArgAction::SetTrue)]
    pub stdout: bool,

    /// Write the result to a file instead of copying it to the clipboard.
    #[arg(short = 'o', long, global = true, value_name = "FILE")]
    pub output: Option<String>,

    // --- GitHub Options ---
    /// Token for the GitHub API (private repositories, higher rate limits).
    #[arg(long, global = true, env = GITHUB_TOKEN_ENV, hide_env_values = true, value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// Root of the GitHub REST API.
    #[arg(long, global = true, env = GITHUB_API_URL_ENV, hide = true, value_name = "URL")]
    pub github_api_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Clear the clipboard.
    Clear,
    /// Print the clipboard content to stdout.
    Emit,
    /// Write the clipboard content to a file.
    Write {
        /// Destination file.
        #[arg(value_name = "FILE")]
        path: Option<String>,
    },
    /// Fetch URL(s) and copy the responses to the clipboard.
    Href {
        /// URLs to fetch, in order. `https://` is assumed when no scheme is given.
        #[arg(value_name = "URL")]
        urls: Vec<String>,
    },
}
