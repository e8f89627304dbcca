// src/config/builder.rs

use super::{
    parsing::{normalize_token, parse_max_size},
    validation::{validate_action, validate_output_options},
    Action, Config, GitHubConfig, HrefConfig, MergeMode, OutputDestination,
};
use crate::cli::{Cli, Commands};
use crate::constants::{GITHUB_API_ROOT, MAX_FETCH_BYTES};
use crate::errors::{io_error_with_path, Result};
use std::path::PathBuf;
use std::time::Duration;

/// A builder for creating a [`Config`] programmatically.
///
/// The builder is the only way a `Config` is assembled, whether the settings
/// come from the command line ([`ConfigBuilder::from_cli`]) or from code.
///
/// # Examples
/// ```
/// use pull::config::{Action, ConfigBuilder, OutputDestination};
///
/// let config = ConfigBuilder::new()
///     .operands(["src", "github.com/rust-lang/cargo@master/src"])
///     .append(true)
///     .stdout(true)
///     .build()
///     .unwrap();
/// assert!(matches!(config.action, Action::Collect(ref ops) if ops.len() == 2));
/// assert!(config.merge.append);
/// assert_eq!(config.output_destination, OutputDestination::Stdout);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    action: Option<Action>,
    operands: Vec<String>,
    append: Option<bool>,
    prepend: Option<bool>,
    include_ignored: Option<bool>,
    stdout: Option<bool>,
    output_file: Option<String>,
    max_size: Option<String>,
    github_token: Option<String>,
    github_api_url: Option<String>,
    github_timeout: Option<Duration>,
    href_timeout: Option<Duration>,
    ignore_search_start: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings (collect, overwrite, clipboard).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let action = match cli.command {
            None => None,
            Some(Commands::Clear) => Some(Action::Clear),
            Some(Commands::Emit) => Some(Action::Emit),
            Some(Commands::Write { path }) => Some(Action::Write(
                path.map(PathBuf::from).unwrap_or_default(),
            )),
            Some(Commands::Href { urls }) => Some(Action::Href(urls)),
        };

        Self {
            action,
            operands: cli.operands,
            append: Some(cli.append),
            prepend: Some(cli.prepend),
            include_ignored: Some(cli.include_ignore),
            stdout: Some(cli.stdout),
            output_file: cli.output,
            max_size: cli.max_size,
            github_token: cli.github_token,
            github_api_url: cli.github_api_url,
            github_timeout: None,
            href_timeout: None,
            ignore_search_start: None,
        }
    }

    /// Collects these operands (local paths or GitHub locations). This is the default action.
    pub fn operands<I, S>(mut self, operands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operands = operands.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the action explicitly. `Action::Collect` takes precedence over [`operands`](Self::operands).
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Keeps the previous clipboard text before the new content.
    pub fn append(mut self, append: bool) -> Self {
        self.append = Some(append);
        self
    }

    /// Keeps the previous clipboard text after the new content.
    pub fn prepend(mut self, prepend: bool) -> Self {
        self.prepend = Some(prepend);
        self
    }

    /// Collects local files even when `.gitignore` matches them.
    pub fn include_ignored(mut self, include: bool) -> Self {
        self.include_ignored = Some(include);
        self
    }

    /// Sends the result to stdout instead of the clipboard.
    pub fn stdout(mut self, stdout: bool) -> Self {
        self.stdout = Some(stdout);
        self
    }

    /// Writes the result to a file instead of the clipboard.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Sets the fetch ceiling from a human-readable size (e.g. `"5MiB"`).
    pub fn max_size(mut self, size: impl Into<String>) -> Self {
        self.max_size = Some(size.into());
        self
    }

    /// Sets the GitHub bearer token.
    pub fn github_token(mut self, token: impl Into<String>) -> Self {
        self.github_token = Some(token.into());
        self
    }

    /// Overrides the GitHub API root.
    pub fn github_api_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_url = Some(url.into());
        self
    }

    /// Overrides the GitHub request timeout.
    pub fn github_timeout(mut self, timeout: Duration) -> Self {
        self.github_timeout = Some(timeout);
        self
    }

    /// Overrides the `href` request timeout.
    pub fn href_timeout(mut self, timeout: Duration) -> Self {
        self.href_timeout = Some(timeout);
        self
    }

    /// Sets where the repository root search starts. Defaults to the current directory.
    pub fn ignore_search_start(mut self, start: impl Into<PathBuf>) -> Self {
        self.ignore_search_start = Some(start.into());
        self
    }

    /// Validates the settings and builds the final [`Config`].
    pub fn build(self) -> Result<Config> {
        let stdout = self.stdout.unwrap_or(false);
        validate_output_options(stdout, self.output_file.is_some())?;

        let action = self
            .action
            .unwrap_or_else(|| Action::Collect(self.operands.clone()));
        let merge = MergeMode {
            append: self.append.unwrap_or(false),
            prepend: self.prepend.unwrap_or(false),
        };
        validate_action(&action, merge)?;

        let output_destination = match self.output_file {
            Some(path) => OutputDestination::File(PathBuf::from(path)),
            None if stdout => OutputDestination::Stdout,
            None => OutputDestination::Clipboard,
        };

        let ignore_search_start = match self.ignore_search_start {
            Some(start) => start,
            None => std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?,
        };

        let github = GitHubConfig {
            api_root: self
                .github_api_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| GITHUB_API_ROOT.to_string()),
            token: normalize_token(self.github_token),
            timeout: self.github_timeout.unwrap_or(GitHubConfig::default().timeout),
        };
        let href = HrefConfig {
            timeout: self.href_timeout.unwrap_or(HrefConfig::default().timeout),
        };

        let config = Config {
            action,
            merge,
            include_ignored: self.include_ignored.unwrap_or(false),
            output_destination,
            github,
            href,
            max_fetch_bytes: parse_max_size(self.max_size.as_deref())?.unwrap_or(MAX_FETCH_BYTES),
            ignore_search_start,
        };
        log::debug!("Built {:?} with merge {:?}", config.action, config.merge);
        Ok(config)
    }
}
