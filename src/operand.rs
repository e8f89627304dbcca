//! Classification of positional operands into local paths and GitHub locations.

use crate::errors::Result;
use crate::github::{looks_like_github_spec, RemoteSpec};
use std::path::PathBuf;

/// One positional operand of the default collect action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A file or directory on the local filesystem.
    Local(PathBuf),
    /// A repository, directory or file on GitHub.
    GitHub(RemoteSpec),
}

impl Operand {
    /// Classifies `raw` after trimming surrounding whitespace.
    ///
    /// Anything carrying a GitHub prefix must parse as a [`RemoteSpec`]; every
    /// other operand is taken as a local path without touching the filesystem.
    ///
    /// # Examples
    /// ```
    /// use pull::operand::Operand;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(Operand::classify(" src ").unwrap(), Operand::Local(PathBuf::from("src")));
    /// assert!(matches!(
    ///     Operand::classify("github.com/owner/repo").unwrap(),
    ///     Operand::GitHub(_)
    /// ));
    /// ```
    pub fn classify(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if looks_like_github_spec(raw) {
            RemoteSpec::parse(raw).map(Operand::GitHub)
        } else {
            Ok(Operand::Local(PathBuf::from(raw)))
        }
    }
}
