//! `.gitignore` support for local collection.
//!
//! The matcher is anchored at a repository root discovered by walking up from a
//! start directory (normally the working directory). Paths outside that root are
//! never ignored.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::{debug, warn};
use std::path::{Component, Path, PathBuf};

/// Answers "is this path ignored by default?" for one repository root.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    root: Option<PathBuf>,
    matcher: Option<Gitignore>,
}

impl IgnoreMatcher {
    /// A matcher that ignores nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Finds the repository root above `start` and loads its `.gitignore`.
    ///
    /// If no root is found, the returned matcher ignores nothing.
    pub fn discover(start: &Path) -> Self {
        match find_repo_root(start) {
            Some(root) => Self::load(&root),
            None => {
                debug!("No repository root found above {}", start.display());
                Self::none()
            }
        }
    }

    /// Compiles `<root>/.gitignore`. A missing or unreadable file yields a matcher
    /// that ignores nothing but still remembers `root`.
    pub fn load(root: &Path) -> Self {
        let root = absolute(root);
        let gitignore_path = root.join(".gitignore");
        if !gitignore_path.is_file() {
            debug!("{} has no .gitignore", root.display());
            return Self {
                root: Some(root),
                matcher: None,
            };
        }

        let mut builder = GitignoreBuilder::new(&root);
        if let Some(e) = builder.add(&gitignore_path) {
            warn!("Could not read {}: {}", gitignore_path.display(), e);
            return Self {
                root: Some(root),
                matcher: None,
            };
        }
        let matcher = match builder.build() {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                warn!("Invalid ignore patterns in {}: {}", gitignore_path.display(), e);
                None
            }
        };
        debug!("Loaded ignore rules from {}", gitignore_path.display());
        Self {
            root: Some(root),
            matcher,
        }
    }

    /// The discovered repository root, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Returns `true` if `candidate` is excluded by the loaded rules.
    ///
    /// `is_dir` lets directory-only patterns (`target/`) apply to the directory
    /// itself; files below an ignored directory are also reported as ignored.
    pub fn is_ignored(&self, candidate: &Path, is_dir: bool) -> bool {
        let (Some(root), Some(matcher)) = (&self.root, &self.matcher) else {
            return false;
        };
        let Some(relative) = slash_relative(root, &absolute(candidate)) else {
            return false;
        };
        matcher
            .matched_path_or_any_parents(Path::new(&relative), is_dir)
            .is_ignore()
    }
}

/// Walks upward from `start` until a directory containing `.git` or `.gitignore`
/// is found.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let start = start
        .canonicalize()
        .unwrap_or_else(|_| absolute(start));
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists() || dir.join(".gitignore").is_file())
        .map(Path::to_path_buf)
}

/// Makes `path` absolute against the working directory and cleans it lexically,
/// without touching the filesystem.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    clean(&path)
}

/// Drops `.` components and resolves `..` against the component before it.
/// `..` directly below the root stays at the root.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// `candidate` relative to `root` in forward-slash form, or `None` when it is
/// not strictly below `root`.
fn slash_relative(root: &Path, candidate: &Path) -> Option<String> {
    let relative = candidate.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
