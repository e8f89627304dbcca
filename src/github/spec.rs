//! Parses GitHub operands into owner, repository, ref and path.

use crate::errors::{Error, Result};
use url::Url;

/// A resolved GitHub operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    /// Repository owner (user or organization). Never empty.
    pub owner: String,
    /// Repository name. Never empty.
    pub repo: String,
    /// Branch, tag or commit. `None` leaves the choice to GitHub (default branch).
    pub reference: Option<String>,
    /// Path inside the repository, POSIX style, no leading slash. Empty means the root.
    pub path: String,
    /// The operand as given, used to label the output.
    pub label: String,
}

/// Returns `true` if `input` names a GitHub location rather than a local path.
///
/// # Examples
/// ```
/// use pull::github::looks_like_github_spec;
///
/// assert!(looks_like_github_spec("github.com/rust-lang/cargo"));
/// assert!(looks_like_github_spec("https://github.com/rust-lang/cargo/tree/master/src"));
/// assert!(!looks_like_github_spec("./github.com/notes.txt"));
/// assert!(!looks_like_github_spec("src/main.rs"));
/// ```
pub fn looks_like_github_spec(input: &str) -> bool {
    let input = input.trim();
    ["github.com/", "https://github.com/", "http://github.com/"]
        .iter()
        .any(|prefix| input.starts_with(prefix))
}

impl RemoteSpec {
    /// Parses one of the accepted shorthands:
    ///
    /// - `github.com/<owner>/<repo>[@ref][/path]`
    /// - `https://github.com/<owner>/<repo>/tree/<ref>[/path]`
    /// - `https://github.com/<owner>/<repo>/blob/<ref>/<path>`
    ///
    /// # Examples
    /// ```
    /// use pull::github::RemoteSpec;
    ///
    /// let spec = RemoteSpec::parse("github.com/rust-lang/cargo@master/src/cargo").unwrap();
    /// assert_eq!(spec.owner, "rust-lang");
    /// assert_eq!(spec.repo, "cargo");
    /// assert_eq!(spec.reference.as_deref(), Some("master"));
    /// assert_eq!(spec.path, "src/cargo");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(invalid(raw, "empty spec"));
        }

        let normalized = if raw.starts_with("github.com/") {
            format!("https://{}", raw)
        } else {
            raw.to_string()
        };
        let url = Url::parse(&normalized).map_err(|e| invalid(raw, &format!("invalid url ({})", e)))?;
        match url.host_str() {
            Some("github.com") | Some("www.github.com") => {}
            other => {
                return Err(invalid(
                    raw,
                    &format!("expected github.com host, found {:?}", other.unwrap_or("")),
                ))
            }
        }

        let segments = decoded_segments(&url, raw)?;
        if segments.len() < 2 {
            return Err(invalid(raw, "expected github.com/<owner>/<repo>"));
        }

        let owner = segments[0].clone();
        let mut repo = segments[1].clone();
        let mut reference = None;
        let mut path = String::new();

        if segments.len() >= 4 && matches!(segments[2].as_str(), "tree" | "blob") {
            reference = Some(segments[3].clone());
            path = segments[4..].join("/");
        } else if segments.len() > 2 {
            path = segments[2..].join("/");
        }

        // `repo@ref` wins over a marker-derived ref.
        if let Some((name, at_ref)) = repo.split_once('@') {
            reference = Some(at_ref.to_string());
            repo = name.to_string();
        }
        if let Some(name) = repo.strip_suffix(".git") {
            repo = name.to_string();
        }
        let reference = reference.filter(|r| !r.is_empty());

        if owner.is_empty() || repo.is_empty() {
            return Err(invalid(raw, "owner and repository must not be empty"));
        }

        Ok(Self {
            owner,
            repo,
            reference,
            path: path.trim_start_matches('/').to_string(),
            label: raw.to_string(),
        })
    }

    /// The `github.com/<owner>/<repo>[@ref]/<path>` label used in `file:` headers.
    pub fn file_label(&self, path: &str) -> String {
        let mut label = format!("{}/{}/{}", crate::constants::GITHUB_HOST, self.owner, self.repo);
        if let Some(reference) = &self.reference {
            label.push('@');
            label.push_str(reference);
        }
        label.push('/');
        label.push_str(path);
        label
    }
}

/// Non-empty, percent-decoded path segments of `url`. Query and fragment are ignored.
fn decoded_segments(url: &Url, raw: &str) -> Result<Vec<String>> {
    let Some(segments) = url.path_segments() else {
        return Ok(Vec::new());
    };
    segments
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            urlencoding::decode(segment)
                .map(|decoded| decoded.into_owned())
                .map_err(|_| invalid(raw, "path is not valid UTF-8"))
        })
        .collect()
}

fn invalid(input: &str, reason: &str) -> Error {
    Error::InvalidSpec {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> RemoteSpec {
        RemoteSpec::parse(raw).unwrap()
    }

    #[test]
    fn test_owner_repo_only() {
        let spec = parse("github.com/BurntSushi/ripgrep");
        assert_eq!(spec.owner, "BurntSushi");
        assert_eq!(spec.repo, "ripgrep");
        assert_eq!(spec.reference, None);
        assert_eq!(spec.path, "");
        assert_eq!(spec.label, "github.com/BurntSushi/ripgrep");
    }

    #[test]
    fn test_plain_sub_path_has_no_ref() {
        let spec = parse("github.com/BurntSushi/ripgrep/crates/ignore/");
        assert_eq!(spec.reference, None);
        assert_eq!(spec.path, "crates/ignore");
    }

    #[test]
    fn test_tree_url() {
        let spec = parse("https://github.com/BurntSushi/ripgrep/tree/master/crates/ignore");
        assert_eq!(spec.reference.as_deref(), Some("master"));
        assert_eq!(spec.path, "crates/ignore");
    }

    #[test]
    fn test_tree_url_without_path_is_repo_root() {
        let spec = parse("https://github.com/BurntSushi/ripgrep/tree/13.0.0");
        assert_eq!(spec.reference.as_deref(), Some("13.0.0"));
        assert_eq!(spec.path, "");
    }

    #[test]
    fn test_blob_url() {
        let spec = parse("https://github.com/git-fixtures/basic/blob/master/go/example.go");
        assert_eq!(spec.owner, "git-fixtures");
        assert_eq!(spec.repo, "basic");
        assert_eq!(spec.reference.as_deref(), Some("master"));
        assert_eq!(spec.path, "go/example.go");
    }

    #[test]
    fn test_marker_without_ref_is_a_path() {
        let spec = parse("github.com/owner/repo/tree");
        assert_eq!(spec.reference, None);
        assert_eq!(spec.path, "tree");
    }

    #[test]
    fn test_at_ref_shorthand() {
        let spec = parse("github.com/owner/repo@v1.2/docs");
        assert_eq!(spec.repo, "repo");
        assert_eq!(spec.reference.as_deref(), Some("v1.2"));
        assert_eq!(spec.path, "docs");
    }

    #[test]
    fn test_at_ref_overrides_marker_ref() {
        let spec = parse("https://github.com/owner/repo@dev/tree/main/src");
        assert_eq!(spec.reference.as_deref(), Some("dev"));
        assert_eq!(spec.path, "src");
    }

    #[test]
    fn test_git_suffix_and_www_host() {
        let spec = parse("http://www.github.com/owner/repo.git");
        assert_eq!(spec.repo, "repo");
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let spec = parse("https://github.com/owner/repo/blob/main/README.md?plain=1#L10");
        assert_eq!(spec.path, "README.md");
    }

    #[test]
    fn test_percent_encoded_segments_are_decoded() {
        let spec = parse("https://github.com/owner/repo/blob/main/docs/my%20notes.md");
        assert_eq!(spec.path, "docs/my notes.md");
    }

    #[test]
    fn test_rejects_missing_repo() {
        let err = RemoteSpec::parse("github.com/owner").unwrap_err();
        assert!(err.to_string().contains("expected github.com/<owner>/<repo>"));
    }

    #[test]
    fn test_rejects_empty_repo_name() {
        assert!(RemoteSpec::parse("github.com/owner/@main").is_err());
    }

    #[test]
    fn test_rejects_other_hosts() {
        let err = RemoteSpec::parse("https://gitlab.com/owner/repo").unwrap_err();
        assert!(err.to_string().contains("expected github.com host"));
    }

    #[test]
    fn test_file_label() {
        let spec = parse("github.com/owner/repo@main");
        assert_eq!(spec.file_label("src/lib.rs"), "github.com/owner/repo@main/src/lib.rs");
        let spec = parse("github.com/owner/repo");
        assert_eq!(spec.file_label("docs/a.md"), "github.com/owner/repo/docs/a.md");
    }
}
