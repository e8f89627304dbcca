// src/github/api.rs
//! Access to the GitHub REST contents endpoint.

use super::spec::RemoteSpec;
use crate::config::GitHubConfig;
use crate::constants::{GITHUB_API_VERSION, USER_AGENT};
use crate::errors::{Error, Result};
use crate::processing::{read_up_to, LimitedReadError};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

const ACCEPT_JSON: &str = "application/vnd.github+json";
const ACCEPT_RAW: &str = "application/vnd.github.raw+json";

/// The declared type of a contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
    /// Anything else (`symlink`, `submodule`, ...), with its declared name.
    Other(String),
}

impl From<String> for EntryKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "file" => EntryKind::File,
            "dir" => EntryKind::Dir,
            _ => EntryKind::Other(kind),
        }
    }
}

impl EntryKind {
    /// The name GitHub uses for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
            EntryKind::Other(kind) => kind,
        }
    }
}

/// One row of a contents listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    /// What the entry is.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Base name.
    #[serde(default)]
    pub name: String,
    /// Path from the repository root.
    pub path: String,
    /// Size in bytes as reported by GitHub (0 for directories).
    #[serde(default)]
    pub size: u64,
}

/// The two shapes of a contents response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// A directory listing, in the order GitHub returned it.
    Directory(Vec<ContentEntry>),
    /// A single object describing the requested path itself.
    Single(ContentEntry),
}

/// What the remote tree walk needs from a repository host.
pub trait ContentsApi {
    /// Lists `path` at `spec`'s ref. `""` is the repository root.
    fn list(&self, spec: &RemoteSpec, path: &str) -> Result<Listing>;
    /// Fetches the raw bytes of the file at `path`, bounded by the fetch ceiling.
    fn fetch_raw(&self, spec: &RemoteSpec, path: &str) -> Result<Vec<u8>>;
    /// The fetch ceiling in bytes.
    fn max_bytes(&self) -> u64;
}

/// Blocking client for `GET /repos/{owner}/{repo}/contents/{path}`.
///
/// To access private repositories or avoid API rate limits, pass a token (usually
/// from `GITHUB_TOKEN`) in the [`GitHubConfig`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_root: Url,
    max_bytes: u64,
}

impl GitHubClient {
    /// Builds a client with the user agent, API version and optional bearer token
    /// set as default headers.
    pub fn new(config: &GitHubConfig, max_bytes: u64) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        if let Some(token) = config.token.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::Config("GitHub token contains invalid characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
            debug!("Using GitHub token for authentication.");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Http {
                context: "github: failed to build HTTP client".to_string(),
                source: e,
            })?;
        let api_root = Url::parse(&config.api_root).map_err(|e| {
            Error::Config(format!("Invalid GitHub API URL '{}': {}", config.api_root, e))
        })?;

        Ok(Self {
            client,
            api_root,
            max_bytes,
        })
    }

    /// `{api_root}/repos/{owner}/{repo}/contents/{path}[?ref=...]`, with every path
    /// segment percent-encoded on its own.
    fn contents_url(&self, spec: &RemoteSpec, path: &str) -> Result<Url> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Invalid GitHub API URL '{}'", self.api_root)))?
            .pop_if_empty()
            .extend(["repos", spec.owner.as_str(), spec.repo.as_str(), "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        if let Some(reference) = &spec.reference {
            url.query_pairs_mut().append_pair("ref", reference);
        }
        Ok(url)
    }

    fn get(&self, url: &Url, accept: &'static str) -> Result<Response> {
        debug!("GET {}", url);
        self.client
            .get(url.clone())
            .header(header::ACCEPT, accept)
            .send()
            .map_err(|e| Error::Http {
                context: format!("github: request failed for {}", url),
                source: e,
            })
    }

    fn read_body(&self, response: Response, what: impl FnOnce() -> String) -> Result<Vec<u8>> {
        read_up_to(response, self.max_bytes).map_err(|e| match e {
            LimitedReadError::TooLarge => Error::TooLarge {
                what: what(),
                limit: self.max_bytes,
            },
            LimitedReadError::Io(source) => Error::Io {
                path: what(),
                source,
            },
        })
    }
}

impl ContentsApi for GitHubClient {
    #[tracing::instrument(level = "debug", skip(self, spec), fields(owner = %spec.owner, repo = %spec.repo))]
    fn list(&self, spec: &RemoteSpec, path: &str) -> Result<Listing> {
        let url = self.contents_url(spec, path)?;
        let response = self.get(&url, ACCEPT_JSON)?;
        let status = response.status();
        let body = self.read_body(response, || format!("github: response at {}", url))?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        parse_listing(&body)
    }

    #[tracing::instrument(level = "debug", skip(self, spec), fields(owner = %spec.owner, repo = %spec.repo))]
    fn fetch_raw(&self, spec: &RemoteSpec, path: &str) -> Result<Vec<u8>> {
        let url = self.contents_url(spec, path)?;
        let response = self.get(&url, ACCEPT_RAW)?;
        let status = response.status();
        if !status.is_success() {
            let body = self.read_body(response, String::new).unwrap_or_default();
            return Err(status_error(status, &body));
        }
        self.read_body(response, || format!("github: file {}", path))
    }

    fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

/// Decodes a contents body: a JSON array is a directory listing, anything else a
/// single object. An empty body is an empty listing.
pub fn parse_listing(body: &[u8]) -> Result<Listing> {
    let trimmed = body.trim_ascii();
    if trimmed.is_empty() {
        return Ok(Listing::Directory(Vec::new()));
    }
    if trimmed.starts_with(b"[") {
        serde_json::from_slice(trimmed)
            .map(Listing::Directory)
            .map_err(|e| Error::Decode {
                context: "github: decode dir listing failed".to_string(),
                source: e,
            })
    } else {
        serde_json::from_slice(trimmed)
            .map(Listing::Single)
            .map_err(|e| Error::Decode {
                context: "github: decode content failed".to_string(),
                source: e,
            })
    }
}

/// Builds the error for a non-success response, surfacing GitHub's `message`.
fn status_error(status: StatusCode, body: &[u8]) -> Error {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    Error::GitHubStatus {
        status: status.to_string(),
        message,
    }
}
