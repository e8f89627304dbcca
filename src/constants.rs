// src/constants.rs

use std::time::Duration;

/// Upper bound for any single fetched body (GitHub listing, raw file, href response).
pub const MAX_FETCH_BYTES: u64 = 5 << 20;

/// Root of the GitHub REST API.
pub const GITHUB_API_ROOT: &str = "https://api.github.com";

/// Value sent in the `X-GitHub-Api-Version` header.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Host used when labelling GitHub files in the output.
pub const GITHUB_HOST: &str = "github.com";

/// Client-agent string sent with every outgoing request.
pub const USER_AGENT: &str = "pull/1.0 (+clipboard)";

/// Environment variable holding an optional GitHub bearer token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GitHub API root.
pub const GITHUB_API_URL_ENV: &str = "PULL_GITHUB_API_URL";

/// Per-request timeout for the GitHub contents API.
pub const GITHUB_TIMEOUT: Duration = Duration::from_secs(20);

/// Per-request timeout for `href` fetches.
pub const HREF_TIMEOUT: Duration = Duration::from_secs(15);

/// Prefix of the header line preceding every file's content.
pub const FILE_HEADER_PREFIX: &str = "file: ";

/// Prefix of the header line preceding a fetched URL body.
pub const HREF_HEADER_PREFIX: &str = "href: ";

/// Prefix of the header line emitted once per GitHub operand.
pub const GITHUB_HEADER_PREFIX: &str = "github: ";
