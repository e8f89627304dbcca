//! Fetches arbitrary URLs (`pull href <url>...`).
//!
//! Bodies are kept verbatim: the line filter is not applied to web content.

use crate::config::HrefConfig;
use crate::constants::USER_AGENT;
use crate::errors::{Error, Result};
use crate::output::header::push_href_header;
use crate::output::merge::ensure_trailing_newline;
use crate::processing::{read_up_to, LimitedReadError};
use log::debug;
use reqwest::blocking::Client;

/// Prefixes `https://` unless the input already has an http(s) scheme.
///
/// # Examples
/// ```
/// use pull::href::normalize_url;
///
/// assert_eq!(normalize_url("example.com/a"), "https://example.com/a");
/// assert_eq!(normalize_url(" http://example.com "), "http://example.com");
/// assert_eq!(normalize_url(""), "");
/// ```
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() || input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// A blocking client for single bounded GETs.
#[derive(Debug, Clone)]
pub struct HrefFetcher {
    client: Client,
    max_bytes: u64,
}

impl HrefFetcher {
    /// Builds a fetcher with the fixed user agent and the configured timeout.
    pub fn new(config: &HrefConfig, max_bytes: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Http {
                context: "href: failed to build HTTP client".to_string(),
                source: e,
            })?;
        Ok(Self { client, max_bytes })
    }

    /// Fetches `raw` (normalized first) and appends `href: <url>` plus the body to `out`.
    ///
    /// Nothing is appended unless the fetch succeeds.
    #[tracing::instrument(level = "debug", skip(self, out))]
    pub fn fetch_into(&self, raw: &str, out: &mut Vec<u8>) -> Result<()> {
        let url = normalize_url(raw);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().map_err(|e| Error::Http {
            context: format!("href: request failed for {:?}", url),
            source: e,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HrefStatus {
                url,
                status: status.to_string(),
            });
        }

        let mut body = read_up_to(response, self.max_bytes).map_err(|e| match e {
            LimitedReadError::TooLarge => Error::TooLarge {
                what: format!("href: response for {:?}", url),
                limit: self.max_bytes,
            },
            LimitedReadError::Io(source) => Error::Io {
                path: url.clone(),
                source,
            },
        })?;

        push_href_header(out, &url);
        ensure_trailing_newline(&mut body);
        out.append(&mut body);
        Ok(())
    }
}
