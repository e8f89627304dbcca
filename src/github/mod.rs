// src/github/mod.rs
//! Collection of files straight from GitHub, without cloning.
//!
//! This module provides functionality to:
//! - Recognize and parse GitHub operands (`github.com/owner/repo@ref/path`, tree and blob URLs).
//! - List repository contents through the REST contents endpoint using `reqwest`.
//! - Walk the listed tree and append each file, line-filtered, to the output.

mod api;
mod spec;
mod walker;

pub use api::{parse_listing, ContentEntry, ContentsApi, EntryKind, GitHubClient, Listing};
pub use spec::{looks_like_github_spec, RemoteSpec};
pub use walker::collect_remote;
