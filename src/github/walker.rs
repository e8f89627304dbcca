// src/github/walker.rs
//! Walks a repository tree through a [`ContentsApi`] and collects its files.

use super::api::{ContentEntry, ContentsApi, EntryKind, Listing};
use super::spec::RemoteSpec;
use crate::errors::{Error, Result};
use crate::output::header::{push_file_header, push_github_header};
use crate::processing::filter_bytes;
use log::{debug, warn};

/// Pending work for the explicit stack walk.
enum Work {
    /// List a path and expand what it contains.
    List(String),
    /// Fetch a file and append it.
    Fetch(ContentEntry),
}

/// Collects everything under `spec` into `out`.
///
/// Emits `github: <label>` once, then `file: <label>` plus filtered lines for each
/// file. Entries are handled depth-first in the order the listing returns them.
/// Any error aborts the whole operand.
#[tracing::instrument(level = "debug", skip_all, fields(spec = %spec.label))]
pub fn collect_remote<A>(api: &A, spec: &RemoteSpec, out: &mut Vec<u8>) -> Result<()>
where
    A: ContentsApi + ?Sized,
{
    push_github_header(out, &spec.label);

    let mut stack = vec![Work::List(spec.path.clone())];
    while let Some(work) = stack.pop() {
        match work {
            Work::List(path) => match api.list(spec, &path)? {
                Listing::Directory(entries) => {
                    // Reversed so the first entry is popped first.
                    for entry in entries.into_iter().rev() {
                        match entry.kind {
                            EntryKind::Dir => stack.push(Work::List(entry.path)),
                            EntryKind::File => stack.push(Work::Fetch(entry)),
                            EntryKind::Other(ref kind) => {
                                debug!("Skipping {} entry {}", kind, entry.path)
                            }
                        }
                    }
                }
                Listing::Single(entry) => match entry.kind {
                    EntryKind::Dir if entry.path == path => {
                        warn!(
                            "Listing of {:?} described itself as a directory, nothing to collect",
                            path
                        )
                    }
                    EntryKind::Dir => stack.push(Work::List(entry.path)),
                    EntryKind::File => stack.push(Work::Fetch(entry)),
                    EntryKind::Other(kind) => {
                        return Err(Error::UnsupportedContent {
                            kind,
                            location: format!("{}/{}:{}", spec.owner, spec.repo, path),
                        })
                    }
                },
            },
            Work::Fetch(entry) => fetch_file(api, spec, &entry, out)?,
        }
    }
    Ok(())
}

fn fetch_file<A>(api: &A, spec: &RemoteSpec, entry: &ContentEntry, out: &mut Vec<u8>) -> Result<()>
where
    A: ContentsApi + ?Sized,
{
    let too_large = || Error::TooLarge {
        what: format!("github: file {}", entry.path),
        limit: api.max_bytes(),
    };
    if entry.size > api.max_bytes() {
        return Err(too_large());
    }
    let content = api.fetch_raw(spec, &entry.path)?;
    if content.len() as u64 > api.max_bytes() {
        return Err(too_large());
    }

    push_file_header(out, &spec.file_label(&entry.path));
    out.extend_from_slice(&filter_bytes(&content));
    Ok(())
}
