//! Collects local files and directories.
//!
//! The walk visits entries in file-name order and never fails as a whole: an
//! unreadable entry or file is logged and skipped so that its siblings are still
//! collected.

use crate::ignore_matcher::{absolute, IgnoreMatcher};
use crate::output::header::push_file_header;
use crate::processing::filter_lines;
use log::{debug, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use walkdir::WalkDir;

/// Walks a local path and appends every non-ignored file, filtered, to a buffer.
#[derive(Debug, Clone, Copy)]
pub struct LocalCollector<'a> {
    matcher: &'a IgnoreMatcher,
    include_ignored: bool,
}

impl<'a> LocalCollector<'a> {
    /// Creates a collector. With `include_ignored` the matcher is never consulted.
    pub fn new(matcher: &'a IgnoreMatcher, include_ignored: bool) -> Self {
        Self {
            matcher,
            include_ignored,
        }
    }

    /// Collects `root` (a file or a directory) into `out`.
    ///
    /// Each file contributes `file: <absolute-path>` followed by its retained lines.
    /// Ignored directories are pruned without visiting their contents.
    pub fn collect(&self, root: &Path, out: &mut Vec<u8>) {
        let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).display().to_string();
                    warn!("Skipping {}: {}", path, e);
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = entry.file_type().is_dir();

            if !self.include_ignored && self.matcher.is_ignored(path, is_dir) {
                if is_dir {
                    debug!("Pruning ignored directory {}", path.display());
                    entries.skip_current_dir();
                } else {
                    debug!("Skipping ignored file {}", path.display());
                }
                continue;
            }

            if is_dir {
                continue;
            }
            if entry.path_is_symlink() && path.is_dir() {
                debug!("Not following directory symlink {}", path.display());
                continue;
            }
            collect_file(path, out);
        }
    }
}

/// Appends one file: header first, then its filtered lines.
///
/// The header is written before the file is opened, so an unreadable file still
/// leaves a bare header line.
pub fn collect_file(path: &Path, out: &mut Vec<u8>) {
    let absolute_path = absolute(path);
    push_file_header(out, &absolute_path.display().to_string());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("Could not open {}: {}", path.display(), e);
            return;
        }
    };
    if let Err(e) = filter_lines(BufReader::new(file), out) {
        warn!("Could not read {}: {}", path.display(), e);
    }
}
