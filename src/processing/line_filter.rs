// src/processing/line_filter.rs

use std::io::{self, BufRead};

/// Returns `true` if a line survives filtering.
///
/// A line is dropped when, after trimming surrounding whitespace, it is empty or
/// starts with `//` or `#`. Lines that are not valid UTF-8 are trimmed of ASCII
/// whitespace only.
///
/// # Examples
/// ```
/// use pull::processing::is_retained;
///
/// assert!(is_retained(b"    let x = 1; // trailing comments stay"));
/// assert!(!is_retained(b"   # a shell comment"));
/// assert!(!is_retained(b"\t// a line comment"));
/// assert!(!is_retained(b"   "));
/// ```
pub fn is_retained(line: &[u8]) -> bool {
    let trimmed = match std::str::from_utf8(line) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => line.trim_ascii(),
    };
    !(trimmed.is_empty() || trimmed.starts_with(b"//") || trimmed.starts_with(b"#"))
}

/// Lazily yields the retained lines of `content`, without their line endings.
///
/// Lines are split on `\n` regardless of encoding; a trailing `\r` is treated as
/// part of the line ending.
pub fn retained_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    content
        .split(|byte| *byte == b'\n')
        .map(strip_carriage_return)
        .filter(|line| is_retained(line))
}

/// Filters an in-memory buffer, returning every retained line followed by `\n`.
///
/// # Examples
/// ```
/// use pull::processing::filter_bytes;
///
/// let source = b"# header\n\nfn main() {}\n    // note\n    body();\n";
/// assert_eq!(filter_bytes(source), b"fn main() {}\n    body();\n");
/// ```
pub fn filter_bytes(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());
    for line in retained_lines(content) {
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}

/// Streams `reader` line by line, appending each retained line (original, untrimmed)
/// plus a single `\n` to `out`.
///
/// Lines already appended stay in `out` if the reader fails part-way through.
pub fn filter_lines<R: BufRead>(mut reader: R, out: &mut Vec<u8>) -> io::Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        let without_newline = line.strip_suffix(b"\n").unwrap_or(&line);
        let content = strip_carriage_return(without_newline);
        if is_retained(content) {
            out.extend_from_slice(content);
            out.push(b'\n');
        }
    }
}

fn strip_carriage_return(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
