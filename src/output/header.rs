// src/output/header.rs

use crate::constants;

/// Appends `file: <label>\n`.
pub(crate) fn push_file_header(buffer: &mut Vec<u8>, label: &str) {
    push_header(buffer, constants::FILE_HEADER_PREFIX, label);
}

/// Appends `href: <url>\n`.
pub(crate) fn push_href_header(buffer: &mut Vec<u8>, url: &str) {
    push_header(buffer, constants::HREF_HEADER_PREFIX, url);
}

/// Appends `github: <label>\n`.
pub(crate) fn push_github_header(buffer: &mut Vec<u8>, label: &str) {
    push_header(buffer, constants::GITHUB_HEADER_PREFIX, label);
}

fn push_header(buffer: &mut Vec<u8>, prefix: &str, label: &str) {
    buffer.extend_from_slice(prefix.as_bytes());
    buffer.extend_from_slice(label.as_bytes());
    buffer.push(b'\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_single_lines() {
        let mut buffer = Vec::new();
        push_github_header(&mut buffer, "github.com/o/r");
        push_file_header(&mut buffer, "/abs/a.rs");
        push_href_header(&mut buffer, "https://example.com");
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "github: github.com/o/r\nfile: /abs/a.rs\nhref: https://example.com\n"
        );
    }
}
