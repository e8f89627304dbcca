// src/config/parsing.rs

use crate::errors::{Error, Result};
use byte_unit::Byte;
use std::str::FromStr;

/// Parses the optional `--max-size` string into a byte count.
pub(super) fn parse_max_size(max_size_str: Option<&str>) -> Result<Option<u64>> {
    max_size_str
        .map(|s| {
            let bytes = Byte::from_str(s.trim())
                .map_err(|e| Error::Config(format!("Invalid size format: '{}': {}", s, e)))?
                .as_u128();
            if bytes == 0 {
                return Err(Error::Config(format!(
                    "Invalid size format: '{}': must be greater than zero",
                    s
                )));
            }
            u64::try_from(bytes)
                .map_err(|_| Error::Config(format!("Invalid size format: '{}': too large", s)))
        })
        .transpose()
}

/// Trims a credential; an empty one counts as absent.
pub(super) fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_max_size() -> Result<()> {
        // 'k' is an SI prefix
        assert_eq!(parse_max_size(Some("10k"))?, Some(10 * 1000));
        assert_eq!(parse_max_size(Some("2MiB"))?, Some(2 * 1024 * 1024));
        // Plain number is bytes
        assert_eq!(parse_max_size(Some("1024"))?, Some(1024));
        assert_eq!(parse_max_size(None)?, None);
        Ok(())
    }

    #[test]
    fn test_parse_invalid_max_size() {
        let result = parse_max_size(Some("invalid"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid size format"));
    }

    #[test]
    fn test_zero_max_size_is_rejected() {
        assert!(parse_max_size(Some("0")).is_err());
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token(Some("  ghp_abc \n".to_string())), Some("ghp_abc".to_string()));
        assert_eq!(normalize_token(Some("   ".to_string())), None);
        assert_eq!(normalize_token(None), None);
    }
}
