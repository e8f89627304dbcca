// src/processing/limited_reader.rs

use std::io::{self, Read};

/// Outcome of a bounded read that ran past its ceiling.
#[derive(Debug)]
pub enum LimitedReadError {
    /// The source held more than the allowed number of bytes.
    TooLarge,
    /// The source failed while being read.
    Io(io::Error),
}

/// Reads all of `reader`, failing with [`LimitedReadError::TooLarge`] if it yields
/// more than `max` bytes. Exactly `max` bytes is accepted; nothing is truncated.
pub fn read_up_to<R: Read>(reader: R, max: u64) -> Result<Vec<u8>, LimitedReadError> {
    let mut buffer = Vec::new();
    reader
        .take(max.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(LimitedReadError::Io)?;
    if buffer.len() as u64 > max {
        return Err(LimitedReadError::TooLarge);
    }
    Ok(buffer)
}
