//! Delimited-text import.
//!
//! Fields are raw postfix expressions. There is no quoting or escaping, so
//! an expression can never contain the delimiter.

use crate::error::{Result, RpngridError};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_DELIMITER: char = ',';

/// Larger inputs are refused rather than read into memory.
pub const MAX_INPUT_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// Validate a delimiter given as text (CLI flag or config value).
pub fn parse_delimiter(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => Err(RpngridError::InvalidDelimiter(text.to_string())),
    }
}

/// Split text into rows of raw expressions.
///
/// Every line is a row (a trailing `\r` is dropped); every delimiter starts
/// a new field, so trailing empty fields are kept.
pub fn parse_delimited(content: &str, delimiter: char) -> Vec<Vec<String>> {
    content
        .lines()
        .map(|line| line.split(delimiter).map(str::to_string).collect())
        .collect()
}

/// Read and split a file.
pub fn read_delimited(path: &Path, delimiter: char) -> Result<Vec<Vec<String>>> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_INPUT_FILE_BYTES {
        return Err(RpngridError::FileTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max: MAX_INPUT_FILE_BYTES,
        });
    }
    let content = std::fs::read_to_string(path)?;
    let rows = parse_delimited(&content, delimiter);
    debug!(path = %path.display(), rows = rows.len(), "loaded input");
    Ok(rows)
}
