//! Delimited-text storage: one grid row per line, one expression per field.

mod delimited;
mod writer;

pub use delimited::{
    DEFAULT_DELIMITER, MAX_INPUT_FILE_BYTES, parse_delimited, parse_delimiter, read_delimited,
};
pub use writer::{WriteOptions, write_delimited, write_delimited_content, write_delimited_to};
