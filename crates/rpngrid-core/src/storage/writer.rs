//! Delimited-text export of evaluated values.

use crate::error::Result;
use rpngrid_engine::engine::{ERROR_MARKER, Grid};
use std::io::Write;
use std::path::Path;

use super::DEFAULT_DELIMITER;

/// How computed values are written back out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    pub delimiter: char,
    pub error_marker: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            delimiter: DEFAULT_DELIMITER,
            error_marker: ERROR_MARKER.to_string(),
        }
    }
}

/// Render every row, one line each. Cells without a value are written as
/// the error marker.
pub fn write_delimited_content(grid: &Grid, options: &WriteOptions) -> String {
    let delimiter = options.delimiter.to_string();
    let mut out = String::new();
    for row in grid.rows() {
        let fields: Vec<String> = row
            .iter()
            .map(|cell| match cell.value {
                Some(value) => value.display(&options.error_marker),
                None => options.error_marker.clone(),
            })
            .collect();
        out.push_str(&fields.join(&delimiter));
        out.push('\n');
    }
    out
}

/// Write rendered rows to any writer (e.g. stdout).
pub fn write_delimited_to<W: Write>(mut writer: W, grid: &Grid, options: &WriteOptions) -> Result<()> {
    writer.write_all(write_delimited_content(grid, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write rendered rows to a file.
pub fn write_delimited(path: &Path, grid: &Grid, options: &WriteOptions) -> Result<()> {
    std::fs::write(path, write_delimited_content(grid, options))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rpngrid_engine::engine::recalculate;

    fn evaluated(rows: &[&[&str]]) -> Grid {
        let mut grid = Grid::from_rows(rows.iter().map(|r| r.iter().copied()));
        recalculate(&mut grid);
        grid
    }

    #[test]
    fn test_write_values() {
        let grid = evaluated(&[&["3 4 +", "10 4 /"], &["A1 B1 *", "Q"]]);
        assert_eq!(
            write_delimited_content(&grid, &WriteOptions::default()),
            "7,2.5\n17.5,#ERR\n"
        );
    }

    #[test]
    fn test_write_custom_options() {
        let grid = evaluated(&[&["1", "A1"]]);
        let options = WriteOptions {
            delimiter: '\t',
            error_marker: "#N/A".to_string(),
        };
        assert_eq!(write_delimited_content(&grid, &options), "1\t1\n");

        let grid = evaluated(&[&["1 0 /", "2"]]);
        assert_eq!(write_delimited_content(&grid, &options), "#N/A\t2\n");
    }

    #[test]
    fn test_unevaluated_cells_written_as_marker() {
        let grid = Grid::from_rows([vec!["1"]]);
        assert_eq!(write_delimited_content(&grid, &WriteOptions::default()), "#ERR\n");
    }

    #[test]
    fn test_ragged_rows_keep_shape() {
        let grid = evaluated(&[&["1", "2", "3"], &["4"]]);
        assert_eq!(
            write_delimited_content(&grid, &WriteOptions::default()),
            "1,2,3\n4\n"
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let grid = evaluated(&[&["2 2 *"]]);
        write_delimited(&path, &grid, &WriteOptions::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "4\n");
    }

    #[test]
    fn test_write_to_buffer() {
        let grid = evaluated(&[&["5", "A1 2 *"]]);
        let mut buf = Vec::new();
        write_delimited_to(&mut buf, &grid, &WriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "5,10\n");
    }
}
