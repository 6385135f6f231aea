use super::Document;
use crate::error::Result;
use crate::storage::{WriteOptions, parse_delimited, read_delimited, write_delimited};
use std::path::Path;

impl Document {
    /// Build a document from delimited text.
    pub fn from_text(content: &str, delimiter: char) -> Self {
        Self::from_rows(parse_delimited(content, delimiter))
    }

    /// Load a delimited file, replacing the current grid.
    ///
    /// The document is left untouched if the file cannot be read.
    pub fn load_file(&mut self, path: &Path, delimiter: char) -> Result<()> {
        let rows = read_delimited(path, delimiter)?;
        *self = Self::from_rows(rows);
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Create a document from a file.
    pub fn open(path: &Path, delimiter: char) -> Result<Self> {
        let mut doc = Self::new();
        doc.load_file(path, delimiter)?;
        Ok(doc)
    }

    /// Write evaluated values to a file.
    pub fn write_file(&self, path: &Path, options: &WriteOptions) -> Result<()> {
        write_delimited(path, &self.grid, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RpngridError;
    use crate::storage::write_delimited_content;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_evaluate_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "5,A1 2 *\nA1 Q,Z99\n3 4,10 4 /\n").unwrap();

        let mut doc = Document::open(&input, ',').unwrap();
        assert_eq!(doc.file_path.as_deref(), Some(input.as_path()));
        doc.evaluate();
        doc.write_file(&output, &WriteOptions::default()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "5,10\n#ERR,#ERR\n#ERR,2.5\n"
        );
    }

    #[test]
    fn test_failed_load_keeps_document() {
        let mut doc = Document::from_text("1 2 +", ',');
        let dir = tempfile::tempdir().unwrap();
        let err = doc.load_file(&dir.path().join("nope.csv"), ',').unwrap_err();
        assert!(matches!(err, RpngridError::Io(_)));
        assert_eq!(doc.grid().len(), 1);
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_same_input_same_output() {
        let text = "B1 C1 +,C1 2 *,7\nA1 B1 -,A2 A2 *,1 3 /\n";
        let render = || {
            let mut doc = Document::from_text(text, ',');
            doc.evaluate();
            write_delimited_content(doc.grid(), &WriteOptions::default())
        };
        assert_eq!(render(), render());
        assert_eq!(render(), "21,14,7\n7,49,0.3\n");
    }
}
