//! Cell data structures for the spreadsheet grid.
//!
//! - [`Cell`] - An address, its postfix expression, and the per-run results
//! - [`Analysis`] - Dependency set and error recorded by the analyzer
//! - [`CellValue`] - The evaluated result of a cell
//! - [`Grid`] - Row-major storage for cells, possibly ragged

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell_ref::CellRef;
use super::error::CellError;
use super::format::format_number;

/// Dependency information cached for a cell by [`analyze`](super::analyze).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analysis {
    /// Every cell reached from this cell's expression, directly or
    /// transitively. Never contains the cell itself.
    pub dependencies: HashSet<CellRef>,
    /// First problem found in the expression or anything it depends on.
    pub error: Option<CellError>,
}

impl Analysis {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// The evaluated result of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Already rounded to output precision.
    Number(f64),
    Error,
}

impl CellValue {
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error)
    }

    /// Render for output, using `error_marker` for errors.
    pub fn display(&self, error_marker: &str) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Error => error_marker.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(super::ERROR_MARKER))
    }
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug)]
pub struct Cell {
    pub address: CellRef,
    pub expression: String,
    /// Set once by the dependency analyzer.
    pub analysis: Option<Analysis>,
    /// Set once by the evaluator.
    pub value: Option<CellValue>,
}

impl Cell {
    pub fn new(address: CellRef, expression: &str) -> Cell {
        Cell {
            address,
            expression: expression.to_string(),
            analysis: None,
            value: None,
        }
    }

    /// True once analysis has flagged this cell. Unanalyzed cells report false.
    pub fn has_error(&self) -> bool {
        self.analysis.as_ref().is_some_and(Analysis::has_error)
    }

    /// Dependency set, or None before analysis.
    pub fn dependencies(&self) -> Option<&HashSet<CellRef>> {
        self.analysis.as_ref().map(|a| &a.dependencies)
    }
}

/// Row-major cell storage. Rows may differ in length.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from raw expressions, assigning addresses from position.
    pub fn from_rows<R, S>(rows: R) -> Grid
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, fields)| {
                fields
                    .into_iter()
                    .enumerate()
                    .map(|(col, expr)| Cell::new(CellRef::new(col, row), expr.as_ref()))
                    .collect()
            })
            .collect();
        Grid { rows }
    }

    /// Look up a cell. None means the address is outside the grid.
    pub fn get(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.rows.get(cell_ref.row)?.get(cell_ref.col)
    }

    pub fn get_mut(&mut self, cell_ref: &CellRef) -> Option<&mut Cell> {
        self.rows.get_mut(cell_ref.row)?.get_mut(cell_ref.col)
    }

    pub fn contains(&self, cell_ref: &CellRef) -> bool {
        self.get(cell_ref).is_some()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells across all rows.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Forget analysis and values so the grid can be evaluated again.
    pub fn reset(&mut self) {
        for cell in self.rows.iter_mut().flatten() {
            cell.analysis = None;
            cell.value = None;
        }
    }
}
