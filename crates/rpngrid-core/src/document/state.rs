use rpngrid_engine::engine::{CellRef, Grid};
use std::path::PathBuf;

/// One evaluation run: the grid and everything computed about it.
///
/// Nothing is shared between documents, so separate grids can be evaluated
/// independently (including on different threads).
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// The spreadsheet grid
    pub grid: Grid,
    /// File the grid was loaded from, if any
    pub file_path: Option<PathBuf>,
    /// Evaluation order from the last run (empty before evaluation)
    pub(crate) order: Vec<CellRef>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap rows of raw expressions.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Document {
            grid: Grid::from_rows(rows),
            file_path: None,
            order: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Order used by the last evaluation.
    pub fn evaluation_order(&self) -> &[CellRef] {
        &self.order
    }

    /// Whether [`evaluate`](Self::evaluate) has run since the grid was loaded.
    pub fn is_evaluated(&self) -> bool {
        !self.grid.is_empty() && self.grid.iter().all(|c| c.value.is_some())
    }
}
