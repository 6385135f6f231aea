use super::Document;
use rpngrid_engine::engine::{CellRef, analyze, evaluate, schedule};
use tracing::info;

/// Counts from one evaluation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalSummary {
    pub cells: usize,
    pub errors: usize,
}

impl Document {
    /// Evaluate every cell from scratch.
    ///
    /// Any results from a previous run are discarded first, so calling this
    /// repeatedly gives the same values.
    pub fn evaluate(&mut self) -> EvalSummary {
        self.grid.reset();

        let completion = analyze(&mut self.grid);
        self.order = schedule(&self.grid, completion);
        let errors = evaluate(&mut self.grid, &self.order);

        let summary = EvalSummary {
            cells: self.order.len(),
            errors,
        };
        info!(cells = summary.cells, errors = summary.errors, "evaluation complete");
        summary
    }

    /// Display string for a cell: its value, the error marker, or empty if
    /// the cell has not been evaluated or does not exist.
    pub fn get_cell_display(&self, cell_ref: &CellRef, error_marker: &str) -> String {
        self.grid
            .get(cell_ref)
            .and_then(|cell| cell.value)
            .map(|value| value.display(error_marker))
            .unwrap_or_default()
    }
}
