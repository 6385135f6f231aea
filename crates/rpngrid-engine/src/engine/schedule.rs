//! Evaluation ordering.
//!
//! Cells are evaluated in ascending order of dependency-set size. This is a
//! valid topological order because an error-free cell's dependency set holds
//! every referenced cell's address plus that cell's own dependencies, and
//! never its own address, so it is strictly larger than the set of anything
//! it reads. Cells with errors (cycles included) are not evaluated, so their
//! position does not matter.
//!
//! If a future feature lets an error-free cell read a cell whose set is not a
//! subset of its own, this needs a real topological sort.

use std::collections::HashSet;

use super::cell::{Cell, Grid};
use super::cell_ref::CellRef;

/// Sort a completion order (see [`analyze`](super::analyze)) into an
/// evaluation order. The sort is stable, so equal-sized cells keep their
/// completion order and the result is deterministic.
pub fn schedule(grid: &Grid, mut order: Vec<CellRef>) -> Vec<CellRef> {
    order.sort_by_key(|cell_ref| {
        grid.get(cell_ref)
            .and_then(Cell::dependencies)
            .map_or(0, HashSet::len)
    });
    order
}
