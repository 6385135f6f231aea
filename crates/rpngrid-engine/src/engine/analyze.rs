//! Dependency analysis and cycle detection.
//!
//! Walks every cell depth-first, computing the transitive set of cells its
//! expression reaches and whether anything along the way is invalid. Each
//! cell is analyzed exactly once: later visitors reuse the cached result.
//!
//! The walk keeps its own three-colour marking (absent / in progress / done)
//! and an explicit frame stack, so nothing is stored on the cells while a
//! traversal is running and deep reference chains cannot exhaust the call
//! stack. Reaching a cell that is still in progress means a cycle.

use std::collections::HashMap;

use tracing::debug;

use super::cell::{Analysis, Cell, Grid};
use super::cell_ref::CellRef;
use super::error::CellError;
use super::token::{Token, tokenize};

/// Annotate every cell in the grid with its [`Analysis`].
///
/// Returns cells in the order their analysis completed (post-order of first
/// visit), which [`schedule`](super::schedule) turns into an evaluation order.
pub fn analyze(grid: &mut Grid) -> Vec<CellRef> {
    let (results, order) = Traversal::new(grid).run();

    let mut flagged = 0usize;
    for (cell_ref, analysis) in results {
        if analysis.has_error() {
            flagged += 1;
        }
        if let Some(cell) = grid.get_mut(&cell_ref) {
            cell.analysis = Some(analysis);
        }
    }
    debug!(cells = order.len(), flagged, "dependency analysis complete");

    order
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// One cell on the active path.
struct Frame<'g> {
    cell: CellRef,
    tokens: std::vec::IntoIter<Token<'g>>,
    /// Child we descended into; merged when control returns to this frame.
    pending: Option<CellRef>,
    analysis: Analysis,
    halted: bool,
}

impl Frame<'_> {
    fn record(&mut self, error: CellError) {
        if self.analysis.error.is_none() {
            self.analysis.error = Some(error);
        }
    }

    fn absorb(&mut self, child: CellRef, done: &Analysis) {
        self.analysis.dependencies.insert(child);
        self.analysis
            .dependencies
            .extend(done.dependencies.iter().copied());
        if done.has_error() {
            self.record(CellError::Propagated(child));
        }
    }
}

struct Traversal<'g> {
    grid: &'g Grid,
    marks: HashMap<CellRef, Mark>,
    results: HashMap<CellRef, Analysis>,
    order: Vec<CellRef>,
}

impl<'g> Traversal<'g> {
    fn new(grid: &'g Grid) -> Self {
        Traversal {
            grid,
            marks: HashMap::with_capacity(grid.len()),
            results: HashMap::with_capacity(grid.len()),
            order: Vec::with_capacity(grid.len()),
        }
    }

    fn run(mut self) -> (HashMap<CellRef, Analysis>, Vec<CellRef>) {
        let grid: &'g Grid = self.grid;
        for cell in grid.iter() {
            if !self.marks.contains_key(&cell.address) {
                self.visit(cell);
            }
        }
        (self.results, self.order)
    }

    fn visit(&mut self, root: &'g Cell) {
        let mut stack = vec![self.enter(root)];

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.take() {
                if let Some(done) = self.results.get(&child) {
                    frame.absorb(child, done);
                }
            }

            let next = if frame.halted {
                None
            } else {
                frame.tokens.next()
            };
            let Some(token) = next else {
                if let Some(finished) = stack.pop() {
                    self.finish(finished);
                }
                continue;
            };

            if let Some(child) = self.resolve(frame, token) {
                let child_frame = self.enter(child);
                stack.push(child_frame);
            }
        }
    }

    fn enter(&mut self, cell: &'g Cell) -> Frame<'g> {
        self.marks.insert(cell.address, Mark::InProgress);
        Frame {
            cell: cell.address,
            tokens: tokenize(&cell.expression).collect::<Vec<_>>().into_iter(),
            pending: None,
            analysis: Analysis::default(),
            halted: false,
        }
    }

    /// Apply one token to the frame. Returns a cell to descend into, if any.
    fn resolve(&self, frame: &mut Frame<'g>, token: Token<'g>) -> Option<&'g Cell> {
        let text = match token {
            Token::Number(_) | Token::Operator(_) => return None,
            Token::Invalid(text) => {
                frame.record(CellError::InvalidToken(text.to_string()));
                return None;
            }
            Token::Reference(text) => text,
        };

        let grid: &'g Grid = self.grid;
        let Some(target) = CellRef::locate(text, grid) else {
            frame.record(CellError::OutOfBounds(text.to_string()));
            return None;
        };
        if target.address == frame.cell {
            frame.record(CellError::SelfReference);
            return None;
        }

        match self.marks.get(&target.address) {
            Some(Mark::InProgress) => {
                debug!(cell = %frame.cell, target = %target.address, "circular reference");
                frame.record(CellError::Cycle(target.address));
                frame.halted = true;
                None
            }
            Some(Mark::Done) => {
                if let Some(done) = self.results.get(&target.address) {
                    frame.absorb(target.address, done);
                }
                None
            }
            None => {
                frame.pending = Some(target.address);
                Some(target)
            }
        }
    }

    fn finish(&mut self, frame: Frame<'g>) {
        if let Some(error) = &frame.analysis.error {
            debug!(cell = %frame.cell, %error, "cell flagged");
        }
        self.marks.insert(frame.cell, Mark::Done);
        self.order.push(frame.cell);
        self.results.insert(frame.cell, frame.analysis);
    }
}
