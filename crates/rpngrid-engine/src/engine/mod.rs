//! Spreadsheet engine API.
//!
//! - [`Cell`], [`Grid`], [`CellValue`], [`Analysis`] - Data structures for cell storage
//! - [`CellRef`] - Cell address parsing (A1 notation ↔ column/row indices)
//! - [`tokenize`] - Split a postfix expression into classified tokens
//! - [`analyze`] - Dependency sets, error flags and cycle detection
//! - [`schedule`] - Order cells so inputs are evaluated first
//! - [`evaluate`], [`evaluate_expression`] - Postfix stack evaluation
//! - [`recalculate`] - All of the above over a whole grid
//! - [`format_number`] - Format values for output

mod analyze;
mod cell;
mod cell_ref;
mod error;
mod eval;
mod format;
mod schedule;
mod token;

pub use analyze::analyze;
pub use cell::{Analysis, Cell, CellValue, Grid};
pub use cell_ref::CellRef;
pub use error::CellError;
pub use eval::{evaluate, evaluate_expression, recalculate};
pub use format::format_number;
pub use schedule::schedule;
pub use token::{Operator, Token, tokenize};

/// Written in place of a value for any cell that could not be evaluated.
pub const ERROR_MARKER: &str = "#ERR";
