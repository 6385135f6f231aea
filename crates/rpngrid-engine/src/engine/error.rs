//! Reasons a cell evaluates to the error marker.
//!
//! None of these reach the caller as a `Result::Err` from the grid-level
//! passes: they are recorded on the cell and collapse to a single flag
//! during analysis and to [`CellValue::Error`](super::CellValue) during
//! evaluation.

use thiserror::Error;

use super::cell_ref::CellRef;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum CellError {
    #[error("invalid token '{0}'")]
    InvalidToken(String),

    #[error("cell references itself")]
    SelfReference,

    #[error("reference '{0}' is outside the grid")]
    OutOfBounds(String),

    #[error("circular reference through {0}")]
    Cycle(CellRef),

    #[error("operator needs two operands")]
    StackUnderflow,

    #[error("expression leaves {remaining} values on the stack")]
    Malformed { remaining: usize },

    #[error("depends on erroneous cell {0}")]
    Propagated(CellRef),

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,
}
