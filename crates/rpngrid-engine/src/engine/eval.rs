//! Postfix evaluation.
//!
//! A single operand stack of `f64`. Cell references read the already
//! computed value of the referenced cell, so cells must be evaluated in the
//! order produced by [`schedule`](super::schedule).

use tracing::{debug, trace};

use super::analyze::analyze;
use super::cell::{CellValue, Grid};
use super::cell_ref::CellRef;
use super::error::CellError;
use super::format::round_for_output;
use super::schedule::schedule;
use super::token::{Operator, Token, tokenize};

/// Evaluate one postfix expression.
///
/// `lookup` returns the computed value of a referenced cell, or None if the
/// cell does not exist or has not been evaluated yet.
pub fn evaluate_expression<F>(expression: &str, lookup: F) -> Result<f64, CellError>
where
    F: Fn(&CellRef) -> Option<CellValue>,
{
    let mut stack: Vec<f64> = Vec::new();

    for token in tokenize(expression) {
        match token {
            Token::Number(n) => stack.push(finite(n)?),
            Token::Reference(text) => {
                let cell_ref = CellRef::from_str(text)
                    .ok_or_else(|| CellError::OutOfBounds(text.to_string()))?;
                match lookup(&cell_ref) {
                    Some(CellValue::Number(n)) => stack.push(n),
                    Some(CellValue::Error) => return Err(CellError::Propagated(cell_ref)),
                    None => return Err(CellError::OutOfBounds(text.to_string())),
                }
            }
            Token::Operator(op) => {
                let right = stack.pop().ok_or(CellError::StackUnderflow)?;
                let left = stack.pop().ok_or(CellError::StackUnderflow)?;
                stack.push(apply(op, left, right)?);
            }
            Token::Invalid(text) => return Err(CellError::InvalidToken(text.to_string())),
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        rest => Err(CellError::Malformed {
            remaining: rest.len(),
        }),
    }
}

fn apply(op: Operator, left: f64, right: f64) -> Result<f64, CellError> {
    let result = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(CellError::DivisionByZero);
            }
            left / right
        }
    };
    finite(result)
}

fn finite(n: f64) -> Result<f64, CellError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(CellError::NonFinite)
    }
}

/// Evaluate cells in the given order, storing each result on the cell.
///
/// Cells flagged during analysis become [`CellValue::Error`] without being
/// evaluated. Returns the number of cells that ended up as errors.
pub fn evaluate(grid: &mut Grid, order: &[CellRef]) -> usize {
    let mut errors = 0usize;

    for cell_ref in order {
        let Some(cell) = grid.get(cell_ref) else {
            continue;
        };

        let value = if cell.has_error() {
            CellValue::Error
        } else {
            let result = evaluate_expression(&cell.expression, |r| {
                grid.get(r).and_then(|c| c.value)
            });
            match result {
                Ok(n) => CellValue::Number(round_for_output(n)),
                Err(error) => {
                    debug!(cell = %cell_ref, %error, "evaluation failed");
                    CellValue::Error
                }
            }
        };
        trace!(cell = %cell_ref, value = %value, "evaluated");

        if value.is_error() {
            errors += 1;
        }
        if let Some(cell) = grid.get_mut(cell_ref) {
            cell.value = Some(value);
        }
    }

    errors
}

/// Analyze, schedule and evaluate the whole grid. Returns the evaluation order.
pub fn recalculate(grid: &mut Grid) -> Vec<CellRef> {
    let completion = analyze(grid);
    let order = schedule(grid, completion);
    evaluate(grid, &order);
    order
}
