//! rpngrid-core - Document model + delimited-text storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Document, EvalSummary};
pub use error::{Result, RpngridError};

pub use rpngrid_engine::engine::{CellRef, ERROR_MARKER};
