//! Document state and logic (UI-agnostic).

mod eval;
mod io;
mod state;

pub use eval::EvalSummary;
pub use state::Document;
