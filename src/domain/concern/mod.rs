//! Concern module - Concerns, decisions, and run reports.
//!
//! These are disposable result objects built once per run; there is no
//! persistence layer behind them.

mod concern;
mod decision;

pub use concern::{Concern, RunReport};
pub use decision::Decision;
