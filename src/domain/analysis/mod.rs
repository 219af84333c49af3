//! Analysis Module - Pure domain services for weights and optimization.
//!
//! This module contains stateless functions that operate on domain objects
//! to derive quality weights and solve the per-category pattern selection
//! problem.
//!
//! # Components
//!
//! - `WeightAggregator` - Per-run and per-concern quality weight tallies plus
//!   truncating normalization
//! - `SelectionProgram` - 0-1 integer program over the scoring matrix
//!   (one binary variable per row, exactly-one constraint per category)
//! - `Optimizer` - Exact (branch-and-bound over the program) and greedy
//!   solving strategies with satisfaction score breakdown
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless; solver state is created fresh per
//! call, so the matrix may be shared across concurrent concern evaluations.

mod optimizer;
mod program;
mod weights;

pub use optimizer::{Optimizer, OptimizationOutcome, SolverStrategy};
pub use program::{ProgramSolution, SelectionProgram};
pub use weights::{QualityWeightsMode, WeightAggregator};
