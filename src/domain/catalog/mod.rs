//! Catalog module - The scored architecture-pattern catalog.
//!
//! The catalog is supplied once at construction (by a `MatrixSource`
//! adapter) and consumed read-only by the rest of the pipeline.

mod matrix;
mod pattern;

pub use matrix::ScoringMatrix;
pub use pattern::ArchitecturePattern;
